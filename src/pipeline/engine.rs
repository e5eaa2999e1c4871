// src/pipeline/engine.rs

use std::collections::HashSet;

use tracing::debug;

use crate::model::records::{DemandObservation, InventoryRecord, Part, Recommendation, SupplierQuote};
use crate::pipeline::config::{ReorderParams, DEMAND_WINDOW_DAYS};
use crate::pipeline::error::PipelineError;
use crate::pipeline::needs::compute_needs;
use crate::pipeline::selector::select_suppliers;
use crate::policy::estimator::estimate_daily_rates;

/// Runs the full replenishment pipeline over one snapshot of the four input
/// tables.
///
/// Pure function of its inputs: no hidden state, no I/O, and the same inputs
/// always produce the same rows in the same order. An empty result is a
/// normal outcome (nothing needs reordering, or nothing admissible exists),
/// never an error. Errors are reserved for structurally invalid input.
pub fn recommend(
    parts: &[Part],
    inventory: &[InventoryRecord],
    demand: &[DemandObservation],
    quotes: &[SupplierQuote],
    params: &ReorderParams,
) -> Result<Vec<Recommendation>, PipelineError> {
    validate_inputs(parts, inventory, demand, quotes)?;

    let rates = estimate_daily_rates(demand, DEMAND_WINDOW_DAYS);
    debug!(parts = rates.len(), "estimated daily demand rates");

    let needs = compute_needs(inventory, parts, &rates, params);
    debug!(rows = needs.len(), "parts below reorder point");
    if needs.is_empty() {
        return Ok(Vec::new());
    }

    let recommendations = select_suppliers(&needs, quotes, params.score_scope);
    debug!(rows = recommendations.len(), "recommendations selected");

    Ok(recommendations)
}

/// Rejects structurally broken input instead of letting it flow through the
/// joins and come out looking like a valid (and wrong) answer.
fn validate_inputs(
    parts: &[Part],
    inventory: &[InventoryRecord],
    demand: &[DemandObservation],
    quotes: &[SupplierQuote],
) -> Result<(), PipelineError> {
    if parts.iter().any(|p| p.part_id.trim().is_empty()) {
        return Err(PipelineError::BlankPartId { table: "parts" });
    }

    let mut seen = HashSet::new();
    for record in inventory {
        if record.part_id.trim().is_empty() {
            return Err(PipelineError::BlankPartId { table: "inventory" });
        }
        if !seen.insert(record.part_id.as_str()) {
            return Err(PipelineError::DuplicateInventory {
                part_id: record.part_id.clone(),
            });
        }
    }

    for obs in demand {
        if obs.part_id.trim().is_empty() {
            return Err(PipelineError::BlankPartId { table: "demand" });
        }
        // blank and NaN quantities are legitimate (they get discarded by the
        // estimator), negative demand is not
        if let Some(qty) = obs.qty {
            if qty < 0.0 {
                return Err(PipelineError::InvalidObservation {
                    part_id: obs.part_id.clone(),
                    date: obs.date,
                    reason: format!("negative qty {}", qty),
                });
            }
        }
    }

    for quote in quotes {
        if quote.part_id.trim().is_empty() {
            return Err(PipelineError::BlankPartId { table: "quotes" });
        }
        if !(quote.unit_price_usd > 0.0 && quote.unit_price_usd.is_finite()) {
            return Err(invalid_quote(quote, "unit price must be positive"));
        }
        if quote.moq < 1 {
            return Err(invalid_quote(quote, "moq must be at least 1"));
        }
        if !(0.0..=5.0).contains(&quote.supplier_rating) {
            return Err(invalid_quote(quote, "rating must be within 0..=5"));
        }
    }

    Ok(())
}

fn invalid_quote(quote: &SupplierQuote, reason: &str) -> PipelineError {
    PipelineError::InvalidQuote {
        part_id: quote.part_id.clone(),
        supplier_id: quote.supplier_id.clone(),
        reason: reason.to_string(),
    }
}
