// src/pipeline/error.rs

use chrono::NaiveDate;
use thiserror::Error;

/// Structural problems in the input tables.
///
/// These fail the whole call. Everything softer (missing demand, missing lead
/// time, degenerate scoring ranges, unknown service levels) is handled by the
/// pipeline's named fallbacks instead of erroring.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("blank part_id in {table} table")]
    BlankPartId { table: &'static str },

    #[error("duplicate inventory record for part {part_id}")]
    DuplicateInventory { part_id: String },

    #[error("invalid quote from {supplier_id} for part {part_id}: {reason}")]
    InvalidQuote {
        part_id: String,
        supplier_id: String,
        reason: String,
    },

    #[error("invalid demand observation for part {part_id} on {date}: {reason}")]
    InvalidObservation {
        part_id: String,
        date: NaiveDate,
        reason: String,
    },
}
