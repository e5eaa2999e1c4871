// src/pipeline/needs.rs

use std::collections::HashMap;

use crate::model::records::{InventoryRecord, NeedRow, Part};
use crate::pipeline::config::{ReorderParams, DEFAULT_LEAD_TIME_DAYS};
use crate::policy::stock::{reorder_point, safety_stock};

/// Joins inventory with part reference data and demand rates, applies the
/// stock policy, and returns one row per part that actually needs ordering.
///
/// Join semantics, in inventory input order:
/// * An inventory row whose part is missing from the catalog keeps a `None`
///   name instead of being dropped.
/// * A part without a demand rate gets 0.0.
/// * A part without a lead time gets [`DEFAULT_LEAD_TIME_DAYS`].
///
/// The need is the gap between the reorder point and net on-hand stock,
/// rounded to whole units and floored at zero. Rows with no need are dropped.
pub fn compute_needs(
    inventory: &[InventoryRecord],
    parts: &[Part],
    daily_rates: &HashMap<String, f64>,
    params: &ReorderParams,
) -> Vec<NeedRow> {
    let catalog: HashMap<&str, &Part> = parts.iter().map(|p| (p.part_id.as_str(), p)).collect();

    let mut rows = Vec::new();
    for record in inventory {
        let part = catalog.get(record.part_id.as_str()).copied();
        let name = part.map(|p| p.name.clone());
        let lead_time_days = part
            .and_then(|p| p.lead_time_days)
            .unwrap_or(DEFAULT_LEAD_TIME_DAYS);
        let daily_rate = daily_rates.get(&record.part_id).copied().unwrap_or(0.0);

        let ss = safety_stock(daily_rate, lead_time_days, params.service_level);
        let rop = reorder_point(daily_rate, lead_time_days, ss);
        // Reserved stock can exceed what is on hand, so the net goes signed.
        let net_on_hand = i64::from(record.on_hand) - i64::from(record.reserved);
        let need_qty = (rop - net_on_hand as f64).max(0.0).round() as u32;

        if need_qty > 0 {
            rows.push(NeedRow {
                part_id: record.part_id.clone(),
                name,
                daily_rate,
                lead_time_days,
                on_hand: record.on_hand,
                reserved: record.reserved,
                safety_stock: ss,
                reorder_point: rop,
                net_on_hand,
                need_qty,
            });
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(part_id: &str, lead_time_days: Option<u32>) -> Part {
        Part {
            part_id: part_id.to_string(),
            name: format!("{} name", part_id),
            lead_time_days,
        }
    }

    fn stock(part_id: &str, on_hand: u32, reserved: u32) -> InventoryRecord {
        InventoryRecord {
            part_id: part_id.to_string(),
            on_hand,
            reserved,
        }
    }

    fn rates(entries: &[(&str, f64)]) -> HashMap<String, f64> {
        entries
            .iter()
            .map(|(id, rate)| (id.to_string(), *rate))
            .collect()
    }

    #[test]
    fn test_need_is_rop_minus_net_on_hand() {
        let parts = vec![part("P-1", Some(9))];
        let inventory = vec![stock("P-1", 10, 2)];
        let daily_rates = rates(&[("P-1", 10.0)]);

        let rows = compute_needs(&inventory, &parts, &daily_rates, &ReorderParams::default());
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        // ss = 1.65 * 2.5 * 3 = 12.375, rop = 90 + 12.375 = 102.375
        assert!((row.safety_stock - 12.375).abs() < 1e-9);
        assert!((row.reorder_point - 102.375).abs() < 1e-9);
        assert_eq!(row.net_on_hand, 8);
        // round(102.375 - 8) = 94
        assert_eq!(row.need_qty, 94);
    }

    #[test]
    fn test_sufficient_stock_yields_no_row() {
        let parts = vec![part("P-1", Some(9))];
        let inventory = vec![stock("P-1", 500, 0)];
        let daily_rates = rates(&[("P-1", 10.0)]);

        let rows = compute_needs(&inventory, &parts, &daily_rates, &ReorderParams::default());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_unknown_part_keeps_row_without_name() {
        let inventory = vec![stock("P-9", 0, 0)];
        let daily_rates = rates(&[("P-9", 2.0)]);

        let rows = compute_needs(&inventory, &[], &daily_rates, &ReorderParams::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, None);
        assert_eq!(rows[0].lead_time_days, DEFAULT_LEAD_TIME_DAYS);
    }

    #[test]
    fn test_missing_rate_defaults_to_zero() {
        let parts = vec![part("P-1", Some(10))];
        // negative net stock, but zero demand means rop is 0 and the gap is
        // round(0 - (-3)) ... which is still positive
        let inventory = vec![stock("P-1", 0, 3)];

        let rows = compute_needs(&inventory, &parts, &rates(&[]), &ReorderParams::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].daily_rate, 0.0);
        assert_eq!(rows[0].need_qty, 3);
    }

    #[test]
    fn test_need_rounds_to_nearest_unit() {
        // rate 1.0, lead 4: ss = 1.65 * 0.25 * 2 = 0.825, rop = 4.825
        let parts = vec![part("P-1", Some(4))];
        let inventory = vec![stock("P-1", 0, 0)];
        let daily_rates = rates(&[("P-1", 1.0)]);

        let rows = compute_needs(&inventory, &parts, &daily_rates, &ReorderParams::default());
        assert_eq!(rows[0].need_qty, 5);
    }
}
