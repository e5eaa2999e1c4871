// tests/pipeline_test.rs
//
// End-to-end runs of the replenishment pipeline over small hand-built
// datasets, plus the CSV export contract.

use chrono::{Duration, NaiveDate};

use replenish_engine::io::reporting;
use replenish_engine::logging;
use replenish_engine::model::records::{
    DemandObservation, InventoryRecord, Part, SupplierQuote,
};
use replenish_engine::pipeline::config::ReorderParams;
use replenish_engine::pipeline::engine::recommend;

fn part(part_id: &str, name: &str, lead_time_days: Option<u32>) -> Part {
    Part {
        part_id: part_id.to_string(),
        name: name.to_string(),
        lead_time_days,
    }
}

fn inventory(part_id: &str, on_hand: u32, reserved: u32) -> InventoryRecord {
    InventoryRecord {
        part_id: part_id.to_string(),
        on_hand,
        reserved,
    }
}

/// Constant demand of `qty` per day for `days` days.
fn steady_demand(part_id: &str, qty: f64, days: usize) -> Vec<DemandObservation> {
    let start = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
    (0..days)
        .map(|d| DemandObservation {
            part_id: part_id.to_string(),
            date: start + Duration::days(d as i64),
            qty: Some(qty),
        })
        .collect()
}

fn quote(
    part_id: &str,
    supplier_id: &str,
    price: f64,
    lead_time: u32,
    rating: f64,
    moq: u32,
) -> SupplierQuote {
    SupplierQuote {
        part_id: part_id.to_string(),
        supplier_id: supplier_id.to_string(),
        supplier_name: format!("{} Co", supplier_id),
        unit_price_usd: price,
        lead_time_offer_days: lead_time,
        supplier_rating: rating,
        moq,
    }
}

#[test]
fn test_end_to_end_single_part() {
    logging::init_test();

    // daily rate 4 over a steady 30-day history, lead time 10:
    //   ss  = 1.65 * 1.0 * sqrt(10) ~ 5.22
    //   rop = 40 + 5.22 ~ 45.22
    //   need = round(45.22 - 5) = 40
    let parts = vec![part("P-100", "Hydraulic seal", Some(10))];
    let inv = vec![inventory("P-100", 5, 0)];
    let demand = steady_demand("P-100", 4.0, 30);
    let quotes = vec![
        // moq 50 exceeds the need of 40, inadmissible no matter the price
        quote("P-100", "S-1", 1.0, 5, 5.0, 50),
        quote("P-100", "S-2", 3.5, 7, 4.5, 20),
    ];

    let recs = recommend(&parts, &inv, &demand, &quotes, &ReorderParams::default()).unwrap();

    assert_eq!(recs.len(), 1);
    let rec = &recs[0];
    assert_eq!(rec.part_id, "P-100");
    assert_eq!(rec.name.as_deref(), Some("Hydraulic seal"));
    assert_eq!(rec.supplier_id, "S-2");
    assert_eq!(rec.recommend_qty, 40);
    assert!((0.0..=1.0).contains(&rec.score));
    assert_eq!(rec.reason, "Price: $3.50, Lead time: 7 days, Rating: 4.5/5.0");
}

#[test]
fn test_sufficient_stock_produces_empty_output() {
    let parts = vec![part("P-1", "Bolt", Some(10))];
    let inv = vec![inventory("P-1", 10_000, 0)];
    let demand = steady_demand("P-1", 4.0, 30);
    let quotes = vec![quote("P-1", "S-1", 1.0, 5, 5.0, 1)];

    let recs = recommend(&parts, &inv, &demand, &quotes, &ReorderParams::default()).unwrap();
    assert!(recs.is_empty());
}

#[test]
fn test_part_without_admissible_quote_is_absent() {
    let parts = vec![
        part("P-1", "Bolt", Some(10)),
        part("P-2", "Washer", Some(10)),
    ];
    let inv = vec![inventory("P-1", 0, 0), inventory("P-2", 0, 0)];
    let mut demand = steady_demand("P-1", 4.0, 30);
    demand.extend(steady_demand("P-2", 4.0, 30));

    let quotes = vec![
        quote("P-1", "S-1", 3.5, 7, 4.5, 20),
        // offered lead time is longer than P-2 can wait
        quote("P-2", "S-2", 3.5, 15, 4.5, 20),
    ];

    let recs = recommend(&parts, &inv, &demand, &quotes, &ReorderParams::default()).unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].part_id, "P-1");
}

#[test]
fn test_part_missing_from_catalog_still_gets_recommended() {
    // inventory references a part the catalog does not know; the row is
    // kept with no name and the default 14-day lead time
    let inv = vec![inventory("P-9", 0, 0)];
    let demand = steady_demand("P-9", 2.0, 30);
    let quotes = vec![quote("P-9", "S-1", 3.5, 14, 4.5, 5)];

    let recs = recommend(&[], &inv, &demand, &quotes, &ReorderParams::default()).unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].name, None);
}

#[test]
fn test_pipeline_is_idempotent() {
    let parts = vec![
        part("P-1", "Bolt", Some(10)),
        part("P-2", "Washer", None),
        part("P-3", "Gasket", Some(21)),
    ];
    let inv = vec![
        inventory("P-1", 5, 0),
        inventory("P-2", 0, 4),
        inventory("P-3", 90, 10),
    ];
    let mut demand = steady_demand("P-1", 4.0, 30);
    demand.extend(steady_demand("P-2", 1.5, 45));
    demand.extend(steady_demand("P-3", 6.0, 10));
    let quotes = vec![
        quote("P-1", "S-1", 12.0, 9, 3.9, 10),
        quote("P-1", "S-2", 9.5, 10, 4.2, 25),
        quote("P-2", "S-3", 2.0, 12, 4.8, 5),
        quote("P-3", "S-1", 30.0, 20, 3.5, 10),
        quote("P-3", "S-4", 28.0, 14, 4.1, 40),
    ];
    let params = ReorderParams::default();

    let first = recommend(&parts, &inv, &demand, &quotes, &params).unwrap();
    let second = recommend(&parts, &inv, &demand, &quotes, &params).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_csv_export_writes_header_even_when_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recommendations.csv");

    reporting::write_recommendations(&path, &[]).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents.trim_end(),
        "part_id,name,supplier_id,supplier_name,recommend_qty,unit_price_usd,\
         lead_time_offer_days,supplier_rating,score,reason"
    );
}

#[test]
fn test_csv_export_roundtrip_row_count() {
    let parts = vec![part("P-1", "Bolt", Some(10))];
    let inv = vec![inventory("P-1", 0, 0)];
    let demand = steady_demand("P-1", 4.0, 30);
    let quotes = vec![quote("P-1", "S-1", 3.5, 7, 4.5, 20)];

    let recs = recommend(&parts, &inv, &demand, &quotes, &ReorderParams::default()).unwrap();
    assert_eq!(recs.len(), 1);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recommendations.csv");
    reporting::write_recommendations(&path, &recs).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.trim_end().lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("part_id,"));
    assert!(lines[1].starts_with("P-1,Bolt,S-1,"));
}
