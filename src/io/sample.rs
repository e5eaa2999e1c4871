// src/io/sample.rs

use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use rand_distr::{Distribution, Normal};

use crate::io::loading::Dataset;
use crate::model::records::{DemandObservation, InventoryRecord, Part, SupplierQuote};

const SUPPLIER_POOL: [&str; 6] = [
    "Apex Components",
    "Borealis Supply",
    "Cobalt Industrial",
    "Delta Parts Co",
    "Eastgate Trading",
    "Ferrum Works",
];

/// Generates a synthetic dataset for demo runs when no data directory is
/// supplied.
///
/// Each part gets a demand history drawn from a Normal (Bell Curve)
/// distribution around its own mean rate, with negative samples clamped to
/// zero and the occasional blank cell, which is what real history exports
/// look like.
///
/// # Arguments
/// * `part_count` - Number of parts to generate.
/// * `history_days` - Length of the demand history per part.
pub fn generate_sample_dataset(part_count: usize, history_days: usize) -> Dataset {
    let mut rng = thread_rng();
    let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
    let start = today - Duration::days(history_days as i64);

    let mut parts = Vec::with_capacity(part_count);
    let mut inventory = Vec::with_capacity(part_count);
    let mut demand = Vec::new();
    let mut quotes = Vec::new();

    for i in 0..part_count {
        let part_id = format!("P-{:03}", i + 1);
        let mean_rate: f64 = rng.gen_range(0.5..10.0);

        parts.push(Part {
            part_id: part_id.clone(),
            name: format!("Spare part {:03}", i + 1),
            // some catalogs simply lack the lead time column
            lead_time_days: if rng.gen_bool(0.8) {
                Some(rng.gen_range(5..=20))
            } else {
                None
            },
        });

        inventory.push(InventoryRecord {
            part_id: part_id.clone(),
            on_hand: rng.gen_range(0..=(mean_rate * 25.0) as u32 + 5),
            reserved: rng.gen_range(0..=3),
        });

        let normal = Normal::new(mean_rate, mean_rate * 0.3).unwrap();
        for day in 0..history_days {
            let date = start + Duration::days(day as i64);

            // A couple of percent of the cells come through blank.
            let qty = if rng.gen_bool(0.02) {
                None
            } else {
                // Round to whole units and clamp negatives to 0,
                // demand cannot be negative.
                let val: f64 = normal.sample(&mut rng);
                Some(val.round().max(0.0))
            };

            demand.push(DemandObservation {
                part_id: part_id.clone(),
                date,
                qty,
            });
        }

        let base_price: f64 = rng.gen_range(4.0..60.0);
        let quote_count = rng.gen_range(2..=4);
        let suppliers: Vec<(usize, &&str)> = SUPPLIER_POOL
            .iter()
            .enumerate()
            .collect::<Vec<_>>()
            .choose_multiple(&mut rng, quote_count)
            .cloned()
            .collect();

        for (idx, supplier_name) in suppliers {
            let price = base_price * rng.gen_range(0.85..1.25);
            quotes.push(SupplierQuote {
                part_id: part_id.clone(),
                supplier_id: format!("S-{:02}", idx + 1),
                supplier_name: supplier_name.to_string(),
                unit_price_usd: (price * 100.0).round() / 100.0,
                lead_time_offer_days: rng.gen_range(3..=21),
                supplier_rating: rng.gen_range(25..=50) as f64 / 10.0,
                moq: rng.gen_range(1..=6) * 5,
            });
        }
    }

    (parts, inventory, demand, quotes)
}
