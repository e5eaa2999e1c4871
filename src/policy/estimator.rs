// src/policy/estimator.rs

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::model::records::DemandObservation;

/// Estimates a daily demand rate per part from raw demand history using a
/// trailing simple moving average.
///
/// This is deliberately a proxy, not a forecast: the mean of the last
/// `window` daily totals, nothing more.
///
/// Rules:
/// * Observations on the same (part, date) are summed into one daily value.
/// * A day whose observations are all blank stays blank and is dropped from
///   the average, while still occupying its slot in the trailing window.
/// * If nothing numeric survives, the rate is 0.0. Never an error.
/// * Parts with no observations at all are absent from the returned map;
///   callers treat absence as a rate of 0.0.
pub fn estimate_daily_rates(
    observations: &[DemandObservation],
    window: usize,
) -> HashMap<String, f64> {
    // BTreeMap keeps each part's days in chronological order, which is what
    // makes "the last `window` values" well-defined.
    let mut daily: HashMap<String, BTreeMap<NaiveDate, Option<f64>>> = HashMap::new();

    for obs in observations {
        let day = daily
            .entry(obs.part_id.clone())
            .or_default()
            .entry(obs.date)
            .or_insert(None);

        if let Some(qty) = obs.qty {
            if qty.is_finite() {
                *day = Some(day.unwrap_or(0.0) + qty);
            }
        }
    }

    let mut rates = HashMap::with_capacity(daily.len());
    for (part_id, days) in daily {
        let values: Vec<Option<f64>> = days.into_values().collect();
        let tail = &values[values.len().saturating_sub(window)..];
        let numeric: Vec<f64> = tail.iter().filter_map(|v| *v).collect();

        let rate = if numeric.is_empty() {
            0.0
        } else {
            numeric.iter().sum::<f64>() / numeric.len() as f64
        };
        rates.insert(part_id, rate);
    }

    rates
}
