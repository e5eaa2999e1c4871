// src/policy/stock.rs

/// Module for stock policy calculations.
///
/// This module derives the two classic continuous-review quantities, safety
/// stock and reorder point, from a daily demand rate and a lead time.

/// Z-score lookup for the supported service levels.
///
/// The table is intentionally small: these four levels are the ones the
/// planning side actually offers.
const Z_TABLE: [(f64, f64); 4] = [(0.90, 1.28), (0.95, 1.65), (0.98, 2.05), (0.99, 2.33)];

/// Z-score applied when a service level does not match any table entry.
pub const FALLBACK_Z: f64 = 1.65;

/// Demand variability proxy: sigma is taken as a fixed fraction of the daily
/// rate instead of being estimated from historical variance.
pub const SIGMA_FACTOR: f64 = 0.25;

/// Looks up the z-score for a target service level.
///
/// Any level that is not one of the four table entries silently falls back to
/// [`FALLBACK_Z`], the 0.95 value.
pub fn z_for_service_level(service_level: f64) -> f64 {
    Z_TABLE
        .iter()
        .find(|&&(level, _)| (level - service_level).abs() < 1e-9)
        .map(|&(_, z)| z)
        .unwrap_or(FALLBACK_Z)
}

/// Calculates the safety stock buffer for one part.
///
/// # Formula
/// SafetyStock = Z * sigma * sqrt(LeadTime)
///
/// Where:
/// - Z = z-score for the target service level
/// - sigma = [`SIGMA_FACTOR`] * daily_rate
///
/// Returns 0.0 when the lead time is below one day or the daily rate is
/// negative. A negative rate should not occur, but a buffer computed from one
/// would be meaningless.
pub fn safety_stock(daily_rate: f64, lead_time_days: u32, service_level: f64) -> f64 {
    if lead_time_days < 1 || daily_rate < 0.0 {
        return 0.0;
    }

    let z = z_for_service_level(service_level);
    let sigma = SIGMA_FACTOR * daily_rate;

    (z * sigma * (lead_time_days as f64).sqrt()).max(0.0)
}

/// Calculates the reorder point: expected demand over the lead time plus the
/// safety stock buffer. Both terms are non-negative, so no floor is needed.
pub fn reorder_point(daily_rate: f64, lead_time_days: u32, safety_stock: f64) -> f64 {
    daily_rate * lead_time_days as f64 + safety_stock
}
