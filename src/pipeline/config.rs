// src/pipeline/config.rs

/// Lead time assumed for parts whose reference data does not carry one.
pub const DEFAULT_LEAD_TIME_DAYS: u32 = 14;

/// Service level applied when the caller does not choose one.
pub const DEFAULT_SERVICE_LEVEL: f64 = 0.95;

/// Planning period offered on the configuration surface.
pub const DEFAULT_REVIEW_HORIZON_DAYS: u32 = 30;

/// Trailing window, in daily buckets, of the demand-rate moving average.
pub const DEMAND_WINDOW_DAYS: usize = 28;

/// Scope over which quote metrics are min-max normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreScope {
    /// Ranges span every admissible candidate in the batch. A quote's score
    /// is therefore influenced by the price and lead-time spread of
    /// candidates for other parts in the same run. This is the historical
    /// behavior and the default.
    #[default]
    Global,
    /// Ranges are computed within each part's own candidate set, so rankings
    /// are self-contained per part.
    PerPart,
}

/// Reorder policy parameters, passed explicitly to every pipeline call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReorderParams {
    /// Planning period in days. Informational only: the demand window is
    /// fixed at [`DEMAND_WINDOW_DAYS`] and does not follow this value.
    pub review_horizon_days: u32,
    /// Target probability of not stocking out during lead time.
    pub service_level: f64,
    pub score_scope: ScoreScope,
}

impl Default for ReorderParams {
    fn default() -> Self {
        Self {
            review_horizon_days: DEFAULT_REVIEW_HORIZON_DAYS,
            service_level: DEFAULT_SERVICE_LEVEL,
            score_scope: ScoreScope::Global,
        }
    }
}
