// src/pipeline/summary.rs

use crate::model::records::Recommendation;

/// Offered lead times above this many days count as a lead-time risk.
pub const LEAD_TIME_RISK_DAYS: u32 = 10;

/// Supplier ratings below this count as a quality risk.
pub const RATING_RISK_FLOOR: f64 = 4.0;

/// Portfolio-level rollup of one recommendation run.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationSummary {
    pub parts_to_order: usize,
    /// Total spend if every recommendation is ordered as-is.
    pub total_investment_usd: f64,
    /// Mean winning score, 0.0 when there are no recommendations.
    pub avg_score: f64,
    /// Recommendations whose offered lead time exceeds [`LEAD_TIME_RISK_DAYS`].
    pub long_lead_time: usize,
    /// Recommendations whose supplier rating is below [`RATING_RISK_FLOOR`].
    pub low_rating: usize,
}

impl RecommendationSummary {
    pub fn from_recommendations(rows: &[Recommendation]) -> Self {
        let total_investment_usd = rows
            .iter()
            .map(|r| f64::from(r.recommend_qty) * r.unit_price_usd)
            .sum();

        let avg_score = if rows.is_empty() {
            0.0
        } else {
            rows.iter().map(|r| r.score).sum::<f64>() / rows.len() as f64
        };

        Self {
            parts_to_order: rows.len(),
            total_investment_usd,
            avg_score,
            long_lead_time: rows
                .iter()
                .filter(|r| r.lead_time_offer_days > LEAD_TIME_RISK_DAYS)
                .count(),
            low_rating: rows
                .iter()
                .filter(|r| r.supplier_rating < RATING_RISK_FLOOR)
                .count(),
        }
    }
}
