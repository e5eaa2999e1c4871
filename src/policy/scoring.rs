// src/policy/scoring.rs

//! Min-max scoring of supplier quotes.
//!
//! Each admissible quote is scored on three normalized metrics (price, lead
//! time, rating) and the metrics are combined into a single weighted score in
//! [0, 1].

/// Weights that combine the three metric scores.
///
/// They must sum to 1.0 so the composite score stays in [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub price: f64,
    pub lead_time: f64,
    pub rating: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            price: 0.5,
            lead_time: 0.3,
            rating: 0.2,
        }
    }
}

impl ScoringWeights {
    /// Combines three normalized metric scores into the composite score.
    pub fn combine(&self, price_n: f64, lead_time_n: f64, rating_n: f64) -> f64 {
        self.price * price_n + self.lead_time * lead_time_n + self.rating * rating_n
    }
}

/// Observed min/max of a single metric across a candidate set.
#[derive(Debug, Clone, Copy)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    fn point(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    fn extend(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Min-max position of `value` within the range, in [0, 1].
    ///
    /// A degenerate range (all candidates share the same value) yields 0.5:
    /// the metric carries no information, so nobody gains or loses from it.
    pub fn position(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.5;
        }
        (value - self.min) / span
    }
}

/// The three metric ranges of one candidate set.
#[derive(Debug, Clone, Copy)]
pub struct CandidateRanges {
    pub price: MetricRange,
    pub lead_time: MetricRange,
    pub rating: MetricRange,
}

impl CandidateRanges {
    /// Builds the ranges from (price, lead time, rating) triples.
    /// Returns `None` for an empty candidate set.
    pub fn from_metrics<I>(metrics: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64, f64)>,
    {
        let mut iter = metrics.into_iter();
        let (price, lead_time, rating) = iter.next()?;

        let mut ranges = Self {
            price: MetricRange::point(price),
            lead_time: MetricRange::point(lead_time),
            rating: MetricRange::point(rating),
        };
        for (price, lead_time, rating) in iter {
            ranges.price.extend(price);
            ranges.lead_time.extend(lead_time);
            ranges.rating.extend(rating);
        }
        Some(ranges)
    }

    /// Scores one candidate against these ranges.
    ///
    /// Price and lead time are inverted (lower is better), rating is direct
    /// (higher is better).
    pub fn score(&self, weights: &ScoringWeights, price: f64, lead_time: f64, rating: f64) -> f64 {
        let price_n = 1.0 - self.price.position(price);
        let lead_time_n = 1.0 - self.lead_time.position(lead_time);
        let rating_n = self.rating.position(rating);
        weights.combine(price_n, lead_time_n, rating_n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_endpoints() {
        let range = MetricRange {
            min: 10.0,
            max: 20.0,
        };
        assert_eq!(range.position(10.0), 0.0);
        assert_eq!(range.position(20.0), 1.0);
        assert_eq!(range.position(15.0), 0.5);
    }

    #[test]
    fn test_degenerate_range_is_neutral() {
        let range = MetricRange {
            min: 7.0,
            max: 7.0,
        };
        assert_eq!(range.position(7.0), 0.5);
    }

    #[test]
    fn test_cheapest_fastest_best_rated_scores_one() {
        let ranges = CandidateRanges::from_metrics(vec![
            (10.0, 5.0, 4.8),
            (30.0, 12.0, 3.1),
        ])
        .unwrap();

        let weights = ScoringWeights::default();
        let best = ranges.score(&weights, 10.0, 5.0, 4.8);
        let worst = ranges.score(&weights, 30.0, 12.0, 3.1);

        assert!((best - 1.0).abs() < 1e-9);
        assert!(worst.abs() < 1e-9);
    }

    #[test]
    fn test_single_candidate_scores_half_everywhere() {
        let ranges = CandidateRanges::from_metrics(vec![(10.0, 5.0, 4.8)]).unwrap();
        let score = ranges.score(&ScoringWeights::default(), 10.0, 5.0, 4.8);
        // all three metrics are degenerate, so the composite is exactly 0.5
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_candidate_set_has_no_ranges() {
        assert!(CandidateRanges::from_metrics(Vec::new()).is_none());
    }

    #[test]
    fn test_score_stays_in_unit_interval() {
        let ranges = CandidateRanges::from_metrics(vec![
            (10.0, 5.0, 4.8),
            (30.0, 12.0, 3.1),
            (18.0, 7.0, 4.0),
        ])
        .unwrap();

        let weights = ScoringWeights::default();
        for (price, lt, rating) in [(10.0, 12.0, 3.1), (30.0, 5.0, 4.8), (18.0, 7.0, 4.0)] {
            let score = ranges.score(&weights, price, lt, rating);
            assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
        }
    }
}
