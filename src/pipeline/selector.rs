// src/pipeline/selector.rs

use std::collections::HashMap;

use crate::model::records::{NeedRow, Recommendation, SupplierQuote};
use crate::pipeline::config::ScoreScope;
use crate::policy::scoring::{CandidateRanges, ScoringWeights};

/// One admissible (need, quote) pairing.
struct Candidate<'a> {
    need: &'a NeedRow,
    quote: &'a SupplierQuote,
}

/// Picks the best supplier quote for each part that needs ordering.
///
/// Parts with no quotes drop out entirely; so do parts where no quote passes
/// the hard filters. Returning an empty list is a normal outcome.
pub fn select_suppliers(
    needs: &[NeedRow],
    quotes: &[SupplierQuote],
    scope: ScoreScope,
) -> Vec<Recommendation> {
    // =================================================================
    // STEP 1: Join needs with quotes and apply the hard filters.
    // A quote is only admissible if its minimum order fits the need and
    // its offered lead time fits the part's required lead time. Price and
    // rating cannot buy a quote past either condition.
    // =================================================================
    let mut quotes_by_part: HashMap<&str, Vec<&SupplierQuote>> = HashMap::new();
    for quote in quotes {
        quotes_by_part
            .entry(quote.part_id.as_str())
            .or_default()
            .push(quote);
    }

    // Candidates keep (need order, quote order), so all candidates of one
    // part are contiguous. Tie-breaking and per-part grouping below rely on
    // that.
    let mut candidates: Vec<Candidate> = Vec::new();
    for need in needs {
        if let Some(part_quotes) = quotes_by_part.get(need.part_id.as_str()) {
            for quote in part_quotes {
                if quote.moq <= need.need_qty && quote.lead_time_offer_days <= need.lead_time_days {
                    candidates.push(Candidate { need, quote });
                }
            }
        }
    }

    if candidates.is_empty() {
        return Vec::new();
    }

    // =================================================================
    // STEP 2: Score the survivors.
    // =================================================================
    let weights = ScoringWeights::default();
    let scores = match scope {
        ScoreScope::Global => {
            let ranges = CandidateRanges::from_metrics(candidates.iter().map(metrics))
                .expect("candidate set is non-empty");
            candidates
                .iter()
                .map(|c| score_candidate(&ranges, &weights, c))
                .collect::<Vec<f64>>()
        }
        ScoreScope::PerPart => {
            let mut scores = vec![0.0; candidates.len()];
            for (start, end) in part_groups(&candidates) {
                let group = &candidates[start..end];
                let ranges = CandidateRanges::from_metrics(group.iter().map(metrics))
                    .expect("group is non-empty");
                for (offset, candidate) in group.iter().enumerate() {
                    scores[start + offset] = score_candidate(&ranges, &weights, candidate);
                }
            }
            scores
        }
    };

    // =================================================================
    // STEP 3: Keep the top-scoring quote per part.
    // Strictly-greater comparison, so on a tie the earlier candidate wins.
    // =================================================================
    let mut recommendations = Vec::new();
    for (start, end) in part_groups(&candidates) {
        let mut best = start;
        for i in start + 1..end {
            if scores[i] > scores[best] {
                best = i;
            }
        }
        recommendations.push(to_recommendation(&candidates[best], scores[best]));
    }

    recommendations.sort_by(|a, b| a.part_id.cmp(&b.part_id));
    recommendations
}

fn metrics(candidate: &Candidate) -> (f64, f64, f64) {
    (
        candidate.quote.unit_price_usd,
        candidate.quote.lead_time_offer_days as f64,
        candidate.quote.supplier_rating,
    )
}

fn score_candidate(ranges: &CandidateRanges, weights: &ScoringWeights, c: &Candidate) -> f64 {
    ranges.score(
        weights,
        c.quote.unit_price_usd,
        c.quote.lead_time_offer_days as f64,
        c.quote.supplier_rating,
    )
}

/// Half-open (start, end) index ranges of the per-part runs in `candidates`.
fn part_groups(candidates: &[Candidate]) -> Vec<(usize, usize)> {
    let mut groups = Vec::new();
    let mut start = 0;
    while start < candidates.len() {
        let part_id = candidates[start].need.part_id.as_str();
        let mut end = start + 1;
        while end < candidates.len() && candidates[end].need.part_id == part_id {
            end += 1;
        }
        groups.push((start, end));
        start = end;
    }
    groups
}

fn to_recommendation(candidate: &Candidate, score: f64) -> Recommendation {
    let need = candidate.need;
    let quote = candidate.quote;

    // Never order below the supplier's minimum.
    let recommend_qty = need.need_qty.max(quote.moq);
    let reason = format!(
        "Price: ${:.2}, Lead time: {} days, Rating: {:.1}/5.0",
        quote.unit_price_usd, quote.lead_time_offer_days, quote.supplier_rating
    );

    Recommendation {
        part_id: need.part_id.clone(),
        name: need.name.clone(),
        supplier_id: quote.supplier_id.clone(),
        supplier_name: quote.supplier_name.clone(),
        recommend_qty,
        unit_price_usd: quote.unit_price_usd,
        lead_time_offer_days: quote.lead_time_offer_days,
        supplier_rating: quote.supplier_rating,
        score,
        reason,
    }
}
