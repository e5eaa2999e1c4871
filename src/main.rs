use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use replenish_engine::io::{loading, reporting, sample};
use replenish_engine::logging;
use replenish_engine::pipeline::config::ReorderParams;
use replenish_engine::pipeline::engine;
use replenish_engine::pipeline::summary::RecommendationSummary;

fn main() -> anyhow::Result<()> {
    logging::init();
    println!("=== Spare Parts Replenishment Advisor ===");

    // 1. SETUP CONFIGURATION
    // Defaults: 95% service level, 30-day review horizon, batch-wide
    // score normalization.
    let params = ReorderParams::default();

    // 2. LOAD OR GENERATE INPUT DATA
    // Pass a directory containing parts.csv, inventory.csv,
    // demand_history.csv and supplier_quotes.csv; without one, a synthetic
    // dataset is generated so the advisor can be tried out immediately.
    let (parts, inventory, demand, quotes) = match env::args().nth(1) {
        Some(dir) => {
            let dir = PathBuf::from(dir);
            info!(dir = %dir.display(), "loading dataset");
            loading::load_dataset(&dir)
                .with_context(|| format!("loading dataset from {}", dir.display()))?
        }
        None => {
            println!("No data directory given, generating a sample dataset.");
            sample::generate_sample_dataset(12, 120)
        }
    };
    println!(
        "Inputs: {} parts, {} inventory rows, {} demand observations, {} quotes",
        parts.len(),
        inventory.len(),
        demand.len(),
        quotes.len()
    );

    // 3. RUN THE RECOMMENDATION PIPELINE
    let recommendations = engine::recommend(&parts, &inventory, &demand, &quotes, &params)?;

    // 4. PRINT RECOMMENDATIONS
    if recommendations.is_empty() {
        println!("\nNothing to reorder: every part is at or above its reorder point.");
    } else {
        println!("\n=== Recommendations ===");
        for rec in &recommendations {
            println!(
                "{} ({}): order {} from {} [score {:.3}] - {}",
                rec.part_id,
                rec.name.as_deref().unwrap_or("unknown part"),
                rec.recommend_qty,
                rec.supplier_name,
                rec.score,
                rec.reason
            );
        }
    }

    // 5. PORTFOLIO SUMMARY
    let summary = RecommendationSummary::from_recommendations(&recommendations);
    println!("\n=== Portfolio Summary ===");
    println!("Parts to order: {}", summary.parts_to_order);
    println!("Total investment: ${:.2}", summary.total_investment_usd);
    println!("Average score: {:.3}", summary.avg_score);
    if summary.long_lead_time > 0 {
        println!(
            "Lead time risk: {} supplier(s) above 10 days",
            summary.long_lead_time
        );
    }
    if summary.low_rating > 0 {
        println!(
            "Quality risk: {} supplier(s) rated below 4.0",
            summary.low_rating
        );
    }

    // 6. EXPORT RESULTS
    let output_file = "replenish_recommendations.csv";
    reporting::write_recommendations(Path::new(output_file), &recommendations)
        .with_context(|| format!("writing {}", output_file))?;
    println!(
        "\nExported {} rows to ./{}",
        recommendations.len(),
        output_file
    );

    Ok(())
}
