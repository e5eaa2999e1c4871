// src/io/reporting.rs

use std::path::Path;

use crate::model::records::{Recommendation, OUTPUT_COLUMNS};

/// Writes the recommendation table to a CSV file.
///
/// The header is written explicitly so that an empty run still produces a
/// file with the full column set. Consumers key on the columns, not on the
/// row count.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g. "results/run_1.csv").
/// * `rows` - The recommendation rows from the pipeline.
pub fn write_recommendations(file_path: &Path, rows: &[Recommendation]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(file_path)?;

    wtr.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;
    Ok(())
}
