// src/io/loading.rs

use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::records::{DemandObservation, InventoryRecord, Part, SupplierQuote};

/// The four input tables, already parsed. This is everything the pipeline
/// consumes.
pub type Dataset = (
    Vec<Part>,
    Vec<InventoryRecord>,
    Vec<DemandObservation>,
    Vec<SupplierQuote>,
);

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {table} table: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },
}

fn read_table<T: DeserializeOwned>(path: &Path, table: &'static str) -> Result<Vec<T>, LoadError> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|source| LoadError::Csv { table, source })?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record.map_err(|source| LoadError::Csv { table, source })?);
    }
    Ok(rows)
}

pub fn load_parts(path: &Path) -> Result<Vec<Part>, LoadError> {
    read_table(path, "parts")
}

pub fn load_inventory(path: &Path) -> Result<Vec<InventoryRecord>, LoadError> {
    read_table(path, "inventory")
}

pub fn load_demand(path: &Path) -> Result<Vec<DemandObservation>, LoadError> {
    read_table(path, "demand")
}

pub fn load_quotes(path: &Path) -> Result<Vec<SupplierQuote>, LoadError> {
    read_table(path, "quotes")
}

/// Loads the four standard CSV files from one directory.
///
/// Expects `parts.csv`, `inventory.csv`, `demand_history.csv` and
/// `supplier_quotes.csv`; dates in the demand history must be ISO
/// (`YYYY-MM-DD`).
pub fn load_dataset(dir: &Path) -> Result<Dataset, LoadError> {
    Ok((
        load_parts(&dir.join("parts.csv"))?,
        load_inventory(&dir.join("inventory.csv"))?,
        load_demand(&dir.join("demand_history.csv"))?,
        load_quotes(&dir.join("supplier_quotes.csv"))?,
    ))
}
