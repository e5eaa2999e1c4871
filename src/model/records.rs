// src/model/records.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reference data for a single spare part.
///
/// `lead_time_days` is the replenishment lead time we plan against. Not every
/// catalog carries it, so it stays optional here and the pipeline falls back
/// to a default when it is absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Part {
    pub part_id: String,
    pub name: String,
    #[serde(default)]
    pub lead_time_days: Option<u32>,
}

/// Current stock position for one part. One record per part.
///
/// `on_hand` is what is physically in the warehouse, `reserved` is what is
/// already committed. Net stock can go negative, so downstream math is done
/// in signed arithmetic.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryRecord {
    pub part_id: String,
    pub on_hand: u32,
    pub reserved: u32,
}

/// One day's demand for one part. Several observations may land on the same
/// (part, date) pair and are summed before rate estimation.
///
/// `qty` is optional: history exports often contain blank cells, and those
/// must be dropped rather than treated as zero demand.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DemandObservation {
    pub part_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub qty: Option<f64>,
}

/// A supplier's offer for one part.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SupplierQuote {
    pub part_id: String,
    pub supplier_id: String,
    pub supplier_name: String,
    pub unit_price_usd: f64,
    pub lead_time_offer_days: u32,
    pub supplier_rating: f64,
    pub moq: u32,
}

/// Intermediate per-part result: stock policy outputs joined with the
/// inventory position. Only rows with `need_qty > 0` survive into supplier
/// selection.
#[derive(Debug, Clone, PartialEq)]
pub struct NeedRow {
    pub part_id: String,
    pub name: Option<String>,
    pub daily_rate: f64,
    pub lead_time_days: u32,
    pub on_hand: u32,
    pub reserved: u32,
    pub safety_stock: f64,
    pub reorder_point: f64,
    pub net_on_hand: i64,
    pub need_qty: u32,
}

/// Final output row: one reorder recommendation per part.
///
/// Field order matters. The CSV export and every downstream consumer rely on
/// exactly this column layout, which is why the struct derives `Serialize`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub part_id: String,
    pub name: Option<String>,
    pub supplier_id: String,
    pub supplier_name: String,
    pub recommend_qty: u32,
    pub unit_price_usd: f64,
    pub lead_time_offer_days: u32,
    pub supplier_rating: f64,
    pub score: f64,
    pub reason: String,
}

/// Output column order, kept next to [`Recommendation`] so the two cannot
/// drift apart unnoticed.
pub const OUTPUT_COLUMNS: [&str; 10] = [
    "part_id",
    "name",
    "supplier_id",
    "supplier_name",
    "recommend_qty",
    "unit_price_usd",
    "lead_time_offer_days",
    "supplier_rating",
    "score",
    "reason",
];
