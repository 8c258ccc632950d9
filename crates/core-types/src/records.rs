use chrono::NaiveDate;
use serde::Serialize;

/// A single raw observation: one SKU in one store on one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub store: String,
    pub sku_id: String,
    pub units_sold: f64,
    /// Visitor count for the store in the period.
    pub footfall: f64,
    /// End-of-period inventory level.
    pub inventory: f64,
    pub price: f64,
}

/// A `TransactionRecord` with its derived per-row metrics appended.
///
/// Fields are written once during derivation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRecord {
    pub record: TransactionRecord,
    /// `units_sold * price`.
    pub revenue: f64,
    /// `units_sold / footfall`, or 0 when footfall is 0.
    pub conversion: f64,
    /// `inventory / units_sold`, missing when nothing was sold.
    pub stock_cover: Option<f64>,
    /// Previous inventory in the lag sequence minus `units_sold`.
    pub expected_inventory: Option<f64>,
    /// `expected_inventory - inventory`.
    pub shrink: Option<f64>,
    /// 1 when inventory is at or below zero, else 0.
    pub oos_flag: u8,
}

impl EnrichedRecord {
    pub fn is_out_of_stock(&self) -> bool {
        self.oos_flag == 1
    }
}
