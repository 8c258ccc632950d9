use crate::trend::LinearFit;
use chrono::NaiveDate;
use serde::Serialize;

/// Per-SKU roll-up of sales, inventory and conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkuPerformance {
    pub sku_id: String,
    pub units_sold: f64,
    pub revenue: f64,
    pub mean_inventory: f64,
    pub mean_conversion: f64,
    pub mean_stock_cover: Option<f64>, // None when the SKU never sold a unit
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreShrink {
    pub store: String,
    pub shrink: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkuOosRate {
    pub sku_id: String,
    /// Fraction of the SKU's rows that were out of stock, in `[0, 1]`.
    pub oos_rate: f64,
}

/// Mean inventory pivoted by date (rows) and SKU (columns).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryMatrix {
    pub dates: Vec<NaiveDate>,
    pub sku_ids: Vec<String>,
    /// `cells[date][sku]`, `None` where no row exists.
    pub cells: Vec<Vec<Option<f64>>>,
}

impl InventoryMatrix {
    /// The inventory series of one SKU across all dates.
    pub fn sku_series(&self, sku: usize) -> impl Iterator<Item = Option<f64>> + '_ {
        self.cells.iter().map(move |line| line[sku])
    }
}

/// Descriptive counts for the loaded table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub rows: usize,
    pub skus: usize,
    pub stores: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

/// Everything the pipeline computes, ready to be rendered or serialized.
///
/// This struct is the final output of the `AnalyticsEngine`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetailReport {
    pub summary: RunSummary,

    // I. SKU performance
    pub sku_performance: Vec<SkuPerformance>,
    pub top_skus: Vec<SkuPerformance>,
    pub bottom_skus: Vec<SkuPerformance>,

    // II. Loss and availability
    pub shrink_summary: Vec<StoreShrink>,
    pub oos_rates: Vec<SkuOosRate>,
    pub inventory_matrix: InventoryMatrix,

    // III. Footfall → units sold
    pub footfall_fit: LinearFit,
}
