use crate::aggregate::{bottom_skus, sku_performance, top_skus};
use crate::error::AnalyticsError;
use crate::metrics::derive_metrics;
use crate::report::{RetailReport, RunSummary};
use crate::shrink::{inventory_matrix, oos_rates, shrink_summary};
use crate::trend::fit_linear;
use configuration::AnalysisSettings;
use core_types::{EnrichedRecord, TransactionRecord};
use std::collections::HashSet;

/// A stateless calculator for deriving retail metrics from transaction records.
///
/// The pipeline is two explicit steps: `derive` turns the loaded table into enriched
/// rows, and `calculate` reduces those rows into a `RetailReport`. Nothing is held
/// between calls.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {
    settings: AnalysisSettings,
}

impl AnalyticsEngine {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    /// Appends the per-row derived metrics, keeping the table's row order.
    pub fn derive(
        &self,
        records: Vec<TransactionRecord>,
    ) -> Result<Vec<EnrichedRecord>, AnalyticsError> {
        let rows = derive_metrics(records, self.settings.shrink_lag)?;
        tracing::debug!(
            rows = rows.len(),
            lag = ?self.settings.shrink_lag,
            "Derived row metrics."
        );
        Ok(rows)
    }

    /// The main entry point for calculating the report.
    ///
    /// # Arguments
    ///
    /// * `rows` - The enriched table produced by `derive`.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `RetailReport`, or an `AnalyticsError` if a frame
    /// operation fails or the footfall fit cannot be computed (e.g. an empty table).
    pub fn calculate(&self, rows: &[EnrichedRecord]) -> Result<RetailReport, AnalyticsError> {
        let summary = summarize(rows);
        tracing::info!(
            rows = summary.rows,
            skus = summary.skus,
            stores = summary.stores,
            first_date = ?summary.first_date,
            last_date = ?summary.last_date,
            "Analysing retail table."
        );

        let performance = sku_performance(rows)?;
        let top = top_skus(&performance, self.settings.top_n)?;
        let bottom = bottom_skus(&performance, self.settings.top_n)?;

        let shrink = shrink_summary(rows)?;
        let oos = oos_rates(rows)?;
        let matrix = inventory_matrix(rows)?;

        let footfall: Vec<f64> = rows.iter().map(|r| r.record.footfall).collect();
        let units: Vec<f64> = rows.iter().map(|r| r.record.units_sold).collect();
        let fit = fit_linear(&footfall, &units)?;
        tracing::info!(slope = fit.slope, intercept = fit.intercept, "Fitted footfall trend.");

        Ok(RetailReport {
            summary,
            sku_performance: performance,
            top_skus: top,
            bottom_skus: bottom,
            shrink_summary: shrink,
            oos_rates: oos,
            inventory_matrix: matrix,
            footfall_fit: fit,
        })
    }
}

fn summarize(rows: &[EnrichedRecord]) -> RunSummary {
    let skus: HashSet<&str> = rows.iter().map(|r| r.record.sku_id.as_str()).collect();
    let stores: HashSet<&str> = rows.iter().map(|r| r.record.store.as_str()).collect();

    RunSummary {
        rows: rows.len(),
        skus: skus.len(),
        stores: stores.len(),
        first_date: rows.iter().map(|r| r.record.date).min(),
        last_date: rows.iter().map(|r| r.record.date).max(),
    }
}
