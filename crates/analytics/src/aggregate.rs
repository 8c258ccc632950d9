use crate::error::AnalyticsError;
use crate::frame::{self, CONVERSION, REVENUE, STOCK_COVER, enriched_frame};
use crate::report::SkuPerformance;
use core_types::{Column, EnrichedRecord};
use polars::prelude::*;

/// Groups rows by SKU: summed units and revenue, mean inventory and conversion.
/// Output is ordered by SKU_ID ascending.
pub fn sku_performance(rows: &[EnrichedRecord]) -> Result<Vec<SkuPerformance>, AnalyticsError> {
    let (sku, units, inventory) = (
        Column::SkuId.name(),
        Column::UnitsSold.name(),
        Column::Inventory.name(),
    );

    let df = enriched_frame(rows)?
        .lazy()
        .group_by([col(sku)])
        .agg([
            col(units).sum().alias(units),
            col(REVENUE).sum().alias(REVENUE),
            col(inventory).mean().alias(inventory),
            col(CONVERSION).mean().alias(CONVERSION),
            // Null covers are skipped, so a SKU that never sold stays null.
            col(STOCK_COVER).mean().alias(STOCK_COVER),
        ])
        .sort(sku, frame::stable(false))
        .collect()?;

    let sku_ids = frame::string_values(&df, sku)?;
    let units_sold = frame::f64_values(&df, units)?;
    let revenue = frame::f64_values(&df, REVENUE)?;
    let mean_inventory = frame::f64_values(&df, inventory)?;
    let mean_conversion = frame::f64_values(&df, CONVERSION)?;
    let mean_stock_cover = frame::optional_f64_values(&df, STOCK_COVER)?;

    Ok((0..df.height())
        .map(|i| SkuPerformance {
            sku_id: sku_ids[i].clone(),
            units_sold: units_sold[i],
            revenue: revenue[i],
            mean_inventory: mean_inventory[i],
            mean_conversion: mean_conversion[i],
            mean_stock_cover: mean_stock_cover[i],
        })
        .collect())
}

/// The `n` best sellers by summed units, ties kept in input order.
pub fn top_skus(
    performance: &[SkuPerformance],
    n: usize,
) -> Result<Vec<SkuPerformance>, AnalyticsError> {
    rank_by_units(performance, n, true)
}

/// The `n` worst sellers by summed units, ties kept in input order.
pub fn bottom_skus(
    performance: &[SkuPerformance],
    n: usize,
) -> Result<Vec<SkuPerformance>, AnalyticsError> {
    rank_by_units(performance, n, false)
}

/// Stable sort on units sold, then the first `n` rows. Rows are carried by their
/// position in `performance` so the full records come back out unchanged.
fn rank_by_units(
    performance: &[SkuPerformance],
    n: usize,
    descending: bool,
) -> Result<Vec<SkuPerformance>, AnalyticsError> {
    let units = Column::UnitsSold.name();
    let df = DataFrame::new(vec![
        Series::new(frame::ROW, (0..performance.len() as u32).collect::<Vec<_>>()),
        Series::new(units, performance.iter().map(|p| p.units_sold).collect::<Vec<_>>()),
    ])?;

    let ranked = df
        .lazy()
        .sort(units, frame::stable(descending))
        .limit(IdxSize::try_from(n).unwrap_or(IdxSize::MAX))
        .collect()?;

    Ok(ranked
        .column(frame::ROW)?
        .u32()?
        .into_no_null_iter()
        .map(|i| performance[i as usize].clone())
        .collect())
}
