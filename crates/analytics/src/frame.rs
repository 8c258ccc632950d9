//! Conversions between record slices and polars `DataFrame`s.

use crate::error::AnalyticsError;
use chrono::{Datelike, NaiveDate};
use core_types::{Column, EnrichedRecord, TransactionRecord};
use polars::prelude::*;

/// Original position of each row, used to restore load order after sorting.
pub const ROW: &str = "row";
pub const REVENUE: &str = "Revenue";
pub const CONVERSION: &str = "Conversion";
pub const STOCK_COVER: &str = "Stock_Cover";
pub const EXPECTED_INVENTORY: &str = "Expected_Inventory";
pub const SHRINK: &str = "Shrink";
pub const OOS_FLAG: &str = "OOS_Flag";

/// Dates are stored as days since the common era so they sort as integers.
pub fn day_number(date: NaiveDate) -> i32 {
    date.num_days_from_ce()
}

pub fn from_day_number(day: i32) -> Result<NaiveDate, AnalyticsError> {
    NaiveDate::from_num_days_from_ce_opt(day).ok_or(AnalyticsError::InvalidDay(day))
}

/// The raw columns the lag computation needs, plus the row position.
pub fn transaction_frame(records: &[TransactionRecord]) -> PolarsResult<DataFrame> {
    DataFrame::new(vec![
        Series::new(ROW, (0..records.len() as u32).collect::<Vec<_>>()),
        Series::new(
            Column::Date.name(),
            records.iter().map(|r| day_number(r.date)).collect::<Vec<_>>(),
        ),
        Series::new(
            Column::Store.name(),
            records.iter().map(|r| r.store.as_str()).collect::<Vec<_>>(),
        ),
        Series::new(
            Column::SkuId.name(),
            records.iter().map(|r| r.sku_id.as_str()).collect::<Vec<_>>(),
        ),
        Series::new(
            Column::UnitsSold.name(),
            records.iter().map(|r| r.units_sold).collect::<Vec<_>>(),
        ),
        Series::new(
            Column::Inventory.name(),
            records.iter().map(|r| r.inventory).collect::<Vec<_>>(),
        ),
    ])
}

/// The full enriched table, one column per raw and derived field.
pub fn enriched_frame(rows: &[EnrichedRecord]) -> PolarsResult<DataFrame> {
    let raw = |f: fn(&TransactionRecord) -> f64| {
        rows.iter().map(|r| f(&r.record)).collect::<Vec<_>>()
    };

    DataFrame::new(vec![
        Series::new(
            Column::Date.name(),
            rows.iter().map(|r| day_number(r.record.date)).collect::<Vec<_>>(),
        ),
        Series::new(
            Column::Store.name(),
            rows.iter().map(|r| r.record.store.as_str()).collect::<Vec<_>>(),
        ),
        Series::new(
            Column::SkuId.name(),
            rows.iter().map(|r| r.record.sku_id.as_str()).collect::<Vec<_>>(),
        ),
        Series::new(Column::UnitsSold.name(), raw(|r| r.units_sold)),
        Series::new(Column::Footfall.name(), raw(|r| r.footfall)),
        Series::new(Column::Inventory.name(), raw(|r| r.inventory)),
        Series::new(Column::Price.name(), raw(|r| r.price)),
        Series::new(REVENUE, rows.iter().map(|r| r.revenue).collect::<Vec<_>>()),
        Series::new(CONVERSION, rows.iter().map(|r| r.conversion).collect::<Vec<_>>()),
        Series::new(STOCK_COVER, rows.iter().map(|r| r.stock_cover).collect::<Vec<_>>()),
        Series::new(
            EXPECTED_INVENTORY,
            rows.iter().map(|r| r.expected_inventory).collect::<Vec<_>>(),
        ),
        Series::new(SHRINK, rows.iter().map(|r| r.shrink).collect::<Vec<_>>()),
        Series::new(
            OOS_FLAG,
            rows.iter().map(|r| f64::from(r.oos_flag)).collect::<Vec<_>>(),
        ),
    ])
}

pub fn f64_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<f64>> {
    Ok(df.column(name)?.f64()?.into_no_null_iter().collect())
}

pub fn optional_f64_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<f64>>> {
    Ok(df.column(name)?.f64()?.into_iter().collect())
}

pub fn string_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<String>> {
    Ok(df
        .column(name)?
        .str()?
        .into_iter()
        .map(|v| v.unwrap_or_default().to_string())
        .collect())
}

pub fn day_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<i32>> {
    Ok(df.column(name)?.i32()?.into_no_null_iter().collect())
}

/// Stable ordering on one column.
pub fn stable(descending: bool) -> SortOptions {
    SortOptions {
        descending,
        maintain_order: true,
        ..Default::default()
    }
}
