use crate::error::AnalyticsError;
use crate::frame::{
    self, EXPECTED_INVENTORY, OOS_FLAG, ROW, SHRINK, enriched_frame, transaction_frame,
};
use crate::report::{InventoryMatrix, SkuOosRate, StoreShrink};
use chrono::NaiveDate;
use configuration::ShrinkLag;
use core_types::{Column, EnrichedRecord, TransactionRecord};
use polars::prelude::*;
use std::collections::{BTreeSet, HashMap};

/// Computes each row's expected inventory: the previous row's inventory minus this
/// row's units sold. The first row of each lag sequence has none.
///
/// With `ShrinkLag::TableOrder` the whole table is one sequence in as-loaded order,
/// so consecutive rows of different stores or SKUs feed each other. With
/// `ShrinkLag::PerSeries` each (store, SKU) pair is its own sequence, ordered by date
/// (stable, so same-day rows keep their load order).
pub fn expected_inventory(
    records: &[TransactionRecord],
    lag: ShrinkLag,
) -> Result<Vec<Option<f64>>, AnalyticsError> {
    let inventory = Column::Inventory.name();
    let units = Column::UnitsSold.name();
    let previous = col(inventory).shift(lit(1));

    let lf = transaction_frame(records)?.lazy();
    let lagged = match lag {
        ShrinkLag::TableOrder => {
            lf.with_column((previous - col(units)).alias(EXPECTED_INVENTORY))
        }
        ShrinkLag::PerSeries => lf
            .sort(Column::Date.name(), frame::stable(false))
            .with_column(
                (previous.over([col(Column::Store.name()), col(Column::SkuId.name())])
                    - col(units))
                .alias(EXPECTED_INVENTORY),
            )
            .sort(ROW, frame::stable(false)),
    };

    let df = lagged.collect()?;
    Ok(frame::optional_f64_values(&df, EXPECTED_INVENTORY)?)
}

/// Total shrink per store, largest first. Missing shrink values are skipped.
pub fn shrink_summary(rows: &[EnrichedRecord]) -> Result<Vec<StoreShrink>, AnalyticsError> {
    let store = Column::Store.name();
    let df = enriched_frame(rows)?
        .lazy()
        .group_by([col(store)])
        .agg([col(SHRINK).fill_null(lit(0.0)).sum().alias(SHRINK)])
        .sort(store, frame::stable(false))
        .sort(SHRINK, frame::stable(true))
        .collect()?;

    let stores = frame::string_values(&df, store)?;
    let totals = frame::f64_values(&df, SHRINK)?;
    Ok(stores
        .into_iter()
        .zip(totals)
        .map(|(store, shrink)| StoreShrink { store, shrink })
        .collect())
}

/// Share of rows flagged out-of-stock per SKU, highest first.
pub fn oos_rates(rows: &[EnrichedRecord]) -> Result<Vec<SkuOosRate>, AnalyticsError> {
    let sku = Column::SkuId.name();
    let df = enriched_frame(rows)?
        .lazy()
        .group_by([col(sku)])
        .agg([col(OOS_FLAG).mean().alias(OOS_FLAG)])
        .sort(sku, frame::stable(false))
        .sort(OOS_FLAG, frame::stable(true))
        .collect()?;

    let skus = frame::string_values(&df, sku)?;
    let rates = frame::f64_values(&df, OOS_FLAG)?;
    Ok(skus
        .into_iter()
        .zip(rates)
        .map(|(sku_id, oos_rate)| SkuOosRate { sku_id, oos_rate })
        .collect())
}

/// Pivots inventory into a date × SKU grid. Rows and columns are sorted ascending;
/// a cell is the mean inventory of every row sharing that date and SKU.
pub fn inventory_matrix(rows: &[EnrichedRecord]) -> Result<InventoryMatrix, AnalyticsError> {
    let (date, sku, inventory) = (
        Column::Date.name(),
        Column::SkuId.name(),
        Column::Inventory.name(),
    );
    let df = enriched_frame(rows)?
        .lazy()
        .group_by([col(date), col(sku)])
        .agg([col(inventory).mean().alias(inventory)])
        .collect()?;

    let days = frame::day_values(&df, date)?;
    let skus = frame::string_values(&df, sku)?;
    let means = frame::optional_f64_values(&df, inventory)?;

    let day_axis: Vec<i32> = days.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
    let sku_ids: Vec<String> = skus
        .iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let day_index: HashMap<i32, usize> =
        day_axis.iter().enumerate().map(|(i, d)| (*d, i)).collect();
    let sku_index: HashMap<&str, usize> = sku_ids
        .iter()
        .enumerate()
        .map(|(i, s)| (s.as_str(), i))
        .collect();

    let mut cells = vec![vec![None; sku_ids.len()]; day_axis.len()];
    for ((day, sku), mean) in days.iter().zip(&skus).zip(means) {
        cells[day_index[day]][sku_index[sku.as_str()]] = mean;
    }

    let dates = day_axis
        .into_iter()
        .map(frame::from_day_number)
        .collect::<Result<Vec<NaiveDate>, _>>()?;

    Ok(InventoryMatrix {
        dates,
        sku_ids,
        cells,
    })
}
