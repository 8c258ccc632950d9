use crate::error::AnalyticsError;
use crate::shrink::expected_inventory;
use configuration::ShrinkLag;
use core_types::{EnrichedRecord, TransactionRecord};

/// Appends the derived per-row fields to every record.
///
/// All fields are pure functions of their own row except `expected_inventory` (and
/// with it `shrink`), which reads the previous row of the sequence chosen by `lag`.
pub fn derive_metrics(
    records: Vec<TransactionRecord>,
    lag: ShrinkLag,
) -> Result<Vec<EnrichedRecord>, AnalyticsError> {
    let expected = expected_inventory(&records, lag)?;

    Ok(records
        .into_iter()
        .zip(expected)
        .map(|(record, expected_inventory)| {
            let shrink = expected_inventory.map(|e| e - record.inventory);
            EnrichedRecord {
                revenue: record.units_sold * record.price,
                conversion: conversion(record.units_sold, record.footfall),
                stock_cover: stock_cover(record.inventory, record.units_sold),
                expected_inventory,
                shrink,
                oos_flag: u8::from(record.inventory <= 0.0),
                record,
            }
        })
        .collect())
}

/// Units sold per visitor. A store with no footfall converts at 0.
pub fn conversion(units_sold: f64, footfall: f64) -> f64 {
    if footfall == 0.0 {
        0.0
    } else {
        units_sold / footfall
    }
}

/// Periods of stock on hand at the current sell rate; undefined when nothing sold.
pub fn stock_cover(inventory: f64, units_sold: f64) -> Option<f64> {
    if units_sold == 0.0 {
        None
    } else {
        Some(inventory / units_sold)
    }
}
