use crate::error::ReportError;
use analytics::{InventoryMatrix, LinearFit};
use core_types::EnrichedRecord;

/// Something that can draw the two report charts.
///
/// The report only hands over data series; how they end up on screen (terminal,
/// image, window) is the renderer's business.
pub trait ChartRenderer {
    fn scatter_with_fit(&mut self, chart: &ScatterChart) -> Result<(), ReportError>;

    fn heatmap(&mut self, chart: &Heatmap) -> Result<(), ReportError>;
}

/// Points overlaid with a fitted line.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<(f64, f64)>,
    pub fit: LinearFit,
}

impl ScatterChart {
    /// Footfall against units sold for every row, with the fitted trend.
    pub fn footfall_vs_units(rows: &[EnrichedRecord], fit: LinearFit) -> Self {
        Self {
            title: "Footfall vs Sales Regression".to_string(),
            x_label: "Footfall".to_string(),
            y_label: "Units Sold".to_string(),
            points: rows
                .iter()
                .map(|r| (r.record.footfall, r.record.units_sold))
                .collect(),
            fit,
        }
    }
}

/// A labelled grid of values, one row per `row_labels` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_label: String,
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    /// `values[row][column]`.
    pub values: Vec<Vec<Option<f64>>>,
}

impl Heatmap {
    /// SKUs down the side, dates along the bottom.
    pub fn inventory(matrix: &InventoryMatrix) -> Self {
        Self {
            title: "SKU Inventory Heatmap".to_string(),
            x_label: "Date".to_string(),
            y_label: "SKU".to_string(),
            legend_label: "Inventory Level".to_string(),
            row_labels: matrix.sku_ids.clone(),
            column_labels: matrix.dates.iter().map(|d| d.to_string()).collect(),
            values: (0..matrix.sku_ids.len())
                .map(|sku| matrix.sku_series(sku).collect())
                .collect(),
        }
    }

    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .flatten()
            .flatten()
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn inventory_heatmap_is_transposed_matrix() {
        let matrix = InventoryMatrix {
            dates: vec![
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            ],
            sku_ids: vec!["X".to_string(), "Y".to_string(), "Z".to_string()],
            cells: vec![
                vec![Some(1.0), None, Some(3.0)],
                vec![Some(4.0), Some(5.0), None],
            ],
        };
        let heatmap = Heatmap::inventory(&matrix);

        assert_eq!(heatmap.row_labels, vec!["X", "Y", "Z"]);
        assert_eq!(heatmap.column_labels, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(heatmap.values[0], vec![Some(1.0), Some(4.0)]);
        assert_eq!(heatmap.values[1], vec![None, Some(5.0)]);
        assert_eq!(heatmap.values[2], vec![Some(3.0), None]);
        assert_eq!(heatmap.value_range(), Some((1.0, 5.0)));
    }
}
