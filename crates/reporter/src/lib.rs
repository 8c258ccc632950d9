//! # Retail Report Output
//!
//! Turns a computed `RetailReport` into what the user sees on stdout: summary tables,
//! the fitted coefficients, the scatter and heatmap charts, and the fixed
//! recommendations. In JSON mode the whole report is serialized instead.
//!
//! Charts go through the `ChartRenderer` trait; `TerminalRenderer` is the built-in
//! implementation and draws them as text.

pub mod charts;
pub mod error;
pub mod recommendations;
pub mod tables;
pub mod terminal;

pub use charts::{ChartRenderer, Heatmap, ScatterChart};
pub use error::ReportError;
pub use terminal::TerminalRenderer;

use analytics::RetailReport;
use configuration::{ReportFormat, ReportSettings};
use core_types::EnrichedRecord;
use std::io::Write;

/// Writes a report to an output stream according to the report settings.
pub struct Reporter<W: Write> {
    settings: ReportSettings,
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(settings: ReportSettings, out: W) -> Self {
        Self { settings, out }
    }

    /// Renders the report. `rows` supplies the per-row points of the scatter chart.
    pub fn render(
        &mut self,
        report: &RetailReport,
        rows: &[EnrichedRecord],
    ) -> Result<(), ReportError> {
        match self.settings.format {
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut self.out, report)?;
                writeln!(self.out)?;
            }
            ReportFormat::Text => self.render_text(report, rows)?,
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render_text(
        &mut self,
        report: &RetailReport,
        rows: &[EnrichedRecord],
    ) -> Result<(), ReportError> {
        if self.settings.show_tables {
            self.write_tables(report)?;
        }

        let fit = report.footfall_fit;
        writeln!(self.out, "Footfall elasticity: {}", format_coefficient(fit.slope))?;
        writeln!(self.out, "Intercept: {}", format_coefficient(fit.intercept))?;

        let scatter = ScatterChart::footfall_vs_units(rows, report.footfall_fit);
        let heatmap = Heatmap::inventory(&report.inventory_matrix);
        let mut renderer = TerminalRenderer::new(
            &mut self.out,
            self.settings.chart_width,
            self.settings.chart_height,
        );
        renderer.scatter_with_fit(&scatter)?;
        renderer.heatmap(&heatmap)?;

        recommendations::write_recommendations(&mut self.out)?;
        Ok(())
    }

    fn write_tables(&mut self, report: &RetailReport) -> Result<(), ReportError> {
        let sections = [
            (
                format!("Top {} SKUs by units sold", report.top_skus.len()),
                tables::sku_table(&report.top_skus),
            ),
            (
                format!("Bottom {} SKUs by units sold", report.bottom_skus.len()),
                tables::sku_table(&report.bottom_skus),
            ),
            ("Shrink by store".to_string(), tables::shrink_table(&report.shrink_summary)),
            ("Out-of-stock rate by SKU".to_string(), tables::oos_table(&report.oos_rates)),
        ];
        for (title, table) in sections {
            writeln!(self.out, "{title}")?;
            writeln!(self.out, "{table}")?;
            writeln!(self.out)?;
        }
        Ok(())
    }
}

/// Formats a coefficient as the shortest round-trip decimal, always with a decimal
/// point (`2.0`, `0.35`). Magnitudes below `1e-4` or from `1e16` up switch to
/// scientific notation with a signed two-digit exponent (`1e-07`, `2.5e+16`).
pub fn format_coefficient(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-4..1e16).contains(&magnitude) {
        let plain = value.to_string();
        return if plain.contains('.') {
            plain
        } else {
            format!("{plain}.0")
        };
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => scientific,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_coefficients_keep_a_decimal_point() {
        assert_eq!(format_coefficient(2.0), "2.0");
        assert_eq!(format_coefficient(0.0), "0.0");
        assert_eq!(format_coefficient(-3.0), "-3.0");
        assert_eq!(format_coefficient(1234567.0), "1234567.0");
    }

    #[test]
    fn fractional_coefficients_use_shortest_digits() {
        assert_eq!(format_coefficient(0.35), "0.35");
        assert_eq!(format_coefficient(0.0001), "0.0001");
        assert_eq!(format_coefficient(-12.125), "-12.125");
    }

    #[test]
    fn tiny_and_huge_coefficients_use_signed_exponents() {
        assert_eq!(format_coefficient(1e-7), "1e-07");
        assert_eq!(format_coefficient(-2.5e-5), "-2.5e-05");
        assert_eq!(format_coefficient(1e16), "1e+16");
        assert_eq!(format_coefficient(3.25e120), "3.25e+120");
    }

    #[test]
    fn non_finite_coefficients() {
        assert_eq!(format_coefficient(f64::NAN), "nan");
        assert_eq!(format_coefficient(f64::INFINITY), "inf");
        assert_eq!(format_coefficient(f64::NEG_INFINITY), "-inf");
    }
}
