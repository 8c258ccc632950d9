use crate::charts::{ChartRenderer, Heatmap, ScatterChart};
use crate::error::ReportError;
use std::io::Write;

/// Low to high. The first shade is blank, so missing cells use `MISSING` instead.
const SHADES: &[u8] = b" .:-=+*#%@";
const MISSING: char = '?';
const POINT: char = 'o';
const FIT: char = '*';
const AXIS_LABEL_WIDTH: usize = 10;
const MAX_ROW_LABEL: usize = 12;

/// Draws charts as plain text into any writer.
pub struct TerminalRenderer<W: Write> {
    out: W,
    width: usize,
    height: usize,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, width: usize, height: usize) -> Self {
        Self { out, width, height }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartRenderer for TerminalRenderer<W> {
    fn scatter_with_fit(&mut self, chart: &ScatterChart) -> Result<(), ReportError> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", chart.title)?;
        if chart.points.is_empty() {
            writeln!(self.out, "(no data)")?;
            return Ok(());
        }

        let (w, h) = (self.width, self.height);
        let (x_lo, x_hi) = padded_range(chart.points.iter().map(|p| p.0));
        let (y_lo, y_hi) = padded_range(
            chart
                .points
                .iter()
                .map(|p| p.1)
                .chain([chart.fit.predict(x_lo), chart.fit.predict(x_hi)]),
        );

        let mut grid = vec![vec![' '; w]; h];
        for col in 0..w {
            let x = x_lo + (x_hi - x_lo) * col as f64 / (w - 1) as f64;
            if let Some(row) = to_row(chart.fit.predict(x), y_lo, y_hi, h) {
                grid[row][col] = FIT;
            }
        }
        for &(x, y) in &chart.points {
            let col = scale(x, x_lo, x_hi, w);
            if let Some(row) = to_row(y, y_lo, y_hi, h) {
                grid[row][col] = POINT;
            }
        }

        writeln!(self.out, "{:>AXIS_LABEL_WIDTH$}", chart.y_label)?;
        for (i, line) in grid.iter().enumerate() {
            let tick = match i {
                0 => format_tick(y_hi),
                i if i == h - 1 => format_tick(y_lo),
                _ => String::new(),
            };
            let line: String = line.iter().collect();
            writeln!(self.out, "{tick:>AXIS_LABEL_WIDTH$} |{line}")?;
        }
        writeln!(self.out, "{:>AXIS_LABEL_WIDTH$} +{}", "", "-".repeat(w))?;

        let (lo, hi) = (format_tick(x_lo), format_tick(x_hi));
        let gap = w.saturating_sub(lo.len() + hi.len());
        writeln!(self.out, "{:>AXIS_LABEL_WIDTH$}  {lo}{}{hi}", "", " ".repeat(gap))?;
        writeln!(self.out, "{:>AXIS_LABEL_WIDTH$}  {:^w$}", "", chart.x_label)?;
        Ok(())
    }

    fn heatmap(&mut self, chart: &Heatmap) -> Result<(), ReportError> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", chart.title)?;
        let Some((lo, hi)) = chart.value_range() else {
            writeln!(self.out, "(no data)")?;
            return Ok(());
        };

        let columns = chart.column_labels.len();
        let buckets = columns.min(self.width).max(1);
        let label_width = chart
            .row_labels
            .iter()
            .map(|l| l.chars().count().min(MAX_ROW_LABEL))
            .max()
            .unwrap_or(0)
            .max(chart.y_label.len());

        writeln!(self.out, "{:<label_width$}", chart.y_label)?;
        for (label, values) in chart.row_labels.iter().zip(&chart.values) {
            let label: String = label.chars().take(MAX_ROW_LABEL).collect();
            let cells: String = bucket_means(values, buckets)
                .into_iter()
                .map(|v| v.map_or(MISSING, |v| shade(v, lo, hi)))
                .collect();
            writeln!(self.out, "{label:<label_width$} |{cells}|")?;
        }

        let ends = (chart.column_labels.first(), chart.column_labels.last());
        if let (Some(first), Some(last)) = ends {
            let gap = buckets.saturating_sub(first.len() + last.len());
            if columns > 1 && gap > 0 {
                writeln!(self.out, "{:label_width$}  {first}{}{last}", "", " ".repeat(gap))?;
            } else {
                writeln!(self.out, "{:label_width$}  {first} .. {last}", "")?;
            }
        }
        writeln!(self.out, "{:label_width$}  {:^buckets$}", "", chart.x_label)?;

        let ramp: String = SHADES.iter().map(|&b| b as char).collect();
        writeln!(
            self.out,
            "{}: {} [{ramp}] {}  ({MISSING} = no data)",
            chart.legend_label,
            format_tick(lo),
            format_tick(hi)
        )?;
        Ok(())
    }
}

/// Min and max of `values`, widened when they coincide so scaling never divides by 0.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if hi > lo { (lo, hi) } else { (lo - 0.5, hi + 0.5) }
}

/// Maps `v` in `[lo, hi]` onto `0..cells`.
fn scale(v: f64, lo: f64, hi: f64, cells: usize) -> usize {
    let pos = ((v - lo) / (hi - lo) * (cells - 1) as f64).round();
    (pos.max(0.0) as usize).min(cells - 1)
}

/// Grid row for `y`, row 0 at the top. `None` when outside the plotted range.
fn to_row(y: f64, lo: f64, hi: f64, rows: usize) -> Option<usize> {
    if !(lo..=hi).contains(&y) {
        return None;
    }
    Some(rows - 1 - scale(y, lo, hi, rows))
}

fn shade(v: f64, lo: f64, hi: f64) -> char {
    let idx = if hi > lo {
        scale(v, lo, hi, SHADES.len())
    } else {
        SHADES.len() - 1
    };
    SHADES[idx] as char
}

/// Splits `values` into `buckets` contiguous runs and averages the present values of each.
fn bucket_means(values: &[Option<f64>], buckets: usize) -> Vec<Option<f64>> {
    let n = values.len();
    (0..buckets)
        .map(|b| {
            let (start, end) = (b * n / buckets, (b + 1) * n / buckets);
            let present: Vec<f64> = values[start..end].iter().flatten().copied().collect();
            (!present.is_empty()).then(|| present.iter().sum::<f64>() / present.len() as f64)
        })
        .collect()
}

fn format_tick(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e9 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}
