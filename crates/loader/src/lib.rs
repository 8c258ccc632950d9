//! # Retail Data Loader
//!
//! Reads the transactional dataset into memory as `TransactionRecord`s.
//!
//! The header is checked against the declared schema before any row is read, so a
//! missing column fails fast with its name. Every row must then parse completely:
//! a bad date or a non-numeric measure aborts the whole load. There is no partial
//! result.

pub mod dates;
pub mod error;

pub use error::LoaderError;

use chrono::NaiveDate;
use core_types::{Column, TransactionRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Loads transaction records from a CSV file path.
pub fn load_transactions(path: &Path) -> Result<Vec<TransactionRecord>, LoaderError> {
    let file = File::open(path).map_err(|source| LoaderError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_transactions(file)?;
    tracing::info!(path = %path.display(), rows = records.len(), "Loaded transaction records.");
    Ok(records)
}

/// Loads transaction records from any CSV reader, preserving row order.
pub fn read_transactions<R: Read>(reader: R) -> Result<Vec<TransactionRecord>, LoaderError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let index = ColumnIndex::resolve(csv_reader.headers()?)?;

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let row = result.map_err(|source| LoaderError::Record {
            line: source.position().map(|p| p.line()).unwrap_or(0),
            source,
        })?;
        // Blank lines are skipped by the reader, so the line comes from the record.
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        records.push(index.parse(&row, line)?);
    }

    Ok(records)
}

/// Where each schema column sits in the file, in `Column::ALL` order.
struct ColumnIndex([usize; Column::ALL.len()]);

impl ColumnIndex {
    /// Matches header names against the schema. Unknown headers are ignored; the
    /// first schema column (in declaration order) with no header is an error.
    fn resolve(headers: &csv::StringRecord) -> Result<Self, LoaderError> {
        let mut positions = [None; Column::ALL.len()];
        for (position, header) in headers.iter().enumerate() {
            if let Ok(column) = header.parse::<Column>() {
                positions[column as usize].get_or_insert(position);
            }
        }

        let mut resolved = [0; Column::ALL.len()];
        for (column, position) in Column::ALL.into_iter().zip(positions) {
            resolved[column as usize] = position.ok_or(LoaderError::MissingColumn(column))?;
        }
        Ok(Self(resolved))
    }

    fn field<'r>(&self, row: &'r csv::StringRecord, column: Column) -> &'r str {
        row.get(self.0[column as usize]).unwrap_or_default()
    }

    fn date(&self, row: &csv::StringRecord, line: u64) -> Result<NaiveDate, LoaderError> {
        let value = self.field(row, Column::Date);
        dates::parse_date(value).ok_or_else(|| LoaderError::InvalidDate {
            line,
            value: value.to_string(),
        })
    }

    fn measure(
        &self,
        row: &csv::StringRecord,
        column: Column,
        line: u64,
    ) -> Result<f64, LoaderError> {
        let value = self.field(row, column);
        value.parse().map_err(|_| LoaderError::InvalidMeasure {
            line,
            column,
            value: value.to_string(),
        })
    }

    fn parse(&self, row: &csv::StringRecord, line: u64) -> Result<TransactionRecord, LoaderError> {
        Ok(TransactionRecord {
            date: self.date(row, line)?,
            store: self.field(row, Column::Store).to_string(),
            sku_id: self.field(row, Column::SkuId).to_string(),
            units_sold: self.measure(row, Column::UnitsSold, line)?,
            footfall: self.measure(row, Column::Footfall, line)?,
            inventory: self.measure(row, Column::Inventory, line)?,
            price: self.measure(row, Column::Price, line)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    const HEADER: &str = "Date,SKU_ID,Store,Units_Sold,Footfall,Inventory,Price";

    #[test]
    fn reads_typed_rows_in_file_order() {
        let csv = format!(
            "{HEADER}\n2024-01-02,SKU-2,S1,3,40,12,2.5\n2024-01-01,SKU-1,S2,0,0,-1,4\n"
        );
        let records = read_transactions(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sku_id, "SKU-2");
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(records[0].price, 2.5);
        assert_eq!(records[1].store, "S2");
        assert_eq!(records[1].inventory, -1.0);
    }

    #[test]
    fn columns_may_appear_in_any_order_with_extras() {
        let csv = "Price,Region,Inventory,Footfall,Units_Sold,Store,SKU_ID,Date\n\
                   9.99,North,5,100,7,A,X,2024-05-01\n";
        let records = read_transactions(csv.as_bytes()).unwrap();

        assert_eq!(records[0].units_sold, 7.0);
        assert_eq!(records[0].price, 9.99);
    }

    #[test]
    fn numeric_identifiers_stay_text() {
        let csv = format!("{HEADER}\n2024-01-01,00042,7,1,1,1,1\n");
        let records = read_transactions(csv.as_bytes()).unwrap();

        assert_eq!(records[0].sku_id, "00042");
        assert_eq!(records[0].store, "7");
    }

    #[test]
    fn missing_column_is_named() {
        let csv = "Date,SKU_ID,Store,Units_Sold,Inventory,Price\n2024-01-01,X,A,1,1,1\n";
        let err = read_transactions(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, LoaderError::MissingColumn(Column::Footfall)));
        assert!(err.to_string().contains("Footfall"));
    }

    #[test]
    fn bad_date_reports_line() {
        let csv = format!("{HEADER}\n2024-01-01,X,A,1,1,1,1\nnot-a-date,X,A,1,1,1,1\n");
        let err = read_transactions(csv.as_bytes()).unwrap_err();

        match err {
            LoaderError::InvalidDate { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "not-a-date");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_date_line_counts_blank_lines() {
        let csv = format!("{HEADER}\n\n2024-01-01,X,A,1,1,1,1\n\nnot-a-date,X,A,1,1,1,1\n");
        let err = read_transactions(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, LoaderError::InvalidDate { line: 5, .. }));
        assert!(err.to_string().contains("line 5"));
    }

    #[test]
    fn non_numeric_measure_names_its_column() {
        let csv = format!("{HEADER}\n2024-01-01,X,A,3,1,1,1\n\n2024-01-02,X,A,1,1,lots,1\n");
        let err = read_transactions(csv.as_bytes()).unwrap_err();

        match &err {
            LoaderError::InvalidMeasure {
                line,
                column,
                value,
            } => {
                assert_eq!(*line, 4);
                assert_eq!(*column, Column::Inventory);
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("Inventory"));
    }

    #[test]
    fn empty_measure_fails_the_load() {
        let csv = format!("{HEADER}\n2024-01-01,X,A,,1,1,1\n");
        let err = read_transactions(csv.as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            LoaderError::InvalidMeasure {
                column: Column::UnitsSold,
                ..
            }
        ));
    }

    #[test]
    fn short_row_is_a_malformed_record() {
        let csv = format!("{HEADER}\n2024-01-01,X,A,1,1,1,1\n2024-01-02,X,A\n");
        let err = read_transactions(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, LoaderError::Record { .. }));
    }

    #[test]
    fn header_only_yields_no_records() {
        let records = read_transactions(HEADER.as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        writeln!(file, "2024-01-01,X,A,2,10,8,1.5").unwrap();

        let records = load_transactions(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].footfall, 10.0);
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_transactions(&dir.path().join("retail_data.csv")).unwrap_err();

        assert!(matches!(err, LoaderError::Open { .. }));
    }
}
