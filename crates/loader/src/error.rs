use core_types::Column;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to open input file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input is missing required column '{0}'")]
    MissingColumn(Column),

    #[error("Malformed record at line {line}: {source}")]
    Record {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("Unparseable date '{value}' at line {line}")]
    InvalidDate { line: u64, value: String },

    #[error("Non-numeric {column} value '{value}' at line {line}")]
    InvalidMeasure {
        line: u64,
        column: Column,
        value: String,
    },

    #[error("Failed to read CSV header: {0}")]
    Header(#[from] csv::Error),
}
