use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}
