use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Not enough data to perform calculation: {0}")]
    NotEnoughData(String),

    #[error("Series length mismatch: predictor has {predictor} values, response has {response}")]
    LengthMismatch { predictor: usize, response: usize },

    #[error("DataFrame operation failed: {0}")]
    Frame(#[from] polars::prelude::PolarsError),

    #[error("Linear regression failed: {0}")]
    Regression(String),

    #[error("Day number {0} is outside the supported calendar range")]
    InvalidDay(i32),
}
