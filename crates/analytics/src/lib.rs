//! # Retail Analytics Engine
//!
//! This crate turns loaded transaction records into the retail performance report:
//! per-row metrics, SKU performance rankings, shrink and out-of-stock summaries, the
//! inventory heatmap matrix, and the footfall → units-sold trend line.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** no I/O. It depends only on `core-types` and the analysis
//!   settings from `configuration`.
//! - **Frames for tables:** grouping, lagging, ranking and pivoting run as `polars`
//!   lazy queries over a frame built from the records. The trend line is fitted
//!   with `linfa-linear`.
//! - **Explicit pipeline:** the table is passed into each stage and a new value is
//!   returned. No stage mutates shared state.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: runs derivation and aggregation.
//! - `RetailReport`: every computed table plus the fit.
//! - `AnalyticsError`: the errors that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod aggregate;
pub mod engine;
pub mod error;
pub mod frame;
pub mod metrics;
pub mod report;
pub mod shrink;
pub mod trend;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use report::{
    InventoryMatrix, RetailReport, RunSummary, SkuOosRate, SkuPerformance, StoreShrink,
};
pub use trend::LinearFit;
