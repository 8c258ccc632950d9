//! # Retail Core Types
//!
//! The shared vocabulary of the retail analysis pipeline. Every other crate speaks in
//! terms of these types, so this crate depends on nothing else in the workspace.
//!
//! - `Column`: the declared input schema, validated by the loader.
//! - `TransactionRecord`: one raw (date, store, SKU) observation.
//! - `EnrichedRecord`: a record plus its derived per-row metrics.

pub mod error;
pub mod records;
pub mod schema;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use records::{EnrichedRecord, TransactionRecord};
pub use schema::Column;
