//! Fixture ingestion from in-memory text.
//!
//! Queries operate on plain values the caller builds. These helpers build those values from text:
//!
//! - [`json`]: customers with nested orders
//! - [`csv`]: product catalogs
//!
//! There is no path-based entrypoint; callers read files themselves (tests use `include_str!`).

pub mod csv;
pub mod json;

pub use self::csv::{ingest_products_from_csv_str, ingest_products_from_reader, PRODUCT_COLUMNS};
pub use self::json::ingest_customers_from_json_str;
