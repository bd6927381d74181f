//! `query-recipes` is a small collection of in-memory query functions over customers, orders and
//! products: flatten, filter, group/aggregate, outer join, paginate and project.
//!
//! Every query in [`processing`] is a pure function. It borrows its input, never mutates it, and
//! returns freshly allocated output, so calling it twice with the same input gives the same result
//! and concurrent calls on shared input are safe.
//!
//! ## Queries
//!
//! | Query | Function |
//! |---|---|
//! | all orders of all customers | [`processing::get_all_orders`] |
//! | customers with a pending order | [`processing::get_customers_with_pending_orders`] |
//! | orders above 1000, largest first (lazy) | [`processing::get_large_orders`] |
//! | per-category totals/counts/averages | [`processing::get_order_summary_by_category`] |
//! | in-stock, priced, categorized products by price | [`processing::get_available_products`] |
//! | customers deduplicated by email | [`processing::get_unique_customers`] |
//! | total amount skipping missing orders | [`processing::get_total_amount`] |
//! | per-customer order count/spend (outer join) | [`processing::get_customer_summaries`] |
//! | 1-based pagination | [`processing::get_page`] |
//! | order DTO projection | [`processing::transform_orders`] |
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use query_recipes::processing::{get_all_orders, get_customer_summaries, get_large_orders};
//! use query_recipes::types::{Customer, Order};
//! use rust_decimal::Decimal;
//!
//! let at = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let birth = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
//! let customers = vec![
//!     Customer::new(1, "John", "Doe", "john@example.com", birth).with_orders(vec![
//!         Order::new(1, 1, "Electronics", "Pending", Decimal::from(1500), at),
//!         Order::new(2, 1, "Books", "Completed", Decimal::from(200), at),
//!     ]),
//!     Customer::new(2, "Jane", "Smith", "jane@example.com", birth),
//! ];
//!
//! let orders = get_all_orders(&customers);
//! assert_eq!(orders.len(), 2);
//!
//! let summaries = get_customer_summaries(&customers, &orders);
//! assert_eq!(summaries[0].customer_name, "John Doe");
//! assert_eq!(summaries[0].total_spent, Decimal::from(1700));
//! assert_eq!(summaries[1].total_orders, 0);
//!
//! let large: Vec<Order> = get_large_orders(orders).collect();
//! assert_eq!(large.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`types`]: customers, orders, products and the projection records in [`types::dto`]
//! - [`processing`]: the query functions
//! - [`execution`]: [`execution::QueryEngine`] with options, metrics and observer hooks
//! - [`ingestion`]: parsing customers (JSON) and products (CSV) from text
//! - [`sample`]: seeded synthetic data
//! - [`error`]: error types used by ingestion

pub mod error;
pub mod execution;
pub mod ingestion;
pub mod processing;
pub mod sample;
pub mod types;

pub use error::{IngestionError, IngestionResult};
