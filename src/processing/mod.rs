//! In-memory query functions.
//!
//! Every query is a stateless function over borrowed input that returns freshly allocated output;
//! none of them call each other. [`get_large_orders`] is the one lazy query, see [`deferred`].
//!
//! - [`filter`]: pending-order customers, available products, unique customers
//! - [`map`]: flattening orders, projecting orders into DTOs
//! - [`reduce`]: per-category aggregates, null-safe totals
//! - [`join`]: customer/order left outer join
//! - [`page`]: 1-based pagination
//! - [`deferred`]: lazily evaluated large-order query
//!
//! ## Example: group and paginate
//!
//! ```rust
//! use chrono::NaiveDate;
//! use query_recipes::processing::{get_order_summary_by_category, get_page};
//! use query_recipes::types::Order;
//! use rust_decimal::Decimal;
//!
//! let at = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let orders = vec![
//!     Order::new(1, 1, "Electronics", "Pending", Decimal::from(1500), at),
//!     Order::new(2, 1, "Books", "Completed", Decimal::from(200), at),
//!     Order::new(3, 2, "Electronics", "Pending", Decimal::from(2000), at),
//! ];
//!
//! let groups = get_order_summary_by_category(&orders);
//! assert_eq!(groups[0].category, "Electronics");
//! assert_eq!(groups[0].total_amount, Decimal::from(3500));
//!
//! let second_page = get_page(&orders, 2, 2);
//! assert_eq!(second_page.len(), 1);
//! ```

pub mod deferred;
pub mod filter;
pub mod format;
pub mod join;
pub mod map;
pub mod page;
pub mod reduce;

pub use deferred::{
    get_large_orders, get_large_orders_above, AmountFilter, IterSource, LargeOrders, OrderSource,
    LARGE_ORDER_THRESHOLD,
};
pub use filter::{customers_with_status, get_available_products, get_customers_with_pending_orders, get_unique_customers};
pub use format::{format_currency, CurrencyFormat};
pub use join::get_customer_summaries;
pub use map::{get_all_orders, transform_orders, transform_orders_at};
pub use page::get_page;
pub use reduce::{get_order_summary_by_category, get_total_amount};
