//! Configurable, observable front-end for the query functions.
//!
//! This module sits "above" [`crate::processing`] and provides:
//!
//! - [`QueryOptions`]: the tunable constants (pending status label, large-order threshold,
//!   currency format)
//! - per-run timing, cumulative [`QueryMetrics`] and [`QueryObserver`] events for logging
//!
//! With default options every method returns exactly what the matching free function returns.

mod observer;

use std::sync::Arc;
use std::time::Instant;

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;

use crate::processing::{self, CurrencyFormat, IterSource, LARGE_ORDER_THRESHOLD};
use crate::types::dto::{CustomerOrderSummary, OrderDto, OrderGroupResult};
use crate::types::{Customer, Order, Product, STATUS_PENDING};

pub use observer::{QueryEvent, QueryKind, QueryMetrics, QueryMetricsSnapshot, QueryObserver, StdErrQueryObserver};

/// Configuration for the [`QueryEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    /// Status label that marks an order as pending.
    pub pending_status: String,
    /// Orders strictly above this amount are "large".
    pub large_order_threshold: Decimal,
    /// Formatting used for `formatted_amount`.
    pub currency: CurrencyFormat,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            pending_status: STATUS_PENDING.to_string(),
            large_order_threshold: LARGE_ORDER_THRESHOLD,
            currency: CurrencyFormat::default(),
        }
    }
}

/// Runs queries with [`QueryOptions`], recording metrics and notifying an optional observer.
pub struct QueryEngine {
    opts: QueryOptions,
    observer: Option<Arc<dyn QueryObserver>>,
    metrics: Arc<QueryMetrics>,
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new(QueryOptions::default())
    }
}

impl QueryEngine {
    pub fn new(opts: QueryOptions) -> Self {
        Self {
            opts,
            observer: None,
            metrics: Arc::new(QueryMetrics::new()),
        }
    }

    /// Attach an observer for query events (metrics/logging).
    pub fn with_observer(mut self, observer: Arc<dyn QueryObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn options(&self) -> &QueryOptions {
        &self.opts
    }

    /// Get a handle to the engine's cumulative metrics.
    pub fn metrics(&self) -> Arc<QueryMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn all_orders(&self, customers: &[Customer]) -> Vec<Order> {
        self.run_rows(QueryKind::AllOrders, customers.len(), || processing::get_all_orders(customers))
    }

    pub fn pending_customers(&self, customers: &[Customer]) -> Vec<Customer> {
        self.run_rows(QueryKind::PendingCustomers, customers.len(), || {
            processing::customers_with_status(customers, &self.opts.pending_status)
        })
    }

    /// Eager counterpart of [`processing::get_large_orders`]: the result is collected before the
    /// run is reported.
    pub fn large_orders(&self, orders: &[Order]) -> Vec<Order> {
        self.run_rows(QueryKind::LargeOrders, orders.len(), || {
            processing::get_large_orders_above(IterSource::new(orders.iter().cloned()), self.opts.large_order_threshold)
                .collect()
        })
    }

    pub fn summary_by_category(&self, orders: &[Order]) -> Vec<OrderGroupResult> {
        self.run_rows(QueryKind::SummaryByCategory, orders.len(), || {
            processing::get_order_summary_by_category(orders)
        })
    }

    pub fn available_products(&self, products: &[Product]) -> Vec<Product> {
        self.run_rows(QueryKind::AvailableProducts, products.len(), || {
            processing::get_available_products(products)
        })
    }

    pub fn unique_customers(&self, customers: &[Customer]) -> Vec<Customer> {
        self.run_rows(QueryKind::UniqueCustomers, customers.len(), || {
            processing::get_unique_customers(customers)
        })
    }

    /// Reported with one output row (the scalar total).
    pub fn total_amount(&self, orders: &[Option<Order>]) -> Decimal {
        self.run(QueryKind::TotalAmount, orders.len(), |_| 1, || {
            processing::get_total_amount(orders.iter().map(Option::as_ref))
        })
    }

    pub fn customer_summaries(&self, customers: &[Customer], orders: &[Order]) -> Vec<CustomerOrderSummary> {
        self.run_rows(QueryKind::CustomerSummaries, customers.len() + orders.len(), || {
            processing::get_customer_summaries(customers, orders)
        })
    }

    pub fn page<T: Clone>(&self, items: &[T], page_number: i32, page_size: i32) -> Vec<T> {
        self.run_rows(QueryKind::Page, items.len(), || processing::get_page(items, page_number, page_size))
    }

    pub fn transform_orders(&self, orders: &[Order]) -> Vec<OrderDto> {
        self.transform_orders_at(orders, Local::now().naive_local())
    }

    pub fn transform_orders_at(&self, orders: &[Order], now: NaiveDateTime) -> Vec<OrderDto> {
        self.run_rows(QueryKind::TransformOrders, orders.len(), || {
            processing::transform_orders_at(orders, now, &self.opts.currency)
        })
    }

    fn run_rows<T>(&self, query: QueryKind, input_rows: usize, f: impl FnOnce() -> Vec<T>) -> Vec<T> {
        self.run(query, input_rows, Vec::len, f)
    }

    fn run<R>(
        &self,
        query: QueryKind,
        input_rows: usize,
        output_rows: impl FnOnce(&R) -> usize,
        f: impl FnOnce() -> R,
    ) -> R {
        let start = Instant::now();
        self.emit(QueryEvent::Started { query, input_rows });

        let out = f();

        let elapsed = start.elapsed();
        let output_rows = output_rows(&out);
        self.metrics.record(input_rows, output_rows, elapsed);
        self.emit(QueryEvent::Finished {
            query,
            output_rows,
            elapsed,
        });
        out
    }

    fn emit(&self, event: QueryEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}
