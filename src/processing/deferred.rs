//! Deferred "large orders" query with predicate pushdown.
//!
//! [`get_large_orders`] returns a [`LargeOrders`] iterator and does no work up front. The first
//! call to `next()` asks the [`OrderSource`] for its orders, passing the [`AmountFilter`] so a
//! source backed by something smarter than a `Vec` can apply it natively. The predicate is always
//! re-applied afterwards, so a source may ignore the hint.
//!
//! ```rust
//! use query_recipes::processing::{get_large_orders, IterSource};
//! # use query_recipes::types::Order;
//! # fn orders() -> Vec<Order> { Vec::new() }
//!
//! let orders = orders();
//! let mut large = get_large_orders(IterSource::new(orders.iter().cloned()));
//! // Nothing has been scanned yet.
//! assert!(!large.is_evaluated());
//! let _first = large.next();
//! assert!(large.is_evaluated());
//! ```

use std::fmt;

use rust_decimal::Decimal;

use crate::types::Order;

/// Orders strictly above this amount count as large.
pub const LARGE_ORDER_THRESHOLD: Decimal = Decimal::ONE_THOUSAND;

/// Predicate handed to an [`OrderSource`]: `order.amount > above`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountFilter {
    pub above: Decimal,
}

impl AmountFilter {
    pub fn above(threshold: Decimal) -> Self {
        Self { above: threshold }
    }

    pub fn matches(&self, order: &Order) -> bool {
        order.amount > self.above
    }
}

/// A queryable collection of orders.
pub trait OrderSource {
    type Scan: Iterator<Item = Order>;

    /// Yield the source's orders. Implementations may drop orders that fail `filter`, but are
    /// not required to.
    fn scan(self, filter: &AmountFilter) -> Self::Scan;
}

impl OrderSource for Vec<Order> {
    type Scan = std::vec::IntoIter<Order>;

    fn scan(mut self, filter: &AmountFilter) -> Self::Scan {
        self.retain(|o| filter.matches(o));
        self.into_iter()
    }
}

/// Adapts any iterator of orders into an [`OrderSource`] that ignores the pushed-down filter.
#[derive(Debug, Clone)]
pub struct IterSource<I>(I);

impl<I> IterSource<I>
where
    I: IntoIterator<Item = Order>,
{
    pub fn new(orders: I) -> Self {
        Self(orders)
    }
}

impl<I> OrderSource for IterSource<I>
where
    I: IntoIterator<Item = Order>,
{
    type Scan = I::IntoIter;

    fn scan(self, _filter: &AmountFilter) -> Self::Scan {
        self.0.into_iter()
    }
}

/// Lazily evaluated orders above a threshold, largest amount first.
///
/// Equal amounts keep the order in which the source yielded them.
pub struct LargeOrders<S: OrderSource> {
    source: Option<S>,
    filter: AmountFilter,
    buffer: Option<std::vec::IntoIter<Order>>,
}

impl<S: OrderSource> LargeOrders<S> {
    fn new(source: S, filter: AmountFilter) -> Self {
        Self {
            source: Some(source),
            filter,
            buffer: None,
        }
    }

    /// Whether the source has been scanned yet.
    pub fn is_evaluated(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn filter(&self) -> AmountFilter {
        self.filter
    }

    fn materialize(source: S, filter: AmountFilter) -> std::vec::IntoIter<Order> {
        let mut out: Vec<Order> = source
            .scan(&filter)
            .filter(|o| filter.matches(o))
            .collect();
        out.sort_by(|a, b| b.amount.cmp(&a.amount));
        out.into_iter()
    }
}

impl<S: OrderSource> Iterator for LargeOrders<S> {
    type Item = Order;

    fn next(&mut self) -> Option<Order> {
        if self.buffer.is_none() {
            let source = self.source.take()?;
            self.buffer = Some(Self::materialize(source, self.filter));
        }
        self.buffer.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.buffer {
            Some(buf) => buf.size_hint(),
            None => (0, None),
        }
    }
}

impl<S: OrderSource> fmt::Debug for LargeOrders<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LargeOrders")
            .field("filter", &self.filter)
            .field("evaluated", &self.is_evaluated())
            .finish()
    }
}

/// Orders with `amount > 1000`, sorted by amount descending, evaluated on first use.
pub fn get_large_orders<S: OrderSource>(source: S) -> LargeOrders<S> {
    get_large_orders_above(source, LARGE_ORDER_THRESHOLD)
}

/// Like [`get_large_orders`] with a caller-chosen threshold.
pub fn get_large_orders_above<S: OrderSource>(source: S, threshold: Decimal) -> LargeOrders<S> {
    LargeOrders::new(source, AmountFilter::above(threshold))
}
