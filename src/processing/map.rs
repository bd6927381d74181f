//! Flattening and projection queries.

use chrono::{Local, NaiveDateTime};

use crate::types::dto::OrderDto;
use crate::types::{Customer, Order};

use super::format::{format_currency, order_number, CurrencyFormat};

/// Concatenate every customer's orders into one list.
///
/// Customer order and the order of each customer's orders are preserved.
pub fn get_all_orders(customers: &[Customer]) -> Vec<Order> {
    customers
        .iter()
        .flat_map(|c| c.orders.iter())
        .cloned()
        .collect()
}

/// Project orders into [`OrderDto`]s relative to the current local time, using `$` formatting.
///
/// See [`transform_orders_at`] for the field rules.
pub fn transform_orders(orders: &[Order]) -> Vec<OrderDto> {
    transform_orders_at(orders, Local::now().naive_local(), &CurrencyFormat::default())
}

/// Project orders into [`OrderDto`]s.
///
/// - `order_number`: `ORD-` plus the id zero-padded to six digits
/// - `status`: upper-cased
/// - `formatted_amount`: see [`format_currency`]
/// - `days_ago`: whole days from `order_date` to `now`, truncated toward zero (future dates give
///   negative values)
pub fn transform_orders_at(orders: &[Order], now: NaiveDateTime, currency: &CurrencyFormat) -> Vec<OrderDto> {
    orders
        .iter()
        .map(|o| OrderDto {
            order_number: order_number(o.id),
            status: o.status.to_uppercase(),
            formatted_amount: format_currency(o.amount, currency),
            days_ago: (now - o.order_date).num_days(),
        })
        .collect()
}
