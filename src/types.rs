//! Core data model: customers, their orders, and products.
//!
//! Entities are plain owned values. Query functions in [`crate::processing`] only borrow them and
//! always return freshly allocated results (see [`dto`] for the projection shapes).

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod dto;

/// Status label used by orders that have not been fulfilled yet.
pub const STATUS_PENDING: &str = "Pending";
/// Status label used by fulfilled orders.
pub const STATUS_COMPLETED: &str = "Completed";

/// A customer and the orders it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Used as the dedup key by [`crate::processing::get_unique_customers`]. Not validated.
    pub email: String,
    pub birth_date: NaiveDate,
    /// Orders in placement order.
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Customer {
    /// Create a customer without orders.
    pub fn new(
        id: i32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            birth_date,
            orders: Vec::new(),
        }
    }

    /// Builder-style helper to attach orders.
    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }

    /// `"{first} {last}"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A single order. `customer_id` is a lookup key only; nothing checks that the customer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    #[serde(default)]
    pub category: String,
    /// Free-form label, compared case-sensitively (see [`STATUS_PENDING`]).
    #[serde(default)]
    pub status: String,
    /// Non-negative by convention.
    pub amount: Decimal,
    pub order_date: NaiveDateTime,
}

impl Order {
    /// Create an order.
    pub fn new(
        id: i32,
        customer_id: i32,
        category: impl Into<String>,
        status: impl Into<String>,
        amount: Decimal,
        order_date: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            customer_id,
            category: category.into(),
            status: status.into(),
            amount,
            order_date,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == STATUS_PENDING
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub price: Decimal,
    pub in_stock: bool,
}

impl Product {
    /// Create a product.
    pub fn new(
        id: i32,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Decimal,
        in_stock: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
            in_stock,
        }
    }
}
