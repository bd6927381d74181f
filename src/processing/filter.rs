//! Filtering queries over customers and products.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::types::{Customer, Product, STATUS_PENDING};

/// Customers owning at least one order whose status is exactly `"Pending"`.
///
/// Relative order of the input is preserved.
pub fn get_customers_with_pending_orders(customers: &[Customer]) -> Vec<Customer> {
    customers_with_status(customers, STATUS_PENDING)
}

/// Customers owning at least one order whose status equals `status` (case-sensitive).
///
/// Stops scanning a customer's orders at the first match.
pub fn customers_with_status(customers: &[Customer], status: &str) -> Vec<Customer> {
    customers
        .iter()
        .filter(|c| c.orders.iter().any(|o| o.status == status))
        .cloned()
        .collect()
}

/// Products that are in stock, have a positive price and a non-empty category, sorted by price
/// ascending.
///
/// The sort is stable: products with equal prices keep their input order.
pub fn get_available_products(products: &[Product]) -> Vec<Product> {
    let mut out: Vec<Product> = products
        .iter()
        .filter(|p| p.in_stock)
        .filter(|p| p.price > Decimal::ZERO)
        .filter(|p| !p.category.is_empty())
        .cloned()
        .collect();
    out.sort_by(|a, b| a.price.cmp(&b.price));
    out
}

/// Drops customers whose email was already seen. The first occurrence wins.
pub fn get_unique_customers(customers: &[Customer]) -> Vec<Customer> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(customers.len());
    customers
        .iter()
        .filter(|c| seen.insert(c.email.as_str()))
        .cloned()
        .collect()
}
