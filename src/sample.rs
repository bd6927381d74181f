//! Deterministic synthetic customers for benchmarks and larger tests.

use chrono::{Duration, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::types::{Customer, Order, STATUS_COMPLETED, STATUS_PENDING};

/// Generate `count` customers, each owning 1 to 4 orders.
///
/// - customer `i`: id `i`, `FirstName{i}`/`LastName{i}`, `email{i}@example.com`, born 20..60
///   years before `now`
/// - order `j` of customer `i`: id `i * 10 + j`, amount 100..2000, status Pending/Completed,
///   category Electronics/Books, placed 1..30 days before `now`
///
/// The same `seed` and `now` always produce the same customers.
pub fn generate_customers(count: usize, seed: u64, now: NaiveDateTime) -> Vec<Customer> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut customers = Vec::with_capacity(count);

    for i in 0..count {
        let id = i32::try_from(i).unwrap_or(i32::MAX);
        let years: i64 = rng.random_range(20..60);
        let birth_date = (now - Duration::days(years * 365)).date();

        let order_count: i32 = rng.random_range(1..5);
        let orders = (0..order_count)
            .map(|j| {
                let amount: i64 = rng.random_range(100..2000);
                let status = if rng.random_bool(0.5) { STATUS_PENDING } else { STATUS_COMPLETED };
                let category = if rng.random_bool(0.5) { "Electronics" } else { "Books" };
                let days: i64 = rng.random_range(1..30);
                Order::new(
                    id.saturating_mul(10).saturating_add(j),
                    id,
                    category,
                    status,
                    Decimal::from(amount),
                    now - Duration::days(days),
                )
            })
            .collect();

        customers.push(
            Customer::new(id, format!("FirstName{i}"), format!("LastName{i}"), format!("email{i}@example.com"), birth_date)
                .with_orders(orders),
        );
    }

    customers
}
