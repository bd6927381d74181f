//! Customer/order left outer join.

use std::collections::HashMap;

use crate::types::dto::CustomerOrderSummary;
use crate::types::{Customer, Order};

use super::reduce::AmountAccumulator;

/// One summary per customer, in input order, joined on `customer.id == order.customer_id`.
///
/// Customers without matching orders are kept with zero totals. Orders pointing at unknown
/// customers are ignored. A customer listed twice gets two identical summaries.
pub fn get_customer_summaries(customers: &[Customer], orders: &[Order]) -> Vec<CustomerOrderSummary> {
    let mut by_customer: HashMap<i32, AmountAccumulator> = HashMap::new();
    for o in orders {
        by_customer.entry(o.customer_id).or_default().push(o.amount);
    }

    customers
        .iter()
        .map(|c| {
            let acc = by_customer.get(&c.id).copied().unwrap_or_default();
            CustomerOrderSummary {
                customer_name: c.full_name(),
                total_orders: acc.count,
                total_spent: acc.total,
            }
        })
        .collect()
}
