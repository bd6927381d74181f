//! Projection records produced by queries. They carry no identity and are built fresh per call.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display-oriented view of an [`crate::types::Order`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDto {
    /// `ORD-` followed by the order id zero-padded to six digits.
    pub order_number: String,
    /// Upper-cased status.
    pub status: String,
    /// Currency string such as `$1,500.00`.
    pub formatted_amount: String,
    /// Whole days between the order date and "now", truncated toward zero. Negative for future dates.
    pub days_ago: i64,
}

/// Per-category aggregate over orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderGroupResult {
    pub category: String,
    pub total_amount: Decimal,
    pub count: usize,
    pub average_amount: Decimal,
}

/// Per-customer aggregate produced by the customer/order outer join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerOrderSummary {
    pub customer_name: String,
    pub total_orders: usize,
    pub total_spent: Decimal,
}
