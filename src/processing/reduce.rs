//! Aggregations over orders.

use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::types::dto::OrderGroupResult;
use crate::types::Order;

/// Running totals for one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct AmountAccumulator {
    pub(crate) count: usize,
    pub(crate) total: Decimal,
}

impl AmountAccumulator {
    pub(crate) fn push(&mut self, amount: Decimal) {
        self.count += 1;
        self.total += amount;
    }
}

/// One [`OrderGroupResult`] per distinct category, in first-occurrence order.
///
/// Categories are compared as exact strings, so an empty category forms its own group.
pub fn get_order_summary_by_category(orders: &[Order]) -> Vec<OrderGroupResult> {
    let mut groups: IndexMap<&str, AmountAccumulator> = IndexMap::new();
    for o in orders {
        groups.entry(o.category.as_str()).or_default().push(o.amount);
    }

    groups
        .into_iter()
        .map(|(category, acc)| OrderGroupResult {
            category: category.to_string(),
            total_amount: acc.total,
            count: acc.count,
            // Groups are never empty.
            average_amount: acc.total / Decimal::from(acc.count),
        })
        .collect()
}

/// Sum of `amount` over the present orders. Absent entries are skipped; no orders sums to zero.
pub fn get_total_amount<'a, I>(orders: I) -> Decimal
where
    I: IntoIterator<Item = Option<&'a Order>>,
{
    orders
        .into_iter()
        .flatten()
        .map(|o| o.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::{get_order_summary_by_category, get_total_amount};
    use crate::types::Order;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn order(id: i32, category: &str, amount: i64) -> Order {
        let at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Order::new(id, 1, category, "Pending", Decimal::from(amount), at)
    }

    #[test]
    fn groups_in_first_occurrence_order() {
        let orders = vec![
            order(1, "Books", 10),
            order(2, "Electronics", 100),
            order(3, "Books", 30),
            order(4, "", 5),
        ];
        let out = get_order_summary_by_category(&orders);
        let cats: Vec<&str> = out.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(cats, vec!["Books", "Electronics", ""]);

        assert_eq!(out[0].total_amount, Decimal::from(40));
        assert_eq!(out[0].count, 2);
        assert_eq!(out[0].average_amount, Decimal::from(20));
        assert_eq!(out[2].count, 1);
    }

    #[test]
    fn category_keys_are_case_sensitive() {
        let orders = vec![order(1, "books", 1), order(2, "Books", 1)];
        assert_eq!(get_order_summary_by_category(&orders).len(), 2);
    }

    #[test]
    fn average_keeps_decimal_precision() {
        let orders = vec![order(1, "A", 1), order(2, "A", 2)];
        let out = get_order_summary_by_category(&orders);
        assert_eq!(out[0].average_amount, Decimal::new(15, 1));
    }

    #[test]
    fn no_orders_means_no_groups() {
        assert!(get_order_summary_by_category(&[]).is_empty());
    }

    #[test]
    fn total_skips_missing_orders() {
        let a = order(1, "A", 1500);
        let b = order(2, "B", 200);
        assert_eq!(get_total_amount([Some(&a), None, Some(&b)]), Decimal::from(1700));
    }

    #[test]
    fn total_of_empty_or_all_missing_is_zero() {
        assert_eq!(get_total_amount(std::iter::empty::<Option<&Order>>()), Decimal::ZERO);
        assert_eq!(get_total_amount([None::<&Order>, None]), Decimal::ZERO);
    }
}
