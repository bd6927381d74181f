//! Customer ingestion from JSON text.
//!
//! Supported inputs:
//! - A JSON array of customer objects: `[{"id":1, ...}, {"id":2, ...}]`
//! - A single customer object, treated as a one-element array
//!
//! Each customer may carry a nested `orders` array; a missing `orders` field means no orders.
//! Amounts can be written as JSON numbers or strings (`"1500.00"`); timestamps use
//! `YYYY-MM-DDTHH:MM:SS` and birth dates `YYYY-MM-DD`.

use crate::error::{IngestionError, IngestionResult};
use crate::types::Customer;

/// Parse customers (with their orders) from JSON text.
pub fn ingest_customers_from_json_str(input: &str) -> IngestionResult<Vec<Customer>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(IngestionError::SchemaMismatch {
            message: "json input is empty".to_string(),
        });
    }

    let value: serde_json::Value = serde_json::from_str(trimmed)?;
    let items = match value {
        serde_json::Value::Array(items) => items,
        obj @ serde_json::Value::Object(_) => vec![obj],
        _ => {
            return Err(IngestionError::SchemaMismatch {
                message: "json must be an object or an array of objects".to_string(),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx0, item)| {
            let row_num = idx0 + 1;
            if !item.is_object() {
                return Err(IngestionError::SchemaMismatch {
                    message: format!("row {row_num} is not a json object"),
                });
            }
            serde_json::from_value::<Customer>(item).map_err(|e| IngestionError::SchemaMismatch {
                message: format!("row {row_num}: {e}"),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::ingest_customers_from_json_str;
    use rust_decimal::Decimal;

    #[test]
    fn single_object_is_one_customer() {
        let input = r#"{"id":1,"first_name":"Ada","last_name":"Lovelace","email":"ada@example.com","birth_date":"1815-12-10",
            "orders":[{"id":9,"customer_id":1,"category":"Books","status":"Pending","amount":"12.5","order_date":"2024-01-02T03:04:05"}]}"#;
        let customers = ingest_customers_from_json_str(input).unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].orders[0].amount, Decimal::new(125, 1));
    }

    #[test]
    fn empty_input_is_schema_mismatch() {
        let err = ingest_customers_from_json_str("   ").unwrap_err();
        assert!(err.to_string().contains("json input is empty"));
    }

    #[test]
    fn scalar_is_rejected() {
        let err = ingest_customers_from_json_str("42").unwrap_err();
        assert!(err.to_string().contains("schema mismatch"));
    }

    #[test]
    fn non_object_row_is_reported_by_position() {
        let input = r#"[{"id":1,"first_name":"A","last_name":"B","email":"a@b","birth_date":"1990-01-01"}, 7]"#;
        let err = ingest_customers_from_json_str(input).unwrap_err();
        assert!(err.to_string().contains("row 2 is not a json object"));
    }
}
