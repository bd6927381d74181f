//! Product catalog ingestion from CSV text.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{IngestionError, IngestionResult};
use crate::types::Product;

/// Columns every product CSV must carry (order can differ).
pub const PRODUCT_COLUMNS: [&str; 5] = ["id", "name", "category", "price", "in_stock"];

/// Parse products from CSV text with a header row.
///
/// Rules:
///
/// - Headers must contain all of [`PRODUCT_COLUMNS`]; extra columns are ignored.
/// - An empty `category` cell becomes an empty category; every other cell is required.
/// - `in_stock` accepts `true/false/1/0/yes/no` (case-insensitive).
pub fn ingest_products_from_csv_str(input: &str) -> IngestionResult<Vec<Product>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());
    ingest_products_from_reader(&mut rdr)
}

/// Parse products from an existing CSV reader.
pub fn ingest_products_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> IngestionResult<Vec<Product>> {
    let headers = rdr.headers()?.clone();

    let mut col_idxs = [0usize; PRODUCT_COLUMNS.len()];
    for (slot, column) in col_idxs.iter_mut().zip(PRODUCT_COLUMNS) {
        *slot = headers.iter().position(|h| h == column).ok_or_else(|| IngestionError::SchemaMismatch {
            message: format!(
                "missing required column '{column}'. headers={:?}",
                headers.iter().collect::<Vec<_>>()
            ),
        })?;
    }
    let [id_idx, name_idx, category_idx, price_idx, in_stock_idx] = col_idxs;

    let mut products = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // 1-based, and the header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;
        let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

        products.push(Product {
            id: parse_cell(user_row, "id", cell(id_idx), |s| s.parse::<i32>().map_err(|e| e.to_string()))?,
            name: required(user_row, "name", cell(name_idx))?.to_owned(),
            category: cell(category_idx).to_owned(),
            price: parse_cell(user_row, "price", cell(price_idx), |s| {
                Decimal::from_str(s).map_err(|e| e.to_string())
            })?,
            in_stock: parse_cell(user_row, "in_stock", cell(in_stock_idx), parse_bool)?,
        });
    }

    Ok(products)
}

fn required<'a>(row: usize, column: &str, raw: &'a str) -> IngestionResult<&'a str> {
    if raw.is_empty() {
        return Err(IngestionError::ParseError {
            row,
            column: column.to_owned(),
            raw: raw.to_owned(),
            message: "value is required".to_string(),
        });
    }
    Ok(raw)
}

fn parse_cell<T>(
    row: usize,
    column: &str,
    raw: &str,
    parse: impl FnOnce(&str) -> Result<T, String>,
) -> IngestionResult<T> {
    let raw = required(row, column, raw)?;
    parse(raw).map_err(|message| IngestionError::ParseError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message,
    })
}

fn parse_bool(s: &str) -> Result<bool, String> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" => Ok(true),
        "false" | "f" | "0" | "no" | "n" => Ok(false),
        _ => Err("expected bool (true/false/1/0/yes/no)".to_string()),
    }
}
