use query_recipes::ingestion::{ingest_customers_from_json_str, ingest_products_from_csv_str, ingest_products_from_reader};
use query_recipes::processing::{get_available_products, get_customer_summaries, get_all_orders};
use query_recipes::IngestionError;
use rust_decimal::Decimal;

const CUSTOMERS_JSON: &str = include_str!("fixtures/customers.json");
const PRODUCTS_CSV: &str = include_str!("fixtures/products.csv");

#[test]
fn customers_fixture_parses_with_nested_orders() {
    let customers = ingest_customers_from_json_str(CUSTOMERS_JSON).unwrap();

    assert_eq!(customers.len(), 3);
    assert_eq!(customers[0].full_name(), "John Doe");
    assert_eq!(customers[0].orders.len(), 2);
    assert_eq!(customers[0].orders[0].amount, Decimal::from(1500));
    assert_eq!(customers[0].orders[1].amount, Decimal::from(200));
    assert!(customers[2].orders.is_empty());
}

#[test]
fn customers_fixture_feeds_outer_join() {
    let customers = ingest_customers_from_json_str(CUSTOMERS_JSON).unwrap();
    let orders = get_all_orders(&customers);

    let summaries = get_customer_summaries(&customers, &orders);
    assert_eq!(summaries.len(), 3);
    assert_eq!(summaries[0].total_spent, Decimal::from(1700));
    assert_eq!(summaries[1].total_spent, Decimal::from(2000));
    assert_eq!(summaries[2].total_orders, 0);
}

#[test]
fn invalid_json_is_a_json_error() {
    let err = ingest_customers_from_json_str("[{").unwrap_err();
    assert!(matches!(err, IngestionError::Json(_)));
    assert!(err.to_string().starts_with("json error"));
}

#[test]
fn customer_missing_field_is_schema_mismatch() {
    let input = r#"[{"id":1,"first_name":"A","last_name":"B","birth_date":"1990-01-01"}]"#;
    let err = ingest_customers_from_json_str(input).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("row 1"));
    assert!(msg.contains("email"));
}

#[test]
fn products_fixture_parses_and_filters() {
    let products = ingest_products_from_csv_str(PRODUCTS_CSV).unwrap();
    assert_eq!(products.len(), 4);
    assert!(!products[2].in_stock);

    let available = get_available_products(&products);
    let ids: Vec<i32> = available.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 4, 1]);
}

#[test]
fn products_missing_column_is_schema_mismatch() {
    let err = ingest_products_from_csv_str("id,name,price,in_stock\n1,Pen,1,true\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("missing required column 'category'"));
}

#[test]
fn products_from_custom_reader() {
    let input = "id;name;category;price;in_stock\n7;Lamp;Home;35.99;1\n";
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_reader(input.as_bytes());

    let products = ingest_products_from_reader(&mut rdr).unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].price, Decimal::new(3599, 2));
    assert!(products[0].in_stock);
}

#[test]
fn ragged_csv_row_is_a_csv_error() {
    let err = ingest_products_from_csv_str("id,name,category,price,in_stock\n1,Pen\n").unwrap_err();
    assert!(matches!(err, IngestionError::Csv(_)));
}
