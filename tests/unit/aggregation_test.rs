// Scenario tests for the sales aggregation pipeline:
// grouping, first-seen ordering, gap filling, totals conservation, and the
// silent-skip policy for unresolved products.

use chrono::NaiveDate;
use uuid::Uuid;

use warungpos::reports::services::aggregate_sales;
use warungpos::reports::services::generate_period;
use warungpos::sales::models::{ProductRef, Sale, SaleLineItem};

fn sale_on(date: &str, items: Vec<SaleLineItem>) -> Sale {
    let created_at = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(14, 0, 0)
        .unwrap();

    Sale {
        id: Uuid::new_v4(),
        total: items.iter().map(SaleLineItem::line_total).sum(),
        customer_id: Uuid::new_v4(),
        created_at,
        items,
    }
}

fn line(product: &ProductRef, price: f64, qty: i64) -> SaleLineItem {
    SaleLineItem {
        price,
        total_item: qty,
        product: Some(product.clone()),
    }
}

fn product_ref(name: &str, category_id: i64, category_name: &str) -> ProductRef {
    ProductRef {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category_id,
        category_name: category_name.to_string(),
    }
}

#[test]
fn test_burger_scenario() {
    // Two sales of the same product on consecutive days
    let burger = product_ref("Burger", 1, "Food");
    let sales = vec![
        sale_on("2024-01-01", vec![line(&burger, 10.0, 2)]),
        sale_on("2024-01-02", vec![line(&burger, 10.0, 1)]),
    ];
    let period = generate_period("2024-01-01", "2024-01-02").unwrap();

    let report = aggregate_sales(&sales, &period);

    assert_eq!(report.len(), 1);
    let category = &report[0];
    assert_eq!(category.category_name, "Food");
    assert_eq!(category.category_total, 30.0);
    assert_eq!(category.products.len(), 1);

    let product = &category.products[0];
    assert_eq!(product.product_name, "Burger");
    assert_eq!(product.transactions_total, 30.0);
    assert_eq!(product.sales_on("2024-01-01"), 20.0);
    assert_eq!(product.sales_on("2024-01-02"), 10.0);
}

#[test]
fn test_empty_sales_yield_empty_report() {
    let period = generate_period("2024-01-01", "2024-01-01").unwrap();
    let report = aggregate_sales(&[], &period);
    assert!(report.is_empty());
}

#[test]
fn test_totals_are_conserved() {
    let burger = product_ref("Burger", 1, "Food");
    let satay = product_ref("Satay", 1, "Food");
    let tea = product_ref("Iced Tea", 2, "Drinks");

    let sales = vec![
        sale_on(
            "2024-03-01",
            vec![line(&burger, 25_000.0, 2), line(&tea, 8_000.0, 3)],
        ),
        sale_on("2024-03-02", vec![line(&satay, 30_000.0, 1)]),
        sale_on(
            "2024-03-03",
            vec![line(&burger, 25_000.0, 1), line(&satay, 30_000.0, 2)],
        ),
    ];
    let period = generate_period("2024-03-01", "2024-03-03").unwrap();

    let expected: f64 = sales
        .iter()
        .flat_map(|s| s.items.iter())
        .filter(|i| i.product.is_some())
        .map(|i| i.line_total())
        .sum();

    let report = aggregate_sales(&sales, &period);

    let category_sum: f64 = report.iter().map(|c| c.category_total).sum();
    assert_eq!(category_sum, expected);

    for category in &report {
        let product_sum: f64 = category.products.iter().map(|p| p.transactions_total).sum();
        assert_eq!(product_sum, category.category_total);

        for product in &category.products {
            let date_sum: f64 = product.transactions.values().map(|t| t.total_sales).sum();
            assert_eq!(date_sum, product.transactions_total);
        }
    }
}

#[test]
fn test_every_product_is_gap_filled() {
    let burger = product_ref("Burger", 1, "Food");
    let sales = vec![sale_on("2024-03-02", vec![line(&burger, 10.0, 1)])];
    let period = generate_period("2024-03-01", "2024-03-05").unwrap();

    let report = aggregate_sales(&sales, &period);
    let product = &report[0].products[0];

    assert_eq!(product.transactions.len(), period.len());
    for date in &period {
        let bucket = product.transactions.get(date).expect("missing period date");
        assert_eq!(bucket.date_transaction, *date);
    }
    assert_eq!(product.sales_on("2024-03-01"), 0.0);
    assert_eq!(product.sales_on("2024-03-02"), 10.0);
    assert_eq!(product.sales_on("2024-03-05"), 0.0);
}

#[test]
fn test_aggregation_is_deterministic() {
    let burger = product_ref("Burger", 1, "Food");
    let tea = product_ref("Iced Tea", 2, "Drinks");
    let sales = vec![
        sale_on("2024-01-01", vec![line(&tea, 5.0, 1), line(&burger, 10.0, 1)]),
        sale_on("2024-01-02", vec![line(&burger, 10.0, 3)]),
    ];
    let period = generate_period("2024-01-01", "2024-01-02").unwrap();

    let first = aggregate_sales(&sales, &period);
    let second = aggregate_sales(&sales, &period);

    assert_eq!(first, second);
    // Ordering follows first appearance in the sale list, not ids or names
    assert_eq!(first[0].category_name, "Drinks");
    assert_eq!(first[1].category_name, "Food");
}

#[test]
fn test_unresolved_products_never_create_entries() {
    let burger = product_ref("Burger", 1, "Food");
    let orphan = SaleLineItem {
        price: 1_000_000.0,
        total_item: 9,
        product: None,
    };

    let sales = vec![sale_on(
        "2024-01-01",
        vec![line(&burger, 10.0, 1), orphan],
    )];
    let period = generate_period("2024-01-01", "2024-01-01").unwrap();

    let report = aggregate_sales(&sales, &period);

    assert_eq!(report.len(), 1);
    assert_eq!(report[0].category_total, 10.0);
    assert_eq!(report[0].products.len(), 1);
    assert_eq!(report[0].products[0].transactions_total, 10.0);
}

#[test]
fn test_out_of_period_sales_count_toward_totals_but_not_buckets() {
    let burger = product_ref("Burger", 1, "Food");
    let sales = vec![
        sale_on("2024-01-01", vec![line(&burger, 10.0, 1)]),
        sale_on("2024-06-01", vec![line(&burger, 10.0, 4)]),
    ];
    let period = generate_period("2024-01-01", "2024-01-02").unwrap();

    let report = aggregate_sales(&sales, &period);
    let product = &report[0].products[0];

    assert_eq!(report[0].category_total, 50.0);
    assert_eq!(product.transactions_total, 50.0);
    assert_eq!(product.transactions.len(), 2);
    let bucket_sum: f64 = product.transactions.values().map(|t| t.total_sales).sum();
    assert_eq!(bucket_sum, 10.0);
}
