use std::collections::HashMap;

use uuid::Uuid;

use crate::modules::reports::models::{CategoryAggregate, ProductAggregate};
use crate::modules::reports::services::period::DATE_FORMAT;
use crate::modules::sales::models::Sale;

/// Fold flat sale records into the category → product → date aggregate tree.
///
/// Categories and products appear in first-seen order across the input sale
/// list; auxiliary id indexes keep find-or-create O(1) without disturbing
/// that order. Line items whose product reference is unresolved are skipped
/// entirely: historical sales may reference since-deleted products, and those
/// must not create phantom entries or totals.
///
/// A sale dated outside the period contributes to the product and category
/// running totals but to no per-date bucket. Inherited behavior; the
/// repository date filter normally keeps the two aligned.
pub fn aggregate_sales(sales: &[Sale], period: &[String]) -> Vec<CategoryAggregate> {
    let mut categories: Vec<CategoryAggregate> = Vec::new();
    let mut category_index: HashMap<i64, usize> = HashMap::new();
    let mut product_index: HashMap<(i64, Uuid), usize> = HashMap::new();

    for sale in sales {
        let sale_date = sale.created_at.date().format(DATE_FORMAT).to_string();

        for item in &sale.items {
            let product_ref = match &item.product {
                Some(product_ref) => product_ref,
                None => continue,
            };

            let line_total = item.line_total();

            let category_pos = *category_index
                .entry(product_ref.category_id)
                .or_insert_with(|| {
                    categories.push(CategoryAggregate::new(
                        product_ref.category_id,
                        product_ref.category_name.clone(),
                    ));
                    categories.len() - 1
                });
            let category = &mut categories[category_pos];

            let product_pos = *product_index
                .entry((product_ref.category_id, product_ref.id))
                .or_insert_with(|| {
                    category.products.push(ProductAggregate::new(
                        product_ref.id,
                        product_ref.name.clone(),
                        period,
                    ));
                    category.products.len() - 1
                });

            let product = &mut category.products[product_pos];
            product.transactions_total += line_total;
            if let Some(bucket) = product.transactions.get_mut(&sale_date) {
                bucket.total_sales += line_total;
            }

            category.category_total += line_total;
        }
    }

    categories
}
