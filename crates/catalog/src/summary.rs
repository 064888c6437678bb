use serde::Serialize;

use sellerdesk_core::ValueObject;

use crate::product::NormalizedProduct;
use crate::status::ProductStatus;

/// Inventory at or below this many units counts as low stock.
pub const LOW_STOCK_THRESHOLD: f64 = 10.0;

/// Aggregate statistics for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub count: usize,
    pub total_value: f64,
    pub avg_price: f64,
    pub avg_discount: f64,
    pub low_stock: usize,
}

impl ValueObject for Summary {}

/// Per-status counts for the dashboard's status tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub active: usize,
    pub draft: usize,
    pub out_of_stock: usize,
    pub total: usize,
}

impl StatusCounts {
    pub fn get(&self, status: ProductStatus) -> usize {
        match status {
            ProductStatus::Active => self.active,
            ProductStatus::Draft => self.draft,
            ProductStatus::OutOfStock => self.out_of_stock,
        }
    }
}

impl ValueObject for StatusCounts {}

/// Summarize a listing. Empty input gives an all-zero summary, never NaN.
pub fn summarize_products(products: &[NormalizedProduct]) -> Summary {
    let count = products.len();
    let total_value: f64 = products.iter().map(NormalizedProduct::price).sum();
    let total_discount: f64 = products.iter().map(NormalizedProduct::discount).sum();
    let low_stock = products
        .iter()
        .filter(|p| p.inventory_count() <= LOW_STOCK_THRESHOLD)
        .count();

    let average = |total: f64| if count == 0 { 0.0 } else { total / count as f64 };

    Summary {
        count,
        total_value,
        avg_price: average(total_value),
        avg_discount: average(total_discount),
        low_stock,
    }
}

pub fn count_by_status(products: &[NormalizedProduct]) -> StatusCounts {
    products
        .iter()
        .fold(StatusCounts::default(), |mut counts, p| {
            match p.status() {
                ProductStatus::Active => counts.active += 1,
                ProductStatus::Draft => counts.draft += 1,
                ProductStatus::OutOfStock => counts.out_of_stock += 1,
            }
            counts.total += 1;
            counts
        })
}
