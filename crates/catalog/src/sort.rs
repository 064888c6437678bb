use core::cmp::Ordering;

use serde::Serialize;

use crate::product::NormalizedProduct;

/// Listing order selected by the seller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Upstream (insertion) order.
    #[default]
    Recent,
    PriceHigh,
    PriceLow,
    StockLow,
    StockHigh,
}

impl SortKey {
    /// Map a view sort key; unknown keys fall back to [`SortKey::Recent`].
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "price-high" => SortKey::PriceHigh,
            "price-low" => SortKey::PriceLow,
            "stock-low" => SortKey::StockLow,
            "stock-high" => SortKey::StockHigh,
            _ => SortKey::Recent,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            SortKey::Recent => "recent",
            SortKey::PriceHigh => "price-high",
            SortKey::PriceLow => "price-low",
            SortKey::StockLow => "stock-low",
            SortKey::StockHigh => "stock-high",
        }
    }
}

impl From<&str> for SortKey {
    fn from(key: &str) -> Self {
        Self::from_key(key)
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_key())
    }
}

/// Return a sorted copy; the input slice is left untouched.
///
/// `slice::sort_by` is stable, so equal keys keep their upstream order.
pub fn sort_products(products: &[NormalizedProduct], key: SortKey) -> Vec<NormalizedProduct> {
    let mut sorted = products.to_vec();
    match key {
        SortKey::Recent => {}
        SortKey::PriceHigh => sorted.sort_by(|a, b| compare(b.price(), a.price())),
        SortKey::PriceLow => sorted.sort_by(|a, b| compare(a.price(), b.price())),
        SortKey::StockLow => {
            sorted.sort_by(|a, b| compare(a.inventory_count(), b.inventory_count()))
        }
        SortKey::StockHigh => {
            sorted.sort_by(|a, b| compare(b.inventory_count(), a.inventory_count()))
        }
    }
    sorted
}

/// Numeric order where `-0.0 == 0.0`. Inputs are always finite.
fn compare(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
