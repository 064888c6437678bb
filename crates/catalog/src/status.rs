use core::str::FromStr;
use serde::{Deserialize, Serialize};

use sellerdesk_core::{CatalogError, CatalogResult};

/// Listing lifecycle status.
///
/// Never stored upstream: always derived from inventory and approval via
/// [`derive_product_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductStatus {
    Active,
    Draft,
    OutOfStock,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [
        ProductStatus::Active,
        ProductStatus::Draft,
        ProductStatus::OutOfStock,
    ];

    /// Canonical view key (`active`, `draft`, `outOfStock`).
    pub fn as_key(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Draft => "draft",
            ProductStatus::OutOfStock => "outOfStock",
        }
    }

    /// Parse a view status key where "no key" means "no status filter".
    ///
    /// Blank keys and `all` map to `None`.
    pub fn from_view_key(key: &str) -> CatalogResult<Option<Self>> {
        let key = key.trim();
        if key.is_empty() || key.eq_ignore_ascii_case("all") {
            return Ok(None);
        }
        key.parse().map(Some)
    }
}

impl core::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for ProductStatus {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "active" => Ok(ProductStatus::Active),
            "draft" => Ok(ProductStatus::Draft),
            "outOfStock" | "out-of-stock" | "out_of_stock" | "outofstock" => {
                Ok(ProductStatus::OutOfStock)
            }
            other => Err(CatalogError::unknown_status(other)),
        }
    }
}

/// Derive the lifecycle status.
///
/// Stock takes precedence: anything at or below zero is out of stock whatever
/// the approval flag says.
pub fn derive_product_status(inventory_count: f64, approved: bool) -> ProductStatus {
    if inventory_count <= 0.0 {
        ProductStatus::OutOfStock
    } else if approved {
        ProductStatus::Active
    } else {
        ProductStatus::Draft
    }
}
