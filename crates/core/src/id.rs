//! Opaque identifiers used across the catalog.
//!
//! Upstream ids may arrive as JSON strings or numbers; both are carried as their
//! textual form so equality is exact and lookups stay cheap.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::CatalogError;

/// Identifier of a product record (pass-through from the catalog service).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

/// Identifier of a category (resolved to a name by the metadata collaborator).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

/// Identifier of a subcategory (resolved to a name by the metadata collaborator).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubcategoryId(String);

macro_rules! impl_opaque_id {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Read an identifier out of an upstream JSON value.
            ///
            /// Strings and numbers are accepted; `null`, booleans, arrays and
            /// objects yield `None`.
            pub fn from_json(value: &JsonValue) -> Option<Self> {
                match value {
                    JsonValue::String(s) => Some(Self(s.clone())),
                    JsonValue::Number(n) => Some(Self(n.to_string())),
                    _ => None,
                }
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl FromStr for $t {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(CatalogError::invalid_id(format!("{}: empty", $name)));
                }
                Ok(Self(trimmed.to_string()))
            }
        }
    };
}

impl_opaque_id!(ProductId, "ProductId");
impl_opaque_id!(CategoryId, "CategoryId");
impl_opaque_id!(SubcategoryId, "SubcategoryId");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ids_accept_strings_and_numbers() {
        assert_eq!(CategoryId::from_json(&json!("c-1")), Some(CategoryId::new("c-1")));
        assert_eq!(CategoryId::from_json(&json!(42)), Some(CategoryId::new("42")));
        assert_eq!(CategoryId::from_json(&json!(null)), None);
        assert_eq!(CategoryId::from_json(&json!({"id": 1})), None);
    }

    #[test]
    fn parsing_trims_and_rejects_empty() {
        let id: ProductId = "  p-9 ".parse().unwrap();
        assert_eq!(id.as_str(), "p-9");

        let err = "   ".parse::<SubcategoryId>().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidId(msg) if msg.contains("SubcategoryId")));
    }
}
