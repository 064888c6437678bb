use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value as JsonValue;

use sellerdesk_catalog::NameResolver;
use sellerdesk_core::{CategoryId, SubcategoryId};

/// Display label for ids the metadata tables do not know.
pub const UNKNOWN_LABEL: &str = "N/A";

/// Category/subcategory names, loaded once per session by the metadata service.
///
/// Read-only after construction; the pipeline only ever looks names up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogMetadata {
    categories: HashMap<CategoryId, String>,
    subcategories: HashMap<SubcategoryId, String>,
}

impl CatalogMetadata {
    pub fn new(
        categories: impl IntoIterator<Item = (CategoryId, String)>,
        subcategories: impl IntoIterator<Item = (SubcategoryId, String)>,
    ) -> Self {
        Self {
            categories: categories.into_iter().collect(),
            subcategories: subcategories.into_iter().collect(),
        }
    }

    pub fn category_label(&self, id: Option<&CategoryId>) -> &str {
        id.and_then(|id| self.category_name(id)).unwrap_or(UNKNOWN_LABEL)
    }

    pub fn subcategory_label(&self, id: Option<&SubcategoryId>) -> &str {
        id.and_then(|id| self.subcategory_name(id)).unwrap_or(UNKNOWN_LABEL)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.subcategories.is_empty()
    }
}

impl NameResolver for CatalogMetadata {
    fn category_name(&self, id: &CategoryId) -> Option<&str> {
        self.categories.get(id).map(String::as_str)
    }

    fn subcategory_name(&self, id: &SubcategoryId) -> Option<&str> {
        self.subcategories.get(id).map(String::as_str)
    }
}

/// One `{ "id": ..., "name": ... }` entry as served by the metadata service.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedEntry {
    pub id: JsonValue,
    pub name: String,
}

/// Wire shape of the metadata payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetadataSnapshot {
    #[serde(default)]
    pub categories: Vec<NamedEntry>,
    #[serde(default)]
    pub subcategories: Vec<NamedEntry>,
}

/// Entries whose id is neither a string nor a number are dropped.
impl From<MetadataSnapshot> for CatalogMetadata {
    fn from(snapshot: MetadataSnapshot) -> Self {
        Self::new(
            snapshot
                .categories
                .into_iter()
                .filter_map(|e| CategoryId::from_json(&e.id).map(|id| (id, e.name))),
            snapshot
                .subcategories
                .into_iter()
                .filter_map(|e| SubcategoryId::from_json(&e.id).map(|id| (id, e.name))),
        )
    }
}
