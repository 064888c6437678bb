use serde::{Serialize, Serializer};
use serde_json::{Map as JsonMap, Value as JsonValue};

use sellerdesk_core::{CategoryId, ProductId, SubcategoryId};

use crate::inventory::compute_inventory_count;
use crate::record::{RawProductRecord, coerce_number, coerce_text, is_truthy, lookup_path};
use crate::status::{ProductStatus, derive_product_status};

/// Upstream fields that may carry the seller's display name, highest priority first.
const SELLER_NAME_CANDIDATES: [&str; 3] = ["sellerName", "seller.name", "seller.storeName"];

/// A catalog record after field resolution and status derivation.
///
/// All upstream fields are retained verbatim (see [`fields`](Self::fields)),
/// except `inventoryCount` and `status`, which hold the derived values. The
/// typed accessors expose the resolved view the listing stages work on.
///
/// Fields are private so `status` can never drift from `(inventory_count,
/// approved)`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedProduct {
    id: Option<ProductId>,
    title: Option<String>,
    sku: Option<String>,
    price: f64,
    discount: f64,
    category_id: Option<CategoryId>,
    subcategory_id: Option<SubcategoryId>,
    seller_name: Option<String>,
    inventory_count: f64,
    approved: bool,
    status: ProductStatus,
    fields: JsonMap<String, JsonValue>,
}

impl NormalizedProduct {
    pub fn id(&self) -> Option<&ProductId> {
        self.id.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn sku(&self) -> Option<&str> {
        self.sku.as_deref()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    pub fn category_id(&self) -> Option<&CategoryId> {
        self.category_id.as_ref()
    }

    pub fn subcategory_id(&self) -> Option<&SubcategoryId> {
        self.subcategory_id.as_ref()
    }

    pub fn seller_name(&self) -> Option<&str> {
        self.seller_name.as_deref()
    }

    pub fn inventory_count(&self) -> f64 {
        self.inventory_count
    }

    pub fn approved(&self) -> bool {
        self.approved
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    /// Every upstream field, with `inventoryCount` and `status` overwritten.
    pub fn fields(&self) -> &JsonMap<String, JsonValue> {
        &self.fields
    }

    /// Look up any carried field by dotted path; `null` counts as absent.
    pub fn field(&self, path: &str) -> Option<&JsonValue> {
        lookup_path(&self.fields, path).filter(|v| !v.is_null())
    }

    /// Convert back into a raw record (e.g. to hand to another collaborator).
    pub fn to_raw(&self) -> RawProductRecord {
        RawProductRecord::new(self.fields.clone())
    }
}

/// Serializes as the flat upstream-shaped object, derived fields included.
impl Serialize for NormalizedProduct {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// Resolve a raw catalog record into its canonical form.
///
/// Total over any input: missing or malformed fields fall back to their
/// defaults (`0`, empty, not approved).
pub fn normalize_product_record(raw: &RawProductRecord) -> NormalizedProduct {
    let inventory_count = compute_inventory_count(raw);
    let approved = raw.get_path("approved").is_some_and(is_truthy);
    let status = derive_product_status(inventory_count, approved);

    let number = |key: &str| raw.get_path(key).and_then(coerce_number).unwrap_or(0.0);
    let text = |key: &str| raw.get_path(key).and_then(coerce_text);

    let seller_name = SELLER_NAME_CANDIDATES
        .iter()
        .filter_map(|path| raw.get_path(path).and_then(JsonValue::as_str))
        .find(|name| !name.is_empty())
        .map(str::to_string);

    let mut fields = raw.fields().clone();
    fields.insert("inventoryCount".to_string(), count_to_json(inventory_count));
    fields.insert("status".to_string(), JsonValue::from(status.as_key()));

    NormalizedProduct {
        id: raw.get_path("id").and_then(ProductId::from_json),
        title: text("title"),
        sku: text("sku"),
        price: number("price"),
        discount: number("discount"),
        category_id: raw.get_path("categoryId").and_then(CategoryId::from_json),
        subcategory_id: raw.get_path("subcategoryId").and_then(SubcategoryId::from_json),
        seller_name,
        inventory_count,
        approved,
        status,
        fields,
    }
}

/// Whole counts are written back as JSON integers, fractions as floats.
fn count_to_json(count: f64) -> JsonValue {
    if count.fract() == 0.0 && count.abs() < MAX_EXACT_INTEGER {
        JsonValue::from(count as i64)
    } else {
        JsonValue::from(count)
    }
}

/// Largest magnitude below which every whole `f64` is an exact `i64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Normalize a whole fetch result, preserving order.
pub fn normalize_all(raw: &[RawProductRecord]) -> Vec<NormalizedProduct> {
    raw.iter().map(normalize_product_record).collect()
}
