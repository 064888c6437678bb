//! Export hand-off.
//!
//! The dashboard decides *what* goes into a download (the visible listing and
//! the caller's columns); an external collaborator owns the file format. This
//! module turns products into plain text cells and passes them to an
//! [`ExportSink`].

use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value as JsonValue;

use sellerdesk_catalog::{NameResolver, NormalizedProduct};
use sellerdesk_core::{CatalogError, CatalogResult, ValueObject};

use crate::metadata::UNKNOWN_LABEL;

/// What a column renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportField {
    Id,
    Title,
    Sku,
    Price,
    Discount,
    InventoryCount,
    Approved,
    Status,
    /// Resolved category name.
    Category,
    /// Resolved subcategory name.
    Subcategory,
    Seller,
    /// Any upstream field by dotted path.
    Path(String),
}

impl FromStr for ExportField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s.trim() {
            "" => return Err(CatalogError::invalid_column("empty field")),
            "id" => ExportField::Id,
            "title" => ExportField::Title,
            "sku" => ExportField::Sku,
            "price" => ExportField::Price,
            "discount" => ExportField::Discount,
            "inventoryCount" => ExportField::InventoryCount,
            "approved" => ExportField::Approved,
            "status" => ExportField::Status,
            "category" => ExportField::Category,
            "subcategory" => ExportField::Subcategory,
            "seller" => ExportField::Seller,
            path => ExportField::Path(path.to_string()),
        };
        Ok(field)
    }
}

/// One output column: a header and the field it renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportColumn {
    pub header: String,
    pub field: ExportField,
}

impl ValueObject for ExportColumn {}

impl ExportColumn {
    pub fn new(header: impl Into<String>, field: ExportField) -> Self {
        Self {
            header: header.into(),
            field,
        }
    }

    /// Parse a comma-separated list of column specs.
    pub fn parse_list(specs: &str) -> CatalogResult<Vec<Self>> {
        specs
            .split(',')
            .filter(|spec| !spec.trim().is_empty())
            .map(str::parse)
            .collect()
    }
}

/// `Header=field`, or just `field` (the field name doubles as header).
impl FromStr for ExportColumn {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (header, field) = match s.split_once('=') {
            Some((header, field)) => (header.trim(), field),
            None => (s.trim(), s),
        };
        if header.is_empty() {
            return Err(CatalogError::invalid_column(format!("missing header in {s:?}")));
        }
        let field = field
            .parse()
            .map_err(|_| CatalogError::invalid_column(format!("missing field in {s:?}")))?;
        Ok(Self::new(header, field))
    }
}

/// Tabular snapshot handed to the export collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBatch {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub generated_at: DateTime<Utc>,
}

/// External export collaborator (spreadsheet, CSV, ...).
pub trait ExportSink {
    type Error;

    fn export(&mut self, batch: &ExportBatch) -> Result<(), Self::Error>;
}

/// Render `products` into one row per product, one cell per column.
pub fn build_export_batch<R: NameResolver + ?Sized>(
    products: &[NormalizedProduct],
    columns: &[ExportColumn],
    resolver: &R,
    generated_at: DateTime<Utc>,
) -> ExportBatch {
    let headers = columns.iter().map(|c| c.header.clone()).collect();
    let rows = products
        .iter()
        .map(|p| columns.iter().map(|c| render_cell(p, &c.field, resolver)).collect())
        .collect();

    ExportBatch {
        headers,
        rows,
        generated_at,
    }
}

fn render_cell<R: NameResolver + ?Sized>(
    product: &NormalizedProduct,
    field: &ExportField,
    resolver: &R,
) -> String {
    match field {
        ExportField::Id => product.id().map(ToString::to_string).unwrap_or_default(),
        ExportField::Title => product.title().unwrap_or_default().to_string(),
        ExportField::Sku => product.sku().unwrap_or_default().to_string(),
        ExportField::Price => product.price().to_string(),
        ExportField::Discount => product.discount().to_string(),
        ExportField::InventoryCount => product.inventory_count().to_string(),
        ExportField::Approved => product.approved().to_string(),
        ExportField::Status => product.status().to_string(),
        ExportField::Category => product
            .category_id()
            .and_then(|id| resolver.category_name(id))
            .unwrap_or(UNKNOWN_LABEL)
            .to_string(),
        ExportField::Subcategory => product
            .subcategory_id()
            .and_then(|id| resolver.subcategory_name(id))
            .unwrap_or(UNKNOWN_LABEL)
            .to_string(),
        ExportField::Seller => product.seller_name().unwrap_or_default().to_string(),
        ExportField::Path(path) => product.field(path).map(render_json).unwrap_or_default(),
    }
}

fn render_json(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}
