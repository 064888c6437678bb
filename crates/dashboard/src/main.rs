//! Local preview of the listing pipeline.
//!
//! `sellerdesk-preview <records.json> [metadata.json]` reads a saved catalog
//! response, applies the view configured through `SELLERDESK_*` variables and
//! prints the resulting listing (and export batch, if columns are configured)
//! as JSON on stdout.

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use serde_json::{Value as JsonValue, json};

use sellerdesk_catalog::RawProductRecord;
use sellerdesk_dashboard::{
    CatalogMetadata, DashboardConfig, MetadataSnapshot, build_export_batch, run_listing_pipeline,
};

fn main() -> anyhow::Result<()> {
    sellerdesk_observability::init();

    let mut args = std::env::args().skip(1);
    let records_path = args
        .next()
        .context("usage: sellerdesk-preview <records.json> [metadata.json]")?;
    let records = read_records(Path::new(&records_path))?;

    let metadata = match args.next() {
        Some(path) => read_metadata(Path::new(&path))?,
        None => {
            tracing::warn!("no metadata file given; category names will not resolve");
            CatalogMetadata::default()
        }
    };

    let config = DashboardConfig::from_env();
    let view = run_listing_pipeline(&records, &config.view, &metadata);
    tracing::info!(
        records = records.len(),
        shown = view.products.len(),
        "listing preview ready"
    );

    let mut output = json!({ "params": &config.view, "view": &view });
    if !config.export_columns.is_empty() {
        let batch = build_export_batch(&view.products, &config.export_columns, &metadata, Utc::now());
        output["export"] = serde_json::to_value(batch)?;
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Accepts either a bare array or the service envelope `{ "products": [...] }`.
fn read_records(path: &Path) -> anyhow::Result<Vec<RawProductRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: JsonValue = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    let items = match value {
        JsonValue::Array(items) => items,
        JsonValue::Object(mut obj) => match obj.remove("products") {
            Some(JsonValue::Array(items)) => items,
            _ => anyhow::bail!("{} has no `products` array", path.display()),
        },
        _ => anyhow::bail!("{} must contain a JSON array of products", path.display()),
    };

    Ok(items.into_iter().map(RawProductRecord::from).collect())
}

fn read_metadata(path: &Path) -> anyhow::Result<CatalogMetadata> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let snapshot: MetadataSnapshot = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a metadata snapshot", path.display()))?;
    Ok(snapshot.into())
}
