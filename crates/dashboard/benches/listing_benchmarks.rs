use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use serde_json::json;

use sellerdesk_catalog::{ProductStatus, RawProductRecord, SortKey, normalize_all};
use sellerdesk_core::{CategoryId, SubcategoryId};
use sellerdesk_dashboard::{CatalogMetadata, ViewParams, apply_view, run_listing_pipeline};

/// Synthetic fetch result mixing every inventory field shape the service sends.
fn catalog(size: usize) -> Vec<RawProductRecord> {
    (0..size)
        .map(|i| {
            let stock = (i % 37) as i64 - 3;
            let record = match i % 4 {
                0 => json!({ "inventoryCount": stock }),
                1 => json!({ "stock": stock.to_string() }),
                2 => json!({ "quantity": stock }),
                _ => json!({ "inventory": { "available": stock } }),
            };
            let mut record = record.as_object().cloned().unwrap_or_default();
            record.insert("id".into(), json!(format!("p{i}")));
            record.insert("title".into(), json!(format!("Item {i} cotton blend")));
            record.insert("sku".into(), json!(format!("SKU-{i:06}")));
            record.insert("price".into(), json!((i % 500) as f64 + 0.99));
            record.insert("discount".into(), json!(i % 15));
            record.insert("approved".into(), json!(i % 3 != 0));
            record.insert("categoryId".into(), json!(i % 12));
            record.insert("subcategoryId".into(), json!(i % 40));
            RawProductRecord::from(record)
        })
        .collect()
}

fn metadata() -> CatalogMetadata {
    CatalogMetadata::new(
        (0..12).map(|i| (CategoryId::new(i.to_string()), format!("Category {i}"))),
        (0..40).map(|i| (SubcategoryId::new(i.to_string()), format!("Subcategory {i}"))),
    )
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("listing_pipeline");
    let metadata = metadata();
    let params = ViewParams::new()
        .with_status(ProductStatus::Active)
        .with_search("cotton")
        .with_sort(SortKey::PriceHigh);

    for size in [100usize, 1_000, 10_000] {
        let records = catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| run_listing_pipeline(black_box(records), black_box(&params), &metadata))
        });
    }
    group.finish();
}

/// Param changes reuse normalized records; this is the cost of one keystroke.
fn bench_view_change(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_change");
    let metadata = metadata();
    let normalized = normalize_all(&catalog(10_000));

    for (name, params) in [
        ("status_only", ViewParams::new().with_status(ProductStatus::OutOfStock)),
        ("search_subcategory", ViewParams::new().with_search("subcategory 3")),
        ("sort_stock", ViewParams::new().with_sort(SortKey::StockLow)),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| apply_view(black_box(&normalized), black_box(&params), &metadata))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_full_pipeline, bench_view_change);
criterion_main!(benches);
