use chrono::{DateTime, Utc};

use sellerdesk_catalog::{
    NameResolver, NormalizedProduct, ProductStatus, RawProductRecord, SortKey, normalize_all,
};
use sellerdesk_core::CategoryId;

use crate::export::{ExportBatch, ExportColumn, build_export_batch};
use crate::metadata::CatalogMetadata;
use crate::pipeline::{ListingView, ViewParams, apply_view};

/// Reactive holder for one listing screen.
///
/// Owns the pipeline inputs (fetch result, view parameters, name lookups) and
/// the derived [`ListingView`]. Every setter re-runs the pipeline when, and only
/// when, its input actually changed; setters return whether a recompute
/// happened. Normalized records are cached per fetch result.
#[derive(Debug, Clone)]
pub struct CatalogView<R = CatalogMetadata> {
    records: Vec<RawProductRecord>,
    normalized: Vec<NormalizedProduct>,
    params: ViewParams,
    resolver: R,
    current: ListingView,
}

impl<R: NameResolver> CatalogView<R> {
    pub fn new(resolver: R) -> Self {
        Self::with_params(resolver, ViewParams::default())
    }

    pub fn with_params(resolver: R, params: ViewParams) -> Self {
        let current = apply_view(&[], &params, &resolver);
        Self {
            records: Vec::new(),
            normalized: Vec::new(),
            params,
            resolver,
            current,
        }
    }

    pub fn view(&self) -> &ListingView {
        &self.current
    }

    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    pub fn records(&self) -> &[RawProductRecord] {
        &self.records
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Replace the fetch result (e.g. after a refresh).
    pub fn set_records(&mut self, records: Vec<RawProductRecord>) -> bool {
        if records == self.records {
            return false;
        }
        self.normalized = normalize_all(&records);
        self.records = records;
        self.recompute();
        true
    }

    pub fn set_params(&mut self, params: ViewParams) -> bool {
        if params == self.params {
            return false;
        }
        self.params = params;
        self.recompute();
        true
    }

    pub fn set_status(&mut self, status: Option<ProductStatus>) -> bool {
        let params = ViewParams {
            status,
            ..self.params.clone()
        };
        self.set_params(params)
    }

    pub fn set_category(&mut self, category: Option<CategoryId>) -> bool {
        let params = ViewParams {
            category,
            ..self.params.clone()
        };
        self.set_params(params)
    }

    pub fn set_search(&mut self, search: impl Into<String>) -> bool {
        let params = ViewParams {
            search: search.into(),
            ..self.params.clone()
        };
        self.set_params(params)
    }

    pub fn set_sort(&mut self, sort: SortKey) -> bool {
        let params = ViewParams {
            sort,
            ..self.params.clone()
        };
        self.set_params(params)
    }

    /// Swap the name lookups. Always recomputes: resolvers have no equality.
    pub fn set_resolver(&mut self, resolver: R) {
        self.resolver = resolver;
        self.recompute();
    }

    /// Hand the currently shown products to the export collaborator's format.
    pub fn export(&self, columns: &[ExportColumn], generated_at: DateTime<Utc>) -> ExportBatch {
        build_export_batch(&self.current.products, columns, &self.resolver, generated_at)
    }

    fn recompute(&mut self) {
        self.current = apply_view(&self.normalized, &self.params, &self.resolver);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportField;
    use chrono::TimeZone;
    use serde_json::json;

    fn records() -> Vec<RawProductRecord> {
        [
            json!({ "id": "A", "title": "Desk Lamp", "price": 40, "stock": 12, "approved": true, "categoryId": "home" }),
            json!({ "id": "B", "title": "Floor Lamp", "price": 90, "stock": 0, "approved": true, "categoryId": "home" }),
            json!({ "id": "C", "title": "Notebook", "price": 5, "stock": 30, "approved": false, "categoryId": "office" }),
            json!({ "id": "D", "title": "Lamp Shade", "price": 15, "stock": 3, "approved": true, "categoryId": "home" }),
        ]
        .into_iter()
        .map(RawProductRecord::from)
        .collect()
    }

    fn metadata() -> CatalogMetadata {
        CatalogMetadata::new(
            [
                (CategoryId::new("home"), "Home".to_string()),
                (CategoryId::new("office"), "Office".to_string()),
            ],
            std::iter::empty::<(sellerdesk_core::SubcategoryId, String)>(),
        )
    }

    fn ids(view: &CatalogView) -> Vec<String> {
        view.view()
            .products
            .iter()
            .map(|p| p.id().map(ToString::to_string).unwrap_or_default())
            .collect()
    }

    #[test]
    fn starts_empty() {
        let view = CatalogView::new(metadata());
        assert!(view.view().products.is_empty());
        assert_eq!(view.view().summary.count, 0);
    }

    #[test]
    fn recomputes_on_each_input_change() {
        let mut view = CatalogView::new(metadata());
        assert!(view.set_records(records()));
        assert_eq!(ids(&view), vec!["A", "B", "C", "D"]);

        assert!(view.set_status(Some(ProductStatus::Active)));
        assert_eq!(ids(&view), vec!["A", "D"]);

        assert!(view.set_sort(SortKey::PriceLow));
        assert_eq!(ids(&view), vec!["D", "A"]);

        assert!(view.set_search("shade"));
        assert_eq!(ids(&view), vec!["D"]);

        assert!(view.set_search(""));
        assert!(view.set_category(Some(CategoryId::new("office"))));
        assert!(view.view().products.is_empty());

        assert!(view.set_status(None));
        assert_eq!(ids(&view), vec!["C"]);
        assert_eq!(view.view().status_counts.total, 4);
    }

    #[test]
    fn unchanged_inputs_skip_recompute() {
        let mut view = CatalogView::new(metadata());
        view.set_records(records());
        view.set_sort(SortKey::StockHigh);

        assert!(!view.set_records(records()));
        assert!(!view.set_sort(SortKey::StockHigh));
        assert!(!view.set_params(view.params().clone()));
        assert_eq!(ids(&view), vec!["C", "A", "D", "B"]);
    }

    #[test]
    fn refresh_replaces_records() {
        let mut view = CatalogView::with_params(
            metadata(),
            ViewParams::new().with_status(ProductStatus::OutOfStock),
        );
        view.set_records(records());
        assert_eq!(ids(&view), vec!["B"]);

        let restocked = vec![RawProductRecord::from(
            json!({ "id": "B", "title": "Floor Lamp", "price": 90, "stock": 6, "approved": true }),
        )];
        assert!(view.set_records(restocked));
        assert!(view.view().products.is_empty());
        assert_eq!(view.view().status_counts.active, 1);
    }

    #[test]
    fn resolver_swap_changes_search_hits() {
        let mut view = CatalogView::new(CatalogMetadata::default());
        view.set_records(records());
        view.set_search("office");
        assert!(view.view().products.is_empty());

        view.set_resolver(metadata());
        assert_eq!(ids(&view), vec!["C"]);
    }

    #[test]
    fn exports_the_visible_listing() {
        let mut view = CatalogView::new(metadata());
        view.set_records(records());
        view.set_status(Some(ProductStatus::Active));

        let columns = vec![
            ExportColumn::new("Title", ExportField::Title),
            ExportColumn::new("Category", ExportField::Category),
        ];
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap();
        let batch = view.export(&columns, at);

        assert_eq!(batch.headers, vec!["Title", "Category"]);
        assert_eq!(
            batch.rows,
            vec![
                vec!["Desk Lamp".to_string(), "Home".to_string()],
                vec!["Lamp Shade".to_string(), "Home".to_string()],
            ]
        );
        assert_eq!(batch.generated_at, at);
    }
}
