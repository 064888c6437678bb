use serde::Serialize;

use sellerdesk_catalog::{
    NameResolver, NormalizedProduct, ProductStatus, RawProductRecord, SortKey, StatusCounts,
    Summary, count_by_status, filter_products_by_category, filter_products_by_status,
    normalize_all, search_products, sort_products, summarize_products,
};
use sellerdesk_core::{CatalogResult, CategoryId, ValueObject};

/// Everything the seller can change about the current listing view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewParams {
    pub status: Option<ProductStatus>,
    pub category: Option<CategoryId>,
    pub search: String,
    pub sort: SortKey,
}

impl ValueObject for ViewParams {}

impl ViewParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build parameters from the string keys the presentation layer holds.
    ///
    /// Only the status key can be rejected; blank category means "all" and an
    /// unknown sort key means upstream order.
    pub fn from_keys(
        status_key: &str,
        category: Option<&str>,
        search: &str,
        sort_key: &str,
    ) -> CatalogResult<Self> {
        let category = match category.map(str::trim) {
            Some(c) if !c.is_empty() => Some(c.parse()?),
            _ => None,
        };
        Ok(Self {
            status: ProductStatus::from_view_key(status_key)?,
            category,
            search: search.to_string(),
            sort: SortKey::from_key(sort_key),
        })
    }

    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

/// Output of one pipeline run, ready for rendering.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingView {
    /// Filtered, searched and sorted products.
    pub products: Vec<NormalizedProduct>,
    /// Statistics over `products`.
    pub summary: Summary,
    /// Status tab counts over the whole fetch result, before any filtering.
    pub status_counts: StatusCounts,
}

/// Run the full listing pipeline over a fresh fetch result.
///
/// Order is fixed: normalize → status → category → search → sort, then one
/// summary over the final collection. The input slice is only read.
pub fn run_listing_pipeline<R: NameResolver + ?Sized>(
    records: &[RawProductRecord],
    params: &ViewParams,
    resolver: &R,
) -> ListingView {
    let normalized = normalize_all(records);
    tracing::trace!(records = records.len(), "normalized catalog records");
    apply_view(&normalized, params, resolver)
}

/// Run the post-normalization stages for already-normalized products.
pub fn apply_view<R: NameResolver + ?Sized>(
    normalized: &[NormalizedProduct],
    params: &ViewParams,
    resolver: &R,
) -> ListingView {
    let status_counts = count_by_status(normalized);

    let by_status = filter_products_by_status(normalized, params.status);
    let by_category = filter_products_by_category(&by_status, params.category.as_ref());
    let searched = search_products(&by_category, &params.search, resolver);
    let products = sort_products(&searched, params.sort);
    let summary = summarize_products(&products);

    tracing::debug!(
        status = params.status.map(|s| s.as_key()).unwrap_or("all"),
        category = params.category.as_ref().map(CategoryId::as_str).unwrap_or(""),
        search = %params.search,
        sort = %params.sort,
        input = normalized.len(),
        after_status = by_status.len(),
        after_category = by_category.len(),
        shown = products.len(),
        "listing view recomputed"
    );

    ListingView {
        products,
        summary,
        status_counts,
    }
}
