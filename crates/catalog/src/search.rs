use sellerdesk_core::{CategoryId, SubcategoryId};

use crate::product::NormalizedProduct;

/// Synchronous id→name lookups supplied by the metadata collaborator.
///
/// Implementations must be pure: the same id always resolves to the same name
/// for the lifetime of a view.
pub trait NameResolver {
    fn category_name(&self, id: &CategoryId) -> Option<&str>;
    fn subcategory_name(&self, id: &SubcategoryId) -> Option<&str>;
}

impl<R: NameResolver + ?Sized> NameResolver for &R {
    fn category_name(&self, id: &CategoryId) -> Option<&str> {
        (**self).category_name(id)
    }

    fn subcategory_name(&self, id: &SubcategoryId) -> Option<&str> {
        (**self).subcategory_name(id)
    }
}

/// Resolver for when no metadata has been loaded: every lookup misses.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoNames;

impl NameResolver for NoNames {
    fn category_name(&self, _id: &CategoryId) -> Option<&str> {
        None
    }

    fn subcategory_name(&self, _id: &SubcategoryId) -> Option<&str> {
        None
    }
}

/// Case-insensitive substring search.
///
/// A product matches when its title, SKU, category name, subcategory name or
/// seller name contains `term`. Missing fields never match. A blank term keeps
/// everything.
pub fn search_products<R: NameResolver + ?Sized>(
    products: &[NormalizedProduct],
    term: &str,
    resolver: &R,
) -> Vec<NormalizedProduct> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return products.to_vec();
    }

    products
        .iter()
        .filter(|p| matches_term(p, &needle, resolver))
        .cloned()
        .collect()
}

fn matches_term<R: NameResolver + ?Sized>(
    product: &NormalizedProduct,
    needle: &str,
    resolver: &R,
) -> bool {
    let category = product
        .category_id()
        .and_then(|id| resolver.category_name(id));
    let subcategory = product
        .subcategory_id()
        .and_then(|id| resolver.subcategory_name(id));

    [
        product.title(),
        product.sku(),
        category,
        subcategory,
        product.seller_name(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(needle))
}
