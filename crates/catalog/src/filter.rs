use sellerdesk_core::CategoryId;

use crate::product::NormalizedProduct;
use crate::status::ProductStatus;

/// Keep products whose derived status equals `status`, in original order.
///
/// `None` means "all statuses" and returns a fresh copy of the input.
pub fn filter_products_by_status(
    products: &[NormalizedProduct],
    status: Option<ProductStatus>,
) -> Vec<NormalizedProduct> {
    match status {
        None => products.to_vec(),
        Some(status) => products
            .iter()
            .filter(|p| p.status() == status)
            .cloned()
            .collect(),
    }
}

/// Keep products whose `categoryId` exactly equals `category`, in original order.
///
/// `None` means "all categories" and returns a fresh copy of the input.
pub fn filter_products_by_category(
    products: &[NormalizedProduct],
    category: Option<&CategoryId>,
) -> Vec<NormalizedProduct> {
    match category {
        None => products.to_vec(),
        Some(category) => products
            .iter()
            .filter(|p| p.category_id() == Some(category))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::normalize_product_record;
    use crate::record::RawProductRecord;
    use serde_json::json;

    fn catalog() -> Vec<NormalizedProduct> {
        [
            json!({ "id": "a1", "stock": 4, "approved": true, "categoryId": "shoes" }),
            json!({ "id": "d1", "stock": 4, "approved": false, "categoryId": "hats" }),
            json!({ "id": "o1", "stock": 0, "approved": true, "categoryId": "shoes" }),
            json!({ "id": "a2", "stock": 9, "approved": true, "categoryId": 7 }),
            json!({ "id": "o2", "approved": false }),
        ]
        .into_iter()
        .map(|v| normalize_product_record(&RawProductRecord::from(v)))
        .collect()
    }

    fn ids(products: &[NormalizedProduct]) -> Vec<String> {
        products
            .iter()
            .map(|p| p.id().map(ToString::to_string).unwrap_or_default())
            .collect()
    }

    #[test]
    fn no_status_returns_equal_content() {
        let products = catalog();
        assert_eq!(filter_products_by_status(&products, None), products);
    }

    #[test]
    fn status_filter_keeps_relative_order() {
        let products = catalog();

        let active = filter_products_by_status(&products, Some(ProductStatus::Active));
        assert_eq!(ids(&active), vec!["a1", "a2"]);

        let out = filter_products_by_status(&products, Some(ProductStatus::OutOfStock));
        assert_eq!(ids(&out), vec!["o1", "o2"]);

        let draft = filter_products_by_status(&products, Some(ProductStatus::Draft));
        assert_eq!(ids(&draft), vec!["d1"]);
    }

    #[test]
    fn category_filter_matches_exact_id() {
        let products = catalog();

        let shoes = filter_products_by_category(&products, Some(&CategoryId::new("shoes")));
        assert_eq!(ids(&shoes), vec!["a1", "o1"]);

        let numeric = filter_products_by_category(&products, Some(&CategoryId::new("7")));
        assert_eq!(ids(&numeric), vec!["a2"]);

        let none = filter_products_by_category(&products, Some(&CategoryId::new("Shoes")));
        assert!(none.is_empty());

        assert_eq!(filter_products_by_category(&products, None), products);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter_products_by_status(&[], Some(ProductStatus::Active)).is_empty());
        assert!(filter_products_by_category(&[], None).is_empty());
    }
}
