//! Catalog listing pipeline (normalize, classify, filter, search, sort, summarize).
//!
//! This crate turns loosely-shaped product records from the catalog service into
//! canonical listings, implemented purely as deterministic transformations (no
//! IO, no HTTP, no storage). Every stage borrows its input and returns a new
//! collection.

pub mod filter;
pub mod inventory;
pub mod product;
pub mod record;
pub mod search;
pub mod sort;
pub mod status;
pub mod summary;

pub use filter::{filter_products_by_category, filter_products_by_status};
pub use inventory::{INVENTORY_CANDIDATES, compute_inventory_count};
pub use product::{NormalizedProduct, normalize_all, normalize_product_record};
pub use record::RawProductRecord;
pub use search::{NameResolver, NoNames, search_products};
pub use sort::{SortKey, sort_products};
pub use status::{ProductStatus, derive_product_status};
pub use summary::{LOW_STOCK_THRESHOLD, StatusCounts, Summary, count_by_status, summarize_products};
