//! `sellerdesk-core`: catalog foundation building blocks.
//!
//! This crate contains **pure** primitives shared by the listing pipeline
//! (identifiers, error model, value objects). No IO, no logging setup.

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{CatalogError, CatalogResult};
pub use id::{CategoryId, ProductId, SubcategoryId};
pub use value_object::ValueObject;
