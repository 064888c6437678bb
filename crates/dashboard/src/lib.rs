//! Dashboard layer: wires the catalog pipeline to its collaborators.
//!
//! - `metadata`: category/subcategory lookup tables (consumed, never mutated)
//! - `pipeline`: the fixed-order listing pipeline for one set of view parameters
//! - `view`: reactive holder that re-runs the pipeline when inputs change
//! - `export`: column specs and the hand-off to an external export sink
//! - `config`: default view parameters from the environment

pub mod config;
pub mod export;
pub mod metadata;
pub mod pipeline;
pub mod view;

pub use config::DashboardConfig;
pub use export::{ExportBatch, ExportColumn, ExportField, ExportSink, build_export_batch};
pub use metadata::{CatalogMetadata, MetadataSnapshot, UNKNOWN_LABEL};
pub use pipeline::{ListingView, ViewParams, apply_view, run_listing_pipeline};
pub use view::CatalogView;
