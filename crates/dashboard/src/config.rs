//! Dashboard configuration from the environment.
//!
//! Invalid values never abort startup: they are logged and replaced by the
//! default for that setting.

use sellerdesk_catalog::{ProductStatus, SortKey};
use sellerdesk_core::CategoryId;

use crate::export::ExportColumn;
use crate::pipeline::ViewParams;

pub const ENV_STATUS: &str = "SELLERDESK_STATUS";
pub const ENV_CATEGORY: &str = "SELLERDESK_CATEGORY";
pub const ENV_SEARCH: &str = "SELLERDESK_SEARCH";
pub const ENV_SORT: &str = "SELLERDESK_SORT";
pub const ENV_EXPORT_COLUMNS: &str = "SELLERDESK_EXPORT_COLUMNS";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardConfig {
    /// View parameters the listing opens with.
    pub view: ViewParams,
    /// Columns for exports; empty means "no export requested".
    pub export_columns: Vec<ExportColumn>,
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process env in production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let status = lookup(ENV_STATUS).and_then(|key| {
            ProductStatus::from_view_key(&key).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "{ENV_STATUS} ignored; showing all statuses");
                None
            })
        });

        let category = lookup(ENV_CATEGORY).and_then(|raw| match raw.parse::<CategoryId>() {
            Ok(id) => Some(id),
            Err(_) if raw.trim().is_empty() => None,
            Err(e) => {
                tracing::warn!(error = %e, "{ENV_CATEGORY} ignored");
                None
            }
        });

        let search = lookup(ENV_SEARCH).unwrap_or_default();

        let sort = lookup(ENV_SORT)
            .map(|key| {
                let sort = SortKey::from_key(&key);
                if sort.as_key() != key.trim() && !key.trim().is_empty() {
                    tracing::warn!(sort_key = %key, "unknown {ENV_SORT}; using upstream order");
                }
                sort
            })
            .unwrap_or_default();

        let export_columns = lookup(ENV_EXPORT_COLUMNS)
            .map(|specs| {
                ExportColumn::parse_list(&specs).unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "{ENV_EXPORT_COLUMNS} ignored");
                    Vec::new()
                })
            })
            .unwrap_or_default();

        Self {
            view: ViewParams {
                status,
                category,
                search,
                sort,
            },
            export_columns,
        }
    }
}
