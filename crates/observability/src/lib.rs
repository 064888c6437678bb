//! Tracing/logging setup shared by SellerDesk binaries.
//!
//! Library crates only emit `tracing` events; installing a subscriber is left
//! to whichever binary runs them.

/// Initialize process-wide tracing with the defaults (`info`, format from env).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;
