//! Value object trait: equality by value, not identity.
//!
//! Listing outputs (summaries, status counts, view parameters) have **no
//! identity**. Two summaries with the same numbers are the same summary, which
//! is what lets a caller skip re-rendering when a recompute produced nothing new.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Summary { count: usize, total_value: f64 }
///
/// impl ValueObject for Summary {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
