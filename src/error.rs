//! Error handling types and utilities.

use crate::catalog::ItemId;

/// A specialized Result type for asset-search operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error raised while evaluating an extra filter against one item.
///
/// These never abort a search. The pipeline reports them to its
/// [`FilterObserver`](crate::search::FilterObserver) and lets the item through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// The item's asset type promises a payload kind it does not carry.
    #[error("item '{item}' is missing its {expected} payload")]
    PayloadMismatch {
        item: ItemId,
        expected: &'static str,
    },
    /// Used/unused filtering was requested without a usage lookup.
    #[error("no usage source available to evaluate '{item}'")]
    MissingUsageSource { item: ItemId },
    /// Local/workshop partitioning was requested without a subscription set.
    #[error("no local subscription set available to evaluate '{item}'")]
    MissingSubscriptions { item: ItemId },
}

impl FilterError {
    /// The item that was being evaluated when the error occurred.
    pub const fn item(&self) -> &ItemId {
        match self {
            Self::PayloadMismatch { item, .. }
            | Self::MissingUsageSource { item }
            | Self::MissingSubscriptions { item } => item,
        }
    }
}
