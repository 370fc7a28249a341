//! External collaborators consulted during a search.
//!
//! Everything here is supplied by the host and read-only for the duration of
//! one [`Searcher::find`](super::Searcher::find) call.

use crate::catalog::{CatalogItem, CompanionMod, ItemId};
use crate::config::SearchConfig;
use crate::error::FilterError;
use ahash::{AHashMap, AHashSet};
use std::collections::{HashMap, HashSet};
use std::hash::BuildHasher;

/// Lookup from item identity to how many instances of it are placed.
pub trait UsageLookup {
    /// Placed instance count, or `None` when the item is not tracked.
    fn instance_count(&self, id: &ItemId) -> Option<u32>;
}

impl<S: BuildHasher> UsageLookup for HashMap<ItemId, u32, S> {
    fn instance_count(&self, id: &ItemId) -> Option<u32> {
        self.get(id).copied()
    }
}

impl UsageLookup for AHashMap<ItemId, u32> {
    fn instance_count(&self, id: &ItemId) -> Option<u32> {
        self.get(id).copied()
    }
}

/// Set of Workshop identifiers that are installed locally rather than
/// through a subscription.
pub trait SubscriptionSet {
    fn contains_id(&self, steam_id: u64) -> bool;
}

impl<S: BuildHasher> SubscriptionSet for HashSet<u64, S> {
    fn contains_id(&self, steam_id: u64) -> bool {
        self.contains(&steam_id)
    }
}

impl SubscriptionSet for AHashSet<u64> {
    fn contains_id(&self, steam_id: u64) -> bool {
        self.contains(&steam_id)
    }
}

/// Receives filter evaluation errors that were tolerated during a search.
pub trait FilterObserver {
    fn evaluation_error(&self, item: &CatalogItem, error: &FilterError);
}

/// Default observer: reports each tolerated error as a `warn!` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl FilterObserver for TracingObserver {
    fn evaluation_error(&self, item: &CatalogItem, error: &FilterError) {
        tracing::warn!(item = %item.id, "Extra filter check skipped: {}", error);
    }
}

static DEFAULT_CONFIG: std::sync::LazyLock<SearchConfig> =
    std::sync::LazyLock::new(SearchConfig::default);

/// Collaborators and settings a search reads besides the catalog itself.
#[derive(Clone, Copy)]
pub struct SearchContext<'a> {
    pub config: &'a SearchConfig,
    pub usage: Option<&'a dyn UsageLookup>,
    /// Secondary instance source (e.g. procedural objects), summed with
    /// `usage` when the configuration enables it.
    pub secondary_usage: Option<&'a dyn UsageLookup>,
    pub local_subscriptions: Option<&'a dyn SubscriptionSet>,
    pub observer: &'a dyn FilterObserver,
}

impl Default for SearchContext<'_> {
    fn default() -> Self {
        Self {
            config: &*DEFAULT_CONFIG,
            usage: None,
            secondary_usage: None,
            local_subscriptions: None,
            observer: &TracingObserver,
        }
    }
}

impl std::fmt::Debug for SearchContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchContext")
            .field("config", self.config)
            .field("usage", &self.usage.is_some())
            .field("secondary_usage", &self.secondary_usage.is_some())
            .field("local_subscriptions", &self.local_subscriptions.is_some())
            .finish_non_exhaustive()
    }
}

impl<'a> SearchContext<'a> {
    pub const fn with_config(mut self, config: &'a SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub const fn with_usage(mut self, usage: &'a dyn UsageLookup) -> Self {
        self.usage = Some(usage);
        self
    }

    pub const fn with_secondary_usage(mut self, usage: &'a dyn UsageLookup) -> Self {
        self.secondary_usage = Some(usage);
        self
    }

    pub const fn with_local_subscriptions(mut self, ids: &'a dyn SubscriptionSet) -> Self {
        self.local_subscriptions = Some(ids);
        self
    }

    pub const fn with_observer(mut self, observer: &'a dyn FilterObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Whether the item was generated by a companion mod this configuration
    /// recognises.
    pub fn is_mod_generated(&self, item: &CatalogItem) -> bool {
        item.generated_by
            .is_some_and(|producer: CompanionMod| self.config.recognizes(producer))
    }

    /// Total placed instances of an item, or `None` if no usage source is wired.
    pub fn total_usage(&self, id: &ItemId) -> Option<u32> {
        let usage = self.usage?;
        let mut total = usage.instance_count(id).unwrap_or(0);
        if self.config.include_secondary_usage
            && let Some(secondary) = self.secondary_usage
        {
            total = total.saturating_add(secondary.instance_count(id).unwrap_or(0));
        }
        Some(total)
    }
}
