//! Tag document-frequency tables used to down-weight common tags.

use crate::catalog::Catalog;
use ahash::{AHashMap, AHashSet};

/// Which tag list of an item a tag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagCategory {
    Custom,
    Title,
    Description,
}

/// Mapping from tag to the number of catalog items carrying it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFrequencyTable {
    counts: AHashMap<String, u32>,
}

impl TagFrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document frequency of `tag`. Unseen tags count as 1 (maximally rare).
    pub fn frequency(&self, tag: &str) -> u32 {
        self.counts.get(tag).copied().unwrap_or(1).max(1)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.counts.contains_key(tag)
    }

    /// Sets the count for a tag. Zero counts are stored as 1.
    pub fn set(&mut self, tag: impl Into<String>, count: u32) {
        self.counts.insert(tag.into(), count.max(1));
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Counts each distinct tag once per item.
    fn count_item<'a>(&mut self, tags: impl IntoIterator<Item = &'a String>) {
        let distinct: AHashSet<&String> = tags.into_iter().collect();
        for tag in distinct {
            *self.counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for TagFrequencyTable {
    fn from_iter<T: IntoIterator<Item = (S, u32)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (tag, count) in iter {
            table.set(tag, count);
        }
        table
    }
}

/// The three per-category frequency tables of a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFrequencyIndex {
    pub custom: TagFrequencyTable,
    pub title: TagFrequencyTable,
    pub description: TagFrequencyTable,
}

impl TagFrequencyIndex {
    pub fn new(
        custom: TagFrequencyTable,
        title: TagFrequencyTable,
        description: TagFrequencyTable,
    ) -> Self {
        Self {
            custom,
            title,
            description,
        }
    }

    /// Counts tags across the whole catalog.
    ///
    /// Must be re-run whenever items or their tags change.
    pub fn build(catalog: &Catalog) -> Self {
        let start = std::time::Instant::now();
        let mut index = Self::default();

        for item in catalog {
            index.custom.count_item(&item.custom_tags);
            index.title.count_item(&item.title_tags);
            index.description.count_item(&item.desc_tags);
        }

        tracing::info!(
            "Built tag frequency index: {} custom, {} title, {} description tags from {} items in {:?}",
            index.custom.len(),
            index.title.len(),
            index.description.len(),
            catalog.len(),
            start.elapsed()
        );

        index
    }

    pub const fn table(&self, category: TagCategory) -> &TagFrequencyTable {
        match category {
            TagCategory::Custom => &self.custom,
            TagCategory::Title => &self.title,
            TagCategory::Description => &self.description,
        }
    }

    /// Document frequency of `tag` in the given category, defaulting to 1.
    pub fn frequency(&self, category: TagCategory, tag: &str) -> u32 {
        self.table(category).frequency(tag)
    }
}
