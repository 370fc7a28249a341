//! Custom tag maintenance on the catalog.

use super::{Catalog, ItemId};
use ahash::{AHashMap, AHashSet};

/// Normalizes a user-entered custom tag. Returns `None` for blank input.
fn normalize_tag(tag: &str) -> Option<String> {
    let tag = tag.trim().to_lowercase();
    (!tag.is_empty()).then_some(tag)
}

impl Catalog {
    /// Adds a custom tag to an item.
    ///
    /// Returns `true` if the item exists and did not already carry the tag.
    pub fn add_custom_tag(&mut self, id: &ItemId, tag: &str) -> bool {
        let Some(tag) = normalize_tag(tag) else {
            return false;
        };
        let Some(item) = self.get_mut(id) else {
            return false;
        };
        if item.has_custom_tag(&tag) {
            return false;
        }
        item.custom_tags.push(tag);
        true
    }

    /// Removes every occurrence of a custom tag from an item.
    ///
    /// Returns `true` if anything was removed.
    pub fn remove_custom_tag(&mut self, id: &ItemId, tag: &str) -> bool {
        let Some(tag) = normalize_tag(tag) else {
            return false;
        };
        let Some(item) = self.get_mut(id) else {
            return false;
        };
        let before = item.custom_tags.len();
        item.custom_tags.retain(|t| *t != tag);
        item.custom_tags.len() != before
    }

    /// Distinct custom tags with the number of items carrying each, sorted by tag.
    pub fn custom_tag_list(&self) -> Vec<(String, usize)> {
        let mut counts: AHashMap<&str, usize> = AHashMap::new();
        for item in self {
            let distinct: AHashSet<&str> = item.custom_tags.iter().map(String::as_str).collect();
            for tag in distinct {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }

        let mut list: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(tag, count)| (tag.to_string(), count))
            .collect();
        list.sort_by(|(a, _), (b, _)| a.cmp(b));
        list
    }

    /// Renames custom tag `old` to `new`, merging it into `new` where an item
    /// already carries both.
    ///
    /// Returns the number of items that carried `old`.
    pub fn merge_custom_tag(&mut self, old: &str, new: &str) -> usize {
        let (Some(old), Some(new)) = (normalize_tag(old), normalize_tag(new)) else {
            return 0;
        };
        if old == new {
            return 0;
        }

        let mut touched = 0;
        for item in &mut self.items {
            if !item.has_custom_tag(&old) {
                continue;
            }
            touched += 1;
            item.custom_tags.retain(|t| *t != old);
            if !item.has_custom_tag(&new) {
                item.custom_tags.push(new.clone());
            }
        }

        tracing::info!(
            "Merged custom tag '{}' into '{}' on {} items",
            old,
            new,
            touched
        );
        touched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AssetType, CatalogItem};
    use assert2::check;

    fn catalog() -> Catalog {
        [
            CatalogItem::new("a", AssetType::Prop).with_custom_tags(["old", "shared"]),
            CatalogItem::new("b", AssetType::Prop).with_custom_tags(["old", "new"]),
            CatalogItem::new("c", AssetType::Prop).with_custom_tags(["shared"]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn add_normalizes_and_skips_duplicates() {
        let mut catalog = catalog();
        let id = ItemId::from("c");
        check!(catalog.add_custom_tag(&id, "  Vintage "));
        check!(!catalog.add_custom_tag(&id, "vintage"));
        check!(!catalog.add_custom_tag(&id, "   "));
        check!(!catalog.add_custom_tag(&ItemId::from("missing"), "vintage"));

        let tags = &catalog.get(&id).map(|item| item.custom_tags.clone());
        check!(tags == &Some(vec!["shared".to_string(), "vintage".to_string()]));
    }

    #[test]
    fn remove_reports_whether_anything_changed() {
        let mut catalog = catalog();
        let id = ItemId::from("a");
        check!(catalog.remove_custom_tag(&id, "old"));
        check!(!catalog.remove_custom_tag(&id, "old"));
    }

    #[test]
    fn remove_and_merge_normalize_like_add() {
        let mut catalog = catalog();
        let id = ItemId::from("c");
        check!(catalog.add_custom_tag(&id, "Vintage"));
        check!(catalog.remove_custom_tag(&id, " Vintage "));
        check!(!catalog.get(&id).is_some_and(|item| item.has_custom_tag("vintage")));

        check!(catalog.merge_custom_tag("  OLD", "New ") == 2);
        check!(catalog.custom_tag_list().iter().all(|(tag, _)| tag != "old"));
        check!(catalog.merge_custom_tag("   ", "new") == 0);
    }

    #[test]
    fn tag_list_counts_repeated_tags_once_per_item() {
        let catalog: Catalog = [
            CatalogItem::new("a", AssetType::Prop).with_custom_tags(["x", "x", "y"]),
            CatalogItem::new("b", AssetType::Prop).with_custom_tags(["x"]),
        ]
        .into_iter()
        .collect();
        check!(catalog.custom_tag_list() == vec![("x".to_string(), 2), ("y".to_string(), 1)]);
    }

    #[test]
    fn tag_list_counts_items() {
        let list = catalog().custom_tag_list();
        check!(
            list == vec![
                ("new".to_string(), 1),
                ("old".to_string(), 2),
                ("shared".to_string(), 2),
            ]
        );
    }

    #[test]
    fn merge_renames_and_deduplicates() {
        let mut catalog = catalog();
        check!(catalog.merge_custom_tag("old", "new") == 2);

        let a = catalog.get(&ItemId::from("a")).map(|item| item.custom_tags.clone());
        let b = catalog.get(&ItemId::from("b")).map(|item| item.custom_tags.clone());
        check!(a == Some(vec!["shared".to_string(), "new".to_string()]));
        check!(b == Some(vec!["new".to_string()]));
        check!(catalog.merge_custom_tag("new", "new") == 0);
    }
}
