//! Searchable asset catalog.
//!
//! The catalog is populated by the host from its asset definitions. Searches
//! borrow it immutably, so any mutation (new items, tag edits) necessarily
//! happens between searches.

pub mod category;
pub mod class;
pub mod dlc;
pub mod item;
mod tags;

use ahash::AHashMap;

pub use category::{
    Category, GrowableCategory, NetworkFlag, NetworkType, PloppableCategory, PropType, TreeType,
};
pub use class::{Service, SubService};
pub use dlc::{DlcMask, DlcOption};
pub use item::{
    AssetType, BuildingPrefab, CatalogItem, CompanionMod, Footprint, ItemId, Lane, LaneTypes,
    NetworkPrefab, Prefab, PropPrefab, Segment, TreePrefab, VehicleTypes,
};

/// An ordered collection of catalog items, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    /// Position of each item in `items`.
    positions: AHashMap<ItemId, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item, replacing any existing item with the same id.
    pub fn insert(&mut self, item: CatalogItem) {
        if let Some(&position) = self.positions.get(&item.id) {
            self.items[position] = item;
        } else {
            self.positions.insert(item.id.clone(), self.items.len());
            self.items.push(item);
        }
    }

    pub fn get(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.positions.get(id).map(|&position| &self.items[position])
    }

    pub(crate) fn get_mut(&mut self, id: &ItemId) -> Option<&mut CatalogItem> {
        let position = *self.positions.get(id)?;
        self.items.get_mut(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    pub const fn len(&self) -> usize {
        self.items.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<CatalogItem> for Catalog {
    fn from_iter<T: IntoIterator<Item = CatalogItem>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut catalog = Self {
            items: Vec::with_capacity(lower),
            positions: AHashMap::with_capacity(lower),
        };
        for item in iter {
            catalog.insert(item);
        }
        catalog
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
