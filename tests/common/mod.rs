//! Shared test fixtures for integration tests.
//!
//! Every helper builds items that carry a type payload, since the searcher
//! skips items without one.

#![allow(dead_code)] // Helpers used across different integration test crates

use asset_search::catalog::{
    BuildingPrefab, Lane, LaneTypes, NetworkPrefab, NetworkType, Prefab, PropPrefab, PropType,
    Segment, TreePrefab, TreeType, VehicleTypes,
};
use asset_search::{AssetType, Catalog, CatalogItem, TagFrequencyIndex};
use rstest::fixture;

pub fn prop(id: &str, kind: PropType) -> CatalogItem {
    CatalogItem::new(id, AssetType::Prop).with_prefab(Prefab::Prop(PropPrefab {
        kind,
        terrain_conforming: false,
    }))
}

pub fn tree(id: &str) -> CatalogItem {
    CatalogItem::new(id, AssetType::Tree).with_prefab(Prefab::Tree(TreePrefab {
        kind: TreeType::LargeTree,
    }))
}

pub fn building(id: &str, asset_type: AssetType, height: f32, level: u8) -> CatalogItem {
    CatalogItem::new(id, asset_type).with_prefab(Prefab::Building(BuildingPrefab {
        height,
        level,
        terrain_conforming: false,
    }))
}

pub fn network(id: &str, kind: NetworkType, info: NetworkPrefab) -> CatalogItem {
    CatalogItem::new(id, AssetType::Network).with_prefab(Prefab::Network { kind, info })
}

pub fn lane(vehicles: VehicleTypes, lane_type: LaneTypes) -> Lane {
    Lane {
        vehicles,
        lane_type,
    }
}

pub fn segments(conforming: &[bool]) -> Vec<Segment> {
    conforming
        .iter()
        .map(|&terrain_conforming| Segment { terrain_conforming })
        .collect()
}

/// A catalog together with the frequency tables built from it.
pub struct Indexed {
    pub catalog: Catalog,
    pub tags: TagFrequencyIndex,
}

impl Indexed {
    pub fn new(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        asset_search::tracing::init();
        let catalog: Catalog = items.into_iter().collect();
        let tags = TagFrequencyIndex::build(&catalog);
        Self { catalog, tags }
    }

    /// Rebuilds the frequency tables after the catalog changed.
    pub fn reindex(&mut self) {
        self.tags = TagFrequencyIndex::build(&self.catalog);
    }
}

/// A small mixed catalog covering every asset type.
#[fixture]
pub fn mixed() -> Indexed {
    Indexed::new([
        prop("bench", PropType::PropsParks)
            .with_author("Samsam")
            .with_title_tags(["park", "bench"])
            .with_custom_tags(["vintage"]),
        prop("rock", PropType::Natural).with_title_tags(["rock", "cliff"]),
        prop("crate", PropType::PropsIndustrial)
            .with_title_tags(["wooden", "crate"])
            .with_custom_tags(["modern"]),
        tree("oak").with_title_tags(["oak", "park"]),
        building("town hall", AssetType::Ploppable, 25.0, 0)
            .with_title_tags(["town hall"])
            .with_size(4, 4),
        building("house", AssetType::Growable, 12.0, 2)
            .with_title_tags(["house", "low density"])
            .with_size(2, 3)
            .custom(111)
            .with_custom_tags(["vintage building"]),
        network(
            "avenue",
            NetworkType::MediumRoads,
            NetworkPrefab {
                has_forward_vehicle_lanes: true,
                has_backward_vehicle_lanes: true,
                segments: segments(&[false]),
                ..NetworkPrefab::default()
            },
        )
        .with_title_tags(["avenue", "road"]),
        CatalogItem::new("manhole", AssetType::Decal)
            .with_prefab(Prefab::Decal)
            .with_title_tags(["manhole", "road"]),
    ])
}
