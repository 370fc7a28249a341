//! Catalog item model.

use super::category::{NetworkType, PropType, TreeType};
use super::class::{Service, SubService};
use super::dlc::DlcMask;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a catalog item (its prefab name in the host game).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Top-level classification of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetType {
    Invalid,
    Network,
    Prop,
    Rico,
    Ploppable,
    Growable,
    Tree,
    Decal,
}

impl AssetType {
    /// Lowercase name, as matched by search keywords.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Network => "network",
            Self::Prop => "prop",
            Self::Rico => "rico",
            Self::Ploppable => "ploppable",
            Self::Growable => "growable",
            Self::Tree => "tree",
            Self::Decal => "decal",
        }
    }

    /// Ploppable, growable and RICO assets are all buildings.
    pub const fn is_building(self) -> bool {
        matches!(self, Self::Ploppable | Self::Growable | Self::Rico)
    }
}

/// Building footprint in cells. `0x0` means the item has no footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Footprint {
    pub x: u32,
    pub y: u32,
}

impl Footprint {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub const fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

/// Third-party mods whose generated assets count as custom content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanionMod {
    NetworkExtensions,
    ExtraTrainStationTracks,
    OneWayTrainTracks,
}

bitflags! {
    /// Vehicle types a network lane carries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct VehicleTypes: u32 {
        const CAR = 1 << 0;
        const METRO = 1 << 1;
        const TRAIN = 1 << 2;
        const SHIP = 1 << 3;
        const PLANE = 1 << 4;
        const BICYCLE = 1 << 5;
        const TRAM = 1 << 6;
        const MONORAIL = 1 << 7;
        const CABLE_CAR = 1 << 8;
        const TROLLEYBUS = 1 << 9;
    }
}

bitflags! {
    /// Role of a network lane.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LaneTypes: u32 {
        const VEHICLE = 1 << 0;
        const PEDESTRIAN = 1 << 1;
        const PARKING = 1 << 2;
        const TRANSPORT_VEHICLE = 1 << 3;
        const CARGO_VEHICLE = 1 << 4;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lane {
    pub vehicles: VehicleTypes,
    pub lane_type: LaneTypes,
}

/// One renderable segment mesh of a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Segment {
    /// Whether the segment material uses the terrain-conforming (fence) shader.
    pub terrain_conforming: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NetworkPrefab {
    pub has_forward_vehicle_lanes: bool,
    pub has_backward_vehicle_lanes: bool,
    pub has_parking_spaces: bool,
    pub lanes: Vec<Lane>,
    pub segments: Vec<Segment>,
}

impl NetworkPrefab {
    pub const fn is_one_way(&self) -> bool {
        self.has_forward_vehicle_lanes != self.has_backward_vehicle_lanes
    }

    pub fn has_bus_lane(&self) -> bool {
        self.lanes.iter().any(|lane| {
            lane.vehicles.contains(VehicleTypes::CAR)
                && lane.lane_type.contains(LaneTypes::TRANSPORT_VEHICLE)
        })
    }

    pub fn has_bike_lane(&self) -> bool {
        self.carries(VehicleTypes::BICYCLE)
    }

    pub fn has_tram_lane(&self) -> bool {
        self.carries(VehicleTypes::TRAM)
    }

    pub fn has_trolleybus_lane(&self) -> bool {
        self.carries(VehicleTypes::TROLLEYBUS)
    }

    fn carries(&self, vehicle: VehicleTypes) -> bool {
        self.lanes.iter().any(|lane| lane.vehicles.intersects(vehicle))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BuildingPrefab {
    pub height: f32,
    /// Class level, zero-based.
    pub level: u8,
    /// Whether the main material uses the terrain-conforming (fence) shader.
    pub terrain_conforming: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropPrefab {
    pub kind: PropType,
    /// Whether the material uses the terrain-conforming (fence) shader.
    pub terrain_conforming: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreePrefab {
    pub kind: TreeType,
}

/// The type-specific payload extracted from the host game's asset definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Prefab {
    Building(BuildingPrefab),
    Network {
        kind: NetworkType,
        info: NetworkPrefab,
    },
    Prop(PropPrefab),
    Tree(TreePrefab),
    Decal,
}

/// One searchable entry of the catalog.
///
/// Items are read-only during a search; scores travel in the
/// [`MatchResult`](crate::search::MatchResult), never on the item.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: ItemId,
    pub asset_type: AssetType,
    pub author: Option<String>,
    pub service: Option<Service>,
    pub sub_service: Option<SubService>,
    pub size: Footprint,
    pub custom_tags: Vec<String>,
    pub title_tags: Vec<String>,
    pub desc_tags: Vec<String>,
    /// Workshop identifier, `0` when the item has none.
    pub steam_id: u64,
    pub is_custom_content: bool,
    pub is_content_creator_pack: bool,
    pub is_sub_building: bool,
    /// Set when a companion mod generated this item at load time.
    pub generated_by: Option<CompanionMod>,
    pub dlc: DlcMask,
    /// `None` when the host has no asset definition for the item; such items
    /// are never returned by a search.
    pub prefab: Option<Prefab>,
}

impl CatalogItem {
    /// Creates a vanilla item with no tags, class, or payload.
    pub fn new(id: impl Into<ItemId>, asset_type: AssetType) -> Self {
        Self {
            id: id.into(),
            asset_type,
            author: None,
            service: None,
            sub_service: None,
            size: Footprint::default(),
            custom_tags: Vec::new(),
            title_tags: Vec::new(),
            desc_tags: Vec::new(),
            steam_id: 0,
            is_custom_content: false,
            is_content_creator_pack: false,
            is_sub_building: false,
            generated_by: None,
            dlc: DlcMask::empty(),
            prefab: None,
        }
    }

    #[must_use]
    pub fn with_prefab(mut self, prefab: Prefab) -> Self {
        self.prefab = Some(prefab);
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub const fn with_class(mut self, service: Option<Service>, sub_service: Option<SubService>) -> Self {
        self.service = service;
        self.sub_service = sub_service;
        self
    }

    #[must_use]
    pub const fn with_size(mut self, x: u32, y: u32) -> Self {
        self.size = Footprint::new(x, y);
        self
    }

    #[must_use]
    pub fn with_custom_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_title_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.title_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_desc_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.desc_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Marks the item as custom content published under `steam_id`.
    #[must_use]
    pub const fn custom(mut self, steam_id: u64) -> Self {
        self.is_custom_content = true;
        self.steam_id = steam_id;
        self
    }

    #[must_use]
    pub const fn content_creator_pack(mut self) -> Self {
        self.is_content_creator_pack = true;
        self
    }

    #[must_use]
    pub const fn sub_building(mut self) -> Self {
        self.is_sub_building = true;
        self
    }

    #[must_use]
    pub const fn produced_by(mut self, producer: CompanionMod) -> Self {
        self.generated_by = Some(producer);
        self
    }

    #[must_use]
    pub const fn with_dlc(mut self, dlc: DlcMask) -> Self {
        self.dlc = dlc;
        self
    }

    pub fn has_custom_tag(&self, tag: &str) -> bool {
        self.custom_tags.iter().any(|t| t == tag)
    }

    pub const fn building(&self) -> Option<&BuildingPrefab> {
        match &self.prefab {
            Some(Prefab::Building(building)) => Some(building),
            _ => None,
        }
    }

    pub const fn network(&self) -> Option<(NetworkType, &NetworkPrefab)> {
        match &self.prefab {
            Some(Prefab::Network { kind, info }) => Some((*kind, info)),
            _ => None,
        }
    }

    pub const fn prop(&self) -> Option<&PropPrefab> {
        match &self.prefab {
            Some(Prefab::Prop(prop)) => Some(prop),
            _ => None,
        }
    }

    pub const fn tree(&self) -> Option<&TreePrefab> {
        match &self.prefab {
            Some(Prefab::Tree(tree)) => Some(tree),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    fn network(lanes: Vec<Lane>) -> NetworkPrefab {
        NetworkPrefab {
            has_forward_vehicle_lanes: true,
            has_backward_vehicle_lanes: true,
            lanes,
            ..NetworkPrefab::default()
        }
    }

    #[test]
    fn footprint_formats_as_w_x_h() {
        check!(Footprint::new(4, 3).to_string() == "4x3");
        check!(Footprint::default().is_zero());
    }

    #[test]
    fn one_way_needs_lanes_in_only_one_direction() {
        let mut info = network(vec![]);
        check!(!info.is_one_way());
        info.has_backward_vehicle_lanes = false;
        check!(info.is_one_way());
    }

    #[test]
    fn bus_lane_needs_car_transport_lane() {
        let car_lane = Lane {
            vehicles: VehicleTypes::CAR,
            lane_type: LaneTypes::VEHICLE,
        };
        check!(!network(vec![car_lane]).has_bus_lane());

        let bus_lane = Lane {
            vehicles: VehicleTypes::CAR,
            lane_type: LaneTypes::VEHICLE | LaneTypes::TRANSPORT_VEHICLE,
        };
        check!(network(vec![car_lane, bus_lane]).has_bus_lane());
    }

    #[test]
    fn lane_vehicle_checks() {
        let info = network(vec![Lane {
            vehicles: VehicleTypes::CAR | VehicleTypes::TRAM,
            lane_type: LaneTypes::VEHICLE,
        }]);
        check!(info.has_tram_lane());
        check!(!info.has_bike_lane());
        check!(!info.has_trolleybus_lane());

        let trolleybus = network(vec![Lane {
            vehicles: VehicleTypes::TROLLEYBUS,
            lane_type: LaneTypes::VEHICLE,
        }]);
        check!(trolleybus.has_trolleybus_lane());
        check!(!trolleybus.has_tram_lane());
        check!(!trolleybus.has_bus_lane());
    }
}
