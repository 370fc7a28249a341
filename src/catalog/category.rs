//! Closed category sets for each filterable asset family.
//!
//! Every family the category panels can toggle is a plain enum implementing
//! [`Category`], so selections and item-to-category mappings are checked by
//! exhaustive `match` instead of falling through to an "unknown" value.

use super::class::{Service, SubService};
use std::hash::Hash;

/// A closed set of values that a category panel can toggle on and off.
pub trait Category: Copy + Eq + Hash + 'static {
    /// Every variant, in panel order.
    const ALL: &'static [Self];
}

/// Sub-category of a network asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkType {
    TinyRoads,
    SmallRoads,
    MediumRoads,
    LargeRoads,
    Highway,
    Path,
    Fence,
    WaterStructures,
    Utility,
    Train,
    Metro,
    Aircraft,
    Unsorted,
}

impl NetworkType {
    /// Ordinary drivable roads, the only subtypes lane flags apply to.
    pub const fn is_normal_road(self) -> bool {
        matches!(
            self,
            Self::TinyRoads | Self::SmallRoads | Self::MediumRoads | Self::LargeRoads
        )
    }

    /// Roads of any size, highways and paths.
    pub const fn is_road_or_path(self) -> bool {
        self.is_normal_road() || matches!(self, Self::Highway | Self::Path)
    }
}

impl Category for NetworkType {
    const ALL: &'static [Self] = &[
        Self::TinyRoads,
        Self::SmallRoads,
        Self::MediumRoads,
        Self::LargeRoads,
        Self::Highway,
        Self::Path,
        Self::Fence,
        Self::WaterStructures,
        Self::Utility,
        Self::Train,
        Self::Metro,
        Self::Aircraft,
        Self::Unsorted,
    ];
}

/// Non-exclusive network toggles layered on top of [`NetworkType`] selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkFlag {
    OneWay,
    Parking,
    NoParking,
    BusLane,
    TrolleybusLane,
    BikeLane,
    TramLane,
}

impl NetworkFlag {
    /// Whether a network of `kind` can satisfy this flag at all.
    ///
    /// Bike lanes also exist on paths; every other flag is restricted to
    /// normal roads.
    pub const fn applies_to(self, kind: NetworkType) -> bool {
        match self {
            Self::BikeLane => kind.is_normal_road() || matches!(kind, NetworkType::Path),
            Self::OneWay
            | Self::Parking
            | Self::NoParking
            | Self::BusLane
            | Self::TrolleybusLane
            | Self::TramLane => kind.is_normal_road(),
        }
    }
}

impl Category for NetworkFlag {
    const ALL: &'static [Self] = &[
        Self::OneWay,
        Self::Parking,
        Self::NoParking,
        Self::BusLane,
        Self::TrolleybusLane,
        Self::BikeLane,
        Self::TramLane,
    ];
}

/// Sub-category of a prop asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropType {
    PropsIndustrial,
    PropsParks,
    PropsCommon,
    PropsResidential,
    PropsBillboards,
    PropsSpecialBillboards,
    PropsLights,
    Natural,
    Unsorted,
    Marker,
}

impl Category for PropType {
    const ALL: &'static [Self] = &[
        Self::PropsIndustrial,
        Self::PropsParks,
        Self::PropsCommon,
        Self::PropsResidential,
        Self::PropsBillboards,
        Self::PropsSpecialBillboards,
        Self::PropsLights,
        Self::Natural,
        Self::Unsorted,
        Self::Marker,
    ];
}

/// Sub-category of a tree asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeType {
    SmallTree,
    MediumTree,
    LargeTree,
    Bush,
}

impl Category for TreeType {
    const ALL: &'static [Self] = &[
        Self::SmallTree,
        Self::MediumTree,
        Self::LargeTree,
        Self::Bush,
    ];
}

/// Zoned-building category, derived from the building's class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrowableCategory {
    ResidentialLow,
    ResidentialHigh,
    ResidentialLowEco,
    ResidentialHighEco,
    CommercialLow,
    CommercialHigh,
    CommercialLeisure,
    CommercialTourism,
    CommercialEco,
    Industrial,
    IndustrialForestry,
    IndustrialFarming,
    IndustrialOil,
    IndustrialOre,
    Office,
    OfficeHightech,
}

impl GrowableCategory {
    /// Category of a zoned building with the given class, if it has one.
    pub const fn from_class(sub_service: Option<SubService>) -> Option<Self> {
        let Some(sub_service) = sub_service else {
            return None;
        };
        Some(match sub_service {
            SubService::ResidentialLow => Self::ResidentialLow,
            SubService::ResidentialHigh => Self::ResidentialHigh,
            SubService::ResidentialLowEco => Self::ResidentialLowEco,
            SubService::ResidentialHighEco => Self::ResidentialHighEco,
            SubService::CommercialLow => Self::CommercialLow,
            SubService::CommercialHigh => Self::CommercialHigh,
            SubService::CommercialLeisure => Self::CommercialLeisure,
            SubService::CommercialTourist => Self::CommercialTourism,
            SubService::CommercialEco => Self::CommercialEco,
            SubService::IndustrialGeneric => Self::Industrial,
            SubService::IndustrialForestry => Self::IndustrialForestry,
            SubService::IndustrialFarming => Self::IndustrialFarming,
            SubService::IndustrialOil => Self::IndustrialOil,
            SubService::IndustrialOre => Self::IndustrialOre,
            SubService::OfficeGeneric => Self::Office,
            SubService::OfficeHightech => Self::OfficeHightech,
            SubService::PublicTransportBus
            | SubService::PublicTransportMetro
            | SubService::PublicTransportTrain
            | SubService::PublicTransportShip
            | SubService::PublicTransportPlane
            | SubService::PublicTransportTaxi
            | SubService::PublicTransportTram
            | SubService::PublicTransportMonorail
            | SubService::PublicTransportCableCar
            | SubService::PublicTransportTours
            | SubService::PublicTransportPost
            | SubService::PublicTransportTrolleybus
            | SubService::BeautificationParks
            | SubService::BeautificationPlazas => return None,
        })
    }
}

impl Category for GrowableCategory {
    const ALL: &'static [Self] = &[
        Self::ResidentialLow,
        Self::ResidentialHigh,
        Self::ResidentialLowEco,
        Self::ResidentialHighEco,
        Self::CommercialLow,
        Self::CommercialHigh,
        Self::CommercialLeisure,
        Self::CommercialTourism,
        Self::CommercialEco,
        Self::Industrial,
        Self::IndustrialForestry,
        Self::IndustrialFarming,
        Self::IndustrialOil,
        Self::IndustrialOre,
        Self::Office,
        Self::OfficeHightech,
    ];
}

/// Service-building category, derived from the building's class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PloppableCategory {
    Electricity,
    Water,
    Garbage,
    PlayerIndustry,
    Transport,
    Healthcare,
    FireDepartment,
    Police,
    Education,
    Campus,
    Parks,
    Plazas,
    Monuments,
    Disaster,
    Fishing,
    Unsorted,
}

impl PloppableCategory {
    /// Category of a service building with the given class, if it has one.
    pub const fn from_class(service: Option<Service>, sub_service: Option<SubService>) -> Option<Self> {
        let Some(service) = service else {
            return None;
        };
        Some(match service {
            Service::Electricity => Self::Electricity,
            Service::Water => Self::Water,
            Service::Garbage => Self::Garbage,
            Service::PlayerIndustry => Self::PlayerIndustry,
            Service::PublicTransport => Self::Transport,
            Service::HealthCare => Self::Healthcare,
            Service::FireDepartment => Self::FireDepartment,
            Service::PoliceDepartment => Self::Police,
            Service::Education => Self::Education,
            Service::PlayerEducation | Service::Museums | Service::VarsitySports => Self::Campus,
            Service::Beautification => match sub_service {
                Some(SubService::BeautificationPlazas) => Self::Plazas,
                _ => Self::Parks,
            },
            Service::Monument => Self::Monuments,
            Service::Disaster => Self::Disaster,
            Service::Fishing => Self::Fishing,
            Service::Road | Service::Tourism | Service::Hotel | Service::Citizen | Service::Natural => {
                Self::Unsorted
            }
            Service::Residential | Service::Commercial | Service::Industrial | Service::Office => {
                return None;
            }
        })
    }
}

impl Category for PloppableCategory {
    const ALL: &'static [Self] = &[
        Self::Electricity,
        Self::Water,
        Self::Garbage,
        Self::PlayerIndustry,
        Self::Transport,
        Self::Healthcare,
        Self::FireDepartment,
        Self::Police,
        Self::Education,
        Self::Campus,
        Self::Parks,
        Self::Plazas,
        Self::Monuments,
        Self::Disaster,
        Self::Fishing,
        Self::Unsorted,
    ];
}
