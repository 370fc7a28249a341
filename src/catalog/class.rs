//! Item class names: the service and sub-service an asset belongs to.
//!
//! Absence is modelled with `Option` on the item rather than a `None` variant,
//! so every variant here has a searchable name.

/// Top-level service of a building, network or prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Residential,
    Commercial,
    Industrial,
    Office,
    Citizen,
    Tourism,
    Natural,
    Road,
    Electricity,
    Water,
    Garbage,
    HealthCare,
    PoliceDepartment,
    FireDepartment,
    Education,
    PlayerEducation,
    Museums,
    VarsitySports,
    PublicTransport,
    Beautification,
    Monument,
    Disaster,
    PlayerIndustry,
    Fishing,
    Hotel,
}

impl Service {
    /// Lowercase name, as matched by search keywords.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Industrial => "industrial",
            Self::Office => "office",
            Self::Citizen => "citizen",
            Self::Tourism => "tourism",
            Self::Natural => "natural",
            Self::Road => "road",
            Self::Electricity => "electricity",
            Self::Water => "water",
            Self::Garbage => "garbage",
            Self::HealthCare => "healthcare",
            Self::PoliceDepartment => "policedepartment",
            Self::FireDepartment => "firedepartment",
            Self::Education => "education",
            Self::PlayerEducation => "playereducation",
            Self::Museums => "museums",
            Self::VarsitySports => "varsitysports",
            Self::PublicTransport => "publictransport",
            Self::Beautification => "beautification",
            Self::Monument => "monument",
            Self::Disaster => "disaster",
            Self::PlayerIndustry => "playerindustry",
            Self::Fishing => "fishing",
            Self::Hotel => "hotel",
        }
    }
}

/// Second-level class of an item, refining its [`Service`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubService {
    ResidentialLow,
    ResidentialHigh,
    ResidentialLowEco,
    ResidentialHighEco,
    CommercialLow,
    CommercialHigh,
    CommercialLeisure,
    CommercialTourist,
    CommercialEco,
    IndustrialGeneric,
    IndustrialForestry,
    IndustrialFarming,
    IndustrialOil,
    IndustrialOre,
    OfficeGeneric,
    OfficeHightech,
    PublicTransportBus,
    PublicTransportMetro,
    PublicTransportTrain,
    PublicTransportShip,
    PublicTransportPlane,
    PublicTransportTaxi,
    PublicTransportTram,
    PublicTransportMonorail,
    PublicTransportCableCar,
    PublicTransportTours,
    PublicTransportPost,
    PublicTransportTrolleybus,
    BeautificationParks,
    BeautificationPlazas,
}

impl SubService {
    /// Lowercase name, as matched by search keywords.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ResidentialLow => "residentiallow",
            Self::ResidentialHigh => "residentialhigh",
            Self::ResidentialLowEco => "residentialloweco",
            Self::ResidentialHighEco => "residentialhigheco",
            Self::CommercialLow => "commerciallow",
            Self::CommercialHigh => "commercialhigh",
            Self::CommercialLeisure => "commercialleisure",
            Self::CommercialTourist => "commercialtourist",
            Self::CommercialEco => "commercialeco",
            Self::IndustrialGeneric => "industrialgeneric",
            Self::IndustrialForestry => "industrialforestry",
            Self::IndustrialFarming => "industrialfarming",
            Self::IndustrialOil => "industrialoil",
            Self::IndustrialOre => "industrialore",
            Self::OfficeGeneric => "officegeneric",
            Self::OfficeHightech => "officehightech",
            Self::PublicTransportBus => "publictransportbus",
            Self::PublicTransportMetro => "publictransportmetro",
            Self::PublicTransportTrain => "publictransporttrain",
            Self::PublicTransportShip => "publictransportship",
            Self::PublicTransportPlane => "publictransportplane",
            Self::PublicTransportTaxi => "publictransporttaxi",
            Self::PublicTransportTram => "publictransporttram",
            Self::PublicTransportMonorail => "publictransportmonorail",
            Self::PublicTransportCableCar => "publictransportcablecar",
            Self::PublicTransportTours => "publictransporttours",
            Self::PublicTransportPost => "publictransportpost",
            Self::PublicTransportTrolleybus => "publictransporttrolleybus",
            Self::BeautificationParks => "beautificationparks",
            Self::BeautificationPlazas => "beautificationplazas",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn names_are_lowercase() {
        for name in [
            Service::HealthCare.name(),
            Service::PublicTransport.name(),
            SubService::ResidentialLowEco.name(),
            SubService::PublicTransportCableCar.name(),
        ] {
            check!(name == name.to_lowercase());
        }
    }
}
