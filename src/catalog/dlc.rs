//! Downloadable-content requirements of an asset.

use bitflags::bitflags;

bitflags! {
    /// Set of DLC packs an asset requires. Empty means base game.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DlcMask: u32 {
        const DELUXE = 1 << 0;
        const AFTER_DARK = 1 << 1;
        const SNOWFALL = 1 << 2;
        const NATURAL_DISASTERS = 1 << 3;
        const MASS_TRANSIT = 1 << 4;
        const GREEN_CITIES = 1 << 5;
        const PARKLIFE = 1 << 6;
        const INDUSTRIES = 1 << 7;
        const CAMPUS = 1 << 8;
        const SUNSET_HARBOR = 1 << 9;
        const AIRPORTS = 1 << 10;
        const MATCH_DAY = 1 << 11;
        const STADIUMS = 1 << 12;
        const PEARLS_FROM_THE_EAST = 1 << 13;
        const CONCERTS = 1 << 14;
        const ART_DECO = 1 << 15;
        const HIGH_TECH_BUILDINGS = 1 << 16;
        const EUROPEAN_SUBURBIA = 1 << 17;
        const UNIVERSITY_CITY = 1 << 18;
        const MODERN_CITY_CENTER = 1 << 19;
        const MODERN_JAPAN = 1 << 20;
        const TRAIN_STATIONS = 1 << 21;
        const BRIDGES_PIERS = 1 << 22;
        const VEHICLES_OF_THE_WORLD = 1 << 23;
    }
}

/// One entry of the DLC extra-filter dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DlcOption {
    BaseGame,
    DeluxeUpgrade,
    AfterDark,
    Airports,
    Snowfall,
    NaturalDisasters,
    MassTransit,
    GreenCities,
    Parklife,
    Industries,
    Campus,
    SunsetHarbor,
    MatchDay,
    Stadiums,
    PearlsFromTheEast,
    Concerts,
    ArtDeco,
    HighTechBuildings,
    EuropeanSuburbia,
    UniversityCity,
    ModernCityCenter,
    ModernJapan,
    TrainStations,
    BridgesPiers,
    VehiclesOfTheWorld,
}

impl DlcOption {
    /// The exact mask an asset must carry to be listed under this option.
    pub const fn required_mask(self) -> DlcMask {
        match self {
            Self::BaseGame => DlcMask::empty(),
            Self::DeluxeUpgrade => DlcMask::DELUXE,
            Self::AfterDark => DlcMask::AFTER_DARK,
            Self::Airports => DlcMask::AIRPORTS,
            Self::Snowfall => DlcMask::SNOWFALL,
            Self::NaturalDisasters => DlcMask::NATURAL_DISASTERS,
            Self::MassTransit => DlcMask::MASS_TRANSIT,
            Self::GreenCities => DlcMask::GREEN_CITIES,
            Self::Parklife => DlcMask::PARKLIFE,
            Self::Industries => DlcMask::INDUSTRIES,
            Self::Campus => DlcMask::CAMPUS,
            Self::SunsetHarbor => DlcMask::SUNSET_HARBOR,
            Self::MatchDay => DlcMask::MATCH_DAY,
            Self::Stadiums => DlcMask::STADIUMS,
            Self::PearlsFromTheEast => DlcMask::PEARLS_FROM_THE_EAST,
            Self::Concerts => DlcMask::CONCERTS,
            Self::ArtDeco => DlcMask::ART_DECO,
            Self::HighTechBuildings => DlcMask::HIGH_TECH_BUILDINGS,
            Self::EuropeanSuburbia => DlcMask::EUROPEAN_SUBURBIA,
            Self::UniversityCity => DlcMask::UNIVERSITY_CITY,
            Self::ModernCityCenter => DlcMask::MODERN_CITY_CENTER,
            Self::ModernJapan => DlcMask::MODERN_JAPAN,
            Self::TrainStations => DlcMask::TRAIN_STATIONS,
            Self::BridgesPiers => DlcMask::BRIDGES_PIERS,
            Self::VehiclesOfTheWorld => DlcMask::VEHICLES_OF_THE_WORLD,
        }
    }

    /// Whether an asset requiring `mask` is listed under this option.
    ///
    /// Assets needing more than one pack match no single pack option.
    pub fn matches(self, mask: DlcMask) -> bool {
        mask == self.required_mask()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn base_game_requires_empty_mask() {
        check!(DlcOption::BaseGame.matches(DlcMask::empty()));
        check!(!DlcOption::BaseGame.matches(DlcMask::AFTER_DARK));
    }

    #[test]
    fn pack_option_requires_exact_mask() {
        check!(DlcOption::Parklife.matches(DlcMask::PARKLIFE));
        check!(!DlcOption::Parklife.matches(DlcMask::empty()));
        check!(!DlcOption::Parklife.matches(DlcMask::PARKLIFE | DlcMask::CAMPUS));
    }
}
