//! Filter state and the ordered filter pipeline applied before scoring.
//!
//! The pipeline runs five checks per item, in order, and short-circuits on the
//! first rejection:
//!
//! 1. source (vanilla / workshop content)
//! 2. asset type
//! 3. per-type category selection
//! 4. extra filter
//! 5. pinned custom tag

use super::context::SearchContext;
use super::extra::{ExtraFilter, FilterOutcome};
use crate::catalog::{
    AssetType, CatalogItem, Category, Footprint, GrowableCategory, NetworkFlag, NetworkPrefab,
    NetworkType, PloppableCategory, PropType, TreeType,
};
use ahash::AHashSet;

/// Asset type narrowing chosen in the search box dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Network,
    Ploppable,
    Growable,
    Rico,
    /// Growable and RICO assets together.
    GrowableOrRico,
    Prop,
    Decal,
    Tree,
}

impl TypeFilter {
    pub const fn accepts(self, asset_type: AssetType) -> bool {
        match self {
            Self::All => true,
            Self::Network => matches!(asset_type, AssetType::Network),
            Self::Ploppable => matches!(asset_type, AssetType::Ploppable),
            Self::Growable => matches!(asset_type, AssetType::Growable),
            Self::Rico => matches!(asset_type, AssetType::Rico),
            Self::GrowableOrRico => matches!(asset_type, AssetType::Growable | AssetType::Rico),
            Self::Prop => matches!(asset_type, AssetType::Prop),
            Self::Decal => matches!(asset_type, AssetType::Decal),
            Self::Tree => matches!(asset_type, AssetType::Tree),
        }
    }
}

/// The set of selected values of a closed category enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<C: Category> {
    selected: AHashSet<C>,
}

impl<C: Category> Default for Selection<C> {
    fn default() -> Self {
        Self::all()
    }
}

impl<C: Category> Selection<C> {
    pub fn all() -> Self {
        Self {
            selected: C::ALL.iter().copied().collect(),
        }
    }

    pub fn none() -> Self {
        Self {
            selected: AHashSet::new(),
        }
    }

    pub fn only(value: C) -> Self {
        Self {
            selected: std::iter::once(value).collect(),
        }
    }

    pub fn select(&mut self, value: C) {
        self.selected.insert(value);
    }

    pub fn deselect(&mut self, value: C) {
        self.selected.remove(&value);
    }

    pub fn is_selected(&self, value: C) -> bool {
        self.selected.contains(&value)
    }

    pub fn is_all_selected(&self) -> bool {
        C::ALL.iter().all(|value| self.selected.contains(value))
    }

    /// Whether any selected value satisfies `predicate`.
    pub fn any_selected(&self, predicate: impl Fn(C) -> bool) -> bool {
        self.selected.iter().copied().any(predicate)
    }

    /// Accepts an item with category `value`. Everything passes when the
    /// whole enumeration is selected, including items with no category.
    fn accepts(&self, value: Option<C>) -> bool {
        self.is_all_selected() || value.is_some_and(|value| self.is_selected(value))
    }
}

impl<C: Category> FromIterator<C> for Selection<C> {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}

/// Network category and attribute flag selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NetworkSelection {
    pub categories: Selection<NetworkType>,
    pub flags: Selection<NetworkFlag>,
}

impl NetworkSelection {
    /// Only networks of `kind`, with no attribute flags.
    pub fn only(kind: NetworkType) -> Self {
        Self {
            categories: Selection::only(kind),
            flags: Selection::none(),
        }
    }

    pub fn is_all_selected(&self) -> bool {
        self.categories.is_all_selected() && self.flags.is_all_selected()
    }

    fn accepts(&self, item: &CatalogItem) -> bool {
        if self.is_all_selected() {
            return true;
        }
        let Some((kind, info)) = item.network() else {
            return false;
        };

        let mut any_flag = false;
        for &flag in NetworkFlag::ALL {
            if !self.flags.is_selected(flag) {
                continue;
            }
            if !flag.applies_to(kind) || !flag_holds(flag, info) {
                return false;
            }
            any_flag = true;
        }

        if !any_flag || self.categories.any_selected(NetworkType::is_road_or_path) {
            self.categories.is_selected(kind)
        } else {
            true
        }
    }
}

fn flag_holds(flag: NetworkFlag, info: &NetworkPrefab) -> bool {
    match flag {
        NetworkFlag::OneWay => info.is_one_way(),
        NetworkFlag::Parking => info.has_parking_spaces,
        NetworkFlag::NoParking => !info.has_parking_spaces,
        NetworkFlag::BusLane => info.has_bus_lane(),
        NetworkFlag::TrolleybusLane => info.has_trolleybus_lane(),
        NetworkFlag::BikeLane => info.has_bike_lane(),
        NetworkFlag::TramLane => info.has_tram_lane(),
    }
}

/// Footprint bucket along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeBucket {
    #[default]
    All,
    /// A single cell count. The panel only offers 1 through 4, but any
    /// count can be constructed and is matched exactly.
    Exactly(u32),
    From5To8,
    From9To12,
    From13,
}

impl SizeBucket {
    /// Bucket at a dropdown position: 0 = all, 1-4 exact, then 5-8, 9-12, 13+.
    pub const fn from_index(index: u8) -> Option<Self> {
        Some(match index {
            0 => Self::All,
            1..=4 => Self::Exactly(index as u32),
            5 => Self::From5To8,
            6 => Self::From9To12,
            7 => Self::From13,
            _ => return None,
        })
    }

    pub const fn matches(self, cells: u32) -> bool {
        match self {
            Self::All => true,
            Self::Exactly(n) => cells == n,
            Self::From5To8 => matches!(cells, 5..=8),
            Self::From9To12 => matches!(cells, 9..=12),
            Self::From13 => cells >= 13,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildingSizeFilter {
    pub x: SizeBucket,
    pub y: SizeBucket,
}

impl BuildingSizeFilter {
    pub const fn matches(self, size: Footprint) -> bool {
        self.x.matches(size.x) && self.y.matches(size.y)
    }
}

/// Snapshot of every UI filter control, taken once per search.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub type_filter: TypeFilter,
    pub include_vanilla: bool,
    pub include_workshop: bool,
    pub networks: NetworkSelection,
    pub props: Selection<PropType>,
    pub trees: Selection<TreeType>,
    pub growables: Selection<GrowableCategory>,
    pub ploppables: Selection<PloppableCategory>,
    pub building_size: BuildingSizeFilter,
    pub extra: Option<ExtraFilter>,
    /// Custom tag chosen in the tag panel; items must carry it exactly.
    pub pinned_custom_tag: Option<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            type_filter: TypeFilter::All,
            include_vanilla: true,
            include_workshop: true,
            networks: NetworkSelection::default(),
            props: Selection::all(),
            trees: Selection::all(),
            growables: Selection::all(),
            ploppables: Selection::all(),
            building_size: BuildingSizeFilter::default(),
            extra: None,
            pinned_custom_tag: None,
        }
    }
}

impl FilterState {
    pub fn with_type(type_filter: TypeFilter) -> Self {
        Self {
            type_filter,
            ..Self::default()
        }
    }
}

/// Applies a [`FilterState`] to catalog items.
#[derive(Debug, Clone, Copy)]
pub struct FilterPipeline<'a> {
    state: &'a FilterState,
    ctx: SearchContext<'a>,
}

impl<'a> FilterPipeline<'a> {
    pub const fn new(state: &'a FilterState, ctx: SearchContext<'a>) -> Self {
        Self { state, ctx }
    }

    pub fn accepts(&self, item: &CatalogItem) -> bool {
        self.check_source(item)
            && self.state.type_filter.accepts(item.asset_type)
            && self.check_category(item)
            && self.check_extra(item)
            && self.check_pinned_tag(item)
    }

    /// Vanilla / workshop toggles. Companion-mod output counts as workshop
    /// content and content creator packs count as vanilla.
    pub fn check_source(&self, item: &CatalogItem) -> bool {
        let generated = self.ctx.is_mod_generated(item);
        if !self.state.include_workshop && (item.is_custom_content || generated) {
            return false;
        }
        if !self.state.include_vanilla
            && !item.is_custom_content
            && !generated
            && !item.is_content_creator_pack
        {
            return false;
        }
        true
    }

    pub fn check_category(&self, item: &CatalogItem) -> bool {
        let state = self.state;
        match state.type_filter {
            TypeFilter::Growable | TypeFilter::Rico | TypeFilter::GrowableOrRico => {
                state.building_size.matches(item.size)
                    && state
                        .growables
                        .accepts(GrowableCategory::from_class(item.sub_service))
            }
            TypeFilter::Ploppable => {
                state.building_size.matches(item.size)
                    && state
                        .ploppables
                        .accepts(PloppableCategory::from_class(item.service, item.sub_service))
            }
            TypeFilter::Prop => state.props.accepts(item.prop().map(|prop| prop.kind)),
            TypeFilter::Tree => state.trees.accepts(item.tree().map(|tree| tree.kind)),
            TypeFilter::Network => state.networks.accepts(item),
            TypeFilter::All | TypeFilter::Decal => true,
        }
    }

    /// Sub-buildings are hidden unless the sub-building extra filter is on.
    /// An extra filter that cannot be evaluated lets the item through and is
    /// reported to the observer.
    pub fn check_extra(&self, item: &CatalogItem) -> bool {
        let Some(extra) = &self.state.extra else {
            return !item.is_sub_building;
        };
        if item.is_sub_building && *extra != ExtraFilter::SubBuildings {
            return false;
        }
        match extra.evaluate(item, &self.ctx) {
            FilterOutcome::Pass => true,
            FilterOutcome::Reject => false,
            FilterOutcome::EvaluationError(error) => {
                self.ctx.observer.evaluation_error(item, &error);
                true
            }
        }
    }

    pub fn check_pinned_tag(&self, item: &CatalogItem) -> bool {
        self.state
            .pinned_custom_tag
            .as_deref()
            .is_none_or(|tag| item.has_custom_tag(tag))
    }
}
