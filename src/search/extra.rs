//! The "extra" filter: one optional, mutually exclusive secondary filter mode.

use super::context::SearchContext;
use crate::catalog::{AssetType, CatalogItem, DlcOption};
use crate::error::FilterError;

/// The single active extra filter, with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtraFilter {
    /// Items published by this author.
    Creator(String),
    /// Buildings whose height lies in `min..=max`.
    BuildingHeight { min: f32, max: f32 },
    /// Buildings whose class level lies in `min..=max`.
    BuildingLevel { min: u8, max: u8 },
    /// Only sub-buildings that have no top-level type of their own.
    SubBuildings,
    /// Items with no placed instances.
    UnusedOnly,
    /// Items with at least one placed instance.
    UsedOnly,
    WithCustomTag,
    WithoutCustomTag,
    Dlc(DlcOption),
    /// Custom content installed locally (or without a Workshop id).
    LocalCustom,
    /// Custom content obtained through a Workshop subscription.
    WorkshopCustom,
    TerrainConforming,
    NonTerrainConforming,
}

/// Result of evaluating one filter step against one item.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    Pass,
    Reject,
    /// The check could not be evaluated. Callers treat this as [`Pass`](Self::Pass).
    EvaluationError(FilterError),
}

impl From<Result<bool, FilterError>> for FilterOutcome {
    fn from(result: Result<bool, FilterError>) -> Self {
        match result {
            Ok(true) => Self::Pass,
            Ok(false) => Self::Reject,
            Err(error) => Self::EvaluationError(error),
        }
    }
}

impl ExtraFilter {
    pub fn evaluate(&self, item: &CatalogItem, ctx: &SearchContext<'_>) -> FilterOutcome {
        self.check(item, ctx).into()
    }

    fn check(&self, item: &CatalogItem, ctx: &SearchContext<'_>) -> Result<bool, FilterError> {
        match self {
            Self::Creator(name) => Ok(item.author.as_deref() == Some(name.as_str())),
            Self::BuildingHeight { min, max } => {
                if !item.asset_type.is_building() {
                    return Ok(false);
                }
                let building = item
                    .building()
                    .ok_or_else(|| payload_mismatch(item, "building"))?;
                Ok(building.height >= *min && building.height <= *max)
            }
            Self::BuildingLevel { min, max } => Ok(item
                .building()
                .is_some_and(|building| (*min..=*max).contains(&building.level))),
            Self::SubBuildings => Ok(item.is_sub_building && item.asset_type == AssetType::Invalid),
            Self::UnusedOnly => Ok(usage(item, ctx)? == 0),
            Self::UsedOnly => Ok(usage(item, ctx)? > 0),
            Self::WithCustomTag => Ok(!item.custom_tags.is_empty()),
            Self::WithoutCustomTag => Ok(item.custom_tags.is_empty()),
            Self::Dlc(option) => Ok(option.matches(item.dlc)),
            Self::LocalCustom => {
                if !item.is_custom_content {
                    return Ok(false);
                }
                if item.steam_id == 0 {
                    return Ok(true);
                }
                Ok(is_local(item, ctx)?)
            }
            Self::WorkshopCustom => {
                if !item.is_custom_content || item.steam_id == 0 {
                    return Ok(false);
                }
                Ok(!is_local(item, ctx)?)
            }
            Self::TerrainConforming => terrain_conforming(item, true),
            Self::NonTerrainConforming => terrain_conforming(item, false),
        }
    }
}

fn payload_mismatch(item: &CatalogItem, expected: &'static str) -> FilterError {
    FilterError::PayloadMismatch {
        item: item.id.clone(),
        expected,
    }
}

fn usage(item: &CatalogItem, ctx: &SearchContext<'_>) -> Result<u32, FilterError> {
    ctx.total_usage(&item.id)
        .ok_or_else(|| FilterError::MissingUsageSource {
            item: item.id.clone(),
        })
}

fn is_local(item: &CatalogItem, ctx: &SearchContext<'_>) -> Result<bool, FilterError> {
    let subscriptions = ctx
        .local_subscriptions
        .ok_or_else(|| FilterError::MissingSubscriptions {
            item: item.id.clone(),
        })?;
    Ok(subscriptions.contains_id(item.steam_id))
}

/// Whether the item conforms (`wanted == true`) or does not conform
/// (`wanted == false`) to terrain.
///
/// Networks conform when any segment uses the terrain shader, so a network
/// with no segments only passes the non-conforming check.
fn terrain_conforming(item: &CatalogItem, wanted: bool) -> Result<bool, FilterError> {
    match item.asset_type {
        AssetType::Decal | AssetType::Tree => Ok(wanted),
        AssetType::Prop => {
            let prop = item.prop().ok_or_else(|| payload_mismatch(item, "prop"))?;
            Ok(prop.terrain_conforming == wanted)
        }
        AssetType::Ploppable | AssetType::Growable | AssetType::Rico => {
            let building = item
                .building()
                .ok_or_else(|| payload_mismatch(item, "building"))?;
            Ok(building.terrain_conforming == wanted)
        }
        AssetType::Network => {
            let (_, info) = item
                .network()
                .ok_or_else(|| payload_mismatch(item, "network"))?;
            let any_conforming = info.segments.iter().any(|s| s.terrain_conforming);
            Ok(any_conforming == wanted)
        }
        AssetType::Invalid => Ok(true),
    }
}
