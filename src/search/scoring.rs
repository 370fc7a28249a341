//! Search relevance scoring.
//!
//! A keyword is scored against each searchable field of an item. Field scores
//! reward keywords that are long relative to the field and that match near its
//! start, and are divided by the tag's document frequency when one is known.

use super::filter::TypeFilter;
use super::frequency::{TagFrequencyIndex, TagFrequencyTable};
use crate::catalog::{AssetType, CatalogItem};
use std::borrow::Cow;

/// Multiplier for a keyword found at the very start of the field.
const PREFIX_MULTIPLIER: f32 = 10.0;

const AUTHOR_WEIGHT: f32 = 10.0;
const TYPE_WEIGHT: f32 = 10.0;
const SERVICE_WEIGHT: f32 = 10.0;
const SUB_SERVICE_WEIGHT: f32 = 10.0;
const SIZE_WEIGHT: f32 = 10.0;
const CUSTOM_TAG_WEIGHT: f32 = 20.0;
const TITLE_TAG_WEIGHT: f32 = 5.0;
const DESC_TAG_WEIGHT: f32 = 1.0;

fn lowercase(text: &str) -> Cow<'_, str> {
    if text.chars().any(char::is_uppercase) {
        Cow::Owned(text.to_lowercase())
    } else {
        Cow::Borrowed(text)
    }
}

/// Scores one keyword against one field value.
///
/// Returns 0 when the keyword is not a case-insensitive substring of `value`
/// (or either is empty). Otherwise, with `idx` the char offset of the first
/// occurrence:
///
/// ```text
/// multiplier * ((len(value) - idx) / len(value)) * (len(keyword) / len(value))
/// ```
///
/// where `multiplier` is 10 for a prefix match and 1 otherwise, divided by the
/// document frequency of `value` when `table` knows it.
pub fn field_score(keyword: &str, value: &str, table: Option<&TagFrequencyTable>) -> f32 {
    if keyword.is_empty() || value.is_empty() {
        return 0.0;
    }

    let keyword = lowercase(keyword);
    let haystack = lowercase(value);
    let Some(byte_idx) = haystack.find(keyword.as_ref()) else {
        return 0.0;
    };

    let idx = haystack[..byte_idx].chars().count() as f32;
    let len = haystack.chars().count() as f32;
    let keyword_len = keyword.chars().count() as f32;

    let mut multiplier = if byte_idx == 0 { PREFIX_MULTIPLIER } else { 1.0 };
    if let Some(table) = table
        && table.contains(value)
    {
        multiplier /= table.frequency(value) as f32;
    }

    multiplier * ((len - idx) / len) * (keyword_len / len)
}

/// Weighted sum of field scores for one keyword across every searchable field.
///
/// Absent fields (no author, no class, zero footprint) contribute nothing. The
/// asset type name is only searchable when no type filter narrows the results.
pub fn overall_score(
    item: &CatalogItem,
    keyword: &str,
    type_filter: TypeFilter,
    tags: &TagFrequencyIndex,
) -> f32 {
    let mut score = 0.0;

    if let Some(author) = item.author.as_deref()
        && !author.trim().is_empty()
    {
        score += AUTHOR_WEIGHT * field_score(keyword, author, None);
    }

    if type_filter == TypeFilter::All && item.asset_type != AssetType::Invalid {
        score += TYPE_WEIGHT * field_score(keyword, item.asset_type.name(), None);
    }

    if let Some(service) = item.service {
        score += SERVICE_WEIGHT * field_score(keyword, service.name(), None);
    }

    if let Some(sub_service) = item.sub_service {
        score += SUB_SERVICE_WEIGHT * field_score(keyword, sub_service.name(), None);
    }

    if !item.size.is_zero() {
        score += SIZE_WEIGHT * field_score(keyword, &item.size.to_string(), None);
    }

    score += CUSTOM_TAG_WEIGHT * sum_scores(keyword, &item.custom_tags, &tags.custom);
    score += TITLE_TAG_WEIGHT * sum_scores(keyword, &item.title_tags, &tags.title);
    score += DESC_TAG_WEIGHT * sum_scores(keyword, &item.desc_tags, &tags.description);

    score
}

/// Unweighted score of a keyword against the item's custom tags only.
pub fn custom_tag_score(item: &CatalogItem, keyword: &str, tags: &TagFrequencyIndex) -> f32 {
    sum_scores(keyword, &item.custom_tags, &tags.custom)
}

fn sum_scores(keyword: &str, values: &[String], table: &TagFrequencyTable) -> f32 {
    values
        .iter()
        .map(|value| field_score(keyword, value, Some(table)))
        .sum()
}
