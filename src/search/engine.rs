//! The search orchestrator: one linear pass over the catalog.

use super::context::SearchContext;
use super::filter::{FilterPipeline, FilterState};
use super::frequency::TagFrequencyIndex;
use super::scoring::{custom_tag_score, field_score, overall_score};
use super::tokenize::{Operator, Query};
use crate::catalog::{Catalog, CatalogItem, ItemId};
use ahash::AHashMap;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::time::Instant;

/// One accepted item and its aggregate score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    pub item: &'a CatalogItem,
    pub score: f32,
}

/// Items accepted by a search, in catalog order.
///
/// Order carries no ranking meaning; callers sort for presentation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchResult<'a> {
    matches: Vec<Match<'a>>,
    positions: AHashMap<&'a ItemId, usize>,
}

impl<'a> MatchResult<'a> {
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Match<'a>> {
        self.matches.iter()
    }

    pub fn items(&self) -> impl Iterator<Item = &'a CatalogItem> + '_ {
        self.matches.iter().map(|m| m.item)
    }

    pub fn score_of(&self, id: &ItemId) -> Option<f32> {
        self.positions
            .get(id)
            .map(|&position| self.matches[position].score)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.positions.contains_key(id)
    }

    /// A uniformly random match, or `None` when nothing matched.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Match<'a>> {
        self.matches.choose(rng)
    }
}

impl<'a> From<Vec<Match<'a>>> for MatchResult<'a> {
    fn from(matches: Vec<Match<'a>>) -> Self {
        let positions = matches
            .iter()
            .enumerate()
            .map(|(position, m)| (&m.item.id, position))
            .collect();
        Self { matches, positions }
    }
}

impl<'r, 'a> IntoIterator for &'r MatchResult<'a> {
    type Item = &'r Match<'a>;
    type IntoIter = std::slice::Iter<'r, Match<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for MatchResult<'a> {
    type Item = Match<'a>;
    type IntoIter = std::vec::IntoIter<Match<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

/// Runs queries against a borrowed catalog and its tag frequency tables.
#[derive(Debug, Clone, Copy)]
pub struct Searcher<'a> {
    catalog: &'a Catalog,
    tags: &'a TagFrequencyIndex,
    ctx: SearchContext<'a>,
}

impl<'a> Searcher<'a> {
    pub fn new(catalog: &'a Catalog, tags: &'a TagFrequencyIndex) -> Self {
        Self {
            catalog,
            tags,
            ctx: SearchContext::default(),
        }
    }

    pub const fn with_context(mut self, ctx: SearchContext<'a>) -> Self {
        self.ctx = ctx;
        self
    }

    /// Parses `query` and returns every filter survivor it matches.
    pub fn find(&self, query: &str, state: &FilterState) -> MatchResult<'a> {
        self.find_query(&Query::parse(query), state)
    }

    pub fn find_query(&self, query: &Query, state: &FilterState) -> MatchResult<'a> {
        let start = Instant::now();
        let pipeline = FilterPipeline::new(state, self.ctx);

        let matches: Vec<Match<'a>> = self
            .catalog
            .iter()
            .filter(|item| item.prefab.is_some())
            .filter(|item| pipeline.accepts(item))
            .filter_map(|item| {
                self.score(item, query, state)
                    .map(|score| Match { item, score })
            })
            .collect();

        tracing::debug!(
            query = query.raw(),
            matched = matches.len(),
            catalog = self.catalog.len(),
            "Search completed in {:?}",
            start.elapsed()
        );

        MatchResult::from(matches)
    }

    /// Aggregate score of `item` for `query`, or `None` if a keyword rejects it.
    fn score(&self, item: &CatalogItem, query: &Query, state: &FilterState) -> Option<f32> {
        if query.is_empty() {
            return Some(0.0);
        }

        let type_filter = state.type_filter;
        let mut total = 0.0;
        let mut or_total = 0.0;

        for keyword in query.keywords() {
            let operand = keyword.operand.as_str();
            match keyword.operator {
                Operator::Plain => {
                    let score = overall_score(item, operand, type_filter, self.tags);
                    if score <= 0.0 {
                        return None;
                    }
                    total += score;
                }
                Operator::Exclude => {
                    if overall_score(item, operand, type_filter, self.tags) > 0.0 {
                        return None;
                    }
                }
                Operator::CustomTagOnly => {
                    if custom_tag_score(item, operand, self.tags) <= 0.0 {
                        return None;
                    }
                }
                Operator::CustomTagExclude => {
                    if custom_tag_score(item, operand, self.tags) > 0.0 {
                        return None;
                    }
                }
                Operator::WorkshopId => {
                    if !item.is_custom_content
                        || item.steam_id == 0
                        || field_score(operand, &item.steam_id.to_string(), None) <= 0.0
                    {
                        return None;
                    }
                }
                Operator::Or => {
                    let score = overall_score(item, operand, type_filter, self.tags);
                    or_total += score;
                    total += score;
                }
            }
        }

        if query.has_or_keywords() && or_total <= 0.0 {
            return None;
        }
        Some(total)
    }
}
