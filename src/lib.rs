//! Ranking and filtering engine behind an in-game asset catalog search box.
//!
//! Given a free-text query and a snapshot of the active category and attribute
//! filters, [`Searcher::find`] selects and scores the matching subset of a
//! [`Catalog`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod tracing;

pub use catalog::{AssetType, Catalog, CatalogItem, ItemId};
pub use config::SearchConfig;
pub use error::{FilterError, Result};
pub use search::{
    FilterState, Keyword, Match, MatchResult, Operator, Query, SearchContext, Searcher,
    TagFrequencyIndex,
};
