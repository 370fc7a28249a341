//! Query parsing, relevance scoring and filtering over a [`Catalog`](crate::Catalog).
//!
//! A search tokenizes the query, runs every catalog item through the filter
//! pipeline and scores the survivors keyword by keyword.

// Module declarations
pub(crate) mod context;
pub(crate) mod engine;
pub(crate) mod extra;
pub(crate) mod filter;
pub(crate) mod frequency;
pub(crate) mod scoring;
pub(crate) mod tokenize;

// Public re-exports (used via lib.rs)
pub use context::{FilterObserver, SearchContext, SubscriptionSet, TracingObserver, UsageLookup};
pub use engine::{Match, MatchResult, Searcher};
pub use extra::{ExtraFilter, FilterOutcome};
pub use filter::{
    BuildingSizeFilter, FilterPipeline, FilterState, NetworkSelection, Selection, SizeBucket,
    TypeFilter,
};
pub use frequency::{TagCategory, TagFrequencyIndex, TagFrequencyTable};
pub use scoring::{custom_tag_score, field_score, overall_score};
pub use tokenize::{Keyword, Operator, Query, tokenize};
