//! Query tokenization into operator-tagged keywords.

use regex::Regex;
use std::sync::LazyLock;

/// Splits on any run of characters that are neither word characters nor one
/// of the operator prefixes. Hyphens, whitespace and other punctuation all
/// separate keywords.
static KEYWORD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w!#+%$]+").expect("keyword separator pattern is valid"));

/// How a keyword participates in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Must match somewhere; contributes to the score.
    Plain,
    /// `!`: must not match anywhere.
    Exclude,
    /// `#`: must match one of the item's custom tags.
    CustomTagOnly,
    /// `$`: must not match any of the item's custom tags.
    CustomTagExclude,
    /// `+`: at least one `+` keyword of the query must match.
    Or,
    /// `%`: must match the item's Workshop identifier.
    WorkshopId,
}

impl Operator {
    /// The operator introduced by a leading character, if it is one.
    pub const fn from_prefix(c: char) -> Option<Self> {
        match c {
            '!' => Some(Self::Exclude),
            '#' => Some(Self::CustomTagOnly),
            '$' => Some(Self::CustomTagExclude),
            '+' => Some(Self::Or),
            '%' => Some(Self::WorkshopId),
            _ => None,
        }
    }
}

/// One parsed query token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub operator: Operator,
    pub operand: String,
}

impl Keyword {
    pub fn new(operator: Operator, operand: impl Into<String>) -> Self {
        Self {
            operator,
            operand: operand.into(),
        }
    }

    /// Parses one already-separated token. Bare operators yield `None`.
    fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let first = chars.next()?;
        match Operator::from_prefix(first) {
            Some(operator) => {
                let operand = chars.as_str();
                (!operand.is_empty()).then(|| Self::new(operator, operand))
            }
            None => Some(Self::new(Operator::Plain, token)),
        }
    }
}

/// A raw query string together with its parsed keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    keywords: Vec<Keyword>,
}

impl Query {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            keywords: tokenize(raw),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    /// An empty query matches everything that survives filtering.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn has_or_keywords(&self) -> bool {
        self.keywords.iter().any(|k| k.operator == Operator::Or)
    }
}

/// Lowercases, trims and splits a query into keywords.
pub fn tokenize(raw: &str) -> Vec<Keyword> {
    let text = raw.trim().to_lowercase();
    if text.is_empty() {
        return vec![];
    }

    KEYWORD_SEPARATOR
        .split(&text)
        .filter(|token| !token.is_empty())
        .filter_map(Keyword::parse)
        .collect()
}
