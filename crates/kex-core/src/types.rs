//! Core types for kex-core.
//!
//! This module defines the data structures shared across the pipeline: the
//! recursive [`SynonymNode`], the [`MatchMode`] discriminant, the intermediate
//! [`Expansion`] and the final [`SearchOutcome`].

use serde::{Deserialize, Serialize};

/// Message shown when a search is started without a keyword.
pub const EMPTY_KEYWORD_MESSAGE: &str = "Please Input Keyword";

/// Message shown when no corpus line matches any expanded name.
pub const NOT_FOUND_MESSAGE: &str = "Not Found";

/// One genre in the synonym tree.
///
/// `names` holds the aliases of the concept itself; `children` holds the
/// narrower sub-concepts. A node without children is a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymNode {
    /// Aliases for this concept. Never empty in a loaded dictionary.
    pub names: Vec<String>,
    /// Sub-concepts, searched and flattened in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SynonymNode>,
}

impl SynonymNode {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<SynonymNode>) -> Self {
        self.children = children;
        self
    }
}

/// How aliases and keywords are turned into matchers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Every alias is a case-insensitive regular expression.
    #[default]
    Pattern,
    /// Every alias is matched as case-insensitive literal text.
    Literal,
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::Pattern => write!(f, "pattern"),
            MatchMode::Literal => write!(f, "literal"),
        }
    }
}

impl std::str::FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pattern" | "regex" => Ok(MatchMode::Pattern),
            "literal" => Ok(MatchMode::Literal),
            other => Err(format!("unknown match mode {other:?}")),
        }
    }
}

/// The effective search-name-set for a keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion<'d> {
    /// The genre the keyword resolved to, or `None` for a fallback search.
    pub genre: Option<&'d SynonymNode>,
    /// Names every corpus line is tested against.
    pub names: Vec<String>,
}

impl Expansion<'_> {
    pub fn is_fallback(&self) -> bool {
        self.genre.is_none()
    }
}

/// Result of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The keyword was empty; nothing was matched.
    EmptyKeyword,
    /// No corpus line matched.
    NotFound,
    /// Distinct matching lines in ascending order.
    Matches(Vec<String>),
}

impl SearchOutcome {
    /// Matching lines, empty for either sentinel.
    pub fn lines(&self) -> &[String] {
        match self {
            SearchOutcome::Matches(lines) => lines,
            _ => &[],
        }
    }

    /// Sentinel message, if this outcome is one.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SearchOutcome::EmptyKeyword => Some(EMPTY_KEYWORD_MESSAGE),
            SearchOutcome::NotFound => Some(NOT_FOUND_MESSAGE),
            SearchOutcome::Matches(_) => None,
        }
    }
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchOutcome::EmptyKeyword => write!(f, "{EMPTY_KEYWORD_MESSAGE}"),
            SearchOutcome::NotFound => write!(f, "{NOT_FOUND_MESSAGE}"),
            SearchOutcome::Matches(lines) => write!(f, "{}", lines.join("\n")),
        }
    }
}
