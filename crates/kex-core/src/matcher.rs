//! Matcher — compiles expanded names and scans the corpus.
//!
//! Every name becomes one case-insensitive [`Regex`]. In
//! [`MatchMode::Pattern`] the name is used verbatim, so an alias such as
//! `Line ?6` is a pattern; in [`MatchMode::Literal`] it is escaped first.

use std::collections::BTreeSet;

use regex::{Regex, RegexBuilder};

use crate::error::{Result, SearchError};
use crate::types::MatchMode;

/// Compile a single name for the given mode.
pub fn compile(name: &str, mode: MatchMode) -> Result<Regex> {
    let source = match mode {
        MatchMode::Pattern => name.to_string(),
        MatchMode::Literal => regex::escape(name),
    };
    RegexBuilder::new(&source)
        .case_insensitive(true)
        .build()
        .map_err(|e| SearchError::invalid_pattern(name, e))
}

/// A compiled set of names. A line matches when any name matches it.
#[derive(Debug, Clone)]
pub struct Matcher {
    patterns: Vec<Regex>,
}

impl Matcher {
    /// Compile every name. Fails on the first name that is not a valid
    /// pattern, in name order.
    pub fn new<S: AsRef<str>>(names: &[S], mode: MatchMode) -> Result<Self> {
        let patterns = names
            .iter()
            .map(|name| compile(name.as_ref(), mode))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn matches(&self, line: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(line))
    }

    /// Distinct matching lines in ascending order.
    pub fn collect<'c, S: AsRef<str>>(&self, corpus: &'c [S]) -> BTreeSet<&'c str> {
        corpus
            .iter()
            .map(AsRef::as_ref)
            .filter(|line| self.matches(line))
            .collect()
    }
}
