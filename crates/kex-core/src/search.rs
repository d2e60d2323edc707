//! Search layer — keyword expansion followed by a linear corpus scan.
//!
//! [`expand`] resolves a keyword to its effective name set: the flattened
//! names of the first matching genre, or just the keyword itself when no
//! genre matches (fallback search). [`search`] then scans the corpus with
//! those names and returns the distinct hits in ascending order.

use crate::dictionary::{flatten, locate, Dictionary};
use crate::error::Result;
use crate::matcher::Matcher;
use crate::types::{Expansion, MatchMode, SearchOutcome};

/// Resolve `keyword` to the names the corpus will be scanned with.
pub fn expand<'d>(keyword: &str, dictionary: &'d Dictionary, mode: MatchMode) -> Expansion<'d> {
    match locate(keyword, dictionary, mode) {
        Some(genre) => {
            let names = flatten(genre);
            tracing::debug!(
                keyword,
                genre = %genre.names.join("/"),
                names = names.len(),
                "expand: genre located"
            );
            Expansion {
                genre: Some(genre),
                names,
            }
        }
        None => {
            tracing::debug!(keyword, "expand: no genre, falling back to keyword");
            Expansion {
                genre: None,
                names: vec![keyword.to_string()],
            }
        }
    }
}

/// Search with aliases treated as patterns.
pub fn search<S: AsRef<str>>(
    keyword: &str,
    dictionary: &Dictionary,
    corpus: &[S],
) -> Result<SearchOutcome> {
    search_with(keyword, dictionary, corpus, MatchMode::Pattern)
}

/// Search with an explicit [`MatchMode`].
///
/// Fails only when the keyword falls back to itself and is not a valid
/// pattern; dictionary aliases were compiled when the dictionary was built.
pub fn search_with<S: AsRef<str>>(
    keyword: &str,
    dictionary: &Dictionary,
    corpus: &[S],
    mode: MatchMode,
) -> Result<SearchOutcome> {
    if keyword.is_empty() {
        return Ok(SearchOutcome::EmptyKeyword);
    }

    let expansion = expand(keyword, dictionary, mode);
    let matcher = Matcher::new(&expansion.names, mode)?;
    let hits = matcher.collect(corpus);
    tracing::debug!(
        keyword,
        %mode,
        lines = corpus.len(),
        hits = hits.len(),
        "search complete"
    );

    if hits.is_empty() {
        Ok(SearchOutcome::NotFound)
    } else {
        Ok(SearchOutcome::Matches(
            hits.into_iter().map(String::from).collect(),
        ))
    }
}
