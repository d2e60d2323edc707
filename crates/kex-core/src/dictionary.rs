//! Dictionary — the synonym tree plus the genre locator and name flattener.
//!
//! A [`Dictionary`] is built once (from [`Dictionary::builtin`] or a JSON file)
//! and then only borrowed. Building it compiles every alias in both match
//! modes, so [`locate`] never compiles anything and [`flatten`] never mutates
//! the tree.

use std::path::Path;

use crate::error::{Result, SearchError};
use crate::matcher::Matcher;
use crate::types::{MatchMode, SynonymNode};

// ---------------------------------------------------------------------------
// Compiled aliases
// ---------------------------------------------------------------------------

/// Per-node alias matchers, laid out parallel to the [`SynonymNode`] tree.
#[derive(Debug, Clone)]
struct Genre {
    pattern: Matcher,
    literal: Matcher,
    children: Vec<Genre>,
}

impl Genre {
    fn compile(node: &SynonymNode, path: String) -> Result<Self> {
        if node.names.is_empty() {
            return Err(SearchError::EmptyNames { path });
        }
        let pattern = Matcher::new(&node.names, MatchMode::Pattern).map_err(|e| match e {
            SearchError::InvalidPattern { pattern, source } => SearchError::InvalidAlias {
                path: path.clone(),
                pattern,
                source,
            },
            other => other,
        })?;
        let literal = Matcher::new(&node.names, MatchMode::Literal)?;
        let children = compile_all(&node.children, &format!("{path}.children"))?;
        Ok(Self {
            pattern,
            literal,
            children,
        })
    }

    fn matcher(&self, mode: MatchMode) -> &Matcher {
        match mode {
            MatchMode::Pattern => &self.pattern,
            MatchMode::Literal => &self.literal,
        }
    }
}

fn compile_all(nodes: &[SynonymNode], prefix: &str) -> Result<Vec<Genre>> {
    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| Genre::compile(node, format!("{prefix}[{i}]")))
        .collect()
}

// ---------------------------------------------------------------------------
// Locator
// ---------------------------------------------------------------------------

/// Find the first node, in depth-first pre-order, with an alias matching
/// `keyword`.
///
/// Each alias is searched for inside the keyword. A node that matches is
/// returned without looking at its children; otherwise its children are
/// searched before its next sibling.
pub fn locate<'d>(
    keyword: &str,
    dictionary: &'d Dictionary,
    mode: MatchMode,
) -> Option<&'d SynonymNode> {
    locate_in(keyword, &dictionary.nodes, &dictionary.genres, mode)
}

fn locate_in<'d>(
    keyword: &str,
    nodes: &'d [SynonymNode],
    genres: &[Genre],
    mode: MatchMode,
) -> Option<&'d SynonymNode> {
    for (node, genre) in nodes.iter().zip(genres) {
        if genre.matcher(mode).matches(keyword) {
            tracing::trace!(genre = %node.names.join("/"), keyword, "locate: alias matched");
            return Some(node);
        }
        if let Some(found) = locate_in(keyword, &node.children, &genre.children, mode) {
            return Some(found);
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Flattener
// ---------------------------------------------------------------------------

/// Collect the names of `node` and all of its descendants.
///
/// Order is depth-first pre-order: own names first, then each child's
/// flattened names in child order. Duplicates are kept.
pub fn flatten(node: &SynonymNode) -> Vec<String> {
    let mut names = Vec::new();
    flatten_into(node, &mut names);
    names
}

fn flatten_into(node: &SynonymNode, out: &mut Vec<String>) {
    out.extend(node.names.iter().cloned());
    for child in &node.children {
        flatten_into(child, out);
    }
}

// ---------------------------------------------------------------------------
// Dictionary
// ---------------------------------------------------------------------------

/// An immutable synonym tree with its aliases compiled, shared read-only by
/// every search.
#[derive(Debug, Clone)]
pub struct Dictionary {
    nodes: Vec<SynonymNode>,
    genres: Vec<Genre>,
}

impl Dictionary {
    /// Build a dictionary from top-level nodes.
    ///
    /// Fails if any node has no names or an alias is not a valid pattern; the
    /// error carries the node's path, e.g. `[0].children[2]`.
    pub fn new(nodes: Vec<SynonymNode>) -> Result<Self> {
        let genres = compile_all(&nodes, "")?;
        Ok(Self { nodes, genres })
    }

    /// The Music › Guitar / Bass example dictionary.
    pub fn builtin() -> Self {
        Self::new(crate::builtin::sample_dictionary())
            .expect("built-in dictionary aliases must compile")
    }

    /// Parse a JSON array of nodes:
    ///
    /// ```json
    /// [{ "names": ["音楽", "Music"], "children": [{ "names": ["Boss"] }] }]
    /// ```
    pub fn from_json_str(src: &str) -> Result<Self> {
        let nodes: Vec<SynonymNode> = serde_json::from_str(src)?;
        Self::new(nodes)
    }

    /// Read and parse a JSON dictionary file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| SearchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dict = Self::from_json_str(&src)?;
        tracing::debug!(path = %path.display(), genres = dict.genre_count(), "dictionary loaded");
        Ok(dict)
    }

    pub fn nodes(&self) -> &[SynonymNode] {
        &self.nodes
    }

    /// Total number of nodes at every depth.
    pub fn genre_count(&self) -> usize {
        fn count(nodes: &[SynonymNode]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        count(&self.nodes)
    }

    /// See [`locate`].
    pub fn locate(&self, keyword: &str, mode: MatchMode) -> Option<&SynonymNode> {
        locate(keyword, self, mode)
    }
}

impl PartialEq for Dictionary {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl Eq for Dictionary {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
