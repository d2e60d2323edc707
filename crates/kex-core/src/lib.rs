//! kex-core — keyword expansion core library.
//!
//! This crate exposes the three pipeline stages as public modules, plus the
//! shared types used across all of them.
//!
//! # Architecture
//!
//! ```text
//! keyword ──► Locator ──► Flattener ──► Matcher ──► SearchOutcome
//!                │                         ▲
//!                └──── (no genre) ─────────┘  fallback: [keyword]
//! ```
//!
//! Every stage is a synchronous, pure function over a [`Dictionary`] and a
//! corpus borrowed from the caller. Nothing in the dictionary is mutated by a
//! search, so one dictionary can serve any number of concurrent searches.

pub mod builtin;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod matcher;
pub mod search;
pub mod types;

pub use dictionary::{flatten, locate, Dictionary};
pub use error::{Result, SearchError};
pub use matcher::Matcher;
pub use search::{expand, search, search_with};
pub use types::{Expansion, MatchMode, SearchOutcome, SynonymNode};
