//! kex — Keyword EXpansion search.
//!
//! Given a keyword, a synonym tree and a corpus of lines, print every line
//! that mentions the keyword or any alias of the genre it belongs to.
//!
//! # Architecture
//!
//! ```text
//! CorpusSource ──► corpus ─┐
//!                          ├──► kex_core::search ──► output::render ──► stdout
//! Dictionary  ─────────────┘
//! ```
//!
//! Loading is done by `kex-feeds` and [`kex_core::Dictionary::load`]; the
//! search itself lives in `kex-core`. This crate only wires them together
//! and formats the result.

pub mod output;

pub use kex_core::{Dictionary, MatchMode, SearchOutcome};
