//! Relevance-scored search over the cultural heritage corpus.
//!
//! This crate provides:
//! - [`SearchDoc`] entries covering archives, monasteries, and festivals
//! - A weighted relevance score combining phrase, word, tag, and fuzzy matches
//! - [`SearchIndex`] with ranked search and autocomplete suggestions

pub mod corpus;
pub mod doc;
pub mod engine;

pub use doc::{DocCategory, ScoredDoc, SearchDoc};
pub use engine::SearchIndex;
