//! Cultural heritage catalog for the Monastery360 platform.
//!
//! This crate provides the data set served by the public API:
//! - Monastery profiles with bilingual text and map coordinates
//! - Festival calendar entries
//! - Archive collections (art, literature, artifacts)
//! - A [`Catalog`] store with id lookups and substring matching

pub mod data;
pub mod ids;
pub mod model;
pub mod store;

pub use ids::{ArchiveId, FestivalId, MonasteryId};
pub use model::{Archive, ArchiveCategory, Festival, Monastery};
pub use store::Catalog;
