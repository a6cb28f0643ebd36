//! In-memory catalog store.

use crate::data;
use crate::ids::{ArchiveId, FestivalId, MonasteryId};
use crate::model::{Archive, Festival, Monastery};

/// Read-only collection of catalog entries.
///
/// Built once at startup from the seed data and shared across request
/// handlers. All lookups borrow from the seeded vectors.
#[derive(Debug, Clone)]
pub struct Catalog {
    monasteries: Vec<Monastery>,
    festivals: Vec<Festival>,
    archives: Vec<Archive>,
}

impl Catalog {
    /// Builds the catalog from the seed data.
    pub fn seeded() -> Self {
        Self {
            monasteries: data::monasteries(),
            festivals: data::festivals(),
            archives: data::archives(),
        }
    }

    /// All monastery profiles.
    pub fn monasteries(&self) -> &[Monastery] {
        &self.monasteries
    }

    /// All festival calendar entries.
    pub fn festivals(&self) -> &[Festival] {
        &self.festivals
    }

    /// All archive collections.
    pub fn archives(&self) -> &[Archive] {
        &self.archives
    }

    /// Looks up a monastery by id.
    pub fn monastery(&self, id: MonasteryId) -> Option<&Monastery> {
        self.monasteries.iter().find(|m| m.id == id)
    }

    /// Looks up a festival by id.
    pub fn festival(&self, id: FestivalId) -> Option<&Festival> {
        self.festivals.iter().find(|f| f.id == id)
    }

    /// Looks up an archive collection by id.
    pub fn archive(&self, id: ArchiveId) -> Option<&Archive> {
        self.archives.iter().find(|a| a.id == id)
    }

    /// Monasteries whose English text contains the query, case-insensitive.
    ///
    /// A blank or whitespace-only query matches nothing.
    pub fn monasteries_matching(&self, query: &str) -> Vec<&Monastery> {
        let needle = query.trim();
        if needle.is_empty() {
            return Vec::new();
        }
        self.monasteries.iter().filter(|m| m.matches(needle)).collect()
    }

    /// Festivals whose English text contains the query, case-insensitive.
    ///
    /// A blank or whitespace-only query matches nothing.
    pub fn festivals_matching(&self, query: &str) -> Vec<&Festival> {
        let needle = query.trim();
        if needle.is_empty() {
            return Vec::new();
        }
        self.festivals.iter().filter(|f| f.matches(needle)).collect()
    }

    /// Archive collections whose English text contains the query, case-insensitive.
    ///
    /// A blank or whitespace-only query matches nothing.
    pub fn archives_matching(&self, query: &str) -> Vec<&Archive> {
        let needle = query.trim();
        if needle.is_empty() {
            return Vec::new();
        }
        self.archives.iter().filter(|a| a.matches(needle)).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog_has_expected_counts() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.monasteries().len(), 2);
        assert_eq!(catalog.festivals().len(), 10);
        assert_eq!(catalog.archives().len(), 6);
    }

    #[test]
    fn test_seeded_ids_are_dense_and_unique() {
        let catalog = Catalog::seeded();

        for (index, monastery) in catalog.monasteries().iter().enumerate() {
            assert_eq!(monastery.id, MonasteryId::new(index as u32 + 1));
        }
        for (index, festival) in catalog.festivals().iter().enumerate() {
            assert_eq!(festival.id, FestivalId::new(index as u32 + 1));
        }
        for (index, archive) in catalog.archives().iter().enumerate() {
            assert_eq!(archive.id, ArchiveId::new(index as u32 + 1));
        }
    }

    #[test]
    fn test_lookup_by_id_returns_the_entry() {
        let catalog = Catalog::seeded();

        let rumtek = catalog.monastery(MonasteryId::new(1)).unwrap();
        assert_eq!(rumtek.name, "Rumtek Monastery");

        let losar = catalog.festival(FestivalId::new(1)).unwrap();
        assert_eq!(losar.name, "Losar Festival");
        assert_eq!(losar.date, "2025-02-10");

        let thangka = catalog.archive(ArchiveId::new(1)).unwrap();
        assert_eq!(thangka.title, "Buddhist Thangka Paintings");
    }

    #[test]
    fn test_lookup_with_unknown_id_returns_none() {
        let catalog = Catalog::seeded();
        assert!(catalog.monastery(MonasteryId::new(99)).is_none());
        assert!(catalog.festival(FestivalId::new(0)).is_none());
        assert!(catalog.archive(ArchiveId::new(7)).is_none());
    }

    #[test]
    fn test_matching_is_case_insensitive_substring() {
        let catalog = Catalog::seeded();

        assert_eq!(catalog.monasteries_matching("rumtek").len(), 1);
        assert_eq!(catalog.monasteries_matching("RUMTEK").len(), 1);
        assert_eq!(catalog.monasteries_matching("monastery").len(), 2);

        let losar_hits = catalog.festivals_matching("losar");
        assert_eq!(losar_hits.len(), 1);
        assert_eq!(losar_hits[0].id, FestivalId::new(1));

        assert_eq!(catalog.archives_matching("thangka").len(), 1);
    }

    #[test]
    fn test_matching_blank_query_returns_nothing() {
        let catalog = Catalog::seeded();
        assert!(catalog.monasteries_matching("").is_empty());
        assert!(catalog.festivals_matching("   ").is_empty());
        assert!(catalog.archives_matching("\t").is_empty());
    }

    #[test]
    fn test_matching_unknown_term_returns_nothing() {
        let catalog = Catalog::seeded();
        assert!(catalog.monasteries_matching("cathedral").is_empty());
        assert!(catalog.festivals_matching("carnival").is_empty());
        assert!(catalog.archives_matching("paperback").is_empty());
    }
}
