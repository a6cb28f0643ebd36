//! Typed identifiers for catalog entries.

use serde::{Deserialize, Serialize};

/// Unique identifier for a monastery.
///
/// Wraps the numeric id used on the wire to prevent mixing up
/// monastery ids with festival or archive ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonasteryId(u32);

impl MonasteryId {
    /// Creates a monastery ID from a raw number.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying number.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for MonasteryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MonasteryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<MonasteryId> for u32 {
    fn from(id: MonasteryId) -> Self {
        id.0
    }
}

/// Unique identifier for a festival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FestivalId(u32);

impl FestivalId {
    /// Creates a festival ID from a raw number.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying number.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for FestivalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FestivalId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<FestivalId> for u32 {
    fn from(id: FestivalId) -> Self {
        id.0
    }
}

/// Unique identifier for an archive collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArchiveId(u32);

impl ArchiveId {
    /// Creates an archive ID from a raw number.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying number.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ArchiveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ArchiveId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<ArchiveId> for u32 {
    fn from(id: ArchiveId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_compare_by_value() {
        assert_eq!(MonasteryId::new(1), MonasteryId::new(1));
        assert_ne!(FestivalId::new(1), FestivalId::new(2));
    }

    #[test]
    fn test_ids_serialize_as_bare_numbers() {
        let json = serde_json::to_string(&ArchiveId::new(7)).unwrap();
        assert_eq!(json, "7");

        let id: MonasteryId = serde_json::from_str("2").unwrap();
        assert_eq!(id.get(), 2);
    }

    #[test]
    fn test_ids_display_the_raw_number() {
        assert_eq!(FestivalId::new(10).to_string(), "10");
    }
}
