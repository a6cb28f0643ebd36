//! Catalog entry types.
//!
//! Wire names follow the JSON contract consumed by the web frontend,
//! which expects camelCase keys such as `nameNepali` and `titleNepali`.

use serde::{Deserialize, Serialize};

use crate::ids::{ArchiveId, FestivalId, MonasteryId};

/// A monastery profile with bilingual text and map coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monastery {
    pub id: MonasteryId,
    pub name: String,
    pub name_nepali: String,
    pub description: String,
    pub description_nepali: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub founded: String,
    pub significance: String,
    pub features: Vec<String>,
    pub image: String,
}

impl Monastery {
    /// Case-insensitive containment over the English text fields.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [
            &self.name,
            &self.description,
            &self.significance,
            &self.address,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// A festival or recurring ceremony on the cultural calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Festival {
    pub id: FestivalId,
    pub name: String,
    pub name_nepali: String,
    /// Next occurrence, as an ISO `YYYY-MM-DD` string.
    pub date: String,
    pub description: String,
    pub description_nepali: String,
    pub location: String,
    pub duration: String,
    pub significance: String,
    pub image: String,
}

impl Festival {
    /// Case-insensitive containment over the English text fields.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [
            &self.name,
            &self.description,
            &self.significance,
            &self.location,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Category of an archive collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArchiveCategory {
    Art,
    Literature,
    Artifacts,
}

impl std::fmt::Display for ArchiveCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ArchiveCategory::Art => "Art",
            ArchiveCategory::Literature => "Literature",
            ArchiveCategory::Artifacts => "Artifacts",
        };
        write!(f, "{name}")
    }
}

/// An archived collection of cultural material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archive {
    pub id: ArchiveId,
    pub title: String,
    pub title_nepali: String,
    pub description: String,
    pub description_nepali: String,
    pub category: ArchiveCategory,
    pub period: String,
    pub location: String,
    pub significance: String,
    pub image: String,
}

impl Archive {
    /// Case-insensitive containment over the English text fields.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [
            &self.title,
            &self.description,
            &self.significance,
            &self.location,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn test_monastery_serializes_with_camel_case_keys() {
        let monastery = &data::monasteries()[0];
        let value = serde_json::to_value(monastery).unwrap();
        let obj = value.as_object().unwrap();

        assert!(obj.contains_key("nameNepali"));
        assert!(obj.contains_key("descriptionNepali"));
        assert!(!obj.contains_key("name_nepali"));
        assert_eq!(value["id"], 1);
    }

    #[test]
    fn test_archive_category_serializes_as_plain_name() {
        let json = serde_json::to_string(&ArchiveCategory::Literature).unwrap();
        assert_eq!(json, "\"Literature\"");
        assert_eq!(ArchiveCategory::Art.to_string(), "Art");
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let monastery = &data::monasteries()[0];
        assert!(monastery.matches("RUMTEK"));
        assert!(monastery.matches("rumtek"));
    }

    #[test]
    fn test_matches_covers_description_and_significance() {
        let monastery = &data::monasteries()[0];
        assert!(monastery.matches("largest monastery"));
        assert!(monastery.matches("karmapa"));
        assert!(!monastery.matches("cathedral"));
    }

    #[test]
    fn test_festival_matches_location() {
        let festivals = data::festivals();
        let bumchu = festivals.iter().find(|f| f.name == "Bumchu Festival").unwrap();
        assert!(bumchu.matches("tashiding"));
    }
}
