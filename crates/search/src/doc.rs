//! Search document types.

use serde::Serialize;

/// Which part of the site a document belongs to.
///
/// Serialized lowercase, matching the `category` strings the frontend
/// uses to group results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocCategory {
    Archive,
    Monastery,
    Festival,
}

impl std::fmt::Display for DocCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DocCategory::Archive => "archive",
            DocCategory::Monastery => "monastery",
            DocCategory::Festival => "festival",
        };
        write!(f, "{name}")
    }
}

/// A single searchable entry.
///
/// `title` carries the display name for every category; monasteries and
/// festivals do not have a separate name field on the wire. `extras`
/// holds auxiliary attribute values (year, artist, material, and so on)
/// that participate in matching but are not part of the response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchDoc {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub monastery: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub tags: Vec<String>,
    pub redirect_url: String,
    pub category: DocCategory,
    #[serde(skip)]
    pub extras: Vec<String>,
}

impl SearchDoc {
    /// All searchable text, lowercased and joined with spaces.
    ///
    /// Location and date are display-only and do not participate in
    /// matching.
    pub(crate) fn full_text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        parts.push(self.title.to_lowercase());
        parts.push(self.description.to_lowercase());
        parts.extend(self.tags.iter().map(|tag| tag.to_lowercase()));
        if let Some(monastery) = &self.monastery {
            parts.push(monastery.to_lowercase());
        }
        if let Some(kind) = &self.kind {
            parts.push(kind.to_lowercase());
        }
        parts.extend(self.extras.iter().map(|extra| extra.to_lowercase()));
        parts.join(" ")
    }
}

/// A search hit: the document plus its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDoc {
    #[serde(flatten)]
    pub doc: SearchDoc,
    pub relevance_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> SearchDoc {
        SearchDoc {
            id: "archive_test".into(),
            title: "Test Paintings".into(),
            description: "A sample collection".into(),
            kind: Some("Art".into()),
            monastery: Some("Rumtek Monastery".into()),
            location: None,
            date: None,
            tags: vec!["painting".into(), "test".into()],
            redirect_url: "/archives#test".into(),
            category: DocCategory::Archive,
            extras: vec!["15th Century".into()],
        }
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&DocCategory::Monastery).unwrap();
        assert_eq!(json, "\"monastery\"");
        assert_eq!(DocCategory::Festival.to_string(), "festival");
    }

    #[test]
    fn test_kind_serializes_under_the_type_key() {
        let value = serde_json::to_value(sample_doc()).unwrap();
        assert_eq!(value["type"], "Art");
        assert_eq!(value["category"], "archive");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_extras_are_not_serialized() {
        let value = serde_json::to_value(sample_doc()).unwrap();
        assert!(value.get("extras").is_none());
    }

    #[test]
    fn test_scored_doc_flattens_the_document() {
        let scored = ScoredDoc {
            doc: sample_doc(),
            relevance_score: 42.5,
        };
        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["id"], "archive_test");
        assert_eq!(value["relevance_score"], 42.5);
        assert!(value.get("doc").is_none());
    }

    #[test]
    fn test_full_text_covers_title_tags_and_extras() {
        let text = sample_doc().full_text();
        assert!(text.contains("test paintings"));
        assert!(text.contains("painting"));
        assert!(text.contains("rumtek monastery"));
        assert!(text.contains("art"));
        assert!(text.contains("15th century"));
    }

    #[test]
    fn test_full_text_excludes_location_and_date() {
        let mut doc = sample_doc();
        doc.location = Some("Gangtok, Sikkim".into());
        doc.date = Some("February".into());
        let text = doc.full_text();
        assert!(!text.contains("gangtok"));
        assert!(!text.contains("february"));
    }
}
