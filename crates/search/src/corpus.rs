//! Seed corpus for the search index.
//!
//! Archive entries carry richer attributes than the catalog pages; the
//! extra values (year, artist, material, and so on) improve matching
//! but never appear in responses.

use crate::doc::{DocCategory, SearchDoc};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

/// Every searchable document, in stable order: archives, then
/// monasteries, then festivals. Ties in relevance keep this order.
pub fn all() -> Vec<SearchDoc> {
    let mut docs = archives();
    docs.extend(monasteries());
    docs.extend(festivals());
    docs
}

fn archives() -> Vec<SearchDoc> {
    vec![
        SearchDoc {
            id: "archive_1".into(),
            title: "Ancient Thangka Paintings".into(),
            description: "Collection of traditional Tibetan Buddhist scroll paintings from \
                          the 15th century featuring deities, mandalas, and religious scenes"
                .into(),
            kind: Some("Art".into()),
            monastery: Some("Rumtek Monastery".into()),
            location: None,
            date: None,
            tags: strings(&[
                "thangka",
                "painting",
                "buddhist",
                "art",
                "tibetan",
                "scroll",
                "deities",
                "mandala",
                "religious",
                "15th century",
            ]),
            redirect_url: "/archives#thangka-paintings".into(),
            category: DocCategory::Archive,
            extras: strings(&["15th Century", "Unknown Tibetan Masters"]),
        },
        SearchDoc {
            id: "archive_2".into(),
            title: "Sacred Manuscripts".into(),
            description: "Rare Buddhist scriptures and prayer texts written in Tibetan \
                          script including the Kangyur and Tengyur collections"
                .into(),
            kind: Some("Literature".into()),
            monastery: Some("Pemayangtse Monastery".into()),
            location: None,
            date: None,
            tags: strings(&[
                "manuscript",
                "scripture",
                "prayer",
                "tibetan",
                "buddhist",
                "text",
                "kangyur",
                "tengyur",
                "sacred",
                "script",
            ]),
            redirect_url: "/archives#sacred-manuscripts".into(),
            category: DocCategory::Archive,
            extras: strings(&["Various", "Tibetan"]),
        },
        SearchDoc {
            id: "archive_3".into(),
            title: "Ceremonial Artifacts".into(),
            description: "Traditional ritual objects used in Buddhist ceremonies and \
                          festivals including prayer wheels, bells, and offering bowls"
                .into(),
            kind: Some("Artifact".into()),
            monastery: Some("Tashiding Monastery".into()),
            location: None,
            date: None,
            tags: strings(&[
                "ceremony",
                "ritual",
                "artifact",
                "buddhist",
                "festival",
                "traditional",
                "prayer wheel",
                "bell",
                "offering bowl",
                "ritual object",
            ]),
            redirect_url: "/archives#ceremonial-artifacts".into(),
            category: DocCategory::Archive,
            extras: strings(&["Various", "Bronze, Wood, Silver"]),
        },
        SearchDoc {
            id: "archive_4".into(),
            title: "Historical Photographs".into(),
            description: "Vintage photographs documenting monastery life, architecture, and \
                          daily rituals from the early 20th century"
                .into(),
            kind: Some("Photography".into()),
            monastery: Some("Rumtek Monastery".into()),
            location: None,
            date: None,
            tags: strings(&[
                "photograph",
                "history",
                "architecture",
                "monastery",
                "vintage",
                "documentation",
                "20th century",
                "daily life",
                "rituals",
            ]),
            redirect_url: "/archives#historical-photographs".into(),
            category: DocCategory::Archive,
            extras: strings(&["Early 20th Century", "Various"]),
        },
        SearchDoc {
            id: "archive_5".into(),
            title: "Musical Instruments".into(),
            description: "Traditional Tibetan musical instruments used in religious \
                          ceremonies including dungchen, gyaling, and damaru"
                .into(),
            kind: Some("Music".into()),
            monastery: Some("Pemayangtse Monastery".into()),
            location: None,
            date: None,
            tags: strings(&[
                "music",
                "instrument",
                "tibetan",
                "ceremony",
                "religious",
                "traditional",
                "dungchen",
                "gyaling",
                "damaru",
                "ritual music",
            ]),
            redirect_url: "/archives#musical-instruments".into(),
            category: DocCategory::Archive,
            extras: strings(&["Various", "Dungchen, Gyaling, Damaru, Cymbals"]),
        },
        SearchDoc {
            id: "archive_6".into(),
            title: "Architectural Drawings".into(),
            description: "Detailed architectural plans and designs of monastery structures \
                          showing traditional Tibetan building techniques"
                .into(),
            kind: Some("Architecture".into()),
            monastery: Some("Tashiding Monastery".into()),
            location: None,
            date: None,
            tags: strings(&[
                "architecture",
                "drawing",
                "design",
                "monastery",
                "structure",
                "plan",
                "tibetan",
                "building",
                "technique",
                "blueprint",
            ]),
            redirect_url: "/archives#architectural-drawings".into(),
            category: DocCategory::Archive,
            extras: strings(&["Various", "Traditional Tibetan Architects"]),
        },
        SearchDoc {
            id: "archive_7".into(),
            title: "Buddhist Statues Collection".into(),
            description: "Ancient bronze and wooden statues of Buddha, Bodhisattvas, and \
                          other deities from various periods"
                .into(),
            kind: Some("Sculpture".into()),
            monastery: Some("Rumtek Monastery".into()),
            location: None,
            date: None,
            tags: strings(&[
                "statue",
                "buddha",
                "bodhisattva",
                "deity",
                "bronze",
                "wooden",
                "sculpture",
                "ancient",
                "religious",
                "art",
            ]),
            redirect_url: "/archives#buddhist-statues".into(),
            category: DocCategory::Archive,
            extras: strings(&["Various", "Bronze, Wood, Stone"]),
        },
        SearchDoc {
            id: "archive_8".into(),
            title: "Prayer Flags Archive".into(),
            description: "Collection of traditional prayer flags with mantras and symbols \
                          used in Buddhist ceremonies"
                .into(),
            kind: Some("Textile".into()),
            monastery: Some("Pemayangtse Monastery".into()),
            location: None,
            date: None,
            tags: strings(&[
                "prayer flag",
                "mantra",
                "symbol",
                "textile",
                "buddhist",
                "ceremony",
                "traditional",
                "flag",
                "religious",
                "symbolism",
            ]),
            redirect_url: "/archives#prayer-flags".into(),
            category: DocCategory::Archive,
            extras: strings(&["Various", "Cotton, Silk"]),
        },
        SearchDoc {
            id: "archive_9".into(),
            title: "Monastery Chronicles".into(),
            description: "Historical records and chronicles documenting the founding and \
                          development of Sikkim's monasteries"
                .into(),
            kind: Some("Document".into()),
            monastery: Some("Tashiding Monastery".into()),
            location: None,
            date: None,
            tags: strings(&[
                "chronicle",
                "history",
                "record",
                "founding",
                "development",
                "monastery",
                "document",
                "historical",
                "sikkim",
                "archive",
            ]),
            redirect_url: "/archives#monastery-chronicles".into(),
            category: DocCategory::Archive,
            extras: strings(&["Various", "Tibetan, English"]),
        },
        SearchDoc {
            id: "archive_10".into(),
            title: "Festival Costumes".into(),
            description: "Traditional costumes and ceremonial attire worn during Buddhist \
                          festivals and religious ceremonies"
                .into(),
            kind: Some("Costume".into()),
            monastery: Some("Rumtek Monastery".into()),
            location: None,
            date: None,
            tags: strings(&[
                "costume",
                "ceremonial",
                "attire",
                "festival",
                "buddhist",
                "traditional",
                "religious",
                "ceremony",
                "clothing",
                "dress",
            ]),
            redirect_url: "/archives#festival-costumes".into(),
            category: DocCategory::Archive,
            extras: strings(&["Various", "Silk, Brocade, Cotton"]),
        },
    ]
}

fn monasteries() -> Vec<SearchDoc> {
    vec![
        SearchDoc {
            id: "monastery_1".into(),
            title: "Rumtek Monastery".into(),
            description: "The largest monastery in Sikkim, known for its golden roof and \
                          traditional architecture"
                .into(),
            kind: None,
            monastery: None,
            location: Some("Gangtok, Sikkim".into()),
            date: None,
            tags: strings(&["rumtek", "gangtok", "golden", "roof", "largest", "traditional"]),
            redirect_url: "/map".into(),
            category: DocCategory::Monastery,
            extras: Vec::new(),
        },
        SearchDoc {
            id: "monastery_2".into(),
            title: "Pemayangtse Monastery".into(),
            description: "Ancient monastery with white walls and stunning mountain views".into(),
            kind: None,
            monastery: None,
            location: Some("Pelling, Sikkim".into()),
            date: None,
            tags: strings(&["pemayangtse", "pelling", "white", "walls", "mountain", "ancient"]),
            redirect_url: "/map".into(),
            category: DocCategory::Monastery,
            extras: Vec::new(),
        },
        SearchDoc {
            id: "monastery_3".into(),
            title: "Tashiding Monastery".into(),
            description: "Hilltop monastery with prayer flags and valley views".into(),
            kind: None,
            monastery: None,
            location: Some("Tashiding, Sikkim".into()),
            date: None,
            tags: strings(&["tashiding", "hilltop", "prayer", "flags", "valley", "views"]),
            redirect_url: "/map".into(),
            category: DocCategory::Monastery,
            extras: Vec::new(),
        },
    ]
}

fn festivals() -> Vec<SearchDoc> {
    vec![
        SearchDoc {
            id: "festival_1".into(),
            title: "Losar Festival".into(),
            description: "Tibetan New Year celebration with traditional dances, ceremonies, \
                          and cultural performances"
                .into(),
            kind: Some("Religious Festival".into()),
            monastery: Some("All Monasteries".into()),
            location: None,
            date: Some("February".into()),
            tags: strings(&[
                "losar",
                "new year",
                "tibetan",
                "dance",
                "ceremony",
                "celebration",
                "tibetan new year",
                "cultural performance",
            ]),
            redirect_url: "/calendar#losar-festival".into(),
            category: DocCategory::Festival,
            extras: Vec::new(),
        },
        SearchDoc {
            id: "festival_2".into(),
            title: "Saga Dawa".into(),
            description: "Buddhist festival commemorating Buddha's birth, enlightenment, and \
                          death with prayer ceremonies"
                .into(),
            kind: Some("Religious Festival".into()),
            monastery: Some("All Monasteries".into()),
            location: None,
            date: Some("May-June".into()),
            tags: strings(&[
                "saga dawa",
                "buddha",
                "birth",
                "enlightenment",
                "death",
                "buddhist",
                "prayer",
                "ceremony",
                "holy month",
            ]),
            redirect_url: "/calendar#saga-dawa".into(),
            category: DocCategory::Festival,
            extras: Vec::new(),
        },
        SearchDoc {
            id: "festival_3".into(),
            title: "Tihar Festival".into(),
            description: "Hindu festival of lights celebrated across Sikkim with traditional \
                          rituals and decorations"
                .into(),
            kind: Some("Religious Festival".into()),
            monastery: Some("All Monasteries".into()),
            location: None,
            date: Some("October-November".into()),
            tags: strings(&[
                "tihar",
                "lights",
                "hindu",
                "festival",
                "celebration",
                "sikkim",
                "diwali",
                "lamps",
                "rituals",
            ]),
            redirect_url: "/calendar#tihar-festival".into(),
            category: DocCategory::Festival,
            extras: Vec::new(),
        },
        SearchDoc {
            id: "festival_4".into(),
            title: "Bumchu Festival".into(),
            description: "Sacred water festival at Tashiding Monastery where the water level \
                          predicts the year's fortune"
                .into(),
            kind: Some("Sacred Festival".into()),
            monastery: Some("Tashiding Monastery".into()),
            location: None,
            date: Some("February-March".into()),
            tags: strings(&[
                "bumchu",
                "water",
                "sacred",
                "tashiding",
                "fortune",
                "prediction",
                "ritual",
                "monastery",
            ]),
            redirect_url: "/calendar#bumchu-festival".into(),
            category: DocCategory::Festival,
            extras: Vec::new(),
        },
        SearchDoc {
            id: "festival_5".into(),
            title: "Pang Lhabsol".into(),
            description: "Festival honoring Mount Kanchenjunga as the guardian deity of Sikkim"
                .into(),
            kind: Some("Cultural Festival".into()),
            monastery: Some("All Monasteries".into()),
            location: None,
            date: Some("August-September".into()),
            tags: strings(&[
                "pang lhabsol",
                "kanchenjunga",
                "mountain",
                "guardian",
                "deity",
                "sikkim",
                "worship",
                "nature",
            ]),
            redirect_url: "/calendar#pang-lhabsol".into(),
            category: DocCategory::Festival,
            extras: Vec::new(),
        },
        SearchDoc {
            id: "festival_6".into(),
            title: "Dasain Festival".into(),
            description: "Nepali Hindu festival celebrating the victory of good over evil \
                          with traditional dances"
                .into(),
            kind: Some("Cultural Festival".into()),
            monastery: Some("All Monasteries".into()),
            location: None,
            date: Some("September-October".into()),
            tags: strings(&[
                "dasain",
                "nepali",
                "hindu",
                "victory",
                "good",
                "evil",
                "dance",
                "traditional",
                "celebration",
            ]),
            redirect_url: "/calendar#dasain-festival".into(),
            category: DocCategory::Festival,
            extras: Vec::new(),
        },
        SearchDoc {
            id: "festival_7".into(),
            title: "Lhabab Duchen".into(),
            description: "Buddhist festival commemorating Buddha's descent from heaven to \
                          earth"
                .into(),
            kind: Some("Religious Festival".into()),
            monastery: Some("All Monasteries".into()),
            location: None,
            date: Some("October-November".into()),
            tags: strings(&[
                "lhabab duchen",
                "buddha",
                "descent",
                "heaven",
                "earth",
                "buddhist",
                "commemoration",
                "religious",
            ]),
            redirect_url: "/calendar#lhabab-duchen".into(),
            category: DocCategory::Festival,
            extras: Vec::new(),
        },
        SearchDoc {
            id: "festival_8".into(),
            title: "Guru Rinpoche's Birthday".into(),
            description: "Celebration of the birth of Guru Rinpoche, the founder of Tibetan \
                          Buddhism"
                .into(),
            kind: Some("Religious Festival".into()),
            monastery: Some("All Monasteries".into()),
            location: None,
            date: Some("June-July".into()),
            tags: strings(&[
                "guru rinpoche",
                "birthday",
                "founder",
                "tibetan buddhism",
                "celebration",
                "religious",
                "guru",
            ]),
            redirect_url: "/calendar#guru-rinpoche-birthday".into(),
            category: DocCategory::Festival,
            extras: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_has_all_documents() {
        let docs = all();
        assert_eq!(docs.len(), 21);

        let archives = docs.iter().filter(|d| d.category == DocCategory::Archive).count();
        let monasteries = docs.iter().filter(|d| d.category == DocCategory::Monastery).count();
        let festivals = docs.iter().filter(|d| d.category == DocCategory::Festival).count();
        assert_eq!(archives, 10);
        assert_eq!(monasteries, 3);
        assert_eq!(festivals, 8);
    }

    #[test]
    fn test_corpus_ids_are_unique() {
        let docs = all();
        let mut ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), docs.len());
    }

    #[test]
    fn test_archives_precede_monasteries_and_festivals() {
        let docs = all();
        assert_eq!(docs[0].id, "archive_1");
        assert_eq!(docs[10].id, "monastery_1");
        assert_eq!(docs[13].id, "festival_1");
    }

    #[test]
    fn test_monasteries_carry_location_but_not_monastery() {
        let docs = all();
        let rumtek = docs.iter().find(|d| d.id == "monastery_1").unwrap();
        assert_eq!(rumtek.location.as_deref(), Some("Gangtok, Sikkim"));
        assert!(rumtek.monastery.is_none());
        assert!(rumtek.kind.is_none());
    }

    #[test]
    fn test_festivals_carry_date_and_monastery() {
        let docs = all();
        let losar = docs.iter().find(|d| d.id == "festival_1").unwrap();
        assert_eq!(losar.date.as_deref(), Some("February"));
        assert_eq!(losar.monastery.as_deref(), Some("All Monasteries"));
        assert!(losar.location.is_none());
    }
}
