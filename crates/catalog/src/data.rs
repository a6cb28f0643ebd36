//! Seed data for the catalog.
//!
//! These are the payloads served by the public API. All text is
//! bilingual (English and Nepali) and matches the content rendered by
//! the web frontend, so edits here are frontend-visible.

use crate::ids::{ArchiveId, FestivalId, MonasteryId};
use crate::model::{Archive, ArchiveCategory, Festival, Monastery};

/// The monastery profiles currently published.
pub fn monasteries() -> Vec<Monastery> {
    vec![
        Monastery {
            id: MonasteryId::new(1),
            name: "Rumtek Monastery".into(),
            name_nepali: "रुम्तेक गुम्बा".into(),
            description: "The largest monastery in Sikkim and seat of the Karmapa lineage, \
                          featuring stunning architecture and spiritual significance."
                .into(),
            description_nepali: "सिक्किमको सबैभन्दा ठूलो गुम्बा र कर्मपा वंशको सिट, मनमोहक वास्तुकला र आध्यात्मिक महत्वको साथ।".into(),
            latitude: 27.3019,
            longitude: 88.5606,
            address: "Rumtek, Sikkim 737135".into(),
            founded: "1960s".into(),
            significance: "Seat of the Karmapa lineage, center of Tibetan Buddhism".into(),
            features: vec![
                "Golden stupa".into(),
                "Prayer wheels".into(),
                "Monk quarters".into(),
                "Assembly hall".into(),
            ],
            image: "/rumtek-monastery-golden-roof-traditional-architect.jpg".into(),
        },
        Monastery {
            id: MonasteryId::new(2),
            name: "Pemayangtse Monastery".into(),
            name_nepali: "पेमायाङ्त्से गुम्बा".into(),
            description: "One of the oldest monasteries in Sikkim, known for its ancient \
                          murals and traditional architecture."
                .into(),
            description_nepali: "सिक्किमको सबैभन्दा पुरानो गुम्बाहरू मध्ये एक, प्राचीन भित्ति चित्रहरू र पारम्परिक वास्तुकलाको लागि प्रसिद्ध।".into(),
            latitude: 27.3167,
            longitude: 88.2500,
            address: "Pemayangtse, Sikkim 737111".into(),
            founded: "1705".into(),
            significance: "Ancient monastery with historical murals and artifacts".into(),
            features: vec![
                "Ancient murals".into(),
                "Traditional architecture".into(),
                "Prayer hall".into(),
                "Monk cells".into(),
            ],
            image: "/pemayangtse-monastery-white-walls-mountain-view.jpg".into(),
        },
    ]
}

/// The festival calendar, ordered by id.
pub fn festivals() -> Vec<Festival> {
    vec![
        Festival {
            id: FestivalId::new(1),
            name: "Losar Festival".into(),
            name_nepali: "लोसार पर्व".into(),
            date: "2025-02-10".into(),
            description: "Tibetan New Year celebration marking the beginning of the lunar \
                          year with traditional ceremonies, prayers, and cultural performances."
                .into(),
            description_nepali: "तिब्बती नयाँ वर्षको उत्सव जुन चन्द्र वर्षको सुरुवातलाई चिन्हित गर्छ पारम्परिक समारोह, प्रार्थना र सांस्कृतिक प्रदर्शनहरूसहित।".into(),
            location: "All Monasteries".into(),
            duration: "3 days".into(),
            significance: "New Year celebration, purification rituals, and community gathering"
                .into(),
            image: "/rumtek-monastery-golden-roof-traditional-architect.jpg".into(),
        },
        Festival {
            id: FestivalId::new(2),
            name: "Saga Dawa Festival".into(),
            name_nepali: "सगा दावा पर्व".into(),
            date: "2025-05-23".into(),
            description: "Sacred festival commemorating Buddha's birth, enlightenment, and \
                          parinirvana with special prayers, circumambulation, and merit-making \
                          activities."
                .into(),
            description_nepali: "बुद्धको जन्म, ज्ञानोदय र परिनिर्वाणको स्मरण गर्ने पवित्र पर्व, विशेष प्रार्थना, परिक्रमा र पुण्य कार्यहरूसहित।".into(),
            location: "Pemayangtse Monastery".into(),
            duration: "1 day".into(),
            significance: "Triple celebration of Buddha's major life events".into(),
            image: "/majestic-himalayan-monastery-with-prayer-flags-and.jpg".into(),
        },
        Festival {
            id: FestivalId::new(3),
            name: "Spring Meditation Retreat".into(),
            name_nepali: "वसन्त ध्यान शिविर".into(),
            date: "2025-03-15".into(),
            description: "7-day silent meditation retreat focusing on mindfulness and inner \
                          peace, led by experienced monks."
                .into(),
            description_nepali: "सचेतनता र आन्तरिक शान्तिमा केन्द्रित ७ दिनको मौन ध्यान शिविर, अनुभवी भिक्षुहरूद्वारा निर्देशित।".into(),
            location: "Tashiding Monastery".into(),
            duration: "7 days".into(),
            significance: "Deep spiritual practice and self-discovery".into(),
            image: "/tashiding-monastery-hilltop-prayer-flags-valley-vi.jpg".into(),
        },
        Festival {
            id: FestivalId::new(4),
            name: "Weekly Puja Ceremony".into(),
            name_nepali: "साप्ताहिक पूजा समारोह".into(),
            date: "2025-01-07".into(),
            description: "Traditional prayer ceremony held every Sunday with chanting, \
                          offerings, and community participation."
                .into(),
            description_nepali: "हरेक आइतबार आयोजना हुने पारम्परिक प्रार्थना समारोह, मन्त्र पाठ, बलि र सामुदायिक सहभागितासहित।".into(),
            location: "Enchey Monastery".into(),
            duration: "2 hours".into(),
            significance: "Regular spiritual practice and community bonding".into(),
            image: "/pemayangtse-monastery-white-walls-mountain-view.jpg".into(),
        },
        Festival {
            id: FestivalId::new(5),
            name: "Monthly Dharma Teaching".into(),
            name_nepali: "मासिक धर्म शिक्षा".into(),
            date: "2025-01-15".into(),
            description: "Monthly teachings on Buddhist philosophy and practice by senior \
                          monks, open to all seekers."
                .into(),
            description_nepali: "वरिष्ठ भिक्षुहरूद्वारा बौद्ध दर्शन र अभ्यासमा मासिक शिक्षा, सबै खोजीहरूका लागि खुला।".into(),
            location: "Dubdi Monastery".into(),
            duration: "2 hours".into(),
            significance: "Education and spiritual guidance".into(),
            image: "/majestic-himalayan-monastery-with-prayer-flags-and.jpg".into(),
        },
        Festival {
            id: FestivalId::new(6),
            name: "Bumchu Festival".into(),
            name_nepali: "बुम्चु पर्व".into(),
            date: "2025-02-24".into(),
            description: "Sacred water festival with the opening of the holy water vase, \
                          predicting the year's fortune and weather."
                .into(),
            description_nepali: "पवित्र जल पर्व जसमा पवित्र जल भाँडो खोलिन्छ, वर्षको भाग्य र मौसमको भविष्यवाणी गर्न।".into(),
            location: "Tashiding Monastery".into(),
            duration: "1 day".into(),
            significance: "Divination and blessing ceremony".into(),
            image: "/tashiding-monastery-hilltop-prayer-flags-valley-vi.jpg".into(),
        },
        Festival {
            id: FestivalId::new(7),
            name: "Guru Rinpoche Day".into(),
            name_nepali: "गुरु रिन्पोचे दिवस".into(),
            date: "2025-07-21".into(),
            description: "Celebration of Guru Padmasambhava's birth with special prayers, \
                          dances, and offerings."
                .into(),
            description_nepali: "गुरु पद्मसम्भवको जन्मको उत्सव, विशेष प्रार्थना, नृत्य र बलिसहित।".into(),
            location: "All Monasteries".into(),
            duration: "1 day".into(),
            significance: "Honoring the founder of Tibetan Buddhism".into(),
            image: "/rumtek-monastery-golden-roof-traditional-architect.jpg".into(),
        },
        Festival {
            id: FestivalId::new(8),
            name: "Lhabab Duchen".into(),
            name_nepali: "ल्हाबाब दुचेन".into(),
            date: "2025-11-15".into(),
            description: "Celebration of Buddha's descent from heaven, marked by special \
                          prayers and merit-making activities."
                .into(),
            description_nepali: "बुद्धको स्वर्गबाट अवतरणको उत्सव, विशेष प्रार्थना र पुण्य कार्यहरूद्वारा चिन्हित।".into(),
            location: "All Monasteries".into(),
            duration: "1 day".into(),
            significance: "Commemorating Buddha's return to earth".into(),
            image: "/majestic-himalayan-monastery-with-prayer-flags-and.jpg".into(),
        },
        Festival {
            id: FestivalId::new(9),
            name: "Winter Meditation Retreat".into(),
            name_nepali: "जाडो ध्यान शिविर".into(),
            date: "2025-12-01".into(),
            description: "Intensive 10-day meditation retreat during the winter months for \
                          advanced practitioners."
                .into(),
            description_nepali: "जाडो महिनाहरूमा उन्नत अभ्यासकर्ताहरूका लागि गहन १० दिनको ध्यान शिविर।".into(),
            location: "Rumtek Monastery".into(),
            duration: "10 days".into(),
            significance: "Advanced spiritual practice".into(),
            image: "/rumtek-monastery-golden-roof-traditional-architect.jpg".into(),
        },
        Festival {
            id: FestivalId::new(10),
            name: "New Year Blessing Ceremony".into(),
            name_nepali: "नयाँ वर्ष आशीर्वाद समारोह".into(),
            date: "2025-01-01".into(),
            description: "Special blessing ceremony for the new year with prayers for peace, \
                          prosperity, and good health."
                .into(),
            description_nepali: "नयाँ वर्षका लागि विशेष आशीर्वाद समारोह, शान्ति, समृद्धि र राम्रो स्वास्थ्यका लागि प्रार्थनासहित।".into(),
            location: "All Monasteries".into(),
            duration: "3 hours".into(),
            significance: "New year blessings and purification".into(),
            image: "/pemayangtse-monastery-white-walls-mountain-view.jpg".into(),
        },
    ]
}

/// The archive collections, ordered by id.
pub fn archives() -> Vec<Archive> {
    vec![
        Archive {
            id: ArchiveId::new(1),
            title: "Buddhist Thangka Paintings".into(),
            title_nepali: "बौद्ध थाङ्का चित्रहरू".into(),
            description: "Traditional Tibetan Buddhist scroll paintings depicting deities, \
                          mandalas, and religious scenes. These intricate artworks serve as \
                          meditation aids and religious teaching tools."
                .into(),
            description_nepali: "पारम्परिक तिब्बती बौद्ध स्क्रोल चित्रहरू जुन देवताहरू, मण्डलहरू र धार्मिक दृश्यहरू चित्रण गर्छन्। यी जटिल कलाकृतिहरू ध्यान सहायक र धार्मिक शिक्षण उपकरणको रूपमा काम गर्छन्।".into(),
            category: ArchiveCategory::Art,
            period: "17th-19th Century".into(),
            location: "Rumtek Monastery".into(),
            significance: "Religious art and meditation aids".into(),
            image: "/rumtek-monastery-golden-roof-traditional-architect.jpg".into(),
        },
        Archive {
            id: ArchiveId::new(2),
            title: "Ancient Buddhist Manuscripts".into(),
            title_nepali: "प्राचीन बौद्ध पाण्डुलिपिहरू".into(),
            description: "Handwritten Buddhist texts and scriptures preserved in monasteries, \
                          containing teachings, prayers, and philosophical discourses from \
                          ancient times."
                .into(),
            description_nepali: "गुम्बाहरूमा संरक्षित हस्तलिखित बौद्ध ग्रन्थ र धर्मशास्त्रहरू, प्राचीन कालका शिक्षा, प्रार्थना र दार्शनिक प्रवचनहरू समावेश गर्छन्।".into(),
            category: ArchiveCategory::Literature,
            period: "12th-18th Century".into(),
            location: "Pemayangtse Monastery".into(),
            significance: "Preservation of Buddhist teachings and philosophy".into(),
            image: "/pemayangtse-monastery-white-walls-mountain-view.jpg".into(),
        },
        Archive {
            id: ArchiveId::new(3),
            title: "Prayer Wheels and Ritual Objects".into(),
            title_nepali: "प्रार्थना चक्र र अनुष्ठानिक वस्तुहरू".into(),
            description: "Sacred ritual objects including prayer wheels, bells, dorjes, and \
                          other ceremonial items used in Buddhist practices and ceremonies."
                .into(),
            description_nepali: "पवित्र अनुष्ठानिक वस्तुहरू जसमा प्रार्थना चक्र, घण्टी, दोर्जे र अन्य समारोहिक वस्तुहरू समावेश छन् जुन बौद्ध अभ्यास र समारोहहरूमा प्रयोग हुन्छन्।".into(),
            category: ArchiveCategory::Artifacts,
            period: "15th-20th Century".into(),
            location: "Tashiding Monastery".into(),
            significance: "Ritual and ceremonial importance in Buddhist practice".into(),
            image: "/tashiding-monastery-hilltop-prayer-flags-valley-vi.jpg".into(),
        },
        Archive {
            id: ArchiveId::new(4),
            title: "Monastery Architecture Plans".into(),
            title_nepali: "गुम्बा वास्तुकला योजनाहरू".into(),
            description: "Historical architectural drawings and plans of monastery buildings, \
                          showing traditional Tibetan Buddhist architectural styles and \
                          construction techniques."
                .into(),
            description_nepali: "गुम्बा भवनहरूका ऐतिहासिक वास्तुकला चित्र र योजनाहरू, पारम्परिक तिब्बती बौद्ध वास्तुकला शैली र निर्माण तकनीकहरू देखाउँछन्।".into(),
            category: ArchiveCategory::Art,
            period: "16th-19th Century".into(),
            location: "All Monasteries".into(),
            significance: "Historical architectural documentation".into(),
            image: "/majestic-himalayan-monastery-with-prayer-flags-and.jpg".into(),
        },
        Archive {
            id: ArchiveId::new(5),
            title: "Buddhist Statues and Sculptures".into(),
            title_nepali: "बौद्ध मूर्तिहरू र मूर्तिकलाहरू".into(),
            description: "Sacred Buddhist statues and sculptures made from various materials \
                          including bronze, wood, and stone, representing different Buddhas \
                          and deities."
                .into(),
            description_nepali: "विभिन्न सामग्रीहरू जस्तै कांस्य, काठ र ढुङ्गाबाट बनेका पवित्र बौद्ध मूर्तिहरू र मूर्तिकलाहरू, विभिन्न बुद्ध र देवताहरूको प्रतिनिधित्व गर्छन्।".into(),
            category: ArchiveCategory::Art,
            period: "14th-20th Century".into(),
            location: "Rumtek Monastery".into(),
            significance: "Religious and artistic heritage".into(),
            image: "/rumtek-monastery-golden-roof-traditional-architect.jpg".into(),
        },
        Archive {
            id: ArchiveId::new(6),
            title: "Traditional Musical Instruments".into(),
            title_nepali: "पारम्परिक संगीत वाद्यहरू".into(),
            description: "Traditional Tibetan musical instruments used in religious ceremonies \
                          and cultural performances, including drums, horns, and cymbals."
                .into(),
            description_nepali: "धार्मिक समारोह र सांस्कृतिक प्रदर्शनहरूमा प्रयोग हुने पारम्परिक तिब्बती संगीत वाद्यहरू, जसमा ढोल, सिङ र झ्यालहरू समावेश छन्।".into(),
            category: ArchiveCategory::Artifacts,
            period: "18th-20th Century".into(),
            location: "Pemayangtse Monastery".into(),
            significance: "Cultural and ceremonial music heritage".into(),
            image: "/pemayangtse-monastery-white-walls-mountain-view.jpg".into(),
        },
    ]
}
