//! Built-in glossary data.

use crate::records::{AgeRecord, GlossaryData, LocationRecord, TermCategory, TerminologyRecord};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn location(
    colloquial_name: &str,
    full_name: &str,
    codes: (&str, &str),
    regions: &[&str],
    synonyms: &[&str],
    abbreviations: &[&str],
) -> LocationRecord {
    LocationRecord {
        colloquial_name: colloquial_name.to_string(),
        full_name: full_name.to_string(),
        iso_code: codes.0.to_string(),
        ioc_code: codes.1.to_string(),
        regions: strings(regions),
        synonyms: strings(synonyms),
        abbreviations: strings(abbreviations),
    }
}

fn age(term: &str, range: (u32, u32), synonyms: &[&str]) -> AgeRecord {
    AgeRecord {
        term: term.to_string(),
        min_age: range.0,
        max_age: range.1,
        synonyms: strings(synonyms),
    }
}

fn term(
    term: &str,
    standardized_form: &str,
    category: TermCategory,
    synonyms: &[&str],
    expanded_meanings: &[&str],
) -> TerminologyRecord {
    TerminologyRecord {
        term: term.to_string(),
        standardized_form: standardized_form.to_string(),
        category,
        synonyms: strings(synonyms),
        expanded_meanings: strings(expanded_meanings),
    }
}

pub fn default_data() -> GlossaryData {
    GlossaryData {
        locations: default_locations(),
        age_terms: default_age_terms(),
        terminology: default_terminology(),
    }
}

pub fn default_locations() -> Vec<LocationRecord> {
    vec![
        location(
            "United States",
            "United States of America",
            ("USA", "USA"),
            &["North America", "Americas"],
            &["US", "USA", "America"],
            &["US", "U.S.", "USA", "U.S.A."],
        ),
        location(
            "European Union",
            "European Union",
            ("EUR", "EUR"),
            &["Europe", "European Union"],
            &["EU", "Europe"],
            &["EU", "E.U."],
        ),
        location(
            "Germany",
            "Federal Republic of Germany",
            ("DEU", "GER"),
            &["Europe", "European Union"],
            &["Deutschland"],
            &["DE", "GER"],
        ),
        location(
            "France",
            "French Republic",
            ("FRA", "FRA"),
            &["Europe", "European Union"],
            &[],
            &["FR", "FRA"],
        ),
        location(
            "United Kingdom",
            "United Kingdom of Great Britain and Northern Ireland",
            ("GBR", "GBR"),
            &["Europe"],
            &["UK", "Britain", "Great Britain", "England"],
            &["UK", "GB", "GBR", "U.K."],
        ),
        location(
            "Canada",
            "Canada",
            ("CAN", "CAN"),
            &["North America", "Americas"],
            &[],
            &["CA", "CAN"],
        ),
        location(
            "California",
            "State of California",
            ("USA", "USA"),
            &["North America", "United States", "US West Coast"],
            &["Calif"],
            &["CA", "CAL"],
        ),
        location(
            "Florida",
            "State of Florida",
            ("USA", "USA"),
            &["North America", "United States", "US Southeast"],
            &["Fla"],
            &["FL", "FLA"],
        ),
        location(
            "Utah",
            "State of Utah",
            ("USA", "USA"),
            &["North America", "United States", "US West"],
            &[],
            &["UT"],
        ),
        location(
            "Singapore",
            "Republic of Singapore",
            ("SGP", "SGP"),
            &["Asia", "Southeast Asia", "ASEAN"],
            &["S'pore"],
            &["SG", "SGP"],
        ),
        location(
            "South Korea",
            "Republic of Korea",
            ("KOR", "KOR"),
            &["Asia", "East Asia"],
            &["Korea"],
            &["KR", "KOR", "ROK"],
        ),
        location(
            "Japan",
            "Japan",
            ("JPN", "JPN"),
            &["Asia", "East Asia"],
            &["Nippon"],
            &["JP", "JPN"],
        ),
        location(
            "Australia",
            "Commonwealth of Australia",
            ("AUS", "AUS"),
            &["Oceania", "Asia-Pacific"],
            &["Aussie"],
            &["AU", "AUS"],
        ),
        location(
            "Brazil",
            "Federative Republic of Brazil",
            ("BRA", "BRA"),
            &["South America", "Americas"],
            &["Brasil"],
            &["BR", "BRA"],
        ),
        location(
            "Indonesia",
            "Republic of Indonesia",
            ("IDN", "INA"),
            &["Asia", "Southeast Asia", "ASEAN"],
            &[],
            &["ID", "IDN", "INA"],
        ),
        location(
            "China",
            "People's Republic of China",
            ("CHN", "CHN"),
            &["Asia", "East Asia"],
            &["PRC"],
            &["CN", "CHN"],
        ),
        location(
            "India",
            "Republic of India",
            ("IND", "IND"),
            &["Asia", "South Asia"],
            &["Bharat"],
            &["IN", "IND"],
        ),
        location(
            "Russia",
            "Russian Federation",
            ("RUS", "RUS"),
            &["Europe", "Asia", "Eurasia"],
            &[],
            &["RU", "RUS"],
        ),
        location(
            "Mexico",
            "United Mexican States",
            ("MEX", "MEX"),
            &["North America", "Americas", "Latin America"],
            &["Mexican States"],
            &["MX", "MEX"],
        ),
        location(
            "South Africa",
            "Republic of South Africa",
            ("ZAF", "RSA"),
            &["Africa", "Southern Africa"],
            &["RSA"],
            &["ZA", "ZAF"],
        ),
        location(
            "New Zealand",
            "New Zealand",
            ("NZL", "NZL"),
            &["Oceania", "Asia-Pacific"],
            &["Aotearoa"],
            &["NZ", "NZL"],
        ),
        location(
            "Netherlands",
            "Kingdom of the Netherlands",
            ("NLD", "NED"),
            &["Europe", "European Union", "Western Europe"],
            &["Holland", "Dutch"],
            &["NL", "NLD", "NED"],
        ),
        location(
            "Switzerland",
            "Swiss Confederation",
            ("CHE", "SUI"),
            &["Europe", "Western Europe"],
            &[],
            &["CH", "CHE", "SUI"],
        ),
        location(
            "Norway",
            "Kingdom of Norway",
            ("NOR", "NOR"),
            &["Europe", "Northern Europe", "Scandinavia", "Nordic Countries"],
            &[],
            &["NO", "NOR"],
        ),
        location(
            "Turkey",
            "Republic of Turkey",
            ("TUR", "TUR"),
            &["Europe", "Asia", "Middle East"],
            &["Türkiye"],
            &["TR", "TUR"],
        ),
        location(
            "Israel",
            "State of Israel",
            ("ISR", "ISR"),
            &["Asia", "Middle East"],
            &[],
            &["IL", "ISR"],
        ),
        location(
            "Thailand",
            "Kingdom of Thailand",
            ("THA", "THA"),
            &["Asia", "Southeast Asia", "ASEAN"],
            &["Siam"],
            &["TH", "THA"],
        ),
        location(
            "Malaysia",
            "Malaysia",
            ("MYS", "MAS"),
            &["Asia", "Southeast Asia", "ASEAN"],
            &[],
            &["MY", "MYS", "MAS"],
        ),
        location(
            "Philippines",
            "Republic of the Philippines",
            ("PHL", "PHI"),
            &["Asia", "Southeast Asia", "ASEAN"],
            &["Filipino"],
            &["PH", "PHL", "PHI"],
        ),
        location(
            "Vietnam",
            "Socialist Republic of Vietnam",
            ("VNM", "VIE"),
            &["Asia", "Southeast Asia", "ASEAN"],
            &["Viet Nam"],
            &["VN", "VNM", "VIE"],
        ),
        location(
            "Southeast Asia",
            "Southeast Asian Region",
            ("SEA", "SEA"),
            &["Asia", "Southeast Asia"],
            &["ASEAN region", "South East Asia"],
            &["SEA", "ASEAN"],
        ),
        location(
            "Middle East",
            "Middle Eastern Region",
            ("MEA", "MEA"),
            &["Asia", "Africa", "Middle East"],
            &["MENA", "Near East"],
            &["MEA"],
        ),
        location(
            "Latin America",
            "Latin American Region",
            ("LAT", "LAT"),
            &["Americas", "South America", "Central America"],
            &["LATAM", "South America"],
            &["LAT"],
        ),
        location(
            "Nordic Countries",
            "Nordic Region",
            ("NOR", "NOR"),
            &["Europe", "Northern Europe", "Scandinavia"],
            &["Nordic", "Scandinavia", "Northern Europe"],
            &["NOR", "SCAN"],
        ),
    ]
}

pub fn default_age_terms() -> Vec<AgeRecord> {
    vec![
        age(
            "minor",
            (0, 17),
            &["child", "kid", "underage", "juvenile", "youth", "teen", "teenager"],
        ),
        age("adult", (18, 120), &["grown-up", "mature", "of age"]),
        age("teen", (13, 17), &["teenager", "adolescent", "youth"]),
        age("child", (0, 12), &["kid", "minor child", "young child"]),
        age("young adult", (18, 25), &["emerging adult", "college age"]),
        age("13+", (13, 120), &["thirteen plus", "13 and up", "over 13"]),
        age(
            "18+",
            (18, 120),
            &["eighteen plus", "18 and up", "adult content", "mature audience"],
        ),
        age(
            "21+",
            (21, 120),
            &["twenty-one plus", "21 and up", "legal drinking age"],
        ),
        age("infant", (0, 2), &["baby", "newborn", "toddler under 2"]),
        age("preschooler", (3, 5), &["preschool age", "pre-k", "kindergarten age"]),
        age(
            "school age",
            (6, 12),
            &["elementary age", "primary school", "grade school"],
        ),
        age("preteen", (10, 12), &["tween", "pre-adolescent", "middle schooler"]),
        age(
            "high schooler",
            (14, 18),
            &["high school student", "secondary school", "grades 9-12"],
        ),
        age(
            "college student",
            (18, 22),
            &["university student", "undergraduate"],
        ),
        age(
            "working age",
            (18, 65),
            &["adult workforce", "employable age", "career age"],
        ),
        age(
            "senior citizen",
            (65, 120),
            &["elderly", "retirement age", "golden years", "65+"],
        ),
        age("16+", (16, 120), &["sixteen plus", "driving age", "16 and older"]),
        age("25+", (25, 120), &["twenty-five plus", "mature adult", "25 and up"]),
    ]
}

pub fn default_terminology() -> Vec<TerminologyRecord> {
    use TermCategory::*;
    vec![
        term(
            "gdpr",
            "General Data Protection Regulation",
            Privacy,
            &["eu gdpr", "european data protection"],
            &["data protection", "privacy rights", "consent requirements"],
        ),
        term(
            "coppa",
            "Children's Online Privacy Protection Act",
            AgeVerification,
            &["child privacy law"],
            &["parental consent", "child data protection", "age verification"],
        ),
        term(
            "ccpa",
            "California Consumer Privacy Act",
            Privacy,
            &["california privacy law"],
            &["consumer rights", "data deletion", "privacy disclosure"],
        ),
        term(
            "dsa",
            "Digital Services Act",
            ContentModeration,
            &["eu dsa", "european digital services act"],
            &["content transparency", "platform responsibility", "illegal content removal"],
        ),
        term(
            "ncmec",
            "National Center for Missing & Exploited Children",
            ContentSafety,
            &["child exploitation reporting"],
            &["csam reporting", "child abuse material", "law enforcement reporting"],
        ),
        term(
            "age_verification",
            "age verification",
            AgeVerification,
            &["age check", "age validation", "age confirmation", "identity verification"],
            &["age gate", "minor protection", "parental consent"],
        ),
        term(
            "parental_consent",
            "parental consent",
            AgeVerification,
            &["parent permission", "guardian consent", "parental approval"],
            &["minor protection", "family controls", "supervised access"],
        ),
        term(
            "content_moderation",
            "content moderation",
            ContentModeration,
            &["content review", "content filtering", "community standards"],
            &["harmful content removal", "policy enforcement", "user safety"],
        ),
        term(
            "data_localization",
            "data localization",
            Privacy,
            &["data residency", "local data storage", "regional data requirements"],
            &["cross-border data transfer", "regional compliance", "data sovereignty"],
        ),
        term(
            "pipl",
            "Personal Information Protection Law",
            Privacy,
            &["china pipl", "chinese data protection"],
            &["personal data protection", "consent requirements"],
        ),
        term(
            "lgpd",
            "Lei Geral de Proteção de Dados",
            Privacy,
            &["brazil data protection", "brazilian privacy law"],
            &["personal data protection", "data subject rights"],
        ),
        term(
            "utah_social_media_act",
            "Utah Social Media Regulation Act",
            AgeVerification,
            &["utah minor protection"],
            &["minor protection", "social media curfew", "parental controls"],
        ),
        term(
            "florida_minor_protections",
            "Florida Social Media Age Verification Requirements",
            AgeVerification,
            &["florida age verification", "florida social media law"],
            &["age verification", "minor protection", "parental consent"],
        ),
        term(
            "uk_age_appropriate_design",
            "UK Age Appropriate Design Code",
            AgeVerification,
            &["uk children's code", "ico children's code"],
            &["children's privacy", "age-appropriate design", "data minimization"],
        ),
        term(
            "kosa",
            "Kids Online Safety Act",
            ContentSafety,
            &["us kids safety", "child online protection"],
            &["online safety", "social media protection", "mental health protection"],
        ),
        term(
            "csam",
            "Child Sexual Abuse Material",
            ContentSafety,
            &["child exploitation material"],
            &["law enforcement reporting", "content moderation", "child protection"],
        ),
        term(
            "right_to_be_forgotten",
            "Right to Erasure",
            Privacy,
            &["data deletion rights", "forgetting rights"],
            &["data deletion", "privacy rights", "personal data removal"],
        ),
        term(
            "nis2",
            "Network and Information Security Directive 2",
            SecurityCompliance,
            &["nis2 directive", "network information security", "eu cybersecurity"],
            &["cybersecurity requirements", "incident reporting", "risk management"],
        ),
        term(
            "ai_act",
            "EU Artificial Intelligence Act",
            RegulatoryCompliance,
            &["eu ai act", "ai regulation"],
            &["ai governance", "algorithmic transparency", "ai risk assessment"],
        ),
        term(
            "online_safety_act",
            "UK Online Safety Act",
            ContentModeration,
            &["online safety bill", "uk content regulation"],
            &["duty of care", "content moderation", "user safety"],
        ),
        term(
            "dma",
            "Digital Markets Act",
            RegulatoryCompliance,
            &["eu dma", "gatekeeper regulation"],
            &["platform regulation", "gatekeeper obligations", "market fairness"],
        ),
        term(
            "cpra",
            "California Privacy Rights Act",
            Privacy,
            &["ccpa amendment", "enhanced california privacy"],
            &["sensitive personal information", "data sharing limits"],
        ),
        term(
            "vcdpa",
            "Virginia Consumer Data Protection Act",
            Privacy,
            &["virginia privacy law"],
            &["consumer rights", "data processing", "privacy disclosure"],
        ),
        term(
            "transparency_reporting",
            "Content Moderation Transparency Reporting",
            ContentModeration,
            &["transparency reports", "content moderation reports", "compliance reporting"],
            &["content statistics", "moderation metrics", "regulatory reporting"],
        ),
        term(
            "age_assurance",
            "Age Assurance and Verification",
            AgeVerification,
            &["age assurance", "age estimation"],
            &["age verification", "identity checking", "minor protection"],
        ),
    ]
}
