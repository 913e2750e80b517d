//! Keyword-based sector routing
//!
//! Maps transcript keywords to the topic sectors whose reference documents
//! may be worth sending. Matching is case-insensitive substring containment
//! over the full transcript; the result is a set, so keyword order never
//! affects it.

use crate::domain::models::Sector;
use std::collections::BTreeSet;

/// Fixed keyword → sector routing table
const TOPIC_TO_SECTOR: &[(&str, Sector)] = &[
    ("متجر", Sector::Marketing),
    ("تسويق", Sector::Marketing),
    ("مبيعات", Sector::Sales),
    ("عميل", Sector::Sales),
    ("ميزانية", Sector::Business),
    ("فلوس", Sector::Business),
    ("سعر", Sector::Business),
    ("خدمة", Sector::Marketing),
    ("حملة", Sector::Marketing),
    ("مشاهير", Sector::Marketing),
    ("اعلان", Sector::Marketing),
    ("جودة", Sector::Branding),
    ("نتائج", Sector::Marketing),
];

/// Routes transcript text to topic sectors
pub struct SectorRouter;

impl SectorRouter {
    /// Detect the sectors a transcript touches
    ///
    /// Returns an empty set when no keyword matches; downstream treats that
    /// as "no documents available", not as an error.
    pub fn route(text: &str) -> BTreeSet<Sector> {
        let text = text.to_lowercase();
        TOPIC_TO_SECTOR
            .iter()
            .filter(|(keyword, _)| text.contains(keyword))
            .map(|(_, sector)| *sector)
            .collect()
    }
}
