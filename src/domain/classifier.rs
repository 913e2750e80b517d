//! Objection classification
//!
//! Maps transcript text to one of a closed set of objection categories by
//! scanning an ordered list of keyword groups. The first group with any
//! member present wins; the order money → expectations → quality → timeline
//! is a deliberate priority among simultaneously-present signals and must
//! stay fixed for reproducible classification.

use crate::domain::models::ObjectionCategory;

/// Ordered objection keyword groups, highest priority first
const OBJECTION_KEYWORDS: &[(ObjectionCategory, &[&str])] = &[
    (ObjectionCategory::Money, &["سعر", "الفلوس", "ميزانية"]),
    (ObjectionCategory::Expectations, &["نتيجة", "نتائج"]),
    (ObjectionCategory::Quality, &["جودة"]),
    (ObjectionCategory::Timeline, &["وقت"]),
];

/// Classifies the dominant customer objection in a transcript
pub struct ObjectionClassifier;

impl ObjectionClassifier {
    /// Classify a transcript into exactly one objection category
    ///
    /// Total over all inputs: no keyword hit returns
    /// [`ObjectionCategory::None`].
    pub fn classify(text: &str) -> ObjectionCategory {
        let text = text.to_lowercase();
        for (category, keywords) in OBJECTION_KEYWORDS {
            if keywords.iter().any(|keyword| text.contains(keyword)) {
                return *category;
            }
        }
        ObjectionCategory::None
    }
}
