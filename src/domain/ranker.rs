//! Relevance ranking of candidate documents
//!
//! Scores each candidate by normalized Levenshtein similarity between the
//! lowercased transcript and the document's display name. This is a known
//! approximation: a name-similarity proxy, not semantic relevance. Ranking
//! is a pure function of its inputs and returns a permutation of the
//! candidates, best first, ties keeping the input enumeration order.

use crate::domain::models::ReferenceDocument;
use std::cmp::Ordering;
use strsim::normalized_levenshtein;

/// Orders candidate documents by similarity to a transcript
pub struct RelevanceRanker;

impl RelevanceRanker {
    /// Rank candidates against transcript text, best first
    pub fn rank(documents: Vec<ReferenceDocument>, text: &str) -> Vec<ReferenceDocument> {
        let text = text.to_lowercase();
        let mut scored: Vec<(ReferenceDocument, f64)> = documents
            .into_iter()
            .map(|document| {
                let score = normalized_levenshtein(&text, &document.name.to_lowercase());
                log::debug!("Relevance {:.3} for document {}", score, document.name);
                (document, score)
            })
            .collect();

        // Stable sort keeps enumeration order on equal scores
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored.into_iter().map(|(document, _)| document).collect()
    }
}
