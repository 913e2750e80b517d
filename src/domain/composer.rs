//! Follow-up plan composition
//!
//! Synthesizes the 4-stage outreach sequence for a transcript: extract a
//! customer display name, classify the objection, route sectors, gather and
//! rank candidate documents, then render each stage from its template. The
//! composer always returns all 4 stages; missing data degrades to documented
//! fallbacks (placeholder name, "none" objection, omitted attachments).

use crate::domain::catalog::DocumentCatalog;
use crate::domain::classifier::ObjectionClassifier;
use crate::domain::models::{FollowupPlan, FollowupStage, ReferenceDocument};
use crate::domain::ranker::RelevanceRanker;
use crate::domain::router::SectorRouter;
use crate::domain::templates::FollowupTemplates;
use std::collections::HashSet;

/// Generic placeholder when no customer name can be extracted
const FALLBACK_CLIENT_NAME: &str = "العميل";

/// Introduction cues scanned for when extracting the customer name
const NAME_CUES: &[&str] = &["اسمي", "معك"];

/// Topic phrasing for stage 1–2 bodies
const TOPIC_STORE: &str = "المتجر الإلكتروني";
const TOPIC_GENERIC: &str = "الخدمات التي ناقشناها";

/// Composes follow-up plans from transcripts and a document catalog
pub struct FollowupComposer {
    catalog: DocumentCatalog,
}

impl FollowupComposer {
    /// Creates a composer over a document catalog
    pub fn new(catalog: DocumentCatalog) -> Self {
        Self { catalog }
    }

    /// Compose the 4-stage follow-up plan for a transcript
    pub fn compose(&self, text: &str) -> FollowupPlan {
        let client_name = extract_client_name(text);
        let objection = ObjectionClassifier::classify(text);
        let documents = self.collect_documents(text);

        let topic = if text.contains("متجر") {
            TOPIC_STORE
        } else {
            TOPIC_GENERIC
        };

        let stages = vec![
            render_document_stage(
                1,
                FollowupTemplates::opening(),
                FollowupTemplates::opening_bare(),
                &client_name,
                topic,
                documents.first(),
            ),
            render_document_stage(
                2,
                FollowupTemplates::deepening(),
                FollowupTemplates::deepening_bare(),
                &client_name,
                topic,
                documents.get(1),
            ),
            render_plain_stage(3, FollowupTemplates::objection_branch(objection), &client_name),
            render_plain_stage(4, FollowupTemplates::closing(), &client_name),
        ];

        FollowupPlan {
            client_name,
            objection,
            documents,
            stages,
        }
    }

    /// Gather candidates across all routed sectors, dedupe by name, rank
    fn collect_documents(&self, text: &str) -> Vec<ReferenceDocument> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        for sector in SectorRouter::route(text) {
            for document in self.catalog.list(sector) {
                if seen.insert(document.name.clone()) {
                    candidates.push(document);
                }
            }
        }
        RelevanceRanker::rank(candidates, text)
    }
}

/// Render a stage that attaches a document when one is available
fn render_document_stage(
    stage: u8,
    template: &str,
    bare_template: &str,
    client_name: &str,
    topic: &str,
    document: Option<&ReferenceDocument>,
) -> FollowupStage {
    let body = match document {
        Some(doc) => template.replace(
            "{attachment}",
            &format!("**{}**\n*{}*", doc.name, doc.description),
        ),
        None => bare_template.to_string(),
    };

    FollowupStage {
        stage,
        body: body
            .replace("{client_name}", client_name)
            .replace("{topic}", topic),
        attachment: document.cloned(),
        send_after: FollowupTemplates::send_offset(stage).to_string(),
    }
}

/// Render a stage with no attachment slot
fn render_plain_stage(stage: u8, template: &str, client_name: &str) -> FollowupStage {
    FollowupStage {
        stage,
        body: template.replace("{client_name}", client_name),
        attachment: None,
        send_after: FollowupTemplates::send_offset(stage).to_string(),
    }
}

/// Best-effort customer name extraction from transcript lines
///
/// Scans for an introduction cue and takes the word that follows it.
/// Transcript lines often carry "0:04 - " style prefixes, so the cue is
/// looked up after the last " - " separator. Falls back to a generic
/// placeholder when no cue is found.
fn extract_client_name(text: &str) -> String {
    for line in text.lines() {
        let content = line.rsplit(" - ").next().unwrap_or(line);
        for cue in NAME_CUES {
            if let Some(rest) = content.split(cue).nth(1) {
                if let Some(word) = rest.split_whitespace().next() {
                    let name =
                        word.trim_matches(|c: char| c.is_ascii_punctuation() || c == '،');
                    if !name.is_empty() {
                        return name.to_string();
                    }
                }
            }
        }
    }
    FALLBACK_CLIENT_NAME.to_string()
}
