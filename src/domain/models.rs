/// Domain models for sales-scribe
///
/// These models represent core business entities and are collaborator-agnostic.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Topic bucket used to select reference documents for a transcript
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    Marketing,
    Sales,
    Business,
    Branding,
}

impl Sector {
    /// Name of the sector's storage location
    pub fn as_str(&self) -> &'static str {
        match self {
            Sector::Marketing => "Marketing",
            Sector::Sales => "Sales",
            Sector::Business => "Business",
            Sector::Branding => "Branding",
        }
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Customer objection category detected in a transcript
///
/// `None` is a valid terminal classification, not an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ObjectionCategory {
    Money,
    Expectations,
    Quality,
    Timeline,
    None,
}

impl std::fmt::Display for ObjectionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectionCategory::Money => write!(f, "money"),
            ObjectionCategory::Expectations => write!(f, "expectations"),
            ObjectionCategory::Quality => write!(f, "quality"),
            ObjectionCategory::Timeline => write!(f, "timeline"),
            ObjectionCategory::None => write!(f, "none"),
        }
    }
}

/// A reference document under a sector's storage location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReferenceDocument {
    pub name: String,
    pub sector: Sector,
    pub description: String,
}

impl ReferenceDocument {
    /// Creates a new reference document
    pub fn new(name: String, sector: Sector, description: String) -> Self {
        Self {
            name,
            sector,
            description,
        }
    }
}

/// One scheduled outreach message in the 4-stage follow-up sequence
///
/// `send_after` is a human-readable relative delay; wall-clock send times are
/// the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowupStage {
    pub stage: u8,
    pub body: String,
    pub attachment: Option<ReferenceDocument>,
    pub send_after: String,
}

/// The complete follow-up plan composed for one transcript
///
/// `documents` is the full ranked shortlist the stages drew from; stages 1–2
/// attach its top two entries when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowupPlan {
    pub client_name: String,
    pub objection: ObjectionCategory,
    pub documents: Vec<ReferenceDocument>,
    pub stages: Vec<FollowupStage>,
}

/// Analysis payload produced by the external LLM collaborator
///
/// Treated as opaque beyond the fields read back for display; missing keys
/// deserialize to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisPayload {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub objection: Option<String>,
}

/// One stored meeting: analysis, shortlist, follow-up plan and scoring map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingRecord {
    pub id: String,
    pub sales_id: String,
    pub meeting_date: i64, // Unix timestamp
    pub analysis: AnalysisPayload,
    pub documents: Vec<ReferenceDocument>,
    pub followup: FollowupPlan,
    pub scoring: BTreeMap<String, f64>,
}

impl MeetingRecord {
    /// Creates a new meeting record stamped with the current instant
    pub fn new(
        sales_id: String,
        analysis: AnalysisPayload,
        scoring: BTreeMap<String, f64>,
        followup: FollowupPlan,
    ) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: now.format("%Y%m%d-%H%M%S").to_string(),
            sales_id,
            meeting_date: now.timestamp(),
            analysis,
            documents: followup.documents.clone(),
            followup,
            scoring,
        }
    }
}
