/// Analysis service port trait
///
/// Defines the interface to the external LLM-backed analysis collaborator
/// that produces the structured analysis payload and the authoritative
/// scoring map. The core treats both as opaque: missing keys are absent
/// metrics, and prompt/response details live entirely behind this boundary.
use crate::domain::models::AnalysisPayload;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of analyzing one transcript
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeetingAnalysis {
    pub analysis: AnalysisPayload,
    #[serde(default)]
    pub scoring: BTreeMap<String, f64>,
}

/// Port trait for the analysis service
#[async_trait]
pub trait AnalysisServicePort: Send + Sync {
    /// Analyze a meeting transcript
    async fn analyze(&self, transcript: &str) -> Result<MeetingAnalysis>;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}
