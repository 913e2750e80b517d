//! End-to-end meeting pipeline
//!
//! Wires the analysis collaborator, the follow-up composer and the meeting
//! store together: analyze a transcript, compose the staged follow-up plan
//! and ranked document shortlist, persist the assembled record, and answer
//! performance-snapshot queries over stored history. The pipeline holds no
//! mutable state, so independent transcripts can be processed concurrently.

use crate::domain::composer::FollowupComposer;
use crate::domain::models::MeetingRecord;
use crate::domain::scoring::{ScoreAggregator, WeightedSnapshot};
use crate::error::{AppError, Result};
use crate::ports::analysis::AnalysisServicePort;
use crate::ports::storage::MeetingStorePort;
use std::sync::Arc;

/// Meeting analysis pipeline over pluggable collaborators
pub struct MeetingPipeline {
    composer: FollowupComposer,
    analysis: Arc<dyn AnalysisServicePort>,
    storage: Arc<dyn MeetingStorePort>,
}

impl MeetingPipeline {
    /// Creates a pipeline over the given collaborators
    pub fn new(
        composer: FollowupComposer,
        analysis: Arc<dyn AnalysisServicePort>,
        storage: Arc<dyn MeetingStorePort>,
    ) -> Self {
        Self {
            composer,
            analysis,
            storage,
        }
    }

    /// Analyze one transcript, persist and return the assembled record
    ///
    /// The analysis collaborator and the store are the only fallible steps;
    /// their failures propagate to the caller, which owns any retry policy.
    pub async fn analyze_meeting(&self, sales_id: &str, transcript: &str) -> Result<MeetingRecord> {
        if transcript.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "transcript text is required".to_string(),
            ));
        }

        log::info!(
            "Analyzing meeting for {} via {}",
            sales_id,
            self.analysis.provider_name()
        );
        let analysis = self.analysis.analyze(transcript).await?;
        let followup = self.composer.compose(transcript);

        let record = MeetingRecord::new(
            sales_id.to_string(),
            analysis.analysis,
            analysis.scoring,
            followup,
        );
        self.storage.save_meeting(&record).await?;
        Ok(record)
    }

    /// Recency-weighted performance snapshot for one salesperson
    pub async fn performance_snapshot(&self, sales_id: &str) -> Result<WeightedSnapshot> {
        let records = self.storage.meetings_for_salesperson(sales_id).await?;
        Ok(ScoreAggregator::aggregate(&records))
    }
}
