//! Mock implementations for testing

use crate::domain::models::{AnalysisPayload, MeetingRecord, Sector};
use crate::error::{AppError, Result};
use crate::ports::analysis::{AnalysisServicePort, MeetingAnalysis};
use crate::ports::documents::DocumentStorePort;
use crate::ports::storage::MeetingStorePort;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// Mock document store backed by an in-memory sector map
#[derive(Clone, Default)]
pub struct MockDocumentStore {
    sectors: HashMap<Sector, Vec<String>>,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a sector with document names (builder pattern)
    pub fn with(mut self, sector: Sector, names: &[&str]) -> Self {
        self.sectors
            .insert(sector, names.iter().map(|n| n.to_string()).collect());
        self
    }
}

impl DocumentStorePort for MockDocumentStore {
    fn list(&self, sector: Sector) -> Result<Vec<String>> {
        Ok(self.sectors.get(&sector).cloned().unwrap_or_default())
    }
}

/// Mock meeting store implementation for testing
#[derive(Clone, Default)]
pub struct MockMeetingStore {
    records: Arc<Mutex<Vec<MeetingRecord>>>,
}

impl MockMeetingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl MeetingStorePort for MockMeetingStore {
    async fn save_meeting(&self, record: &MeetingRecord) -> Result<()> {
        let mut records = self.records.lock().unwrap();
        if records.iter().any(|r| r.id == record.id) {
            return Err(AppError::InvalidInput(format!(
                "meeting {} already exists",
                record.id
            )));
        }
        records.push(record.clone());
        Ok(())
    }

    async fn get_meeting(&self, id: &str) -> Result<Option<MeetingRecord>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn list_meetings(&self) -> Result<Vec<MeetingRecord>> {
        let mut records = self.records.lock().unwrap().clone();
        records.sort_by(|a, b| b.meeting_date.cmp(&a.meeting_date));
        Ok(records)
    }

    async fn meetings_for_salesperson(&self, sales_id: &str) -> Result<Vec<MeetingRecord>> {
        let mut records: Vec<MeetingRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.sales_id == sales_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.meeting_date.cmp(&a.meeting_date));
        Ok(records)
    }
}

/// Mock analysis service returning a canned payload
#[derive(Clone, Default)]
pub struct MockAnalysisService {
    scoring: BTreeMap<String, f64>,
    fail: bool,
}

impl MockAnalysisService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the scoring map returned by every analyze call
    pub fn with_scoring(mut self, scores: &[(&str, f64)]) -> Self {
        self.scoring = scores
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect();
        self
    }

    /// Make every analyze call fail
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl AnalysisServicePort for MockAnalysisService {
    async fn analyze(&self, transcript: &str) -> Result<MeetingAnalysis> {
        if self.fail {
            return Err(AppError::Analysis("mock analysis failure".to_string()));
        }
        Ok(MeetingAnalysis {
            analysis: AnalysisPayload {
                summary: format!("summary of {} chars", transcript.len()),
                topics: vec!["topic".to_string()],
                objection: None,
            },
            scoring: self.scoring.clone(),
        })
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
