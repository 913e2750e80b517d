/// Meeting store port trait
///
/// Defines the interface for meeting-record persistence.
/// Implementation: SQLite adapter
use crate::domain::models::MeetingRecord;
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for meeting persistence
#[async_trait]
pub trait MeetingStorePort: Send + Sync {
    /// Persist a meeting record; a duplicate id is rejected
    async fn save_meeting(&self, record: &MeetingRecord) -> Result<()>;

    /// Get a meeting record by id
    async fn get_meeting(&self, id: &str) -> Result<Option<MeetingRecord>>;

    /// List all meeting records, newest first
    async fn list_meetings(&self) -> Result<Vec<MeetingRecord>>;

    /// List one salesperson's meeting records, newest first
    async fn meetings_for_salesperson(&self, sales_id: &str) -> Result<Vec<MeetingRecord>>;
}
