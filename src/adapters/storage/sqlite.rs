/// SQLite meeting store adapter
///
/// Implements MeetingStorePort for SQLite database operations. Structured
/// payloads (analysis, documents, follow-up plan, scoring map) are stored
/// as JSON columns.
use crate::domain::models::MeetingRecord;
use crate::error::{AppError, Result};
use crate::ports::storage::MeetingStorePort;
use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Raw row shape before JSON columns are decoded
type RawRecord = (String, String, i64, String, String, String, String);

/// SQLite storage implementation
pub struct SqliteMeetingStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteMeetingStore {
    /// Create a new SQLite store with the given database path
    pub fn new(db_path: PathBuf) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        // Enable foreign keys
        conn.execute("PRAGMA foreign_keys = ON", [])?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run database migrations
    pub fn run_migrations(&self) -> Result<()> {
        use rusqlite_migration::{Migrations, M};

        let migrations = Migrations::new(vec![M::up(include_str!(
            "../../../migrations/001_initial.sql"
        ))]);

        let mut conn = self.conn.lock().unwrap();
        migrations
            .to_latest(&mut conn)
            .map_err(|e| AppError::Database(rusqlite::Error::ToSqlConversionFailure(Box::new(e))))?;

        Ok(())
    }

    fn decode(raw: RawRecord) -> Result<MeetingRecord> {
        let (id, sales_id, meeting_date, analysis, documents, followup, scoring) = raw;
        Ok(MeetingRecord {
            id,
            sales_id,
            meeting_date,
            analysis: serde_json::from_str(&analysis)?,
            documents: serde_json::from_str(&documents)?,
            followup: serde_json::from_str(&followup)?,
            scoring: serde_json::from_str(&scoring)?,
        })
    }

    fn raw_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRecord> {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            row.get(5)?,
            row.get(6)?,
        ))
    }
}

#[async_trait]
impl MeetingStorePort for SqliteMeetingStore {
    async fn save_meeting(&self, record: &MeetingRecord) -> Result<()> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn.prepare("SELECT 1 FROM meetings WHERE id = ?1")?;
        if stmt.exists(params![record.id])? {
            return Err(AppError::InvalidInput(format!(
                "meeting {} already exists",
                record.id
            )));
        }

        conn.execute(
            "INSERT INTO meetings (id, sales_id, meeting_date, analysis_json, documents_json, followup_json, scoring_json)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                record.id,
                record.sales_id,
                record.meeting_date,
                serde_json::to_string(&record.analysis)?,
                serde_json::to_string(&record.documents)?,
                serde_json::to_string(&record.followup)?,
                serde_json::to_string(&record.scoring)?,
            ],
        )?;
        log::info!("Saved meeting {} for {}", record.id, record.sales_id);
        Ok(())
    }

    async fn get_meeting(&self, id: &str) -> Result<Option<MeetingRecord>> {
        let raw = {
            let conn = self.conn.lock().unwrap();
            let mut stmt = conn.prepare(
                "SELECT id, sales_id, meeting_date, analysis_json, documents_json, followup_json, scoring_json
                 FROM meetings WHERE id = ?1",
            )?;

            let mut rows = stmt.query(params![id])?;
            match rows.next()? {
                Some(row) => Some(Self::raw_from_row(row)?),
                None => None,
            }
        };

        raw.map(Self::decode).transpose()
    }

    async fn list_meetings(&self) -> Result<Vec<MeetingRecord>> {
        let raws = {
            let conn = self.conn.lock().unwrap();
            let mut stmt = conn.prepare(
                "SELECT id, sales_id, meeting_date, analysis_json, documents_json, followup_json, scoring_json
                 FROM meetings ORDER BY meeting_date DESC",
            )?;

            let rows = stmt.query_map([], Self::raw_from_row)?;
            rows.collect::<rusqlite::Result<Vec<RawRecord>>>()?
        };

        raws.into_iter().map(Self::decode).collect()
    }

    async fn meetings_for_salesperson(&self, sales_id: &str) -> Result<Vec<MeetingRecord>> {
        let raws = {
            let conn = self.conn.lock().unwrap();
            let mut stmt = conn.prepare(
                "SELECT id, sales_id, meeting_date, analysis_json, documents_json, followup_json, scoring_json
                 FROM meetings WHERE sales_id = ?1 ORDER BY meeting_date DESC",
            )?;

            let rows = stmt.query_map(params![sales_id], Self::raw_from_row)?;
            rows.collect::<rusqlite::Result<Vec<RawRecord>>>()?
        };

        raws.into_iter().map(Self::decode).collect()
    }
}
