use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use conduct_server::{
    errors::{AppError, AppResult},
    models::domain::scoring::{ScoringRecord, ScoringStatus, Semester},
    repositories::ScoringRepository,
};

/// In-memory stand-in for the document store, honoring the same contract
/// as the MongoDB implementation (including the status-guarded swap).
pub struct InMemoryScoringRepository {
    records: Arc<RwLock<HashMap<String, ScoringRecord>>>,
}

impl InMemoryScoringRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ScoringRepository for InMemoryScoringRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<ScoringRecord>> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn find_by_period(
        &self,
        user_id: &str,
        semester: Semester,
        academic_year: &str,
    ) -> AppResult<Option<ScoringRecord>> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .find(|r| {
                r.user_id == user_id
                    && r.semester == semester
                    && r.academic_year == academic_year
            })
            .cloned())
    }

    async fn create(&self, record: ScoringRecord) -> AppResult<ScoringRecord> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(AppError::AlreadyExists(format!(
                "Scoring record with id '{}' already exists",
                record.id
            )));
        }
        if records.values().any(|r| {
            r.user_id == record.user_id
                && r.semester == record.semester
                && r.academic_year == record.academic_year
        }) {
            return Err(AppError::AlreadyExists(format!(
                "Scoring record for user '{}' already exists for this period",
                record.user_id
            )));
        }

        records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn update_with_status(
        &self,
        record: ScoringRecord,
        expected_status: ScoringStatus,
    ) -> AppResult<ScoringRecord> {
        let mut records = self.records.write().await;
        let Some(current) = records.get(&record.id) else {
            return Err(AppError::NotFound(format!(
                "Scoring record '{}' not found",
                record.id
            )));
        };

        if current.status != expected_status {
            return Err(AppError::InvalidState(format!(
                "scoring record '{}' is {}, expected {}",
                record.id,
                current.status.as_str(),
                expected_status.as_str()
            )));
        }

        records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn list_by_status(
        &self,
        status: Option<ScoringStatus>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<ScoringRecord>, i64)> {
        let records = self.records.read().await;
        let mut items: Vec<_> = records
            .values()
            .filter(|r| status.map(|s| r.status == s).unwrap_or(true))
            .cloned()
            .collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));

        let total = items.len() as i64;
        let start = offset.max(0) as usize;
        let end = (start + limit.max(0) as usize).min(items.len());

        let page = if start >= items.len() {
            vec![]
        } else {
            items[start..end].to_vec()
        };

        Ok((page, total))
    }
}
