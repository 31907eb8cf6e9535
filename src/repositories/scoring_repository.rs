use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    config::Config,
    db::Database,
    errors::{AppError, AppResult},
    models::domain::scoring::{ScoringRecord, ScoringStatus, Semester},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScoringRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<ScoringRecord>>;
    async fn find_by_period(
        &self,
        user_id: &str,
        semester: Semester,
        academic_year: &str,
    ) -> AppResult<Option<ScoringRecord>>;
    async fn create(&self, record: ScoringRecord) -> AppResult<ScoringRecord>;
    /// Replace the stored record, but only if its persisted status still
    /// matches `expected_status`. A stale writer gets `InvalidState`.
    async fn update_with_status(
        &self,
        record: ScoringRecord,
        expected_status: ScoringStatus,
    ) -> AppResult<ScoringRecord>;
    async fn list_by_status(
        &self,
        status: Option<ScoringStatus>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<ScoringRecord>, i64)>;
}

pub struct MongoScoringRepository {
    collection: Collection<ScoringRecord>,
}

impl MongoScoringRepository {
    pub fn new(db: &Database, config: &Config) -> Self {
        let collection = db.get_collection(&config.scorings_collection);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for scorings collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let period_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "semester": 1, "academic_year": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_period_unique".to_string())
                    .build(),
            )
            .build();

        let status_index = IndexModel::builder()
            .keys(doc! { "status": 1 })
            .options(IndexOptions::builder().name("status".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(period_index).await?;
        self.collection.create_index(status_index).await?;

        log::info!("Successfully created indexes for scorings collection");
        Ok(())
    }
}

#[async_trait]
impl ScoringRepository for MongoScoringRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<ScoringRecord>> {
        let record = self.collection.find_one(doc! { "id": id }).await?;
        Ok(record)
    }

    async fn find_by_period(
        &self,
        user_id: &str,
        semester: Semester,
        academic_year: &str,
    ) -> AppResult<Option<ScoringRecord>> {
        let record = self
            .collection
            .find_one(doc! {
                "user_id": user_id,
                "semester": semester.as_str(),
                "academic_year": academic_year,
            })
            .await?;
        Ok(record)
    }

    async fn create(&self, record: ScoringRecord) -> AppResult<ScoringRecord> {
        self.collection.insert_one(&record).await?;
        Ok(record)
    }

    async fn update_with_status(
        &self,
        record: ScoringRecord,
        expected_status: ScoringStatus,
    ) -> AppResult<ScoringRecord> {
        let filter = doc! {
            "id": &record.id,
            "status": expected_status.as_str(),
        };

        let result = self.collection.replace_one(filter, &record).await?;

        if result.matched_count == 0 {
            return match self.find_by_id(&record.id).await? {
                Some(current) => Err(AppError::InvalidState(format!(
                    "scoring record '{}' is {}, expected {}",
                    record.id,
                    current.status.as_str(),
                    expected_status.as_str()
                ))),
                None => Err(AppError::NotFound(format!(
                    "Scoring record '{}' not found",
                    record.id
                ))),
            };
        }

        Ok(record)
    }

    async fn list_by_status(
        &self,
        status: Option<ScoringStatus>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<ScoringRecord>, i64)> {
        let mut filter = doc! {};
        if let Some(status) = status {
            filter.insert("status", status.as_str());
        }

        let total = self.collection.count_documents(filter.clone()).await?;

        let records = self
            .collection
            .find(filter)
            .skip(offset as u64)
            .limit(limit)
            .sort(doc! { "submitted_at": -1 })
            .await?
            .try_collect()
            .await?;

        Ok((records, total as i64))
    }
}
