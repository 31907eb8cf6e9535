use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    models::domain::notification::Notification,
    models::domain::user::UserRole,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn create(&self, notification: Notification) -> AppResult<Notification>;
    /// Notifications addressed to the user directly or to their role,
    /// newest first.
    async fn list_for_user(
        &self,
        uid: &str,
        role: UserRole,
        limit: i64,
    ) -> AppResult<Vec<Notification>>;
}

pub struct MongoNotificationRepository {
    collection: Collection<Notification>,
}

impl MongoNotificationRepository {
    pub fn new(db: &Database, config: &Config) -> Self {
        let collection = db.get_collection(&config.notifications_collection);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for notifications collection");

        let created_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        let target_index = IndexModel::builder()
            .keys(doc! { "target_users": 1 })
            .options(
                IndexOptions::builder()
                    .name("target_users".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(created_index).await?;
        self.collection.create_index(target_index).await?;

        log::info!("Successfully created indexes for notifications collection");
        Ok(())
    }
}

#[async_trait]
impl NotificationRepository for MongoNotificationRepository {
    async fn create(&self, notification: Notification) -> AppResult<Notification> {
        self.collection.insert_one(&notification).await?;
        Ok(notification)
    }

    async fn list_for_user(
        &self,
        uid: &str,
        role: UserRole,
        limit: i64,
    ) -> AppResult<Vec<Notification>> {
        let role_str = match role {
            UserRole::Student => "student",
            UserRole::Teacher => "teacher",
        };

        let filter = doc! {
            "$or": [
                { "target_users": uid },
                { "target_role": role_str },
            ]
        };

        let notifications = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;

        Ok(notifications)
    }
}
