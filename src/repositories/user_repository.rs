use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    config::Config,
    db::Database,
    errors::{AppError, AppResult},
    models::domain::user::{User, UserRole},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_uid(&self, uid: &str) -> AppResult<Option<User>>;
    async fn create(&self, user: User) -> AppResult<User>;
    async fn list_by_role(
        &self,
        role: UserRole,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<User>, i64)>;
}

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database, config: &Config) -> Self {
        let collection = db.get_collection(&config.users_collection);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for users collection");

        let uid_index = IndexModel::builder()
            .keys(doc! { "uid": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("uid_unique".to_string())
                    .build(),
            )
            .build();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(uid_index).await?;
        self.collection.create_index(email_index).await?;

        log::info!("Successfully created indexes for users collection");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_uid(&self, uid: &str) -> AppResult<Option<User>> {
        let user = self.collection.find_one(doc! { "uid": uid }).await?;
        Ok(user)
    }

    async fn create(&self, user: User) -> AppResult<User> {
        if self.find_by_uid(&user.uid).await?.is_some() {
            return Err(AppError::AlreadyExists(format!(
                "User with uid '{}' already exists",
                user.uid
            )));
        }

        self.collection.insert_one(&user).await?;
        Ok(user)
    }

    async fn list_by_role(
        &self,
        role: UserRole,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<User>, i64)> {
        let role_str = match role {
            UserRole::Student => "student",
            UserRole::Teacher => "teacher",
        };
        let filter = doc! { "role": role_str };

        let total = self.collection.count_documents(filter.clone()).await?;

        let users = self
            .collection
            .find(filter)
            .skip(offset as u64)
            .limit(limit)
            .sort(doc! { "full_name": 1 })
            .await?
            .try_collect()
            .await?;

        Ok((users, total as i64))
    }
}
