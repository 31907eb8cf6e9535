use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoNotificationRepository, MongoScoringRepository, MongoUserRepository},
    services::{NotificationService, ScoringService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub scoring_service: Arc<ScoringService>,
    pub user_service: Arc<UserService>,
    pub notification_service: Arc<NotificationService>,
    pub config: Arc<Config>,
    pub db: Database,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let scoring_repository = Arc::new(MongoScoringRepository::new(&db, &config));
        scoring_repository.ensure_indexes().await?;
        let scoring_service = Arc::new(ScoringService::new(scoring_repository));

        let user_repository = Arc::new(MongoUserRepository::new(&db, &config));
        user_repository.ensure_indexes().await?;
        let user_service = Arc::new(UserService::new(user_repository));

        let notification_repository = Arc::new(MongoNotificationRepository::new(&db, &config));
        notification_repository.ensure_indexes().await?;
        let notification_service = Arc::new(NotificationService::new(notification_repository));

        Ok(Self {
            scoring_service,
            user_service,
            notification_service,
            config: Arc::new(config),
            db,
        })
    }
}
