pub mod notification_repository;
pub mod scoring_repository;
pub mod user_repository;

pub use notification_repository::{MongoNotificationRepository, NotificationRepository};
pub use scoring_repository::{MongoScoringRepository, ScoringRepository};
pub use user_repository::{MongoUserRepository, UserRepository};
