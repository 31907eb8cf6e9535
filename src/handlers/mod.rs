pub mod export_handler;
pub mod grading_handler;
pub mod health_handler;
pub mod notification_handler;
pub mod scoring_handler;
pub mod upload_handler;
pub mod user_handler;
