pub mod evidence_service;
pub mod export_service;
pub mod notification_service;
pub mod scoring_service;
pub mod user_service;

pub use evidence_service::EvidenceService;
pub use export_service::ExportService;
pub use notification_service::NotificationService;
pub use scoring_service::{ScoringService, SectionUpdate};
pub use user_service::UserService;
