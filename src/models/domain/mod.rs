pub mod grade;
pub mod notification;
pub mod rubric;
pub mod scoring;
pub mod user;

pub use grade::GradeLevel;
pub use notification::{Notification, NotificationKind};
pub use rubric::SectionId;
pub use scoring::{ScoringRecord, ScoringStatus, SectionScore, Semester};
pub use user::{User, UserRole};
