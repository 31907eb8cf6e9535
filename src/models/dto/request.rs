use once_cell::sync::Lazy;
use serde::Deserialize;
use validator::Validate;

use crate::models::domain::notification::NotificationKind;
use crate::models::domain::scoring::{ScoringStatus, Semester};
use crate::models::domain::user::UserRole;

static ACADEMIC_YEAR_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^\d{4}-\d{4}$").expect("ACADEMIC_YEAR_REGEX is a valid regex pattern")
});

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ScoringQuery {
    pub semester: Semester,

    #[validate(regex(
        path = *ACADEMIC_YEAR_REGEX,
        message = "Academic year must be in YYYY-YYYY format"
    ))]
    pub academic_year: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionScoreInput {
    pub self_score: i16,
    #[serde(default)]
    pub evidence: String,
    #[serde(default)]
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringAction {
    Save,
    Submit,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveScoringRequest {
    pub semester: Semester,

    #[validate(regex(
        path = *ACADEMIC_YEAR_REGEX,
        message = "Academic year must be in YYYY-YYYY format"
    ))]
    pub academic_year: String,

    pub section1: SectionScoreInput,
    pub section2: SectionScoreInput,
    pub section3: SectionScoreInput,
    pub section4: SectionScoreInput,
    pub section5: SectionScoreInput,

    pub action: ScoringAction,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GradeRequest {
    #[validate(length(min = 1))]
    pub record_id: String,

    #[validate(range(min = 0, max = 100))]
    pub teacher_score: i16,

    #[validate(range(min = 0, max = 100))]
    pub class_score: Option<i16>,

    #[validate(length(max = 2000))]
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExportCsvRequest {
    #[validate(length(min = 1))]
    pub record_id: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EvidenceUploadRequest {
    #[validate(length(min = 1, max = 255))]
    pub file_name: String,

    #[validate(length(min = 1, max = 100))]
    pub content_type: String,

    #[validate(range(min = 1))]
    pub size_bytes: i64,
}

fn default_notification_kind() -> NotificationKind {
    NotificationKind::Info
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendNotificationRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 2000))]
    pub message: String,

    #[serde(default = "default_notification_kind")]
    pub kind: NotificationKind,

    pub target_role: Option<UserRole>,

    #[serde(default)]
    pub target_users: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 100))]
    pub full_name: String,

    #[validate(length(min = 1, max = 20))]
    pub student_id: String,

    #[validate(length(max = 20))]
    pub class_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GradingListQuery {
    pub status: Option<ScoringStatus>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl GradingListQuery {
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).clamp(1, 100)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl PaginationParams {
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).clamp(1, 100)
    }
}
