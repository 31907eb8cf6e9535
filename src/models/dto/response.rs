use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::grade::GradeLevel;
use crate::models::domain::scoring::{ScoringRecord, ScoringStatus, SectionScore, Semester};
use crate::models::domain::user::{User, UserRole};

#[derive(Debug, Clone, Serialize)]
pub struct ScoringRecordDto {
    pub id: String,
    pub user_id: String,
    pub semester: Semester,
    pub academic_year: String,
    pub section1: SectionScore,
    pub section2: SectionScore,
    pub section3: SectionScore,
    pub section4: SectionScore,
    pub section5: SectionScore,
    pub total_self_score: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_score: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_score: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_score: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_label: Option<&'static str>,
    pub status: ScoringStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graded_at: Option<DateTime<Utc>>,
}

impl From<ScoringRecord> for ScoringRecordDto {
    fn from(record: ScoringRecord) -> Self {
        let grade_label = record
            .final_score
            .map(|score| GradeLevel::from_score(score).label());

        ScoringRecordDto {
            id: record.id,
            user_id: record.user_id,
            semester: record.semester,
            academic_year: record.academic_year,
            section1: record.section1,
            section2: record.section2,
            section3: record.section3,
            section4: record.section4,
            section5: record.section5,
            total_self_score: record.total_self_score,
            class_score: record.class_score,
            teacher_score: record.teacher_score,
            final_score: record.final_score,
            feedback: record.feedback,
            grade_label,
            status: record.status,
            submitted_at: record.submitted_at,
            graded_at: record.graded_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub uid: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            uid: user.uid,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            student_id: user.student_id,
            class_id: user.class_id,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T: Serialize> {
    pub items: Vec<T>,
    pub total: i64,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
    pub file_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::scoring::ScoringRecord;

    #[test]
    fn test_scoring_dto_carries_grade_label_only_when_graded() {
        let record = ScoringRecord::new_draft("student-1", Semester::First, "2024-2025");
        let dto = ScoringRecordDto::from(record.clone());
        assert!(dto.grade_label.is_none());

        let mut graded = record;
        graded.final_score = Some(87);
        graded.status = ScoringStatus::Graded;
        let dto = ScoringRecordDto::from(graded);
        assert_eq!(dto.grade_label, Some("Tốt"));
    }

    #[test]
    fn test_user_dto_from_domain() {
        let user = User::new_student("uid-1", "an@example.com", "Nguyễn Văn A", "SV2024001");
        let dto: UserDto = user.into();

        assert_eq!(dto.uid, "uid-1");
        assert_eq!(dto.role, UserRole::Student);
        assert_eq!(dto.student_id.as_deref(), Some("SV2024001"));
    }
}
