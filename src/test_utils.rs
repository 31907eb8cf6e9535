use crate::models::domain::scoring::{ScoringRecord, Semester};

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::models::domain::rubric::SectionId;
    use crate::models::domain::user::User;
    use crate::services::ScoringService;

    /// Creates a draft record with the given section scores
    pub fn draft_record(scores: [i16; 5]) -> ScoringRecord {
        let mut record = ScoringRecord::new_draft("student-1", Semester::First, "2024-2025");
        for (i, section) in SectionId::ALL.iter().enumerate() {
            record.section_mut(*section).self_score = scores[i];
        }
        record.recompute_total();
        record
    }

    /// Creates a record already past submission
    pub fn submitted_record(scores: [i16; 5]) -> ScoringRecord {
        let mut record = draft_record(scores);
        ScoringService::submit_record(&mut record).expect("fixture scores should be submittable");
        record
    }

    /// Creates a standard test student
    pub fn test_student() -> User {
        let mut user = User::new_student("student-1", "an@example.com", "Nguyễn Văn A", "SV2024001");
        user.class_id = Some("CNTT2024A".to_string());
        user
    }

    /// Creates a standard test teacher
    pub fn test_teacher() -> User {
        User::new_teacher("teacher-1", "gv@example.com", "Trần Thị B")
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::scoring::ScoringStatus;

    #[test]
    fn test_fixtures_draft_record() {
        let record = draft_record([18, 23, 17, 22, 8]);
        assert_eq!(record.status, ScoringStatus::Draft);
        assert_eq!(record.total_self_score, 88);
    }

    #[test]
    fn test_fixtures_submitted_record() {
        let record = submitted_record([18, 23, 17, 22, 8]);
        assert_eq!(record.status, ScoringStatus::Submitted);
        assert!(record.submitted_at.is_some());
    }

    #[test]
    fn test_fixtures_users() {
        assert_eq!(test_student().uid, "student-1");
        assert_eq!(test_teacher().uid, "teacher-1");
    }
}
