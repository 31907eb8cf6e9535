use std::sync::Arc;

use chrono::Utc;

use crate::errors::{AppError, AppResult};
use crate::models::domain::rubric::SectionId;
use crate::models::domain::scoring::{ScoringRecord, ScoringStatus, Semester};
use crate::models::dto::request::{GradeRequest, SaveScoringRequest, SectionScoreInput};
use crate::repositories::ScoringRepository;

/// One student-authored field write against a rubric section.
#[derive(Clone, Debug)]
pub enum SectionUpdate {
    SelfScore(i16),
    Evidence(String),
    Files(Vec<String>),
}

pub struct ScoringService {
    repository: Arc<dyn ScoringRepository>,
}

impl ScoringService {
    pub fn new(repository: Arc<dyn ScoringRepository>) -> Self {
        Self { repository }
    }

    /// Apply one section write. Only drafts are student-mutable; a self
    /// score outside the section ceiling is rejected, never clamped.
    /// The derived total is recomputed on every write.
    pub fn apply_section_update(
        record: &mut ScoringRecord,
        section: SectionId,
        update: SectionUpdate,
    ) -> AppResult<()> {
        if record.status != ScoringStatus::Draft {
            return Err(AppError::InvalidState(format!(
                "sections are immutable once the record is {}",
                record.status.as_str()
            )));
        }

        match update {
            SectionUpdate::SelfScore(value) => {
                let max = section.max_score();
                if value < 0 || value > max {
                    return Err(AppError::OutOfRange(format!(
                        "self score {} for {} must be between 0 and {}",
                        value,
                        section.title(),
                        max
                    )));
                }
                record.section_mut(section).self_score = value;
            }
            SectionUpdate::Evidence(evidence) => {
                record.section_mut(section).evidence = evidence;
            }
            SectionUpdate::Files(files) => {
                record.section_mut(section).files = files;
            }
        }

        record.recompute_total();
        Ok(())
    }

    /// Transition draft → submitted. Every section must carry a self score;
    /// a wholly unscored section blocks submission.
    pub fn submit_record(record: &mut ScoringRecord) -> AppResult<()> {
        if record.status != ScoringStatus::Draft {
            return Err(AppError::InvalidState(format!(
                "cannot submit a record that is {}",
                record.status.as_str()
            )));
        }

        if record.sections().iter().any(|s| s.self_score == 0) {
            return Err(AppError::ValidationError(
                "every section must have a self score before submission".to_string(),
            ));
        }

        let now = Utc::now();
        record.status = ScoringStatus::Submitted;
        record.submitted_at = Some(now);
        record.modified_at = Some(now);
        Ok(())
    }

    /// Transition submitted → graded. Sets the teacher score, derives the
    /// final score, and stamps the grading time.
    pub fn grade_record(
        record: &mut ScoringRecord,
        teacher_score: i16,
        feedback: Option<String>,
    ) -> AppResult<()> {
        if record.status != ScoringStatus::Submitted {
            return Err(AppError::InvalidState(format!(
                "cannot grade a record that is {}",
                record.status.as_str()
            )));
        }

        if !(0..=100).contains(&teacher_score) {
            return Err(AppError::OutOfRange(format!(
                "teacher score {} must be between 0 and 100",
                teacher_score
            )));
        }

        let now = Utc::now();
        record.teacher_score = Some(teacher_score);
        record.feedback = feedback;
        record.final_score = Some(Self::compute_final_score(
            record.total_self_score,
            record.class_score,
            teacher_score,
        ));
        record.status = ScoringStatus::Graded;
        record.graded_at = Some(now);
        record.modified_at = Some(now);
        Ok(())
    }

    /// Average of self, class and teacher scores when a class score exists;
    /// the teacher score alone otherwise.
    pub fn compute_final_score(
        total_self_score: i16,
        class_score: Option<i16>,
        teacher_score: i16,
    ) -> i16 {
        match class_score {
            Some(class_score) => {
                let sum = total_self_score as f64 + class_score as f64 + teacher_score as f64;
                (sum / 3.0).round() as i16
            }
            None => teacher_score,
        }
    }

    /// The record for a (student, semester, year) period, created as a
    /// zeroed draft on first access.
    pub async fn get_or_create(
        &self,
        user_id: &str,
        semester: Semester,
        academic_year: &str,
    ) -> AppResult<ScoringRecord> {
        if let Some(record) = self
            .repository
            .find_by_period(user_id, semester, academic_year)
            .await?
        {
            return Ok(record);
        }

        let record = ScoringRecord::new_draft(user_id, semester, academic_year);
        self.repository.create(record).await
    }

    pub async fn get_by_id(&self, record_id: &str) -> AppResult<ScoringRecord> {
        self.repository
            .find_by_id(record_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Scoring record '{}' not found", record_id))
            })
    }

    pub async fn save_draft(
        &self,
        user_id: &str,
        request: &SaveScoringRequest,
    ) -> AppResult<ScoringRecord> {
        let mut record = self
            .get_or_create(user_id, request.semester, &request.academic_year)
            .await?;

        Self::apply_sections(&mut record, request)?;
        record.modified_at = Some(Utc::now());

        self.repository
            .update_with_status(record, ScoringStatus::Draft)
            .await
    }

    pub async fn submit(
        &self,
        user_id: &str,
        request: &SaveScoringRequest,
    ) -> AppResult<ScoringRecord> {
        let mut record = self
            .get_or_create(user_id, request.semester, &request.academic_year)
            .await?;

        Self::apply_sections(&mut record, request)?;
        Self::submit_record(&mut record)?;

        // The status read above was draft; a concurrent transition fails the swap.
        self.repository
            .update_with_status(record, ScoringStatus::Draft)
            .await
    }

    pub async fn grade(&self, request: &GradeRequest) -> AppResult<ScoringRecord> {
        let mut record = self.get_by_id(&request.record_id).await?;

        if let Some(class_score) = request.class_score {
            if !(0..=100).contains(&class_score) {
                return Err(AppError::OutOfRange(format!(
                    "class score {} must be between 0 and 100",
                    class_score
                )));
            }
            record.class_score = Some(class_score);
        }

        Self::grade_record(&mut record, request.teacher_score, request.feedback.clone())?;

        self.repository
            .update_with_status(record, ScoringStatus::Submitted)
            .await
    }

    pub async fn list_for_grading(
        &self,
        status: Option<ScoringStatus>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<ScoringRecord>, i64)> {
        self.repository.list_by_status(status, offset, limit).await
    }

    fn apply_sections(record: &mut ScoringRecord, request: &SaveScoringRequest) -> AppResult<()> {
        let inputs: [(SectionId, &SectionScoreInput); 5] = [
            (SectionId::Section1, &request.section1),
            (SectionId::Section2, &request.section2),
            (SectionId::Section3, &request.section3),
            (SectionId::Section4, &request.section4),
            (SectionId::Section5, &request.section5),
        ];

        for (section, input) in inputs {
            Self::apply_section_update(
                record,
                section,
                SectionUpdate::SelfScore(input.self_score),
            )?;
            Self::apply_section_update(
                record,
                section,
                SectionUpdate::Evidence(input.evidence.clone()),
            )?;
            Self::apply_section_update(record, section, SectionUpdate::Files(input.files.clone()))?;
        }
        Ok(())
    }
}
