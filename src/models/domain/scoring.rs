use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::rubric::SectionId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Semester {
    #[serde(rename = "1")]
    First,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "3")]
    Summer,
}

impl Semester {
    pub fn as_str(&self) -> &'static str {
        match self {
            Semester::First => "1",
            Semester::Second => "2",
            Semester::Summer => "3",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringStatus {
    Draft,
    Submitted,
    Graded,
}

impl ScoringStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringStatus::Draft => "draft",
            ScoringStatus::Submitted => "submitted",
            ScoringStatus::Graded => "graded",
        }
    }
}

/// One rubric section as filled in by the student. `files` holds opaque
/// storage references only, never file bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SectionScore {
    pub self_score: i16,
    #[serde(default)]
    pub evidence: String,
    #[serde(default)]
    pub files: Vec<String>,
}

/// One student's conduct self-assessment for a (semester, academic year)
/// period. `total_self_score` is derived from the five sections and is
/// recomputed on every section write.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoringRecord {
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
    pub status: ScoringStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graded_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl ScoringRecord {
    pub fn new_draft(user_id: &str, semester: Semester, academic_year: &str) -> Self {
        ScoringRecord {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            semester,
            academic_year: academic_year.to_string(),
            section1: SectionScore::default(),
            section2: SectionScore::default(),
            section3: SectionScore::default(),
            section4: SectionScore::default(),
            section5: SectionScore::default(),
            total_self_score: 0,
            class_score: None,
            teacher_score: None,
            final_score: None,
            feedback: None,
            status: ScoringStatus::Draft,
            submitted_at: None,
            graded_at: None,
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }

    pub fn section(&self, id: SectionId) -> &SectionScore {
        match id {
            SectionId::Section1 => &self.section1,
            SectionId::Section2 => &self.section2,
            SectionId::Section3 => &self.section3,
            SectionId::Section4 => &self.section4,
            SectionId::Section5 => &self.section5,
        }
    }

    pub fn section_mut(&mut self, id: SectionId) -> &mut SectionScore {
        match id {
            SectionId::Section1 => &mut self.section1,
            SectionId::Section2 => &mut self.section2,
            SectionId::Section3 => &mut self.section3,
            SectionId::Section4 => &mut self.section4,
            SectionId::Section5 => &mut self.section5,
        }
    }

    pub fn sections(&self) -> [&SectionScore; 5] {
        [
            &self.section1,
            &self.section2,
            &self.section3,
            &self.section4,
            &self.section5,
        ]
    }

    /// Recompute the derived total from the five sections.
    pub fn recompute_total(&mut self) {
        self.total_self_score = self.sections().iter().map(|s| s.self_score).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_is_zeroed() {
        let record = ScoringRecord::new_draft("student-1", Semester::First, "2024-2025");

        assert_eq!(record.status, ScoringStatus::Draft);
        assert_eq!(record.total_self_score, 0);
        assert!(record.final_score.is_none());
        assert!(record.submitted_at.is_none());
        assert!(record.graded_at.is_none());
        for section in record.sections() {
            assert_eq!(section.self_score, 0);
            assert!(section.evidence.is_empty());
            assert!(section.files.is_empty());
        }
    }

    #[test]
    fn test_recompute_total_sums_all_sections() {
        let mut record = ScoringRecord::new_draft("student-1", Semester::First, "2024-2025");
        record.section1.self_score = 18;
        record.section2.self_score = 23;
        record.section3.self_score = 17;
        record.section4.self_score = 22;
        record.section5.self_score = 8;
        record.recompute_total();

        assert_eq!(record.total_self_score, 88);
    }

    #[test]
    fn test_section_accessors_cover_all_ids() {
        let mut record = ScoringRecord::new_draft("student-1", Semester::Second, "2024-2025");
        for (i, id) in SectionId::ALL.iter().enumerate() {
            record.section_mut(*id).self_score = i as i16 + 1;
        }
        record.recompute_total();

        assert_eq!(record.total_self_score, 1 + 2 + 3 + 4 + 5);
        assert_eq!(record.section(SectionId::Section4).self_score, 4);
    }

    #[test]
    fn test_status_and_semester_wire_names() {
        assert_eq!(
            serde_json::to_string(&ScoringStatus::Submitted).unwrap(),
            "\"submitted\""
        );
        assert_eq!(serde_json::to_string(&Semester::Summer).unwrap(), "\"3\"");

        let parsed: Semester = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(parsed, Semester::First);
    }

    #[test]
    fn test_record_round_trip_serialization() {
        let mut record = ScoringRecord::new_draft("student-1", Semester::First, "2024-2025");
        record.section1 = SectionScore {
            self_score: 18,
            evidence: "Tham gia đầy đủ các buổi học".to_string(),
            files: vec!["/uploads/evidence/student-1_1.pdf".to_string()],
        };
        record.recompute_total();

        let json = serde_json::to_string(&record).expect("record should serialize");
        let parsed: ScoringRecord = serde_json::from_str(&json).expect("record should deserialize");

        assert_eq!(parsed, record);
    }
}
