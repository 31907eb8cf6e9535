use serde::{Deserialize, Serialize};

/// Qualitative band for a 0–100 conduct score. Thresholds are evaluated
/// top-down, first match wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeLevel {
    Excellent,
    Good,
    Fair,
    Average,
    Weak,
    Poor,
}

impl GradeLevel {
    pub fn from_score(score: i16) -> Self {
        if score >= 90 {
            GradeLevel::Excellent
        } else if score >= 80 {
            GradeLevel::Good
        } else if score >= 65 {
            GradeLevel::Fair
        } else if score >= 50 {
            GradeLevel::Average
        } else if score >= 35 {
            GradeLevel::Weak
        } else {
            GradeLevel::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GradeLevel::Excellent => "Xuất sắc",
            GradeLevel::Good => "Tốt",
            GradeLevel::Fair => "Khá",
            GradeLevel::Average => "Trung bình",
            GradeLevel::Weak => "Yếu",
            GradeLevel::Poor => "Kém",
        }
    }
}
