use serde::{Deserialize, Serialize};

/// The five conduct rubric sections. Ceilings are fixed by the regulation
/// and sum to 100.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Section1,
    Section2,
    Section3,
    Section4,
    Section5,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Section1,
        SectionId::Section2,
        SectionId::Section3,
        SectionId::Section4,
        SectionId::Section5,
    ];

    pub fn max_score(&self) -> i16 {
        match self {
            SectionId::Section1 => 20,
            SectionId::Section2 => 25,
            SectionId::Section3 => 20,
            SectionId::Section4 => 25,
            SectionId::Section5 => 10,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Section1 => "I. Ý thức học tập",
            SectionId::Section2 => "II. Chấp hành nội quy",
            SectionId::Section3 => "III. Tham gia hoạt động xã hội",
            SectionId::Section4 => "IV. Ý thức công dân",
            SectionId::Section5 => "V. Tham gia công tác lớp",
        }
    }
}

/// Sum of all section ceilings.
pub const RUBRIC_MAX_TOTAL: i16 = 100;
