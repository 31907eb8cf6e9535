use crate::models::domain::rubric::SectionId;
use crate::models::domain::scoring::{ScoringRecord, ScoringStatus};
use crate::models::domain::user::User;

/// UTF-8 byte-order mark so spreadsheet applications pick up the encoding.
const BOM: &str = "\u{FEFF}";

pub struct ExportService;

impl ExportService {
    /// Render one scoring record as CSV: identity rows, one row per rubric
    /// section, then the summary block. Every cell is double-quoted.
    pub fn render_csv(record: &ScoringRecord, user: &User) -> String {
        let na = "N/A".to_string();
        let mut rows: Vec<Vec<String>> = vec![
            vec!["Thông tin".to_string(), "Giá trị".to_string()],
            vec!["Họ và tên".to_string(), user.full_name.clone()],
            vec![
                "Mã sinh viên".to_string(),
                user.student_id.clone().unwrap_or_else(|| na.clone()),
            ],
            vec![
                "Lớp".to_string(),
                user.class_id.clone().unwrap_or_else(|| na.clone()),
            ],
            vec!["Học kỳ".to_string(), record.semester.as_str().to_string()],
            vec!["Năm học".to_string(), record.academic_year.clone()],
            vec![String::new()],
            vec![
                "Mục đánh giá".to_string(),
                "Điểm tự đánh giá".to_string(),
                "Điểm tối đa".to_string(),
                "Minh chứng".to_string(),
            ],
        ];

        for section in SectionId::ALL {
            let score = record.section(section);
            rows.push(vec![
                section.title().to_string(),
                score.self_score.to_string(),
                section.max_score().to_string(),
                score.evidence.clone(),
            ]);
        }

        let optional = |score: Option<i16>| score.map(|s| s.to_string()).unwrap_or_default();
        rows.push(vec![String::new()]);
        rows.push(vec!["Tổng kết".to_string(), "Điểm".to_string()]);
        rows.push(vec![
            "Điểm tự đánh giá".to_string(),
            record.total_self_score.to_string(),
        ]);
        rows.push(vec!["Điểm lớp".to_string(), optional(record.class_score)]);
        rows.push(vec![
            "Điểm giảng viên".to_string(),
            optional(record.teacher_score),
        ]);
        rows.push(vec![
            "Điểm cuối cùng".to_string(),
            optional(record.final_score),
        ]);
        rows.push(vec![
            "Trạng thái".to_string(),
            Self::status_label(record.status).to_string(),
        ]);

        let body = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| Self::quote(cell))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!("{}{}", BOM, body)
    }

    pub fn csv_filename(user: &User) -> String {
        let student_id = user.student_id.as_deref().unwrap_or("student");
        format!("phieu-cham-diem-{}.csv", student_id)
    }

    fn status_label(status: ScoringStatus) -> &'static str {
        match status {
            ScoringStatus::Draft => "Bản nháp",
            ScoringStatus::Submitted => "Đã gửi",
            ScoringStatus::Graded => "Đã chấm điểm",
        }
    }

    fn quote(cell: &str) -> String {
        format!("\"{}\"", cell.replace('"', "\"\""))
    }
}
