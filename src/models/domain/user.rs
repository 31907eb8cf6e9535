use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Teacher,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub uid: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new_student(uid: &str, email: &str, full_name: &str, student_id: &str) -> Self {
        User {
            uid: uid.to_string(),
            email: email.to_string(),
            full_name: full_name.to_string(),
            role: UserRole::Student,
            student_id: Some(student_id.to_string()),
            class_id: None,
            phone: None,
            department: None,
            position: None,
            created_at: Some(Utc::now()),
        }
    }

    pub fn new_teacher(uid: &str, email: &str, full_name: &str) -> Self {
        User {
            uid: uid.to_string(),
            email: email.to_string(),
            full_name: full_name.to_string(),
            role: UserRole::Teacher,
            student_id: None,
            class_id: None,
            phone: None,
            department: None,
            position: None,
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_creation() {
        let user = User::new_student("uid-1", "an@example.com", "Nguyễn Văn A", "SV2024001");

        assert_eq!(user.role, UserRole::Student);
        assert_eq!(user.student_id.as_deref(), Some("SV2024001"));
        assert!(user.created_at.is_some());
    }

    #[test]
    fn test_teacher_creation() {
        let user = User::new_teacher("uid-2", "gv@example.com", "Trần Thị B");

        assert_eq!(user.role, UserRole::Teacher);
        assert!(user.student_id.is_none());
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(
            serde_json::to_string(&UserRole::Teacher).unwrap(),
            "\"teacher\""
        );
        let parsed: UserRole = serde_json::from_str("\"student\"").unwrap();
        assert_eq!(parsed, UserRole::Student);
    }
}
