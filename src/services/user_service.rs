use std::sync::Arc;

use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::domain::user::{User, UserRole};
use crate::models::dto::request::CreateStudentRequest;
use crate::repositories::UserRepository;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_user(&self, uid: &str) -> AppResult<User> {
        self.repository
            .find_by_uid(uid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", uid)))
    }

    pub async fn create_student(&self, request: CreateStudentRequest) -> AppResult<User> {
        let mut user = User::new_student(
            &Uuid::new_v4().to_string(),
            &request.email,
            &request.full_name,
            &request.student_id,
        );
        user.class_id = request.class_id;

        self.repository.create(user).await
    }

    pub async fn list_students(&self, offset: i64, limit: i64) -> AppResult<(Vec<User>, i64)> {
        self.repository
            .list_by_role(UserRole::Student, offset, limit)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::user_repository::MockUserRepository;

    #[actix_rt::test]
    async fn test_get_user_not_found() {
        let mut repository = MockUserRepository::new();
        repository.expect_find_by_uid().returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));
        let result = service.get_user("missing").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_rt::test]
    async fn test_create_student_assigns_uid_and_role() {
        let mut repository = MockUserRepository::new();
        repository.expect_create().returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository));
        let request = CreateStudentRequest {
            email: "an@example.com".to_string(),
            full_name: "Nguyễn Văn A".to_string(),
            student_id: "SV2024001".to_string(),
            class_id: Some("CNTT2024A".to_string()),
        };

        let user = service.create_student(request).await.unwrap();

        assert!(!user.uid.is_empty());
        assert_eq!(user.role, UserRole::Student);
        assert_eq!(user.class_id.as_deref(), Some("CNTT2024A"));
    }
}
