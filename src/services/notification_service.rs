use std::sync::Arc;

use crate::errors::AppResult;
use crate::models::domain::notification::Notification;
use crate::models::domain::user::UserRole;
use crate::repositories::NotificationRepository;

pub struct NotificationService {
    repository: Arc<dyn NotificationRepository>,
}

impl NotificationService {
    pub fn new(repository: Arc<dyn NotificationRepository>) -> Self {
        Self { repository }
    }

    pub async fn send(&self, notification: Notification) -> AppResult<Notification> {
        self.repository.create(notification).await
    }

    /// Fire-and-forget dispatch for state-transition hooks: a failed insert
    /// must never fail the transition that triggered it.
    pub async fn send_best_effort(&self, notification: Notification) {
        if let Err(err) = self.repository.create(notification).await {
            log::warn!("failed to dispatch notification: {}", err);
        }
    }

    pub async fn list_for_user(
        &self,
        uid: &str,
        role: UserRole,
        limit: i64,
    ) -> AppResult<Vec<Notification>> {
        self.repository.list_for_user(uid, role, limit).await
    }
}
