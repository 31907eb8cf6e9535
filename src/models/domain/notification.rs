use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::user::UserRole;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A fire-and-forget message to a role or an explicit recipient list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_role: Option<UserRole>,
    #[serde(default)]
    pub target_users: Vec<String>,
    pub sender_id: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        title: &str,
        message: &str,
        kind: NotificationKind,
        sender_id: &str,
        target_role: Option<UserRole>,
        target_users: Vec<String>,
    ) -> Self {
        Notification {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            message: message.to_string(),
            kind,
            target_role,
            target_users,
            sender_id: sender_id.to_string(),
            read: false,
            created_at: Utc::now(),
        }
    }
}
