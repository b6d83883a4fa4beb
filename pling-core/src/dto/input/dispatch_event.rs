use crate::dto::NotificationStatus;
use serde::Deserialize;
use uuid::Uuid;

/// Webhook payload produced when a notification row is inserted.
#[derive(Debug, Deserialize)]
pub struct DispatchEvent {
    pub record: NotificationRecord,
}

#[derive(Debug, Deserialize)]
pub struct NotificationRecord {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    pub status: NotificationStatus,
}
