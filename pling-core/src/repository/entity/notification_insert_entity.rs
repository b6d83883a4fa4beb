use crate::dto::NotificationStatus;
use bson::{DateTime, Uuid};
use serde::Serialize;

#[derive(Serialize)]
pub struct NotificationInsertEntity<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub user_id: Option<Uuid>,
    pub status: NotificationStatus,
    pub created_at: DateTime,
    pub sent_at: Option<DateTime>,
}
