use crate::dto::NotificationStatus;
use bson::{oid::ObjectId, DateTime, Uuid};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct NotificationFindEntity {
    pub _id: ObjectId,
    pub title: String,
    pub message: String,
    pub user_id: Option<Uuid>,
    pub status: NotificationStatus,
    pub created_at: DateTime,
    pub sent_at: Option<DateTime>,
}
