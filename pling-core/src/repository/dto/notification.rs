use crate::{dto::NotificationStatus, repository::entity::NotificationFindEntity};
use bson::oid::ObjectId;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct Notification {
    pub id: ObjectId,
    pub title: String,
    pub message: String,
    pub user_id: Option<Uuid>,
    pub status: NotificationStatus,
    pub created_at: OffsetDateTime,
    pub sent_at: Option<OffsetDateTime>,
}

impl From<NotificationFindEntity> for Notification {
    fn from(value: NotificationFindEntity) -> Self {
        Self {
            id: value._id,
            title: value.title,
            message: value.message,
            user_id: value.user_id.map(Uuid::from),
            status: value.status,
            created_at: value.created_at.into(),
            sent_at: value.sent_at.map(OffsetDateTime::from),
        }
    }
}
