use bson::oid::ObjectId;
use time::OffsetDateTime;

pub struct InsertedNotification {
    pub id: ObjectId,
    pub created_at: OffsetDateTime,
}
