use crate::dto::DeviceType;
use bson::{oid::ObjectId, DateTime, Uuid};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct PushTokenFindEntity {
    pub _id: ObjectId,
    pub token: String,
    pub user_id: Option<Uuid>,
    pub device_type: DeviceType,
    pub updated_at: DateTime,
}
