use crate::{dto::DeviceType, repository::entity::PushTokenFindEntity};
use bson::oid::ObjectId;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct PushToken {
    pub _id: ObjectId,

    pub token: String,

    pub user_id: Option<Uuid>,
    pub device_type: DeviceType,

    pub updated_at: OffsetDateTime,
}

impl From<PushTokenFindEntity> for PushToken {
    fn from(value: PushTokenFindEntity) -> Self {
        Self {
            _id: value._id,
            token: value.token,
            user_id: value.user_id.map(Uuid::from),
            device_type: value.device_type,
            updated_at: value.updated_at.into(),
        }
    }
}
