use crate::dto::DeviceType;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct PushToken {
    pub token: String,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    pub device_type: DeviceType,
}
