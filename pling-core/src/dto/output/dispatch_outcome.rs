use crate::dto::NotificationStatus;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DispatchOutcome {
    pub status: NotificationStatus,
}
