use super::{dto::PushToken, error::Error};
use crate::dto::DeviceType;
use axum::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushTokensRepository: Send + Sync {
    ///
    /// Registers push token or updates ownership of an already
    /// registered one
    ///
    async fn upsert(
        &self,
        token: &str,
        user_id: Option<Uuid>,
        device_type: DeviceType,
        updated_at: OffsetDateTime,
    ) -> Result<(), Error>;

    ///
    /// Finds all tokens registered for the user.
    /// Passing None finds tokens of anonymous registrations only
    ///
    async fn find_by_user(&self, user_id: Option<Uuid>) -> Result<Vec<PushToken>, Error>;
}
