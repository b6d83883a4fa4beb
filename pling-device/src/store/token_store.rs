use crate::{
    dto::{DeviceType, PushAddress},
    error::Error,
};
use async_trait::async_trait;
use uuid::Uuid;

/// Persists the device push address for later dispatches.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenStore: Send + Sync {
    ///
    /// ### Errors
    /// - [Error::Backend] when the request does not reach the backend
    /// - [Error::BackendStatus] when the backend rejects the address
    ///
    async fn upsert_token(
        &self,
        address: &PushAddress,
        user_id: Option<Uuid>,
        device_type: DeviceType,
    ) -> Result<(), Error>;
}
