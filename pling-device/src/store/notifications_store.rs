use crate::error::Error;
use async_trait::async_trait;
use uuid::Uuid;

/// Records notifications created on the device.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsStore: Send + Sync {
    ///
    /// ### Errors
    /// - [Error::Backend] when the request does not reach the backend
    /// - [Error::BackendStatus] when the backend rejects the notification
    ///
    async fn create_notification(
        &self,
        title: &str,
        message: &str,
        user_id: Option<Uuid>,
    ) -> Result<(), Error>;
}
