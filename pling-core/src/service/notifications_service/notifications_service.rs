use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    async fn create_notification(
        &self,
        notification: input::Notification,
    ) -> Result<output::NotificationId, Error>;
}
