use super::NotificationsService;
use crate::{
    dto::{input, output},
    error::Error,
    repository::PushNotificationsRepository,
};
use axum::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;

pub struct NotificationsServiceImpl {
    repository: Arc<dyn PushNotificationsRepository>,
}

impl NotificationsServiceImpl {
    pub fn new(repository: Arc<dyn PushNotificationsRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl NotificationsService for NotificationsServiceImpl {
    ///
    /// Creates pending notification. Delivery happens when the insert
    /// trigger calls dispatch
    ///
    /// ### Returns
    /// [output::NotificationId] of the created notification
    ///
    /// ### Errors
    /// - [Error::Validation] when title or message is empty
    ///
    async fn create_notification(
        &self,
        notification: input::Notification,
    ) -> Result<output::NotificationId, Error> {
        if notification.title.is_empty() {
            return Err(Error::Validation("title cannot be empty"));
        }
        if notification.message.is_empty() {
            return Err(Error::Validation("message cannot be empty"));
        }

        tracing::info!("creating notification");

        let created_at = OffsetDateTime::now_utc();
        let inserted_notification = self
            .repository
            .insert(
                &notification.title,
                &notification.message,
                notification.user_id,
                created_at,
            )
            .await?;
        tracing::info!(id = %inserted_notification.id, "created notification");

        Ok(output::NotificationId {
            id: inserted_notification.id.to_hex(),
        })
    }
}
