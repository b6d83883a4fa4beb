use super::{
    dto::{InsertedNotification, Notification},
    error::Error,
};
use crate::dto::NotificationStatus;
use axum::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushNotificationsRepository: Send + Sync {
    ///
    /// Inserts new notification with status pending
    ///
    async fn insert(
        &self,
        title: &str,
        message: &str,
        user_id: Option<Uuid>,
        created_at: OffsetDateTime,
    ) -> Result<InsertedNotification, Error>;

    ///
    /// Moves pending notification into its final status
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when
    ///     - notification does not exist
    ///     - notification is not pending
    ///
    async fn update_status(
        &self,
        id: ObjectId,
        status: NotificationStatus,
        sent_at: OffsetDateTime,
    ) -> Result<(), Error>;

    ///
    /// Finds one notification
    ///
    async fn find(&self, id: ObjectId) -> Result<Option<Notification>, Error>;
}
