use super::{DispatchService, PushGateway};
use crate::{
    dto::{input, output, NotificationStatus},
    error::Error,
    repository::{self, PushNotificationsRepository, PushTokensRepository},
};
use axum::async_trait;
use bson::oid::ObjectId;
use expo_push_client::{PushMessage, PushTicketStatus};
use serde_json::json;
use std::sync::Arc;
use time::OffsetDateTime;

pub struct DispatchServiceImpl {
    tokens_repository: Arc<dyn PushTokensRepository>,
    notifications_repository: Arc<dyn PushNotificationsRepository>,
    push_gateway: Arc<dyn PushGateway>,
}

impl DispatchServiceImpl {
    pub fn new(
        tokens_repository: Arc<dyn PushTokensRepository>,
        notifications_repository: Arc<dyn PushNotificationsRepository>,
        push_gateway: Arc<dyn PushGateway>,
    ) -> Self {
        Self {
            tokens_repository,
            notifications_repository,
            push_gateway,
        }
    }

    async fn finalize(&self, id: ObjectId, status: NotificationStatus) -> Result<(), Error> {
        let sent_at = OffsetDateTime::now_utc();

        match self
            .notifications_repository
            .update_status(id, status, sent_at)
            .await
        {
            Ok(()) => Ok(()),
            Err(repository::Error::NoDocumentUpdated) => {
                let current_status = self
                    .notifications_repository
                    .find(id)
                    .await
                    .ok()
                    .flatten()
                    .map(|notification| notification.status);
                tracing::error!(%id, ?current_status, "notification is no longer pending");
                Err(Error::NotificationNotPending)
            }
            Err(err) => {
                // Messages already left through the gateway at this
                // point, the caller must not retry
                tracing::error!(%id, err = %err, "failed to persist notification status");
                Err(Error::Database(err))
            }
        }
    }
}

#[async_trait]
impl DispatchService for DispatchServiceImpl {
    ///
    /// Delivers pending notification to every device registered for
    /// its addressee and persists the final status
    ///
    /// ### Returns
    /// [output::DispatchOutcome] with the final notification status
    ///
    /// ### Errors
    /// - [Error::Validation] when record id is not a valid ObjectId
    /// - [Error::NotificationNotPending] when record is not pending
    /// - [Error::NoTokensForUser] when addressee has no registered devices,
    /// notification is marked failed
    /// - [Error::Gateway] when gateway call fails, notification stays pending
    ///
    async fn dispatch(
        &self,
        record: input::NotificationRecord,
    ) -> Result<output::DispatchOutcome, Error> {
        let id = ObjectId::parse_str(&record.id)
            .map_err(|_| Error::Validation("invalid notification id"))?;

        if record.status != NotificationStatus::Pending {
            return Err(Error::NotificationNotPending);
        }

        tracing::info!(%id, "dispatching notification");

        let tokens = self.tokens_repository.find_by_user(record.user_id).await?;
        if tokens.is_empty() {
            tracing::info!(%id, "no registered devices, marking notification failed");
            self.finalize(id, NotificationStatus::Failed).await?;
            return Err(Error::NoTokensForUser);
        }

        let messages = tokens
            .into_iter()
            .map(|token| PushMessage {
                to: token.token,
                sound: "default".to_string(),
                title: record.title.clone(),
                body: record.message.clone(),
                data: Some(json!({ "notification_id": record.id })),
            })
            .collect();

        let tickets = self.push_gateway.send(messages).await?;

        let any_rejected = tickets
            .iter()
            .any(|ticket| ticket.status == PushTicketStatus::Error);
        let status = match any_rejected {
            true => NotificationStatus::Failed,
            false => NotificationStatus::Sent,
        };

        self.finalize(id, status).await?;

        tracing::info!(%id, status = status.as_ref(), "dispatched notification");

        Ok(output::DispatchOutcome { status })
    }
}
