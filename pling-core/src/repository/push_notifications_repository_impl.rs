use super::{
    dto::{InsertedNotification, Notification},
    entity::{NotificationFindEntity, NotificationInsertEntity},
    error::Error,
    push_notifications_repository::PushNotificationsRepository,
};
use crate::dto::NotificationStatus;
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use mongodb::{error::ErrorKind, Database};
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

const PUSH_NOTIFICATIONS: &str = "push_notifications";

pub struct PushNotificationsRepositoryImpl {
    database: Database,
}

impl PushNotificationsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        tracing::debug!(collection = PUSH_NOTIFICATIONS, "creating collection");
        database.create_collection(PUSH_NOTIFICATIONS).await?;

        Ok(Self { database })
    }
}

#[async_trait]
impl PushNotificationsRepository for PushNotificationsRepositoryImpl {
    async fn insert(
        &self,
        title: &str,
        message: &str,
        user_id: Option<Uuid>,
        created_at: OffsetDateTime,
    ) -> Result<InsertedNotification, Error> {
        let insert_entity = NotificationInsertEntity {
            title,
            message,
            user_id: user_id.map(bson::Uuid::from),
            status: NotificationStatus::Pending,
            created_at: DateTime::from(created_at),
            sent_at: None,
        };

        let insert_result = self
            .database
            .collection::<NotificationInsertEntity>(PUSH_NOTIFICATIONS)
            .insert_one(&insert_entity)
            .await?;

        let Bson::ObjectId(id) = insert_result.inserted_id else {
            tracing::error!("invalid type of inserted '_id'");
            return Err(Error::Mongo(
                ErrorKind::Custom(Arc::new("invalid type of inserted '_id'")).into(),
            ));
        };

        Ok(InsertedNotification { id, created_at })
    }

    async fn update_status(
        &self,
        id: ObjectId,
        status: NotificationStatus,
        sent_at: OffsetDateTime,
    ) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(PUSH_NOTIFICATIONS)
            .update_one(
                doc! {
                    "_id": id,
                    "status": NotificationStatus::Pending.as_ref(),
                },
                doc! {
                    "$set": {
                        "status": status.as_ref(),
                        "sent_at": Some(DateTime::from(sent_at)),
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Notification>, Error> {
        let notification = self
            .database
            .collection::<NotificationFindEntity>(PUSH_NOTIFICATIONS)
            .find_one(doc! {
                "_id": id,
            })
            .await?
            .map(Notification::from);

        Ok(notification)
    }
}
