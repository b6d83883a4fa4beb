use super::{
    entity::PushTokenFindEntity, error::Error, push_tokens_repository::PushTokensRepository,
    PushToken,
};
use crate::dto::DeviceType;
use axum::async_trait;
use bson::{doc, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{options::IndexOptions, Database, IndexModel};
use time::OffsetDateTime;
use uuid::Uuid;

const PUSH_TOKENS: &str = "push_tokens";
const INDEX_NAME_UNIQUE_TOKEN: &str = "unique_token";

pub struct PushTokensRepositoryImpl {
    database: Database,
}

impl PushTokensRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        tracing::debug!(collection = PUSH_TOKENS, "creating collection");
        database.create_collection(PUSH_TOKENS).await?;

        let collection = database.collection::<Document>(PUSH_TOKENS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_UNIQUE_TOKEN.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "token": 1,
                        })
                        .options(
                            IndexOptions::builder()
                                .name(INDEX_NAME_UNIQUE_TOKEN.to_string())
                                .unique(true)
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = PUSH_TOKENS,
                index = INDEX_NAME_UNIQUE_TOKEN,
                "created index"
            );
        }

        Ok(Self { database })
    }
}

#[async_trait]
impl PushTokensRepository for PushTokensRepositoryImpl {
    async fn upsert(
        &self,
        token: &str,
        user_id: Option<Uuid>,
        device_type: DeviceType,
        updated_at: OffsetDateTime,
    ) -> Result<(), Error> {
        let user_id = user_id.map(bson::Uuid::from);

        self.database
            .collection::<Document>(PUSH_TOKENS)
            .update_one(
                doc! {
                    "token": token,
                },
                doc! {
                    "$set": {
                        "user_id": user_id,
                        "device_type": device_type.as_ref(),
                        "updated_at": DateTime::from(updated_at),
                    }
                },
            )
            .upsert(true)
            .await?;

        Ok(())
    }

    async fn find_by_user(&self, user_id: Option<Uuid>) -> Result<Vec<PushToken>, Error> {
        let user_id = user_id.map(bson::Uuid::from);

        let tokens = self
            .database
            .collection::<PushTokenFindEntity>(PUSH_TOKENS)
            .find(doc! {
                "user_id": user_id,
            })
            .await?
            .map_ok(PushToken::from)
            .try_collect()
            .await?;

        Ok(tokens)
    }
}
