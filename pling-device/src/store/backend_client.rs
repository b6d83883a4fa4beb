use super::{NotificationsStore, TokenStore};
use crate::{
    dto::{DeviceType, PushAddress},
    error::Error,
};
use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

pub struct BackendClientConfig {
    pub base_url: String,
}

/// [TokenStore] and [NotificationsStore] backed by the core HTTP API.
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: BackendClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url,
        }
    }
}

#[async_trait]
impl TokenStore for BackendClient {
    async fn upsert_token(
        &self,
        address: &PushAddress,
        user_id: Option<Uuid>,
        device_type: DeviceType,
    ) -> Result<(), Error> {
        let url = format!("{}/api/v1/tokens", self.base_url);
        tracing::debug!(url, "upserting push token");

        let response = self
            .client
            .put(url)
            .json(&UpsertTokenBody {
                token: &address.0,
                user_id,
                device_type,
            })
            .send()
            .await?;

        let status = response.status();
        match status.is_success() {
            true => Ok(()),
            false => Err(Error::BackendStatus(status)),
        }
    }
}

#[async_trait]
impl NotificationsStore for BackendClient {
    async fn create_notification(
        &self,
        title: &str,
        message: &str,
        user_id: Option<Uuid>,
    ) -> Result<(), Error> {
        let url = format!("{}/api/v1/notifications", self.base_url);
        tracing::debug!(url, "creating notification");

        let response = self
            .client
            .post(url)
            .json(&CreateNotificationBody {
                title,
                message,
                user_id,
            })
            .send()
            .await?;

        let status = response.status();
        match status.is_success() {
            true => Ok(()),
            false => Err(Error::BackendStatus(status)),
        }
    }
}

#[derive(Serialize)]
struct UpsertTokenBody<'a> {
    token: &'a str,
    user_id: Option<Uuid>,
    device_type: DeviceType,
}

#[derive(Serialize)]
struct CreateNotificationBody<'a> {
    title: &'a str,
    message: &'a str,
    user_id: Option<Uuid>,
}
