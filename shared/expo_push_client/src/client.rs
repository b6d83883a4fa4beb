use crate::{
    dto::{PushMessage, PushTicket},
    error::Error,
};
use serde::Deserialize;
use std::time::Duration;

pub const EXPO_PUSH_API_URL: &str = "https://exp.host/--/api/v2/push/send";

pub struct ExpoPushClientConfig {
    pub url: String,
    pub request_timeout: Duration,
}

/// Thin HTTP client for the Expo push gateway batch endpoint.
pub struct ExpoPushClient {
    client: reqwest::Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    data: Vec<PushTicket>,
}

impl ExpoPushClient {
    pub fn new(config: ExpoPushClientConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            url: config.url,
        })
    }

    /// Sends batch of messages and returns one ticket per message,
    /// in the same order.
    pub async fn send(&self, messages: &[PushMessage]) -> Result<Vec<PushTicket>, Error> {
        tracing::debug!(messages_count = messages.len(), "sending push messages");

        let response = self
            .client
            .post(&self.url)
            .json(messages)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UnexpectedStatus(status));
        }

        let response = response.json::<SendResponse>().await?;
        if response.data.len() != messages.len() {
            return Err(Error::TicketCountMismatch {
                sent: messages.len(),
                received: response.data.len(),
            });
        }

        tracing::debug!("push messages sent");

        Ok(response.data)
    }
}
