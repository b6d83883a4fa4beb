use super::PushGateway;
use axum::async_trait;
use expo_push_client::{ExpoPushClient, PushMessage, PushTicket};

pub struct ExpoPushGateway {
    client: ExpoPushClient,
}

impl ExpoPushGateway {
    pub fn new(client: ExpoPushClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PushGateway for ExpoPushGateway {
    async fn send(
        &self,
        messages: Vec<PushMessage>,
    ) -> Result<Vec<PushTicket>, expo_push_client::Error> {
        self.client.send(&messages).await
    }
}
