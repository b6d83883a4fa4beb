use axum::async_trait;
use expo_push_client::{PushMessage, PushTicket};

///
/// Gateway delivering push messages to devices
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushGateway: Send + Sync {
    async fn send(
        &self,
        messages: Vec<PushMessage>,
    ) -> Result<Vec<PushTicket>, expo_push_client::Error>;
}
