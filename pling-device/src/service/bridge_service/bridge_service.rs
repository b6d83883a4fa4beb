use crate::{
    bridge::{InboundMessage, OutboundMessage},
    dto::PushAddress,
};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BridgeService: Send + Sync {
    ///
    /// Parses and handles a raw message from the application shell.
    ///
    /// ### Returns
    /// Reply to post back to the shell, if the message warrants one.
    ///
    async fn handle_raw(&self, raw: &str) -> Option<OutboundMessage>;

    async fn handle(&self, message: InboundMessage) -> Option<OutboundMessage>;

    /// Builds the message announcing a completed push registration.
    fn announce_registration(&self, address: &PushAddress) -> OutboundMessage;

    /// Builds the message asking the shell for the current user.
    fn request_user_info(&self) -> OutboundMessage;
}
