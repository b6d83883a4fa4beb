use super::BridgeService;
use crate::{
    bridge::{self, InboundMessage, OutboundMessage, PushNotificationData},
    dto::PushAddress,
    reporter::{ErrorKind, ErrorReporter},
    service::{notifications_service::NotificationsService, registration_service::RegistrationService},
};
use async_trait::async_trait;
use std::sync::Arc;

const FALLBACK_TITLE: &str = "Notification";
const FALLBACK_MESSAGE: &str = "Push notification received!";

pub struct BridgeServiceImpl {
    registration_service: Arc<dyn RegistrationService>,
    notifications_service: Arc<dyn NotificationsService>,
    error_reporter: Arc<dyn ErrorReporter>,
}

impl BridgeServiceImpl {
    pub fn new(
        registration_service: Arc<dyn RegistrationService>,
        notifications_service: Arc<dyn NotificationsService>,
        error_reporter: Arc<dyn ErrorReporter>,
    ) -> Self {
        Self {
            registration_service,
            notifications_service,
            error_reporter,
        }
    }
}

#[async_trait]
impl BridgeService for BridgeServiceImpl {
    async fn handle_raw(&self, raw: &str) -> Option<OutboundMessage> {
        let message = match bridge::parse_inbound(raw) {
            Ok(message) => message,
            Err(err) => {
                self.error_reporter
                    .report(ErrorKind::BridgeMessageMalformed, &err.to_string());
                return None;
            }
        };

        self.handle(message).await
    }

    async fn handle(&self, message: InboundMessage) -> Option<OutboundMessage> {
        match message {
            InboundMessage::PushTokenRequest => {
                let address = self.registration_service.register_for_push().await;

                Some(OutboundMessage::PushToken {
                    token: address.map(|address| address.0),
                })
            }
            InboundMessage::PushNotification { data } => {
                let PushNotificationData { title, message } = data;
                let title = title.unwrap_or_else(|| FALLBACK_TITLE.to_string());
                let message = message.unwrap_or_else(|| FALLBACK_MESSAGE.to_string());

                self.notifications_service
                    .show_local_notification(&title, &message)
                    .await;

                None
            }
            InboundMessage::UserLogin => {
                tracing::info!("user logged in");
                None
            }
            InboundMessage::UserLogout => {
                tracing::info!("user logged out");
                None
            }
            InboundMessage::Unknown => {
                tracing::debug!("ignoring unknown bridge message");
                None
            }
        }
    }

    fn announce_registration(&self, address: &PushAddress) -> OutboundMessage {
        OutboundMessage::PushTokenRegistered {
            token: address.0.clone(),
        }
    }

    fn request_user_info(&self) -> OutboundMessage {
        OutboundMessage::RequestUserInfo
    }
}
