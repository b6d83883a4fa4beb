use super::RegistrationService;
use crate::{
    dto::{ChannelConfig, DeviceType, PermissionStatus, PushAddress},
    platform::{DeviceInfo, NotificationCenter},
    reporter::{ErrorKind, ErrorReporter},
    store::TokenStore,
    IdentityProvider,
};
use async_trait::async_trait;
use std::sync::Arc;

pub struct RegistrationServiceImpl {
    notification_center: Arc<dyn NotificationCenter>,
    device_info: Arc<dyn DeviceInfo>,
    identity_provider: Arc<dyn IdentityProvider>,
    token_store: Arc<dyn TokenStore>,
    error_reporter: Arc<dyn ErrorReporter>,
}

impl RegistrationServiceImpl {
    pub fn new(
        notification_center: Arc<dyn NotificationCenter>,
        device_info: Arc<dyn DeviceInfo>,
        identity_provider: Arc<dyn IdentityProvider>,
        token_store: Arc<dyn TokenStore>,
        error_reporter: Arc<dyn ErrorReporter>,
    ) -> Self {
        Self {
            notification_center,
            device_info,
            identity_provider,
            token_store,
            error_reporter,
        }
    }
}

#[async_trait]
impl RegistrationService for RegistrationServiceImpl {
    async fn register_for_push(&self) -> Option<PushAddress> {
        // the channel must exist before any permission prompt on android
        if self.device_info.device_type() == DeviceType::Android {
            self.notification_center
                .configure_channel(ChannelConfig::default_channel())
                .await;
        }

        if !self.device_info.is_physical_device() {
            self.error_reporter.report(
                ErrorKind::DeviceNotCapable,
                "push registration requires a physical device",
            );
            return None;
        }

        let mut status = self.notification_center.permissions().await;
        if status != PermissionStatus::Granted {
            status = self.notification_center.request_permissions().await;
        }
        if status != PermissionStatus::Granted {
            self.error_reporter.report(
                ErrorKind::PermissionDenied,
                "notification permissions not granted",
            );
            return None;
        }

        let address = match self.notification_center.push_address().await {
            Ok(address) => address,
            Err(err) => {
                self.error_reporter
                    .report(ErrorKind::PushAddressUnavailable, &err.to_string());
                return None;
            }
        };

        let user_id = self.identity_provider.current_user_id().await;

        // registration is still usable locally when the backend save fails
        if let Err(err) = self
            .token_store
            .upsert_token(&address, user_id, self.device_info.device_type())
            .await
        {
            self.error_reporter
                .report(ErrorKind::TokenSaveFailed, &err.to_string());
        }

        tracing::info!("device registered for push notifications");

        Some(address)
    }
}
