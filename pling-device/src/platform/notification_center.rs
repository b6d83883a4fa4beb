use crate::{
    dto::{ChannelConfig, HandlerConfig, LocalNotification, PermissionStatus, PushAddress},
    error::Error,
};
use async_trait::async_trait;

/// OS notification facility consumed by the device runtime.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationCenter: Send + Sync {
    /// Installs foreground presentation behaviour for incoming notifications.
    fn set_handler(&self, config: HandlerConfig);

    async fn permissions(&self) -> PermissionStatus;

    async fn request_permissions(&self) -> PermissionStatus;

    ///
    /// ### Errors
    /// - [Error::PushAddress] when the OS cannot produce a push address
    ///
    async fn push_address(&self) -> Result<PushAddress, Error>;

    async fn configure_channel(&self, config: ChannelConfig);

    ///
    /// ### Errors
    /// - [Error::Platform] when the notification cannot be scheduled
    ///
    async fn present(&self, notification: LocalNotification) -> Result<(), Error>;
}
