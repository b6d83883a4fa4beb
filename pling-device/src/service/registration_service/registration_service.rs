use crate::dto::PushAddress;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    ///
    /// Walks the device through push registration. Failures are reported
    /// through the [ErrorReporter](crate::reporter::ErrorReporter) rather
    /// than returned.
    ///
    /// ### Returns
    /// Push address of the device, or [None] when the device cannot
    /// receive pushes.
    ///
    async fn register_for_push(&self) -> Option<PushAddress>;
}
