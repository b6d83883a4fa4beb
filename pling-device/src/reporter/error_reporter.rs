use strum::AsRefStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    PermissionDenied,
    DeviceNotCapable,
    PushAddressUnavailable,
    TokenSaveFailed,
    NotificationCreateFailed,
    LocalDisplayFailed,
    BridgeMessageMalformed,
}

/// Sink for non-fatal failures of the device runtime.
///
/// Failures reported here never abort the flow that produced them.
#[cfg_attr(test, mockall::automock)]
pub trait ErrorReporter: Send + Sync {
    fn report(&self, kind: ErrorKind, context: &str);
}
