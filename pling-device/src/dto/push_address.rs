/// Opaque push address assigned to the device by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushAddress(pub String);
