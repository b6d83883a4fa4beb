use serde::Serialize;

/// Single message understood by the Expo push gateway.
///
/// One message targets exactly one push address. Batch endpoint
/// accepts an array of these.
#[derive(Debug, Clone, Serialize)]
pub struct PushMessage {
    pub to: String,
    pub sound: String,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
