use serde::Deserialize;

/// Per message receipt returned by the gateway.
///
/// Tickets come back in the same order as the messages that were sent.
#[derive(Debug, Clone, Deserialize)]
pub struct PushTicket {
    pub status: PushTicketStatus,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PushTicketStatus {
    Ok,
    Error,
}
