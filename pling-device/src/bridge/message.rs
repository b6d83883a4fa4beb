use crate::error::Error;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum InboundMessage {
    #[serde(rename = "PUSH_TOKEN_REQUEST")]
    PushTokenRequest,

    #[serde(rename = "PUSH_NOTIFICATION")]
    PushNotification {
        #[serde(default)]
        data: PushNotificationData,
    },

    #[serde(rename = "USER_LOGIN")]
    UserLogin,

    #[serde(rename = "USER_LOGOUT")]
    UserLogout,

    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PushNotificationData {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum OutboundMessage {
    #[serde(rename = "PUSH_TOKEN_REGISTERED")]
    PushTokenRegistered { token: String },

    #[serde(rename = "PUSH_TOKEN")]
    PushToken {
        #[serde(skip_serializing_if = "Option::is_none")]
        token: Option<String>,
    },

    #[serde(rename = "REQUEST_USER_INFO")]
    RequestUserInfo,
}

///
/// ### Errors
/// - [Error::Bridge] when the payload is not a valid protocol message
///
pub fn parse_inbound(raw: &str) -> Result<InboundMessage, Error> {
    let message = serde_json::from_str(raw)?;

    Ok(message)
}

///
/// ### Errors
/// - [Error::Bridge] when the message cannot be serialized
///
pub fn serialize_outbound(message: &OutboundMessage) -> Result<String, Error> {
    let serialized = serde_json::to_string(message)?;

    Ok(serialized)
}
