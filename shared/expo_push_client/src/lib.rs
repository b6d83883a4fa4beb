mod client;
mod dto;
mod error;

pub use client::{ExpoPushClient, ExpoPushClientConfig, EXPO_PUSH_API_URL};
pub use dto::{PushMessage, PushTicket, PushTicketStatus};
pub use error::Error;
