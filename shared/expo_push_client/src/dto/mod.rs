mod push_message;
mod push_ticket;

pub use push_message::*;
pub use push_ticket::*;
