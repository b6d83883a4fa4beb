mod inserted_notification;
mod notification;
mod push_token;

pub use inserted_notification::*;
pub use notification::*;
pub use push_token::*;
