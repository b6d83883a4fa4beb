mod dispatch_event;
mod notification;
mod push_token;

pub use dispatch_event::*;
pub use notification::*;
pub use push_token::*;
