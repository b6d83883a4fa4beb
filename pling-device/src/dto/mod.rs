//!
//! Module with all dtos used by the device runtime.
//!

mod channel_config;
mod device_type;
mod handler_config;
mod local_notification;
mod permission_status;
mod push_address;

pub use channel_config::*;
pub use device_type::*;
pub use handler_config::*;
pub use local_notification::*;
pub use permission_status::*;
pub use push_address::*;
