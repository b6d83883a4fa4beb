//!
//! Module with all dtos that are passed between server and users
//!

mod device_type;
mod notification_status;

pub mod input;
pub mod output;

pub use device_type::*;
pub use notification_status::*;
