//!
//! Device-side runtime of the push notification pipeline.
//!
//! Platform facilities (notification center, device info, identity) are
//! consumed through traits so the crate stays independent from any
//! concrete OS binding.
//!

pub mod bridge;
pub mod dto;
pub mod platform;
pub mod reporter;
pub mod service;
pub mod store;

mod error;
mod handler;
mod identity;

pub use error::Error;
pub use handler::init_notification_handler;
pub use identity::*;
