mod dto;
mod entity;
mod error;
mod push_notifications_repository;
mod push_notifications_repository_impl;
mod push_tokens_repository;
mod push_tokens_repository_impl;

pub use dto::*;
pub use error::*;
pub use push_notifications_repository::*;
pub use push_notifications_repository_impl::*;
pub use push_tokens_repository::*;
pub use push_tokens_repository_impl::*;
