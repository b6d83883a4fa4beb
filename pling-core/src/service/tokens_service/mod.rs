mod tokens_service;
mod tokens_service_impl;

pub use tokens_service::*;
pub use tokens_service_impl::*;
