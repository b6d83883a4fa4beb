mod bridge_service;
mod bridge_service_impl;

pub use bridge_service::*;
pub use bridge_service_impl::*;
