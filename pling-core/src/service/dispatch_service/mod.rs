mod dispatch_service;
mod dispatch_service_impl;
mod expo_push_gateway;
mod push_gateway;

pub use dispatch_service::*;
pub use dispatch_service_impl::*;
pub use expo_push_gateway::*;
pub use push_gateway::*;
