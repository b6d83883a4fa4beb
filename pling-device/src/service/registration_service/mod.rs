mod registration_service;
mod registration_service_impl;

pub use registration_service::*;
pub use registration_service_impl::*;
