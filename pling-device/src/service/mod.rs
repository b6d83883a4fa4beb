pub mod bridge_service;
pub mod notifications_service;
pub mod registration_service;
