pub mod dispatch_service;
pub mod notifications_service;
pub mod tokens_service;
