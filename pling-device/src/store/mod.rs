mod backend_client;
mod notifications_store;
mod token_store;

pub use backend_client::*;
pub use notifications_store::*;
pub use token_store::*;
