mod dispatch_outcome;
mod notification_id;

pub use dispatch_outcome::*;
pub use notification_id::*;
