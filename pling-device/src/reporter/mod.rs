mod error_reporter;
mod tracing_reporter;

pub use error_reporter::*;
pub use tracing_reporter::*;
