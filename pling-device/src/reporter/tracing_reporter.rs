use super::{ErrorKind, ErrorReporter};

/// [ErrorReporter] that forwards every report to the tracing subscriber.
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, kind: ErrorKind, context: &str) {
        tracing::warn!(kind = kind.as_ref(), context, "device runtime failure");
    }
}
