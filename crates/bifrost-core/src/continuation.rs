//! Host error continuation.
//!
//! The [`Continuation`] wraps the host-provided callable that forwards an
//! error to the next error-handling stage of the pipeline. Forwarding
//! consumes the continuation, so a single invocation can forward at most
//! once.

use crate::error::BridgeError;

/// A single-shot callable that forwards an error to the next
/// error-handling stage in the host pipeline.
///
/// The bridge forwards through this channel exactly once when no custom
/// failure strategy is configured. A custom failure strategy receives the
/// continuation instead and may forward through it itself, or drop it and
/// emit its own error response.
///
/// # Example
///
/// ```
/// use bifrost_core::{BridgeError, Continuation};
///
/// let next = Continuation::new(|error| {
///     eprintln!("upstream error handler got: {error}");
/// });
///
/// next.forward(BridgeError::extraction("boom"));
/// ```
pub struct Continuation {
    inner: Box<dyn FnOnce(BridgeError) + Send + 'static>,
}

impl Continuation {
    /// Wraps a host error-forwarding closure.
    #[must_use]
    pub fn new<F>(forward: F) -> Self
    where
        F: FnOnce(BridgeError) + Send + 'static,
    {
        Self {
            inner: Box::new(forward),
        }
    }

    /// Forwards the error to the next error-handling stage.
    ///
    /// This consumes `self` so the error channel can only be used once.
    pub fn forward(self, error: BridgeError) {
        (self.inner)(error);
    }
}

impl std::fmt::Debug for Continuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Continuation").finish_non_exhaustive()
    }
}
