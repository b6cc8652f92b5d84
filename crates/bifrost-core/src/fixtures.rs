//! Test fixtures for Bifrost development and testing.
//!
//! This module provides recording doubles for the host contract so that
//! bridge behavior can be asserted without a real middleware host: a
//! [`RecordingChannel`] that logs every response primitive it is asked to
//! run, and a continuation whose forwarded errors land in a shared log.
//!
//! # Example
//!
//! ```
//! use bifrost_core::fixtures;
//! use bifrost_core::ResponseChannel;
//!
//! let (mut channel, emitted) = fixtures::recording_channel::<u32>();
//! channel.send(42).expect("send should succeed");
//!
//! assert_eq!(
//!     *emitted.lock().expect("lock poisoned"),
//!     vec![fixtures::Emitted::Sent(42)],
//! );
//! ```

use crate::channel::ResponseChannel;
use crate::continuation::Continuation;
use crate::error::{BridgeError, BridgeResult};
use std::sync::{Arc, Mutex};

/// One response primitive observed by a [`RecordingChannel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emitted<V> {
    /// `send` was invoked with this value.
    Sent(V),
    /// `end` was invoked.
    Ended,
}

/// Shared log of the primitives a [`RecordingChannel`] has run.
pub type EmissionLog<V> = Arc<Mutex<Vec<Emitted<V>>>>;

/// Shared log of the errors a recording continuation has forwarded.
pub type ForwardLog = Arc<Mutex<Vec<BridgeError>>>;

/// A response channel double that records every primitive invocation.
///
/// Built with [`recording_channel`] (primitives always succeed) or
/// [`failing_channel`] (primitives fail without recording, to exercise the
/// emission-failure path).
#[derive(Debug)]
pub struct RecordingChannel<V> {
    emitted: EmissionLog<V>,
    failure: Option<String>,
}

impl<V: Send + 'static> ResponseChannel for RecordingChannel<V> {
    type Value = V;

    fn send(&mut self, value: V) -> BridgeResult<()> {
        if let Some(message) = &self.failure {
            return Err(BridgeError::emission(message.clone()));
        }
        self.emitted
            .lock()
            .expect("lock poisoned")
            .push(Emitted::Sent(value));
        Ok(())
    }

    fn end(&mut self) -> BridgeResult<()> {
        if let Some(message) = &self.failure {
            return Err(BridgeError::emission(message.clone()));
        }
        self.emitted
            .lock()
            .expect("lock poisoned")
            .push(Emitted::Ended);
        Ok(())
    }
}

/// Creates a recording channel whose primitives always succeed, together
/// with the shared log of what was emitted.
#[must_use]
pub fn recording_channel<V>() -> (RecordingChannel<V>, EmissionLog<V>) {
    let emitted: EmissionLog<V> = Arc::new(Mutex::new(Vec::new()));
    let channel = RecordingChannel {
        emitted: Arc::clone(&emitted),
        failure: None,
    };
    (channel, emitted)
}

/// Creates a channel whose primitives always fail with the given message,
/// together with the (never-written) emission log.
#[must_use]
pub fn failing_channel<V>(message: &str) -> (RecordingChannel<V>, EmissionLog<V>) {
    let emitted: EmissionLog<V> = Arc::new(Mutex::new(Vec::new()));
    let channel = RecordingChannel {
        emitted: Arc::clone(&emitted),
        failure: Some(message.to_string()),
    };
    (channel, emitted)
}

/// Creates a continuation that appends forwarded errors to a shared log.
#[must_use]
pub fn recording_continuation() -> (Continuation, ForwardLog) {
    let forwarded: ForwardLog = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&forwarded);
    let next = Continuation::new(move |error| {
        sink.lock().expect("lock poisoned").push(error);
    });
    (next, forwarded)
}
