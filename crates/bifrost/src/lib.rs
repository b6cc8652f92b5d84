//! # Bifrost
//!
//! Bridge direct-style handlers into three-argument middleware pipelines.
//!
//! Middleware hosts expect steps shaped as `(request, response, next)`.
//! Handlers are nicer to write in direct style: take a request, produce a
//! value, or fail. A [`Bridge`] adapts the latter to the former:
//!
//! ```
//! use bifrost::Bridge;
//! use bifrost_core::fixtures::{self, Emitted};
//!
//! # tokio_test::block_on(async {
//! // Direct style: derive a value from the request, or fail.
//! let bridge = Bridge::from_extractor(|id: u64| async move { Ok(Some(id * 2)) });
//!
//! // Pipeline style: the host drives it with (request, response, next).
//! let (channel, emitted) = fixtures::recording_channel();
//! let (next, _) = fixtures::recording_continuation();
//! bridge.run(21, channel, next).await;
//!
//! assert_eq!(*emitted.lock().expect("lock poisoned"), vec![Emitted::Sent(42)]);
//! # });
//! ```
//!
//! ## Stages
//!
//! Every invocation runs extraction, then exactly one of emission or
//! failure handling:
//!
//! | Outcome of extraction | No custom slot | Custom slot |
//! |-----------------------|----------------|-------------|
//! | `Ok(Some(value))` | `response.send(value)` | `respond(response, Some(value))` |
//! | `Ok(None)` | `response.end()` | `respond(response, None)` |
//! | `Err(error)` | `next.forward(error)` | `on_error(response, next, error)` |
//!
//! A failed default primitive (`send`/`end`) is routed to the failure row
//! as well. Failures *inside* a custom `respond`/`on_error` strategy are
//! deliberately not caught; they are the strategy author's responsibility.
//!
//! ## Configuration
//!
//! Bridges snapshot their configuration at construction. To share
//! defaults across many bridges, keep a caller-owned base
//! [`BridgeConfig`] and layer per-handler configs over it with
//! [`Bridge::with_base`] or [`BridgeConfig::merge_over`].

#![doc(html_root_url = "https://docs.rs/bifrost/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bridge;
mod config;

pub use bridge::Bridge;
pub use config::{BridgeConfig, ExtractFn, OnErrorFn, RespondFn};

// Re-export the host contract so most users need only this crate.
pub use bifrost_core::{
    BoxFuture, BridgeError, BridgeResult, Continuation, PipelineStep, ResponseChannel,
};
