//! # Bifrost Core
//!
//! Core contract types for the Bifrost handler bridge.
//!
//! This crate defines the surface a middleware host must provide for a
//! bridge to plug into its pipeline:
//!
//! - [`ResponseChannel`] - The host's response handle (send a value, or end
//!   with no body)
//! - [`Continuation`] - The host's single-shot error-forwarding callable
//! - [`PipelineStep`] - The three-argument `(request, response, next)` step
//!   shape that pipelines compose
//! - [`BridgeError`] - Failure taxonomy (extraction vs. emission origin)
//!
//! The bridge itself lives in the `bifrost` crate; this crate carries only
//! the contract so that hosts can depend on it without pulling in the
//! factory machinery.

#![doc(html_root_url = "https://docs.rs/bifrost-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod channel;
mod continuation;
mod error;
pub mod fixtures;
mod step;

pub use channel::ResponseChannel;
pub use continuation::Continuation;
pub use error::{BridgeError, BridgeResult};
pub use step::{BoxFuture, PipelineStep};
