//! The bridge itself.
//!
//! A [`Bridge`] turns a direct-style handler (take a request, produce a
//! value or fail) into a [`PipelineStep`] the host can compose. Each
//! invocation runs three stages in a fixed order:
//!
//! 1. **Extraction** - await the configured extraction capability, or
//!    produce `None` if no capability is configured.
//! 2. **Emission** - hand the produced value to the custom emission
//!    strategy if one is configured; otherwise `send` a present value, or
//!    `end` the response when nothing was produced.
//! 3. **Failure** - on an extraction failure or a failed default
//!    primitive, hand `(response, continuation, error)` to the custom
//!    failure strategy if one is configured; otherwise forward the error
//!    through the continuation.
//!
//! Emission begins only after extraction has fully resolved, and exactly
//! one of {emission, failure} runs per invocation. The failure boundary
//! wraps only extraction and the default primitives: a panic inside a
//! caller-supplied `respond` or `on_error` strategy is not caught, which
//! keeps capability failures the capability author's responsibility
//! instead of silently swallowing them.

use crate::config::BridgeConfig;
use bifrost_core::{BoxFuture, BridgeResult, Continuation, PipelineStep, ResponseChannel};
use std::future::Future;
use tracing::{debug, trace};

/// A pipeline step that runs a direct-style handler.
///
/// Built from a [`BridgeConfig`] (or one of the shorthand constructors),
/// the bridge snapshots its configuration immutably at construction; every
/// invocation reads the same resolved slots. Cloning a bridge is cheap
/// (the capabilities are reference-counted).
///
/// # Example
///
/// ```
/// use bifrost::Bridge;
/// use bifrost_core::fixtures::{self, Emitted};
///
/// # tokio_test::block_on(async {
/// let bridge = Bridge::from_extractor(|user: String| async move {
///     Ok(Some(format!("hello {user}")))
/// });
///
/// let (channel, emitted) = fixtures::recording_channel();
/// let (next, _) = fixtures::recording_continuation();
/// bridge.run("ada".to_string(), channel, next).await;
///
/// assert_eq!(
///     *emitted.lock().expect("lock poisoned"),
///     vec![Emitted::Sent("hello ada".to_string())],
/// );
/// # });
/// ```
pub struct Bridge<Req, Res>
where
    Res: ResponseChannel,
{
    config: BridgeConfig<Req, Res>,
}

impl<Req, Res> Bridge<Req, Res>
where
    Req: Send + 'static,
    Res: ResponseChannel + Send + 'static,
{
    /// Builds a bridge from a full configuration record.
    #[must_use]
    pub fn from_config(config: BridgeConfig<Req, Res>) -> Self {
        Self { config }
    }

    /// Builds a bridge from a configuration layered over a caller-owned
    /// base configuration.
    ///
    /// Equivalent to `from_config(config.merge_over(base))`; the base is
    /// snapshotted here, so mutating it afterwards does not affect this
    /// bridge.
    #[must_use]
    pub fn with_base(config: BridgeConfig<Req, Res>, base: &BridgeConfig<Req, Res>) -> Self {
        Self::from_config(config.merge_over(base))
    }

    /// Shorthand: builds a bridge whose only capability is the given
    /// extraction function.
    #[must_use]
    pub fn from_extractor<F, Fut>(extract: F) -> Self
    where
        F: Fn(Req) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = BridgeResult<Option<Res::Value>>> + Send + 'static,
    {
        Self::from_config(BridgeConfig::new().extract(extract))
    }

    /// Builds a bridge with no capabilities at all.
    ///
    /// Every invocation ends the response with no body.
    #[must_use]
    pub fn passthrough() -> Self {
        Self::from_config(BridgeConfig::new())
    }

    /// Returns the resolved configuration this bridge was built with.
    #[must_use]
    pub const fn config(&self) -> &BridgeConfig<Req, Res> {
        &self.config
    }

    /// Runs one invocation of this step.
    ///
    /// Exposed directly so hosts and tests can drive a bridge without
    /// boxing through [`PipelineStep`].
    pub async fn run(&self, request: Req, mut response: Res, next: Continuation) {
        if let Err(error) = self.extract_then_emit(request, &mut response).await {
            if let Some(on_error) = &self.config.on_error {
                trace!("dispatching failure to custom strategy");
                on_error(&mut response, next, error);
            } else {
                debug!(error = %error, "forwarding failure to continuation");
                next.forward(error);
            }
        }
    }

    /// The bridge's failure-capture boundary: extraction followed by
    /// emission. Custom strategy dispatch stays outside it.
    async fn extract_then_emit(&self, request: Req, response: &mut Res) -> BridgeResult<()> {
        let produced = match &self.config.extract {
            Some(extract) => extract(request).await?,
            None => None,
        };
        trace!(present = produced.is_some(), "extraction resolved");

        if let Some(respond) = &self.config.respond {
            respond(response, produced);
            return Ok(());
        }
        match produced {
            Some(value) => response.send(value),
            None => response.end(),
        }
    }
}

impl<Req, Res> Clone for Bridge<Req, Res>
where
    Res: ResponseChannel,
{
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
        }
    }
}

impl<Req, Res> std::fmt::Debug for Bridge<Req, Res>
where
    Res: ResponseChannel,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bridge").field("config", &self.config).finish()
    }
}

impl<Req, Res> PipelineStep<Req, Res> for Bridge<Req, Res>
where
    Req: Send + 'static,
    Res: ResponseChannel + Send + 'static,
{
    fn call(&self, request: Req, response: Res, next: Continuation) -> BoxFuture<'static, ()> {
        let bridge = self.clone();
        Box::pin(async move { bridge.run(request, response, next).await })
    }
}
