//! Bridge configuration.
//!
//! A [`BridgeConfig`] carries up to three optional capability slots:
//!
//! - `extract` - derive a value from the incoming request (async, fallible)
//! - `respond` - take full control of response emission
//! - `on_error` - take full control of failure handling
//!
//! Any subset may be set; each absent slot falls back to the bridge's
//! documented default behavior. A config can also be layered over a
//! caller-owned base config with [`BridgeConfig::merge_over`], which
//! replaces the "mutate shared process-wide defaults" pattern: the base is
//! an ordinary value the caller owns, and the merge snapshots it, so later
//! changes to the base never reach an already-built bridge.

use bifrost_core::{BoxFuture, BridgeError, Continuation, ResponseChannel};
use std::future::Future;
use std::sync::Arc;

/// An extraction capability: derives an optional value from the request.
///
/// `Ok(None)` means the capability ran but produced nothing; the bridge
/// then ends the response with no body on its default path. `Ok(Some(v))`
/// is present even when `v` is falsy-looking (zero, empty, `false`).
pub type ExtractFn<Req, V> =
    Arc<dyn Fn(Req) -> BoxFuture<'static, Result<Option<V>, BridgeError>> + Send + Sync>;

/// An emission strategy: given the response handle and the produced value,
/// owns response emission entirely.
pub type RespondFn<Res> =
    Arc<dyn Fn(&mut Res, Option<<Res as ResponseChannel>::Value>) + Send + Sync>;

/// A failure strategy: given the response handle, the pipeline
/// continuation, and the error, owns failure handling entirely.
pub type OnErrorFn<Res> = Arc<dyn Fn(&mut Res, Continuation, BridgeError) + Send + Sync>;

/// Configuration for a [`Bridge`](crate::Bridge).
///
/// # Example
///
/// ```
/// use bifrost::BridgeConfig;
/// use bifrost_core::fixtures::RecordingChannel;
///
/// let config: BridgeConfig<String, RecordingChannel<String>> = BridgeConfig::new()
///     .extract(|name: String| async move { Ok(Some(format!("hello {name}"))) });
///
/// assert!(config.has_extract());
/// assert!(!config.has_respond());
/// ```
pub struct BridgeConfig<Req, Res>
where
    Res: ResponseChannel,
{
    pub(crate) extract: Option<ExtractFn<Req, Res::Value>>,
    pub(crate) respond: Option<RespondFn<Res>>,
    pub(crate) on_error: Option<OnErrorFn<Res>>,
}

impl<Req, Res> BridgeConfig<Req, Res>
where
    Res: ResponseChannel,
{
    /// Creates an empty configuration (all slots absent).
    #[must_use]
    pub fn new() -> Self {
        Self {
            extract: None,
            respond: None,
            on_error: None,
        }
    }

    /// Sets the extraction capability.
    #[must_use]
    pub fn extract<F, Fut>(mut self, extract: F) -> Self
    where
        F: Fn(Req) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Option<Res::Value>, BridgeError>> + Send + 'static,
    {
        let boxed: ExtractFn<Req, Res::Value> =
            Arc::new(move |request| Box::pin(extract(request)));
        self.extract = Some(boxed);
        self
    }

    /// Sets a custom emission strategy.
    ///
    /// When set, the bridge never touches the response channel itself; the
    /// strategy receives the channel and whatever the extraction stage
    /// produced (`None` when no extraction capability is configured).
    #[must_use]
    pub fn respond<F>(mut self, respond: F) -> Self
    where
        F: Fn(&mut Res, Option<Res::Value>) + Send + Sync + 'static,
    {
        self.respond = Some(Arc::new(respond));
        self
    }

    /// Sets a custom failure strategy.
    ///
    /// When set, the bridge never forwards through the continuation itself;
    /// the strategy receives it and may forward, or drop it and emit its
    /// own error response.
    #[must_use]
    pub fn on_error<F>(mut self, on_error: F) -> Self
    where
        F: Fn(&mut Res, Continuation, BridgeError) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(on_error));
        self
    }

    /// Layers this configuration over a base configuration.
    ///
    /// Slots set on `self` win; absent slots fall back to the base. The
    /// base is snapshotted (its capabilities are reference-counted), so
    /// mutating or dropping the caller's base afterwards does not affect
    /// the merged result.
    #[must_use]
    pub fn merge_over(self, base: &Self) -> Self {
        Self {
            extract: self.extract.or_else(|| base.extract.clone()),
            respond: self.respond.or_else(|| base.respond.clone()),
            on_error: self.on_error.or_else(|| base.on_error.clone()),
        }
    }

    /// Returns `true` if an extraction capability is configured.
    #[must_use]
    pub const fn has_extract(&self) -> bool {
        self.extract.is_some()
    }

    /// Returns `true` if a custom emission strategy is configured.
    #[must_use]
    pub const fn has_respond(&self) -> bool {
        self.respond.is_some()
    }

    /// Returns `true` if a custom failure strategy is configured.
    #[must_use]
    pub const fn has_on_error(&self) -> bool {
        self.on_error.is_some()
    }
}

impl<Req, Res> Default for BridgeConfig<Req, Res>
where
    Res: ResponseChannel,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Req, Res> Clone for BridgeConfig<Req, Res>
where
    Res: ResponseChannel,
{
    fn clone(&self) -> Self {
        Self {
            extract: self.extract.clone(),
            respond: self.respond.clone(),
            on_error: self.on_error.clone(),
        }
    }
}

impl<Req, Res> std::fmt::Debug for BridgeConfig<Req, Res>
where
    Res: ResponseChannel,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeConfig")
            .field("extract", &self.extract.is_some())
            .field("respond", &self.respond.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bifrost_core::fixtures::RecordingChannel;

    type TestConfig = BridgeConfig<u32, RecordingChannel<u32>>;

    #[test]
    fn test_empty_config() {
        let config = TestConfig::new();
        assert!(!config.has_extract());
        assert!(!config.has_respond());
        assert!(!config.has_on_error());
    }

    #[test]
    fn test_builder_sets_slots() {
        let config = TestConfig::new()
            .extract(|n| async move { Ok(Some(n + 1)) })
            .respond(|_res, _value| {})
            .on_error(|_res, _next, _error| {});

        assert!(config.has_extract());
        assert!(config.has_respond());
        assert!(config.has_on_error());
    }

    #[test]
    fn test_merge_over_present_slots_win() {
        let base = TestConfig::new()
            .extract(|_| async { Ok(Some(1)) })
            .on_error(|_res, _next, _error| {});
        let merged = TestConfig::new()
            .extract(|_| async { Ok(Some(2)) })
            .merge_over(&base);

        assert!(merged.has_extract());
        // Absent slot filled from the base.
        assert!(merged.has_on_error());
        assert!(!merged.has_respond());
    }

    #[test]
    fn test_merge_over_snapshots_base() {
        let base = TestConfig::new().respond(|_res, _value| {});
        let merged = TestConfig::new().merge_over(&base);
        drop(base);

        assert!(merged.has_respond());
    }
}
