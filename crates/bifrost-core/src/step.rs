//! Pipeline step contract.
//!
//! This module defines the [`PipelineStep`] trait, the three-argument
//! `(request, response, next)` handler shape that middleware hosts compose
//! into pipelines. A bridge built by the `bifrost` crate implements this
//! trait; so can any hand-written step.

use crate::channel::ResponseChannel;
use crate::continuation::Continuation;
use std::future::Future;
use std::pin::Pin;

/// A boxed future, as returned by a pipeline step.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A unit of request-handling logic conforming to the host middleware
/// contract.
///
/// The host drives each step with the incoming request, its response
/// handle, and a [`Continuation`] into the pipeline's error-handling path.
/// The returned future is `'static` so hosts may spawn it onto their
/// runtime.
///
/// # Invariants
///
/// - A step owns the response handle for the duration of its invocation.
/// - A step forwards through the continuation at most once, and only to
///   signal an error.
///
/// # Example
///
/// ```ignore
/// struct HealthStep;
///
/// impl<Req> PipelineStep<Req, HttpChannel> for HealthStep {
///     fn call(
///         &self,
///         _request: Req,
///         mut response: HttpChannel,
///         _next: Continuation,
///     ) -> BoxFuture<'static, ()> {
///         Box::pin(async move {
///             let _ = response.send("ok".into());
///         })
///     }
/// }
/// ```
pub trait PipelineStep<Req, Res>: Send + Sync
where
    Res: ResponseChannel,
{
    /// Runs this step against one request.
    fn call(&self, request: Req, response: Res, next: Continuation) -> BoxFuture<'static, ()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeResult;
    use std::sync::{Arc, Mutex};

    struct EchoChannel {
        body: Arc<Mutex<Option<String>>>,
    }

    impl ResponseChannel for EchoChannel {
        type Value = String;

        fn send(&mut self, value: String) -> BridgeResult<()> {
            *self.body.lock().expect("lock poisoned") = Some(value);
            Ok(())
        }

        fn end(&mut self) -> BridgeResult<()> {
            *self.body.lock().expect("lock poisoned") = None;
            Ok(())
        }
    }

    struct EchoStep;

    impl PipelineStep<String, EchoChannel> for EchoStep {
        fn call(
            &self,
            request: String,
            mut response: EchoChannel,
            _next: Continuation,
        ) -> BoxFuture<'static, ()> {
            Box::pin(async move {
                let _ = response.send(request);
            })
        }
    }

    #[tokio::test]
    async fn test_hand_written_step() {
        let body = Arc::new(Mutex::new(None));
        let step = EchoStep;
        let response = EchoChannel {
            body: Arc::clone(&body),
        };
        let next = Continuation::new(|_| {});

        step.call("hello".to_string(), response, next).await;

        assert_eq!(body.lock().expect("lock poisoned").as_deref(), Some("hello"));
    }
}
