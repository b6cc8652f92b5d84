//! Host response channel trait.
//!
//! The [`ResponseChannel`] trait is the bridge's view of the host's
//! response handle. The bridge never serializes or transports anything
//! itself; it only asks the host to either send a produced value or end
//! the response with no body.

use crate::error::BridgeResult;

/// The host's response handle, as seen by a bridge.
///
/// A bridge touches the channel only on its *default* emission path. When
/// a custom emission strategy is configured, the channel is handed over to
/// that strategy untouched and the host is free to expose a richer surface
/// through the concrete type.
///
/// # Errors
///
/// Both primitives may fail (for example when the peer has gone away).
/// Such failures are *emission failures* and are routed into the bridge's
/// failure stage exactly like extraction failures.
///
/// # Example
///
/// ```
/// use bifrost_core::{BridgeResult, ResponseChannel};
///
/// /// A channel that renders values to an in-memory buffer.
/// struct BufferChannel {
///     body: Option<String>,
/// }
///
/// impl ResponseChannel for BufferChannel {
///     type Value = String;
///
///     fn send(&mut self, value: String) -> BridgeResult<()> {
///         self.body = Some(value);
///         Ok(())
///     }
///
///     fn end(&mut self) -> BridgeResult<()> {
///         self.body = None;
///         Ok(())
///     }
/// }
/// ```
pub trait ResponseChannel {
    /// The body value type this channel can emit.
    type Value: Send + 'static;

    /// Sends a value as the response body.
    ///
    /// # Errors
    ///
    /// Returns a [`BridgeError`](crate::BridgeError) if the host cannot
    /// emit the value.
    fn send(&mut self, value: Self::Value) -> BridgeResult<()>;

    /// Ends the response with no body.
    ///
    /// # Errors
    ///
    /// Returns a [`BridgeError`](crate::BridgeError) if the host cannot
    /// terminate the response.
    fn end(&mut self) -> BridgeResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingChannel {
        sent: Vec<u32>,
        ends: usize,
    }

    impl ResponseChannel for CountingChannel {
        type Value = u32;

        fn send(&mut self, value: u32) -> BridgeResult<()> {
            self.sent.push(value);
            Ok(())
        }

        fn end(&mut self) -> BridgeResult<()> {
            self.ends += 1;
            Ok(())
        }
    }

    #[test]
    fn test_channel_impl() {
        let mut channel = CountingChannel {
            sent: Vec::new(),
            ends: 0,
        };

        channel.send(7).expect("send should succeed");
        channel.end().expect("end should succeed");

        assert_eq!(channel.sent, vec![7]);
        assert_eq!(channel.ends, 1);
    }
}
