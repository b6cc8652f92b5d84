//! Error types for the Bifrost bridge.
//!
//! This module provides the [`BridgeError`] type, the single failure type
//! routed through a bridge's failure stage.
//!
//! Errors are classified by *origin*, not by kind: an [`Extraction`] error
//! was raised by the caller-supplied extraction capability, while an
//! [`Emission`] error was raised by one of the host's default response
//! primitives (`send`/`end`) while the bridge was emitting on the caller's
//! behalf. Both origins funnel through the same failure stage.
//!
//! [`Extraction`]: BridgeError::Extraction
//! [`Emission`]: BridgeError::Emission

use thiserror::Error;

/// Result type alias using [`BridgeError`].
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Failure raised during a bridge invocation.
///
/// # Example
///
/// ```
/// use bifrost_core::BridgeError;
///
/// fn load_user(id: Option<&str>) -> Result<String, BridgeError> {
///     let id = id.ok_or_else(|| BridgeError::extraction("missing user id"))?;
///     Ok(id.to_uppercase())
/// }
/// ```
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Raised by the extraction capability (or while awaiting it).
    #[error("extraction failed: {message}")]
    Extraction {
        /// Human-readable error message.
        message: String,
        /// The underlying error, if the capability supplied one.
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Raised by a host response primitive (`send`/`end`) on the default
    /// emission path.
    #[error("emission failed: {message}")]
    Emission {
        /// Human-readable error message.
        message: String,
    },
}

impl BridgeError {
    /// Creates an extraction error with a message.
    #[must_use]
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an extraction error wrapping an underlying error.
    pub fn extraction_with_source(
        message: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Self::Extraction {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Creates an emission error.
    #[must_use]
    pub fn emission(message: impl Into<String>) -> Self {
        Self::Emission {
            message: message.into(),
        }
    }

    /// Returns the human-readable message, without the origin prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Extraction { message, .. } | Self::Emission { message } => message,
        }
    }

    /// Returns `true` if this error originated in the extraction stage.
    #[must_use]
    pub const fn is_extraction(&self) -> bool {
        matches!(self, Self::Extraction { .. })
    }

    /// Returns `true` if this error originated in a host response primitive.
    #[must_use]
    pub const fn is_emission(&self) -> bool {
        matches!(self, Self::Emission { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_error() {
        let error = BridgeError::extraction("missing user id");
        assert!(error.is_extraction());
        assert!(!error.is_emission());
        assert_eq!(error.message(), "missing user id");
        assert_eq!(error.to_string(), "extraction failed: missing user id");
    }

    #[test]
    fn test_extraction_error_with_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error = BridgeError::extraction_with_source("config lookup failed", io);

        assert!(error.is_extraction());
        let source = std::error::Error::source(&error).expect("source should be set");
        assert!(source.to_string().contains("no such file"));
    }

    #[test]
    fn test_emission_error() {
        let error = BridgeError::emission("channel closed");
        assert!(error.is_emission());
        assert_eq!(error.message(), "channel closed");
        assert!(std::error::Error::source(&error).is_none());
    }
}
