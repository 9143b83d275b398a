//! Error types and handling for the MCP server.
//!
//! This module defines the unified error type returned by the lifecycle
//! orchestrator. Every failure is terminal for the current run; there are
//! no retries anywhere in this layer.

use thiserror::Error;

use super::transport::TransportError;
use super::validate::ValidationErrors;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the server lifecycle.
///
/// The orchestrator returns the first error encountered along the
/// init, register, run sequence. A run stopped by the process-wide
/// cancellation signal surfaces as a transport error classified by
/// [`Error::is_cancelled`], so callers can tell "told to stop" from
/// "broke".
#[derive(Debug, Error)]
pub enum Error {
    /// Aggregate of field-level configuration violations.
    #[error("configuration validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Application initialization failed.
    #[error("{0}")]
    Init(anyhow::Error),

    /// The application could not produce its tool handlers.
    #[error("getting handlers: {0}")]
    Handlers(anyhow::Error),

    /// A tool handler failed to register against the server handle.
    #[error("error registering handler: {0}")]
    Registration(anyhow::Error),

    /// Transport selection or run failure, including classified
    /// cancellation.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    /// True when the run ended because the process was asked to stop
    /// rather than because something failed.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Transport(TransportError::Cancelled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancellation_is_classified() {
        let err = Error::from(TransportError::Cancelled);
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_failures_are_not_cancellation() {
        let err = Error::from(TransportError::unsupported("grpc"));
        assert!(!err.is_cancelled());

        let err = Error::Init(anyhow::anyhow!("boom"));
        assert!(!err.is_cancelled());
    }

    #[test]
    fn test_registration_error_message() {
        let err = Error::Registration(anyhow::anyhow!("echo exploded"));
        assert_eq!(err.to_string(), "error registering handler: echo exploded");
    }
}
