//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur in transport operations.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The configured transport type is not one of the supported values.
    #[error("unsupported transport type: {0}")]
    UnsupportedTransport(String),

    /// Failed to bind to address.
    #[error("Failed to bind to {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// Server initialization error.
    #[error("Server initialization error: {0}")]
    InitError(String),

    /// HTTP-specific error.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Service error from rmcp.
    #[error("Service error: {0}")]
    ServiceError(String),

    /// The run was stopped by the process-wide shutdown signal. Not a
    /// failure; callers classify it separately from the variants above.
    #[error("cancelled by shutdown signal")]
    Cancelled,
}

impl TransportError {
    /// Create an unsupported-transport error.
    pub fn unsupported(transport_type: impl Into<String>) -> Self {
        Self::UnsupportedTransport(transport_type.into())
    }

    /// Create a bind error.
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::BindError {
            address: address.into(),
            source,
        }
    }

    /// Create an initialization error.
    pub fn init(msg: impl Into<String>) -> Self {
        Self::InitError(msg.into())
    }

    /// Create an HTTP error.
    pub fn http(msg: impl Into<String>) -> Self {
        Self::HttpError(msg.into())
    }
}
