//! Transport service - selects and drives the configured transport.
//!
//! This service provides a unified interface for starting the MCP server
//! with different transport mechanisms. The transport type is a runtime
//! configuration value; it is resolved once per process run and never
//! swapped mid-flight.

use tracing::info;

use super::http::HttpTransport;
use super::stdio::StdioTransport;
use super::{TransportError, TransportResult};
use crate::core::McpServer;
use crate::core::config::Config;
use crate::core::shutdown::ShutdownSignal;

/// The supported transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Stdio,
    Http,
}

/// Transport service - manages the transport layer for the MCP server.
pub struct TransportService {
    config: Config,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Resolve a transport-type string to a concrete transport.
    ///
    /// Exactly two values are recognized. Anything else, the empty string
    /// included, is an unsupported-transport error for the caller to
    /// surface; there is no fallback.
    pub fn select(transport_type: &str) -> TransportResult<TransportKind> {
        match transport_type {
            "stdio" => Ok(TransportKind::Stdio),
            "http" => Ok(TransportKind::Http),
            other => Err(TransportError::unsupported(other)),
        }
    }

    /// Start the configured transport with the given MCP server.
    ///
    /// Blocks until the transport stops on its own or the shutdown signal
    /// fires. Selection errors surface before any transport work starts.
    pub async fn run(self, shutdown: &ShutdownSignal, server: McpServer) -> TransportResult<()> {
        let kind = Self::select(&self.config.server.transport_type)?;
        info!(transport = %self.config.server.transport_type, "Starting transport");

        match kind {
            TransportKind::Stdio => StdioTransport::run(shutdown, server).await,
            TransportKind::Http => HttpTransport::new(self.config).run(shutdown, server).await,
        }
    }
}
