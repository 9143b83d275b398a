//! Transport layer for the MCP server.
//!
//! This module provides the two transport implementations:
//! - **STDIO**: standard input/output, the default MCP mode
//! - **HTTP**: JSON-RPC over POST requests, plus health and info endpoints
//!
//! Transport choice is a runtime configuration value. Each runner wraps a
//! blocking serving primitive in the same cancellation-aware contract:
//! start serving on a background task, then race the process-wide shutdown
//! signal against the transport terminating on its own, handing the
//! outcome over a single-slot channel. That shared shape is what lets the
//! lifecycle orchestrator treat both transports uniformly.

mod error;
mod service;

pub mod http;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use service::{TransportKind, TransportService};
