//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the server,
//! including error handling, configuration, lifecycle management, and
//! transport layer abstractions.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod server;
pub mod shutdown;
pub mod transport;
pub mod validate;

pub use app::{App, run, run_with_shutdown};
pub use config::{Config, LoggingConfig, ServerConfig};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use server::McpServer;
pub use shutdown::ShutdownSignal;
pub use transport::{TransportError, TransportKind, TransportService};
pub use validate::{ValidationError, ValidationErrors};
