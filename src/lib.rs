//! MCP Server Library
//!
//! This crate provides a scalable Model Context Protocol (MCP) server
//! scaffold with a modular architecture organized by domains. An
//! embedding application supplies configuration and tool handlers; the
//! scaffold supplies configuration resolution, validation, lifecycle
//! orchestration with guaranteed cleanup, and pluggable transports
//! (STDIO and HTTP) with graceful shutdown.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - **core**: Infrastructure including configuration, validation, error
//!   handling, the lifecycle orchestrator, and the transport layer
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools that can be executed by clients
//! - **cli**: The embeddable command-line surface (serve and version)
//!
//! # Example
//!
//! ```rust,no_run
//! use skeleton_mcp_server::cli::{self, BuildInfo, ConfigOptions};
//! # use skeleton_mcp_server::core::{Config, app::App};
//! # use skeleton_mcp_server::domains::tools::ToolHandler;
//! # struct MyApp { config: Config }
//! # #[async_trait::async_trait]
//! # impl App for MyApp {
//! #     fn config(&self) -> &Config { &self.config }
//! #     async fn init(&self) -> anyhow::Result<()> { Ok(()) }
//! #     async fn shutdown(&self) -> anyhow::Result<()> { Ok(()) }
//! #     fn handlers(&self) -> anyhow::Result<Vec<Box<dyn ToolHandler>>> { Ok(vec![]) }
//! # }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     cli::run(
//!         ConfigOptions { env_prefix: "MCP".to_string() },
//!         BuildInfo::from_build_env(),
//!         |config| MyApp { config },
//!     )
//!     .await
//! }
//! ```

pub mod cli;
pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::app::App;
pub use core::{Config, Error, McpServer, Result, ShutdownSignal};
pub use domains::tools::ToolHandler;
