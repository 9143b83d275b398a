//! MCP Server Entry Point
//!
//! The binary wires the reference application into the CLI: it resolves
//! configuration, runs one-time initialization (logging and validation),
//! registers the built-in tool handlers, and serves over the configured
//! transport until shutdown.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::info;

use skeleton_mcp_server::cli::{self, BuildInfo, ConfigOptions};
use skeleton_mcp_server::core::app::App;
use skeleton_mcp_server::core::{Config, Error, init_logging};
use skeleton_mcp_server::domains::tools::{EchoHandler, ToolHandler};

/// The reference application: validates configuration during
/// initialization and exposes the echo tool.
struct ServerApp {
    config: Config,
    initialized: Mutex<bool>,
}

impl ServerApp {
    fn new(config: Config) -> Self {
        Self {
            config,
            initialized: Mutex::new(false),
        }
    }
}

#[async_trait]
impl App for ServerApp {
    fn config(&self) -> &Config {
        &self.config
    }

    async fn init(&self) -> anyhow::Result<()> {
        // The flag, not the lock, carries idempotence: a second call
        // observes it and returns without re-running side effects.
        let mut initialized = match self.initialized.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if *initialized {
            return Ok(());
        }

        init_logging(&self.config.logging.level, &self.config.logging.format);

        self.config.validate().map_err(Error::from)?;

        info!("Application initialized");
        *initialized = true;
        Ok(())
    }

    async fn shutdown(&self) -> anyhow::Result<()> {
        info!("Application cleanup complete");
        Ok(())
    }

    fn handlers(&self) -> anyhow::Result<Vec<Box<dyn ToolHandler>>> {
        Ok(vec![Box::new(EchoHandler)])
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::run(
        ConfigOptions {
            env_prefix: "MCP".to_string(),
        },
        BuildInfo::from_build_env(),
        ServerApp::new,
    )
    .await
}
