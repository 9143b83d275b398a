//! The serve command: resolve configuration and run the application.

use std::time::Duration;

use clap::Args;
use tracing::info;

use super::ConfigOptions;
use crate::core::Config;
use crate::core::app::{self, App};

/// Flags accepted by the serve command.
///
/// Every flag is optional and overrides the corresponding environment
/// variable, which in turn overrides the built-in default.
#[derive(Debug, Default, Args)]
pub struct ServeArgs {
    /// Log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Transport type (stdio, http)
    #[arg(long)]
    pub transport: Option<String>,

    /// Port for the HTTP transport
    #[arg(long)]
    pub port: Option<u32>,

    /// Host for the HTTP transport
    #[arg(long)]
    pub host: Option<String>,

    /// Transport timeout in seconds
    #[arg(long)]
    pub transport_timeout: Option<u64>,

    /// Expose only read-only tools
    #[arg(long)]
    pub read_only: bool,
}

impl ServeArgs {
    /// Overlay these flags on a configuration resolved from the
    /// environment. Unset flags leave the resolved values untouched; the
    /// read-only flag can only tighten, never loosen.
    fn apply(&self, config: &mut Config) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(transport) = &self.transport {
            config.server.transport_type = transport.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(secs) = self.transport_timeout {
            config.server.transport_timeout = Duration::from_secs(secs);
        }
        if self.read_only {
            config.server.read_only = true;
        }
    }
}

pub(super) async fn execute<A, F>(
    options: &ConfigOptions,
    args: ServeArgs,
    factory: F,
) -> anyhow::Result<()>
where
    A: App,
    F: FnOnce(Config) -> A,
{
    let mut config = Config::from_env(&options.env_prefix);
    args.apply(&mut config);

    let app = factory(config);
    match app::run(app).await {
        Ok(()) => Ok(()),
        Err(err) if err.is_cancelled() => {
            info!("Server stopped by shutdown signal");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
