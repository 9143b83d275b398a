//! Command-line interface.
//!
//! The binary embeds [`run`], which parses arguments, resolves
//! configuration (defaults, then environment, then flags), builds the
//! application through a caller-supplied factory, and drives the
//! lifecycle. A run stopped by the shutdown signal exits successfully.

mod serve;
mod version;

use clap::{Parser, Subcommand};

use crate::core::Config;
use crate::core::app::App;

pub use serve::ServeArgs;
pub use version::BuildInfo;

/// Caller-tunable CLI behavior.
#[derive(Debug, Clone)]
pub struct ConfigOptions {
    /// Prefix for environment variable lookups, e.g. "MCP" reads
    /// MCP_SERVER_PORT.
    pub env_prefix: String,
}

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Model Context Protocol server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the MCP server
    Serve {
        #[command(flatten)]
        args: ServeArgs,
    },

    /// Show version information
    Version,
}

/// Parse the process arguments and run the selected command.
pub async fn run<A, F>(
    options: ConfigOptions,
    build_info: BuildInfo,
    factory: F,
) -> anyhow::Result<()>
where
    A: App,
    F: FnOnce(Config) -> A,
{
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { args } => serve::execute(&options, args, factory).await,
        Commands::Version => {
            version::execute(&build_info);
            Ok(())
        }
    }
}
