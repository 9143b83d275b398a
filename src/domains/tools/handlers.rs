//! Tool handlers module.
//!
//! A handler groups related tools and attaches them to the server handle
//! during startup. The lifecycle asks the application for its handlers
//! and invokes each one's registration exactly once, before any
//! transport starts serving.

use std::sync::Arc;

use tracing::info;

use super::echo::EchoTool;
use crate::core::server::McpServer;

/// Trait for registering a group of tools against the server handle.
///
/// The read-only flag tells handlers that expose mutating tools to skip
/// them. Honoring the flag is each handler's decision; handlers whose
/// tools never mutate anything register the same set either way.
pub trait ToolHandler: Send + Sync {
    /// Attach this handler's tools to the server.
    fn register_tools(&self, server: &mut McpServer, read_only: bool) -> anyhow::Result<()>;
}

// ============================================================================
// Echo handler
// ============================================================================

/// Registers the echo tool.
///
/// Echo performs no mutations, so it registers under read-only mode too.
pub struct EchoHandler;

impl ToolHandler for EchoHandler {
    fn register_tools(&self, server: &mut McpServer, _read_only: bool) -> anyhow::Result<()> {
        server.register_tool(
            EchoTool::NAME,
            EchoTool::create_route(),
            Arc::new(EchoTool::http_handler),
        );
        info!("Registered tool: {}", EchoTool::NAME);
        Ok(())
    }
}
