//! MCP Server implementation and tool registration handle.
//!
//! This module contains the server handler that implements the MCP
//! protocol. It is the opaque handle the lifecycle orchestrator passes to
//! tool handlers at registration time: each registered tool lands in two
//! dispatch paths at once, the rmcp `ToolRouter` used by the stdio
//! transport and a name-keyed handler map used by the HTTP transport.
//!
//! The handle is only mutated during registration; for the rest of the
//! process lifetime every transport reads it.

use rmcp::{
    ServerHandler,
    handler::server::tool::{ToolRoute, ToolRouter},
    model::*,
    tool_handler,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

use super::config::Config;

/// Server name reported to clients.
pub const SERVER_NAME: &str = "mcp-server";

/// Server version reported to clients.
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Dispatch function for one tool on the HTTP transport.
pub type HttpToolHandler =
    Arc<dyn Fn(serde_json::Value) -> Result<serde_json::Value, String> + Send + Sync>;

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and carries
/// the tool dispatch tables for both transports.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for stdio tool calls.
    tool_router: ToolRouter<Self>,

    /// Tool dispatch table for HTTP tool calls.
    http_handlers: HashMap<String, HttpToolHandler>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration and no tools
    /// registered yet.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            tool_router: ToolRouter::new(),
            http_handlers: HashMap::new(),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        SERVER_NAME
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        SERVER_VERSION
    }

    /// Get the server configuration (for tool access).
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Register one tool on both dispatch paths.
    ///
    /// `route` feeds the stdio transport's router; `http_handler` feeds
    /// the HTTP transport's dispatch table under the same name.
    pub fn register_tool(
        &mut self,
        name: impl Into<String>,
        route: ToolRoute<Self>,
        http_handler: HttpToolHandler,
    ) {
        let router = std::mem::replace(&mut self.tool_router, ToolRouter::new());
        self.tool_router = router.with_route(route);
        self.http_handlers.insert(name.into(), http_handler);
    }

    /// Names of all registered tools.
    pub fn tool_names(&self) -> Vec<String> {
        self.http_handlers.keys().cloned().collect()
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Dispatches to the handler registered under `name`; each tool's
    /// `http_handler` lives in its own file under `domains/tools/`.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match self.http_handlers.get(name) {
            Some(handler) => handler(arguments),
            None => {
                warn!("Unknown tool requested: {}", name);
                Err(format!("Unknown tool: {}", name))
            }
        }
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "A skeleton MCP server. Register your own tools through the handler contract; \
                 the built-in echo tool demonstrates the wiring."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
