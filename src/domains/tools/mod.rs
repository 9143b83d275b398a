//! Tools domain module.
//!
//! This module handles all tool-related functionality for the server.
//! Tools are executable functions that can be called by MCP clients to
//! perform specific actions or computations.
//!
//! ## Architecture
//!
//! - `echo.rs` - The echo tool definition (params, execute, route, HTTP handler)
//! - `handlers.rs` - The `ToolHandler` registration trait and built-in handlers
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file beside `echo.rs` with params, execute(),
//!    to_tool(), create_route(), and http_handler()
//! 2. Register it from a `ToolHandler`, or add it to an existing one
//! 3. Return that handler from your application's handler list

pub mod echo;
mod handlers;

pub use echo::EchoTool;
pub use handlers::{EchoHandler, ToolHandler};
