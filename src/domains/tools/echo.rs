//! Echo tool definition.
//!
//! A minimal tool that returns its input unchanged, useful for verifying
//! registration and transport wiring end to end.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the echo tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EchoParams {
    /// Message to echo back.
    pub message: String,
}

// ============================================================================
// Output Structure (JSON format for AI agents)
// ============================================================================

/// Result of an echo call.
#[derive(Debug, Serialize, JsonSchema)]
struct EchoReply {
    /// The echoed message.
    message: String,
    /// Length of the message in bytes.
    length: usize,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Echo tool - returns the caller's message.
pub struct EchoTool;

impl EchoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "echo";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Echo a message back to the caller. Useful for verifying connectivity.";

    /// Execute the tool logic (for STDIO transport via rmcp).
    #[instrument(skip_all)]
    pub fn execute(params: &EchoParams) -> CallToolResult {
        info!("Echo tool called");

        let reply = EchoReply {
            message: params.message.clone(),
            length: params.message.len(),
        };

        CallToolResult {
            content: vec![Content::text(params.message.clone())],
            structured_content: Some(serde_json::to_value(&reply).unwrap()),
            is_error: Some(false),
            meta: None,
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let message = arguments
            .get("message")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing or invalid 'message' parameter".to_string())?
            .to_string();

        info!("Echo tool (HTTP) called");

        let params = EchoParams { message };
        let result = Self::execute(&params);

        // Serialize the full CallToolResult to preserve all fields including structuredContent
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<EchoParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<EchoReply>().into()),
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: EchoParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_returns_message() {
        let params = EchoParams {
            message: "hello".to_string(),
        };

        let result = EchoTool::execute(&params);
        assert_eq!(result.is_error, Some(false));

        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(t) => &t.text,
            _ => panic!("Expected text content"),
        };
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_structured_content_in_result() {
        let params = EchoParams {
            message: "ping".to_string(),
        };

        let result = EchoTool::execute(&params);
        let structured = result
            .structured_content
            .expect("structured_content should be present");

        assert_eq!(structured["message"], "ping");
        assert_eq!(structured["length"], 4);
    }

    #[test]
    fn test_length_counts_bytes() {
        let params = EchoParams {
            message: "héllo".to_string(),
        };

        let result = EchoTool::execute(&params);
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["length"], 6);
    }

    #[test]
    fn test_http_handler() {
        let args = serde_json::json!({ "message": "ping" });

        let value = EchoTool::http_handler(args).unwrap();
        assert_eq!(value["content"][0]["text"], "ping");
        assert_eq!(value["structuredContent"]["message"], "ping");
        assert_eq!(value["isError"], false);
    }

    #[test]
    fn test_http_handler_missing_param() {
        let args = serde_json::json!({});

        let result = EchoTool::http_handler(args);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("message"));
    }

    #[test]
    fn test_http_handler_rejects_non_string_message() {
        let args = serde_json::json!({ "message": 42 });

        assert!(EchoTool::http_handler(args).is_err());
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = EchoTool::to_tool();

        assert_eq!(tool.name, EchoTool::NAME);
        assert!(tool.description.is_some());
        assert!(tool.output_schema.is_some());
    }
}
