//! HTTP transport implementation.
//!
//! HTTP server with JSON-RPC over POST requests.
//! This allows standard HTTP clients (curl, browsers, etc.) to communicate with the MCP server.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{RwLock, oneshot};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult};
use crate::core::config::Config;
use crate::core::server::{McpServer, SERVER_NAME, SERVER_VERSION};
use crate::core::shutdown::ShutdownSignal;

/// HTTP transport runner.
pub struct HttpTransport {
    config: Config,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<serde_json::Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Method not found error.
    pub fn method_not_found(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32601, "Method not found")
    }

    /// Invalid request error.
    pub fn invalid_request(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    /// Invalid params error.
    pub fn invalid_params(id: Option<serde_json::Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The MCP server instance.
    server: McpServer,
    /// Session state for maintaining conversation context.
    session: Arc<RwLock<Option<SessionState>>>,
}

/// Session state for a client.
#[derive(Debug, Clone)]
#[allow(dead_code)]
struct SessionState {
    initialized: bool,
    protocol_version: String,
}

impl HttpTransport {
    /// Create a new HTTP transport for the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.server.host, self.config.server.port)
    }

    /// Run the HTTP transport until it stops on its own or the shutdown
    /// signal fires.
    ///
    /// Serving happens on a spawned task whose outcome is handed off
    /// through a single-slot channel. Cancellation triggers a graceful
    /// drain of in-flight connections, bounded by the configured shutdown
    /// timeout; bind failures surface before the race begins.
    pub async fn run(self, shutdown: &ShutdownSignal, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let state = AppState {
            server,
            session: Arc::new(RwLock::new(None)),
        };

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let app = Router::new()
            .route("/mcp", post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(state)
            .layer(cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {} (JSON-RPC over HTTP, CORS enabled)", addr);
        info!("  → JSON-RPC: POST /mcp");
        info!("  → Health:   GET /health");

        let drain = shutdown.child_token();
        let (done_tx, mut done_rx) = oneshot::channel();

        tokio::spawn(async move {
            let outcome = axum::serve(listener, app)
                .with_graceful_shutdown(async move { drain.cancelled().await })
                .await
                .map_err(|e| TransportError::http(e.to_string()));
            let _ = done_tx.send(outcome);
        });

        tokio::select! {
            biased;
            _ = shutdown.cancelled() => {
                info!("HTTP transport cancelled, draining connections");
                match tokio::time::timeout(self.config.shutdown_timeout, &mut done_rx).await {
                    Ok(Ok(Ok(()))) => info!("HTTP transport drained"),
                    Ok(Ok(Err(error))) => warn!(%error, "HTTP server error while draining"),
                    Ok(Err(_)) => warn!("HTTP serving task aborted while draining"),
                    Err(_) => warn!("HTTP server did not drain within the shutdown timeout"),
                }
                Err(TransportError::Cancelled)
            }
            outcome = &mut done_rx => match outcome {
                Ok(outcome) => outcome,
                Err(_) => Err(TransportError::http("HTTP serving task aborted")),
            },
        }
    }
}

/// Root handler - provides API info.
async fn root_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": SERVER_NAME,
        "version": SERVER_VERSION,
        "transport": "HTTP",
        "endpoints": {
            "rpc": "/mcp",
            "health": "/health"
        },
        "protocol": "JSON-RPC 2.0",
        "documentation": "Send POST requests to /mcp with JSON-RPC messages"
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle JSON-RPC requests.
#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    tracing::Span::current().record("method", request.method.as_str());
    info!("Received JSON-RPC request: {}", request.method);

    let response = process_request(&state, request).await;

    (StatusCode::OK, Json(response))
}

/// Process a JSON-RPC request and return the response.
async fn process_request(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    // Validate JSON-RPC version
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::invalid_request(request.id);
    }

    match request.method.as_str() {
        // Initialize the MCP session
        "initialize" => handle_initialize(state, request).await,

        // Liveness probe defined by the protocol
        "ping" => JsonRpcResponse::success(request.id, serde_json::json!({})),

        // List available tools
        "tools/list" => handle_tools_list(state, request).await,

        // Call a tool
        "tools/call" => handle_tools_call(state, request).await,

        // Notifications (no response needed for stateless HTTP)
        method if method.starts_with("notifications/") => {
            handle_notification(state, &request).await;
            // Return empty success for notifications
            JsonRpcResponse::success(request.id, serde_json::json!(null))
        }

        // Unknown method
        _ => {
            warn!("Unknown method: {}", request.method);
            JsonRpcResponse::method_not_found(request.id)
        }
    }
}

/// Handle initialize request.
async fn handle_initialize(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing initialize request");

    // Store session state
    let mut session = state.session.write().await;
    *session = Some(SessionState {
        initialized: true,
        protocol_version: "2024-11-05".to_string(),
    });

    // Return server capabilities
    let result = serde_json::json!({
        "protocolVersion": "2024-11-05",
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": state.server.name(),
            "version": state.server.version()
        },
        "instructions": "A skeleton MCP server. Register your own tools through the handler contract; the built-in echo tool demonstrates the wiring."
    });

    JsonRpcResponse::success(request.id, result)
}

/// Handle tools/list request.
async fn handle_tools_list(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing tools/list request");

    let tools = state.server.list_tools();
    let result = serde_json::json!({
        "tools": tools
    });

    JsonRpcResponse::success(request.id, result)
}

/// Handle tools/call request.
async fn handle_tools_call(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing tools/call request");

    let params = match request.params {
        Some(p) => p,
        None => return JsonRpcResponse::invalid_params(request.id.clone(), "Missing params"),
    };

    let name = match params.get("name").and_then(|v| v.as_str()) {
        Some(n) => n.to_string(),
        None => return JsonRpcResponse::invalid_params(request.id.clone(), "Missing tool name"),
    };

    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or(serde_json::json!({}));

    match state.server.call_tool(&name, arguments) {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(e) => JsonRpcResponse::invalid_params(request.id, e),
    }
}

/// Handle notifications (no response needed).
async fn handle_notification(state: &AppState, request: &JsonRpcRequest) {
    match request.method.as_str() {
        "notifications/initialized" => {
            info!("Client sent initialized notification");
            let mut session = state.session.write().await;
            if let Some(ref mut s) = *session {
                s.initialized = true;
            }
        }
        _ => {
            info!("Received notification: {}", request.method);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn http_config(port: u32) -> Config {
        let mut config = Config::default();
        config.server.transport_type = "http".to_string();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = port;
        config.shutdown_timeout = Duration::from_secs(5);
        config
    }

    fn test_state() -> AppState {
        AppState {
            server: McpServer::new(http_config(0)),
            session: Arc::new(RwLock::new(None)),
        }
    }

    fn rpc_request(method: &str, params: Option<serde_json::Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(serde_json::json!(1)),
            method: method.to_string(),
            params,
        }
    }

    #[tokio::test]
    async fn test_run_returns_cancelled_within_shutdown_timeout() {
        let signal = ShutdownSignal::new();
        let transport = HttpTransport::new(http_config(0));
        let server = McpServer::new(http_config(0));

        let trigger = signal.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            trigger.trigger();
        });

        let started = std::time::Instant::now();
        let result = transport.run(&signal, server).await;
        assert!(matches!(result, Err(TransportError::Cancelled)));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_run_surfaces_bind_failure_without_cancellation() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = u32::from(taken.local_addr().unwrap().port());

        let signal = ShutdownSignal::new();
        let transport = HttpTransport::new(http_config(port));
        let result = transport.run(&signal, McpServer::new(http_config(port))).await;
        assert!(matches!(result, Err(TransportError::BindError { .. })));
        assert!(!signal.is_triggered());
    }

    #[tokio::test]
    async fn test_process_request_rejects_wrong_version() {
        let state = test_state();
        let mut request = rpc_request("tools/list", None);
        request.jsonrpc = "1.0".to_string();

        let response = process_request(&state, request).await;
        assert_eq!(response.error.unwrap().code, -32600);
    }

    #[tokio::test]
    async fn test_process_request_unknown_method() {
        let state = test_state();
        let response = process_request(&state, rpc_request("resources/list", None)).await;
        assert_eq!(response.error.unwrap().code, -32601);
    }

    #[tokio::test]
    async fn test_initialize_reports_server_info() {
        let state = test_state();
        let response = process_request(&state, rpc_request("initialize", None)).await;
        let result = response.result.unwrap();
        assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
        assert_eq!(result["protocolVersion"], "2024-11-05");
    }

    #[tokio::test]
    async fn test_ping_returns_empty_object() {
        let state = test_state();
        let response = process_request(&state, rpc_request("ping", None)).await;
        assert_eq!(response.result.unwrap(), serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_tools_list_is_empty_without_registration() {
        let state = test_state();
        let response = process_request(&state, rpc_request("tools/list", None)).await;
        let result = response.result.unwrap();
        assert_eq!(result["tools"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_tools_call_without_params_is_invalid() {
        let state = test_state();
        let response = process_request(&state, rpc_request("tools/call", None)).await;
        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool_is_invalid() {
        let state = test_state();
        let params = serde_json::json!({ "name": "nope", "arguments": {} });
        let response = process_request(&state, rpc_request("tools/call", Some(params))).await;
        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn test_notifications_return_null_success() {
        let state = test_state();
        let response =
            process_request(&state, rpc_request("notifications/initialized", None)).await;
        assert!(response.error.is_none());
        assert_eq!(response.result.unwrap(), serde_json::json!(null));
    }
}
