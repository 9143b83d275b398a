//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP - the default and recommended mode.

use rmcp::ServiceExt;
use tokio::sync::oneshot;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;
use crate::core::shutdown::ShutdownSignal;

/// STDIO transport runner.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until it stops on its own or the shutdown
    /// signal fires.
    ///
    /// Serving happens on a spawned task whose outcome is handed off
    /// through a single-slot channel, so the task never blocks reporting
    /// a result nobody is waiting for. On cancellation the task is
    /// abandoned rather than drained: the underlying stream has no
    /// shutdown primitive, and process exit follows immediately.
    pub async fn run(shutdown: &ShutdownSignal, server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let (done_tx, mut done_rx) = oneshot::channel();

        tokio::spawn(async move {
            let _ = done_tx.send(serve_stdio(server).await);
        });

        tokio::select! {
            biased;
            _ = shutdown.cancelled() => {
                info!("STDIO transport cancelled, abandoning the serving task");
                Err(TransportError::Cancelled)
            }
            outcome = &mut done_rx => match outcome {
                Ok(outcome) => outcome,
                Err(_) => Err(TransportError::ServiceError(
                    "stdio serving task aborted".to_string(),
                )),
            },
        }
    }
}

async fn serve_stdio(server: McpServer) -> TransportResult<()> {
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| TransportError::init(e.to_string()))?;

    service
        .waiting()
        .await
        .map_err(|e| TransportError::ServiceError(e.to_string()))?;

    info!("STDIO transport finished");
    Ok(())
}
