//! Application lifecycle orchestration.
//!
//! This module drives the whole process lifecycle as one guaranteed
//! sequence: initialize the application, register its tool handlers
//! against a fresh server handle, run the configured transport under the
//! process-wide shutdown signal, and always invoke the application's
//! shutdown hook afterwards. The hook runs on every exit path, including
//! failed initialization or registration, and is bounded by the
//! configured shutdown timeout.
//!
//! The first error encountered wins. A run stopped by the shutdown signal
//! reports a cancellation-classified error, which callers treat as a
//! graceful outcome rather than a failure.

use async_trait::async_trait;
use tracing::{error, info};

use super::config::Config;
use super::error::{Error, Result};
use super::server::McpServer;
use super::shutdown::ShutdownSignal;
use super::transport::TransportService;
use crate::domains::tools::ToolHandler;

/// Contract between the lifecycle orchestrator and an embedding
/// application.
#[async_trait]
pub trait App: Send + Sync {
    /// The resolved configuration, immutable for the process lifetime.
    fn config(&self) -> &Config;

    /// One-time initialization: logging, configuration validation, any
    /// connections the application needs.
    ///
    /// Must be idempotent. Repeated or concurrent calls must not re-run
    /// side effects; implementors keep an explicit "already initialized"
    /// flag behind a lock. A failure aborts the run before any transport
    /// starts.
    async fn init(&self) -> anyhow::Result<()>;

    /// Cleanup hook, invoked on every exit path under the shutdown
    /// timeout. Its failure is logged by the orchestrator, never
    /// propagated, so it cannot mask an earlier error.
    async fn shutdown(&self) -> anyhow::Result<()>;

    /// The tool handlers to register against the server handle.
    fn handlers(&self) -> anyhow::Result<Vec<Box<dyn ToolHandler>>>;
}

/// Run the application under OS signal handling.
///
/// Equivalent to [`run_with_shutdown`] with a signal wired to SIGINT and
/// SIGTERM.
pub async fn run<A: App>(app: A) -> Result<()> {
    let shutdown = ShutdownSignal::from_os_signals();
    run_with_shutdown(app, shutdown).await
}

/// Drive the full lifecycle: initialize, register tools, serve, shut
/// down.
///
/// Blocks until the transport stops or `shutdown` fires. Whatever the
/// outcome of the sequence, the application's shutdown hook runs exactly
/// once before this function returns.
pub async fn run_with_shutdown<A: App>(app: A, shutdown: ShutdownSignal) -> Result<()> {
    let result = run_sequence(&app, &shutdown).await;

    info!("Shutting down");
    match tokio::time::timeout(app.config().shutdown_timeout, app.shutdown()).await {
        Ok(Ok(())) => info!("Application shut down"),
        Ok(Err(error)) => error!(%error, "App shutdown error"),
        Err(_) => error!("App shutdown timed out"),
    }

    result
}

async fn run_sequence<A: App>(app: &A, shutdown: &ShutdownSignal) -> Result<()> {
    app.init().await.map_err(Error::Init)?;

    let config = app.config().clone();
    let mut server = McpServer::new(config.clone());

    let handlers = app.handlers().map_err(Error::Handlers)?;
    for handler in handlers {
        handler
            .register_tools(&mut server, config.server.read_only)
            .map_err(Error::Registration)?;
    }

    Ok(TransportService::new(config).run(shutdown, server).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::TransportError;
    use crate::domains::tools::echo::EchoTool;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Default)]
    struct Counters {
        init_calls: AtomicUsize,
        init_side_effects: AtomicUsize,
        init_done: AtomicBool,
        registrations: AtomicUsize,
        registered_after_init: AtomicBool,
        read_only_seen: AtomicBool,
        shutdown_calls: AtomicUsize,
    }

    struct TestHandler {
        counters: Arc<Counters>,
        fail: bool,
    }

    impl ToolHandler for TestHandler {
        fn register_tools(&self, server: &mut McpServer, read_only: bool) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("registration denied");
            }
            server.register_tool(
                EchoTool::NAME,
                EchoTool::create_route(),
                Arc::new(EchoTool::http_handler),
            );
            self.counters.registrations.fetch_add(1, Ordering::SeqCst);
            self.counters
                .registered_after_init
                .store(self.counters.init_done.load(Ordering::SeqCst), Ordering::SeqCst);
            self.counters.read_only_seen.store(read_only, Ordering::SeqCst);
            Ok(())
        }
    }

    struct TestApp {
        config: Config,
        counters: Arc<Counters>,
        initialized: Mutex<bool>,
        fail_init: bool,
        fail_handlers: bool,
        fail_registration: bool,
    }

    impl TestApp {
        fn new(config: Config) -> Self {
            Self {
                config,
                counters: Arc::new(Counters::default()),
                initialized: Mutex::new(false),
                fail_init: false,
                fail_handlers: false,
                fail_registration: false,
            }
        }

        fn counters(&self) -> Arc<Counters> {
            self.counters.clone()
        }
    }

    #[async_trait]
    impl App for TestApp {
        fn config(&self) -> &Config {
            &self.config
        }

        async fn init(&self) -> anyhow::Result<()> {
            self.counters.init_calls.fetch_add(1, Ordering::SeqCst);

            let mut initialized = match self.initialized.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if *initialized {
                return Ok(());
            }
            if self.fail_init {
                anyhow::bail!("init denied");
            }

            self.counters.init_side_effects.fetch_add(1, Ordering::SeqCst);
            self.counters.init_done.store(true, Ordering::SeqCst);
            *initialized = true;
            Ok(())
        }

        async fn shutdown(&self) -> anyhow::Result<()> {
            self.counters.shutdown_calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn handlers(&self) -> anyhow::Result<Vec<Box<dyn ToolHandler>>> {
            if self.fail_handlers {
                anyhow::bail!("no handlers");
            }
            Ok(vec![Box::new(TestHandler {
                counters: self.counters.clone(),
                fail: self.fail_registration,
            })])
        }
    }

    fn http_config(port: u32) -> Config {
        let mut config = Config::default();
        config.server.transport_type = "http".to_string();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = port;
        config.shutdown_timeout = Duration::from_secs(5);
        config
    }

    #[tokio::test]
    async fn test_cancellation_is_classified_and_hook_runs_once() {
        let app = TestApp::new(http_config(0));
        let counters = app.counters();

        let signal = ShutdownSignal::new();
        let trigger = signal.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            trigger.trigger();
        });

        let started = std::time::Instant::now();
        let err = run_with_shutdown(app, signal).await.unwrap_err();

        assert!(err.is_cancelled());
        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(counters.init_calls.load(Ordering::SeqCst), 1);
        assert_eq!(counters.registrations.load(Ordering::SeqCst), 1);
        assert_eq!(counters.shutdown_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_transport_start_failure_returns_without_cancellation() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = u32::from(taken.local_addr().unwrap().port());

        let app = TestApp::new(http_config(port));
        let counters = app.counters();

        let signal = ShutdownSignal::new();
        let err = run_with_shutdown(app, signal.clone()).await.unwrap_err();

        assert!(!err.is_cancelled());
        assert!(matches!(
            err,
            Error::Transport(TransportError::BindError { .. })
        ));
        assert!(!signal.is_triggered());
        assert_eq!(counters.shutdown_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_init_failure_aborts_but_hook_still_runs() {
        let mut app = TestApp::new(http_config(0));
        app.fail_init = true;
        let counters = app.counters();

        let err = run_with_shutdown(app, ShutdownSignal::new())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Init(_)));
        assert_eq!(counters.registrations.load(Ordering::SeqCst), 0);
        assert_eq!(counters.shutdown_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_handlers_failure_aborts_but_hook_still_runs() {
        let mut app = TestApp::new(http_config(0));
        app.fail_handlers = true;
        let counters = app.counters();

        let err = run_with_shutdown(app, ShutdownSignal::new())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Handlers(_)));
        assert_eq!(err.to_string(), "getting handlers: no handlers");
        assert_eq!(counters.shutdown_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_registration_failure_aborts_but_hook_still_runs() {
        let mut app = TestApp::new(http_config(0));
        app.fail_registration = true;
        let counters = app.counters();

        let err = run_with_shutdown(app, ShutdownSignal::new())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Registration(_)));
        assert_eq!(counters.shutdown_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unsupported_transport_surfaces_after_registration() {
        let mut config = http_config(0);
        config.server.transport_type = "grpc".to_string();
        config.server.read_only = true;

        let app = TestApp::new(config);
        let counters = app.counters();

        let err = run_with_shutdown(app, ShutdownSignal::new())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Transport(TransportError::UnsupportedTransport(_))
        ));
        assert!(counters.registered_after_init.load(Ordering::SeqCst));
        assert!(counters.read_only_seen.load(Ordering::SeqCst));
        assert_eq!(counters.shutdown_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_init_side_effects_occur_exactly_once() {
        let app = TestApp::new(http_config(0));
        let counters = app.counters();

        app.init().await.unwrap();
        app.init().await.unwrap();
        app.init().await.unwrap();

        assert_eq!(counters.init_calls.load(Ordering::SeqCst), 3);
        assert_eq!(counters.init_side_effects.load(Ordering::SeqCst), 1);
    }
}
