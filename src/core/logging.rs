//! Logging initialization.
//!
//! All log output goes to stderr: stdout carries the protocol stream when
//! serving over stdio.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging subsystem.
///
/// Configures tracing with the given level as the global directive,
/// layered with any per-target directives from `RUST_LOG`, and the given
/// output format ("json" or "text"). Calling this more than once is a
/// no-op, so an idempotent application init can route through it safely.
pub fn init_logging(level: &str, format: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if format.eq_ignore_ascii_case("json") {
        builder.json().try_init().ok();
    } else {
        builder.try_init().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_repeatable() {
        init_logging("debug", "text");
        init_logging("info", "json");
        init_logging("not-a-level", "not-a-format");
    }
}
