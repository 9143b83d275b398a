//! Configuration validation rules.
//!
//! Validation is a pure pass over an already-loaded [`Config`]: every rule
//! runs and every violation is collected, so a single call surfaces all
//! problems at once instead of stopping at the first.

use super::config::Config;
use thiserror::Error;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation error on field '{field}': {message}")]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `server.port`.
    pub field: String,

    /// Human-readable reason.
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// All validation failures for one configuration, in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", format_errors(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    /// Number of collected violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// An empty collection is equivalent to success.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the individual field errors.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }
}

const VALID_LEVELS: [&str; 4] = ["debug", "info", "warn", "error"];
const VALID_FORMATS: [&str; 2] = ["json", "text"];
const VALID_TRANSPORTS: [&str; 2] = ["stdio", "http"];

impl Config {
    /// Validate the configuration against the fixed rule set.
    ///
    /// Enum-like string fields pass when empty (empty means "use the
    /// default downstream"). HTTP-specific fields are only checked when
    /// the transport type is `"http"`, where a zero port likewise means
    /// "unset". Never short-circuits.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        self.validate_logging(&mut errors);
        self.validate_server(&mut errors);

        // shutdown_timeout is an unsigned Duration, so the non-negativity
        // rule holds by construction.

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    fn validate_logging(&self, errors: &mut Vec<ValidationError>) {
        let level = self.logging.level.as_str();
        if !level.is_empty() && !VALID_LEVELS.contains(&level) {
            errors.push(ValidationError::new(
                "logging.level",
                "must be one of: debug, info, warn, error",
            ));
        }

        let format = self.logging.format.as_str();
        if !format.is_empty() && !VALID_FORMATS.contains(&format) {
            errors.push(ValidationError::new(
                "logging.format",
                "must be one of: json, text",
            ));
        }
    }

    fn validate_server(&self, errors: &mut Vec<ValidationError>) {
        let transport = self.server.transport_type.as_str();
        if !transport.is_empty() && !VALID_TRANSPORTS.contains(&transport) {
            errors.push(ValidationError::new(
                "server.transport_type",
                "must be one of: stdio, http",
            ));
        }

        if transport == "http" {
            if self.server.port != 0 && self.server.port > 65535 {
                errors.push(ValidationError::new(
                    "server.port",
                    "port must be between 1 and 65535",
                ));
            }

            if self.server.host.is_empty() {
                errors.push(ValidationError::new(
                    "server.host",
                    "host is required for HTTP transport",
                ));
            }
        }
    }
}
