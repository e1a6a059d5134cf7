//! Tracing and logging setup
//!
//! `RUST_LOG` always wins; otherwise the configured default directive is used.
//! Development gets human-readable output, production emits JSON lines.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use crate::config::Environment;

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info,sqlx=warn")
    pub default_directive: String,
    /// Emit JSON lines instead of the pretty format
    pub json: bool,
    /// Log span close events with their timings
    pub span_events: bool,
    /// Include file and line numbers
    pub file_line: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_directive: "info".to_string(),
            json: false,
            span_events: false,
            file_line: true,
        }
    }
}

impl TracingConfig {
    /// Debug output for our crates, quieter dependencies
    #[must_use]
    pub fn development() -> Self {
        Self {
            default_directive: "debug,tower_http=debug,sqlx=warn,hyper=info".to_string(),
            json: false,
            span_events: true,
            file_line: true,
        }
    }

    #[must_use]
    pub fn production() -> Self {
        Self {
            default_directive: "info,sqlx=warn".to_string(),
            json: true,
            span_events: false,
            file_line: false,
        }
    }

    /// Pick the preset that matches the deployment environment
    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Production | Environment::Staging => Self::production(),
            Environment::Development => Self::development(),
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_directive))
    }

    fn fmt_layer(&self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let span_events = if self.span_events {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let layer = fmt::layer()
            .with_file(self.file_line)
            .with_line_number(self.file_line)
            .with_target(true)
            .with_span_events(span_events);

        if self.json {
            layer.json().with_current_span(true).boxed()
        } else {
            layer.boxed()
        }
    }
}

/// Install the global subscriber
///
/// # Errors
/// Returns `AlreadyInitialized` when a global subscriber is already set.
pub fn try_init_tracing(config: &TracingConfig) -> Result<(), TracingError> {
    tracing_subscriber::registry()
        .with(config.fmt_layer())
        .with(config.filter())
        .try_init()
        .map_err(|_| TracingError::AlreadyInitialized)
}

/// Install the global subscriber, keeping any subscriber that is already set
pub fn init_tracing(config: &TracingConfig) {
    if try_init_tracing(config).is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
