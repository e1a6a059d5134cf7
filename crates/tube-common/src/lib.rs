//! # tube-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    validate_password_strength, AccessToken, Claims, JwtService, PasswordService,
    MAX_PASSWORD_LEN, MIN_PASSWORD_LEN,
};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    LedgerConfig, RateLimitConfig, ServerConfig, SnowflakeConfig, StorageBackend, StorageConfig,
};
pub use error::AppError;
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
