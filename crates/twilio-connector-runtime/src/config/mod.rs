//! Configuration loading, schema and validation.

mod error;
mod loader;
mod schema;
mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::{ConfigLoader, Profile};
pub use schema::{ConnectorConfig, LogFormat, LogLevel, LoggingConfig};
pub use validation::validate_config;
