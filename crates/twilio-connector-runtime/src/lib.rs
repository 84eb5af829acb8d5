//! # Twilio Connector Runtime
//!
//! Orchestration layer for the Twilio connector:
//!
//! - Configuration schema and figment-based loading (`twilio.toml` /
//!   `TWILIO_*` environment variables)
//! - Startup validation of required settings
//! - Logging setup over `tracing-subscriber`
//! - [`TwilioConnector`]: the assembled settings + client + dispatcher
//!
//! ```ignore
//! use twilio_connector_runtime::{ConfigLoader, TwilioConnector, logging};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigLoader::new().load()?;
//!     logging::init_from_config(&config.logging);
//!
//!     let connector = TwilioConnector::from_config(&config)?;
//!     let created = connector.create("message", &values).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod connector;
pub mod logging;

// Re-exports
pub use config::{
    ConfigError, ConfigLoader, ConfigResult, ConnectorConfig, LogFormat, LogLevel, LoggingConfig,
    Profile,
};
pub use connector::TwilioConnector;
pub use logging::LoggingBuilder;

// Re-export tracing for use by embedding hosts
pub use tracing;
pub use tracing_subscriber;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tracing::{Level, debug, error, info, instrument, span, trace, warn};
}
