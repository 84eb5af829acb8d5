//! # Twilio Connector
//!
//! A connector that exposes Twilio's communication primitives — calls,
//! messages, addresses, queues and subaccounts — as CRUD-style data models
//! for a host application server.
//!
//! The facade re-exports the three layers:
//!
//! - [`twilio_connector_core`] — model names, value bag, dispatcher and
//!   per-resource adapters
//! - [`client`](twilio_connector_client) — the Twilio REST API client
//! - [`runtime`](twilio_connector_runtime) — configuration, logging and the
//!   [`TwilioConnector`] assembly
//!
//! ## Example
//!
//! ```rust,ignore
//! use twilio_connector::prelude::*;
//! use twilio_connector::{ConfigLoader, TwilioConnector, logging};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigLoader::new().load()?;
//!     logging::init_from_config(&config.logging);
//!
//!     let connector = TwilioConnector::from_config(&config)?;
//!
//!     let values = ValueBag::new()
//!         .with("to", "+359899638562")
//!         .with("body", "Hi there !");
//!     let created = connector.create("message", &values).await?;
//!     println!("created: {created}");
//!     Ok(())
//! }
//! ```

pub use twilio_connector_client as client;
pub use twilio_connector_runtime as runtime;

pub use twilio_connector_client::TwilioClient;
pub use twilio_connector_core::{
    ApiError, ApiResult, BoxedTwilioApi, ConnectorError, ConnectorResult, ConnectorSettings,
    Dispatcher, ModelName, ModelRegistry, TwilioApi, ValueBag,
};
pub use twilio_connector_runtime::{
    ConfigError, ConfigLoader, ConfigResult, ConnectorConfig, TwilioConnector, logging,
};

/// Prelude for common imports.
pub mod prelude {
    pub use twilio_connector_core::prelude::*;
    pub use twilio_connector_runtime::TwilioConnector;
}
