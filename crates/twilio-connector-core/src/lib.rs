//! # Twilio Connector Core
//!
//! The dispatch and adapter layer of the Twilio connector.
//!
//! This crate maps CRUD-style model creation requests onto the Twilio REST
//! API. A host application server hands the [`Dispatcher`] a logical model
//! name (`call`, `message`, `address`, `queue`, `account`) together with an
//! untyped [`ValueBag`]; the dispatcher routes the request to the matching
//! per-resource adapter, which shapes the fields into the concrete Twilio
//! creation call and passes the provider's response back opaquely.
//!
//! ## Control Flow
//!
//! ```text
//! ┌──────────────┐     ┌────────────┐     ┌───────────┐     ┌────────────┐
//! │ Host runtime │────▶│ Dispatcher │────▶│  Adapter  │────▶│ TwilioApi  │
//! │  (external)  │◀────│            │◀────│ (per res) │◀────│  (client)  │
//! └──────────────┘     └────────────┘     └───────────┘     └────────────┘
//! ```
//!
//! Every create request is a single independent transaction: no state is
//! retained across calls, concurrent dispatches do not interfere, and each
//! request resolves exactly once with either the created resource payload or
//! an error.
//!
//! ## Seams
//!
//! - [`TwilioApi`] is the injected client interface; the production
//!   implementation lives in `twilio-connector-client`, tests substitute
//!   mocks.
//! - [`ModelRegistry`] is the host-facing model lookup capability; when
//!   model auto-generation is enabled a [`GeneratedModelRegistry`] built
//!   from the provider's resource shapes implements it.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use twilio_connector_core::{ConnectorSettings, Dispatcher, ValueBag};
//!
//! let settings = Arc::new(ConnectorSettings {
//!     account_sid: "AC...".into(),
//!     auth_token: "...".into(),
//!     from_number: "+15005550006".into(),
//!     ..Default::default()
//! });
//! let dispatcher = Dispatcher::new(settings, api_client);
//!
//! let mut values = ValueBag::new();
//! values.insert("to", "+359899638562");
//! let created = dispatcher.create("call", &values).await?;
//! ```

pub mod adapters;
pub mod api;
pub mod dispatcher;
pub mod error;
pub mod model;
pub mod params;
pub mod settings;
pub mod values;

pub use api::{BoxedTwilioApi, TwilioApi};
pub use dispatcher::Dispatcher;
pub use error::{ApiError, ApiResult, ConnectorError, ConnectorResult};
pub use model::{GeneratedModelRegistry, ModelDescriptor, ModelField, ModelName, ModelRegistry};
pub use params::{AccountParams, AddressParams, CallParams, MessageParams, QueueParams};
pub use settings::{ConnectorSettings, DEFAULT_WELCOME_VOICE_URL};
pub use values::ValueBag;

/// Prelude for common imports.
pub mod prelude {
    pub use super::api::{BoxedTwilioApi, TwilioApi};
    pub use super::dispatcher::Dispatcher;
    pub use super::error::{ApiError, ApiResult, ConnectorError, ConnectorResult};
    pub use super::model::ModelName;
    pub use super::settings::ConnectorSettings;
    pub use super::values::ValueBag;
}
