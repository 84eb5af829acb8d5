//! Connector assembly.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use twilio_connector_client::TwilioClient;
use twilio_connector_core::{
    BoxedTwilioApi, ConnectorResult, ConnectorSettings, Dispatcher, GeneratedModelRegistry,
    ModelRegistry, ValueBag,
};

use crate::config::{ConfigResult, ConnectorConfig, validate_config};

/// A fully assembled Twilio connector.
///
/// Bundles the validated settings, the API client and the dispatcher into the
/// single object a host embeds. All state is read-only after construction, so
/// the connector serves concurrent requests without coordination.
pub struct TwilioConnector {
    settings: Arc<ConnectorSettings>,
    dispatcher: Dispatcher,
    registry: Option<GeneratedModelRegistry>,
}

impl TwilioConnector {
    /// Validates the configuration and wires the production REST client.
    pub fn from_config(config: &ConnectorConfig) -> ConfigResult<Self> {
        validate_config(config)?;

        let settings = Arc::new(config.twilio.clone());
        let api: BoxedTwilioApi = Arc::new(TwilioClient::new(&settings));

        info!(account_sid = %settings.account_sid, "Twilio connector initialized");
        Ok(Self::assemble(settings, api))
    }

    /// Wires the connector over a custom API client.
    ///
    /// For embedding hosts that manage their own client, and for tests.
    pub fn with_api(settings: Arc<ConnectorSettings>, api: BoxedTwilioApi) -> Self {
        Self::assemble(settings, api)
    }

    fn assemble(settings: Arc<ConnectorSettings>, api: BoxedTwilioApi) -> Self {
        let registry = settings
            .auto_generate_models
            .then_some(GeneratedModelRegistry);

        Self {
            dispatcher: Dispatcher::new(Arc::clone(&settings), api),
            settings,
            registry,
        }
    }

    /// Creates a resource of the requested model; see [`Dispatcher::create`].
    pub async fn create(&self, model: &str, values: &ValueBag) -> ConnectorResult<Value> {
        self.dispatcher.create(model, values).await
    }

    /// Returns the connector settings.
    pub fn settings(&self) -> &ConnectorSettings {
        &self.settings
    }

    /// Returns the dispatcher.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// The synthesized model registry, when `auto_generate_models` is set.
    ///
    /// Hosts use this to register the connector's models without hand-writing
    /// their schemas.
    pub fn model_registry(&self) -> Option<&dyn ModelRegistry> {
        self.registry.as_ref().map(|r| r as &dyn ModelRegistry)
    }
}
