//! The central create dispatcher.
//!
//! The dispatcher is the single routing point between the host runtime and
//! the per-resource adapters: it matches the requested model name against the
//! five supported tags and invokes exactly one adapter, or fails locally with
//! [`ConnectorError::UnsupportedModel`] without reaching the external API.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::adapters;
use crate::api::BoxedTwilioApi;
use crate::error::{ConnectorError, ConnectorResult};
use crate::model::ModelName;
use crate::settings::ConnectorSettings;
use crate::values::ValueBag;

/// Routes model creation requests to the matching resource adapter.
///
/// Holds only shared read-only state (settings and the API client handle);
/// every dispatch is an independent request/response transaction, so a
/// `Dispatcher` can serve any number of concurrent requests.
#[derive(Clone)]
pub struct Dispatcher {
    /// Shared connector settings.
    settings: Arc<ConnectorSettings>,
    /// Injected external API client.
    api: BoxedTwilioApi,
}

impl Dispatcher {
    /// Creates a dispatcher over the given settings and API client.
    pub fn new(settings: Arc<ConnectorSettings>, api: BoxedTwilioApi) -> Self {
        Self { settings, api }
    }

    /// Returns the connector settings.
    pub fn settings(&self) -> &ConnectorSettings {
        &self.settings
    }

    /// Creates a resource of the requested model from the value bag.
    ///
    /// Resolves exactly once: with the created resource's representation as
    /// the provider returned it, or with the provider's error passed through
    /// unchanged. An unknown model name fails immediately with
    /// [`ConnectorError::UnsupportedModel`] and never touches the API.
    pub async fn create(&self, model: &str, values: &ValueBag) -> ConnectorResult<Value> {
        let Some(model) = ModelName::parse(model) else {
            debug!(model = %model, "Create request for unknown model");
            return Err(ConnectorError::UnsupportedModel(model.to_string()));
        };

        debug!(model = %model, fields = values.len(), "Dispatching create request");

        let api = self.api.as_ref();
        let result = match model {
            ModelName::Call => adapters::create_call(api, &self.settings, values).await,
            ModelName::Message => adapters::create_message(api, &self.settings, values).await,
            ModelName::Address => adapters::create_address(api, values).await,
            ModelName::Queue => adapters::create_queue(api, &self.settings, values).await,
            ModelName::Account => adapters::create_account(api, values).await,
        };

        Ok(result?)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("account_sid", &self.settings.account_sid)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TwilioApi;
    use crate::error::{ApiError, ApiResult};
    use crate::params::{AccountParams, AddressParams, CallParams, MessageParams, QueueParams};
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// A recorded API invocation with its shaped parameters.
    #[derive(Debug, Clone, PartialEq)]
    enum Recorded {
        Call(CallParams),
        Message(MessageParams),
        Address(AddressParams),
        Queue(QueueParams),
        Account(AccountParams),
    }

    impl Recorded {
        fn method(&self) -> &'static str {
            match self {
                Recorded::Call(_) => "create_call",
                Recorded::Message(_) => "create_message",
                Recorded::Address(_) => "create_address",
                Recorded::Queue(_) => "create_queue",
                Recorded::Account(_) => "create_account",
            }
        }
    }

    /// Mock API client recording every call and replaying configured results.
    #[derive(Default)]
    struct MockApi {
        calls: Mutex<Vec<Recorded>>,
        responses: Mutex<HashMap<&'static str, ApiResult<Value>>>,
    }

    impl MockApi {
        fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        fn respond(self: &Arc<Self>, method: &'static str, result: ApiResult<Value>) {
            self.responses.lock().unwrap().insert(method, result);
        }

        fn record(&self, call: Recorded) -> ApiResult<Value> {
            let method = call.method();
            self.calls.lock().unwrap().push(call);
            self.responses
                .lock()
                .unwrap()
                .get(method)
                .cloned()
                .unwrap_or(Ok(Value::Null))
        }

        fn recorded(&self) -> Vec<Recorded> {
            self.calls.lock().unwrap().clone()
        }

        fn methods(&self) -> Vec<&'static str> {
            self.recorded().iter().map(Recorded::method).collect()
        }
    }

    #[async_trait]
    impl TwilioApi for MockApi {
        async fn create_call(&self, params: CallParams) -> ApiResult<Value> {
            self.record(Recorded::Call(params))
        }

        async fn create_message(&self, params: MessageParams) -> ApiResult<Value> {
            self.record(Recorded::Message(params))
        }

        async fn create_address(&self, params: AddressParams) -> ApiResult<Value> {
            self.record(Recorded::Address(params))
        }

        async fn create_queue(&self, params: QueueParams) -> ApiResult<Value> {
            self.record(Recorded::Queue(params))
        }

        async fn create_account(&self, params: AccountParams) -> ApiResult<Value> {
            self.record(Recorded::Account(params))
        }
    }

    fn settings() -> Arc<ConnectorSettings> {
        Arc::new(ConnectorSettings {
            account_sid: "AC00000000000000000000000000000000".into(),
            auth_token: "token".into(),
            from_number: "+15005550006".into(),
            ..Default::default()
        })
    }

    fn dispatcher(api: &Arc<MockApi>) -> Dispatcher {
        Dispatcher::new(settings(), Arc::clone(api) as BoxedTwilioApi)
    }

    #[tokio::test]
    async fn test_each_model_routes_to_exactly_one_adapter() {
        let expected = [
            ("call", "create_call"),
            ("message", "create_message"),
            ("address", "create_address"),
            ("queue", "create_queue"),
            ("account", "create_account"),
        ];

        for (model, method) in expected {
            let api = MockApi::new();
            let result = dispatcher(&api).create(model, &ValueBag::new()).await;
            assert!(result.is_ok());
            assert_eq!(api.methods(), vec![method], "model '{model}'");
        }
    }

    #[tokio::test]
    async fn test_unknown_model_fails_without_api_call() {
        let api = MockApi::new();
        let err = dispatcher(&api)
            .create("invalid", &ValueBag::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ConnectorError::UnsupportedModel(name) if name == "invalid"));
        assert!(api.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_call_success_passes_payload_through() {
        let api = MockApi::new();
        api.respond("create_call", Ok(json!("X")));

        let values = ValueBag::new().with("to", "+359899638562");
        let created = dispatcher(&api).create("call", &values).await.unwrap();

        assert_eq!(created, json!("X"));
        match &api.recorded()[..] {
            [Recorded::Call(params)] => {
                assert_eq!(params.to, "+359899638562");
                assert_eq!(params.from, "+15005550006");
                assert_eq!(params.url, crate::settings::DEFAULT_WELCOME_VOICE_URL);
            }
            other => panic!("unexpected calls: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_message_error_passes_through_unchanged() {
        let api = MockApi::new();
        api.respond("create_message", Err(ApiError::Other("My error".into())));

        let values = ValueBag::new()
            .with("to", "+359899638562")
            .with("body", "Hi there !");
        let err = dispatcher(&api).create("message", &values).await.unwrap_err();

        assert!(matches!(err, ConnectorError::Api(ApiError::Other(msg)) if msg == "My error"));
        assert_eq!(api.recorded().len(), 1);
    }

    #[tokio::test]
    async fn test_address_fields_forwarded_verbatim() {
        let api = MockApi::new();
        let values = ValueBag::new()
            .with("friendlyName", "Test Address")
            .with("customerName", "Test")
            .with("street", "Some beautiful street")
            .with("city", "Racoon City")
            .with("region", "CA")
            .with("postalCode", "12345")
            .with("isoCountry", "US");

        dispatcher(&api).create("address", &values).await.unwrap();

        assert_eq!(
            api.recorded(),
            vec![Recorded::Address(AddressParams {
                friendly_name: "Test Address".into(),
                customer_name: "Test".into(),
                street: "Some beautiful street".into(),
                city: "Racoon City".into(),
                region: "CA".into(),
                postal_code: "12345".into(),
                iso_country: "US".into(),
            })]
        );
    }

    #[tokio::test]
    async fn test_caller_url_overrides_welcome_voice_url() {
        let api = MockApi::new();
        let values = ValueBag::new()
            .with("to", "+359899638562")
            .with("url", "https://example.com/twiml");

        dispatcher(&api).create("call", &values).await.unwrap();

        match &api.recorded()[..] {
            [Recorded::Call(params)] => assert_eq!(params.url, "https://example.com/twiml"),
            other => panic!("unexpected calls: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_queue_gets_configured_origin_number() {
        let api = MockApi::new();
        let values = ValueBag::new().with("friendlyName", "Support");

        dispatcher(&api).create("queue", &values).await.unwrap();

        assert_eq!(
            api.recorded(),
            vec![Recorded::Queue(QueueParams {
                friendly_name: "Support".into(),
                phone_number: "+15005550006".into(),
            })]
        );
    }

    #[tokio::test]
    async fn test_missing_fields_forwarded_empty_not_rejected() {
        // Malformed requests are the provider's to reject.
        let api = MockApi::new();
        dispatcher(&api).create("message", &ValueBag::new()).await.unwrap();

        match &api.recorded()[..] {
            [Recorded::Message(params)] => {
                assert_eq!(params.to, "");
                assert_eq!(params.body, "");
            }
            other => panic!("unexpected calls: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_concurrent_dispatches_are_independent() {
        let api = MockApi::new();
        api.respond("create_call", Ok(json!("call-data")));
        api.respond("create_message", Ok(json!("message-data")));
        let dispatcher = dispatcher(&api);

        let call_values = ValueBag::new().with("to", "+359899638562");
        let message_values = ValueBag::new()
            .with("to", "+359899638562")
            .with("body", "Hi there !");

        let (call, message) = tokio::join!(
            dispatcher.create("call", &call_values),
            dispatcher.create("message", &message_values),
        );

        assert_eq!(call.unwrap(), json!("call-data"));
        assert_eq!(message.unwrap(), json!("message-data"));
        assert_eq!(api.recorded().len(), 2);
    }
}
