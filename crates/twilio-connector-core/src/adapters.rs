//! Per-resource adapters.
//!
//! Each adapter translates the caller's [`ValueBag`] into the typed
//! parameters of one Twilio creation call and forwards the result unchanged.
//! Field mappings are fixed per resource; the configured origin number is
//! injected for call, message and queue creation.
//!
//! No field validation happens here: missing values go out as empty strings
//! and surface as provider errors, not local ones.

use serde_json::Value;

use crate::api::TwilioApi;
use crate::error::ApiResult;
use crate::params::{AccountParams, AddressParams, CallParams, MessageParams, QueueParams};
use crate::settings::ConnectorSettings;
use crate::values::ValueBag;

/// Creates an outbound call to the `to` number in the value bag.
///
/// The caller may override the configured welcome voice URL with a `url`
/// field.
pub async fn create_call(
    api: &dyn TwilioApi,
    settings: &ConnectorSettings,
    values: &ValueBag,
) -> ApiResult<Value> {
    let params = CallParams {
        to: values.str_or_empty("to").to_string(),
        from: settings.from_number.clone(),
        url: values
            .get_str("url")
            .unwrap_or(&settings.welcome_voice_url)
            .to_string(),
    };
    api.create_call(params).await
}

/// Creates an SMS message from the `to` and `body` fields.
pub async fn create_message(
    api: &dyn TwilioApi,
    settings: &ConnectorSettings,
    values: &ValueBag,
) -> ApiResult<Value> {
    let params = MessageParams {
        to: values.str_or_empty("to").to_string(),
        from: settings.from_number.clone(),
        body: values.str_or_empty("body").to_string(),
    };
    api.create_message(params).await
}

/// Creates an address from the seven structured postal fields.
pub async fn create_address(api: &dyn TwilioApi, values: &ValueBag) -> ApiResult<Value> {
    let params = AddressParams {
        friendly_name: values.str_or_empty("friendlyName").to_string(),
        customer_name: values.str_or_empty("customerName").to_string(),
        street: values.str_or_empty("street").to_string(),
        city: values.str_or_empty("city").to_string(),
        region: values.str_or_empty("region").to_string(),
        postal_code: values.str_or_empty("postalCode").to_string(),
        iso_country: values.str_or_empty("isoCountry").to_string(),
    };
    api.create_address(params).await
}

/// Creates a call queue named by the `friendlyName` field.
pub async fn create_queue(
    api: &dyn TwilioApi,
    settings: &ConnectorSettings,
    values: &ValueBag,
) -> ApiResult<Value> {
    let params = QueueParams {
        friendly_name: values.str_or_empty("friendlyName").to_string(),
        phone_number: settings.from_number.clone(),
    };
    api.create_queue(params).await
}

/// Creates a subaccount named by the `friendlyName` field.
pub async fn create_account(api: &dyn TwilioApi, values: &ValueBag) -> ApiResult<Value> {
    let params = AccountParams {
        friendly_name: values.str_or_empty("friendlyName").to_string(),
    };
    api.create_account(params).await
}
