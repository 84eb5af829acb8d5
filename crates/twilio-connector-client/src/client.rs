//! HTTP client for the Twilio REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use twilio_connector_core::{
    AccountParams, AddressParams, ApiError, ApiResult, CallParams, ConnectorSettings,
    MessageParams, QueueParams, TwilioApi,
};

/// Base URL of the Twilio REST API (2010-04-01 version).
pub const DEFAULT_API_BASE: &str = "https://api.twilio.com/2010-04-01";

/// Twilio REST API client.
///
/// Resource creations POST to the account-scoped collections
/// (`/Accounts/{sid}/Calls.json`, `Messages.json`, ...); subaccount creation
/// posts to the top-level `/Accounts.json`. Success bodies are returned as
/// raw JSON, unshaped; error bodies are decoded into
/// [`ApiError::Api`].
pub struct TwilioClient {
    http: Client,
    base_url: String,
    account_sid: String,
    auth_token: String,
}

impl TwilioClient {
    /// Creates a client against the production Twilio API.
    pub fn new(settings: &ConnectorSettings) -> Self {
        Self::with_base_url(settings, DEFAULT_API_BASE)
    }

    /// Creates a client against a custom API base URL.
    ///
    /// Used for pointing the connector at a mock provider in tests.
    pub fn with_base_url(settings: &ConnectorSettings, base_url: impl Into<String>) -> Self {
        let http = ClientBuilder::new()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            account_sid: settings.account_sid.clone(),
            auth_token: settings.auth_token.clone(),
        }
    }

    /// Returns the URL of an account-scoped resource collection.
    fn resource_url(&self, resource: &str) -> String {
        format!(
            "{}/Accounts/{}/{}.json",
            self.base_url, self.account_sid, resource
        )
    }

    /// Returns the URL of the top-level accounts collection.
    fn accounts_url(&self) -> String {
        format!("{}/Accounts.json", self.base_url)
    }

    /// POSTs form-encoded parameters and decodes the response.
    async fn post_form<P: Serialize + ?Sized>(&self, url: &str, params: &P) -> ApiResult<Value> {
        debug!(url = %url, "POST to Twilio REST API");

        let response = self
            .http
            .post(url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(params)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(error_from_body(status.as_u16(), &body));
        }

        trace!(body = %body, "Twilio response");
        serde_json::from_str(&body).map_err(Into::into)
    }
}

/// Decodes a Twilio error body (`{"code": ..., "message": ..., "status": ...}`).
///
/// Bodies that are not JSON fall back to the raw text.
fn error_from_body(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => ApiError::Api {
            status,
            code: json.get("code").and_then(Value::as_u64),
            message: json
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(body)
                .to_string(),
        },
        Err(_) => ApiError::Api {
            status,
            code: None,
            message: body.trim().to_string(),
        },
    }
}

#[async_trait]
impl TwilioApi for TwilioClient {
    async fn create_call(&self, params: CallParams) -> ApiResult<Value> {
        self.post_form(&self.resource_url("Calls"), &params).await
    }

    async fn create_message(&self, params: MessageParams) -> ApiResult<Value> {
        self.post_form(&self.resource_url("Messages"), &params).await
    }

    async fn create_address(&self, params: AddressParams) -> ApiResult<Value> {
        self.post_form(&self.resource_url("Addresses"), &params).await
    }

    async fn create_queue(&self, params: QueueParams) -> ApiResult<Value> {
        self.post_form(&self.resource_url("Queues"), &params).await
    }

    async fn create_account(&self, params: AccountParams) -> ApiResult<Value> {
        self.post_form(&self.accounts_url(), &params).await
    }
}
