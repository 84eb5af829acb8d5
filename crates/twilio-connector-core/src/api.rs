//! The injected interface to the external communications API.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiResult;
use crate::params::{AccountParams, AddressParams, CallParams, MessageParams, QueueParams};

/// Creation surface of the Twilio REST API.
///
/// One method per supported resource, each taking the fully shaped parameters
/// and resolving exactly once with the created resource's representation (as
/// the provider returned it, unshaped) or the provider's error.
///
/// The production implementation lives in `twilio-connector-client`; tests
/// substitute mocks. Timeout and connection pooling are the implementation's
/// concern — this layer imposes neither.
#[async_trait]
pub trait TwilioApi: Send + Sync {
    /// Creates an outbound call.
    async fn create_call(&self, params: CallParams) -> ApiResult<Value>;

    /// Creates an SMS message.
    async fn create_message(&self, params: MessageParams) -> ApiResult<Value>;

    /// Creates an address.
    async fn create_address(&self, params: AddressParams) -> ApiResult<Value>;

    /// Creates a call queue.
    async fn create_queue(&self, params: QueueParams) -> ApiResult<Value>;

    /// Creates a subaccount.
    async fn create_account(&self, params: AccountParams) -> ApiResult<Value>;
}

/// A shared API client handle.
pub type BoxedTwilioApi = Arc<dyn TwilioApi>;
