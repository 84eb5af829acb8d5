//! # Twilio Connector Client
//!
//! The production [`TwilioApi`](twilio_connector_core::TwilioApi)
//! implementation: form-encoded POSTs to the Twilio REST API, authenticated
//! with the account SID and auth token over HTTP basic auth.
//!
//! The client is stateless apart from its pooled HTTP connections; each
//! creation request is a single independent POST with no retry, batching or
//! backpressure at this layer.

pub mod client;

pub use client::{DEFAULT_API_BASE, TwilioClient};
