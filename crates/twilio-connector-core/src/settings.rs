//! Process-wide connector settings.

use serde::{Deserialize, Serialize};

/// Voice URL played on created calls when the caller supplies none.
pub const DEFAULT_WELCOME_VOICE_URL: &str = "https://demo.twilio.com/welcome/voice";

/// Read-only connector settings.
///
/// Loaded once at startup and shared by reference into every adapter
/// invocation; never mutated at request time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorSettings {
    /// Twilio account SID (`AC...`). Required.
    pub account_sid: String,

    /// Twilio auth token. Required.
    pub auth_token: String,

    /// Origin phone number used for call, message and queue creation.
    pub from_number: String,

    /// Whether to synthesize model schemas from the provider's own resource
    /// shapes.
    pub auto_generate_models: bool,

    /// Default TwiML URL for call creation.
    pub welcome_voice_url: String,

    /// Destination number used only by the integration test suite.
    pub outgoing_caller_test_number: Option<String>,
}

impl Default for ConnectorSettings {
    fn default() -> Self {
        Self {
            account_sid: String::new(),
            auth_token: String::new(),
            from_number: String::new(),
            auto_generate_models: true,
            welcome_voice_url: DEFAULT_WELCOME_VOICE_URL.to_string(),
            outgoing_caller_test_number: None,
        }
    }
}
