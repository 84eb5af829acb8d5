//! Configuration validation utilities.
//!
//! Validation covers only the startup-time settings surface. Request-time
//! field validation is deliberately absent everywhere: malformed value bags
//! go out to the provider and come back as provider errors.

use twilio_connector_core::ConnectorSettings;

use super::error::{ConfigError, ConfigResult};
use super::schema::ConnectorConfig;

/// Validates the entire configuration.
pub fn validate_config(config: &ConnectorConfig) -> ConfigResult<()> {
    validate_settings(&config.twilio)
}

/// Validates the Twilio account settings.
fn validate_settings(settings: &ConnectorSettings) -> ConfigResult<()> {
    if settings.account_sid.is_empty() {
        return Err(ConfigError::missing_field("twilio.account_sid"));
    }

    if !settings.account_sid.starts_with("AC") {
        return Err(ConfigError::validation(
            "Account SID must start with 'AC'",
        ));
    }

    if settings.auth_token.is_empty() {
        return Err(ConfigError::missing_field("twilio.auth_token"));
    }

    if settings.from_number.is_empty() {
        return Err(ConfigError::missing_field("twilio.from_number"));
    }

    validate_url(&settings.welcome_voice_url, "twilio.welcome_voice_url")?;

    Ok(())
}

/// Validates an HTTP(S) URL.
fn validate_url(url: &str, field: &str) -> ConfigResult<()> {
    if url.is_empty() {
        return Err(ConfigError::missing_field(field));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::validation(format!(
            "{field} must start with http:// or https://"
        )));
    }

    Ok(())
}
