//! Unified error types for the connector core.
//!
//! Configuration and runtime errors are defined in `twilio-connector-runtime`.

use thiserror::Error;

// =============================================================================
// API Errors
// =============================================================================

/// Errors surfaced by the external communications API client.
///
/// Provider failures are passed through to the caller unchanged; the connector
/// performs no retry and no finer-grained classification beyond the split the
/// client itself needs (HTTP-level, transport-level, decode-level).
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Twilio rejected or failed the request.
    #[error("Twilio API error ({status}): {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Twilio error code, when the error body carried one.
        code: Option<u64>,
        /// Human-readable message from the provider.
        message: String,
    },

    /// Network-level failure before a response was received.
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body could not be decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

// =============================================================================
// Connector Errors
// =============================================================================

/// Errors returned by a dispatch operation.
#[derive(Debug, Clone, Error)]
pub enum ConnectorError {
    /// The requested model name matches none of the supported resources.
    ///
    /// Generated locally and synchronously; the external API is never reached.
    #[error("unsupported model: '{0}'")]
    UnsupportedModel(String),

    /// The external API failed the creation request.
    #[error(transparent)]
    Api(#[from] ApiError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for external API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type for dispatch operations.
pub type ConnectorResult<T> = Result<T, ConnectorError>;
