// ── Core error types ──
//
// Errors that end a run or a family's cleanup. A single rejected delete
// is *not* an error here -- it becomes a `Failed` outcome instead.
// The `From<dnac_api::Error>` impl translates transport-layer errors
// into these variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to controller at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Request timed out: {message}")]
    Timeout { message: String },

    #[error("Transport error: {message}")]
    Transport { message: String },

    // ── API errors ───────────────────────────────────────────────────
    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected response: {message}")]
    Decode { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Returns `true` for errors raised while obtaining the token.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::AuthenticationFailed { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<dnac_api::Error> for CoreError {
    fn from(err: dnac_api::Error) -> Self {
        match err {
            dnac_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            dnac_api::Error::NotAuthenticated => CoreError::AuthenticationFailed {
                message: "no token -- login was not performed".into(),
            },
            dnac_api::Error::Transport(e) if e.is_connect() => CoreError::ConnectionFailed {
                url: e.url().map(ToString::to_string).unwrap_or_default(),
                reason: e.to_string(),
            },
            dnac_api::Error::Transport(e) if e.is_timeout() => CoreError::Timeout {
                message: e.to_string(),
            },
            dnac_api::Error::Transport(e) => CoreError::Transport {
                message: e.to_string(),
            },
            dnac_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("invalid controller URL: {e}"),
            },
            dnac_api::Error::Tls(message) => CoreError::Config { message },
            err @ dnac_api::Error::InvalidId { .. } => CoreError::Decode {
                message: err.to_string(),
            },
            dnac_api::Error::Api { status, body } => CoreError::Api { status, body },
            dnac_api::Error::Deserialization { message, .. } => CoreError::Decode { message },
        }
    }
}
