//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use dnac_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to controller at {url}: {reason}")]
    #[diagnostic(
        code(dnac::connection_failed),
        help(
            "Check that the controller is running and reachable.\n\
             URL: {url}\n\
             Lab pods default to https://198.18.129.100; override with --url."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out: {message}")]
    #[diagnostic(
        code(dnac::timeout),
        help("Increase the timeout with --timeout or check controller responsiveness.")
    )]
    Timeout { message: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(dnac::auth_failed),
        help("Unable to clean up the lab due to authentication failure.\nCheck --username and --password.")
    )]
    AuthFailed { message: String },

    // ── Transport ────────────────────────────────────────────────────
    #[error("{0}")]
    #[diagnostic(code(dnac::transport))]
    Transport(String),

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(dnac::validation))]
    Validation { field: String, reason: String },

    // ── Partial failure (only with --fail-on-error) ──────────────────
    #[error("Cleanup finished with {failed} failed deletion(s) and {aborted} aborted famil(ies)")]
    #[diagnostic(
        code(dnac::incomplete),
        help("Re-run to retry; resources that are already gone will be reported as failures.")
    )]
    Incomplete { failed: usize, aborted: usize },

    // ── Serialization ────────────────────────────────────────────────
    #[error("Failed to serialize report: {0}")]
    #[diagnostic(code(dnac::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed { url, reason },
            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },
            CoreError::Timeout { message } => CliError::Timeout { message },
            CoreError::Api { status, body } => {
                CliError::Transport(format!("API error (HTTP {status}): {body}"))
            }
            CoreError::Transport { message } | CoreError::Decode { message } => {
                CliError::Transport(message)
            }
            CoreError::Config { message } => CliError::Validation {
                field: "configuration".into(),
                reason: message,
            },
        }
    }
}
