// ── Runtime cleanup configuration ──
//
// These types describe *where* to connect and *whether* to mutate.
// They carry credential data and connection tuning, but never touch disk.
// The CLI constructs a `CleanupConfig` once and hands it in by value.

use std::time::Duration;

use secrecy::SecretString;
use serde::Serialize;
use url::Url;

use dnac_api::{TlsMode, TransportConfig};

/// Controller address of the standard lab pod.
pub const DEFAULT_URL: &str = "https://198.18.129.100";
/// Lab pod administrator.
pub const DEFAULT_USERNAME: &str = "admin";
/// Lab pod administrator password.
pub const DEFAULT_PASSWORD: &str = "C1sco12345";
/// Request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Whether a run issues any network calls.
///
/// `DryRun` makes no calls at all: no token request, no listing, no
/// deletes. `Execute` is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    DryRun,
    #[default]
    Execute,
}

impl Mode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run { Self::DryRun } else { Self::Execute }
    }

    pub fn is_dry_run(self) -> bool {
        self == Self::DryRun
    }
}

/// TLS verification strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// Built-in root store (strict).
    SystemDefaults,
    /// Skip verification (self-signed certs). Default for lab controllers.
    #[default]
    DangerAcceptInvalid,
}

/// Configuration for one cleanup run against a single controller.
///
/// Immutable once built; `Cleanup` takes it by value.
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    /// Controller URL (e.g., `https://198.18.129.100`).
    pub url: Url,
    pub username: String,
    pub password: SecretString,
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
    pub mode: Mode,
}

impl CleanupConfig {
    /// Config with default TLS, timeout and mode.
    pub fn new(url: Url, username: impl Into<String>, password: SecretString) -> Self {
        Self {
            url,
            username: username.into(),
            password,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            mode: Mode::default(),
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_tls(mut self, tls: TlsVerification) -> Self {
        self.tls = tls;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Translate into the api crate's transport settings.
    pub(crate) fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: match self.tls {
                TlsVerification::SystemDefaults => TlsMode::System,
                TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
            },
            timeout: self.timeout,
        }
    }
}
