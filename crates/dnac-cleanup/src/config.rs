//! Builds the immutable `CleanupConfig` from command-line flags.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use dnac_core::{CleanupConfig, Mode, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub fn build_cleanup_config(global: &GlobalOpts) -> Result<CleanupConfig, CliError> {
    let url = parse_url(&global.url)?;

    if global.timeout == 0 {
        return Err(CliError::Validation {
            field: "timeout".into(),
            reason: "must be at least 1 second".into(),
        });
    }

    let tls = if global.verify_tls {
        TlsVerification::SystemDefaults
    } else {
        TlsVerification::DangerAcceptInvalid
    };

    Ok(CleanupConfig::new(
        url,
        global.username.clone(),
        SecretString::from(global.password.clone()),
    )
    .with_tls(tls)
    .with_timeout(Duration::from_secs(global.timeout))
    .with_mode(Mode::from_dry_run(global.dry_run)))
}

fn parse_url(raw: &str) -> Result<Url, CliError> {
    let url: Url = raw.parse().map_err(|e| CliError::Validation {
        field: "url".into(),
        reason: format!("invalid URL '{raw}': {e}"),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(CliError::Validation {
            field: "url".into(),
            reason: format!("unsupported scheme '{}' (expected http or https)", url.scheme()),
        });
    }

    Ok(url)
}
