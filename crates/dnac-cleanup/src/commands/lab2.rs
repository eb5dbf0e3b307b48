//! Lab 2 has no cleanup steps yet; the command only announces itself.

use crate::cli::GlobalOpts;
use crate::error::CliError;

#[allow(clippy::unnecessary_wraps)]
pub fn handle(global: &GlobalOpts) -> Result<(), CliError> {
    if !global.quiet {
        eprintln!("Cleaning up DNAC configuration for Lab 2...");
    }
    Ok(())
}
