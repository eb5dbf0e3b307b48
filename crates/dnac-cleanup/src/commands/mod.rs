//! Command dispatch.

pub mod lab1;
pub mod lab2;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a lab command to its handler.
pub async fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Lab1 => lab1::handle(global).await,
        Command::Lab2 => lab2::handle(global),
        // Completions are handled before dispatch
        Command::Completions(_) => Ok(()),
    }
}
