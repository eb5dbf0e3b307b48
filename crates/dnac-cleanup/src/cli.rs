//! Clap derive structures for the `dnac-cleanup` CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};

use dnac_core::config::{DEFAULT_PASSWORD, DEFAULT_TIMEOUT_SECS, DEFAULT_URL, DEFAULT_USERNAME};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// dnac-cleanup -- reset DNA Center lab configuration
#[derive(Debug, Parser)]
#[command(
    name = "dnac-cleanup",
    version,
    about = "A CLI tool for cleaning up DNAC configurations",
    long_about = "Deletes DNA Center configuration objects in dependency order so a lab\n\
        pod can be reused: IP sub pools before global pools, then floors,\n\
        buildings and areas (innermost first).",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct GlobalOpts {
    /// DNAC URL
    #[arg(long, default_value = DEFAULT_URL, global = true)]
    pub url: String,

    /// DNAC Username
    #[arg(long, default_value = DEFAULT_USERNAME, global = true)]
    pub username: String,

    /// DNAC Password
    #[arg(long, default_value = DEFAULT_PASSWORD, global = true, hide_default_value = true)]
    pub password: String,

    /// Send no requests; report both families as skipped
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Exit non-zero when any deletion fails or a family is aborted
    #[arg(long, global = true)]
    pub fail_on_error: bool,

    /// Verify the controller's TLS certificate
    #[arg(long, global = true)]
    pub verify_tls: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    /// Report format
    #[arg(long, short = 'o', default_value = "table", global = true)]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress and report output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Cleanup configuration for Lab 1.
    Lab1,

    /// Cleanup configuration for Lab 2.
    Lab2,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
