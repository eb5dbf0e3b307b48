//! Lab 1: IP pools, then the site hierarchy.

use dnac_core::{Cleanup, CleanupEvent, DeletionStatus, Family, RunReport};

use crate::cli::GlobalOpts;
use crate::config::build_cleanup_config;
use crate::error::CliError;
use crate::output;

pub async fn handle(global: &GlobalOpts) -> Result<(), CliError> {
    let config = build_cleanup_config(global)?;
    let cleanup = Cleanup::new(config);
    let quiet = global.quiet;

    if !quiet {
        eprintln!("Cleaning up DNAC configuration for Lab 1...");
    }

    let report = cleanup
        .run_with(|event| {
            if !quiet {
                eprintln!("{}", progress_line(event));
            }
        })
        .await?;

    let color = output::should_color(global.color);
    let rendered = output::render_report(global.output, &report, color)?;
    output::print_output(&rendered, quiet);

    finish(&report, global.fail_on_error)
}

/// Failed deletes and aborted families only change the exit status when
/// `--fail-on-error` is set.
fn finish(report: &RunReport, fail_on_error: bool) -> Result<(), CliError> {
    if fail_on_error && report.has_failures() {
        return Err(CliError::Incomplete {
            failed: report.total_failed(),
            aborted: report.families.iter().filter(|f| f.is_aborted()).count(),
        });
    }
    Ok(())
}

fn progress_line(event: &CleanupEvent) -> String {
    match event {
        CleanupEvent::Authenticated => "Authentication successful!".into(),
        CleanupEvent::Listing { family } => match family {
            Family::Pools => "Retrieving list of ip pools...".into(),
            Family::Sites => "Retrieving list of sites...".into(),
        },
        CleanupEvent::Planned { family, count } => format!("Planned {count} {family} deletion(s)"),
        CleanupEvent::GroupStarted { kind, .. } => format!("Deleting {}...", kind.plural_label()),
        CleanupEvent::Outcome(outcome) => {
            let kind = outcome.resource.kind.label();
            let name = outcome.resource.label();
            match outcome.status {
                DeletionStatus::Deleted => format!("Deleted {kind}: {name}"),
                DeletionStatus::Failed => {
                    format!("Failed to delete {kind}: {name}. {}", outcome.detail)
                }
            }
        }
        CleanupEvent::FamilyAborted { family, reason } => {
            format!("Failed to cleanup {family}: {reason}")
        }
        CleanupEvent::FamilySkipped { family } => format!("Skipping {family} cleanup (dry run)"),
    }
}
