//! Output formatting: run report as a table or JSON.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use dnac_core::{DeletionOutcome, DeletionStatus, FamilyReport, FamilyStatus, RunReport};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

#[derive(Tabled)]
struct OutcomeRow {
    #[tabled(rename = "Family")]
    family: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Detail")]
    detail: String,
}

impl OutcomeRow {
    fn new(family: &FamilyReport, outcome: &DeletionOutcome, color: bool) -> Self {
        Self {
            family: family.family.to_string(),
            kind: outcome.resource.kind.label().to_owned(),
            name: outcome.resource.label().to_owned(),
            id: outcome.resource.id.clone(),
            status: status_cell(outcome.status, color),
            detail: truncate(&outcome.detail, 80),
        }
    }
}

fn status_cell(status: DeletionStatus, color: bool) -> String {
    match (status, color) {
        (DeletionStatus::Deleted, true) => status.to_string().green().to_string(),
        (DeletionStatus::Failed, true) => status.to_string().red().to_string(),
        (_, false) => status.to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    let single_line = s.replace(['\n', '\r'], " ");
    if single_line.chars().count() <= max {
        return single_line;
    }
    let mut cut: String = single_line.chars().take(max.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}

/// One summary line per family.
fn summary_line(family: &FamilyReport, color: bool) -> String {
    let name = family.family.to_string();
    match &family.status {
        FamilyStatus::Skipped => format!("{name}: skipped (dry run)"),
        FamilyStatus::Completed => {
            let line = format!(
                "{name}: {} deleted, {} failed ({} planned)",
                family.deleted(),
                family.failed(),
                family.planned
            );
            if color && family.failed() > 0 {
                line.yellow().to_string()
            } else {
                line
            }
        }
        FamilyStatus::Aborted { reason } => {
            let line = format!(
                "{name}: aborted after {} deleted, {} failed -- {reason}",
                family.deleted(),
                family.failed()
            );
            if color { line.red().to_string() } else { line }
        }
    }
}

/// Render the report in the chosen format.
pub fn render_report(
    format: OutputFormat,
    report: &RunReport,
    color: bool,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::JsonCompact => Ok(serde_json::to_string(report)?),
        OutputFormat::Table => Ok(render_table(report, color)),
    }
}

fn render_table(report: &RunReport, color: bool) -> String {
    let rows: Vec<OutcomeRow> = report
        .families
        .iter()
        .flat_map(|f| f.outcomes.iter().map(move |o| OutcomeRow::new(f, o, color)))
        .collect();

    let mut out = String::new();
    if !rows.is_empty() {
        out.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        out.push('\n');
    }
    let summary: Vec<String> = report
        .families
        .iter()
        .map(|f| summary_line(f, color))
        .collect();
    out.push_str(&summary.join("\n"));
    out
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}
