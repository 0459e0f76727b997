//! Formatting functions for operator output.
//!
//! `format_*` functions build plain strings and are unit tested; `display_*`
//! functions add styling and print them.

use console::style;

use crate::boundary::ReleaseWarning;
use crate::domain::ReleaseIntent;
use crate::error::CommandError;
use crate::plan::{CommandStep, SkippedStep};

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print a non-fatal warning.
pub fn display_warning(warning: &ReleaseWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

pub fn format_header(name: &str, current_version: &str) -> String {
    format!(
        "Releasing a new version of `{}` (current version: {})",
        name, current_version
    )
}

pub fn display_header(name: &str, current_version: &str) {
    println!("{}", style(format_header(name, current_version)).bold());
}

/// Status line announcing a step.
///
/// Dry runs also show the exact command that would have been run.
pub fn format_step(step: &CommandStep, dry_run: bool) -> String {
    if dry_run {
        format!("[dry run] {}: {}", step.description, step.command_line())
    } else {
        step.description.clone()
    }
}

pub fn display_step(step: &CommandStep, dry_run: bool) {
    display_status(&format_step(step, dry_run));
}

/// Echo what a step printed, indented under its status line.
pub fn display_step_output(stdout: &str) {
    for line in stdout.lines().filter(|l| !l.trim().is_empty()) {
        println!("  {}", style(line).dim());
    }
}

pub fn display_skipped(skipped: &[SkippedStep]) {
    for step in skipped {
        println!("  {} {} ({})", style("-").dim(), step.description, step.reason);
    }
}

/// Summary line for a finished release
pub fn format_success_report(name: &str, intent: &ReleaseIntent) -> String {
    let mut report = format!(
        "Released {}@{} (tag: {})",
        name, intent.target_version, intent.distribution_tag
    );
    if intent.dry_run {
        report.push_str(" [dry run, nothing was changed]");
    }
    report
}

pub fn display_success_report(name: &str, intent: &ReleaseIntent, skipped: &[SkippedStep]) {
    display_success(&format_success_report(name, intent));
    if !skipped.is_empty() {
        println!("Skipped:");
        display_skipped(skipped);
    }
}

/// Recovery guidance for a failed pipeline.
///
/// `manual` starts with the failing command followed by every command that
/// never ran, so the operator can finish the release by hand in order.
pub fn format_failure_details(error: &CommandError, manual: &[String]) -> String {
    let mut report = String::new();

    let stdout = error.stdout.trim();
    if !stdout.is_empty() {
        report.push_str(&format!("\nstdout:\n{}\n", stdout));
    }
    let stderr = error.stderr.trim();
    if !stderr.is_empty() {
        report.push_str(&format!("\nstderr:\n{}\n", stderr));
    }

    report.push_str("\nThe following commands still need to be run manually:\n");
    for command in manual {
        report.push_str(&format!("  {}\n", command));
    }
    report
}

pub fn display_failure_details(error: &CommandError, manual: &[String]) {
    eprint!("{}", format_failure_details(error, manual));
}
