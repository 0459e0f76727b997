use std::env;
use std::process;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use cut_release::cli::{run_release, Args, WorkflowResult};
use cut_release::prompt::TerminalPrompter;
use cut_release::{ui, update, CutReleaseError};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // clap exits with 2 on usage errors; every failure here exits with 1
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    match run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<i32> {
    let project_dir = env::current_dir().context("Cannot determine the current directory")?;
    // resolved before an update can replace the binary
    let program = env::current_exe().context("Cannot locate the running cut-release")?;

    match run_release(&args, &project_dir, &TerminalPrompter::new()) {
        Ok(WorkflowResult::UpdateInstalled(version)) => {
            let forwarded: Vec<String> = env::args().skip(1).collect();
            ui::display_status(&format!("Continuing with cut-release {}", version));
            Ok(update::hand_off(&program, &forwarded)?)
        }
        Ok(WorkflowResult::Released { .. }) | Ok(WorkflowResult::Declined) => Ok(0),
        Err(e) => {
            report(&e);
            Ok(e.exit_code())
        }
    }
}

fn report(error: &CutReleaseError) {
    ui::display_error(&error.to_string());
    match error {
        CutReleaseError::Command { error, manual } => ui::display_failure_details(error, manual),
        CutReleaseError::InvalidInvocation(_) => {
            eprintln!("\n{}", Args::command().render_usage());
        }
        _ => {}
    }
}
