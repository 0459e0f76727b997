//! Main release workflow orchestration
//!
//! Wires the pieces together in a fixed order: configuration, manifest,
//! self-update check, answer flow, planning, execution and the final report.
//! Argument parsing stays in `args`; process exit codes stay in `main`.

use std::iter;
use std::path::Path;

use log::info;
use semver::Version;

use crate::cli::Args;
use crate::config::{load_config, Config};
use crate::domain::ReleaseIntent;
use crate::error::{CutReleaseError, Result};
use crate::exec::{CommandRunner, ProcessRunner};
use crate::flow::{AnswerFlow, FlowOutcome};
use crate::manifest::Manifest;
use crate::pipeline::{PipelineExecutor, PipelineOutcome, StepEvent};
use crate::plan::{self, CommandStep, ReleasePlan};
use crate::prompt::Prompter;
use crate::ui;
use crate::update::{UpdateCheck, UpdateOutcome};
use crate::vcs;

/// How a release invocation ended, short of an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowResult {
    /// Every planned step ran (or was reported, in a dry run)
    Released { intent: ReleaseIntent, plan: ReleasePlan },
    /// The operator refused the confirmation; nothing ran
    Declined,
    /// A newer cut-release was installed; the invocation should be repeated with it
    UpdateInstalled(Version),
}

/// Run a release in `project_dir` with real processes.
pub fn run_release(args: &Args, project_dir: &Path, prompter: &dyn Prompter) -> Result<WorkflowResult> {
    let config = load_config(args.config.as_deref(), project_dir)?;
    let runner = ProcessRunner::new(project_dir, config.exec.max_output_bytes);
    release(args, project_dir, &config, prompter, &runner)
}

/// Run a release with the given collaborators.
///
/// # Returns
/// * `Ok(WorkflowResult)` - Released, declined, or handed over to a newer version
/// * `Err(Command)` - A pipeline step failed; carries the commands left to run by hand
/// * `Err(..)` - Manifest, version, tag or prompt problems found before anything ran
pub fn release(
    args: &Args,
    project_dir: &Path,
    config: &Config,
    prompter: &dyn Prompter,
    runner: &dyn CommandRunner,
) -> Result<WorkflowResult> {
    let manifest = Manifest::load(project_dir)?;

    if !args.no_update_check {
        if let Ok(current) = Version::parse(env!("CARGO_PKG_VERSION")) {
            let check = UpdateCheck::new(&config.update, runner, prompter, current);
            // a dry run changes nothing, a newer release included
            let interactive = !args.yes && !args.dry_run;
            if let UpdateOutcome::Installed(version) = check.run(interactive) {
                return Ok(WorkflowResult::UpdateInstalled(version));
            }
        }
    }

    ui::display_header(&manifest.name, &manifest.version.to_string());

    let options = args.release_options();
    let mut flow = AnswerFlow::new(&options, &manifest, config, prompter, runner);
    let intent = match flow.run()? {
        FlowOutcome::Confirmed(intent) => intent,
        FlowOutcome::Declined => {
            ui::display_status("Release cancelled, nothing was changed");
            return Ok(WorkflowResult::Declined);
        }
    };

    let repo = vcs::detect(project_dir, &manifest)?;
    let plan = plan::plan(&intent, &repo, config);
    info!("planned {} step(s), {} skipped", plan.len(), plan.skipped.len());

    let executor = PipelineExecutor::new(runner);
    let outcome = executor.execute(&plan, intent.dry_run, &mut |event| match event {
        StepEvent::Started { step, dry_run, .. } => ui::display_step(step, dry_run),
        StepEvent::Output { output, .. } => ui::display_step_output(&output.stdout),
    });

    match outcome {
        PipelineOutcome::Succeeded { .. } => {
            ui::display_success_report(&manifest.name, &intent, &plan.skipped);
            Ok(WorkflowResult::Released { intent, plan })
        }
        PipelineOutcome::Failed {
            failed, remaining, ..
        } => {
            let manual = iter::once(&failed.step)
                .chain(remaining.iter())
                .map(CommandStep::command_line)
                .collect();
            Err(CutReleaseError::step_failed(failed.error, manual))
        }
    }
}
