//! Sequential execution of a release plan.
//!
//! A [PipelineRun] is a value that moves through
//! `Idle -> Running -> {Succeeded, Failed}`; every call to
//! [PipelineRun::advance] consumes the run and returns the next state.
//! Steps run strictly in plan order, one at a time, and the first failure
//! stops everything that follows.

use std::collections::VecDeque;

use log::{debug, info};

use crate::error::CommandError;
use crate::exec::{CommandOutput, CommandRunner, RunOptions};
use crate::plan::{CommandStep, ReleasePlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Running,
    Succeeded,
    Failed,
}

/// The step that failed and what it printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure {
    pub step: CommandStep,
    pub error: CommandError,
}

/// Transient execution state of one release
#[derive(Debug, Clone)]
pub struct PipelineRun {
    plan: Vec<CommandStep>,
    remaining: VecDeque<CommandStep>,
    completed: Vec<CommandStep>,
    failure: Option<StepFailure>,
    last_output: Option<CommandOutput>,
    state: PipelineState,
    dry_run: bool,
}

impl PipelineRun {
    pub fn new(plan: &ReleasePlan, dry_run: bool) -> Self {
        PipelineRun {
            plan: plan.steps.clone(),
            remaining: plan.steps.iter().cloned().collect(),
            completed: Vec::new(),
            failure: None,
            last_output: None,
            state: PipelineState::Idle,
            dry_run,
        }
    }

    /// Leave `Idle`. An empty plan succeeds immediately.
    pub fn start(mut self) -> Self {
        if self.state == PipelineState::Idle {
            self.state = if self.remaining.is_empty() {
                PipelineState::Succeeded
            } else {
                PipelineState::Running
            };
            info!("pipeline started with {} step(s), dry run: {}", self.plan.len(), self.dry_run);
        }
        self
    }

    /// Attempt the next step.
    ///
    /// The step leaves `remaining` whether it succeeds or fails; a failure is
    /// recorded once and moves the run to `Failed`. Dry runs never touch the
    /// runner. Calling this outside `Running` returns the run unchanged.
    pub fn advance(mut self, runner: &dyn CommandRunner) -> Self {
        self.last_output = None;
        if self.state != PipelineState::Running {
            return self;
        }

        let Some(step) = self.remaining.pop_front() else {
            self.state = PipelineState::Succeeded;
            return self;
        };

        if self.dry_run {
            debug!("dry run, not executing `{}`", step.command_line());
            self.completed.push(step);
        } else {
            match runner.run(&step.command, RunOptions::default()) {
                Ok(output) => {
                    self.last_output = Some(output);
                    self.completed.push(step);
                }
                Err(error) => {
                    info!("step '{}' failed: {}", step.description, error);
                    self.failure = Some(StepFailure { step, error });
                    self.state = PipelineState::Failed;
                    return self;
                }
            }
        }

        if self.remaining.is_empty() {
            info!("pipeline succeeded");
            self.state = PipelineState::Succeeded;
        }
        self
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn plan(&self) -> &[CommandStep] {
        &self.plan
    }

    /// The step `advance` would attempt next
    pub fn next_step(&self) -> Option<&CommandStep> {
        match self.state {
            PipelineState::Running => self.remaining.front(),
            _ => None,
        }
    }

    pub fn remaining(&self) -> impl Iterator<Item = &CommandStep> {
        self.remaining.iter()
    }

    pub fn failure(&self) -> Option<&StepFailure> {
        self.failure.as_ref()
    }

    /// Output of the step completed by the latest `advance`, if it ran for real
    pub fn last_output(&self) -> Option<&CommandOutput> {
        self.last_output.as_ref()
    }

    pub fn into_outcome(self) -> PipelineOutcome {
        match self.failure {
            Some(failed) => PipelineOutcome::Failed {
                failed,
                completed: self.completed,
                remaining: self.remaining.into_iter().collect(),
            },
            None => PipelineOutcome::Succeeded {
                completed: self.completed,
            },
        }
    }
}

/// Final result of executing a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    Succeeded {
        completed: Vec<CommandStep>,
    },
    Failed {
        failed: StepFailure,
        completed: Vec<CommandStep>,
        /// Steps after the failing one, never attempted
        remaining: Vec<CommandStep>,
    },
}

impl PipelineOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PipelineOutcome::Succeeded { .. })
    }
}

/// Progress notifications emitted while executing
#[derive(Debug)]
pub enum StepEvent<'a> {
    /// About to run `step` (1-based `position` out of `total`)
    Started {
        step: &'a CommandStep,
        position: usize,
        total: usize,
        dry_run: bool,
    },
    /// `step` completed and printed `output`
    Output {
        step: &'a CommandStep,
        output: &'a CommandOutput,
    },
}

/// Drives a [PipelineRun] to completion
pub struct PipelineExecutor<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> PipelineExecutor<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        PipelineExecutor { runner }
    }

    /// Run every step of `plan` in order, reporting each before it runs.
    pub fn execute(
        &self,
        plan: &ReleasePlan,
        dry_run: bool,
        observer: &mut dyn FnMut(StepEvent<'_>),
    ) -> PipelineOutcome {
        let total = plan.len();
        let mut run = PipelineRun::new(plan, dry_run).start();
        let mut position = 0;

        while let Some(step) = run.next_step().cloned() {
            position += 1;
            observer(StepEvent::Started {
                step: &step,
                position,
                total,
                dry_run,
            });

            run = run.advance(self.runner);

            if let Some(output) = run.last_output() {
                observer(StepEvent::Output {
                    step: &step,
                    output,
                });
            }
        }

        run.into_outcome()
    }
}
