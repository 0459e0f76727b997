//! External command execution
//!
//! Every side effect cut-release has on the outside world (bumping the
//! manifest, pushing, publishing, querying the registry) goes through the
//! [CommandRunner] trait, so the orchestration logic can be exercised with a
//! scripted runner in tests.
//!
//! - [process::ProcessRunner]: spawns real processes with `std::process`
//! - [mock::MockRunner]: records invocations and replays canned results

pub mod mock;
pub mod process;

pub use mock::MockRunner;
pub use process::ProcessRunner;

use crate::error::CommandError;
use std::fmt;
use std::time::Duration;

/// A program plus its arguments. No shell is involved when it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandSpec {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Render the command the way an operator would type it in a shell
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(quote_arg)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Quote a single argument for POSIX shells when it needs it.
pub fn quote_arg(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@%+,".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// Captured output of a command that exited successfully
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Per-invocation execution options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Kill the command and fail when it runs longer than this
    pub timeout: Option<Duration>,
}

impl RunOptions {
    pub fn with_timeout(timeout: Duration) -> Self {
        RunOptions {
            timeout: Some(timeout),
        }
    }
}

/// Capability to run an external command and capture what it printed.
///
/// A non-zero exit status, a spawn failure, an exceeded timeout or an
/// oversized output are all reported as a [CommandError] carrying whatever
/// stdout/stderr was captured.
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &CommandSpec, options: RunOptions) -> Result<CommandOutput, CommandError>;
}
