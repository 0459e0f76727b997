use std::path::PathBuf;

use thiserror::Error;

/// Captured details of an external command that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandError {
    /// Rendered command line, as it would be typed in a shell
    pub command: String,
    /// What went wrong (exit status, spawn failure, timeout...)
    pub message: String,
    pub stdout: String,
    pub stderr: String,
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}` failed: {}", self.command, self.message)
    }
}

/// Unified error type for cut-release operations
#[derive(Error, Debug)]
pub enum CutReleaseError {
    #[error("Invalid invocation: {0}")]
    InvalidInvocation(String),

    #[error("No package.json exists in {}", .0.display())]
    ManifestMissing(PathBuf),

    #[error("Error reading package.json from {}: {reason}", .path.display())]
    ManifestUnreadable { path: PathBuf, reason: String },

    #[error("Invalid version '{input}'. Please specify a valid semver, e.g. 1.2.3. See https://semver.org/")]
    InvalidVersion { input: String },

    #[error("Registry query `{command}` failed: {reason}")]
    ExternalQuery { command: String, reason: String },

    /// A pipeline step failed; `manual` holds the failed command and every
    /// command after it, in order
    #[error("{error}")]
    Command { error: CommandError, manual: Vec<String> },

    #[error("Update check failed: {0}")]
    UpdateCheck(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in cut-release
pub type Result<T> = std::result::Result<T, CutReleaseError>;

impl CutReleaseError {
    pub fn invalid_invocation(msg: impl Into<String>) -> Self {
        CutReleaseError::InvalidInvocation(msg.into())
    }

    pub fn invalid_version(input: impl Into<String>) -> Self {
        CutReleaseError::InvalidVersion {
            input: input.into(),
        }
    }

    pub fn external_query(command: impl Into<String>, reason: impl Into<String>) -> Self {
        CutReleaseError::ExternalQuery {
            command: command.into(),
            reason: reason.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        CutReleaseError::Config(msg.into())
    }

    pub fn prompt(msg: impl Into<String>) -> Self {
        CutReleaseError::Prompt(msg.into())
    }

    pub fn step_failed(error: CommandError, manual: Vec<String>) -> Self {
        CutReleaseError::Command { error, manual }
    }

    pub fn update_check(msg: impl Into<String>) -> Self {
        CutReleaseError::UpdateCheck(msg.into())
    }

    /// Process exit code the binary reports for this error
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl From<toml::de::Error> for CutReleaseError {
    fn from(err: toml::de::Error) -> Self {
        CutReleaseError::Config(err.to_string())
    }
}
