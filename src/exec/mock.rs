use crate::error::CommandError;
use crate::exec::{CommandOutput, CommandRunner, CommandSpec, RunOptions};
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock runner for testing without spawning processes.
///
/// Responses are keyed by the rendered command line. Commands without a
/// scripted response succeed with empty output.
#[derive(Default)]
pub struct MockRunner {
    responses: HashMap<String, Result<CommandOutput, CommandError>>,
    calls: Mutex<Vec<String>>,
}

impl MockRunner {
    /// Create a runner where every command succeeds silently
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `command_line` succeed with the given stdout
    pub fn respond(mut self, command_line: &str, stdout: &str) -> Self {
        self.responses.insert(
            command_line.to_string(),
            Ok(CommandOutput {
                stdout: stdout.to_string(),
                stderr: String::new(),
            }),
        );
        self
    }

    /// Make `command_line` fail with the given stderr
    pub fn fail(mut self, command_line: &str, stderr: &str) -> Self {
        self.responses.insert(
            command_line.to_string(),
            Err(CommandError {
                command: command_line.to_string(),
                message: "exited with code 1".to_string(),
                stdout: String::new(),
                stderr: stderr.to_string(),
            }),
        );
        self
    }

    /// Every command line run so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &CommandSpec, _options: RunOptions) -> Result<CommandOutput, CommandError> {
        let rendered = command.command_line();
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(rendered.clone());
        }

        match self.responses.get(&rendered) {
            Some(response) => response.clone(),
            None => Ok(CommandOutput::default()),
        }
    }
}
