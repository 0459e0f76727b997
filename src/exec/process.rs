use crate::error::CommandError;
use crate::exec::{CommandOutput, CommandRunner, CommandSpec, RunOptions};
use log::debug;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use wait_timeout::ChildExt;

/// Runs commands as real child processes inside the project directory
pub struct ProcessRunner {
    working_dir: PathBuf,
    max_output_bytes: usize,
}

impl ProcessRunner {
    /// Create a runner rooted at `working_dir`.
    ///
    /// # Arguments
    /// * `working_dir` - Directory every command runs in (the project root)
    /// * `max_output_bytes` - Largest stdout or stderr accepted before the command counts as failed
    pub fn new(working_dir: impl AsRef<Path>, max_output_bytes: usize) -> Self {
        ProcessRunner {
            working_dir: working_dir.as_ref().to_path_buf(),
            max_output_bytes,
        }
    }

    fn failure(command: &str, message: impl Into<String>, stdout: &[u8], stderr: &[u8]) -> CommandError {
        CommandError {
            command: command.to_string(),
            message: message.into(),
            stdout: String::from_utf8_lossy(stdout).into_owned(),
            stderr: String::from_utf8_lossy(stderr).into_owned(),
        }
    }
}

/// Keep at most `limit` bytes of a pipe; the rest is read and discarded so
/// the child never blocks on a full pipe.
fn drain<R: Read + Send + 'static>(pipe: Option<R>, limit: usize) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
            let _ = pipe.by_ref().take(cap).read_to_end(&mut buf);
            let _ = io::copy(&mut pipe, &mut io::sink());
        }
        buf
    })
}

fn wait(child: &mut Child, options: RunOptions) -> std::io::Result<Option<ExitStatus>> {
    match options.timeout {
        Some(timeout) => match child.wait_timeout(timeout)? {
            Some(status) => Ok(Some(status)),
            None => {
                child.kill()?;
                child.wait()?;
                Ok(None)
            }
        },
        None => child.wait().map(Some),
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &CommandSpec, options: RunOptions) -> Result<CommandOutput, CommandError> {
        let rendered = command.command_line();
        debug!("running `{}` in {}", rendered, self.working_dir.display());

        let mut child = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Self::failure(&rendered, format!("could not be started: {}", e), &[], &[]))?;

        let stdout_reader = drain(child.stdout.take(), self.max_output_bytes);
        let stderr_reader = drain(child.stderr.take(), self.max_output_bytes);

        let status = wait(&mut child, options);
        let stdout = stdout_reader.join().unwrap_or_default();
        let stderr = stderr_reader.join().unwrap_or_default();

        let status = match status {
            Ok(Some(status)) => status,
            Ok(None) => {
                let secs = options.timeout.map(|t| t.as_secs_f64()).unwrap_or_default();
                return Err(Self::failure(
                    &rendered,
                    format!("timed out after {:.1}s", secs),
                    &stdout,
                    &stderr,
                ));
            }
            Err(e) => {
                return Err(Self::failure(&rendered, format!("could not be awaited: {}", e), &stdout, &stderr));
            }
        };

        debug!("`{}` exited with {}", rendered, status);

        if stdout.len() > self.max_output_bytes || stderr.len() > self.max_output_bytes {
            let max = self.max_output_bytes;
            return Err(Self::failure(
                &rendered,
                format!("output exceeded the maximum buffer of {} bytes", max),
                &stdout[..stdout.len().min(max)],
                &stderr[..stderr.len().min(max)],
            ));
        }

        if !status.success() {
            let message = match status.code() {
                Some(code) => format!("exited with code {}", code),
                None => "terminated by a signal".to_string(),
            };
            return Err(Self::failure(&rendered, message, &stdout, &stderr));
        }

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
        })
    }
}
