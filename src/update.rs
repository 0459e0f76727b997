//! Self-update check.
//!
//! Before doing anything else the tool asks the registry whether a newer
//! release of itself exists. When the operator accepts, the new release is
//! installed and the same invocation is handed off to it. Every failure in
//! here is swallowed: a slow or broken registry must never block a release.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use log::debug;
use regex::Regex;
use semver::Version;

use crate::config::UpdateConfig;
use crate::error::{CutReleaseError, Result};
use crate::exec::{CommandRunner, CommandSpec, RunOptions};
use crate::prompt::Prompter;
use crate::ui;

/// Set on re-invocations so the new binary does not check again
pub const SKIP_UPDATE_ENV: &str = "CUT_RELEASE_SKIP_UPDATE";

/// Whether the environment asks to skip the check
pub fn skip_requested() -> bool {
    env::var_os(SKIP_UPDATE_ENV).is_some_and(|v| !v.is_empty())
}

/// Extract the published version of `package` from `cargo search` output.
///
/// Lines look like `cut-release = "0.2.0"    # description`; other crates
/// matching the search term are ignored.
pub fn parse_search_output(stdout: &str, package: &str) -> Option<Version> {
    let pattern = format!(r#"^{}\s*=\s*"([^"]+)""#, regex::escape(package));
    let re = Regex::new(&pattern).ok()?;
    stdout
        .lines()
        .find_map(|line| re.captures(line.trim()))
        .and_then(|caps| Version::parse(&caps[1]).ok())
}

/// `latest` when it sorts above `current`
pub fn newer_version(current: &Version, latest: Option<Version>) -> Option<Version> {
    latest.filter(|latest| latest > current)
}

/// What the check decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Disabled, skipped, failed, up to date or declined: carry on
    Continue,
    /// The newer release was installed; the caller should hand off to it
    Installed(Version),
}

pub struct UpdateCheck<'a> {
    config: &'a UpdateConfig,
    runner: &'a dyn CommandRunner,
    prompter: &'a dyn Prompter,
    current: Version,
}

impl<'a> UpdateCheck<'a> {
    pub fn new(
        config: &'a UpdateConfig,
        runner: &'a dyn CommandRunner,
        prompter: &'a dyn Prompter,
        current: Version,
    ) -> Self {
        UpdateCheck {
            config,
            runner,
            prompter,
            current,
        }
    }

    /// Latest published version, if the registry answered in time.
    pub fn latest(&self) -> Result<Option<Version>> {
        let command = CommandSpec::new(
            "cargo",
            ["search", self.config.package.as_str(), "--limit", "1"],
        );
        let options = RunOptions::with_timeout(Duration::from_secs(self.config.timeout_secs));
        let output = self
            .runner
            .run(&command, options)
            .map_err(|e| CutReleaseError::update_check(e.to_string()))?;
        Ok(parse_search_output(&output.stdout, &self.config.package))
    }

    /// Run the whole check.
    ///
    /// With `interactive == false` a newer release is only announced, never
    /// installed.
    pub fn run(&self, interactive: bool) -> UpdateOutcome {
        if !self.config.enabled || skip_requested() {
            debug!("update check skipped");
            return UpdateOutcome::Continue;
        }

        match self.try_run(interactive) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!("update check failed: {}", e);
                UpdateOutcome::Continue
            }
        }
    }

    fn try_run(&self, interactive: bool) -> Result<UpdateOutcome> {
        let Some(latest) = newer_version(&self.current, self.latest()?) else {
            debug!("{} {} is up to date", self.config.package, self.current);
            return Ok(UpdateOutcome::Continue);
        };

        let notice = format!(
            "{} {} is available (you have {})",
            self.config.package, latest, self.current
        );
        if !interactive {
            ui::display_status(&notice);
            return Ok(UpdateOutcome::Continue);
        }

        if !self.prompter.confirm(&format!("{}. Update now?", notice), true)? {
            return Ok(UpdateOutcome::Continue);
        }

        let install = CommandSpec::new(
            "cargo",
            [
                "install".to_string(),
                self.config.package.clone(),
                "--version".to_string(),
                latest.to_string(),
            ],
        );
        ui::display_status(&format!("Installing {} {}", self.config.package, latest));
        self.runner
            .run(&install, RunOptions::default())
            .map_err(|e| CutReleaseError::update_check(e.to_string()))?;
        Ok(UpdateOutcome::Installed(latest))
    }
}

/// Path to re-run after an install.
///
/// Once the installer renames the new binary over the running one, Linux
/// reports the old path with a ` (deleted)` suffix.
pub fn installed_program(running: &Path) -> PathBuf {
    let raw = running.to_string_lossy();
    match raw.strip_suffix(" (deleted)") {
        Some(path) if !running.exists() => PathBuf::from(path),
        _ => running.to_path_buf(),
    }
}

/// Re-run the installed binary with the original arguments.
///
/// Returns the child's exit code. The child sees [SKIP_UPDATE_ENV] so it goes
/// straight to the release.
pub fn hand_off(program: &Path, args: &[String]) -> Result<i32> {
    let program = installed_program(program);
    debug!("handing off to {} {:?}", program.display(), args);
    let status = Command::new(&program)
        .args(args)
        .env(SKIP_UPDATE_ENV, "1")
        .status()?;
    Ok(status.code().unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::MockRunner;
    use crate::prompt::{Answer, ScriptedPrompter};
    use serial_test::serial;

    const SEARCH: &str = "cargo search cut-release --limit 1";
    const SEARCH_OUTPUT: &str = "cut-release = \"0.3.0\"    # Interactive release assistant\n\
        ... and 2 crates more (use --limit N to see more)\n";

    fn config() -> UpdateConfig {
        UpdateConfig {
            enabled: true,
            package: "cut-release".to_string(),
            timeout_secs: 3,
        }
    }

    #[test]
    fn test_parse_search_output() {
        assert_eq!(
            parse_search_output(SEARCH_OUTPUT, "cut-release"),
            Some(Version::new(0, 3, 0))
        );
        assert_eq!(parse_search_output("cut-release-extra = \"9.0.0\"\n", "cut-release"), None);
        assert_eq!(parse_search_output("", "cut-release"), None);
    }

    #[test]
    fn test_newer_version() {
        let current = Version::new(0, 2, 0);
        assert_eq!(
            newer_version(&current, Some(Version::new(0, 3, 0))),
            Some(Version::new(0, 3, 0))
        );
        assert_eq!(newer_version(&current, Some(Version::new(0, 2, 0))), None);
        assert_eq!(newer_version(&current, None), None);
    }

    #[test]
    #[serial]
    fn test_accepted_update_installs() {
        env::remove_var(SKIP_UPDATE_ENV);
        let config = config();
        let runner = MockRunner::new().respond(SEARCH, SEARCH_OUTPUT);
        let prompter = ScriptedPrompter::new([Answer::Confirm(true)]);

        let check = UpdateCheck::new(&config, &runner, &prompter, Version::new(0, 2, 0));
        assert_eq!(check.run(true), UpdateOutcome::Installed(Version::new(0, 3, 0)));
        assert_eq!(
            runner.calls(),
            vec![SEARCH, "cargo install cut-release --version 0.3.0"]
        );
    }

    #[test]
    #[serial]
    fn test_declined_update_continues() {
        env::remove_var(SKIP_UPDATE_ENV);
        let config = config();
        let runner = MockRunner::new().respond(SEARCH, SEARCH_OUTPUT);
        let prompter = ScriptedPrompter::new([Answer::Confirm(false)]);

        let check = UpdateCheck::new(&config, &runner, &prompter, Version::new(0, 2, 0));
        assert_eq!(check.run(true), UpdateOutcome::Continue);
        assert_eq!(runner.calls(), vec![SEARCH]);
    }

    #[test]
    #[serial]
    fn test_non_interactive_only_announces() {
        env::remove_var(SKIP_UPDATE_ENV);
        let config = config();
        let runner = MockRunner::new().respond(SEARCH, SEARCH_OUTPUT);
        let prompter = ScriptedPrompter::new([]);

        let check = UpdateCheck::new(&config, &runner, &prompter, Version::new(0, 2, 0));
        assert_eq!(check.run(false), UpdateOutcome::Continue);
        assert!(prompter.asked().is_empty());
    }

    #[test]
    #[serial]
    fn test_query_failure_is_silent() {
        env::remove_var(SKIP_UPDATE_ENV);
        let config = config();
        let runner = MockRunner::new().fail(SEARCH, "error: failed to get crates.io index");
        let prompter = ScriptedPrompter::new([]);

        let check = UpdateCheck::new(&config, &runner, &prompter, Version::new(0, 2, 0));
        assert_eq!(check.run(true), UpdateOutcome::Continue);
        assert!(prompter.asked().is_empty());
    }

    #[test]
    #[serial]
    fn test_failed_install_continues() {
        env::remove_var(SKIP_UPDATE_ENV);
        let config = config();
        let runner = MockRunner::new()
            .respond(SEARCH, SEARCH_OUTPUT)
            .fail("cargo install cut-release --version 0.3.0", "error: linker not found");
        let prompter = ScriptedPrompter::new([Answer::Confirm(true)]);

        let check = UpdateCheck::new(&config, &runner, &prompter, Version::new(0, 2, 0));
        assert_eq!(check.run(true), UpdateOutcome::Continue);
    }

    #[test]
    #[serial]
    fn test_environment_guard_skips_query() {
        env::set_var(SKIP_UPDATE_ENV, "1");
        let config = config();
        let runner = MockRunner::new().respond(SEARCH, SEARCH_OUTPUT);
        let prompter = ScriptedPrompter::new([]);

        let check = UpdateCheck::new(&config, &runner, &prompter, Version::new(0, 2, 0));
        assert_eq!(check.run(true), UpdateOutcome::Continue);
        assert!(runner.calls().is_empty());
        env::remove_var(SKIP_UPDATE_ENV);
    }

    #[test]
    #[serial]
    fn test_disabled_check_skips_query() {
        env::remove_var(SKIP_UPDATE_ENV);
        let mut config = config();
        config.enabled = false;
        let runner = MockRunner::new();
        let prompter = ScriptedPrompter::new([]);

        let check = UpdateCheck::new(&config, &runner, &prompter, Version::new(0, 2, 0));
        assert_eq!(check.run(true), UpdateOutcome::Continue);
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_installed_program_strips_deleted_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let binary = dir.path().join("cut-release");
        std::fs::write(&binary, "").unwrap();

        let reported = PathBuf::from(format!("{} (deleted)", binary.display()));
        assert_eq!(installed_program(&reported), binary);
        assert_eq!(installed_program(&binary), binary);
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_hand_off_runs_replaced_binary() {
        env::remove_var(SKIP_UPDATE_ENV);
        let dir = tempfile::tempdir().unwrap();
        let binary = dir.path().join("cut-release");
        std::os::unix::fs::symlink("/bin/sh", &binary).unwrap();

        let reported = PathBuf::from(format!("{} (deleted)", binary.display()));
        let script = format!("[ \"${}\" = 1 ] && exit 7; exit 9", SKIP_UPDATE_ENV);
        let code = hand_off(&reported, &["-c".to_string(), script]).unwrap();
        assert_eq!(code, 7);
    }
}
