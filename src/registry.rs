//! Read-only registry queries used to populate interactive choices.
//!
//! All queries go through the configured registry client (`npm` by default)
//! via a [CommandRunner]; nothing here publishes or mutates anything.

use crate::domain::PrereleaseId;
use crate::error::{CutReleaseError, Result};
use crate::exec::{CommandRunner, CommandSpec, RunOptions};
use log::debug;
use regex::Regex;
use semver::Version;
use std::collections::BTreeSet;
use std::sync::OnceLock;

fn dist_tag_line() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\s*([^\s:]+):\s*(\S+)\s*$").expect("static regex"))
}

/// A distribution tag currently published on the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedTag {
    pub name: String,
    pub version: String,
}

/// Registry client bound to one package
pub struct Registry<'a> {
    runner: &'a dyn CommandRunner,
    client: String,
    package: String,
}

impl<'a> Registry<'a> {
    pub fn new(runner: &'a dyn CommandRunner, client: impl Into<String>, package: impl Into<String>) -> Self {
        Registry {
            runner,
            client: client.into(),
            package: package.into(),
        }
    }

    fn query(&self, args: &[&str]) -> Result<String> {
        let command = CommandSpec::new(self.client.clone(), args.iter().copied());
        self.runner
            .run(&command, RunOptions::default())
            .map(|output| output.stdout)
            .map_err(|e| {
                let reason = match e.stderr.trim() {
                    "" => e.message,
                    stderr => format!("{}: {}", e.message, stderr),
                };
                CutReleaseError::external_query(command.command_line(), reason)
            })
    }

    /// Distribution tags currently published for the package, in registry order.
    pub fn dist_tags(&self) -> Result<Vec<PublishedTag>> {
        let stdout = self.query(&["dist-tag", "ls", &self.package])?;
        let tags = parse_dist_tags(&stdout);
        debug!("published dist-tags for {}: {:?}", self.package, tags);
        Ok(tags)
    }

    /// Every version ever published for the package.
    pub fn published_versions(&self) -> Result<Vec<Version>> {
        let command = format!("{} view {} versions --json", self.client, self.package);
        let stdout = self.query(&["view", &self.package, "versions", "--json"])?;
        parse_versions(&stdout).map_err(|reason| CutReleaseError::external_query(command, reason))
    }

    /// Distinct prerelease identifiers used by published versions, sorted.
    pub fn prerelease_identifiers(&self) -> Result<Vec<PrereleaseId>> {
        let ids = prerelease_identifiers(&self.published_versions()?);
        debug!("published prerelease identifiers for {}: {:?}", self.package, ids);
        Ok(ids)
    }
}

/// Parse `dist-tag ls` output (`latest: 1.2.3` per line).
pub fn parse_dist_tags(stdout: &str) -> Vec<PublishedTag> {
    stdout
        .lines()
        .filter_map(|line| dist_tag_line().captures(line))
        .map(|caps| PublishedTag {
            name: caps[1].to_string(),
            version: caps[2].to_string(),
        })
        .collect()
}

/// Parse `view <pkg> versions --json`.
///
/// The registry prints a bare string instead of an array when exactly one
/// version exists, and nothing at all for an empty result.
pub fn parse_versions(stdout: &str) -> std::result::Result<Vec<Version>, String> {
    if stdout.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: serde_json::Value = serde_json::from_str(stdout).map_err(|e| e.to_string())?;
    let raw: Vec<&str> = match &value {
        serde_json::Value::String(s) => vec![s.as_str()],
        serde_json::Value::Array(items) => items.iter().filter_map(|v| v.as_str()).collect(),
        other => return Err(format!("unexpected versions payload: {}", other)),
    };

    Ok(raw.into_iter().filter_map(|v| Version::parse(v).ok()).collect())
}

pub fn prerelease_identifiers(versions: &[Version]) -> Vec<PrereleaseId> {
    versions
        .iter()
        .filter_map(PrereleaseId::from_version)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
