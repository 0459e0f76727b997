//! Prerelease identifiers such as `rc` or `beta`
//!
//! An identifier names the prerelease channel of a version (`1.3.0-rc.0`);
//! the numeric counter after it is managed by the resolver.

use crate::error::{CutReleaseError, Result};
use regex::Regex;
use semver::Version;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9A-Za-z-]+$").expect("static regex"))
}

/// A single prerelease identifier, validated against semver's character set
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrereleaseId(String);

impl PrereleaseId {
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract the leading identifier of a prerelease version.
    ///
    /// `1.3.0-rc.2` yields `rc`; purely numeric prereleases (`1.3.0-0`) and
    /// release versions yield `None`.
    pub fn from_version(version: &Version) -> Option<Self> {
        let first = version.pre.as_str().split('.').next()?;
        if first.is_empty() || first.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        Some(PrereleaseId(first.to_string()))
    }
}

impl FromStr for PrereleaseId {
    type Err = CutReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        if identifier_pattern().is_match(s) {
            Ok(PrereleaseId(s.to_string()))
        } else {
            Err(CutReleaseError::invalid_version(format!(
                "{} (prerelease identifiers may only contain [0-9A-Za-z-])",
                s
            )))
        }
    }
}

impl fmt::Display for PrereleaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
