use crate::domain::PrereleaseId;
use regex::Regex;
use semver::{Version, VersionReq};
use std::fmt;
use std::sync::OnceLock;

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("static regex"))
}

/// Registry channel a release is published under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistTag {
    pub name: String,
    /// Chosen by flag or answer, as opposed to falling back to the default channel
    pub explicit: bool,
}

impl DistTag {
    pub fn explicit(name: impl Into<String>) -> Self {
        DistTag {
            name: name.into(),
            explicit: true,
        }
    }

    pub fn default_channel(name: impl Into<String>) -> Self {
        DistTag {
            name: name.into(),
            explicit: false,
        }
    }
}

/// Check a distribution tag name.
///
/// Registries resolve install specs like `pkg@1` as version ranges, so a
/// tag must not itself parse as a version or range.
pub fn validate_tag_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Tag name cannot be empty".to_string());
    }
    if !tag_pattern().is_match(name) {
        return Err(format!(
            "Tag '{}' may only contain letters, digits, '.', '_' and '-'",
            name
        ));
    }
    if Version::parse(name).is_ok() || VersionReq::parse(name).is_ok() {
        return Err(format!("Tag '{}' looks like a version or version range", name));
    }
    Ok(())
}

impl fmt::Display for DistTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Fully resolved description of the release to perform.
///
/// Built once by the answer flow after every slot is known; nothing mutates
/// it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseIntent {
    pub current_version: Version,
    pub target_version: Version,
    pub prerelease_identifier: Option<PrereleaseId>,
    pub distribution_tag: DistTag,
    pub commit_message: Option<String>,
    pub dry_run: bool,
}

impl ReleaseIntent {
    /// Whether the target sorts above the current version
    pub fn is_upgrade(&self) -> bool {
        self.target_version > self.current_version
    }
}
