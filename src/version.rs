//! Target version resolution.
//!
//! Turns a version token (increment keyword or literal) plus an optional
//! prerelease identifier into the concrete version to release. Increment
//! rules follow the npm flavour of semantic versioning so the result matches
//! what `npm version <keyword>` would have produced.

use crate::domain::{Increment, PrereleaseId, VersionToken};
use crate::error::{CutReleaseError, Result};
use semver::{BuildMetadata, Prerelease, Version};

/// Resolve a raw token against the current version.
///
/// # Arguments
/// * `current` - Version found in the manifest
/// * `token` - Increment keyword (`minor`, `preminor`, ...) or a semver literal
/// * `prerelease_identifier` - Identifier used by prerelease keywords (`rc`, `beta`)
///
/// # Returns
/// * `Ok(Version)` - The target version; literals are returned unchanged
/// * `Err(InvalidVersion)` - If the token or identifier is malformed
///
/// # Example
/// ```
/// # use cut_release::version::resolve;
/// let current = semver::Version::parse("1.2.3").unwrap();
/// assert_eq!(resolve(&current, "preminor", Some("rc")).unwrap().to_string(), "1.3.0-rc.0");
/// ```
pub fn resolve(current: &Version, token: &str, prerelease_identifier: Option<&str>) -> Result<Version> {
    let token = VersionToken::parse(token)?;
    let identifier = prerelease_identifier.map(PrereleaseId::parse).transpose()?;
    resolve_token(current, &token, identifier.as_ref())
}

/// Resolve an already parsed token.
pub fn resolve_token(
    current: &Version,
    token: &VersionToken,
    prerelease_identifier: Option<&PrereleaseId>,
) -> Result<Version> {
    match token {
        VersionToken::Increment(increment) => increment_version(current, *increment, prerelease_identifier),
        VersionToken::Literal(version) => Ok(version.clone()),
    }
}

/// Apply an increment keyword to `current`.
pub fn increment_version(
    current: &Version,
    increment: Increment,
    prerelease_identifier: Option<&PrereleaseId>,
) -> Result<Version> {
    let mut next = Version {
        build: BuildMetadata::EMPTY,
        ..current.clone()
    };
    let is_pre = !current.pre.is_empty();

    match increment {
        Increment::Major => {
            // 2.0.0-rc.1 graduates to 2.0.0
            if !(is_pre && current.minor == 0 && current.patch == 0) {
                next.major = bump(current.major, current)?;
            }
            next.minor = 0;
            next.patch = 0;
            next.pre = Prerelease::EMPTY;
        }
        Increment::Minor => {
            if !(is_pre && current.patch == 0) {
                next.minor = bump(current.minor, current)?;
            }
            next.patch = 0;
            next.pre = Prerelease::EMPTY;
        }
        Increment::Patch => {
            if !is_pre {
                next.patch = bump(current.patch, current)?;
            }
            next.pre = Prerelease::EMPTY;
        }
        Increment::Premajor => {
            next.major = bump(current.major, current)?;
            next.minor = 0;
            next.patch = 0;
            next.pre = next_prerelease(&Prerelease::EMPTY, prerelease_identifier, current)?;
        }
        Increment::Preminor => {
            next.minor = bump(current.minor, current)?;
            next.patch = 0;
            next.pre = next_prerelease(&Prerelease::EMPTY, prerelease_identifier, current)?;
        }
        Increment::Prepatch => {
            next.patch = bump(current.patch, current)?;
            next.pre = next_prerelease(&Prerelease::EMPTY, prerelease_identifier, current)?;
        }
        Increment::Prerelease => {
            if is_pre {
                next.pre = next_prerelease(&current.pre, prerelease_identifier, current)?;
                // switching to a channel that sorts lower (rc -> beta) moves on to the next patch
                if next <= *current {
                    next.patch = bump(current.patch, current)?;
                    next.pre = next_prerelease(&Prerelease::EMPTY, prerelease_identifier, current)?;
                }
            } else {
                next.patch = bump(current.patch, current)?;
                next.pre = next_prerelease(&Prerelease::EMPTY, prerelease_identifier, current)?;
            }
        }
    }

    Ok(next)
}

fn bump(component: u64, current: &Version) -> Result<u64> {
    component
        .checked_add(1)
        .ok_or_else(|| CutReleaseError::invalid_version(format!("{} (component overflow)", current)))
}

fn is_numeric(part: &str) -> bool {
    !part.is_empty() && part.chars().all(|c| c.is_ascii_digit())
}

/// Compute the prerelease segment following `pre`.
///
/// Empty segments start at `0` (or `<id>.0`); otherwise the right-most
/// numeric identifier is incremented, or `.0` appended if there is none.
/// A different identifier restarts the counter at `<id>.0`.
fn next_prerelease(
    pre: &Prerelease,
    identifier: Option<&PrereleaseId>,
    current: &Version,
) -> Result<Prerelease> {
    let mut parts: Vec<String> = if pre.is_empty() {
        Vec::new()
    } else {
        pre.as_str().split('.').map(str::to_string).collect()
    };

    if parts.is_empty() {
        parts.push("0".to_string());
    } else {
        match parts.iter().rposition(|p| is_numeric(p)) {
            Some(idx) => {
                let counter: u64 = parts[idx]
                    .parse()
                    .map_err(|_| CutReleaseError::invalid_version(current.to_string()))?;
                parts[idx] = bump(counter, current)?.to_string();
            }
            None => parts.push("0".to_string()),
        }
    }

    if let Some(id) = identifier {
        let same_channel = parts.first().map(String::as_str) == Some(id.as_str());
        let has_counter = parts.get(1).map(|p| is_numeric(p)).unwrap_or(false);
        if !(same_channel && has_counter) {
            parts = vec![id.to_string(), "0".to_string()];
        }
    }

    Prerelease::new(&parts.join("."))
        .map_err(|_| CutReleaseError::invalid_version(format!("{}-{}", current, parts.join("."))))
}
