//! Read-only view of the project manifest (`package.json`).

use crate::error::{CutReleaseError, Result};
use semver::Version;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "package.json";

#[derive(Debug, Deserialize)]
struct RawManifest {
    name: Option<String>,
    version: Option<String>,
    #[serde(default)]
    private: bool,
}

/// The manifest fields cut-release cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub path: PathBuf,
    pub name: String,
    pub version: Version,
    /// Private packages are never published
    pub private: bool,
}

impl Manifest {
    /// Load `package.json` from the project directory.
    ///
    /// # Returns
    /// * `Ok(Manifest)` - Parsed manifest
    /// * `Err(ManifestMissing)` - If the file does not exist
    /// * `Err(ManifestUnreadable)` - If it cannot be read, is not JSON, or lacks a valid name/version
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(MANIFEST_FILE);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(CutReleaseError::ManifestMissing(project_dir.to_path_buf()));
            }
            Err(e) => return Err(unreadable(&path, e.to_string())),
        };

        Self::parse(&path, &contents)
    }

    /// Parse manifest contents; `path` is only used for error reporting.
    pub fn parse(path: &Path, contents: &str) -> Result<Self> {
        let raw: RawManifest =
            serde_json::from_str(contents).map_err(|e| unreadable(path, e.to_string()))?;

        let name = raw
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| unreadable(path, "missing \"name\" field"))?;
        let version = raw
            .version
            .ok_or_else(|| unreadable(path, "missing \"version\" field"))?;
        let version = Version::parse(&version)
            .map_err(|e| unreadable(path, format!("invalid version '{}': {}", version, e)))?;

        Ok(Manifest {
            path: path.to_path_buf(),
            name,
            version,
            private: raw.private,
        })
    }
}

fn unreadable(path: &Path, reason: impl Into<String>) -> CutReleaseError {
    CutReleaseError::ManifestUnreadable {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}
