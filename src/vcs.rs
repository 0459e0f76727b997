use git2::{ErrorCode, Repository};
use log::debug;
use std::path::Path;

use crate::error::Result;
use crate::manifest::Manifest;

/// What the planner needs to know about the project on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RepoState {
    /// The project directory is the root of a git repository
    pub version_controlled: bool,
    /// The manifest is marked private
    pub private: bool,
}

/// Checks whether `project_dir` is itself a git repository.
///
/// Parent repositories are deliberately not discovered: only a repository
/// rooted at the project directory gets pushed.
///
/// # Returns
/// * `Ok(true)` - A repository (bare or with a working tree) opens at `project_dir`
/// * `Ok(false)` - There is no repository there
/// * `Err` - The repository exists but cannot be opened
pub fn is_version_controlled(project_dir: &Path) -> Result<bool> {
    match Repository::open(project_dir) {
        Ok(_) => Ok(true),
        Err(e) if e.code() == ErrorCode::NotFound => {
            debug!("no git repository at {}: {}", project_dir.display(), e);
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

/// Inspect the project directory for planning.
pub fn detect(project_dir: &Path, manifest: &Manifest) -> Result<RepoState> {
    let state = RepoState {
        version_controlled: is_version_controlled(project_dir)?,
        private: manifest.private,
    };
    debug!("repository state for {}: {:?}", project_dir.display(), state);
    Ok(state)
}
