pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod exec;
pub mod flow;
pub mod manifest;
pub mod pipeline;
pub mod plan;
pub mod prompt;
pub mod registry;
pub mod ui;
pub mod update;
pub mod vcs;
pub mod version;

pub use error::{CutReleaseError, Result};
