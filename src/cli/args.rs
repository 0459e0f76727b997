use clap::Parser;

use crate::flow::{ReleaseOptions, TagRequest};

const AFTER_HELP: &str = "\
VERSION is one of: patch, minor, major, prepatch, preminor, premajor, prerelease,
or an exact semantic version such as 1.2.3 or 2.0.0-rc.1.

Give VERSION before a bare --tag, otherwise it is read as the tag name.";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "cut-release",
    version,
    about = "Cut a new release of the package in the current directory",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[arg(value_name = "VERSION", help = "Increment keyword or exact version to release")]
    pub target_version: Option<String>,

    #[arg(short, long, help = "Skip the confirmation prompt")]
    pub yes: bool,

    #[arg(
        long,
        value_name = "TAG",
        num_args = 0..=1,
        help = "Publish under this dist-tag; without a value, choose interactively"
    )]
    pub tag: Option<Option<String>>,

    #[arg(long, value_name = "ID", help = "Prerelease identifier, e.g. rc or beta")]
    pub preid: Option<String>,

    #[arg(short, long, value_name = "MSG", help = "Commit message for the version bump")]
    pub message: Option<String>,

    #[arg(long, help = "Show what would be run without running it")]
    pub dry_run: bool,

    #[arg(long, value_name = "PATH", help = "Custom configuration file path")]
    pub config: Option<String>,

    #[arg(long, help = "Do not look for a newer cut-release")]
    pub no_update_check: bool,
}

impl Args {
    pub fn release_options(&self) -> ReleaseOptions {
        let tag = match &self.tag {
            None => TagRequest::Unset,
            Some(None) => TagRequest::Ask,
            Some(Some(name)) => TagRequest::Named(name.clone()),
        };

        ReleaseOptions {
            version: self.target_version.clone(),
            yes: self.yes,
            tag,
            preid: self.preid.clone(),
            message: self.message.clone(),
            dry_run: self.dry_run,
        }
    }
}
