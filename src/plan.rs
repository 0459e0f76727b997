//! Release command planning.
//!
//! Turns a [ReleaseIntent] and the state of the project on disk into the
//! ordered list of commands that perform the release. Planning is pure: the
//! same inputs always produce the same plan, dry run or not.

use crate::config::Config;
use crate::domain::ReleaseIntent;
use crate::exec::CommandSpec;
use crate::vcs::RepoState;

/// One unit of the execution plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandStep {
    pub description: String,
    pub command: CommandSpec,
    /// Whether a condition may leave this step out of the plan
    pub optional: bool,
}

impl CommandStep {
    pub fn command_line(&self) -> String {
        self.command.command_line()
    }
}

/// A step the planner left out, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedStep {
    pub description: String,
    pub reason: String,
}

/// Ordered steps to execute plus the steps deliberately omitted
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReleasePlan {
    pub steps: Vec<CommandStep>,
    pub skipped: Vec<SkippedStep>,
}

impl ReleasePlan {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Rendered command lines, in execution order
    pub fn command_lines(&self) -> Vec<String> {
        self.steps.iter().map(CommandStep::command_line).collect()
    }
}

const NOT_VERSION_CONTROLLED: &str = "not a git repository";
const PRIVATE_PACKAGE: &str = "package is marked private";
/// Tag the registry applies when publish is given none
const REGISTRY_IMPLICIT_TAG: &str = "latest";

/// Build the ordered release plan.
///
/// Order is fixed: bump, push branch, push tags, publish. Pushes need the
/// commit and tag created by the bump; publishing goes last so a failed push
/// never leaves a published version without its tag upstream.
pub fn plan(intent: &ReleaseIntent, repo: &RepoState, config: &Config) -> ReleasePlan {
    let client = config.registry.client.as_str();
    let remote = config.git.remote.as_str();
    let target = intent.target_version.to_string();

    let mut release = ReleasePlan::default();

    let mut bump_args = vec!["version".to_string(), target.clone()];
    if let Some(message) = &intent.commit_message {
        bump_args.push("-m".to_string());
        bump_args.push(message.clone());
    }
    let bump_description = if repo.version_controlled {
        format!("Bump version to {} and create its commit and tag", target)
    } else {
        format!("Bump version to {}", target)
    };
    release.steps.push(CommandStep {
        description: bump_description,
        command: CommandSpec::new(client, bump_args),
        optional: false,
    });

    let push_branch = format!("Push current branch to {}", remote);
    let push_tags = format!("Push tags to {}", remote);
    if repo.version_controlled {
        release.steps.push(CommandStep {
            description: push_branch,
            command: CommandSpec::new("git", ["push", remote]),
            optional: true,
        });
        release.steps.push(CommandStep {
            description: push_tags,
            command: CommandSpec::new("git", ["push", remote, "--tags"]),
            optional: true,
        });
    } else {
        for description in [push_branch, push_tags] {
            release.skipped.push(SkippedStep {
                description,
                reason: NOT_VERSION_CONTROLLED.to_string(),
            });
        }
    }

    let tag = &intent.distribution_tag;
    let publish_description = format!("Publish {} under tag '{}'", target, tag.name);
    if repo.private {
        release.skipped.push(SkippedStep {
            description: publish_description,
            reason: PRIVATE_PACKAGE.to_string(),
        });
    } else {
        let mut publish_args = vec!["publish".to_string()];
        if tag.explicit || tag.name != REGISTRY_IMPLICIT_TAG {
            publish_args.push("--tag".to_string());
            publish_args.push(tag.name.clone());
        }
        release.steps.push(CommandStep {
            description: publish_description,
            command: CommandSpec::new(client, publish_args),
            optional: true,
        });
    }

    release
}
