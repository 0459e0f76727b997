//! Interactive answer flow.
//!
//! Fills the four slots of a release (version, prerelease identifier,
//! distribution tag, confirmation) in that order. Each slot is either taken
//! from the command line or asked exactly once; registry lookups that feed a
//! question fall back to free-text entry when they fail.

use log::{debug, warn};
use semver::Version;

use crate::boundary::ReleaseWarning;
use crate::config::Config;
use crate::domain::{validate_tag_name, DistTag, Increment, PrereleaseId, ReleaseIntent, VersionToken};
use crate::error::{CutReleaseError, Result};
use crate::exec::CommandRunner;
use crate::manifest::Manifest;
use crate::prompt::Prompter;
use crate::registry::Registry;
use crate::ui;
use crate::version::{increment_version, resolve_token};

const VERSION_QUESTION: &str = "What version would you like to release";
const SPECIFY_VERSION: &str = "Specify version";
const SPECIFY_VERSION_HINT: &str = "Please specify a valid semver, e.g. 1.2.3. See https://semver.org/";
const PREID_QUESTION: &str = "Which prerelease identifier should be used";
const PREID_INPUT: &str = "Prerelease identifier";
const TAG_QUESTION: &str = "Which dist-tag should this version be published under";
const TAG_INPUT: &str = "Dist-tag";
const OTHER_CHOICE: &str = "other (specify)";
const NEW_TAG_CHOICE: &str = "new tag (specify)";

/// What the `--tag` flag said
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagRequest {
    /// Flag absent
    #[default]
    Unset,
    /// `--tag` without a value: always ask
    Ask,
    /// `--tag NAME`
    Named(String),
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ReleaseOptions {
    pub version: Option<String>,
    pub yes: bool,
    pub tag: TagRequest,
    pub preid: Option<String>,
    pub message: Option<String>,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    Confirmed(ReleaseIntent),
    /// The operator answered no to the confirmation
    Declined,
}

pub struct AnswerFlow<'a> {
    options: &'a ReleaseOptions,
    manifest: &'a Manifest,
    config: &'a Config,
    prompter: &'a dyn Prompter,
    registry: Registry<'a>,
    warnings: Vec<ReleaseWarning>,
}

impl<'a> AnswerFlow<'a> {
    pub fn new(
        options: &'a ReleaseOptions,
        manifest: &'a Manifest,
        config: &'a Config,
        prompter: &'a dyn Prompter,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        AnswerFlow {
            options,
            manifest,
            config,
            prompter,
            registry: Registry::new(runner, config.registry.client.clone(), manifest.name.clone()),
            warnings: Vec::new(),
        }
    }

    /// Warnings raised so far, in the order they were shown
    pub fn warnings(&self) -> &[ReleaseWarning] {
        &self.warnings
    }

    /// Resolve every slot and ask for confirmation.
    ///
    /// # Returns
    /// * `Ok(Confirmed)` - The release to perform
    /// * `Ok(Declined)` - The operator said no
    /// * `Err(InvalidVersion)` - A supplied version token or identifier is malformed
    /// * `Err(InvalidInvocation)` - A supplied tag name is not usable
    pub fn run(&mut self) -> Result<FlowOutcome> {
        if let TagRequest::Named(name) = &self.options.tag {
            validate_tag_name(name).map_err(CutReleaseError::invalid_invocation)?;
        }

        let options = self.options;
        let manifest = self.manifest;
        let current = &manifest.version;
        let supplied_preid = options.preid.as_deref();
        let preview_preid = supplied_preid.and_then(|raw| PrereleaseId::parse(raw).ok());

        let token = self.version_token(preview_preid.as_ref())?;
        let identifier = self.prerelease_identifier(&token, supplied_preid)?;
        let target = resolve_token(current, &token, identifier.as_ref())?;
        debug!("resolved {} + {} -> {}", current, token, target);

        let distribution_tag = self.distribution_tag()?;

        let intent = ReleaseIntent {
            current_version: current.clone(),
            target_version: target,
            prerelease_identifier: identifier,
            distribution_tag,
            commit_message: options.message.clone(),
            dry_run: options.dry_run,
        };

        if !intent.is_upgrade() {
            self.warn(ReleaseWarning::NonIncreasingVersion {
                current: intent.current_version.to_string(),
                target: intent.target_version.to_string(),
            });
        }

        if self.confirm(&intent)? {
            Ok(FlowOutcome::Confirmed(intent))
        } else {
            Ok(FlowOutcome::Declined)
        }
    }

    fn warn(&mut self, warning: ReleaseWarning) {
        warn!("{}", warning);
        ui::display_warning(&warning);
        self.warnings.push(warning);
    }

    fn version_token(&self, preview_preid: Option<&PrereleaseId>) -> Result<VersionToken> {
        if let Some(raw) = &self.options.version {
            return VersionToken::parse(raw);
        }

        let current = &self.manifest.version;
        let mut choices: Vec<String> = Increment::ALL
            .iter()
            .map(|increment| match increment_version(current, *increment, preview_preid) {
                Ok(next) => format!("{} ({})", increment, next),
                Err(_) => increment.to_string(),
            })
            .collect();
        choices.push(OTHER_CHOICE.to_string());

        let index = self.prompter.select(VERSION_QUESTION, &choices, 0)?;
        if let Some(increment) = Increment::ALL.get(index) {
            return Ok(VersionToken::Increment(*increment));
        }

        let validate = |input: &str| match Version::parse(input) {
            Ok(_) => Ok(()),
            Err(_) => Err(SPECIFY_VERSION_HINT.to_string()),
        };
        let literal = self.prompter.input(SPECIFY_VERSION, None, &validate)?;
        VersionToken::parse(&literal)
    }

    /// An identifier given with a non-prerelease token is ignored, so it is
    /// only validated once the token calls for one.
    fn prerelease_identifier(
        &mut self,
        token: &VersionToken,
        supplied: Option<&str>,
    ) -> Result<Option<PrereleaseId>> {
        match token {
            VersionToken::Literal(version) => {
                let derived = PrereleaseId::from_version(version);
                let derived_name = derived.as_ref().map(PrereleaseId::as_str);
                if let Some(identifier) = supplied.filter(|s| derived_name != Some(*s)) {
                    self.warn(ReleaseWarning::IgnoredPrereleaseIdentifier {
                        identifier: identifier.to_string(),
                        token: token.to_string(),
                    });
                }
                Ok(derived)
            }
            VersionToken::Increment(increment) if !increment.is_prerelease() => {
                if let Some(identifier) = supplied {
                    self.warn(ReleaseWarning::IgnoredPrereleaseIdentifier {
                        identifier: identifier.to_string(),
                        token: token.to_string(),
                    });
                }
                Ok(None)
            }
            VersionToken::Increment(_) => match supplied {
                Some(raw) => PrereleaseId::parse(raw).map(Some),
                None => self.ask_prerelease_identifier().map(Some),
            },
        }
    }

    fn ask_prerelease_identifier(&mut self) -> Result<PrereleaseId> {
        let current_id = PrereleaseId::from_version(&self.manifest.version);

        let published = match self.registry.prerelease_identifiers() {
            Ok(ids) => ids,
            Err(e) => {
                self.warn(ReleaseWarning::RegistryQueryFailed {
                    what: "published prerelease identifiers".to_string(),
                    reason: e.to_string(),
                });
                Vec::new()
            }
        };

        if !published.is_empty() {
            let default = current_id
                .as_ref()
                .and_then(|id| published.iter().position(|p| p == id))
                .unwrap_or(0);
            let mut choices: Vec<String> = published.iter().map(|id| id.to_string()).collect();
            choices.push(OTHER_CHOICE.to_string());

            let index = self.prompter.select(PREID_QUESTION, &choices, default)?;
            if let Some(identifier) = published.get(index) {
                return Ok(identifier.clone());
            }
        }

        let validate = |input: &str| PrereleaseId::parse(input).map(|_| ()).map_err(|e| e.to_string());
        let answer = self
            .prompter
            .input(PREID_INPUT, current_id.as_ref().map(PrereleaseId::as_str), &validate)?;
        PrereleaseId::parse(&answer)
    }

    fn distribution_tag(&mut self) -> Result<DistTag> {
        let config = self.config;
        let default_tag = config.registry.default_tag.as_str();

        match &self.options.tag {
            TagRequest::Named(name) => return Ok(DistTag::explicit(name.clone())),
            _ if self.manifest.private => {
                debug!("package is private, not asking for a dist-tag");
                return Ok(DistTag::default_channel(default_tag));
            }
            TagRequest::Unset if self.options.yes => return Ok(DistTag::default_channel(default_tag)),
            _ => {}
        }

        let published = match self.registry.dist_tags() {
            Ok(tags) => tags,
            Err(e) => {
                self.warn(ReleaseWarning::RegistryQueryFailed {
                    what: "published dist-tags".to_string(),
                    reason: e.to_string(),
                });
                Vec::new()
            }
        };

        let validate = |input: &str| validate_tag_name(input);

        if published.is_empty() {
            let name = self.prompter.input(TAG_INPUT, Some(default_tag), &validate)?;
            return Ok(DistTag::explicit(name));
        }

        let default = published
            .iter()
            .position(|t| t.name == default_tag)
            .unwrap_or(0);
        let mut choices: Vec<String> = published
            .iter()
            .map(|t| format!("{} (currently {})", t.name, t.version))
            .collect();
        choices.push(NEW_TAG_CHOICE.to_string());

        let index = self.prompter.select(TAG_QUESTION, &choices, default)?;
        let name = match published.get(index) {
            Some(tag) => tag.name.clone(),
            None => self.prompter.input(TAG_INPUT, None, &validate)?,
        };
        Ok(DistTag::explicit(name))
    }

    fn confirm(&self, intent: &ReleaseIntent) -> Result<bool> {
        if self.options.yes {
            return Ok(true);
        }
        self.prompter.confirm(&confirmation_message(intent, self.manifest.private), false)
    }
}

/// Question shown before anything is executed
pub fn confirmation_message(intent: &ReleaseIntent, private: bool) -> String {
    let mut message = format!(
        "This will tag and release a new version from {} to {}",
        intent.current_version, intent.target_version
    );
    if private {
        message.push_str(" (private package, not published)");
    } else {
        message.push_str(&format!(" (tag: {})", intent.distribution_tag));
    }
    if intent.dry_run {
        message.push_str(" [dry run]");
    }
    message.push_str(". Are you sure?");
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::MockRunner;
    use crate::prompt::{Answer, ScriptedPrompter};
    use std::path::PathBuf;

    const TAGS_CMD: &str = "npm dist-tag ls my-pkg";
    const VERSIONS_CMD: &str = "npm view my-pkg versions --json";

    fn manifest(version: &str, private: bool) -> Manifest {
        Manifest {
            path: PathBuf::from("package.json"),
            name: "my-pkg".to_string(),
            version: Version::parse(version).unwrap(),
            private,
        }
    }

    fn run_flow(
        options: &ReleaseOptions,
        manifest: &Manifest,
        prompter: &ScriptedPrompter,
        runner: &MockRunner,
    ) -> (Result<FlowOutcome>, Vec<ReleaseWarning>) {
        let config = Config::default();
        let mut flow = AnswerFlow::new(options, manifest, &config, prompter, runner);
        let outcome = flow.run();
        (outcome, flow.warnings().to_vec())
    }

    fn confirmed(outcome: Result<FlowOutcome>) -> ReleaseIntent {
        match outcome {
            Ok(FlowOutcome::Confirmed(intent)) => intent,
            other => panic!("expected confirmed intent, got {:?}", other),
        }
    }

    #[test]
    fn test_fully_supplied_flags_ask_nothing() {
        let options = ReleaseOptions {
            version: Some("minor".to_string()),
            yes: true,
            tag: TagRequest::Named("next".to_string()),
            message: Some("Release %s".to_string()),
            ..Default::default()
        };
        let prompter = ScriptedPrompter::new([]);
        let runner = MockRunner::new();

        let (outcome, warnings) = run_flow(&options, &manifest("1.2.3", false), &prompter, &runner);
        let intent = confirmed(outcome);

        assert_eq!(intent.target_version, Version::new(1, 3, 0));
        assert_eq!(intent.distribution_tag, DistTag::explicit("next"));
        assert_eq!(intent.commit_message.as_deref(), Some("Release %s"));
        assert!(prompter.asked().is_empty());
        assert!(runner.calls().is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_yes_without_tag_flag_uses_default_channel() {
        let options = ReleaseOptions {
            version: Some("patch".to_string()),
            yes: true,
            ..Default::default()
        };
        let prompter = ScriptedPrompter::new([]);
        let runner = MockRunner::new();

        let (outcome, _) = run_flow(&options, &manifest("1.2.3", false), &prompter, &runner);
        let intent = confirmed(outcome);
        assert_eq!(intent.target_version, Version::new(1, 2, 4));
        assert_eq!(intent.distribution_tag, DistTag::default_channel("latest"));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_interactive_minor_release() {
        let prompter = ScriptedPrompter::new([
            Answer::Choice(1),
            Answer::Choice(0),
            Answer::Confirm(true),
        ]);
        let runner = MockRunner::new().respond(TAGS_CMD, "latest: 1.2.3\nnext: 1.3.0-rc.0\n");

        let (outcome, warnings) =
            run_flow(&ReleaseOptions::default(), &manifest("1.2.3", false), &prompter, &runner);
        let intent = confirmed(outcome);

        assert_eq!(intent.target_version, Version::new(1, 3, 0));
        assert_eq!(intent.distribution_tag.name, "latest");
        assert!(intent.prerelease_identifier.is_none());
        assert!(warnings.is_empty());

        let asked = prompter.asked();
        assert_eq!(asked.len(), 3);
        assert_eq!(asked[0], VERSION_QUESTION);
        assert_eq!(asked[1], TAG_QUESTION);
        assert_eq!(
            asked[2],
            "This will tag and release a new version from 1.2.3 to 1.3.0 (tag: latest). Are you sure?"
        );
        assert_eq!(runner.calls(), vec![TAGS_CMD]);
    }

    #[test]
    fn test_other_version_reasks_until_valid() {
        let options = ReleaseOptions {
            yes: true,
            ..Default::default()
        };
        let prompter = ScriptedPrompter::new([
            Answer::Choice(Increment::ALL.len()),
            Answer::Text("2.0".to_string()),
            Answer::Text("2.0.0".to_string()),
        ]);
        let runner = MockRunner::new();

        let (outcome, _) = run_flow(&options, &manifest("1.2.3", false), &prompter, &runner);
        assert_eq!(confirmed(outcome).target_version, Version::new(2, 0, 0));
        assert_eq!(prompter.rejected(), vec![SPECIFY_VERSION_HINT]);
        assert_eq!(prompter.asked(), vec![VERSION_QUESTION, SPECIFY_VERSION]);
    }

    #[test]
    fn test_prerelease_identifier_picked_from_registry() {
        let options = ReleaseOptions {
            version: Some("preminor".to_string()),
            yes: true,
            ..Default::default()
        };
        let prompter = ScriptedPrompter::new([Answer::Choice(1)]);
        let runner = MockRunner::new().respond(VERSIONS_CMD, r#"["1.0.0","1.1.0-beta.0","1.1.0-rc.1"]"#);

        let (outcome, _) = run_flow(&options, &manifest("1.2.3", false), &prompter, &runner);
        let intent = confirmed(outcome);
        assert_eq!(intent.target_version.to_string(), "1.3.0-rc.0");
        assert_eq!(intent.prerelease_identifier.unwrap().as_str(), "rc");
        assert_eq!(prompter.asked(), vec![PREID_QUESTION]);
    }

    #[test]
    fn test_prerelease_identifier_query_failure_falls_back_to_text() {
        let options = ReleaseOptions {
            version: Some("prepatch".to_string()),
            yes: true,
            ..Default::default()
        };
        let prompter = ScriptedPrompter::new([Answer::Text("alpha".to_string())]);
        let runner = MockRunner::new().fail(VERSIONS_CMD, "npm ERR! 404");

        let (outcome, warnings) = run_flow(&options, &manifest("1.2.3", false), &prompter, &runner);
        assert_eq!(confirmed(outcome).target_version.to_string(), "1.2.4-alpha.0");
        assert_eq!(prompter.asked(), vec![PREID_INPUT]);
        assert!(matches!(warnings[..], [ReleaseWarning::RegistryQueryFailed { .. }]));
    }

    #[test]
    fn test_no_published_identifiers_defaults_to_current_channel() {
        let options = ReleaseOptions {
            version: Some("prerelease".to_string()),
            yes: true,
            ..Default::default()
        };
        let prompter = ScriptedPrompter::new([Answer::Text(String::new())]);
        let runner = MockRunner::new();

        let (outcome, warnings) = run_flow(&options, &manifest("1.3.0-rc.4", false), &prompter, &runner);
        assert_eq!(confirmed(outcome).target_version.to_string(), "1.3.0-rc.5");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_supplied_preid_skips_question() {
        let options = ReleaseOptions {
            version: Some("premajor".to_string()),
            preid: Some("beta".to_string()),
            yes: true,
            ..Default::default()
        };
        let prompter = ScriptedPrompter::new([]);
        let runner = MockRunner::new();

        let (outcome, _) = run_flow(&options, &manifest("1.2.3", false), &prompter, &runner);
        assert_eq!(confirmed(outcome).target_version.to_string(), "2.0.0-beta.0");
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_preid_with_release_keyword_is_ignored_with_warning() {
        let options = ReleaseOptions {
            version: Some("minor".to_string()),
            preid: Some("rc".to_string()),
            yes: true,
            ..Default::default()
        };
        let prompter = ScriptedPrompter::new([]);
        let runner = MockRunner::new();

        let (outcome, warnings) = run_flow(&options, &manifest("1.2.3", false), &prompter, &runner);
        let intent = confirmed(outcome);
        assert_eq!(intent.target_version, Version::new(1, 3, 0));
        assert!(intent.prerelease_identifier.is_none());
        assert_eq!(
            warnings,
            vec![ReleaseWarning::IgnoredPrereleaseIdentifier {
                identifier: "rc".to_string(),
                token: "minor".to_string(),
            }]
        );
    }

    #[test]
    fn test_malformed_preid_with_release_keyword_is_only_ignored() {
        let options = ReleaseOptions {
            version: Some("major".to_string()),
            preid: Some("not valid!".to_string()),
            yes: true,
            ..Default::default()
        };
        let prompter = ScriptedPrompter::new([]);
        let runner = MockRunner::new();

        let (outcome, warnings) = run_flow(&options, &manifest("1.2.3", false), &prompter, &runner);
        assert_eq!(confirmed(outcome).target_version, Version::new(2, 0, 0));
        assert!(matches!(
            warnings[..],
            [ReleaseWarning::IgnoredPrereleaseIdentifier { .. }]
        ));
    }

    #[test]
    fn test_malformed_preid_with_prerelease_keyword_is_an_error() {
        let options = ReleaseOptions {
            version: Some("preminor".to_string()),
            preid: Some("not valid!".to_string()),
            yes: true,
            ..Default::default()
        };
        let prompter = ScriptedPrompter::new([]);
        let runner = MockRunner::new();

        let (outcome, _) = run_flow(&options, &manifest("1.2.3", false), &prompter, &runner);
        assert!(matches!(outcome, Err(CutReleaseError::InvalidVersion { .. })));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_prerelease_literal_derives_identifier() {
        let options = ReleaseOptions {
            version: Some("2.0.0-beta.3".to_string()),
            yes: true,
            ..Default::default()
        };
        let prompter = ScriptedPrompter::new([]);
        let runner = MockRunner::new();

        let (outcome, warnings) = run_flow(&options, &manifest("1.2.3", false), &prompter, &runner);
        let intent = confirmed(outcome);
        assert_eq!(intent.target_version.to_string(), "2.0.0-beta.3");
        assert_eq!(intent.prerelease_identifier.unwrap().as_str(), "beta");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_lower_literal_is_accepted_with_warning() {
        let options = ReleaseOptions {
            version: Some("1.9.0".to_string()),
            yes: true,
            ..Default::default()
        };
        let prompter = ScriptedPrompter::new([]);
        let runner = MockRunner::new();

        let (outcome, warnings) = run_flow(&options, &manifest("2.0.0", false), &prompter, &runner);
        assert_eq!(confirmed(outcome).target_version, Version::new(1, 9, 0));
        assert!(matches!(warnings[..], [ReleaseWarning::NonIncreasingVersion { .. }]));
    }

    #[test]
    fn test_malformed_version_token_is_an_error() {
        let options = ReleaseOptions {
            version: Some("badversion".to_string()),
            ..Default::default()
        };
        let prompter = ScriptedPrompter::new([]);
        let runner = MockRunner::new();

        let (outcome, _) = run_flow(&options, &manifest("1.2.3", false), &prompter, &runner);
        assert!(matches!(outcome, Err(CutReleaseError::InvalidVersion { .. })));
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn test_version_shaped_tag_is_rejected_before_any_question() {
        let options = ReleaseOptions {
            tag: TagRequest::Named("1.2.3".to_string()),
            ..Default::default()
        };
        let prompter = ScriptedPrompter::new([]);
        let runner = MockRunner::new();

        let (outcome, _) = run_flow(&options, &manifest("1.2.3", false), &prompter, &runner);
        assert!(matches!(outcome, Err(CutReleaseError::InvalidInvocation(_))));
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn test_declined_confirmation() {
        let options = ReleaseOptions {
            version: Some("patch".to_string()),
            tag: TagRequest::Named("latest".to_string()),
            ..Default::default()
        };
        let prompter = ScriptedPrompter::new([Answer::Confirm(false)]);
        let runner = MockRunner::new();

        let (outcome, _) = run_flow(&options, &manifest("1.2.3", false), &prompter, &runner);
        assert_eq!(outcome.unwrap(), FlowOutcome::Declined);
    }

    #[test]
    fn test_private_package_never_asks_for_tag() {
        let options = ReleaseOptions {
            version: Some("patch".to_string()),
            tag: TagRequest::Ask,
            dry_run: true,
            ..Default::default()
        };
        let prompter = ScriptedPrompter::new([Answer::Confirm(true)]);
        let runner = MockRunner::new();

        let (outcome, _) = run_flow(&options, &manifest("1.2.3", true), &prompter, &runner);
        let intent = confirmed(outcome);
        assert!(!intent.distribution_tag.explicit);
        assert!(runner.calls().is_empty());
        assert_eq!(
            prompter.asked(),
            vec!["This will tag and release a new version from 1.2.3 to 1.2.4 (private package, not published) [dry run]. Are you sure?"]
        );
    }

    #[test]
    fn test_tag_query_failure_prefills_default_channel() {
        let options = ReleaseOptions {
            version: Some("patch".to_string()),
            yes: true,
            tag: TagRequest::Ask,
            ..Default::default()
        };
        let prompter = ScriptedPrompter::new([Answer::Text(String::new())]);
        let runner = MockRunner::new().fail(TAGS_CMD, "ENOTFOUND registry.npmjs.org");

        let (outcome, warnings) = run_flow(&options, &manifest("1.2.3", false), &prompter, &runner);
        assert_eq!(confirmed(outcome).distribution_tag, DistTag::explicit("latest"));
        assert_eq!(prompter.asked(), vec![TAG_INPUT]);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_new_tag_is_validated() {
        let options = ReleaseOptions {
            version: Some("preminor".to_string()),
            preid: Some("rc".to_string()),
            yes: true,
            tag: TagRequest::Ask,
            ..Default::default()
        };
        let prompter = ScriptedPrompter::new([
            Answer::Choice(1),
            Answer::Text("2.0".to_string()),
            Answer::Text("next".to_string()),
        ]);
        let runner = MockRunner::new().respond(TAGS_CMD, "latest: 1.2.3\n");

        let (outcome, _) = run_flow(&options, &manifest("1.2.3", false), &prompter, &runner);
        assert_eq!(confirmed(outcome).distribution_tag, DistTag::explicit("next"));
        assert_eq!(prompter.rejected().len(), 1);
        assert_eq!(prompter.asked(), vec![TAG_QUESTION, TAG_INPUT]);
    }
}
