use std::fmt;

/// Non-fatal conditions noticed while resolving a release.
/// These are reported to the operator but never stop the flow.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseWarning {
    /// The target does not sort above the current version
    NonIncreasingVersion { current: String, target: String },
    /// A registry lookup failed and a free-text question is used instead
    RegistryQueryFailed { what: String, reason: String },
    /// `--preid` was given for a version that is not a prerelease
    IgnoredPrereleaseIdentifier { identifier: String, token: String },
}

impl fmt::Display for ReleaseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseWarning::NonIncreasingVersion { current, target } => {
                write!(
                    f,
                    "Target version {} is not greater than the current version {}",
                    target, current
                )
            }
            ReleaseWarning::RegistryQueryFailed { what, reason } => {
                write!(f, "Could not look up {}: {}", what, reason)
            }
            ReleaseWarning::IgnoredPrereleaseIdentifier { identifier, token } => {
                write!(
                    f,
                    "Ignoring prerelease identifier '{}': '{}' is not a prerelease",
                    identifier, token
                )
            }
        }
    }
}
