use crate::error::{CutReleaseError, Result};
use semver::Version;
use std::fmt;
use std::str::FromStr;

/// Increment keyword deciding how the next version derives from the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Increment {
    Patch,
    Minor,
    Major,
    Prepatch,
    Preminor,
    Premajor,
    Prerelease,
}

impl Increment {
    /// All keywords, in the order they are offered to the operator
    pub const ALL: [Increment; 7] = [
        Increment::Patch,
        Increment::Minor,
        Increment::Major,
        Increment::Prepatch,
        Increment::Preminor,
        Increment::Premajor,
        Increment::Prerelease,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Increment::Patch => "patch",
            Increment::Minor => "minor",
            Increment::Major => "major",
            Increment::Prepatch => "prepatch",
            Increment::Preminor => "preminor",
            Increment::Premajor => "premajor",
            Increment::Prerelease => "prerelease",
        }
    }

    /// Whether the resulting version carries a prerelease segment
    pub fn is_prerelease(&self) -> bool {
        matches!(
            self,
            Increment::Prepatch | Increment::Preminor | Increment::Premajor | Increment::Prerelease
        )
    }
}

impl FromStr for Increment {
    type Err = CutReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        Increment::ALL
            .iter()
            .copied()
            .find(|inc| inc.as_str() == s)
            .ok_or_else(|| CutReleaseError::invalid_version(s))
    }
}

impl fmt::Display for Increment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the operator asked for: a rule or an exact version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionToken {
    Increment(Increment),
    Literal(Version),
}

impl VersionToken {
    /// Parse a positional argument or free-text answer.
    ///
    /// Keywords win over literals; anything else must be a complete semantic
    /// version such as `1.2.3` or `2.0.0-rc.1`.
    pub fn parse(token: &str) -> Result<Self> {
        if let Ok(increment) = token.parse::<Increment>() {
            return Ok(VersionToken::Increment(increment));
        }

        Version::parse(token)
            .map(VersionToken::Literal)
            .map_err(|_| CutReleaseError::invalid_version(token))
    }

    /// Whether the version this token resolves to is a prerelease
    pub fn is_prerelease(&self) -> bool {
        match self {
            VersionToken::Increment(increment) => increment.is_prerelease(),
            VersionToken::Literal(version) => !version.pre.is_empty(),
        }
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionToken::Increment(increment) => write!(f, "{}", increment),
            VersionToken::Literal(version) => write!(f, "{}", version),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_round_trip_through_display() {
        for increment in Increment::ALL {
            assert_eq!(increment.to_string().parse::<Increment>().unwrap(), increment);
        }
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert!("Minor".parse::<Increment>().is_err());
    }

    #[test]
    fn test_prerelease_classes() {
        assert!(!Increment::Patch.is_prerelease());
        assert!(!Increment::Minor.is_prerelease());
        assert!(!Increment::Major.is_prerelease());
        assert!(Increment::Prepatch.is_prerelease());
        assert!(Increment::Preminor.is_prerelease());
        assert!(Increment::Premajor.is_prerelease());
        assert!(Increment::Prerelease.is_prerelease());
    }

    #[test]
    fn test_token_parse_keyword() {
        assert_eq!(
            VersionToken::parse("premajor").unwrap(),
            VersionToken::Increment(Increment::Premajor)
        );
    }

    #[test]
    fn test_token_parse_literal() {
        let token = VersionToken::parse("2.0.0-beta.1").unwrap();
        assert_eq!(
            token,
            VersionToken::Literal(Version::parse("2.0.0-beta.1").unwrap())
        );
        assert!(token.is_prerelease());
        assert!(!VersionToken::parse("2.0.0").unwrap().is_prerelease());
    }

    #[test]
    fn test_token_parse_rejects_partial_versions() {
        for bad in ["badversion", "1.2", "v1.2.3", "1.2.3.4", ""] {
            assert!(
                matches!(
                    VersionToken::parse(bad),
                    Err(CutReleaseError::InvalidVersion { .. })
                ),
                "expected '{}' to be rejected",
                bad
            );
        }
    }
}
