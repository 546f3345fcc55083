use std::fmt;
use std::str::FromStr;

use crate::utils::error::{Result, VersionError};

/// An ordered, validated sequence of pre-release or build identifiers
///
/// A qualifier is the dot-separated tail of a version string, e.g. `alpha.1`
/// in `1.0.0-alpha.1`. Identifiers are restricted to ASCII alphanumerics and
/// hyphens, must be non-empty, and may not start with `'0'` when longer than
/// one character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Qualifier {
    identifiers: Vec<String>,
}

impl Qualifier {
    /// Create a qualifier from a sequence of identifiers
    ///
    /// Fails on the first identifier that breaks the identifier rules. An
    /// empty sequence is rejected as well: "no qualifier" is expressed as
    /// `None` on the version, never as an empty sequence.
    pub fn new(identifiers: Vec<String>) -> Result<Self> {
        if identifiers.is_empty() {
            return Err(VersionError::InvalidIdentifier(String::new()));
        }

        for identifier in &identifiers {
            validate_identifier(identifier)?;
        }

        Ok(Self { identifiers })
    }

    /// The identifiers in declaration order
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }
}

/// Check a single identifier against the identifier rules
fn validate_identifier(identifier: &str) -> Result<()> {
    if identifier.is_empty() {
        return Err(VersionError::InvalidIdentifier(identifier.to_string()));
    }

    if !identifier
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(VersionError::InvalidIdentifier(identifier.to_string()));
    }

    // The leading-zero rule applies to every multi-character identifier,
    // numeric and alphanumeric alike.
    if identifier.len() > 1 && identifier.starts_with('0') {
        return Err(VersionError::InvalidIdentifier(identifier.to_string()));
    }

    Ok(())
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifiers.join("."))
    }
}

impl FromStr for Qualifier {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        let identifiers = s.split('.').map(str::to_string).collect();
        Self::new(identifiers)
    }
}
