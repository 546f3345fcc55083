// Common error types for semver-lite

/// Errors produced when parsing version text or constructing qualified versions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    /// Input text does not match the `MAJOR.MINOR.PATCH[-QUALIFIER]` grammar
    #[error("Invalid version format: {0}")]
    MalformedVersion(String),

    /// A pre-release or build identifier breaks the identifier rules
    #[error("Invalid qualifier identifier: '{0}'")]
    InvalidIdentifier(String),
}

impl VersionError {
    /// The literal text that failed to parse or validate
    pub fn offending_text(&self) -> &str {
        match self {
            VersionError::MalformedVersion(text) => text,
            VersionError::InvalidIdentifier(identifier) => identifier,
        }
    }
}

pub type Result<T> = std::result::Result<T, VersionError>;
