use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::models::qualifier::Qualifier;
use crate::utils::error::{Result, VersionError};

/// An immutable semantic version: `MAJOR.MINOR.PATCH` with optional
/// pre-release and build qualifiers
///
/// Versions are value types: every "next version" operation returns a new
/// instance and no instance is mutated after construction.
///
/// Ordering is defined over the `(major, minor, patch)` triple only, while
/// equality also compares the qualifiers. Two versions that differ only in
/// their pre-release tag compare as `Ordering::Equal` but are not `==`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    /// Major version number (X in X.Y.Z)
    pub major: u64,
    /// Minor version number (Y in X.Y.Z)
    pub minor: u64,
    /// Patch version number (Z in X.Y.Z)
    pub patch: u64,
    /// Pre-release qualifier (e.g. `alpha.1` in `1.0.0-alpha.1`)
    pub pre_release: Option<Qualifier>,
    /// Build metadata qualifier; never populated by parsing
    pub build: Option<Qualifier>,
}

impl Version {
    /// Create a version with no qualifiers
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: None,
            build: None,
        }
    }

    /// Create a version with optional pre-release and build qualifiers
    ///
    /// Both sequences are validated independently; the first identifier that
    /// breaks the identifier rules fails the whole construction and no
    /// instance is produced.
    pub fn with_qualifiers(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Option<Vec<String>>,
        build: Option<Vec<String>>,
    ) -> Result<Self> {
        let pre_release = pre_release.map(Qualifier::new).transpose()?;
        let build = build.map(Qualifier::new).transpose()?;

        Ok(Self {
            major,
            minor,
            patch,
            pre_release,
            build,
        })
    }

    /// The next major version; qualifiers are dropped
    pub fn next_major(&self) -> Self {
        Self::new(self.major + 1, 0, 0)
    }

    /// The next minor version; qualifiers are dropped
    pub fn next_minor(&self) -> Self {
        Self::new(self.major, self.minor + 1, 0)
    }

    /// The next patch version; qualifiers are dropped
    pub fn next_patch(&self) -> Self {
        Self::new(self.major, self.minor, self.patch + 1)
    }

    /// The major component alone, e.g. `"1"` for `1.2.3`
    pub fn major_string(&self) -> String {
        self.major.to_string()
    }

    /// The major and minor components, e.g. `"1.2"` for `1.2.3`
    pub fn minor_string(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if let Some(pre_release) = &self.pre_release {
            write!(f, "-{}", pre_release)?;
        }

        // Build metadata renders with the same '-' separator as the
        // pre-release segment.
        if let Some(build) = &self.build {
            write!(f, "-{}", build)?;
        }

        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || VersionError::MalformedVersion(s.to_string());

        // Everything after the first '-' is the pre-release descriptor;
        // build metadata is never split out of the string form.
        let (numerals, descriptor) = match s.split_once('-') {
            Some((_, "")) => return Err(malformed()),
            Some((numerals, rest)) => (numerals, Some(rest)),
            None => (s, None),
        };

        let parts: Vec<&str> = numerals.split('.').collect();
        if parts.is_empty() || parts.len() > 3 {
            return Err(malformed());
        }

        // Missing minor/patch components default to 0.
        let major = parts[0].parse().map_err(|_| malformed())?;
        let minor = if parts.len() > 1 {
            parts[1].parse().map_err(|_| malformed())?
        } else {
            0
        };
        let patch = if parts.len() > 2 {
            parts[2].parse().map_err(|_| malformed())?
        } else {
            0
        };

        let pre_release = descriptor
            .map(|descriptor| descriptor.parse::<Qualifier>())
            .transpose()?;

        Ok(Self {
            major,
            minor,
            patch,
            pre_release,
            build: None,
        })
    }
}

impl Ord for Version {
    // Precedence considers only the numeric triple; pre-release and build
    // qualifiers never participate.
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
