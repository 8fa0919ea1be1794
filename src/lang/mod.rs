//! Language version identifiers and the capability gate derived from them.
//!
//! Inferred tuple-element names arrived in language version 7.1; inferred
//! anonymous-member names have always been available, so only the tuple rule
//! carries a version gate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A `major.minor` language version. Ordering is derived, so gates are plain
/// comparisons.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageVersion {
    pub major: u8,
    pub minor: u8,
}

impl LanguageVersion {
    pub const V6: LanguageVersion = LanguageVersion { major: 6, minor: 0 };
    pub const V7_0: LanguageVersion = LanguageVersion { major: 7, minor: 0 };
    pub const V7_1: LanguageVersion = LanguageVersion { major: 7, minor: 1 };
    /// Newest version the analyzer knows about; used as the default.
    pub const LATEST: LanguageVersion = LanguageVersion { major: 12, minor: 0 };

    pub fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl Default for LanguageVersion {
    fn default() -> Self {
        Self::LATEST
    }
}

impl fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for LanguageVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("latest") {
            return Ok(Self::LATEST);
        }
        let (major, minor) = match s.split_once('.') {
            Some((maj, min)) => (maj, min),
            None => (s, "0"),
        };
        let major: u8 = major
            .parse()
            .map_err(|_| format!("invalid language version: '{}'", s))?;
        let minor: u8 = minor
            .parse()
            .map_err(|_| format!("invalid language version: '{}'", s))?;
        Ok(Self { major, minor })
    }
}

impl TryFrom<String> for LanguageVersion {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LanguageVersion> for String {
    fn from(v: LanguageVersion) -> String {
        v.to_string()
    }
}

/// The capability set the rule consults. Computed once per scan from the
/// configured language version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// True for language versions >= 7.1.
    pub inferred_tuple_names: bool,
}

impl Capabilities {
    pub fn for_version(version: LanguageVersion) -> Self {
        Self {
            inferred_tuple_names: version >= LanguageVersion::V7_1,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::for_version(LanguageVersion::LATEST)
    }
}
