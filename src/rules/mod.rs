//! Rules system: rule identifiers, severities, configuration, and the
//! redundant-name rule itself.

pub mod config;
pub mod inferred_name;

pub use config::{RuleConfig, RulesConfig};
pub use inferred_name::{NameInferenceRule, RuleMatch};

use serde::{Deserialize, Serialize};

/// Diagnostic codes for the rules in this crate.
pub mod codes {
    /// Redundant explicit tuple-element name (`a: a`).
    pub const REDUNDANT_TUPLE_NAME: &str = "INF001";
    /// Redundant explicit anonymous-member name (`a = a`).
    pub const REDUNDANT_MEMBER_NAME: &str = "INF002";
}

/// Rule severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    /// Error - blocks CI.
    Error,
    /// Warning - should be fixed but doesn't block.
    Warning,
    /// Info - informational message (default for style rules).
    #[default]
    Info,
    /// Hint - subtle suggestion.
    Hint,
}

impl std::fmt::Display for RuleSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleSeverity::Error => write!(f, "error"),
            RuleSeverity::Warning => write!(f, "warning"),
            RuleSeverity::Info => write!(f, "info"),
            RuleSeverity::Hint => write!(f, "hint"),
        }
    }
}
