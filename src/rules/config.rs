/*!
# Rules configuration

TOML-backed configuration: per-rule enable flags and severities plus the
language version the capability gate is computed from.
*/

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::lang::LanguageVersion;
use crate::rules::{codes, RuleSeverity};

/// Configuration for a single rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether the rule is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Rule severity level.
    #[serde(default)]
    pub severity: RuleSeverity,

    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: RuleSeverity::Info,
            description: None,
        }
    }
}

/// Top-level rules configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Language version the capability gate is derived from.
    #[serde(default)]
    pub language_version: LanguageVersion,

    /// Per-rule configuration, keyed by diagnostic code.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        let mut rules = HashMap::new();
        rules.insert(
            codes::REDUNDANT_TUPLE_NAME.to_string(),
            RuleConfig {
                description: Some("Redundant explicit tuple-element name".to_string()),
                ..RuleConfig::default()
            },
        );
        rules.insert(
            codes::REDUNDANT_MEMBER_NAME.to_string(),
            RuleConfig {
                description: Some("Redundant explicit anonymous-member name".to_string()),
                ..RuleConfig::default()
            },
        );
        Self {
            language_version: LanguageVersion::default(),
            rules,
        }
    }
}

impl RulesConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rules config: {}", path.display()))?;
        let config: RulesConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse rules config: {}", path.display()))?;
        Ok(config)
    }

    /// Unknown rule ids default to disabled.
    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        self.rules.get(rule_id).map(|r| r.enabled).unwrap_or(false)
    }

    pub fn severity_for(&self, rule_id: &str) -> RuleSeverity {
        self.rules
            .get(rule_id)
            .map(|r| r.severity)
            .unwrap_or_default()
    }

    /// Serialize the configuration as TOML, e.g. for `generate-config`.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize rules config")
    }
}
