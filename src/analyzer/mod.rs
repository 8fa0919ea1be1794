/*!
# Diagnostic scanner

Walks one immutable document snapshot, applies the redundant-name rule to
every candidate construct, and yields diagnostics in ascending document
position. Pure and stateless per call: a text change requires a fresh parse
and a fresh scan, never an incremental patch.
*/

use tracing::debug;

use crate::diagnostics::Diagnostic;
use crate::infer::{BinderNameOracle, NameOracle};
use crate::lang::Capabilities;
use crate::rules::{codes, NameInferenceRule, RulesConfig};
use crate::syntax::{DocumentSnapshot, NameableConstruct};

/// Scanner configured with a rules config, the capability set derived from
/// its language version, and a name oracle.
pub struct DiagnosticScanner {
    config: RulesConfig,
    capabilities: Capabilities,
    oracle: Box<dyn NameOracle>,
}

impl DiagnosticScanner {
    pub fn new(config: RulesConfig) -> Self {
        let capabilities = Capabilities::for_version(config.language_version);
        Self {
            config,
            capabilities,
            oracle: Box::new(BinderNameOracle),
        }
    }

    /// Replace the default oracle, e.g. with a host binder adapter.
    pub fn with_oracle(mut self, oracle: Box<dyn NameOracle>) -> Self {
        self.oracle = oracle;
        self
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Per-node host callback: zero or one diagnostic for one construct.
    /// Absence of a match is a normal negative result, not an error.
    pub fn check_construct(&self, construct: &NameableConstruct) -> Option<Diagnostic> {
        let rule_id = match construct {
            NameableConstruct::TupleElement(_) => codes::REDUNDANT_TUPLE_NAME,
            NameableConstruct::AnonymousMember(_) => codes::REDUNDANT_MEMBER_NAME,
        };
        if !self.config.is_rule_enabled(rule_id) {
            return None;
        }

        let rule_match =
            NameInferenceRule::evaluate(construct, &self.capabilities, self.oracle.as_ref())?;
        debug!(
            rule_id,
            name = %rule_match.name.text,
            span = %rule_match.name.span,
            "redundant explicit name"
        );
        Some(Diagnostic::new(
            rule_id,
            self.config.severity_for(rule_id),
            rule_match,
        ))
    }

    /// Scan one snapshot, yielding diagnostics in ascending start offset.
    /// Snapshot constructs are already position-ordered, so scan order is
    /// document order.
    pub fn scan(&self, snapshot: &DocumentSnapshot) -> Vec<Diagnostic> {
        snapshot
            .constructs()
            .iter()
            .filter_map(|construct| self.check_construct(construct))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TextSpan;
    use crate::lang::LanguageVersion;
    use crate::rules::RuleSeverity;
    use crate::syntax::{ExplicitName, ExprKind, Expression, Token};

    fn redundant_tuple_at(start: u32) -> NameableConstruct {
        let name = Token::new("a", TextSpan::new(start, start + 1));
        let sep = Token::new(":", TextSpan::new(start + 1, start + 2));
        let expr = Expression::new(
            ExprKind::Identifier { name: "a".into() },
            TextSpan::new(start + 3, start + 4),
        );
        NameableConstruct::TupleElement(ExplicitName::named(name, sep, expr))
    }

    #[test]
    fn test_scan_orders_by_position() {
        let snapshot = DocumentSnapshot::new(
            "t.cs",
            " ".repeat(40),
            vec![redundant_tuple_at(20), redundant_tuple_at(4)],
        );
        let scanner = DiagnosticScanner::new(RulesConfig::default());
        let diags = scanner.scan(&snapshot);
        assert_eq!(diags.len(), 2);
        assert!(diags[0].reported_span.start < diags[1].reported_span.start);
    }

    #[test]
    fn test_disabled_rule_yields_nothing() {
        let mut config = RulesConfig::default();
        config.rules.get_mut(codes::REDUNDANT_TUPLE_NAME).unwrap().enabled = false;
        let scanner = DiagnosticScanner::new(config);
        assert!(scanner.check_construct(&redundant_tuple_at(0)).is_none());
    }

    #[test]
    fn test_version_gate_flows_from_config() {
        let config = RulesConfig {
            language_version: LanguageVersion::V7_0,
            ..RulesConfig::default()
        };
        let scanner = DiagnosticScanner::new(config);
        assert!(!scanner.capabilities().inferred_tuple_names);
        assert!(scanner.check_construct(&redundant_tuple_at(0)).is_none());
    }

    #[test]
    fn test_severity_flows_from_config() {
        let mut config = RulesConfig::default();
        config.rules.get_mut(codes::REDUNDANT_TUPLE_NAME).unwrap().severity =
            RuleSeverity::Warning;
        let scanner = DiagnosticScanner::new(config);
        let diag = scanner.check_construct(&redundant_tuple_at(0)).unwrap();
        assert_eq!(diag.severity, RuleSeverity::Warning);
    }
}
