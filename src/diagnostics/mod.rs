//! Diagnostic messages produced by the scanner.

use serde::{Deserialize, Serialize};

use crate::core::TextSpan;
use crate::rules::{RuleMatch, RuleSeverity};

/// One reported redundant-name occurrence.
///
/// Immutable once created; consumed by at most one fix. The embedded
/// `RuleMatch` carries everything the edit planner needs, so planning never
/// re-evaluates the rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Diagnostic code, e.g. `INF001`.
    pub rule_id: String,
    pub severity: RuleSeverity,
    /// Span highlighted to the user: the redundant name token.
    pub reported_span: TextSpan,
    /// Span the fix will delete: name token through separator token.
    pub removal_span: TextSpan,
    /// Whether a code fix can be offered for this occurrence.
    pub fixable: bool,
    /// Syntax details captured at match time.
    pub rule_match: RuleMatch,
}

impl Diagnostic {
    pub fn new(rule_id: impl Into<String>, severity: RuleSeverity, rule_match: RuleMatch) -> Self {
        let reported_span = rule_match.name.span;
        // A hand-built match may carry token spans out of document order; the
        // planner rejects that layout, so the removal span here only has to
        // be well formed.
        let removal_span = TextSpan::new(
            rule_match.name.span.start.min(rule_match.separator.span.start),
            rule_match.name.span.end.max(rule_match.separator.span.end),
        );
        Self {
            rule_id: rule_id.into(),
            severity,
            reported_span,
            removal_span,
            fixable: true,
            rule_match,
        }
    }

    pub fn message(&self) -> String {
        format!(
            "Explicit name '{}' is redundant; it can be inferred from the expression",
            self.rule_match.name.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::codes;
    use crate::syntax::Token;

    #[test]
    fn test_spans_derived_from_match() {
        let rule_match = RuleMatch {
            name: Token::new("a", TextSpan::new(5, 6)),
            separator: Token::new(":", TextSpan::new(6, 7)),
            expr_span: TextSpan::new(8, 9),
            expr_leading: Vec::new(),
        };
        let diag = Diagnostic::new(codes::REDUNDANT_TUPLE_NAME, RuleSeverity::Info, rule_match);
        assert_eq!(diag.reported_span, TextSpan::new(5, 6));
        assert_eq!(diag.removal_span, TextSpan::new(5, 7));
        assert!(diag.fixable);
        assert!(diag.message().contains("'a'"));
    }

    #[test]
    fn test_out_of_order_token_spans_still_build() {
        let rule_match = RuleMatch {
            name: Token::new("a", TextSpan::new(5, 6)),
            separator: Token::new(":", TextSpan::new(2, 3)),
            expr_span: TextSpan::new(8, 9),
            expr_leading: Vec::new(),
        };
        let diag = Diagnostic::new(codes::REDUNDANT_TUPLE_NAME, RuleSeverity::Info, rule_match);
        assert_eq!(diag.removal_span, TextSpan::new(2, 6));
    }
}
