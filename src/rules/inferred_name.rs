/*!
# Redundant-name rule

Pure predicate: does this construct carry an explicit name the binder would
infer on its own? The rule has no internal state, never mutates its input,
and is safe to call concurrently.
*/

use serde::{Deserialize, Serialize};

use crate::core::TextSpan;
use crate::infer::NameOracle;
use crate::lang::Capabilities;
use crate::syntax::{NameableConstruct, Token, TriviaPiece};

/// Everything the edit planner needs about one match, captured here so the
/// planner never re-derives syntax shape. Owned clones: a match outlives the
/// borrow of the construct it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMatch {
    /// The redundant explicit-name token.
    pub name: Token,
    /// The separator token, `:` or `=`.
    pub separator: Token,
    /// Span of the expression the name was inferred from.
    pub expr_span: TextSpan,
    /// Leading trivia of that expression; preserved untouched by the fix.
    pub expr_leading: Vec<TriviaPiece>,
}

/// The detection rule for both construct variants.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameInferenceRule;

impl NameInferenceRule {
    /// Returns a match iff the explicit name is present, equals the
    /// oracle-inferred name by ordinal comparison, and the capability gate
    /// permits inference for this construct kind.
    ///
    /// Tuple elements are gated on `capabilities.inferred_tuple_names`;
    /// anonymous members have no gate.
    pub fn evaluate(
        construct: &NameableConstruct,
        capabilities: &Capabilities,
        oracle: &dyn NameOracle,
    ) -> Option<RuleMatch> {
        if construct.is_tuple_element() && !capabilities.inferred_tuple_names {
            return None;
        }

        let parts = construct.parts();
        let name = parts.name.as_ref()?;
        let separator = parts.separator.as_ref()?;

        let inferred = oracle.inferred_name(&parts.expr)?;
        // Ordinal, case-sensitive: `A: a` never matches.
        if name.text != inferred {
            return None;
        }

        Some(RuleMatch {
            name: name.clone(),
            separator: separator.clone(),
            expr_span: parts.expr.span,
            expr_leading: parts.expr.leading.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infer::BinderNameOracle;
    use crate::lang::LanguageVersion;
    use crate::syntax::{ExplicitName, ExprKind, Expression};

    fn tuple_element(name: &str, expr_name: &str) -> NameableConstruct {
        NameableConstruct::TupleElement(named_parts(name, ":", expr_name))
    }

    fn anonymous_member(name: &str, expr_name: &str) -> NameableConstruct {
        NameableConstruct::AnonymousMember(named_parts(name, "=", expr_name))
    }

    fn named_parts(name: &str, sep: &str, expr_name: &str) -> ExplicitName {
        let name_len = name.len() as u32;
        let name_token = Token::new(name, TextSpan::new(0, name_len));
        let sep_token = Token::new(sep, TextSpan::new(name_len, name_len + 1));
        let expr_start = name_len + 2;
        let expr = Expression::new(
            ExprKind::Identifier { name: expr_name.to_string() },
            TextSpan::new(expr_start, expr_start + expr_name.len() as u32),
        );
        ExplicitName::named(name_token, sep_token, expr)
    }

    fn caps(version: LanguageVersion) -> Capabilities {
        Capabilities::for_version(version)
    }

    #[test]
    fn test_tuple_match_with_gate_enabled() {
        let construct = tuple_element("a", "a");
        let m = NameInferenceRule::evaluate(&construct, &caps(LanguageVersion::V7_1), &BinderNameOracle);
        assert!(m.is_some());
        let m = m.unwrap();
        assert_eq!(m.name.text, "a");
        assert_eq!(m.separator.text, ":");
    }

    #[test]
    fn test_tuple_no_match_under_old_versions() {
        let construct = tuple_element("a", "a");
        for version in [LanguageVersion::V6, LanguageVersion::V7_0] {
            let m = NameInferenceRule::evaluate(&construct, &caps(version), &BinderNameOracle);
            assert!(m.is_none(), "version {} must not match", version);
        }
    }

    #[test]
    fn test_anonymous_member_ignores_gate() {
        let construct = anonymous_member("a", "a");
        for version in [LanguageVersion::V6, LanguageVersion::V7_0, LanguageVersion::V7_1] {
            let m = NameInferenceRule::evaluate(&construct, &caps(version), &BinderNameOracle);
            assert!(m.is_some(), "version {} must match", version);
        }
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let construct = tuple_element("A", "a");
        let m = NameInferenceRule::evaluate(&construct, &caps(LanguageVersion::V7_1), &BinderNameOracle);
        assert!(m.is_none());
    }

    #[test]
    fn test_different_names_never_match() {
        let construct = anonymous_member("total", "sum");
        let m = NameInferenceRule::evaluate(&construct, &Capabilities::default(), &BinderNameOracle);
        assert!(m.is_none());
    }

    #[test]
    fn test_unnamed_element_never_matches() {
        let expr = Expression::new(
            ExprKind::Identifier { name: "a".into() },
            TextSpan::new(0, 1),
        );
        let construct = NameableConstruct::TupleElement(ExplicitName::unnamed(expr));
        let m = NameInferenceRule::evaluate(&construct, &Capabilities::default(), &BinderNameOracle);
        assert!(m.is_none());
    }

    #[test]
    fn test_member_access_tail_matches() {
        let name_token = Token::new("Name", TextSpan::new(0, 4));
        let sep_token = Token::new("=", TextSpan::new(5, 6));
        let expr = Expression::new(
            ExprKind::MemberAccess { path: "x".into(), name: "Name".into() },
            TextSpan::new(7, 13),
        );
        let construct =
            NameableConstruct::AnonymousMember(ExplicitName::named(name_token, sep_token, expr));
        let m = NameInferenceRule::evaluate(&construct, &Capabilities::default(), &BinderNameOracle);
        assert!(m.is_some());
    }

    #[test]
    fn test_non_inferable_expression_never_matches() {
        let name_token = Token::new("a", TextSpan::new(0, 1));
        let sep_token = Token::new(":", TextSpan::new(1, 2));
        let expr = Expression::new(ExprKind::Other, TextSpan::new(3, 8));
        let construct =
            NameableConstruct::TupleElement(ExplicitName::named(name_token, sep_token, expr));
        let m = NameInferenceRule::evaluate(&construct, &Capabilities::default(), &BinderNameOracle);
        assert!(m.is_none());
    }
}
