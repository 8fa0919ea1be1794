//! Name-inference oracle.
//!
//! The host language's binder decides which expressions yield an inferable
//! name. That derivation is injected behind a trait so the engine never
//! couples to a specific grammar; a mismatch here would let the analyzer
//! delete a name the compiler cannot re-infer, silently changing program
//! meaning.

use crate::syntax::{ExprKind, Expression};

/// Answers: what name, if any, would the binder infer for this expression?
pub trait NameOracle: Send + Sync {
    fn inferred_name<'a>(&self, expr: &'a Expression) -> Option<&'a str>;
}

/// Default oracle matching the binder rules the analyzer targets: a bare
/// identifier yields itself, a member access yields its final segment, and
/// every other expression shape yields nothing. Both tuple elements and
/// anonymous members share these rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct BinderNameOracle;

impl NameOracle for BinderNameOracle {
    fn inferred_name<'a>(&self, expr: &'a Expression) -> Option<&'a str> {
        match &expr.kind {
            ExprKind::Identifier { name } => Some(name),
            ExprKind::MemberAccess { name, .. } => Some(name),
            ExprKind::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TextSpan;

    fn expr(kind: ExprKind) -> Expression {
        Expression::new(kind, TextSpan::new(0, 1))
    }

    #[test]
    fn test_identifier_infers_itself() {
        let oracle = BinderNameOracle;
        let e = expr(ExprKind::Identifier { name: "total".into() });
        assert_eq!(oracle.inferred_name(&e), Some("total"));
    }

    #[test]
    fn test_member_access_infers_final_segment() {
        let oracle = BinderNameOracle;
        let e = expr(ExprKind::MemberAccess { path: "x.y".into(), name: "Name".into() });
        assert_eq!(oracle.inferred_name(&e), Some("Name"));
    }

    #[test]
    fn test_other_infers_nothing() {
        let oracle = BinderNameOracle;
        assert_eq!(oracle.inferred_name(&expr(ExprKind::Other)), None);
    }
}
