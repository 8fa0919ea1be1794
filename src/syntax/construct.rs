//! The candidate constructs the analyzer inspects.
//!
//! The construct set is fixed and closed by the host grammar, so it is a
//! tagged union with exhaustive matching rather than an open hierarchy.

use serde::{Deserialize, Serialize};

use crate::core::TextSpan;
use crate::syntax::token::Token;
use crate::syntax::trivia::TriviaPiece;

/// Shape of an element expression, as far as name inference cares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ExprKind {
    /// A bare identifier: `a`.
    Identifier { name: String },
    /// A member-access chain: `x.y.Name`. Only the final segment matters
    /// for inference; `path` keeps the full source form for display.
    MemberAccess { path: String, name: String },
    /// Anything else: literals, calls, operators. Never yields a name.
    Other,
}

/// An element expression with its span and leading trivia.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
    pub kind: ExprKind,
    pub span: TextSpan,
    pub leading: Vec<TriviaPiece>,
}

impl Expression {
    pub fn new(kind: ExprKind, span: TextSpan) -> Self {
        Self { kind, span, leading: Vec::new() }
    }

    pub fn with_leading(mut self, leading: Vec<TriviaPiece>) -> Self {
        self.leading = leading;
        self
    }
}

/// The `name <sep> expression` shape shared by both construct variants.
/// Elements written without an explicit name carry `None` for both tokens
/// and can never match the rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplicitName {
    pub name: Option<Token>,
    pub separator: Option<Token>,
    pub expr: Expression,
}

impl ExplicitName {
    pub fn unnamed(expr: Expression) -> Self {
        Self { name: None, separator: None, expr }
    }

    pub fn named(name: Token, separator: Token, expr: Expression) -> Self {
        Self { name: Some(name), separator: Some(separator), expr }
    }
}

/// One candidate node: a tuple-literal element (`name: expr`) or an
/// anonymous-object member initializer (`name = expr`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "construct")]
pub enum NameableConstruct {
    TupleElement(ExplicitName),
    AnonymousMember(ExplicitName),
}

impl NameableConstruct {
    pub fn parts(&self) -> &ExplicitName {
        match self {
            NameableConstruct::TupleElement(parts) => parts,
            NameableConstruct::AnonymousMember(parts) => parts,
        }
    }

    pub fn is_tuple_element(&self) -> bool {
        matches!(self, NameableConstruct::TupleElement(_))
    }

    /// Document position the construct starts at, used for scan ordering.
    pub fn start(&self) -> u32 {
        let parts = self.parts();
        match &parts.name {
            Some(name) => name.span.start,
            None => parts.expr.span.start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TextSpan;

    #[test]
    fn test_start_prefers_name_token() {
        let name = Token::new("a", TextSpan::new(1, 2));
        let sep = Token::new(":", TextSpan::new(2, 3));
        let expr = Expression::new(ExprKind::Identifier { name: "a".into() }, TextSpan::new(4, 5));
        let c = NameableConstruct::TupleElement(ExplicitName::named(name, sep, expr));
        assert_eq!(c.start(), 1);

        let expr = Expression::new(ExprKind::Other, TextSpan::new(7, 8));
        let c = NameableConstruct::TupleElement(ExplicitName::unnamed(expr));
        assert_eq!(c.start(), 7);
    }
}
