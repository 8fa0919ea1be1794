//! Tokens with attached trivia.

use serde::{Deserialize, Serialize};

use crate::core::TextSpan;
use crate::syntax::trivia::TriviaPiece;

/// A semantic token together with the trivia attached to it.
///
/// Trivia attachment is provider-defined: the bundled front end attaches
/// every piece as leading trivia of the following token, but the engine also
/// honors trailing trivia so other tree providers can split differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub span: TextSpan,
    pub leading: Vec<TriviaPiece>,
    pub trailing: Vec<TriviaPiece>,
}

impl Token {
    pub fn new(text: impl Into<String>, span: TextSpan) -> Self {
        Self {
            text: text.into(),
            span,
            leading: Vec::new(),
            trailing: Vec::new(),
        }
    }

    pub fn with_leading(mut self, leading: Vec<TriviaPiece>) -> Self {
        self.leading = leading;
        self
    }

    pub fn with_trailing(mut self, trailing: Vec<TriviaPiece>) -> Self {
        self.trailing = trailing;
        self
    }
}
