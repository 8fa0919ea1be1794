//! Trivia: non-semantic source text (whitespace and comments) attached to
//! tokens so that documents round-trip byte-for-byte.

use serde::{Deserialize, Serialize};

use crate::core::TextSpan;

/// Kind of a single trivia piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriviaKind {
    Whitespace,
    LineComment,
    BlockComment,
}

/// One contiguous run of whitespace or one whole comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaPiece {
    pub kind: TriviaKind,
    pub text: String,
    pub span: TextSpan,
}

impl TriviaPiece {
    pub fn new(kind: TriviaKind, text: impl Into<String>, span: TextSpan) -> Self {
        Self { kind, text: text.into(), span }
    }

    /// Comments are never deleted by a fix; whitespace may be.
    pub fn is_comment(&self) -> bool {
        matches!(self.kind, TriviaKind::LineComment | TriviaKind::BlockComment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_classification() {
        let ws = TriviaPiece::new(TriviaKind::Whitespace, "  ", TextSpan::new(0, 2));
        let lc = TriviaPiece::new(TriviaKind::LineComment, "// hi", TextSpan::new(2, 7));
        let bc = TriviaPiece::new(TriviaKind::BlockComment, "/* x */", TextSpan::new(7, 14));
        assert!(!ws.is_comment());
        assert!(lc.is_comment());
        assert!(bc.is_comment());
    }
}
