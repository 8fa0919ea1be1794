/*!
# Error types for the fix pipeline

Failures here are deliberately local in blast radius: a malformed trivia
layout skips one diagnostic, an overlapping batch aborts one document's
fix-all. "No match" is never an error and is represented as `None` at the
call sites, not here.
*/

use thiserror::Error;

use crate::core::position::TextSpan;

/// Errors produced while planning or merging text edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixError {
    /// The trivia layout around one candidate is structurally inconsistent
    /// (out-of-order or overlapping name/separator/expression spans). The
    /// affected diagnostic is skipped; other diagnostics are unaffected.
    #[error("malformed trivia layout around construct at {span}")]
    MalformedTrivia { span: TextSpan },

    /// Two edits in one batch cover overlapping spans. The whole fix-all
    /// operation for the document is aborted and the original text kept.
    #[error("overlapping edits: {first} and {second}")]
    OverlappingEdits { first: TextSpan, second: TextSpan },

    /// An edit points outside the document it was planned for. This means
    /// the batch was applied against the wrong snapshot; the batch aborts.
    #[error("edit span {span} exceeds document length {len}")]
    EditOutOfBounds { span: TextSpan, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FixError::OverlappingEdits {
            first: TextSpan::new(1, 5),
            second: TextSpan::new(3, 8),
        };
        assert_eq!(err.to_string(), "overlapping edits: [1..5) and [3..8)");
    }
}
