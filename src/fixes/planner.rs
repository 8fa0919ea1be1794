/*!
# Edit planner

Turns one diagnostic into one minimal, trivia-safe text edit.

The removal covers the name token, the trivia strictly between name and
separator, and the separator token. Trivia before the name and trivia after
the separator are left in place byte-for-byte; whatever followed the
separator becomes the expression's leading trivia:

```text
( /*before*/ a: /*middle*/ a /*after*/, ...)
( /*before*/  /*middle*/ a /*after*/, ...)
```

Comments are never dropped: a comment sitting strictly between name and
separator is re-anchored into the edit's replacement text, in its original
order relative to other preserved trivia.
*/

use crate::core::{FixError, TextSpan};
use crate::diagnostics::Diagnostic;
use crate::syntax::TriviaPiece;

/// One text replacement over the original document. `replacement` is empty
/// for a pure deletion; the merger supports arbitrary replacement text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub span: TextSpan,
    pub replacement: String,
}

impl TextEdit {
    pub fn delete(span: TextSpan) -> Self {
        Self { span, replacement: String::new() }
    }

    pub fn replace(span: TextSpan, replacement: impl Into<String>) -> Self {
        Self { span, replacement: replacement.into() }
    }
}

/// Plans the single edit for one diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct EditPlanner;

impl EditPlanner {
    /// Compute the deletion for one diagnostic, or `MalformedTrivia` when the
    /// recorded token layout is structurally inconsistent. A planner error
    /// skips this one diagnostic only; the caller continues with the rest.
    pub fn plan_edit(diagnostic: &Diagnostic) -> Result<TextEdit, FixError> {
        let m = &diagnostic.rule_match;
        let name_span = m.name.span;
        let sep_span = m.separator.span;

        // Tokens must be non-empty and in document order with the expression
        // strictly after the separator.
        let ordered = !name_span.is_empty()
            && !sep_span.is_empty()
            && name_span.end <= sep_span.start
            && sep_span.end <= m.expr_span.start;
        if !ordered {
            return Err(FixError::MalformedTrivia { span: diagnostic.removal_span });
        }

        // Trivia strictly between name and separator. Every piece must lie
        // inside that gap; anything else means the match was built from an
        // inconsistent tree.
        let gap = TextSpan::new(name_span.end, sep_span.start);
        let interior: Vec<&TriviaPiece> = m
            .name
            .trailing
            .iter()
            .chain(m.separator.leading.iter())
            .collect();
        if interior.iter().any(|piece| !gap.contains(&piece.span)) {
            return Err(FixError::MalformedTrivia { span: diagnostic.removal_span });
        }

        let removal = TextSpan::new(name_span.start, sep_span.end);

        // Interior whitespace goes; interior comments are re-anchored at the
        // deletion point, original order kept.
        let comments: Vec<&str> = interior
            .iter()
            .filter(|piece| piece.is_comment())
            .map(|piece| piece.text.as_str())
            .collect();
        if comments.is_empty() {
            Ok(TextEdit::delete(removal))
        } else {
            Ok(TextEdit::replace(removal, comments.join(" ")))
        }
    }
}
