//! Immutable per-document snapshot.
//!
//! A snapshot is created once per parse and never mutated. Diagnostics and
//! edits are only meaningful against the snapshot they were derived from; any
//! text change requires a fresh parse and a fresh scan.

use crate::core::LineIndex;
use crate::syntax::construct::NameableConstruct;

/// One parsed document: its full text plus the candidate constructs found in
/// it, in ascending document-position order.
#[derive(Debug, Clone)]
pub struct DocumentSnapshot {
    file: String,
    text: String,
    constructs: Vec<NameableConstruct>,
    line_index: LineIndex,
}

impl DocumentSnapshot {
    pub fn new(
        file: impl Into<String>,
        text: impl Into<String>,
        mut constructs: Vec<NameableConstruct>,
    ) -> Self {
        let text = text.into();
        constructs.sort_by_key(|c| c.start());
        let line_index = LineIndex::new(&text);
        Self { file: file.into(), text, constructs, line_index }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn constructs(&self) -> &[NameableConstruct] {
        &self.constructs
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TextSpan;
    use crate::syntax::construct::{ExplicitName, ExprKind, Expression};

    #[test]
    fn test_constructs_sorted_by_position() {
        let late = NameableConstruct::TupleElement(ExplicitName::unnamed(Expression::new(
            ExprKind::Other,
            TextSpan::new(9, 10),
        )));
        let early = NameableConstruct::TupleElement(ExplicitName::unnamed(Expression::new(
            ExprKind::Other,
            TextSpan::new(1, 2),
        )));
        let snapshot = DocumentSnapshot::new("t.cs", "0123456789ab", vec![late, early]);
        let starts: Vec<u32> = snapshot.constructs().iter().map(|c| c.start()).collect();
        assert_eq!(starts, vec![1, 9]);
    }
}
