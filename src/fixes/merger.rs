/*!
# Batch edit merger

Combines the edits planned against one document snapshot into a single
atomic rewrite. All-or-nothing: either every edit applies or none does.
*/

use crate::core::{FixError, TextSpan};
use crate::fixes::planner::TextEdit;

/// Merges independently planned edits into one new document text.
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchEditMerger;

impl BatchEditMerger {
    /// Validate and apply a batch of edits over `original`.
    ///
    /// Precondition: every edit derives from the same pre-edit snapshot of
    /// `original`. Edits must be pairwise non-overlapping; because spans are
    /// disjoint the result is independent of the edits' planning order.
    ///
    /// On any violation the error is returned and the caller keeps the
    /// original text; no partial rewrite is ever produced.
    pub fn merge_edits(original: &str, edits: &[TextEdit]) -> Result<String, FixError> {
        for edit in edits {
            if edit.span.end as usize > original.len() {
                return Err(FixError::EditOutOfBounds {
                    span: edit.span,
                    len: original.len(),
                });
            }
        }

        let mut ordered: Vec<&TextEdit> = edits.iter().collect();
        ordered.sort_by_key(|edit| (edit.span.start, edit.span.end));

        for pair in ordered.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            // Sorted by start, so any intrusion shows up as the later edit
            // starting before the earlier one ends. Stricter than span
            // overlap: an insertion placed inside another edit's span is
            // rejected too, touching edits are fine.
            if b.span.start < a.span.end {
                return Err(FixError::OverlappingEdits {
                    first: a.span,
                    second: b.span,
                });
            }
        }

        let grow: usize = ordered.iter().map(|e| e.replacement.len()).sum();
        let mut result = String::with_capacity(original.len() + grow);
        let mut cursor = 0usize;
        for edit in &ordered {
            result.push_str(&original[cursor..edit.span.start as usize]);
            result.push_str(&edit.replacement);
            cursor = edit.span.end as usize;
        }
        result.push_str(&original[cursor..]);

        debug_assert_eq!(
            result.len(),
            original.len() + grow
                - ordered.iter().map(|e| e.span.len() as usize).sum::<usize>()
        );
        Ok(result)
    }
}

/// Applies one edit on its own; used by the single-fix host callback.
pub fn apply_single(original: &str, edit: &TextEdit) -> Result<String, FixError> {
    BatchEditMerger::merge_edits(original, std::slice::from_ref(edit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn del(start: u32, end: u32) -> TextEdit {
        TextEdit::delete(TextSpan::new(start, end))
    }

    #[test]
    fn test_single_deletion() {
        let out = BatchEditMerger::merge_edits("hello world", &[del(5, 11)]).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn test_disjoint_edits_commute() {
        let text = "aa bb cc dd";
        let forward = [del(0, 2), del(6, 8)];
        let backward = [del(6, 8), del(0, 2)];
        let a = BatchEditMerger::merge_edits(text, &forward).unwrap();
        let b = BatchEditMerger::merge_edits(text, &backward).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, " bb  dd");
    }

    #[test]
    fn test_replacement_text_supported() {
        let edit = TextEdit::replace(TextSpan::new(4, 7), "there");
        let out = BatchEditMerger::merge_edits("hi, you!", &[edit]).unwrap();
        assert_eq!(out, "hi, there!");
    }

    #[test]
    fn test_overlapping_batch_rejected_in_full() {
        let text = "0123456789";
        let err = BatchEditMerger::merge_edits(text, &[del(1, 5), del(4, 8)]).unwrap_err();
        assert!(matches!(err, FixError::OverlappingEdits { .. }));
    }

    #[test]
    fn test_insertion_inside_deletion_span_rejected() {
        let insert = TextEdit::replace(TextSpan::empty_at(3), "x");
        let err = BatchEditMerger::merge_edits("0123456789", &[del(1, 5), insert]).unwrap_err();
        assert!(matches!(err, FixError::OverlappingEdits { .. }));
    }

    #[test]
    fn test_touching_edits_are_not_overlapping() {
        let out = BatchEditMerger::merge_edits("0123456789", &[del(1, 4), del(4, 6)]).unwrap();
        assert_eq!(out, "06789");
    }

    #[test]
    fn test_out_of_bounds_edit_rejected() {
        let err = BatchEditMerger::merge_edits("abc", &[del(1, 9)]).unwrap_err();
        assert!(matches!(err, FixError::EditOutOfBounds { .. }));
    }

    #[test]
    fn test_length_postcondition() {
        let text = "aa bb cc";
        let edits = [del(0, 2), del(3, 5)];
        let out = BatchEditMerger::merge_edits(text, &edits).unwrap();
        assert_eq!(out.len(), text.len() - 4);
    }

    #[test]
    fn test_empty_batch_is_identity() {
        let out = BatchEditMerger::merge_edits("unchanged", &[]).unwrap();
        assert_eq!(out, "unchanged");
    }
}
