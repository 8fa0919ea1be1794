/*!
# Fix pipeline

Two-phase shape, preserved exactly: every edit is planned against the one
immutable snapshot that produced the diagnostics, then the whole batch is
merged in a single atomic rewrite. Scanning and planning never interleave
with mutation.
*/

pub mod merger;
pub mod planner;

pub use merger::{apply_single, BatchEditMerger};
pub use planner::{EditPlanner, TextEdit};

use tracing::warn;

use crate::diagnostics::Diagnostic;

/// Single-fix host callback: one diagnostic, one edit. A planner error is
/// logged and surfaces as `None`; no match and no fix are normal negatives.
pub fn plan_fix(diagnostic: &Diagnostic) -> Option<TextEdit> {
    if !diagnostic.fixable {
        return None;
    }
    match EditPlanner::plan_edit(diagnostic) {
        Ok(edit) => Some(edit),
        Err(err) => {
            warn!(rule_id = %diagnostic.rule_id, %err, "skipping unfixable diagnostic");
            None
        }
    }
}

/// Fix-all host callback: plan every fixable diagnostic against the one
/// snapshot text, merge, and return the rewritten document. Diagnostics with
/// malformed trivia are skipped individually; a merge failure aborts the
/// whole batch and the original text is returned unchanged.
pub fn fix_all(text: &str, diagnostics: &[Diagnostic]) -> String {
    let edits: Vec<TextEdit> = diagnostics.iter().filter_map(plan_fix).collect();
    if edits.is_empty() {
        return text.to_string();
    }
    match BatchEditMerger::merge_edits(text, &edits) {
        Ok(fixed) => fixed,
        Err(err) => {
            warn!(%err, "fix-all aborted; document left unchanged");
            text.to_string()
        }
    }
}
