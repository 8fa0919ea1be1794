/*!
# Inferred Name Analyzer

Static analyzer and fixer for redundant explicit names: tuple-literal
elements written as `a: a` and anonymous-object members written as `a = a`,
wherever the language would infer the same name from the expression on its
own.

## Pipeline

```text
text -> snapshot -> diagnostics -> edits -> merged text
```

Every stage is a pure function of an immutable input:

- `parser` builds one immutable [`syntax::DocumentSnapshot`] per document
  (or a host supplies its own snapshots);
- `analyzer` scans a snapshot and yields position-ordered diagnostics,
  applying the redundancy rule under the configured language-version gate;
- `fixes` plans one trivia-safe deletion per diagnostic and merges a batch
  into a single atomic rewrite — all edits apply or none do.

A text change invalidates everything downstream: fixing an already-fixed
document means parsing and scanning again, never patching stale spans.

## Usage

```rust
use inferred_name_analyzer::{check_source, fix_source, RulesConfig};

let config = RulesConfig::default();
let diagnostics = check_source("demo.cs", "var t = (a: a, 2);", &config);
assert_eq!(diagnostics.len(), 1);

let fixed = fix_source("demo.cs", "var t = (a: a, 2);", &config);
assert_eq!(fixed, "var t = ( a, 2);");
```
*/

pub mod analyzer;
pub mod core;
pub mod diagnostics;
pub mod fixes;
pub mod infer;
pub mod lang;
pub mod parser;
pub mod rules;
pub mod syntax;

pub use analyzer::DiagnosticScanner;
pub use core::{FixError, LineIndex, Position, TextSpan};
pub use diagnostics::Diagnostic;
pub use fixes::{fix_all, plan_fix, BatchEditMerger, EditPlanner, TextEdit};
pub use infer::{BinderNameOracle, NameOracle};
pub use lang::{Capabilities, LanguageVersion};
pub use parser::parse_document;
pub use rules::{NameInferenceRule, RuleMatch, RuleSeverity, RulesConfig};
pub use syntax::{DocumentSnapshot, NameableConstruct};

use anyhow::{Context, Result};
use std::path::Path;

/// Scan one document's text, returning its diagnostics in document order.
pub fn check_source(file: &str, text: &str, config: &RulesConfig) -> Vec<Diagnostic> {
    let snapshot = parse_document(file, text);
    DiagnosticScanner::new(config.clone()).scan(&snapshot)
}

/// Scan one document's text and apply every fix in a single batch. Returns
/// the original text unchanged when there is nothing to fix or the batch
/// cannot be applied atomically.
pub fn fix_source(file: &str, text: &str, config: &RulesConfig) -> String {
    let snapshot = parse_document(file, text);
    let diagnostics = DiagnosticScanner::new(config.clone()).scan(&snapshot);
    fix_all(snapshot.text(), &diagnostics)
}

/// Check a single file on disk.
pub fn check_file<P: AsRef<Path>>(path: P, config: &RulesConfig) -> Result<Vec<Diagnostic>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(check_source(&path.display().to_string(), &text, config))
}

/// Fix a single file on disk, returning the rewritten text without touching
/// the file itself.
pub fn fix_file<P: AsRef<Path>>(path: P, config: &RulesConfig) -> Result<String> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(fix_source(&path.display().to_string(), &text, config))
}
