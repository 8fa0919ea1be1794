//! Reference tree provider: tokenizer plus construct extractor.
//!
//! Any host with a real syntax tree can build
//! [`crate::syntax::DocumentSnapshot`] values directly and skip this module
//! entirely; the engine only depends on the `syntax` data model.

pub mod extractor;
pub mod lexer;

pub use extractor::parse_document;
pub use lexer::{tokenize, RawToken, RawTokenKind};
