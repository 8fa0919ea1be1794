//! Immutable, trivia-preserving syntax data model.
//!
//! The engine only reads these types; they are produced by a tree provider
//! (the bundled `parser` module, or any host that builds them directly).

pub mod construct;
pub mod snapshot;
pub mod token;
pub mod trivia;

pub use construct::{ExplicitName, ExprKind, Expression, NameableConstruct};
pub use snapshot::DocumentSnapshot;
pub use token::Token;
pub use trivia::{TriviaKind, TriviaPiece};
