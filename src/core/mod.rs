//! Core types shared by every analysis stage: spans, positions, fix errors.

pub mod errors;
pub mod position;

pub use errors::FixError;
pub use position::{LineIndex, Position, TextSpan};
