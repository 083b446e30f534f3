//! Textual codec for PostgreSQL range literals
//!
//! This crate handles the literal syntax PostgreSQL uses for range values on
//! the wire (`[1,5)`, `(,"2024-01-01"]`, `empty`, ...) without knowing anything
//! about the subtype the range is defined over. Bounds stay text; turning them
//! into typed values is the job of the consuming crate.

pub mod errors;
pub mod parse;
pub mod token;

// Re-export the commonly used items
pub use errors::LiteralError;
pub use parse::{parse_range_literal, RawRange};
pub use token::{tokenize, Token};
