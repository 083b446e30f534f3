//! Error types for the range-literal crate

use thiserror::Error;

/// Errors raised while scanning or parsing a range literal.
///
/// Every variant means the input did not match the literal grammar; none of
/// them is recoverable for that decode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("Unexpected character at byte {0} in range literal")]
    UnexpectedCharacter(usize),

    #[error("Unterminated quoted bound in range literal")]
    UnterminatedQuote,

    #[error("Malformed range literal: {0}")]
    UnexpectedShape(String),
}
