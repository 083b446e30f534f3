//! Error types for the RangeHaus crate
//!
//! This module contains all error types that can be returned by RangeHaus
//! operations. Failures are always surfaced to the immediate caller; nothing
//! is logged or swallowed internally.

use thiserror::Error;

use crate::catalog::Oid;

#[derive(Error, Debug)]
pub enum RangeHausError {
    #[error("Malformed range literal: {0}")]
    MalformedLiteral(#[from] range_literal::LiteralError),

    #[error("PostgreSQL range type not found: {0}")]
    TypeNotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Cannot cast range bound '{value}' as {target}: {message}")]
    BoundCast {
        value: String,
        target: &'static str,
        message: String,
    },

    #[error("Cannot adapt value as a range: {0}")]
    Adaptation(String),

    #[error("No range decoder bound for oid {0}")]
    UnboundOid(Oid),

    #[error("Range decoder bound for oid {0} does not produce the requested type")]
    DecodeType(Oid),

    #[error("Range types require PostgreSQL 9.2 or later, server reports {0}")]
    UnsupportedServerVersion(i32),
}
