//! # RangeHaus
//!
//! PostgreSQL range type support for Rust applications: a bidirectional codec
//! between the range literal syntax and typed range values, plus catalog
//! resolution and per-connection registration for custom range types.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rangehaus::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let haus = RangeHaus::new();
//!     let conn = haus.connect("postgres://localhost/app").await?;
//!
//!     // Decode a range column fetched as text
//!     let oid = rangehaus::builtin::int4range().range_oid;
//!     let visits: Option<Int4Range> = conn.decode_range(oid, Some("[1,5)"))?;
//!     println!("decoded: {visits:?}");
//!
//!     // Encode a range value as the SQL fragment for its type
//!     let window = Int4Range::new(Some(1), Some(5), true, false);
//!     let fragment = haus.adapt(&window)?;
//!     assert_eq!(fragment, "int4range(1, 5, '[)')");
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod adapt;
pub mod builtin;
pub mod cast;
pub mod catalog;
pub mod connection;
pub mod core;
pub mod errors;
pub mod prelude;
pub mod registry;
pub mod value;

// Re-export the main public types for convenience
pub use crate::core::RangeHaus;
pub use connection::RangeConnection;
pub use errors::RangeHausError;
pub use value::{DateRange, Int4Range, Int8Range, NumRange, PgRange, TsRange};

// Re-export the literal codec crate
pub use range_literal;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
