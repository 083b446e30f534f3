//! Convenience re-exports for common RangeHaus usage
//!
//! This prelude module re-exports the most commonly used items, making it
//! easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use rangehaus::prelude::*;
//!
//! let window = Int4Range::new(Some(1), Some(5), true, false);
//! assert!(!window.is_empty());
//! ```

// Core RangeHaus components
pub use crate::connection::RangeConnection;
pub use crate::core::RangeHaus;
pub use crate::errors::RangeHausError;

// The value model and its traits
pub use crate::value::{
    DateRange, Int4Range, Int8Range, NumRange, PgRange, RangeFromBounds, RangeValue, TsRange,
};

// Codec seams for custom subtypes
pub use crate::adapt::{format_range_literal, ToSqlLiteral};
pub use crate::cast::{cast_range, BoundCast};
pub use crate::catalog::{resolve_range_oids, CatalogAccess, Oid, RangeTypeDescriptor};

// The literal codec
pub use range_literal::{parse_range_literal, RawRange};

// Common external dependencies
pub use async_trait::async_trait;
pub use sqlx;
pub use tokio;

// Commonly used sqlx types
pub use sqlx::{Connection, PgConnection};
