//! Range value model
//!
//! The codec never manipulates range values directly; it only reads them
//! through [`RangeValue`] and builds them through [`RangeFromBounds`]. Any
//! range library whose type implements both traits plugs straight into the
//! decode and encode pipelines. [`PgRange`] is the built-in implementation
//! used for the standard PostgreSQL range types.

use serde::{Deserialize, Serialize};

/// Read-only capability contract for range-like values.
///
/// An absent bound on a non-empty range means the range is unbounded
/// (infinite) on that side.
pub trait RangeValue {
    type Bound;

    fn lower(&self) -> Option<&Self::Bound>;
    fn upper(&self) -> Option<&Self::Bound>;
    fn lower_inc(&self) -> bool;
    fn upper_inc(&self) -> bool;
    fn is_empty(&self) -> bool;

    /// Whether the range is unbounded below
    fn lower_inf(&self) -> bool {
        !self.is_empty() && self.lower().is_none()
    }

    /// Whether the range is unbounded above
    fn upper_inf(&self) -> bool {
        !self.is_empty() && self.upper().is_none()
    }
}

/// Construction side of the range contract, used by the decode pipeline
pub trait RangeFromBounds: RangeValue + Sized {
    /// Build a non-empty range from its bounds and inclusivity flags
    fn from_bounds(
        lower: Option<Self::Bound>,
        upper: Option<Self::Bound>,
        lower_inc: bool,
        upper_inc: bool,
    ) -> Self;

    /// Build the empty range
    fn empty() -> Self;
}

/// A PostgreSQL range value over subtype `T`.
///
/// This carries exactly what the wire representation carries: bounds,
/// inclusivity flags and the empty marker. Set algebra and bound
/// normalization are deliberately out of scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PgRange<T> {
    lower: Option<T>,
    upper: Option<T>,
    lower_inc: bool,
    upper_inc: bool,
    empty: bool,
}

/// Integer range (`int4range`)
pub type Int4Range = PgRange<i32>;
/// Big integer range (`int8range`)
pub type Int8Range = PgRange<i64>;
/// Numeric range (`numrange`), bounds read as f64
pub type NumRange = PgRange<f64>;
/// Date range (`daterange`)
pub type DateRange = PgRange<chrono::NaiveDate>;
/// Timestamp range (`tsrange`)
pub type TsRange = PgRange<chrono::NaiveDateTime>;

impl<T> PgRange<T> {
    /// Create a non-empty range; `None` bounds are unbounded
    pub fn new(lower: Option<T>, upper: Option<T>, lower_inc: bool, upper_inc: bool) -> Self {
        Self {
            lower,
            upper,
            lower_inc,
            upper_inc,
            empty: false,
        }
    }

    /// Create the empty range
    pub fn empty() -> Self {
        Self {
            lower: None,
            upper: None,
            lower_inc: false,
            upper_inc: false,
            empty: true,
        }
    }
}

impl<T> RangeValue for PgRange<T> {
    type Bound = T;

    fn lower(&self) -> Option<&T> {
        self.lower.as_ref()
    }

    fn upper(&self) -> Option<&T> {
        self.upper.as_ref()
    }

    fn lower_inc(&self) -> bool {
        self.lower_inc
    }

    fn upper_inc(&self) -> bool {
        self.upper_inc
    }

    fn is_empty(&self) -> bool {
        self.empty
    }
}

impl<T> RangeFromBounds for PgRange<T> {
    fn from_bounds(
        lower: Option<T>,
        upper: Option<T>,
        lower_inc: bool,
        upper_inc: bool,
    ) -> Self {
        Self::new(lower, upper, lower_inc, upper_inc)
    }

    fn empty() -> Self {
        Self::empty()
    }
}
