//! Bound casting
//!
//! This module turns the textual bounds of a parsed literal into typed
//! values and assembles the final range, completing the decode pipeline.

use chrono::{NaiveDate, NaiveDateTime};
use range_literal::parse_range_literal;

use crate::errors::RangeHausError;
use crate::value::RangeFromBounds;

/// Subtype casting hook: parse one bound's text into a typed value.
///
/// Implementations stand in for the server-side subtype cast; `String`
/// passes the text through unchanged.
pub trait BoundCast: Sized {
    fn cast_bound(text: &str) -> Result<Self, RangeHausError>;
}

macro_rules! cast_via_from_str {
    ($ty:ty, $target:literal) => {
        impl BoundCast for $ty {
            fn cast_bound(text: &str) -> Result<Self, RangeHausError> {
                text.parse().map_err(|e| RangeHausError::BoundCast {
                    value: text.to_string(),
                    target: $target,
                    message: format!("{e}"),
                })
            }
        }
    };
}

cast_via_from_str!(i32, "int4");
cast_via_from_str!(i64, "int8");
cast_via_from_str!(f64, "numeric");

impl BoundCast for String {
    fn cast_bound(text: &str) -> Result<Self, RangeHausError> {
        Ok(text.to_string())
    }
}

impl BoundCast for NaiveDate {
    fn cast_bound(text: &str) -> Result<Self, RangeHausError> {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|e| RangeHausError::BoundCast {
            value: text.to_string(),
            target: "date",
            message: format!("{e}"),
        })
    }
}

impl BoundCast for NaiveDateTime {
    fn cast_bound(text: &str) -> Result<Self, RangeHausError> {
        NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f").map_err(|e| {
            RangeHausError::BoundCast {
                value: text.to_string(),
                target: "timestamp",
                message: format!("{e}"),
            }
        })
    }
}

/// Decode a range column value into `R`.
///
/// A SQL NULL (`None`) short-circuits to `Ok(None)` without touching the
/// scanner; this is distinct from the empty range, which decodes to
/// `R::empty()`. Absent bounds stay absent and become unbounded sides.
pub fn cast_range<R>(text: Option<&str>) -> Result<Option<R>, RangeHausError>
where
    R: RangeFromBounds,
    R::Bound: BoundCast,
{
    let Some(text) = text else {
        return Ok(None);
    };

    let raw = parse_range_literal(text)?;

    if raw.empty {
        return Ok(Some(R::empty()));
    }

    let lower = raw
        .lower
        .as_deref()
        .map(R::Bound::cast_bound)
        .transpose()?;
    let upper = raw
        .upper
        .as_deref()
        .map(R::Bound::cast_bound)
        .transpose()?;

    Ok(Some(R::from_bounds(
        lower,
        upper,
        raw.lower_inc,
        raw.upper_inc,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{DateRange, Int4Range, NumRange, PgRange, RangeValue, TsRange};

    #[test]
    fn test_cast_null_column() {
        let range: Option<Int4Range> = cast_range(None).unwrap();

        assert_eq!(range, None);
    }

    #[test]
    fn test_cast_empty_range() {
        let range: Int4Range = cast_range(Some("empty")).unwrap().unwrap();

        assert!(range.is_empty());
    }

    #[test]
    fn test_cast_int_range() {
        let range: Int4Range = cast_range(Some("[1,5)")).unwrap().unwrap();

        assert_eq!(range, Int4Range::new(Some(1), Some(5), true, false));
    }

    #[test]
    fn test_cast_num_range() {
        let range: NumRange = cast_range(Some("[3.5, 4.7)")).unwrap().unwrap();

        assert_eq!(range, NumRange::new(Some(3.5), Some(4.7), true, false));
    }

    #[test]
    fn test_cast_unbounded_sides() {
        let range: Int4Range = cast_range(Some("(,5]")).unwrap().unwrap();

        assert!(range.lower_inf());
        assert_eq!(range.upper(), Some(&5));
        assert!(range.upper_inc());
    }

    #[test]
    fn test_cast_date_range() {
        let range: DateRange = cast_range(Some("[2013-01-01,2013-02-01)"))
            .unwrap()
            .unwrap();

        let expected_lower = chrono::NaiveDate::from_ymd_opt(2013, 1, 1).unwrap();
        assert_eq!(range.lower(), Some(&expected_lower));
    }

    #[test]
    fn test_cast_timestamp_range() {
        let range: TsRange = cast_range(Some(r#"["2013-01-01 12:30:00","2013-01-01 13:00:00")"#))
            .unwrap()
            .unwrap();

        let expected = chrono::NaiveDate::from_ymd_opt(2013, 1, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        assert_eq!(range.lower(), Some(&expected));
    }

    #[test]
    fn test_cast_text_passthrough() {
        let range: PgRange<String> = cast_range(Some("[a,b]")).unwrap().unwrap();

        assert_eq!(range.lower().map(String::as_str), Some("a"));
        assert_eq!(range.upper().map(String::as_str), Some("b"));
    }

    #[test]
    fn test_cast_bad_bound_reports_value() {
        let err = cast_range::<Int4Range>(Some("[one,5)")).unwrap_err();

        match err {
            RangeHausError::BoundCast { value, target, .. } => {
                assert_eq!(value, "one");
                assert_eq!(target, "int4");
            }
            other => panic!("expected BoundCast error, got {other:?}"),
        }
    }

    #[test]
    fn test_cast_malformed_literal() {
        assert!(matches!(
            cast_range::<Int4Range>(Some("not a range")),
            Err(RangeHausError::MalformedLiteral(_))
        ));
    }
}
