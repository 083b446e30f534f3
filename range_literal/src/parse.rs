//! Range literal parser
//!
//! This module reconstructs bound presence and inclusivity from the token
//! sequence and provides the reverse direction, writing a [`RawRange`] back
//! out as a literal.

use serde::{Deserialize, Serialize};

use crate::errors::LiteralError;
use crate::token::{tokenize, Token};

/// A decoded range literal with textual bounds.
///
/// An absent bound means the range is unbounded on that side. When `empty`
/// is set the other fields carry no meaning; [`RawRange::EMPTY`] is the one
/// canonical empty instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRange {
    pub lower: Option<String>,
    pub upper: Option<String>,
    pub lower_inc: bool,
    pub upper_inc: bool,
    pub empty: bool,
}

impl RawRange {
    /// The canonical empty range
    pub const EMPTY: RawRange = RawRange {
        lower: None,
        upper: None,
        lower_inc: false,
        upper_inc: false,
        empty: true,
    };

    /// Create a non-empty raw range from its bounds and inclusivity flags
    pub fn new(
        lower: Option<String>,
        upper: Option<String>,
        lower_inc: bool,
        upper_inc: bool,
    ) -> Self {
        Self {
            lower,
            upper,
            lower_inc,
            upper_inc,
            empty: false,
        }
    }

    /// Write this raw range back out as a literal.
    ///
    /// Bounds are double-quoted whenever the bare text would not survive a
    /// round trip through the scanner. `parse_range_literal` of the result
    /// always reproduces `self`.
    pub fn to_literal(&self) -> String {
        if self.empty {
            return "empty".to_string();
        }

        let mut literal = String::new();
        literal.push(if self.lower_inc { '[' } else { '(' });
        if let Some(lower) = &self.lower {
            write_bound(&mut literal, lower);
        }
        literal.push(',');
        if let Some(upper) = &self.upper {
            write_bound(&mut literal, upper);
        }
        literal.push(if self.upper_inc { ']' } else { ')' });
        literal
    }
}

/// Append a bound to a literal under construction, quoting when needed
fn write_bound(literal: &mut String, bound: &str) {
    let needs_quoting = bound.is_empty()
        || bound.chars().any(|c| {
            matches!(c, '[' | ']' | '(' | ')' | ',' | '"' | '\'' | '\\') || c.is_whitespace()
        });

    if !needs_quoting {
        literal.push_str(bound);
        return;
    }

    literal.push('"');
    for c in bound.chars() {
        if c == '"' || c == '\\' {
            literal.push('\\');
        }
        literal.push(c);
    }
    literal.push('"');
}

/// Parse a range literal into a [`RawRange`].
///
/// The exact literal `empty` (case sensitive) short-circuits to
/// [`RawRange::EMPTY`] without scanning. Everything else must have the shape
/// `open-delim, lower?, comma, upper?, close-delim`.
pub fn parse_range_literal(input: &str) -> Result<RawRange, LiteralError> {
    if input == "empty" {
        return Ok(RawRange::EMPTY);
    }

    let tokens = tokenize(input)?;

    if tokens.len() < 3 {
        return Err(shape_error(input));
    }

    let first = &tokens[0];
    let last = &tokens[tokens.len() - 1];
    if !first.is_open() || !last.is_close() {
        return Err(shape_error(input));
    }

    let inner = &tokens[1..tokens.len() - 1];
    let (lower, upper) = match inner {
        [Token::Comma] => (None, None),
        [Token::Value(lower), Token::Comma] => (Some(lower.clone()), None),
        [Token::Comma, Token::Value(upper)] => (None, Some(upper.clone())),
        [Token::Value(lower), Token::Comma, Token::Value(upper)] => {
            (Some(lower.clone()), Some(upper.clone()))
        }
        _ => return Err(shape_error(input)),
    };

    Ok(RawRange::new(
        lower,
        upper,
        *first == Token::OpenBracket,
        *last == Token::CloseBracket,
    ))
}

fn shape_error(input: &str) -> LiteralError {
    LiteralError::UnexpectedShape(format!("'{input}' is not a valid range literal"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_literal() {
        let range = parse_range_literal("empty").unwrap();

        assert!(range.empty);
        assert_eq!(range.lower, None);
        assert_eq!(range.upper, None);
        assert!(!range.lower_inc);
        assert!(!range.upper_inc);
    }

    #[test]
    fn test_parse_capitalized_empty_is_malformed() {
        // "Empty" is not the empty literal; it scans as a single bare value
        // with no delimiters, which fails shape validation
        assert!(matches!(
            parse_range_literal("Empty"),
            Err(LiteralError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn test_parse_unbounded_inclusive_exclusive() {
        let range = parse_range_literal("[,)").unwrap();

        assert_eq!(range.lower, None);
        assert_eq!(range.upper, None);
        assert!(range.lower_inc);
        assert!(!range.upper_inc);
        assert!(!range.empty);
    }

    #[test]
    fn test_parse_unbounded_exclusive_inclusive() {
        let range = parse_range_literal("(,]").unwrap();

        assert_eq!(range.lower, None);
        assert_eq!(range.upper, None);
        assert!(!range.lower_inc);
        assert!(range.upper_inc);
    }

    #[test]
    fn test_parse_lower_bound_only() {
        let range = parse_range_literal("[1, )").unwrap();

        assert_eq!(range.lower.as_deref(), Some("1"));
        assert_eq!(range.upper, None);
        assert!(range.lower_inc);
        assert!(!range.upper_inc);
    }

    #[test]
    fn test_parse_both_bounds() {
        let range = parse_range_literal("[3.5, 4.7)").unwrap();

        assert_eq!(range.lower.as_deref(), Some("3.5"));
        assert_eq!(range.upper.as_deref(), Some("4.7"));
        assert!(range.lower_inc);
        assert!(!range.upper_inc);
    }

    #[test]
    fn test_parse_quoted_escaped_bounds() {
        let range = parse_range_literal(r"['\\, \' \\', 'test']").unwrap();

        assert_eq!(range.lower.as_deref(), Some(r"\, ' \"));
        assert_eq!(range.upper.as_deref(), Some("test"));
        assert!(range.lower_inc);
        assert!(range.upper_inc);
    }

    #[test]
    fn test_parse_missing_comma_is_malformed() {
        assert!(matches!(
            parse_range_literal("[1 2)"),
            Err(LiteralError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn test_parse_extra_tokens_is_malformed() {
        assert!(matches!(
            parse_range_literal("[1,2,3)"),
            Err(LiteralError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn test_parse_bare_value_is_malformed() {
        assert!(matches!(
            parse_range_literal("1"),
            Err(LiteralError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn test_literal_round_trip() {
        let cases = [
            RawRange::new(Some("1".to_string()), Some("5".to_string()), true, false),
            RawRange::new(None, Some("5".to_string()), false, true),
            RawRange::new(Some("a b".to_string()), None, true, false),
            RawRange::new(
                Some(r#"we["ird],"#.to_string()),
                Some("".to_string()),
                false,
                false,
            ),
            RawRange::new(None, None, false, false),
        ];

        for range in cases {
            let literal = range.to_literal();
            assert_eq!(parse_range_literal(&literal).unwrap(), range, "{literal}");
        }
    }

    #[test]
    fn test_empty_round_trip() {
        assert_eq!(RawRange::EMPTY.to_literal(), "empty");
        assert_eq!(parse_range_literal("empty").unwrap(), RawRange::EMPTY);
    }
}
