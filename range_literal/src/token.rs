//! Range literal scanner
//!
//! This module turns a raw literal string into a flat token sequence.
//! Quoted bounds are unescaped here, so downstream code only ever sees
//! the bound text itself.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::errors::LiteralError;

/// A single lexical element of a range literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `[` — inclusive lower delimiter
    OpenBracket,
    /// `(` — exclusive lower delimiter
    OpenParen,
    /// `]` — inclusive upper delimiter
    CloseBracket,
    /// `)` — exclusive upper delimiter
    CloseParen,
    /// `,` — bound separator
    Comma,
    /// A bound value, already unescaped if it was quoted
    Value(String),
}

impl Token {
    /// Check if this token opens a range
    pub fn is_open(&self) -> bool {
        matches!(self, Token::OpenBracket | Token::OpenParen)
    }

    /// Check if this token closes a range
    pub fn is_close(&self) -> bool {
        matches!(self, Token::CloseBracket | Token::CloseParen)
    }
}

/// Scan a range literal into tokens, skipping insignificant whitespace.
///
/// Bracket/paren pairing is not checked here; the parser validates the
/// overall shape through its fixed positional expectations.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LiteralError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(_, c)) = chars.peek() {
        match c {
            '\'' | '"' => {
                chars.next();
                tokens.push(Token::Value(scan_quoted(&mut chars, c)?));
            }
            '[' => {
                chars.next();
                tokens.push(Token::OpenBracket);
            }
            '(' => {
                chars.next();
                tokens.push(Token::OpenParen);
            }
            ']' => {
                chars.next();
                tokens.push(Token::CloseBracket);
            }
            ')' => {
                chars.next();
                tokens.push(Token::CloseParen);
            }
            ',' => {
                chars.next();
                tokens.push(Token::Comma);
            }
            c if c.is_whitespace() => {
                chars.next();
            }
            _ => {
                tokens.push(Token::Value(scan_unquoted(&mut chars)));
            }
        }
    }

    Ok(tokens)
}

/// Consume a quoted bound after its opening quote, returning the unescaped
/// interior. Each `\X` pair collapses to the character it denotes; the other
/// quote character may appear unescaped inside.
fn scan_quoted(
    chars: &mut Peekable<CharIndices<'_>>,
    quote: char,
) -> Result<String, LiteralError> {
    let mut value = String::new();

    while let Some((pos, c)) = chars.next() {
        if c == quote {
            return Ok(value);
        }

        if c == '\\' {
            match chars.next() {
                Some((_, escaped)) => value.push(unescape(escaped)),
                None => return Err(LiteralError::UnexpectedCharacter(pos)),
            }
        } else {
            value.push(c);
        }
    }

    Err(LiteralError::UnterminatedQuote)
}

/// Consume a maximal unquoted run: everything up to punctuation or whitespace.
fn scan_unquoted(chars: &mut Peekable<CharIndices<'_>>) -> String {
    let mut value = String::new();

    while let Some(&(_, c)) = chars.peek() {
        if matches!(c, '[' | ']' | '(' | ')' | ',') || c.is_whitespace() {
            break;
        }
        value.push(c);
        chars.next();
    }

    value
}

fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        '0' => '\0',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_punctuation() {
        let tokens = tokenize("[,)").unwrap();

        assert_eq!(
            tokens,
            vec![Token::OpenBracket, Token::Comma, Token::CloseParen]
        );
    }

    #[test]
    fn test_tokenize_unquoted_bounds() {
        let tokens = tokenize("[1,5)").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::OpenBracket,
                Token::Value("1".to_string()),
                Token::Comma,
                Token::Value("5".to_string()),
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn test_tokenize_skips_whitespace() {
        let tokens = tokenize("[ 3.5 ,  4.7 )").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::OpenBracket,
                Token::Value("3.5".to_string()),
                Token::Comma,
                Token::Value("4.7".to_string()),
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn test_tokenize_double_quoted_bound() {
        let tokens = tokenize(r#"["hello, world",)"#).unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::OpenBracket,
                Token::Value("hello, world".to_string()),
                Token::Comma,
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn test_tokenize_single_quoted_bound() {
        let tokens = tokenize("['a b','c']").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::OpenBracket,
                Token::Value("a b".to_string()),
                Token::Comma,
                Token::Value("c".to_string()),
                Token::CloseBracket,
            ]
        );
    }

    #[test]
    fn test_tokenize_escape_pairs() {
        let tokens = tokenize(r#"["a\"b\\c",)"#).unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::OpenBracket,
                Token::Value(r#"a"b\c"#.to_string()),
                Token::Comma,
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn test_tokenize_other_quote_char_inside() {
        // An unescaped single quote inside a double-quoted bound is legal
        let tokens = tokenize(r#"["it's",)"#).unwrap();

        assert_eq!(tokens[1], Token::Value("it's".to_string()));
    }

    #[test]
    fn test_tokenize_unterminated_quote() {
        assert_eq!(tokenize(r#"["abc,)"#), Err(LiteralError::UnterminatedQuote));
    }

    #[test]
    fn test_tokenize_trailing_backslash() {
        assert_eq!(
            tokenize(r#"["abc\"#),
            Err(LiteralError::UnexpectedCharacter(5))
        );
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert_eq!(tokenize(""), Ok(vec![]));
    }
}
