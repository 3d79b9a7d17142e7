//! Recursive-descent JSON parser.
//!
//! The parser is a set of mutually recursive scanning functions, one per
//! grammar production (number, keyword, string, array, object), plus a
//! dispatching entry point. Each sub-parser takes the full source and an
//! absolute byte offset and returns `(Value, bytes_consumed)`, so failure
//! offsets always refer to the original input.
//!
//! # Key design decisions
//!
//! - **Explicit errors**: every failure is a [`ParseError`] with a kind and
//!   a byte offset. Nested failures (a bad array element, a bad object key)
//!   propagate unchanged — there is no recovery and no partial container.
//! - **Lenient separators**: arrays and objects skip at most one `,` after
//!   each element and never require one; `:` after an object key is likewise
//!   optional. An unclosed container at end of input closes implicitly.
//!   `[1 2]` and `{"a":1,}` both parse.
//! - **Manual number scan**: the literal grammar
//!   `[+-]?digits(.digits*)?([eE][+-]?digits)?` is scanned by character
//!   class. The exponent is only consumed when at least one digit follows,
//!   so `1e` scans as `1` with the `e` left for the next token.
//! - **No `\uXXXX` decoding**: escape decoding is a single-character table;
//!   an escaped `u` comes through literally.

use std::collections::BTreeMap;

use crate::error::{ParseError, ParseErrorKind, Result};
use crate::value::Value;

/// Parse a complete document, returning its value.
///
/// Leading whitespace is skipped and trailing content after the first
/// complete value is ignored. Use [`parse_prefix`] to learn how much of the
/// input was consumed.
///
/// ```rust
/// use jsonlet_core::parse;
///
/// let value = parse(r#"{"name": "Alice", "scores": [95, 87]}"#).unwrap();
/// assert_eq!(value.get("name").and_then(|v| v.as_str()), Some("Alice"));
/// ```
pub fn parse(input: &str) -> Result<Value> {
    let (value, _) = parse_prefix(input)?;
    Ok(value)
}

/// Parse one value from the start of `input`, returning the value and the
/// number of bytes consumed (skipped leading whitespace included).
pub fn parse_prefix(input: &str) -> Result<(Value, usize)> {
    parse_value(input, 0)
}

/// Dispatching entry point: skip whitespace, then select a sub-parser by
/// the first significant byte.
fn parse_value(src: &str, at: usize) -> Result<(Value, usize)> {
    let bytes = src.as_bytes();
    let mut i = at;
    while i < bytes.len() && is_whitespace(bytes[i]) {
        i += 1;
    }
    if i >= bytes.len() {
        return Err(ParseError::new(ParseErrorKind::EmptyInput, at));
    }

    let (value, eaten) = match bytes[i] {
        b'0'..=b'9' | b'+' | b'-' => parse_number(src, i)?,
        b'"' => parse_string(src, i)?,
        b'[' => parse_array(src, i)?,
        b'{' => parse_object(src, i)?,
        b'n' | b't' | b'f' => parse_keyword(src, i)?,
        _ => return Err(ParseError::new(ParseErrorKind::UnrecognizedToken, i)),
    };
    Ok((value, i - at + eaten))
}

/// Whitespace bytes skipped by the dispatcher: space, LF, CR, tab,
/// vertical tab, form feed, NUL.
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\n' | b'\r' | b'\t' | 0x0B | 0x0C | 0x00)
}

/// Scan the longest numeric literal at `at`, returning its byte length.
/// Returns 0 when no digits are present (a bare sign does not match).
fn scan_number(bytes: &[u8], at: usize) -> usize {
    let mut i = at;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == int_start {
        return 0;
    }
    // Fraction: a dot with zero or more digits.
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    // Exponent: only consumed when at least one digit follows the
    // optional sign, otherwise the `e` belongs to whatever comes next.
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i - at
}

/// Parse a numeric literal: exact `i64` first, finite `f64` second.
/// Overflow of both representations is rejected, never clamped.
fn parse_number(src: &str, at: usize) -> Result<(Value, usize)> {
    let len = scan_number(src.as_bytes(), at);
    if len == 0 {
        return Err(ParseError::new(ParseErrorKind::MalformedNumber, at));
    }
    let literal = &src[at..at + len];
    if let Ok(n) = literal.parse::<i64>() {
        return Ok((Value::Int(n), len));
    }
    match literal.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok((Value::Float(f), len)),
        _ => Err(ParseError::new(ParseErrorKind::MalformedNumber, at)),
    }
}

/// Parse one of the literal keywords `null`, `true`, `false`.
fn parse_keyword(src: &str, at: usize) -> Result<(Value, usize)> {
    let rest = &src[at..];
    for (literal, value) in [
        ("null", Value::Null),
        ("true", Value::Bool(true)),
        ("false", Value::Bool(false)),
    ] {
        if rest.starts_with(literal) {
            return Ok((value, literal.len()));
        }
    }
    Err(ParseError::new(ParseErrorKind::UnrecognizedToken, at))
}

/// Parse a string literal starting at the opening quote.
///
/// Escape decoding is a one-character table (see [`unescape_char`]); any
/// escaped character outside the table passes through literally, so `\"`
/// yields `"` and `\u` yields `u`. A missing closing quote is an error.
fn parse_string(src: &str, at: usize) -> Result<(Value, usize)> {
    let body = &src[at + 1..];
    let mut text = String::new();
    let mut escaped = false;
    for (pos, ch) in body.char_indices() {
        if escaped {
            text.push(unescape_char(ch));
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == '"' {
            // Opening quote, body up to `pos`, closing quote.
            return Ok((Value::String(text), pos + 2));
        } else {
            text.push(ch);
        }
    }
    Err(ParseError::new(ParseErrorKind::UnterminatedString, at))
}

/// Decode one escaped character. Unrecognized escapes map to themselves.
fn unescape_char(c: char) -> char {
    match c {
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\u{0B}',
        'f' => '\u{0C}',
        'b' => '\u{08}',
        'a' => '\u{07}',
        '0' => '\0',
        other => other,
    }
}

/// Parse an array starting at the opening bracket.
fn parse_array(src: &str, at: usize) -> Result<(Value, usize)> {
    let bytes = src.as_bytes();
    let mut items = Vec::new();
    let mut i = at + 1;
    while i < bytes.len() {
        if bytes[i] == b']' {
            i += 1;
            break;
        }
        let (item, eaten) = parse_value(src, i)?;
        items.push(item);
        i += eaten;
        if i < bytes.len() && bytes[i] == b',' {
            i += 1;
        }
    }
    Ok((Value::Array(items), i - at))
}

/// Parse an object starting at the opening brace. Keys must parse to
/// strings; a repeated key overwrites the earlier entry.
fn parse_object(src: &str, at: usize) -> Result<(Value, usize)> {
    let bytes = src.as_bytes();
    let mut map = BTreeMap::new();
    let mut i = at + 1;
    while i < bytes.len() {
        if bytes[i] == b'}' {
            i += 1;
            break;
        }
        let key_at = i;
        let (key, key_eaten) = parse_value(src, i)?;
        let key = match key {
            Value::String(key) => key,
            _ => return Err(ParseError::new(ParseErrorKind::NonStringKey, key_at)),
        };
        i += key_eaten;
        if i < bytes.len() && bytes[i] == b':' {
            i += 1;
        }
        let (value, value_eaten) = parse_value(src, i)?;
        i += value_eaten;
        map.insert(key, value);
        if i < bytes.len() && bytes[i] == b',' {
            i += 1;
        }
    }
    Ok((Value::Object(map), i - at))
}
