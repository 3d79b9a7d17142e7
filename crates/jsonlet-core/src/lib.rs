//! # jsonlet-core
//!
//! A minimal recursive-descent JSON parser and renderer.
//!
//! jsonlet parses a lenient dialect of JSON into a [`Value`] tree and can
//! render the tree back to text. Separators inside containers are optional
//! (`[1 2]` and `{"a":1,}` both parse), escape decoding is a small
//! single-character table with no `\uXXXX` support, and rendering writes
//! string contents verbatim — it is a display format, not a strict JSON
//! emitter.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonlet_core::{parse, render};
//!
//! let value = parse(r#"{"name": "Alice", "age": 30}"#).unwrap();
//! assert_eq!(value.get("age").and_then(|v| v.as_i64()), Some(30));
//! assert_eq!(render(&value), r#"{"age": 30, "name": "Alice"}"#);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` tagged union and its inspection helpers
//! - [`parser`] — text → `Value` (`parse`, `parse_prefix`)
//! - [`render`] — `Value` → text
//! - [`error`] — `ParseError` / `ParseErrorKind`

pub mod error;
pub mod parser;
pub mod render;
pub mod value;

pub use error::{ParseError, ParseErrorKind};
pub use parser::{parse, parse_prefix};
pub use render::render;
pub use value::Value;
