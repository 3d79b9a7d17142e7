//! Renders a [`Value`] tree back to JSON-like text.
//!
//! This is a display format, the parser's structural inverse: one recursive
//! traversal into a single buffer, `", "` separators, no trailing
//! separators, and object entries in the map's sorted key order, so output
//! is deterministic. String contents are written verbatim between quotes —
//! no escaping is applied on output, so a string containing a quote or a
//! control character will not re-parse to the same value.

use std::fmt;

use crate::value::Value;

/// Render a value tree into one output string.
///
/// ```rust
/// use jsonlet_core::{parse, render};
///
/// let value = parse(r#"[1, "two", null]"#).unwrap();
/// assert_eq!(render(&value), r#"[1, "two", null]"#);
/// ```
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    render_value(value, &mut out);
    out
}

/// Recursive traversal: primitives append their text, containers recurse.
fn render_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Float(f) => out.push_str(&f.to_string()),
        Value::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Value::Array(items) => render_array(items, out),
        Value::Object(map) => render_object(map, out),
    }
}

fn render_array(items: &[Value], out: &mut String) {
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        render_value(item, out);
    }
    out.push(']');
}

fn render_object(map: &std::collections::BTreeMap<String, Value>, out: &mut String) {
    out.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('"');
        out.push_str(key);
        out.push_str("\": ");
        render_value(value, out);
    }
    out.push('}');
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
