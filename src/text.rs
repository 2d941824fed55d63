//! JSON text encoding of document values.
//!
//! Rendering and parsing go through `serde_json` using the serde impls on
//! [`Value`]. Parsing is strict: exactly one value, surrounded by optional
//! whitespace, no comments and no trailing characters.
//!
//! ```rust
//! use docbind::{text, TextOptions, Value};
//!
//! let value = text::parse(" {\"a\": [1, 2]} ").unwrap();
//! assert_eq!(text::render(&value, &TextOptions::new()).unwrap(), r#"{"a":[1,2]}"#);
//!
//! assert!(text::parse("{\"a\": 1} x").is_err());
//! assert!(text::parse("// comment\n{}").is_err());
//! ```

use crate::{Error, Result, TextOptions, Value};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Renders a document value as JSON text.
///
/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn render(value: &Value, options: &TextOptions) -> Result<String> {
    let mut out = Vec::with_capacity(256);
    match options.indent {
        None => serde_json::to_writer(&mut out, value).map_err(Error::custom)?,
        Some(width) => {
            let indent = vec![b' '; width];
            let formatter = PrettyFormatter::with_indent(&indent);
            let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
            value.serialize(&mut serializer).map_err(Error::custom)?;
        }
    }
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Parses JSON text into a document value.
///
/// # Errors
///
/// Returns [`Error::Parse`] carrying the parser's message if the text is not
/// exactly one well-formed JSON value.
pub fn parse(input: &str) -> Result<Value> {
    serde_json::from_str(input).map_err(Error::parse)
}

/// Parses JSON text from raw bytes, replacing invalid UTF-8 with U+FFFD.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the decoded text is not well-formed.
///
/// # Examples
///
/// ```rust
/// use docbind::text;
///
/// let value = text::parse_bytes(b"{\"name\": \"caf\xe9\"}").unwrap();
/// assert_eq!(value.get("name").and_then(|v| v.as_str()), Some("caf\u{FFFD}"));
/// ```
pub fn parse_bytes(input: &[u8]) -> Result<Value> {
    parse(&String::from_utf8_lossy(input))
}
