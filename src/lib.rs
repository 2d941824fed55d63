//! # docbind
//!
//! Declare a struct's document fields once; get JSON text, compact binary
//! (CBOR) and a hot-swappable config holder from that single declaration.
//!
//! ## Key Features
//!
//! - **Declare once**: [`bind!`] uses field names as keys, [`bind_map!`] takes
//!   explicit (often shorter) keys
//! - **Nested structs**: bound fields recurse structurally and are updated in place
//! - **Partial documents**: absent or `null` keys leave fields at their current value
//! - **Integer-keyed maps**: keys travel as decimal strings
//! - **Two encodings**: JSON text (compact or indented) and CBOR, both through [`Value`]
//! - **Hot reload**: [`ConfigHolder`] publishes new snapshots atomically while
//!   readers keep the ones they hold
//!
//! ## Quick Start
//!
//! ```rust
//! use docbind::{bind, bind_map, Bound};
//! use std::collections::BTreeMap;
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct Pen {
//!     name: String,
//!     count: u32,
//! }
//! bind!(Pen { name, count });
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct HomeWork {
//!     name: String,
//!     finish: Vec<i32>,
//! }
//! bind_map!(HomeWork { "n" => name, "f" => finish });
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct Student {
//!     name: String,
//!     age: u8,
//!     pens: Vec<Pen>,
//!     homeworks: BTreeMap<u32, HomeWork>,
//! }
//! bind!(Student { name, age, homeworks, pens });
//!
//! let mut student = Student { name: "Li".into(), age: 12, ..Default::default() };
//! student.pens.push(Pen { name: "blue".into(), count: 3 });
//! student.homeworks.insert(7, HomeWork { name: "math".into(), finish: vec![1, 2] });
//!
//! let text = student.to_text(None).unwrap();
//! assert_eq!(
//!     text,
//!     r#"{"name":"Li","age":12,"homeworks":{"7":{"n":"math","f":[1,2]}},"pens":[{"name":"blue","count":3}]}"#
//! );
//!
//! let back: Student = docbind::from_str(&text).unwrap();
//! assert_eq!(back, student);
//!
//! let bytes = student.to_binary().unwrap();
//! let back: Student = docbind::from_binary(&bytes).unwrap();
//! assert_eq!(back, student);
//! ```
//!
//! ## Error Handling
//!
//! Every fallible call returns [`Result`]; the error's message names the
//! first failure and, for conversion errors, the key path to it. A value that
//! failed to load may be partially updated and should be discarded.

pub mod bind;
pub mod binary;
pub mod error;
pub mod field;
pub mod holder;
pub mod key;
pub mod macros;
pub mod map;
pub mod options;
pub mod text;
pub mod value;

pub use bind::Bound;
pub use error::{Error, Result};
pub use field::Field;
pub use holder::{Config, ConfigHolder, Snapshot};
pub use key::MapKey;
pub use map::Map;
pub use options::TextOptions;
pub use value::{Number, Value};

/// Convert any `T: Field` to a document [`Value`].
///
/// # Examples
///
/// ```rust
/// use docbind::{bind, to_value, Value};
///
/// #[derive(Default)]
/// struct Point { x: i32, y: i32 }
/// bind!(Point { x, y });
///
/// let value = to_value(&Point { x: 1, y: 2 });
/// assert_eq!(value.get("x"), Some(&Value::from(1)));
/// ```
#[must_use]
pub fn to_value<T>(value: &T) -> Value
where
    T: ?Sized + Field,
{
    value.to_value()
}

/// Build a fresh `T` from a document [`Value`].
///
/// # Errors
///
/// Returns the first shape or type error encountered.
pub fn from_value<T>(value: &Value) -> Result<T>
where
    T: Field + Default,
{
    field::decode(value)
}

/// Serialize any `T: Field` to compact JSON text.
///
/// # Errors
///
/// Returns an error if rendering fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Field,
{
    to_string_with_options(value, &TextOptions::new())
}

/// Serialize any `T: Field` to JSON text indented by `indent` spaces per level.
///
/// # Errors
///
/// Returns an error if rendering fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T, indent: usize) -> Result<String>
where
    T: ?Sized + Field,
{
    to_string_with_options(value, &TextOptions::new().with_indent(indent))
}

/// Serialize any `T: Field` to JSON text with custom options.
///
/// # Errors
///
/// Returns an error if rendering fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &TextOptions) -> Result<String>
where
    T: ?Sized + Field,
{
    text::render(&value.to_value(), options)
}

/// Deserialize a fresh `T` from JSON text.
///
/// # Examples
///
/// ```rust
/// use docbind::{bind, from_str};
///
/// #[derive(Default, Debug, PartialEq)]
/// struct Point { x: i32, y: i32 }
/// bind!(Point { x, y });
///
/// let point: Point = from_str(r#"{"x": 1}"#).unwrap();
/// assert_eq!(point, Point { x: 1, y: 0 });
/// ```
///
/// # Errors
///
/// Returns a parse error for malformed text, otherwise the first conversion error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: Field + Default,
{
    from_value(&text::parse(s)?)
}

/// Deserialize a fresh `T` from JSON text bytes; invalid UTF-8 is replaced with U+FFFD.
///
/// # Errors
///
/// As [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: Field + Default,
{
    from_value(&text::parse_bytes(v)?)
}

/// Serialize any `T: Field` to CBOR bytes.
///
/// # Errors
///
/// Returns an error if encoding fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_binary<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Field,
{
    binary::encode(&value.to_value())
}

/// Deserialize a fresh `T` from CBOR bytes.
///
/// # Errors
///
/// Returns a decode error for malformed bytes, otherwise the first conversion error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_binary<T>(bytes: &[u8]) -> Result<T>
where
    T: Field + Default,
{
    from_value(&binary::decode(bytes)?)
}
