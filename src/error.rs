//! Error types for document binding, encoding and config loading.
//!
//! Every fallible operation in this crate reports through [`Result`], carrying
//! the first failure encountered. The [`Display`](std::fmt::Display) output of
//! an [`Error`] is the single human-readable diagnostic.
//!
//! ## Error Categories
//!
//! - **Shape Errors**: a bound type was handed something other than an object
//! - **Type Mismatches**: a field's value does not convert to the field's type
//! - **Parse / Decode Errors**: malformed JSON text or CBOR bytes
//! - **I/O Errors**: a config file could not be read or written
//!
//! Shape and type errors carry the path of keys and array indices leading to
//! the offending value, e.g. `pens[1].count`.
//!
//! ## Examples
//!
//! ```rust
//! use docbind::{bind, from_str, Error};
//!
//! #[derive(Debug, Default)]
//! struct Pen { count: u32 }
//! bind!(Pen { count });
//!
//! let err = from_str::<Pen>("[]").unwrap_err();
//! assert!(matches!(err, Error::Shape { .. }));
//! assert!(err.to_string().contains("object"));
//! ```

use crate::Value;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while converting bound types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing a file
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed JSON text, with the parser's message verbatim
    #[error("Parse error: {0}")]
    Parse(String),

    /// Malformed CBOR bytes, with the decoder's message verbatim
    #[error("Decode error: {0}")]
    Decode(String),

    /// A bound type was given a non-object document
    #[error("{}type must be object [{type_name}], but is {found}", path_prefix(.path))]
    Shape {
        path: String,
        type_name: String,
        found: String,
    },

    /// A field's value does not convert to the field's type
    #[error("{}type mismatch: expected {expected}, found {found}", path_prefix(.path))]
    TypeMismatch {
        path: String,
        expected: String,
        found: String,
    },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

fn path_prefix(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!("at `{}`: ", path)
    }
}

fn join_path(segment: String, rest: &str) -> String {
    if rest.is_empty() {
        segment
    } else if rest.starts_with('[') {
        segment + rest
    } else {
        format!("{}.{}", segment, rest)
    }
}

impl Error {
    /// Creates a shape error for bound type `T` handed a non-object value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docbind::{Error, Value};
    ///
    /// let err = Error::shape::<u32>(&Value::Array(vec![]));
    /// assert_eq!(err.to_string(), "type must be object [u32], but is array");
    /// ```
    pub fn shape<T: ?Sized>(found: &Value) -> Self {
        Error::Shape {
            path: String::new(),
            type_name: std::any::type_name::<T>().to_string(),
            found: found.kind().to_string(),
        }
    }

    /// Creates a type mismatch error when a value does not convert to `expected`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docbind::{Error, Value};
    ///
    /// let err = Error::type_mismatch("u8", &Value::from(300));
    /// assert_eq!(err.to_string(), "type mismatch: expected u8, found number 300");
    /// ```
    pub fn type_mismatch(expected: &str, found: &Value) -> Self {
        Error::TypeMismatch {
            path: String::new(),
            expected: expected.to_string(),
            found: found.describe(),
        }
    }

    /// Creates a parse error from a text parser message.
    pub fn parse<T: fmt::Display>(msg: T) -> Self {
        Error::Parse(msg.to_string())
    }

    /// Creates a decode error from a binary decoder message.
    pub fn decode<T: fmt::Display>(msg: T) -> Self {
        Error::Decode(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Prefixes the error's path with an object key.
    ///
    /// Errors without a path (parse, decode, I/O) are returned unchanged.
    #[must_use]
    pub fn at_key(self, key: &str) -> Self {
        self.within(key.to_string())
    }

    /// Prefixes the error's path with an array index.
    #[must_use]
    pub fn at_index(self, index: usize) -> Self {
        self.within(format!("[{}]", index))
    }

    fn within(self, segment: String) -> Self {
        match self {
            Error::Shape {
                path,
                type_name,
                found,
            } => Error::Shape {
                path: join_path(segment, &path),
                type_name,
                found,
            },
            Error::TypeMismatch {
                path,
                expected,
                found,
            } => Error::TypeMismatch {
                path: join_path(segment, &path),
                expected,
                found,
            },
            other => other,
        }
    }

    /// Returns the key path of a shape or type error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::Shape { path, .. } | Error::TypeMismatch { path, .. } if !path.is_empty() => {
                Some(path.as_str())
            }
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
