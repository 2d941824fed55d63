//! Dynamic document representation.
//!
//! [`Value`] is the intermediate tree every bound type converts through. Both
//! encodings (JSON text and CBOR) read and write this tree, so a bound type's
//! field declaration only ever has to describe how to reach a `Value`.
//!
//! ## Core Types
//!
//! - [`Value`]: null, boolean, number, string, array or object
//! - [`Number`]: signed, large unsigned, or floating-point number
//!
//! ## Usage Patterns
//!
//! ```rust
//! use docbind::{doc, Value};
//!
//! let null = Value::Null;
//! let number = Value::from(42);
//! let obj = doc!({
//!     "name": "Alice",
//!     "age": 30
//! });
//!
//! assert!(number.is_number());
//! assert_eq!(obj.kind(), "object");
//! ```

use crate::Map;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed document value.
///
/// # Examples
///
/// ```rust
/// use docbind::{Value, Number};
///
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(Value::Null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

/// A numeric document value.
///
/// Non-negative integers that fit in `i64` are always stored as
/// [`Number::Integer`]; [`Number::Unsigned`] only holds values above
/// `i64::MAX`. This keeps equality stable across encodings that do not
/// distinguish signedness.
///
/// # Examples
///
/// ```rust
/// use docbind::Number;
///
/// assert_eq!(Number::from(7u64), Number::Integer(7));
/// assert_eq!(Number::from(u64::MAX), Number::Unsigned(u64::MAX));
/// assert_eq!(Number::Float(3.5).as_f64(), 3.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl Number {
    /// Converts this number to an `i64` if it is integral and in range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docbind::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// assert_eq!(Number::Unsigned(u64::MAX).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Integer(i) => Some(i),
            Number::Unsigned(u) => i64::try_from(u).ok(),
            Number::Float(f) => {
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
                    Some(f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to a `u64` if it is integral, non-negative and in range.
    #[inline]
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Number::Integer(i) => u64::try_from(i).ok(),
            Number::Unsigned(u) => Some(u),
            Number::Float(f) => {
                if f.fract() == 0.0 && f >= 0.0 && f < u64::MAX as f64 {
                    Some(f as u64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`, possibly losing precision.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(i) => i as f64,
            Number::Unsigned(u) => u as f64,
            Number::Float(f) => f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Unsigned(u) => write!(f, "{}", u),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

macro_rules! number_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(value as i64)
                }
            }
        )*
    };
}

macro_rules! number_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    match i64::try_from(value) {
                        Ok(i) => Number::Integer(i),
                        Err(_) => Number::Unsigned(value as u64),
                    }
                }
            }
        )*
    };
}

number_from_signed!(i8, i16, i32, i64, isize);
number_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Name of the value's variant, as used in error messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docbind::Value;
    ///
    /// assert_eq!(Value::Null.kind(), "null");
    /// assert_eq!(Value::Array(vec![]).kind(), "array");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Value::Bool(b) => format!("boolean {}", b),
            Value::Number(n) => format!("number {}", n),
            Value::String(s) => format!("string {:?}", s),
            other => other.kind().to_string(),
        }
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docbind::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integral number in `i64` range, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns it as `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Looks up a key if the value is an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|obj| obj.get(key))
    }
}

/// Renders the value as compact JSON text.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Unsigned(u)) => serializer.serialize_u64(*u),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid document value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::from(value)))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = Map::with_capacity(map.size_hint().unwrap_or(0).min(4096));
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_normalization() {
        assert_eq!(Number::from(5u8), Number::Integer(5));
        assert_eq!(Number::from(i64::MAX as u64), Number::Integer(i64::MAX));
        assert_eq!(
            Number::from(i64::MAX as u64 + 1),
            Number::Unsigned(i64::MAX as u64 + 1)
        );
    }

    #[test]
    fn test_number_conversions() {
        assert_eq!(Number::Integer(-1).as_u64(), None);
        assert_eq!(Number::Unsigned(u64::MAX).as_u64(), Some(u64::MAX));
        assert_eq!(Number::Float(2.0).as_u64(), Some(2));
        assert_eq!(Number::Float(-2.0).as_u64(), None);
        assert_eq!(Number::Integer(3).as_f64(), 3.0);
    }

    #[test]
    fn test_kind_and_describe() {
        assert_eq!(Value::from(true).describe(), "boolean true");
        assert_eq!(Value::from(1.5).describe(), "number 1.5");
        assert_eq!(Value::from("a").describe(), "string \"a\"");
        assert_eq!(Value::Object(Map::new()).describe(), "object");
    }

    #[test]
    fn test_display_is_compact_json() {
        let mut map = Map::new();
        map.insert("a".to_string(), Value::from(vec![Value::from(1), Value::Null]));
        assert_eq!(Value::Object(map).to_string(), r#"{"a":[1,null]}"#);
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Number(Number::Integer(42)));
        assert_eq!(Value::from(3.5f64), Value::Number(Number::Float(3.5)));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
    }

    #[test]
    fn test_get_on_non_object() {
        assert_eq!(Value::from(1).get("x"), None);
    }
}
