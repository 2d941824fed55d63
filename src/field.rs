//! Conversions between field types and document values.
//!
//! [`Field`] is the single conversion entry point used by bound types for each
//! of their declared fields. Which path a field takes is decided by its type:
//!
//! - bound types (see [`bind!`](crate::bind)) recurse structurally and assign
//!   their own fields in place
//! - maps go through [`MapKey`], so integer keys become decimal strings
//! - everything else converts natively to a scalar or array
//!
//! Reading replaces the target with the converted value, except for bound
//! types and `Some` options, which update their existing contents, and
//! integer-keyed maps, which gain the decoded entries whose keys they do not
//! already hold.

use crate::{Error, MapKey, Number, Result, Value};
use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

/// A type that can be written to and read from a document value.
pub trait Field {
    /// Converts the field into a document value.
    fn to_value(&self) -> Value;

    /// Overwrites the field from a document value.
    ///
    /// On error the field may already be partially updated.
    fn assign(&mut self, value: &Value) -> Result<()>;
}

/// Builds a fresh `T` from a document value.
///
/// # Examples
///
/// ```rust
/// use docbind::{field::decode, Value};
///
/// let n: u16 = decode(&Value::from(8080)).unwrap();
/// assert_eq!(n, 8080);
/// assert!(decode::<u8>(&Value::from(8080)).is_err());
/// ```
pub fn decode<T: Field + Default>(value: &Value) -> Result<T> {
    let mut out = T::default();
    out.assign(value)?;
    Ok(out)
}

impl Field for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn assign(&mut self, value: &Value) -> Result<()> {
        *self = value
            .as_bool()
            .ok_or_else(|| Error::type_mismatch("boolean", value))?;
        Ok(())
    }
}

macro_rules! integer_field {
    ($($ty:ty),*) => {
        $(
            impl Field for $ty {
                fn to_value(&self) -> Value {
                    Value::Number(Number::from(*self))
                }

                fn assign(&mut self, value: &Value) -> Result<()> {
                    let converted = match value {
                        Value::Number(n) => match n.as_i64() {
                            Some(i) => <$ty>::try_from(i).ok(),
                            None => n.as_u64().and_then(|u| <$ty>::try_from(u).ok()),
                        },
                        _ => None,
                    };
                    *self = converted
                        .ok_or_else(|| Error::type_mismatch(stringify!($ty), value))?;
                    Ok(())
                }
            }
        )*
    };
}

integer_field!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Field for f64 {
    fn to_value(&self) -> Value {
        Value::Number(Number::Float(*self))
    }

    fn assign(&mut self, value: &Value) -> Result<()> {
        *self = value
            .as_f64()
            .ok_or_else(|| Error::type_mismatch("f64", value))?;
        Ok(())
    }
}

impl Field for f32 {
    fn to_value(&self) -> Value {
        Value::Number(Number::from(*self))
    }

    fn assign(&mut self, value: &Value) -> Result<()> {
        *self = value
            .as_f64()
            .ok_or_else(|| Error::type_mismatch("f32", value))? as f32;
        Ok(())
    }
}

impl Field for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn assign(&mut self, value: &Value) -> Result<()> {
        let s = value
            .as_str()
            .ok_or_else(|| Error::type_mismatch("string", value))?;
        self.clear();
        self.push_str(s);
        Ok(())
    }
}

impl Field for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn assign(&mut self, value: &Value) -> Result<()> {
        self.clone_from(value);
        Ok(())
    }
}

impl<T: Field + ?Sized> Field for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn assign(&mut self, value: &Value) -> Result<()> {
        (**self).assign(value)
    }
}

impl<T: Field + Default> Field for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }

    fn assign(&mut self, value: &Value) -> Result<()> {
        if value.is_null() {
            *self = None;
            return Ok(());
        }
        match self {
            Some(inner) => inner.assign(value),
            None => {
                *self = Some(decode(value)?);
                Ok(())
            }
        }
    }
}

fn decode_elements<T, C>(value: &Value) -> Result<C>
where
    T: Field + Default,
    C: FromIterator<T>,
{
    let items = value
        .as_array()
        .ok_or_else(|| Error::type_mismatch("array", value))?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| decode::<T>(item).map_err(|e| e.at_index(index)))
        .collect()
}

impl<T: Field + Default> Field for Vec<T> {
    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(Field::to_value).collect())
    }

    fn assign(&mut self, value: &Value) -> Result<()> {
        *self = decode_elements(value)?;
        Ok(())
    }
}

impl<T: Field + Default + Ord> Field for BTreeSet<T> {
    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(Field::to_value).collect())
    }

    fn assign(&mut self, value: &Value) -> Result<()> {
        *self = decode_elements(value)?;
        Ok(())
    }
}

impl<T, S> Field for HashSet<T, S>
where
    T: Field + Default + Eq + Hash,
    S: BuildHasher + Default,
{
    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(Field::to_value).collect())
    }

    fn assign(&mut self, value: &Value) -> Result<()> {
        *self = decode_elements(value)?;
        Ok(())
    }
}

fn encode_entries<'a, K, V, I>(entries: I) -> Value
where
    K: MapKey + 'a,
    V: Field + 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
{
    Value::Object(entries.map(|(k, v)| (k.to_key(), v.to_value())).collect())
}

/// Decodes every entry before the target map is touched, so a failing entry
/// leaves the map as it was.
fn decode_entries<K, V>(value: &Value) -> Result<Vec<(K, V)>>
where
    K: MapKey,
    V: Field + Default,
{
    let object = value
        .as_object()
        .ok_or_else(|| Error::type_mismatch("object", value))?;
    object
        .iter()
        .map(|(key, item)| -> Result<(K, V)> {
            let decoded = decode::<V>(item).map_err(|e| e.at_key(key))?;
            Ok((K::from_key(key), decoded))
        })
        .collect()
}

impl<K, V> Field for BTreeMap<K, V>
where
    K: MapKey + Ord,
    V: Field + Default,
{
    fn to_value(&self) -> Value {
        encode_entries(self.iter())
    }

    fn assign(&mut self, value: &Value) -> Result<()> {
        let entries = decode_entries::<K, V>(value)?;
        if !K::INSERTS_INTO_TARGET {
            self.clear();
        }
        for (key, item) in entries {
            self.entry(key).or_insert(item);
        }
        Ok(())
    }
}

impl<K, V, S> Field for HashMap<K, V, S>
where
    K: MapKey + Eq + Hash,
    V: Field + Default,
    S: BuildHasher + Default,
{
    fn to_value(&self) -> Value {
        encode_entries(self.iter())
    }

    fn assign(&mut self, value: &Value) -> Result<()> {
        let entries = decode_entries::<K, V>(value)?;
        if !K::INSERTS_INTO_TARGET {
            self.clear();
        }
        for (key, item) in entries {
            self.entry(key).or_insert(item);
        }
        Ok(())
    }
}

impl<K, V, S> Field for IndexMap<K, V, S>
where
    K: MapKey + Eq + Hash,
    V: Field + Default,
    S: BuildHasher + Default,
{
    fn to_value(&self) -> Value {
        encode_entries(self.iter())
    }

    fn assign(&mut self, value: &Value) -> Result<()> {
        let entries = decode_entries::<K, V>(value)?;
        if !K::INSERTS_INTO_TARGET {
            self.clear();
        }
        for (key, item) in entries {
            self.entry(key).or_insert(item);
        }
        Ok(())
    }
}
