//! Compact binary encoding of document values.
//!
//! Values are written as CBOR (RFC 8949): every item is type-tagged and
//! length-prefixed, so the tree decodes without a schema. Decoding reads
//! exactly one item and rejects trailing bytes.

use crate::{Error, Result, Value};

/// Encodes a document value as CBOR.
///
/// # Errors
///
/// Returns an error if the encoder fails.
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(128);
    ciborium::into_writer(value, &mut out).map_err(Error::custom)?;
    Ok(out)
}

/// Decodes one CBOR item into a document value.
///
/// # Errors
///
/// Returns [`Error::Decode`] with the decoder's message if the bytes are not a
/// single well-formed item representable as a document value.
///
/// # Examples
///
/// ```rust
/// use docbind::{binary, Value};
///
/// let bytes = binary::encode(&Value::from("hi")).unwrap();
/// assert_eq!(bytes, vec![0x62, b'h', b'i']);
/// assert_eq!(binary::decode(&bytes).unwrap(), Value::from("hi"));
/// ```
pub fn decode(bytes: &[u8]) -> Result<Value> {
    let mut reader = bytes;
    let value = ciborium::from_reader(&mut reader).map_err(Error::decode)?;
    if !reader.is_empty() {
        return Err(Error::decode(format!(
            "{} trailing bytes after document",
            reader.len()
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Map, Number};

    #[test]
    fn test_tree_fidelity() {
        let mut inner = Map::new();
        inner.insert("n".to_string(), Value::Null);
        inner.insert("f".to_string(), Value::from(-1.5));
        let mut map = Map::new();
        map.insert("big".to_string(), Value::Number(Number::Unsigned(u64::MAX)));
        map.insert("neg".to_string(), Value::from(i64::MIN));
        map.insert("list".to_string(), Value::from(vec![Value::from(true)]));
        map.insert("inner".to_string(), Value::Object(inner));
        let value = Value::Object(map);

        assert_eq!(decode(&encode(&value).unwrap()).unwrap(), value);
    }

    #[test]
    fn test_rejects_trailing_bytes() {
        let mut bytes = encode(&Value::from(1)).unwrap();
        bytes.push(0x01);
        let err = decode(&bytes).unwrap_err();
        assert_eq!(err, Error::Decode("1 trailing bytes after document".to_string()));
    }

    #[test]
    fn test_truncated_input() {
        let bytes = encode(&Value::from("hello")).unwrap();
        assert!(matches!(decode(&bytes[..3]), Err(Error::Decode(_))));
        assert!(matches!(decode(&[]), Err(Error::Decode(_))));
    }
}
