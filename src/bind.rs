//! Bound types: structs whose fields are declared once for document conversion.
//!
//! A bound type lists its fields with [`bind!`](crate::bind) or
//! [`bind_map!`](crate::bind_map). The macro implements [`Bound`], which
//! supplies the declared key list and the per-field read/write walk; every
//! conversion below is derived from that walk.
//!
//! ## Reading semantics
//!
//! [`Bound::from_document`] requires an object. For each declared key it looks
//! the key up: an absent key or an explicit `null` leaves the field as it was,
//! so defaults survive partial documents. Anything else is converted into the
//! field, nested bound types in place. The first failure stops the walk and
//! is returned; fields assigned before it keep their new values, so a target
//! that failed to load must be discarded. The crate-level `from_*` functions
//! and the config holder always read into a fresh default instance.

use crate::{binary, text, Error, Field, Map, Result, TextOptions, Value};

/// A struct whose fields participate in document conversion.
///
/// Implemented by [`bind!`](crate::bind) and [`bind_map!`](crate::bind_map);
/// not meant to be implemented by hand.
pub trait Bound: Default {
    /// The exposed keys, in declaration order.
    fn keys() -> &'static [&'static str];

    /// Writes each declared field into `object` under its key.
    fn write_fields(&self, object: &mut Map);

    /// Reads each declared key present and non-null in `object` into its field.
    fn read_fields(&mut self, object: &Map) -> Result<()>;

    /// Serializes the declared fields into an object.
    fn to_document(&self) -> Value {
        let mut object = Map::with_capacity(Self::keys().len());
        self.write_fields(&mut object);
        debug_assert_eq!(
            object.len(),
            Self::keys().len(),
            "duplicate exposed key in {}",
            std::any::type_name::<Self>()
        );
        Value::Object(object)
    }

    /// Reads the declared fields from an object.
    ///
    /// # Errors
    ///
    /// [`Error::Shape`] if `value` is not an object, otherwise the first
    /// field conversion failure.
    fn from_document(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Object(object) => self.read_fields(object),
            other => Err(Error::shape::<Self>(other)),
        }
    }

    /// Renders the fields as JSON text; `None` is compact, `Some(n)` indents by `n`.
    fn to_text(&self, indent: Option<usize>) -> Result<String> {
        self.to_text_with_options(&TextOptions::from(indent))
    }

    /// Renders the fields as JSON text with explicit options.
    fn to_text_with_options(&self, options: &TextOptions) -> Result<String> {
        text::render(&self.to_document(), options)
    }

    /// Parses JSON text and reads it into the fields.
    fn from_text(&mut self, input: &str) -> Result<()> {
        let value = text::parse(input)?;
        self.from_document(&value)
    }

    /// Parses JSON text from raw bytes (invalid UTF-8 is replaced) and reads it into the fields.
    fn from_text_bytes(&mut self, input: &[u8]) -> Result<()> {
        let value = text::parse_bytes(input)?;
        self.from_document(&value)
    }

    /// Encodes the fields as CBOR.
    fn to_binary(&self) -> Result<Vec<u8>> {
        binary::encode(&self.to_document())
    }

    /// Decodes CBOR bytes and reads them into the fields.
    fn from_binary(&mut self, bytes: &[u8]) -> Result<()> {
        let value = binary::decode(bytes)?;
        self.from_document(&value)
    }
}

/// Reads one declared field from `object`; used by the binding macros.
///
/// Absent and `null` entries leave the field untouched. Errors are annotated
/// with `key`.
pub fn read_field<F: Field + ?Sized>(object: &Map, key: &str, field: &mut F) -> Result<()> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(()),
        Some(value) => field.assign(value).map_err(|e| e.at_key(key)),
    }
}

/// Panics if `keys` holds the same key twice.
///
/// The binding macros evaluate this in a `const` item, so a duplicate key is
/// a compile error.
#[doc(hidden)]
pub const fn assert_unique_keys(keys: &[&str]) {
    let mut i = 0;
    while i < keys.len() {
        let mut j = i + 1;
        while j < keys.len() {
            if str_eq(keys[i], keys[j]) {
                panic!("duplicate exposed key in binding");
            }
            j += 1;
        }
        i += 1;
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Writes one declared field into `object`; used by the binding macros.
pub fn write_field<F: Field + ?Sized>(object: &mut Map, key: &str, field: &F) {
    object.insert(key.to_string(), field.to_value());
}
