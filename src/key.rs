//! Map keys for associative fields.
//!
//! Document objects are keyed by strings, so a map field converts its keys at
//! the boundary through [`MapKey`]. `String` keys pass through unchanged;
//! integer keys are written as their decimal form and read back leniently,
//! the way C's `atoi` does: leading whitespace, an optional sign and the
//! leading run of digits are used and anything after that is ignored. A key
//! with no usable digits, or one that overflows the key type, becomes `0`.
//! Integer-keyed maps are filled in place: decoded entries are added to the
//! map's current contents and never overwrite a key it already holds.
//!
//! ```rust
//! use docbind::MapKey;
//!
//! assert_eq!(42u16.to_key(), "42");
//! assert_eq!(<i32 as MapKey>::from_key("-17"), -17);
//! assert_eq!(<i32 as MapKey>::from_key("12abc"), 12);
//! assert_eq!(<i32 as MapKey>::from_key("abc"), 0);
//! ```

/// A type usable as the key of a map field.
pub trait MapKey: Sized {
    /// When `true`, reading a document inserts its entries into the existing
    /// map and keys already present keep their values. When `false`, the map
    /// is replaced by the document's entries.
    const INSERTS_INTO_TARGET: bool = false;

    /// Renders the key as a document object key.
    fn to_key(&self) -> String;

    /// Recovers a key from a document object key. Never fails.
    fn from_key(key: &str) -> Self;
}

impl MapKey for String {
    fn to_key(&self) -> String {
        self.clone()
    }

    fn from_key(key: &str) -> Self {
        key.to_string()
    }
}

/// Splits off the `atoi`-style numeric prefix of `key`.
fn numeric_prefix(key: &str) -> &str {
    let trimmed = key.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    &trimmed[..end]
}

macro_rules! integer_map_key {
    ($($ty:ty),*) => {
        $(
            impl MapKey for $ty {
                const INSERTS_INTO_TARGET: bool = true;

                fn to_key(&self) -> String {
                    self.to_string()
                }

                fn from_key(key: &str) -> Self {
                    let prefix = numeric_prefix(key);
                    let parsed = prefix.parse::<$ty>();
                    if prefix.len() != key.len() || parsed.is_err() {
                        tracing::warn!(
                            key,
                            key_type = stringify!($ty),
                            "map key is not a clean integer, using its numeric prefix"
                        );
                    }
                    parsed.unwrap_or_default()
                }
            }
        )*
    };
}

integer_map_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
