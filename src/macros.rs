/// Binds a struct's fields using their identifiers as document keys.
///
/// Implements [`Bound`](crate::Bound) and [`Field`](crate::Field) for the type,
/// so it can be converted on its own and nested inside other bound types. The
/// type must implement `Default`.
///
/// # Examples
///
/// ```rust
/// use docbind::{bind, Bound};
///
/// #[derive(Default, Debug, PartialEq)]
/// struct Pen {
///     name: String,
///     count: u32,
/// }
///
/// bind!(Pen { name, count });
///
/// assert_eq!(Pen::keys(), &["name", "count"]);
/// let pen = Pen { name: "red".into(), count: 2 };
/// assert_eq!(pen.to_text(None).unwrap(), r#"{"name":"red","count":2}"#);
/// ```
#[macro_export]
macro_rules! bind {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        $crate::bind_map!($ty { $(::core::stringify!($field) => $field),* });
    };
}

/// Binds a struct's fields under explicit document keys.
///
/// Each entry maps a key expression (usually a string literal) to a field,
/// which lets the document use shorter or different names than the struct.
/// Keys must be constant and distinct; a repeated key fails to compile.
///
/// ```compile_fail
/// use docbind::bind_map;
///
/// #[derive(Default)]
/// struct Pair { a: i32, b: i32 }
///
/// bind_map!(Pair { "x" => a, "x" => b });
/// ```
///
/// # Examples
///
/// ```rust
/// use docbind::{bind_map, Bound};
///
/// #[derive(Default, Debug, PartialEq)]
/// struct HomeWork {
///     name: String,
///     finish: Vec<i32>,
/// }
///
/// bind_map!(HomeWork { "n" => name, "f" => finish });
///
/// let hw = HomeWork { name: "math".into(), finish: vec![1, 3] };
/// assert_eq!(hw.to_text(None).unwrap(), r#"{"n":"math","f":[1,3]}"#);
///
/// let mut back = HomeWork::default();
/// back.from_text(r#"{"n":"math","f":[1,3]}"#).unwrap();
/// assert_eq!(back, hw);
/// ```
#[macro_export]
macro_rules! bind_map {
    ($ty:ty { $($key:expr => $field:ident),* $(,)? }) => {
        const _: () = $crate::bind::assert_unique_keys(&[$($key),*]);

        impl $crate::Bound for $ty {
            fn keys() -> &'static [&'static str] {
                &[$($key),*]
            }

            #[allow(unused_variables)]
            fn write_fields(&self, object: &mut $crate::Map) {
                $( $crate::bind::write_field(object, $key, &self.$field); )*
            }

            #[allow(unused_variables)]
            fn read_fields(&mut self, object: &$crate::Map) -> $crate::Result<()> {
                $( $crate::bind::read_field(object, $key, &mut self.$field)?; )*
                ::core::result::Result::Ok(())
            }
        }

        impl $crate::Field for $ty {
            fn to_value(&self) -> $crate::Value {
                $crate::Bound::to_document(self)
            }

            fn assign(&mut self, value: &$crate::Value) -> $crate::Result<()> {
                $crate::Bound::from_document(self, value)
            }
        }
    };
}

/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Scalars and string literals go through `Value::from`; nested arrays and
/// objects are written inline.
///
/// # Examples
///
/// ```rust
/// use docbind::{doc, Value};
///
/// let value = doc!({
///     "name": "Alice",
///     "tags": ["a", "b"],
///     "home": null
/// });
/// assert_eq!(value.get("name"), Some(&Value::from("Alice")));
/// ```
#[macro_export]
macro_rules! doc {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(::std::vec::Vec::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(::std::vec![$($crate::doc!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert(::std::string::String::from($key), $crate::doc!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
