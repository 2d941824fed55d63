//! Formatting options for textual output.
//!
//! ```rust
//! use docbind::{bind, TextOptions};
//!
//! #[derive(Default)]
//! struct Point { x: i32, y: i32 }
//! bind!(Point { x, y });
//!
//! let compact = docbind::to_string_with_options(&Point { x: 1, y: 2 }, &TextOptions::new()).unwrap();
//! assert_eq!(compact, r#"{"x":1,"y":2}"#);
//!
//! let pretty = docbind::to_string_with_options(&Point { x: 1, y: 2 }, &TextOptions::pretty().with_indent(2)).unwrap();
//! assert_eq!(pretty, "{\n  \"x\": 1,\n  \"y\": 2\n}");
//! ```

/// Configuration options for text rendering.
///
/// `indent` of `None` renders a compact single line; `Some(n)` pretty-prints
/// with `n` spaces per nesting level (`Some(0)` still breaks lines).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TextOptions {
    pub indent: Option<usize>,
}

impl TextOptions {
    /// Default indentation width used by [`TextOptions::pretty`].
    pub const DEFAULT_INDENT: usize = 4;

    /// Creates default options (compact output).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docbind::TextOptions;
    ///
    /// assert_eq!(TextOptions::new().indent, None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with 4-space indentation.
    #[must_use]
    pub fn pretty() -> Self {
        TextOptions {
            indent: Some(Self::DEFAULT_INDENT),
        }
    }

    /// Sets the indentation width and switches to pretty output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = Some(indent);
        self
    }

    /// Switches back to compact output.
    #[must_use]
    pub fn compact(mut self) -> Self {
        self.indent = None;
        self
    }

    /// Returns `true` if output is pretty-printed.
    #[must_use]
    pub fn is_pretty(&self) -> bool {
        self.indent.is_some()
    }
}

impl From<Option<usize>> for TextOptions {
    fn from(indent: Option<usize>) -> Self {
        TextOptions { indent }
    }
}

/// Signed indent: negative means compact.
impl From<i32> for TextOptions {
    fn from(indent: i32) -> Self {
        TextOptions {
            indent: usize::try_from(indent).ok(),
        }
    }
}
