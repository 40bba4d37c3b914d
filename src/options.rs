//! Configuration options for TOON decoding.
//!
//! This module provides the static configuration a [`Decoder`](crate::Decoder)
//! is constructed with:
//!
//! - [`DecodeOptions`]: Main configuration struct
//! - [`Delimiter`]: Default separator for inline arrays and tabular rows (comma, tab, or pipe)
//! - [`LiteralSpellings`]: The exact spellings of `true`, `false` and `null`
//!
//! ## Examples
//!
//! ```rust
//! use toon_stream::{decode_str, DecodeOptions, Delimiter, Event, Value};
//!
//! // Pipe-separated inline arrays with 4-space indentation
//! let options = DecodeOptions::new()
//!     .with_delimiter(Delimiter::Pipe)
//!     .with_indent(4);
//!
//! let events = decode_str("tags[2]: a|b", options).unwrap();
//! assert_eq!(events[3], Event::Scalar { value: Value::from("a") });
//! ```

use crate::literal::LiteralSpellings;

/// Delimiter choice for TOON inline arrays and tabular rows.
///
/// A header may override the configured delimiter for its own array by
/// carrying a marker (`[3|]` or `[3\t]`); unmarked headers use this one.
///
/// # Examples
///
/// ```rust
/// use toon_stream::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_char(), ',');
/// assert_eq!(Delimiter::Tab.as_char(), '\t');
/// assert_eq!(Delimiter::Pipe.as_char(), '|');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    /// Returns the character this delimiter splits on.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// Maps a header marker character to a delimiter.
    pub(crate) fn from_marker(ch: char) -> Option<Self> {
        match ch {
            '|' => Some(Delimiter::Pipe),
            '\t' => Some(Delimiter::Tab),
            ',' => Some(Delimiter::Comma),
            _ => None,
        }
    }
}

/// Configuration options for TOON decoding.
///
/// # Examples
///
/// ```rust
/// use toon_stream::{DecodeOptions, Delimiter, LiteralSpellings};
///
/// // Defaults: 2-space indent, comma delimiter, true/false/null
/// let options = DecodeOptions::new();
/// assert_eq!(options.indent, 2);
///
/// let options = DecodeOptions::new()
///     .with_indent(4)
///     .with_delimiter(Delimiter::Tab)
///     .with_literals(LiteralSpellings::new("yes", "no", "nil"));
/// assert_eq!(options.literals.null, "nil");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DecodeOptions {
    pub indent: usize,
    pub delimiter: Delimiter,
    pub literals: LiteralSpellings,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            indent: 2,
            delimiter: Delimiter::default(),
            literals: LiteralSpellings::default(),
        }
    }
}

impl DecodeOptions {
    /// Creates default options (2-space indent, comma delimiter, standard literals).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation width (number of spaces per nesting level).
    ///
    /// A width of `0` is treated as `1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_stream::DecodeOptions;
    ///
    /// let options = DecodeOptions::new().with_indent(4);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the default delimiter for inline arrays and tabular rows.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the spellings recognised as `true`, `false` and `null`.
    #[must_use]
    pub fn with_literals(mut self, literals: LiteralSpellings) -> Self {
        self.literals = literals;
        self
    }

    pub(crate) fn indent_width(&self) -> usize {
        self.indent.max(1)
    }
}
