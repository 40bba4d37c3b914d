//! Error types for streaming TOON decoding.
//!
//! Literal classification never fails; everything in this module describes a
//! structural problem found while consuming lines. Each variant carries the
//! 1-based line number that exposed it so callers can point at the input.
//!
//! ## Error Categories
//!
//! - **Header Errors**: a line claims to open a field, object or array but is unparseable
//! - **Length Errors**: a declared `[N]` does not match the elements produced
//! - **Indentation Errors**: a line sits at a depth no open scope accepts
//! - **String Errors**: unterminated quotes or bad escape sequences
//!
//! Once a decoder reports an error it is poisoned: every later call returns the
//! same error and no further events are produced.
//!
//! ## Examples
//!
//! ```rust
//! use toon_stream::{decode_str, DecodeOptions, Error};
//!
//! let result = decode_str("nums[3]: 1,2", DecodeOptions::default());
//! match result {
//!     Err(Error::ArrayLengthMismatch { line, expected, found }) => {
//!         assert_eq!((line, expected, found), (1, 3, 2));
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while decoding TOON lines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error while reading lines from a reader
    #[error("IO error: {0}")]
    Io(String),

    /// A line claims to open a field, object or array but cannot be parsed
    #[error("Malformed header at line {line}: {msg}\n{context}")]
    MalformedHeader {
        line: usize,
        msg: String,
        context: String,
    },

    /// A declared array length does not match the elements produced
    #[error("Array length mismatch at line {line}: expected {expected} elements, found {found}")]
    ArrayLengthMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Tabular row with a different number of values than the header declares
    #[error("Row width mismatch at line {line}: expected {expected} values, found {found}")]
    RowWidthMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Open scopes could not be closed in nesting order
    #[error("Unbalanced structure at line {line}: {msg}")]
    UnbalancedStructure { line: usize, msg: String },

    /// Line depth does not fit the open scopes
    #[error("Unexpected indentation at line {line}: {msg}\n{context}")]
    UnexpectedIndentation {
        line: usize,
        msg: String,
        context: String,
    },

    /// Unterminated quoted string or invalid escape
    #[error("Invalid string at line {line}, column {col}: {msg}")]
    InvalidString { line: usize, col: usize, msg: String },

    /// Well-formed line that is not allowed where it appears
    #[error("Unexpected content at line {line}: {msg}\n{context}")]
    UnexpectedContent {
        line: usize,
        msg: String,
        context: String,
    },
}

impl Error {
    /// Creates a malformed header error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_stream::Error;
    ///
    /// let err = Error::malformed_header(3, "missing ':' after key", "name Alice");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn malformed_header(line: usize, msg: &str, context: &str) -> Self {
        Error::MalformedHeader {
            line,
            msg: msg.to_string(),
            context: context.to_string(),
        }
    }

    /// Creates an array length mismatch error.
    pub fn length_mismatch(line: usize, expected: usize, found: usize) -> Self {
        Error::ArrayLengthMismatch {
            line,
            expected,
            found,
        }
    }

    /// Creates a row width mismatch error for tabular arrays.
    pub fn row_width_mismatch(line: usize, expected: usize, found: usize) -> Self {
        Error::RowWidthMismatch {
            line,
            expected,
            found,
        }
    }

    /// Creates an unbalanced structure error.
    pub fn unbalanced(line: usize, msg: &str) -> Self {
        Error::UnbalancedStructure {
            line,
            msg: msg.to_string(),
        }
    }

    /// Creates an indentation error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_stream::Error;
    ///
    /// let err = Error::indentation(8, "expected depth 1, found 3", "      name: Alice");
    /// assert!(err.to_string().contains("expected depth 1"));
    /// ```
    pub fn indentation(line: usize, msg: &str, context: &str) -> Self {
        Error::UnexpectedIndentation {
            line,
            msg: msg.to_string(),
            context: context.to_string(),
        }
    }

    /// Creates an invalid string error.
    pub fn invalid_string(line: usize, col: usize, msg: &str) -> Self {
        Error::InvalidString {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an unexpected content error.
    pub fn unexpected_content(line: usize, msg: &str, context: &str) -> Self {
        Error::UnexpectedContent {
            line,
            msg: msg.to_string(),
            context: context.to_string(),
        }
    }

    /// Creates an I/O error for reader failures.
    pub fn io<T: fmt::Display>(msg: T) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the 1-based line number the error was raised at, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_stream::Error;
    ///
    /// assert_eq!(Error::length_mismatch(4, 2, 1).line(), Some(4));
    /// assert_eq!(Error::io("broken pipe").line(), None);
    /// ```
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Io(_) => None,
            Error::MalformedHeader { line, .. }
            | Error::ArrayLengthMismatch { line, .. }
            | Error::RowWidthMismatch { line, .. }
            | Error::UnbalancedStructure { line, .. }
            | Error::UnexpectedIndentation { line, .. }
            | Error::InvalidString { line, .. }
            | Error::UnexpectedContent { line, .. } => Some(*line),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
