//! Structural events and decoded scalar values.
//!
//! The decoder's output contract is a flat, ordered sequence of [`Event`]s.
//! Nesting is expressed by paired `StartObject`/`EndObject` and
//! `StartArray`/`EndArray` events; object fields are a [`Event::Key`]
//! followed by exactly one value (a scalar or a nested scope).
//!
//! ## Examples
//!
//! ```rust
//! use toon_stream::{decode_str, DecodeOptions, Event, Value};
//!
//! let events = decode_str("value: -0", DecodeOptions::default()).unwrap();
//! assert_eq!(
//!     events,
//!     vec![
//!         Event::StartObject,
//!         Event::Key { key: "value".to_string() },
//!         Event::Scalar { value: Value::Number(0.0) },
//!         Event::EndObject,
//!     ]
//! );
//! ```
//!
//! Events serialize with an internal `type` tag so they can be forwarded as
//! JSON lines:
//!
//! ```rust
//! use toon_stream::Event;
//!
//! let json = serde_json::to_string(&Event::StartArray { length: 2 }).unwrap();
//! assert_eq!(json, r#"{"type":"startArray","length":2}"#);
//! ```

use serde::Serialize;
use std::fmt;

/// One unit of the decoder's output stream, in document order.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event {
    StartObject,
    EndObject,
    /// Opens an array whose header declared `length` elements.
    StartArray {
        length: usize,
    },
    EndArray,
    Key {
        key: String,
    },
    Scalar {
        value: Value,
    },
}

impl Event {
    /// Returns `true` for events that open a scope.
    #[inline]
    #[must_use]
    pub const fn is_start(&self) -> bool {
        matches!(self, Event::StartObject | Event::StartArray { .. })
    }

    /// Returns `true` for events that close a scope.
    #[inline]
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self, Event::EndObject | Event::EndArray)
    }

    pub(crate) fn key(key: impl Into<String>) -> Self {
        Event::Key { key: key.into() }
    }

    pub(crate) fn scalar(value: Value) -> Self {
        Event::Scalar { value }
    }
}

/// A decoded scalar: exactly one of null, boolean, number or string.
///
/// Numbers are IEEE-754 doubles; the decoder never produces NaN or infinities.
///
/// # Examples
///
/// ```rust
/// use toon_stream::Value;
///
/// assert!(Value::Null.is_null());
/// assert_eq!(Value::from(1.5).as_f64(), Some(1.5));
/// assert_eq!(Value::from("05").as_str(), Some("05"));
/// assert_eq!(serde_json::to_string(&Value::from(true)).unwrap(), "true");
/// ```
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
