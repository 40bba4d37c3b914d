//! Literal classification for bare (unquoted) tokens.
//!
//! Every unquoted scalar the decoder emits goes through [`LiteralSpellings::classify`].
//! Classification is a pure function of the token text and never fails: a token
//! that is not a boolean, null or number is a string.
//!
//! ## Numbers
//!
//! Numeric detection is stricter than `str::parse::<f64>`. Leading zeros mark a
//! token as text so zero-padded codes survive a round trip:
//!
//! | Token | Kind |
//! |-------|------|
//! | `0`, `0.5`, `-0`, `-0.5` | Number |
//! | `05`, `007`, `-05`, `-007` | String |
//! | `1e10`, `+5`, `.5` | Number |
//! | `NaN`, `inf`, `1e400` | String (not finite) |
//!
//! ```rust
//! use toon_stream::literal::{classify, LiteralKind};
//!
//! assert_eq!(classify("0"), LiteralKind::Number);
//! assert_eq!(classify("05"), LiteralKind::String);
//! assert_eq!(classify("-0.5"), LiteralKind::Number);
//! assert_eq!(classify("null"), LiteralKind::Null);
//! assert_eq!(classify(""), LiteralKind::String);
//! ```

use crate::Value;

/// The classified type of a bare token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Null,
    Boolean,
    Number,
    String,
}

/// The exact, case-sensitive spellings of the three keyword literals.
///
/// # Examples
///
/// ```rust
/// use toon_stream::literal::{LiteralKind, LiteralSpellings};
///
/// let spellings = LiteralSpellings::new("yes", "no", "nil");
/// assert_eq!(spellings.classify("yes"), LiteralKind::Boolean);
/// assert_eq!(spellings.classify("true"), LiteralKind::String);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralSpellings {
    pub truthy: String,
    pub falsy: String,
    pub null: String,
}

impl Default for LiteralSpellings {
    fn default() -> Self {
        LiteralSpellings::new("true", "false", "null")
    }
}

impl LiteralSpellings {
    /// Creates a set of spellings for `true`, `false` and `null`.
    #[must_use]
    pub fn new(truthy: &str, falsy: &str, null: &str) -> Self {
        LiteralSpellings {
            truthy: truthy.to_string(),
            falsy: falsy.to_string(),
            null: null.to_string(),
        }
    }

    /// Returns `true` if the token is one of the three keyword literals.
    #[must_use]
    pub fn is_boolean_or_null(&self, token: &str) -> bool {
        token == self.truthy || token == self.falsy || token == self.null
    }

    /// Classifies a bare token.
    #[must_use]
    pub fn classify(&self, token: &str) -> LiteralKind {
        if token.is_empty() {
            LiteralKind::String
        } else if token == self.null {
            LiteralKind::Null
        } else if token == self.truthy || token == self.falsy {
            LiteralKind::Boolean
        } else if numeric_value(token).is_some() {
            LiteralKind::Number
        } else {
            LiteralKind::String
        }
    }

    /// Resolves a bare token to its decoded value.
    #[must_use]
    pub fn parse(&self, token: &str) -> Value {
        if token.is_empty() {
            Value::String(String::new())
        } else if token == self.null {
            Value::Null
        } else if token == self.truthy {
            Value::Bool(true)
        } else if token == self.falsy {
            Value::Bool(false)
        } else if let Some(n) = numeric_value(token) {
            Value::Number(n)
        } else {
            Value::String(token.to_string())
        }
    }
}

/// Classifies a bare token using the standard `true`/`false`/`null` spellings.
#[must_use]
pub fn classify(token: &str) -> LiteralKind {
    LiteralSpellings::default().classify(token)
}

/// Returns `true` if the token is `true`, `false` or `null`.
#[must_use]
pub fn is_boolean_or_null_literal(token: &str) -> bool {
    LiteralSpellings::default().is_boolean_or_null(token)
}

/// Returns `true` if the token is a finite number without leading zeros.
///
/// # Examples
///
/// ```rust
/// use toon_stream::literal::is_numeric_literal;
///
/// assert!(is_numeric_literal("-0"));
/// assert!(!is_numeric_literal("-007"));
/// assert!(!is_numeric_literal("12abc"));
/// ```
#[must_use]
pub fn is_numeric_literal(token: &str) -> bool {
    numeric_value(token).is_some()
}

/// Resolves a bare token to a value using the standard spellings.
#[must_use]
pub fn parse_literal(token: &str) -> Value {
    LiteralSpellings::default().parse(token)
}

/// Parses a numeric literal, rejecting leading zeros and non-finite results.
///
/// `-0` decodes as `0`.
fn numeric_value(token: &str) -> Option<f64> {
    let bytes = token.as_bytes();
    if bytes.is_empty() {
        return None;
    }

    // "0" and "0.5" are fine, "05" is not
    if bytes.len() > 1 && bytes[0] == b'0' && bytes[1] != b'.' {
        return None;
    }

    // same rule after a minus sign: "-0" and "-0.5" are fine, "-05" is not
    if bytes.len() > 2 && bytes[0] == b'-' && bytes[1] == b'0' && bytes[2] != b'.' {
        return None;
    }

    match token.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(if n == 0.0 { 0.0 } else { n }),
        _ => None,
    }
}
