//! The TOON notation as decoded by this crate.
//!
//! This module documents which lines the decoder accepts and which events each
//! line produces. It contains no code.
//!
//! # Lines and Depth
//!
//! Input is a sequence of lines without terminators. A line's depth is its
//! count of leading spaces divided by the configured indent width (default 2).
//!
//! - Blank lines are skipped and never open or close a scope
//! - Tabs inside indentation are rejected
//! - A space count that is not a multiple of the width is rejected
//! - A line may sit at the depth of the innermost open scope's children, or
//!   shallower; shallower lines close scopes first
//!
//! # Root
//!
//! The first non-blank line decides what the document is:
//!
//! | First line | Root | Events |
//! |------------|------|--------|
//! | `[N]: ...` / `[N]:` | array | `startArray` … `endArray` |
//! | `key: ...`, `key:`, `key[N]: ...` | object | `startObject` … `endObject` |
//! | anything else | single primitive | one `scalar` |
//! | (no lines) | empty object | `startObject`, `endObject` |
//!
//! # Objects
//!
//! ```text
//! user:
//!   name: Alice
//!   active: true
//! ```
//!
//! `key: value` emits `key` then `scalar`. `key:` with nothing after the colon
//! emits `key` then `startObject`; its fields follow one level deeper, and the
//! object closes (`endObject`) at the first line that is not deeper.
//!
//! Keys are bare text up to the first `:` or `[`, or a quoted string:
//! `"user id": 7`.
//!
//! # Scalars
//!
//! Quoted tokens (`"..."`) are always strings. Escapes: `\"`, `\\`, `\n`, `\r`,
//! `\t`, `\b`, `\f`, `\0`, `\uXXXX`.
//!
//! Bare tokens are classified by [`literal`](crate::literal):
//!
//! | Token | Value |
//! |-------|-------|
//! | `true` / `false` | Boolean |
//! | `null` | Null |
//! | `42`, `-0.5`, `1e10`, `0` | Number (`-0` reads as `0`) |
//! | `05`, `-007` | String (leading zeros) |
//! | empty | empty String |
//! | anything else | String |
//!
//! # Array Headers
//!
//! ```text
//! key[#N<marker>]{field1,field2}: inline values
//! ```
//!
//! - `#` before the length is optional and ignored
//! - `<marker>` is `|` or a tab, overriding the configured delimiter for this array
//! - `{...}` declares a tabular array
//! - The header emits `key` (when keyed) and `startArray` with the declared length
//!
//! ## Inline Arrays
//!
//! ```text
//! tags[3]: admin,ops,dev
//! ```
//!
//! One `scalar` per value, then `endArray`, all on this line. The number of
//! values must equal `N`. `key[0]:` is an empty array.
//!
//! ## List Arrays
//!
//! ```text
//! items[2]:
//!   - name: first
//!     data:
//!       key: value1
//!   - 42
//! ```
//!
//! Each `- ` line one level deeper is one element:
//!
//! - `- value` → `scalar`
//! - `-` → empty object
//! - `- key: ...` → `startObject`; the first field is on the marker line,
//!   further fields one level deeper than the marker
//! - `- [M]: a,b` or `- [M]:` → nested array element
//!
//! ## Tabular Arrays
//!
//! ```text
//! users[2]{id,name}:
//!   1,Alice
//!   2,Bob
//! ```
//!
//! Each row one level deeper is one element, emitted as `startObject`, a
//! `key`/`scalar` pair per field, `endObject`. A row must have exactly one
//! value per field. Delimiters inside quoted values do not split.
//!
//! # Lengths
//!
//! Declared lengths are checked against the elements actually produced:
//!
//! - One element too many is reported on the line that adds it
//! - Too few is reported when the array's scope closes, by dedent or at end of input
//!
//! Either way the array's `endArray` is never emitted.
//!
//! # Conformance
//!
//! The notation follows <https://github.com/johannschopplich/toon>.

// This module contains only documentation; no implementation code
