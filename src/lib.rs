//! # toon_stream
//!
//! A streaming, event-based decoder for the TOON (Token-Oriented Object Notation) format.
//!
//! ## What is TOON?
//!
//! TOON is a compact, indentation-based notation for JSON-shaped data designed for
//! efficient communication with Large Language Models (LLMs). Arrays declare their
//! length up front (`tags[3]: a,b,c`) and homogeneous object arrays collapse into
//! tables (`users[2]{id,name}:`).
//!
//! ## What does this crate do?
//!
//! It turns TOON lines into a flat sequence of structural [`Event`]s:
//! object and array boundaries, keys, and classified scalars. It works the same
//! whether the whole document is available up front or lines trickle in one at
//! a time from an async source.
//!
//! ## Key Features
//!
//! - **Line-at-a-time**: every line is fully decoded before the next one is requested
//! - **Identical output**: eager, iterator and async decoding yield the same events
//! - **Strict lengths**: declared `[N]` lengths are checked, never patched
//! - **Faithful literals**: `05` stays a string, `-0` and `-0.5` are numbers
//! - **No Unsafe Code**: Written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! toon_stream = "0.1"
//! ```
//!
//! ### Decoding a complete document
//!
//! ```rust
//! use toon_stream::{decode_str, DecodeOptions, Event, Value};
//!
//! let events = decode_str("nums[4]: 05,-05,-0,-0.5", DecodeOptions::default()).unwrap();
//! assert_eq!(
//!     events,
//!     vec![
//!         Event::StartObject,
//!         Event::Key { key: "nums".to_string() },
//!         Event::StartArray { length: 4 },
//!         Event::Scalar { value: Value::from("05") },
//!         Event::Scalar { value: Value::from("-05") },
//!         Event::Scalar { value: Value::Number(0.0) },
//!         Event::Scalar { value: Value::Number(-0.5) },
//!         Event::EndArray,
//!         Event::EndObject,
//!     ]
//! );
//! ```
//!
//! ### Pulling events lazily
//!
//! ```rust
//! use toon_stream::{decode_lines, DecodeOptions, Event};
//!
//! let lines = ["items[2]:", "  - name: first", "  - name: second"];
//! let mut events = decode_lines(lines.iter(), DecodeOptions::default());
//!
//! assert_eq!(events.next(), Some(Ok(Event::StartObject)));
//! // only the first line has been read so far
//! assert_eq!(events.decoder().line_number(), 1);
//! ```
//!
//! ### Decoding an async line source
//!
//! ```rust
//! # #[cfg(feature = "async")]
//! # {
//! use futures::{executor::block_on, stream, StreamExt};
//! use toon_stream::{decode_stream, DecodeOptions};
//!
//! let lines = stream::iter(vec!["a: 1".to_string(), "b: true".to_string()]);
//! let count = block_on(decode_stream(lines, DecodeOptions::default()).count());
//! assert_eq!(count, 6);
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - **`async`** (default): [`EventStream`] and [`decode_stream`] over
//!   [`futures_core::Stream`] sources
//!
//! ## Format Specification
//!
//! See [`format`] for the notation as this crate decodes it, and
//! <https://github.com/johannschopplich/toon> for the upstream format.

pub mod decoder;
pub mod error;
pub mod event;
pub mod format;
pub mod literal;
pub mod options;
mod scanner;
#[cfg(feature = "async")]
pub mod stream;

pub use decoder::{Decoder, Events};
pub use error::{Error, Result};
pub use event::{Event, Value};
pub use literal::{classify, LiteralKind, LiteralSpellings};
pub use options::{DecodeOptions, Delimiter};
#[cfg(feature = "async")]
pub use stream::EventStream;

use std::io;

/// Decodes a complete sequence of lines into events.
///
/// Equivalent to collecting [`decode_lines`]; the first error aborts decoding.
///
/// # Examples
///
/// ```rust
/// use toon_stream::{decode_all, DecodeOptions, Event};
///
/// let events = decode_all(["a:", "  b: 1"], DecodeOptions::default()).unwrap();
/// assert_eq!(events.first(), Some(&Event::StartObject));
/// assert_eq!(events.len(), 7);
/// ```
///
/// # Errors
///
/// Returns the first structural error, with the line number that exposed it.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_all<I>(lines: I, options: DecodeOptions) -> Result<Vec<Event>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    decode_lines(lines, options).collect()
}

/// Creates a lazy iterator of events over a source of lines.
///
/// Lines are pulled one at a time, and only once every event of the previous
/// lines has been yielded.
pub fn decode_lines<I>(lines: I, options: DecodeOptions) -> Events<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Events::new(lines.into_iter(), options)
}

/// Creates an async stream of events over a stream of lines.
///
/// # Examples
///
/// ```rust
/// use futures::{executor::block_on, stream, StreamExt};
/// use toon_stream::{decode_stream, DecodeOptions, Event};
///
/// let lines = stream::iter(["value: -0"]);
/// let mut events = decode_stream(lines, DecodeOptions::default());
/// assert_eq!(block_on(events.next()), Some(Ok(Event::StartObject)));
/// ```
#[cfg(feature = "async")]
pub fn decode_stream<S>(lines: S, options: DecodeOptions) -> EventStream<S>
where
    S: futures_core::Stream + Unpin,
    S::Item: AsRef<str>,
{
    EventStream::new(lines, options)
}

/// Decodes a TOON string into events, splitting it on line terminators.
///
/// # Examples
///
/// ```rust
/// use toon_stream::{decode_str, DecodeOptions, Event, Value};
///
/// let events = decode_str("value: -05", DecodeOptions::default()).unwrap();
/// assert_eq!(events[2], Event::Scalar { value: Value::from("-05") });
/// ```
///
/// # Errors
///
/// Returns the first structural error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_str(input: &str, options: DecodeOptions) -> Result<Vec<Event>> {
    decode_all(input.lines(), options)
}

/// Decodes TOON from a buffered reader, one line at a time.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use toon_stream::{decode_reader, DecodeOptions};
///
/// let events = decode_reader(Cursor::new("a: 1\r\nb: 2\r\n"), DecodeOptions::default()).unwrap();
/// assert_eq!(events.len(), 6);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, or the first structural error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_reader<R>(reader: R, options: DecodeOptions) -> Result<Vec<Event>>
where
    R: io::BufRead,
{
    let mut decoder = Decoder::new(options);
    let mut events = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(Error::io)?;
        decoder.feed_line(&line)?;
        events.extend(decoder.drain_events());
    }
    decoder.finish()?;
    events.extend(decoder.drain_events());
    Ok(events)
}
