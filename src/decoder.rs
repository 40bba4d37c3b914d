//! Streaming structural decoder.
//!
//! This module provides the [`Decoder`] state machine that turns TOON lines
//! into [`Event`]s, and the [`Events`] iterator that drives it from any
//! iterator of lines.
//!
//! ## Overview
//!
//! - **Line-granular**: every line is fully processed before the next one is
//!   requested; no decision is left pending across lines
//! - **No look-ahead**: scopes are closed when a later line dedents, or at
//!   end of input
//! - **Explicit nesting stack**: one frame per open object or array, holding
//!   the depth its children live at and, for arrays, the declared length
//! - **Fail-stop**: the first structural error poisons the decoder
//!
//! The same `Decoder` backs [`decode_all`](crate::decode_all), the lazy
//! [`Events`] iterator and the async [`EventStream`](crate::EventStream), so
//! every entry point yields an identical event sequence for the same lines.
//!
//! ## Usage
//!
//! ```rust
//! use toon_stream::{Decoder, DecodeOptions, Event, Value};
//!
//! let mut decoder = Decoder::new(DecodeOptions::default());
//! decoder.feed_line("nums[2]: 1,2").unwrap();
//!
//! // Everything the line determines is available right away
//! let events: Vec<Event> = decoder.drain_events().collect();
//! assert_eq!(events.len(), 6);
//! assert_eq!(events[5], Event::EndArray);
//!
//! decoder.finish().unwrap();
//! assert_eq!(decoder.next_event(), Some(Event::EndObject));
//! ```

use crate::options::{DecodeOptions, Delimiter};
use crate::scanner::{list_item_body, Entry, Header, LineScanner};
use crate::{Error, Event, Result};
use std::collections::vec_deque::{self, VecDeque};
use std::iter::FusedIterator;
use tracing::{debug, trace};

#[derive(Debug)]
enum Scope {
    Object,
    /// Array whose elements are `- ` list items
    List,
    /// Array whose elements are delimited rows under a `{fields}` header
    Tabular {
        fields: Vec<String>,
        delimiter: Delimiter,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScopeKind {
    Object,
    List,
    Tabular,
}

/// One open object or array.
#[derive(Debug)]
struct Frame {
    scope: Scope,
    /// Depth at which this scope's children appear
    child_depth: usize,
    declared: Option<usize>,
    produced: usize,
}

impl Frame {
    fn object(child_depth: usize) -> Self {
        Frame {
            scope: Scope::Object,
            child_depth,
            declared: None,
            produced: 0,
        }
    }

    fn kind(&self) -> ScopeKind {
        match self.scope {
            Scope::Object => ScopeKind::Object,
            Scope::List => ScopeKind::List,
            Scope::Tabular { .. } => ScopeKind::Tabular,
        }
    }

    /// Counts one more element, failing if the declared length is exceeded.
    fn produce(&mut self, line: usize) -> Result<()> {
        if let Some(declared) = self.declared {
            if self.produced >= declared {
                return Err(Error::length_mismatch(line, declared, self.produced + 1));
            }
        }
        self.produced += 1;
        Ok(())
    }
}

/// What the document root turned out to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Root {
    Pending,
    Object,
    Array,
    Primitive,
}

/// The TOON structural decoder.
///
/// A `Decoder` owns the nesting stack and a queue of events that have been
/// determined but not yet taken. Feed it lines with [`feed_line`](Self::feed_line),
/// signal end of input with [`finish`](Self::finish), and take events with
/// [`next_event`](Self::next_event) or [`drain_events`](Self::drain_events).
///
/// Decoders hold no external resources; dropping one mid-document is always safe.
#[derive(Debug)]
pub struct Decoder {
    options: DecodeOptions,
    stack: Vec<Frame>,
    root: Root,
    line: usize,
    pending: VecDeque<Event>,
    failure: Option<Error>,
    finished: bool,
}

impl Decoder {
    #[must_use]
    pub fn new(options: DecodeOptions) -> Self {
        Decoder {
            options,
            stack: Vec::new(),
            root: Root::Pending,
            line: 0,
            pending: VecDeque::new(),
            failure: None,
            finished: false,
        }
    }

    /// Consumes one line (without its line terminator).
    ///
    /// All events the line determines are queued before this returns.
    ///
    /// # Errors
    ///
    /// Returns the structural error the line exposes. Events queued before the
    /// error stay available; every later call returns the same error.
    pub fn feed_line(&mut self, raw: &str) -> Result<()> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.line += 1;
        let result = if self.finished {
            Err(LineScanner::new(raw, self.line).unexpected("input after end of document"))
        } else {
            self.process_line(raw)
        };
        result.map_err(|err| self.poison(err))
    }

    /// Signals end of input, closing every open scope.
    ///
    /// Calling `finish` again after success is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArrayLengthMismatch`] if an open array never reached its
    /// declared length.
    pub fn finish(&mut self) -> Result<()> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        if self.finished {
            return Ok(());
        }
        self.close_all().map_err(|err| self.poison(err))?;
        self.finished = true;
        debug!(lines = self.line, "end of input");
        Ok(())
    }

    /// Takes the next determined event, if any.
    pub fn next_event(&mut self) -> Option<Event> {
        self.pending.pop_front()
    }

    /// Takes every determined event.
    pub fn drain_events(&mut self) -> vec_deque::Drain<'_, Event> {
        self.pending.drain(..)
    }

    /// Number of currently open scopes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Number of lines fed so far, including blank ones.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line
    }

    pub(crate) fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` once [`finish`](Self::finish) has succeeded.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn poison(&mut self, err: Error) -> Error {
        debug!(line = self.line, error = %err, "decode failed");
        self.failure = Some(err.clone());
        err
    }

    fn emit(&mut self, event: Event) {
        self.pending.push_back(event);
    }

    fn process_line(&mut self, raw: &str) -> Result<()> {
        let scanner = LineScanner::new(raw, self.line);
        let (depth, content) = match scanner.measure(self.options.indent_width())? {
            Some(measured) => measured,
            None => return Ok(()),
        };

        match self.root {
            Root::Pending => return self.open_root(&scanner, depth, content),
            Root::Primitive => {
                return Err(scanner.unexpected("a primitive document holds a single value"))
            }
            Root::Object | Root::Array => {}
        }

        self.close_scopes(depth)?;

        let (child_depth, kind) = match self.stack.last() {
            Some(frame) => (frame.child_depth, frame.kind()),
            None => return Err(scanner.unexpected("content after the end of the root array")),
        };
        if depth > child_depth {
            return Err(scanner.indentation(&format!(
                "expected depth {} or less, found {}",
                child_depth, depth
            )));
        }

        match kind {
            ScopeKind::Object => {
                if list_item_body(content).is_some() {
                    return Err(scanner.unexpected("list item outside of an array"));
                }
                let entry = scanner.entry(content, self.options.delimiter)?;
                self.field(&scanner, entry, depth)
            }
            ScopeKind::List => self.list_item(&scanner, content, depth),
            ScopeKind::Tabular => self.row(&scanner, content),
        }
    }

    /// The first content line decides between object, array and primitive roots.
    fn open_root(&mut self, scanner: &LineScanner<'_>, depth: usize, content: &str) -> Result<()> {
        if depth != 0 {
            return Err(scanner.indentation("the first line must not be indented"));
        }
        if list_item_body(content).is_some() {
            return Err(scanner.unexpected("list item outside of an array"));
        }

        match scanner.entry(content, self.options.delimiter)? {
            Entry::Header(header) if header.key.is_none() => {
                debug!("root array");
                self.root = Root::Array;
                self.emit(Event::StartArray {
                    length: header.length,
                });
                self.open_array(scanner, header, 1)
            }
            Entry::Bare(token) => {
                debug!("root primitive");
                self.root = Root::Primitive;
                let value = scanner.value(token, &self.options.literals)?;
                self.emit(Event::scalar(value));
                Ok(())
            }
            entry => {
                debug!("root object");
                self.root = Root::Object;
                self.emit(Event::StartObject);
                self.stack.push(Frame::object(0));
                self.field(scanner, entry, 0)
            }
        }
    }

    /// Handles one `key: ...` entry inside an object whose fields sit at `depth`.
    fn field(&mut self, scanner: &LineScanner<'_>, entry: Entry<'_>, depth: usize) -> Result<()> {
        match entry {
            Entry::Field { key, value } => {
                self.emit(Event::key(key));
                if value.is_empty() {
                    self.emit(Event::StartObject);
                    self.stack.push(Frame::object(depth + 1));
                    trace!(line = self.line, depth, "open object");
                } else {
                    let value = scanner.value(value, &self.options.literals)?;
                    self.emit(Event::scalar(value));
                }
                Ok(())
            }
            Entry::Header(Header { key: None, .. }) => {
                Err(scanner.malformed("array header inside an object needs a key"))
            }
            Entry::Header(mut header) => {
                if let Some(key) = header.key.take() {
                    self.emit(Event::key(key));
                }
                self.emit(Event::StartArray {
                    length: header.length,
                });
                self.open_array(scanner, header, depth + 1)
            }
            Entry::Bare(_) => Err(scanner.malformed("missing ':' after key")),
        }
    }

    /// Finishes an inline or empty array on the spot, otherwise pushes a frame
    /// whose elements will arrive at `child_depth`.
    fn open_array(
        &mut self,
        scanner: &LineScanner<'_>,
        header: Header<'_>,
        child_depth: usize,
    ) -> Result<()> {
        if !header.inline.is_empty() {
            if header.fields.is_some() {
                return Err(scanner.malformed("tabular header cannot carry inline values"));
            }
            let cells = scanner.split(header.inline, header.delimiter);
            if cells.len() != header.length {
                return Err(Error::length_mismatch(
                    scanner.number(),
                    header.length,
                    cells.len(),
                ));
            }
            let values = cells
                .into_iter()
                .map(|cell| scanner.value(cell, &self.options.literals))
                .collect::<Result<Vec<_>>>()?;
            self.pending.extend(values.into_iter().map(Event::scalar));
            self.emit(Event::EndArray);
            return Ok(());
        }

        if header.length == 0 {
            self.emit(Event::EndArray);
            return Ok(());
        }

        let scope = match header.fields {
            Some(fields) => Scope::Tabular {
                fields,
                delimiter: header.delimiter,
            },
            None => Scope::List,
        };
        trace!(line = self.line, child_depth, length = header.length, "open array");
        self.stack.push(Frame {
            scope,
            child_depth,
            declared: Some(header.length),
            produced: 0,
        });
        Ok(())
    }

    /// Handles one `- ...` element of the list array on top of the stack.
    fn list_item(&mut self, scanner: &LineScanner<'_>, content: &str, depth: usize) -> Result<()> {
        let body = list_item_body(content)
            .ok_or_else(|| scanner.unexpected("expected a '- ' list item"))?;
        if let Some(frame) = self.stack.last_mut() {
            frame.produce(self.line)?;
        }

        if body.is_empty() {
            self.emit(Event::StartObject);
            self.emit(Event::EndObject);
            return Ok(());
        }

        match scanner.entry(body, self.options.delimiter)? {
            Entry::Header(header) if header.key.is_none() => {
                self.emit(Event::StartArray {
                    length: header.length,
                });
                self.open_array(scanner, header, depth + 1)
            }
            Entry::Bare(token) => {
                let value = scanner.value(token, &self.options.literals)?;
                self.emit(Event::scalar(value));
                Ok(())
            }
            entry => {
                // first field shares the marker line, the rest sit one level deeper
                self.emit(Event::StartObject);
                self.stack.push(Frame::object(depth + 1));
                trace!(line = self.line, depth, "open list item object");
                self.field(scanner, entry, depth + 1)
            }
        }
    }

    /// Handles one row of the tabular array on top of the stack.
    fn row(&mut self, scanner: &LineScanner<'_>, content: &str) -> Result<()> {
        let Decoder {
            stack,
            pending,
            options,
            line,
            ..
        } = self;
        let frame = match stack.last_mut() {
            Some(frame) => frame,
            None => return Err(Error::unbalanced(*line, "no open tabular array")),
        };
        frame.produce(*line)?;

        let (fields, delimiter) = match &frame.scope {
            Scope::Tabular { fields, delimiter } => (fields, *delimiter),
            _ => return Err(Error::unbalanced(*line, "expected an open tabular array")),
        };
        let cells = scanner.split(content, delimiter);
        if cells.len() != fields.len() {
            return Err(Error::row_width_mismatch(*line, fields.len(), cells.len()));
        }
        let values = cells
            .into_iter()
            .map(|cell| scanner.value(cell, &options.literals))
            .collect::<Result<Vec<_>>>()?;

        pending.push_back(Event::StartObject);
        for (field, value) in fields.iter().zip(values) {
            pending.push_back(Event::key(field.as_str()));
            pending.push_back(Event::scalar(value));
        }
        pending.push_back(Event::EndObject);
        Ok(())
    }

    /// Closes every scope whose children live deeper than `depth`, deepest first.
    fn close_scopes(&mut self, depth: usize) -> Result<()> {
        while self
            .stack
            .last()
            .map_or(false, |frame| frame.child_depth > depth)
        {
            if let Some(frame) = self.stack.pop() {
                self.close(frame)?;
            }
        }
        Ok(())
    }

    fn close_all(&mut self) -> Result<()> {
        if self.root == Root::Pending {
            debug!("empty document");
            self.root = Root::Object;
            self.emit(Event::StartObject);
            self.emit(Event::EndObject);
            return Ok(());
        }

        while let Some(frame) = self.stack.pop() {
            if let Some(parent) = self.stack.last() {
                if parent.child_depth >= frame.child_depth {
                    return Err(Error::unbalanced(
                        self.line,
                        "open scopes are not strictly nested by depth",
                    ));
                }
            }
            self.close(frame)?;
        }
        Ok(())
    }

    fn close(&mut self, frame: Frame) -> Result<()> {
        match frame.scope {
            Scope::Object => {
                trace!(line = self.line, child_depth = frame.child_depth, "close object");
                self.emit(Event::EndObject);
            }
            Scope::List | Scope::Tabular { .. } => {
                if let Some(declared) = frame.declared {
                    if frame.produced != declared {
                        return Err(Error::length_mismatch(self.line, declared, frame.produced));
                    }
                }
                trace!(line = self.line, child_depth = frame.child_depth, "close array");
                self.emit(Event::EndArray);
            }
        }
        Ok(())
    }
}

/// Lazy, synchronous event iterator over a source of lines.
///
/// A new line is pulled from the source only after every event of the
/// previous lines has been yielded. After an error is yielded the iterator
/// is exhausted.
///
/// Created by [`decode_lines`](crate::decode_lines).
#[derive(Debug)]
pub struct Events<I> {
    lines: I,
    decoder: Decoder,
    error: Option<Error>,
    done: bool,
}

impl<I> Events<I> {
    pub(crate) fn new(lines: I, options: DecodeOptions) -> Self {
        Events {
            lines,
            decoder: Decoder::new(options),
            error: None,
            done: false,
        }
    }

    /// The decoder driven by this iterator.
    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }
}

impl<I> Iterator for Events<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(event) = self.decoder.next_event() {
                return Some(Ok(event));
            }
            if let Some(err) = self.error.take() {
                return Some(Err(err));
            }
            if self.done {
                return None;
            }

            let step = match self.lines.next() {
                Some(line) => self.decoder.feed_line(line.as_ref()),
                None => {
                    self.done = true;
                    self.decoder.finish()
                }
            };
            if let Err(err) = step {
                self.done = true;
                self.error = Some(err);
            }
        }
    }
}

impl<I> FusedIterator for Events<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
}
