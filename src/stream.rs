//! Async event stream over an incrementally arriving source of lines.
//!
//! [`EventStream`] adapts any [`Stream`] of lines into a [`Stream`] of
//! [`Event`]s. It is runtime-agnostic: the only suspension point is polling
//! the source for its next line, and that happens only after every event the
//! previous lines determined has been yielded. A consumer therefore sees
//! events as soon as the line that causes them has arrived.
//!
//! For the same lines, the stream yields exactly what
//! [`decode_all`](crate::decode_all) returns, however the lines are spread out
//! in time.
//!
//! ## Examples
//!
//! ```rust
//! use futures::executor::block_on;
//! use futures::{stream, StreamExt};
//! use toon_stream::{decode_stream, DecodeOptions, Event};
//!
//! let lines = stream::iter(vec!["items[2]:", "  - a", "  - b"]);
//! let events: Vec<Event> = block_on(
//!     decode_stream(lines, DecodeOptions::default())
//!         .map(|event| event.unwrap())
//!         .collect(),
//! );
//! assert_eq!(events.iter().filter(|e| **e == Event::EndArray).count(), 1);
//! ```
//!
//! Sources that are not `Unpin` can be pinned first with `Box::pin`.

use crate::options::DecodeOptions;
use crate::{Decoder, Error, Event, Result};
use core::pin::Pin;
use core::task::{Context, Poll};
use futures_core::stream::{FusedStream, Stream};
use futures_core::ready;

/// A stream of decoded events, created by [`decode_stream`](crate::decode_stream).
///
/// Yields `Err` at most once, after any events determined before the error;
/// the stream ends right after it.
#[derive(Debug)]
pub struct EventStream<S> {
    lines: S,
    decoder: Decoder,
    error: Option<Error>,
    done: bool,
}

impl<S> EventStream<S> {
    pub(crate) fn new(lines: S, options: DecodeOptions) -> Self {
        EventStream {
            lines,
            decoder: Decoder::new(options),
            error: None,
            done: false,
        }
    }

    /// The decoder driven by this stream.
    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    /// Consumes the stream, returning the underlying line source.
    pub fn into_inner(self) -> S {
        self.lines
    }
}

impl<S, L> Stream for EventStream<S>
where
    S: Stream<Item = L> + Unpin,
    L: AsRef<str>,
{
    type Item = Result<Event>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            if let Some(event) = this.decoder.next_event() {
                return Poll::Ready(Some(Ok(event)));
            }
            if let Some(err) = this.error.take() {
                return Poll::Ready(Some(Err(err)));
            }
            if this.done {
                return Poll::Ready(None);
            }

            // suspension point: nothing is pending, ask for the next line
            let step = match ready!(Pin::new(&mut this.lines).poll_next(cx)) {
                Some(line) => this.decoder.feed_line(line.as_ref()),
                None => {
                    this.done = true;
                    this.decoder.finish()
                }
            };
            if let Err(err) = step {
                this.done = true;
                this.error = Some(err);
            }
        }
    }
}

impl<S, L> FusedStream for EventStream<S>
where
    S: Stream<Item = L> + Unpin,
    L: AsRef<str>,
{
    fn is_terminated(&self) -> bool {
        self.done && self.error.is_none() && self.decoder.pending_len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::{stream, StreamExt};

    #[test]
    fn test_stream_matches_iterator() {
        let lines = vec!["user:", "  name: Ada", "  tags[2]: a,b", "id: 05"];
        let expected: Vec<Event> =
            crate::decode_all(lines.iter(), DecodeOptions::default()).unwrap();

        let streamed: Vec<Event> = block_on(
            EventStream::new(stream::iter(lines), DecodeOptions::default())
                .map(|e| e.unwrap())
                .collect(),
        );
        assert_eq!(streamed, expected);
    }

    #[test]
    fn test_stream_ends_after_error() {
        let lines = stream::iter(vec!["nums[2]: 1", "more: 1"]);
        let items: Vec<Result<Event>> =
            block_on(EventStream::new(lines, DecodeOptions::default()).collect());
        assert_eq!(items.len(), 4);
        assert_eq!(items[2], Ok(Event::StartArray { length: 2 }));
        assert!(matches!(
            items[3],
            Err(Error::ArrayLengthMismatch {
                expected: 2,
                found: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_fused_after_completion() {
        let mut events = EventStream::new(stream::iter(vec!["a: 1"]), DecodeOptions::default());
        assert!(!events.is_terminated());
        while block_on(events.next()).is_some() {}
        assert!(events.is_terminated());
    }
}
