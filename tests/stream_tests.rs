#![cfg(feature = "async")]

use futures::channel::mpsc;
use futures::{stream, StreamExt};
use std::time::Duration;
use tokio::time::{sleep, timeout};
use toon_stream::{decode_all, decode_stream, DecodeOptions, Error, Event, Value};

const NESTED: [&str; 7] = [
    "items[2]:",
    "  - name: first",
    "    data:",
    "      key: value1",
    "  - name: second",
    "    data:",
    "      key: value2",
];

/// A line source that waits before handing out each line.
fn slow_lines(
    lines: Vec<&'static str>,
    delay: Duration,
) -> impl stream::Stream<Item = String> + Unpin {
    Box::pin(stream::unfold(lines.into_iter(), move |mut lines| async move {
        match lines.next() {
            Some(line) => {
                sleep(delay).await;
                Some((line.to_string(), lines))
            }
            None => None,
        }
    }))
}

#[tokio::test]
async fn test_delayed_lines_match_eager_decode() {
    let expected = decode_all(NESTED, DecodeOptions::default()).unwrap();

    let streamed: Vec<Event> = decode_stream(
        slow_lines(NESTED.to_vec(), Duration::from_millis(5)),
        DecodeOptions::default(),
    )
    .map(|event| event.unwrap())
    .collect()
    .await;

    assert_eq!(streamed, expected);
    assert_eq!(streamed.len(), 23);
}

#[tokio::test]
async fn test_events_arrive_before_next_line() {
    let (tx, rx) = mpsc::unbounded::<String>();
    let mut events = decode_stream(rx, DecodeOptions::default());

    tx.unbounded_send("items[2]:".to_string()).unwrap();
    assert_eq!(events.next().await, Some(Ok(Event::StartObject)));
    assert_eq!(
        events.next().await,
        Some(Ok(Event::Key {
            key: "items".to_string()
        }))
    );
    assert_eq!(
        events.next().await,
        Some(Ok(Event::StartArray { length: 2 }))
    );

    // nothing more can be known until another line arrives
    assert!(timeout(Duration::from_millis(20), events.next())
        .await
        .is_err());

    tx.unbounded_send("  - 05".to_string()).unwrap();
    assert_eq!(
        events.next().await,
        Some(Ok(Event::Scalar {
            value: Value::from("05")
        }))
    );

    tx.unbounded_send("  - -0".to_string()).unwrap();
    assert_eq!(
        events.next().await,
        Some(Ok(Event::Scalar {
            value: Value::Number(0.0)
        }))
    );

    drop(tx);
    assert_eq!(events.next().await, Some(Ok(Event::EndArray)));
    assert_eq!(events.next().await, Some(Ok(Event::EndObject)));
    assert_eq!(events.next().await, None);
}

#[tokio::test]
async fn test_stream_error_is_last_item() {
    let lines = slow_lines(vec!["a:", "  b[3]: 1,2", "c: 1"], Duration::from_millis(1));
    let items: Vec<_> = decode_stream(lines, DecodeOptions::default())
        .collect()
        .await;

    assert_eq!(items.len(), 6);
    assert_eq!(items[4], Ok(Event::StartArray { length: 3 }));
    assert_eq!(items[5], Err(Error::length_mismatch(2, 3, 2)));
}

#[tokio::test]
async fn test_underfilled_array_at_end_of_stream() {
    let lines = slow_lines(vec!["rows[2]{id}:", "  1"], Duration::from_millis(1));
    let items: Vec<_> = decode_stream(lines, DecodeOptions::default())
        .collect()
        .await;

    assert!(matches!(
        items.last(),
        Some(Err(Error::ArrayLengthMismatch {
            expected: 2,
            found: 1,
            ..
        }))
    ));
    assert!(!items.iter().any(|item| *item == Ok(Event::EndArray)));
}

#[tokio::test]
async fn test_root_forms_over_stream() {
    let events: Vec<_> = decode_stream(stream::iter(["[2]: x,y"]), DecodeOptions::default())
        .collect()
        .await;
    assert_eq!(events.len(), 4);

    let events: Vec<_> = decode_stream(stream::iter(["42"]), DecodeOptions::default())
        .collect()
        .await;
    assert_eq!(
        events,
        vec![Ok(Event::Scalar {
            value: Value::Number(42.0)
        })]
    );

    let events: Vec<_> = decode_stream(stream::iter(Vec::<String>::new()), DecodeOptions::default())
        .collect()
        .await;
    assert_eq!(events, vec![Ok(Event::StartObject), Ok(Event::EndObject)]);
}
