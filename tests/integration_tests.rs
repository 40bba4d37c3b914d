use toon_stream::{
    decode_all, decode_lines, decode_str, DecodeOptions, Delimiter, Error, Event, Value,
};

fn decode(input: &str) -> Vec<Event> {
    decode_str(input, DecodeOptions::default()).unwrap()
}

fn key(k: &str) -> Event {
    Event::Key { key: k.to_string() }
}

fn scalar(v: impl Into<Value>) -> Event {
    Event::Scalar { value: v.into() }
}

fn start_array(length: usize) -> Event {
    Event::StartArray { length }
}

#[test]
fn test_value_negative_leading_zero() {
    assert_eq!(
        decode("value: -05"),
        vec![Event::StartObject, key("value"), scalar("-05"), Event::EndObject]
    );
}

#[test]
fn test_value_negative_zero() {
    assert_eq!(
        decode("value: -0"),
        vec![
            Event::StartObject,
            key("value"),
            scalar(0.0),
            Event::EndObject
        ]
    );
}

#[test]
fn test_value_negative_decimal() {
    assert_eq!(decode("value: -0.5")[2], scalar(-0.5));
}

#[test]
fn test_inline_array_mixed_zeros() {
    assert_eq!(
        decode("nums[4]: 05,-05,-0,-0.5"),
        vec![
            Event::StartObject,
            key("nums"),
            start_array(4),
            scalar("05"),
            scalar("-05"),
            scalar(0.0),
            scalar(-0.5),
            Event::EndArray,
            Event::EndObject,
        ]
    );
}

#[test]
fn test_nested_list_items() {
    let input = "items[2]:
  - name: first
    data:
      key: value1
  - name: second
    data:
      key: value2";

    assert_eq!(
        decode(input),
        vec![
            Event::StartObject,
            key("items"),
            start_array(2),
            Event::StartObject,
            key("name"),
            scalar("first"),
            key("data"),
            Event::StartObject,
            key("key"),
            scalar("value1"),
            Event::EndObject,
            Event::EndObject,
            Event::StartObject,
            key("name"),
            scalar("second"),
            key("data"),
            Event::StartObject,
            key("key"),
            scalar("value2"),
            Event::EndObject,
            Event::EndObject,
            Event::EndArray,
            Event::EndObject,
        ]
    );
}

#[test]
fn test_tabular_array() {
    let input = "users[2]{id,name,active}:
  1,Alice,true
  2,\"Bob, Jr.\",false
count: 2";

    assert_eq!(
        decode(input),
        vec![
            Event::StartObject,
            key("users"),
            start_array(2),
            Event::StartObject,
            key("id"),
            scalar(1),
            key("name"),
            scalar("Alice"),
            key("active"),
            scalar(true),
            Event::EndObject,
            Event::StartObject,
            key("id"),
            scalar(2),
            key("name"),
            scalar("Bob, Jr."),
            key("active"),
            scalar(false),
            Event::EndObject,
            Event::EndArray,
            key("count"),
            scalar(2),
            Event::EndObject,
        ]
    );
}

#[test]
fn test_pipe_delimited_header() {
    let events = decode("rows[2|]{a|b}:\n  1|x,y\n  2|z");
    assert_eq!(events[7], scalar("x,y"));
    assert_eq!(events.len(), 17);
}

#[test]
fn test_tab_delimited_inline() {
    let events = decode("tags[3\t]: a b\tc\td");
    assert_eq!(
        &events[3..6],
        &[scalar("a b"), scalar("c"), scalar("d")]
    );
}

#[test]
fn test_length_marker() {
    let events = decode("tags[#2]: rust,toon");
    assert_eq!(events[2], start_array(2));
    assert_eq!(events[4], scalar("toon"));
}

#[test]
fn test_root_inline_array() {
    assert_eq!(
        decode("[3]: 1,null,x"),
        vec![
            start_array(3),
            scalar(1),
            scalar(Value::Null),
            scalar("x"),
            Event::EndArray
        ]
    );
}

#[test]
fn test_root_list_array() {
    let input = "[3]:
  - 1
  - a: 1
    b: 2
  -";
    assert_eq!(
        decode(input),
        vec![
            start_array(3),
            scalar(1),
            Event::StartObject,
            key("a"),
            scalar(1),
            key("b"),
            scalar(2),
            Event::EndObject,
            Event::StartObject,
            Event::EndObject,
            Event::EndArray,
        ]
    );
}

#[test]
fn test_root_primitive() {
    assert_eq!(decode("hello world"), vec![scalar("hello world")]);
    assert_eq!(decode("42"), vec![scalar(42)]);
    assert_eq!(decode("\"true\""), vec![scalar("true")]);
}

#[test]
fn test_root_primitive_rejects_second_line() {
    let err = decode_str("hello\nworld", DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnexpectedContent { line: 2, .. }));
}

#[test]
fn test_empty_document_is_empty_object() {
    assert_eq!(decode(""), vec![Event::StartObject, Event::EndObject]);
}

#[test]
fn test_empty_arrays() {
    assert_eq!(
        decode("a[0]:\nb: 1"),
        vec![
            Event::StartObject,
            key("a"),
            start_array(0),
            Event::EndArray,
            key("b"),
            scalar(1),
            Event::EndObject,
        ]
    );
}

#[test]
fn test_nested_arrays_in_list_items() {
    let input = "matrix[2]:
  - [2]: 1,2
  - [1]:
    - x";
    assert_eq!(
        decode(input),
        vec![
            Event::StartObject,
            key("matrix"),
            start_array(2),
            start_array(2),
            scalar(1),
            scalar(2),
            Event::EndArray,
            start_array(1),
            scalar("x"),
            Event::EndArray,
            Event::EndArray,
            Event::EndObject,
        ]
    );
}

#[test]
fn test_list_item_with_array_first_field() {
    let input = "orders[1]:
  - lines[2]:
      - a
      - b
    total: 2";
    assert_eq!(
        decode(input),
        vec![
            Event::StartObject,
            key("orders"),
            start_array(1),
            Event::StartObject,
            key("lines"),
            start_array(2),
            scalar("a"),
            scalar("b"),
            Event::EndArray,
            key("total"),
            scalar(2),
            Event::EndObject,
            Event::EndArray,
            Event::EndObject,
        ]
    );
}

#[test]
fn test_quoted_keys_and_values() {
    let events = decode("\"full name\": \"Ada \\\"the\\\" Countess\"\n\"a:b\": \"\"");
    assert_eq!(events[1], key("full name"));
    assert_eq!(events[2], scalar("Ada \"the\" Countess"));
    assert_eq!(events[3], key("a:b"));
    assert_eq!(events[4], scalar(""));
}

#[test]
fn test_blank_lines_are_ignored() {
    assert_eq!(decode("a:\n\n  b: 1\n\nc: 2"), decode("a:\n  b: 1\nc: 2"));
}

#[test]
fn test_inline_array_too_long() {
    let err = decode_str("nums[2]: 1,2,3", DecodeOptions::default()).unwrap_err();
    assert_eq!(err, Error::length_mismatch(1, 2, 3));
}

#[test]
fn test_list_array_too_short_at_dedent() {
    let err = decode_str("a[2]:\n  - x\nb: 1", DecodeOptions::default()).unwrap_err();
    assert_eq!(err, Error::length_mismatch(3, 2, 1));
}

#[test]
fn test_tabular_array_too_long() {
    let err = decode_str("t[1]{a}:\n  1\n  2", DecodeOptions::default()).unwrap_err();
    assert_eq!(err, Error::length_mismatch(3, 1, 2));
}

#[test]
fn test_row_width_mismatch() {
    let err = decode_str("t[1]{a,b}:\n  1", DecodeOptions::default()).unwrap_err();
    assert_eq!(err, Error::row_width_mismatch(2, 2, 1));
}

#[test]
fn test_malformed_header() {
    let err = decode_str("a: 1\nb[2: x", DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, Error::MalformedHeader { line: 2, .. }));
}

#[test]
fn test_non_item_line_in_list_array() {
    let err = decode_str("a[1]:\n  b: 1", DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnexpectedContent { line: 2, .. }));
}

#[test]
fn test_bad_indentation() {
    let err = decode_str("a:\n   b: 1", DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnexpectedIndentation { line: 2, .. }));

    let err = decode_str("a:\n\tb: 1", DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnexpectedIndentation { line: 2, .. }));
}

#[test]
fn test_unterminated_string() {
    let err = decode_str("a: \"open", DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidString { line: 1, col: 4, .. }));
}

#[test]
fn test_content_after_root_array() {
    let err = decode_str("[1]: x\ny: 2", DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnexpectedContent { line: 2, .. }));
}

#[test]
fn test_error_stops_event_flow() {
    let items: Vec<_> = decode_lines(
        ["a[2]: 1", "b: 2", "c: 3"].iter(),
        DecodeOptions::default(),
    )
    .collect();
    assert_eq!(items.len(), 4);
    assert!(items[3].is_err());
}

#[test]
fn test_indent_width_option() {
    let options = DecodeOptions::new().with_indent(4);
    let events = decode_all(["a:", "    b: 1"], options.clone()).unwrap();
    assert_eq!(events[4], scalar(1));

    let err = decode_all(["a:", "  b: 1"], options).unwrap_err();
    assert!(matches!(err, Error::UnexpectedIndentation { .. }));
}

#[test]
fn test_configured_delimiter_applies_to_unmarked_headers() {
    let options = DecodeOptions::new().with_delimiter(Delimiter::Pipe);
    let events = decode_all(["tags[2]: a,b|c"], options).unwrap();
    assert_eq!(&events[3..5], &[scalar("a,b"), scalar("c")]);
}

#[test]
fn test_events_serialize_as_json_lines() {
    let lines: Vec<String> = decode("n[1]: 1")
        .iter()
        .map(|e| serde_json::to_string(e).unwrap())
        .collect();
    assert_eq!(
        lines,
        vec![
            r#"{"type":"startObject"}"#,
            r#"{"type":"key","key":"n"}"#,
            r#"{"type":"startArray","length":1}"#,
            r#"{"type":"scalar","value":1.0}"#,
            r#"{"type":"endArray"}"#,
            r#"{"type":"endObject"}"#,
        ]
    );
}
