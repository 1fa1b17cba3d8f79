use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{ParseError, StreamingValue, Value, ValueStream};

/// Feed all chunks, then finish, and return the final value.
pub fn parse_chunks<I, S>(chunks: I) -> Result<Value, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stream = ValueStream::new();
    for chunk in chunks {
        stream.feed(chunk.as_ref());
        for snapshot in stream.by_ref() {
            snapshot?;
        }
    }
    stream.finish().into_value()
}

/// Parse a complete document supplied as one chunk.
pub fn parse_one(text: &str) -> Result<Value, ParseError> {
    parse_chunks([text])
}

/// Collect every snapshot produced for the given chunking, including any
/// produced while finishing.
pub fn snapshots<I, S>(chunks: I) -> Result<Vec<StreamingValue>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stream = ValueStream::new();
    let mut out = Vec::new();
    for chunk in chunks {
        stream.feed(chunk.as_ref());
        for snapshot in stream.by_ref() {
            out.push(snapshot?);
        }
    }
    for snapshot in stream.finish() {
        out.push(snapshot?);
    }
    Ok(out)
}

/// Split a document into single-character chunks.
pub fn char_chunks(text: &str) -> Vec<String> {
    text.chars().map(|c| c.to_string()).collect()
}

/// Assert that `next` is a monotonic extension of `prev`:
///
/// - no value changes type,
/// - settled array elements and object entries are unchanged,
/// - only the tail of the active spine may still be growing.
///
/// Numbers are exempt while tentative; their value converges at finalization.
pub fn assert_extends(prev: &Value, next: &Value) {
    match (prev, next) {
        (Value::Array(a), Value::Array(b)) => {
            assert!(a.len() <= b.len(), "array shrank: {prev} -> {next}");
            let Some(last) = a.len().checked_sub(1) else {
                return;
            };
            for i in 0..last {
                assert_eq!(a[i], b[i], "settled element {i} changed");
            }
            assert_extends(&a[last], &b[last]);
        }
        (Value::Object(a), Value::Object(b)) => {
            assert!(a.len() <= b.len(), "object shrank: {prev} -> {next}");
            let len = a.len();
            for (i, (key, val)) in a.iter().enumerate() {
                let (next_key, next_val) = b.get_index(i).expect("committed entry present");
                assert_eq!(key, next_key, "settled key changed");
                if i + 1 == len {
                    assert_extends(val, next_val);
                } else {
                    assert_eq!(val, next_val, "settled entry {key:?} changed");
                }
            }
        }
        (Value::String(a), Value::String(b)) => {
            assert!(b.starts_with(a.as_str()), "string regressed: {a:?} -> {b:?}");
        }
        (Value::Number(_), Value::Number(_)) => {}
        (a, b) => assert_eq!(a, b, "value changed type or regressed"),
    }
}

/// Convert a `serde_json` value into ours, for batch-equivalence oracles.
pub fn from_serde(v: &serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(*b),
        serde_json::Value::Number(n) => {
            Value::Number(n.as_f64().expect("JSON numbers fit in f64"))
        }
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => Value::Array(items.iter().map(from_serde).collect()),
        serde_json::Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), from_serde(v)))
                .collect(),
        ),
    }
}
