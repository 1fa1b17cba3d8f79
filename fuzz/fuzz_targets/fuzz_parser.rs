#![no_main]

use jsonrill::ValueStream;
use libfuzzer_sys::fuzz_target;

const HEADER: usize = 4; // 4-byte split seed

fn convert(v: &serde_json::Value) -> jsonrill::Value {
    use jsonrill::Value;
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(*b),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) => Value::Number(f),
            None => Value::Null,
        },
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => Value::Array(items.iter().map(convert).collect()),
        serde_json::Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), convert(v)))
                .collect(),
        ),
    }
}

fn run(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }
    let split_seed = u32::from_le_bytes(data[..HEADER].try_into().unwrap()) as u64;
    let data = &data[HEADER..];
    if data.is_empty() {
        return;
    }

    let text = String::from_utf8_lossy(data).into_owned();
    let chunks = split_into_safe_chunks(&text, split_seed);

    let mut stream = ValueStream::new();
    let mut errored = false;
    for chunk in &chunks {
        stream.feed(chunk);
        for snapshot in stream.by_ref() {
            if snapshot.is_err() {
                errored = true;
            }
        }
        if errored {
            break;
        }
    }
    let ours = stream.finish().into_value();

    // When both parsers accept the document they must agree exactly. A
    // serde-side failure is not comparable: it rejects what we saturate
    // (1e999) and depth-limits what we stream.
    if let Ok(theirs) = serde_json::from_str::<serde_json::Value>(&text) {
        if let Ok(ours) = ours {
            assert_eq!(ours, convert(&theirs));
        }
    }
}

fuzz_target!(|data: &[u8]| run(data));

/// Split a UTF-8 `&str` into boundary-safe chunks using a deterministic
/// seed to generate splits.
///
/// * Each chunk is at least one byte.
/// * Every slice ends on a valid UTF-8 boundary, so slicing cannot panic.
fn split_into_safe_chunks(serialized: &str, split_seed: u64) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let len = serialized.len();

    while start < len {
        let remaining = len - start;
        let mut size = (split_seed as usize % remaining) + 1;
        while start + size < len && !serialized.is_char_boundary(start + size) {
            size += 1;
        }
        chunks.push(&serialized[start..start + size]);
        start += size;
    }

    chunks
}
