#![allow(missing_docs)]

mod common;

use jsonrill::chunk_utils::produce_chunks;
use jsonrill::{ParseError, Value, ValueStream};
use rstest::rstest;

fn parse_chunks<'a>(chunks: impl IntoIterator<Item = &'a str>) -> Result<Value, ParseError> {
    let mut stream = ValueStream::new();
    for chunk in chunks {
        stream.feed(chunk);
        for snapshot in stream.by_ref() {
            snapshot?;
        }
    }
    stream.finish().into_value()
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(7)]
#[case(64)]
fn corpus_parses_identically_for_any_chunk_count(#[case] parts: usize) {
    let expected = common::from_serde(&serde_json::from_str(common::CORPUS).unwrap());
    let value = parse_chunks(produce_chunks(common::CORPUS, parts)).unwrap();
    assert_eq!(value, expected);
}

#[test]
fn corpus_parses_with_single_character_chunks() {
    let expected = common::from_serde(&serde_json::from_str(common::CORPUS).unwrap());
    let chunks: Vec<String> = common::CORPUS.chars().map(|c| c.to_string()).collect();
    let value = parse_chunks(chunks.iter().map(String::as_str)).unwrap();
    assert_eq!(value, expected);
}

#[test]
fn corpus_parses_from_byte_chunks() {
    let bytes = common::CORPUS.as_bytes();
    let mut stream = ValueStream::new();
    for chunk in bytes.chunks(3) {
        stream.feed_bytes(chunk);
        for snapshot in stream.by_ref() {
            snapshot.unwrap();
        }
    }
    let value = stream.finish().into_value().unwrap();
    let expected = common::from_serde(&serde_json::from_str(common::CORPUS).unwrap());
    assert_eq!(value, expected);
}

#[test]
fn small_docs_chunked_at_every_boundary() {
    for doc in common::SMALL_DOCS {
        let expected = common::from_serde(&serde_json::from_str(doc).unwrap());
        for (idx, _) in doc.char_indices().skip(1) {
            let value = parse_chunks([&doc[..idx], &doc[idx..]])
                .unwrap_or_else(|err| panic!("doc {doc:?} split at {idx}: {err}"));
            assert_eq!(value, expected, "doc {doc:?} split at {idx}");
        }
    }
}

#[test]
fn object_entry_order_matches_document_order() {
    let value = parse_chunks([common::CORPUS]).unwrap();
    let Value::Object(map) = value else {
        panic!("corpus root is an object");
    };
    let keys: Vec<_> = map.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        [
            "moderation",
            "request",
            "snippets",
            "scores",
            "flags",
            "matrix",
            "mixed",
            "unicode",
            "trailing"
        ]
    );
}
