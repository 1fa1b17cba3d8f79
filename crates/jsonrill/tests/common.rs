#![allow(missing_docs, dead_code)]

/// A moderately complex document exercising every value shape: nested
/// objects and arrays, strings with escapes, number forms, literals, and an
/// object whose last entry keeps mutating until the very end.
pub const CORPUS: &str = r#"
{
    "moderation": {
        "decision": "allow",
        "reason": null
    },
    "request": {
        "filename": "example.rs",
        "language": "rust",
        "options": {
            "opt_level": "2",
            "features": [
                "serde",
                "tokio"
            ]
        }
    },
    "snippets": [
        "fn main() {}",
        "println!(\"hi\")"
    ],
    "scores": [1, -2.5, 0.125, 1e3, 1.5e-2, 0],
    "flags": [true, false, null],
    "matrix": [
        [
            "a"
        ]
    ],
    "mixed": [
        "s",
        {
            "k": "v"
        },
        "t",
        [
            "u"
        ],
        "end"
    ],
    "unicode": "café 😀  ",
    "trailing": {
        "status": "ok"
    }
}
"#;

/// Compact documents used for exhaustive chunking sweeps.
pub const SMALL_DOCS: &[&str] = &[
    "null",
    "true",
    "false",
    "0",
    "-0",
    "123.456e-7",
    "\"\"",
    "\"a\\nb\"",
    "[]",
    "{}",
    "[[]]",
    "[1,[2,[3,[4]]]]",
    "{\"a\":{\"b\":{\"c\":null}}}",
    "[\"\\uD83D\\uDE00\",\"\u{1F600}\"]",
    "{\"k\":[true,false,null,0.5,\"x\"]}",
];

/// Convert a `serde_json` value into a `jsonrill` one, as the
/// batch-equivalence oracle.
pub fn from_serde(v: &serde_json::Value) -> jsonrill::Value {
    use jsonrill::Value;
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
