//! Progressive value streaming.
//!
//! [`ValueStream`] couples the [`Tokenizer`] with the value builder and
//! yields snapshots of the document as it grows.

use crate::{
    builder::ValueBuilder,
    error::ParseError,
    tokenizer::Tokenizer,
    value::Value,
};

/// A snapshot of the document produced during streaming parsing.
///
/// `is_final` is `true` exactly once, when the top-level value has fully
/// completed; that snapshot equals what a batch parser would have produced
/// for the whole input.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamingValue {
    pub value: Value,
    pub is_final: bool,
}

/// A streaming parser that yields progressively complete values.
///
/// Feed chunks of a single JSON document and iterate between feeds: each
/// yielded [`StreamingValue`] is the best-effort reconstruction of the final
/// value given the input consumed so far. Yields are suppressed when nothing
/// observable changed (a lone comma, a buffered object key), so iterating
/// after a feed produces at most one in-progress snapshot, plus the final
/// snapshot the moment the document completes.
///
/// Snapshots are clones taken at yield points. To inspect the in-progress
/// value without cloning, use [`current`](ValueStream::current) — and take
/// your own snapshot if you keep it, because the same root is mutated in
/// place as parsing continues.
///
/// # Examples
///
/// ```rust
/// use jsonrill::ValueStream;
///
/// let mut stream = ValueStream::new();
/// let mut seen = Vec::new();
/// for chunk in ["[1", ",2,", "3]"] {
///     stream.feed(chunk);
///     for snapshot in stream.by_ref() {
///         seen.push(snapshot.unwrap().value.to_string());
///     }
/// }
/// assert_eq!(seen, ["[1]", "[1,2]", "[1,2,3]"]);
/// ```
#[derive(Debug)]
pub struct ValueStream {
    tokenizer: Tokenizer,
    builder: ValueBuilder,
    failed: Option<ParseError>,
}

impl Default for ValueStream {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueStream {
    /// Creates a new stream awaiting the first chunk.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            builder: ValueBuilder::new(),
            failed: None,
        }
    }

    /// Feeds a chunk of JSON text.
    pub fn feed(&mut self, chunk: &str) {
        self.tokenizer.feed(chunk);
    }

    /// Feeds a chunk of raw bytes; a multi-byte UTF-8 sequence may be split
    /// across chunks.
    pub fn feed_bytes(&mut self, chunk: &[u8]) {
        self.tokenizer.feed_bytes(chunk);
    }

    /// Borrows the in-progress root value, if the document has started.
    ///
    /// The same root is mutated in place on every feed; clone it if you need
    /// a stable snapshot.
    #[must_use]
    pub fn current(&self) -> Option<&Value> {
        self.builder.root()
    }

    /// Marks the end of input and returns a closed stream to drain the
    /// remaining snapshots.
    #[must_use]
    pub fn finish(mut self) -> ClosedValueStream {
        self.tokenizer.close();
        ClosedValueStream {
            tokenizer: self.tokenizer,
            builder: self.builder,
            failed: self.failed,
        }
    }
}

impl Iterator for ValueStream {
    type Item = Result<StreamingValue, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        advance(&mut self.tokenizer, &mut self.builder, &mut self.failed)
    }
}

/// A [`ValueStream`] that has been closed to further input.
///
/// Returned by [`ValueStream::finish`]; iterating drains the remaining
/// snapshots, ending with the final one.
#[derive(Debug)]
pub struct ClosedValueStream {
    tokenizer: Tokenizer,
    builder: ValueBuilder,
    failed: Option<ParseError>,
}

impl Iterator for ClosedValueStream {
    type Item = Result<StreamingValue, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        advance(&mut self.tokenizer, &mut self.builder, &mut self.failed)
    }
}

impl ClosedValueStream {
    /// Drains any remaining snapshots and returns the final value.
    ///
    /// # Errors
    ///
    /// Returns the parse error that terminated the stream, or an
    /// end-of-input error if the document was incomplete.
    pub fn into_value(mut self) -> Result<Value, ParseError> {
        while let Some(snapshot) = self.next() {
            snapshot?;
        }
        if let Some(err) = self.failed {
            return Err(err);
        }
        if self.builder.is_done() {
            if let Some(value) = self.builder.into_root() {
                return Ok(value);
            }
        }
        Err(self
            .tokenizer
            .make_error(crate::error::ErrorKind::UnexpectedEndOfInput))
    }
}

/// Pump the tokenizer into the builder until a snapshot is due.
///
/// Final snapshots are yielded the moment the root completes; otherwise one
/// in-progress snapshot is yielded when the buffered input drains and the
/// document observably changed since the last yield.
fn advance(
    tokenizer: &mut Tokenizer,
    builder: &mut ValueBuilder,
    failed: &mut Option<ParseError>,
) -> Option<Result<StreamingValue, ParseError>> {
    if failed.is_some() {
        return None;
    }
    loop {
        match tokenizer.next_event() {
            Some(Ok(event)) => match builder.apply(event) {
                Ok(true) => {
                    let _ = builder.take_dirty();
                    let value = builder
                        .root()
                        .expect("completed document has a root")
                        .clone();
                    return Some(Ok(StreamingValue {
                        value,
                        is_final: true,
                    }));
                }
                Ok(false) => {}
                Err(kind) => {
                    let err = tokenizer.make_error(kind);
                    *failed = Some(err.clone());
                    return Some(Err(err));
                }
            },
            Some(Err(err)) => {
                *failed = Some(err.clone());
                return Some(Err(err));
            }
            None => {
                if builder.take_dirty() {
                    if let Some(root) = builder.root() {
                        return Some(Ok(StreamingValue {
                            value: root.clone(),
                            is_final: false,
                        }));
                    }
                }
                return None;
            }
        }
    }
}
