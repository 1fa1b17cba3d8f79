//! Streaming, incremental JSON parsing.
//!
//! `jsonrill` parses a single JSON document that arrives in arbitrary chunks
//! and yields progressively complete snapshots of the value being built. The
//! final snapshot is exactly what a batch parser would have produced for the
//! whole input, and the chunk boundaries never affect the result.
//!
//! The pipeline has two engines. The [`Tokenizer`] segments the character
//! stream into [`TokenEvent`] fragments without ever buffering a whole token;
//! the [`ValueStream`] folds those fragments into a continuously mutated root
//! [`Value`] and yields a snapshot whenever the document observably grows.
//! Both suspend at arbitrary byte boundaries and keep all of their state in
//! explicit structures, so deeply nested input cannot exhaust the call stack.
//!
//! ```
//! use jsonrill::ValueStream;
//!
//! let mut stream = ValueStream::new();
//! let mut seen = Vec::new();
//! for chunk in ["[1", ",2,", "3]"] {
//!     stream.feed(chunk);
//!     for snapshot in stream.by_ref() {
//!         seen.push(snapshot.unwrap().value.to_string());
//!     }
//! }
//! assert_eq!(seen, ["[1]", "[1,2]", "[1,2,3]"]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod builder;
pub mod chunk_utils;
mod error;
mod escape_buffer;
mod event;
mod literal_buffer;
mod stream;
mod tokenizer;
mod value;

pub use error::{ErrorClass, ErrorKind, ParseError};
pub use event::TokenEvent;
pub use stream::{ClosedValueStream, StreamingValue, ValueStream};
pub use tokenizer::{ClosedTokenizer, Tokenizer};
pub use value::{Array, Map, Value};

#[cfg(test)]
mod tests;
