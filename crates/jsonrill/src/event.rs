use alloc::string::String;

/// A lexical fragment emitted by the [`Tokenizer`].
///
/// Strings and numbers are emitted as *sequences* of events so that no entire
/// token is ever buffered inside the tokenizer: a long string becomes
/// `StringStart`, one or more `StringChunk`s, then `StringEnd`, and a number
/// becomes one or more `NumberChunk`s followed by `NumberEnd`. A chunk may
/// carry as little as a single character; consumers concatenate the payloads.
///
/// [`Tokenizer`]: crate::Tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenEvent {
    StartArray,
    EndArray,
    StartObject,
    EndObject,
    Colon,
    Comma,
    LiteralNull,
    LiteralTrue,
    LiteralFalse,
    StringStart,
    StringChunk(String),
    StringEnd,
    NumberChunk(String),
    NumberEnd,
    /// End of the input stream; emitted exactly once, after the top-level
    /// value has completed.
    Eof,
}

impl TokenEvent {
    /// Returns `true` if the event is [`Eof`].
    ///
    /// [`Eof`]: TokenEvent::Eof
    #[must_use]
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }
}
