//! The streaming tokenizer.
//!
//! This module provides the [`Tokenizer`], a character-driven state machine
//! that segments chunked JSON input into [`TokenEvent`]s. It can suspend at
//! any byte boundary: when the buffered input runs out mid-token, the current
//! fragment is flushed (strings and numbers stream out in pieces) and the
//! automaton resumes exactly where it left off once more input is fed.
//!
//! # Examples
//!
//! ```rust
//! use jsonrill::{TokenEvent, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new();
//! tokenizer.feed("[true");
//! let events: Vec<_> = tokenizer.by_ref().map(Result::unwrap).collect();
//! assert_eq!(events, vec![TokenEvent::StartArray, TokenEvent::LiteralTrue]);
//! ```
#![allow(clippy::inline_always)]
#![allow(clippy::too_many_lines)]

use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    buffer::ChunkBuffer,
    error::{ErrorKind, ParseError},
    escape_buffer::UnicodeEscapeBuffer,
    event::TokenEvent,
    literal_buffer::{self, ExpectedLiteralBuffer},
};

/// Represents a peeked character from the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PeekedChar {
    /// The buffer is currently empty, but more input may still arrive.
    Empty,
    /// The next unconsumed character.
    Char(char),
    /// The input stream is closed and fully consumed.
    EndOfInput,
}

use PeekedChar::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Default,
    ValueLiteral,
    Sign,
    Zero,
    DecimalInteger,
    DecimalPoint,
    DecimalFraction,
    DecimalExponent,
    DecimalExponentSign,
    DecimalExponentInteger,
    String,
    StringEscape,
    StringEscapeUnicode,
    SurrogatePairBackslash,
    SurrogatePairU,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    Start,
    BeforeFirstPropertyName,
    BeforePropertyName,
    AfterPropertyName,
    BeforePropertyValue,
    BeforeFirstArrayValue,
    BeforeArrayValue,
    AfterPropertyValue,
    AfterArrayValue,
    End,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Array,
    Object,
}

/// Outcome of one automaton step.
enum Step {
    Continue,
    Emit(TokenEvent),
    Suspend,
    Fail(ErrorKind),
}

/// The streaming tokenizer.
///
/// Feed it chunks of JSON text (or raw bytes) and iterate to drain the
/// resulting [`TokenEvent`]s. Iteration returns `None` when the buffered
/// input is exhausted; feeding more input makes iteration productive again.
/// Call [`finish`](Tokenizer::finish) to signal end of input and drain the
/// remaining events.
///
/// The tokenizer enforces the full JSON lexical grammar and well-nestedness:
/// the four JSON whitespace characters only, no leading zeros, no trailing
/// commas, paired surrogate escapes, balanced containers, and exactly one
/// top-level value.
///
/// # Examples
///
/// ```rust
/// use jsonrill::{TokenEvent, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new();
/// tokenizer.feed(r#"{"a": 1}"#);
/// let events: Vec<_> = tokenizer
///     .finish()
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// assert_eq!(events.first(), Some(&TokenEvent::StartObject));
/// assert_eq!(events.last(), Some(&TokenEvent::Eof));
/// ```
#[derive(Debug)]
pub struct Tokenizer {
    source: ChunkBuffer,
    end_of_input: bool,

    /// Byte offset, one-based line and column of the next unconsumed
    /// character.
    pos: usize,
    line: usize,
    column: usize,

    lex_state: LexState,
    parse_state: ParseState,

    /// One entry per open container; drives comma/close handling.
    containers: Vec<Container>,

    /// Fragment accumulator for the token in flight.
    buffer: String,
    unicode_escape: UnicodeEscapeBuffer,
    high_surrogate: Option<u16>,
    expected_literal: ExpectedLiteralBuffer,
    string_is_key: bool,

    queued: Option<TokenEvent>,
    eof_emitted: bool,
    pending_error: Option<ErrorKind>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Tokenizer {
    type Item = Result<TokenEvent, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event()
    }
}

/// A [`Tokenizer`] that has been closed to further input.
///
/// Returned by [`Tokenizer::finish`]; iterating drains the remaining events,
/// ending with [`TokenEvent::Eof`] on success.
#[derive(Debug)]
pub struct ClosedTokenizer {
    tokenizer: Tokenizer,
}

impl Iterator for ClosedTokenizer {
    type Item = Result<TokenEvent, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokenizer.next_event()
    }
}

impl Tokenizer {
    /// Creates a new tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: ChunkBuffer::new(),
            end_of_input: false,

            pos: 0,
            line: 1,
            column: 1,

            lex_state: LexState::Default,
            parse_state: ParseState::Start,

            containers: Vec::new(),

            buffer: String::new(),
            unicode_escape: UnicodeEscapeBuffer::new(),
            high_surrogate: None,
            expected_literal: ExpectedLiteralBuffer::none(),
            string_is_key: false,

            queued: None,
            eof_emitted: false,
            pending_error: None,
        }
    }

    /// Feeds a chunk of JSON text into the tokenizer.
    ///
    /// The chunk boundary is not semantically meaningful; input may be split
    /// anywhere, including in the middle of tokens and escape sequences.
    pub fn feed(&mut self, chunk: &str) {
        if self.parse_state == ParseState::Error || self.pending_error.is_some() {
            return;
        }
        if let Err(kind) = self.source.push_str(chunk) {
            self.pending_error = Some(kind);
        }
    }

    /// Feeds a chunk of raw bytes into the tokenizer.
    ///
    /// Byte chunks may end in the middle of a multi-byte UTF-8 sequence; the
    /// trailing fragment is held until the next chunk completes it. Invalid
    /// UTF-8 is a fatal error surfaced on the next iteration.
    pub fn feed_bytes(&mut self, chunk: &[u8]) {
        if self.parse_state == ParseState::Error || self.pending_error.is_some() {
            return;
        }
        if let Err(kind) = self.source.push_bytes(chunk) {
            self.pending_error = Some(kind);
        }
    }

    /// Marks the end of input and returns a closed tokenizer to drain the
    /// remaining events.
    #[must_use]
    pub fn finish(mut self) -> ClosedTokenizer {
        self.close();
        ClosedTokenizer { tokenizer: self }
    }

    pub(crate) fn close(&mut self) {
        self.end_of_input = true;
    }

    pub(crate) fn make_error(&self, kind: ErrorKind) -> ParseError {
        ParseError {
            kind,
            line: self.line,
            column: self.column,
            offset: self.pos,
        }
    }

    fn fail(&mut self, kind: ErrorKind) -> ParseError {
        self.parse_state = ParseState::Error;
        self.make_error(kind)
    }

    /// Drive the automaton until it produces one event, runs out of input, or
    /// errors. Returns `None` when more input is needed (or, after an error or
    /// `Eof`, forever).
    pub(crate) fn next_event(&mut self) -> Option<Result<TokenEvent, ParseError>> {
        if self.parse_state == ParseState::Error {
            return None;
        }
        if let Some(kind) = self.pending_error.take() {
            return Some(Err(self.fail(kind)));
        }
        if let Some(event) = self.queued.take() {
            return Some(Ok(event));
        }

        loop {
            if self.end_of_input && self.source.is_empty() && self.source.has_partial_scalar() {
                return Some(Err(self.fail(ErrorKind::TruncatedUtf8)));
            }
            let next_char = self.peek_char();
            match self.step(next_char) {
                Step::Continue => {}
                Step::Emit(event) => return Some(Ok(event)),
                Step::Suspend => return None,
                Step::Fail(kind) => return Some(Err(self.fail(kind))),
            }
        }
    }

    #[inline(always)]
    fn peek_char(&self) -> PeekedChar {
        if let Some(ch) = self.source.peek() {
            return Char(ch);
        }
        if self.end_of_input {
            return EndOfInput;
        }
        Empty
    }

    #[inline(always)]
    fn advance_char(&mut self) {
        if let Some(ch) = self.source.next() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.pos += ch.len_utf8();
        }
    }

    fn step(&mut self, next_char: PeekedChar) -> Step {
        use LexState::*;
        match self.lex_state {
            Default => match next_char {
                Char(' ' | '\t' | '\n' | '\r') => {
                    self.advance_char();
                    Step::Continue
                }
                Empty => Step::Suspend,
                EndOfInput => self.step_end_of_input(),
                Char(c) => self.dispatch_char(c),
            },

            // -------------------------- LITERALS -----------------------------
            ValueLiteral => match next_char {
                Empty => Step::Suspend,
                EndOfInput => Step::Fail(ErrorKind::UnexpectedEndOfInput),
                Char(c) => match self.expected_literal.step(c) {
                    literal_buffer::Step::NeedMore => {
                        self.advance_char();
                        Step::Continue
                    }
                    literal_buffer::Step::Done(event) => {
                        self.advance_char();
                        self.lex_state = Default;
                        self.parse_state = self.state_after_value();
                        Step::Emit(event)
                    }
                    literal_buffer::Step::Reject => Step::Fail(ErrorKind::InvalidCharacter(c)),
                },
            },

            // -------------------------- NUMBERS -----------------------------
            Sign => match next_char {
                Empty => self.flush_fragment_or_suspend(number_chunk),
                EndOfInput => Step::Fail(ErrorKind::UnexpectedEndOfInput),
                Char(c @ '0') => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = Zero;
                    Step::Continue
                }
                Char(c) if c.is_ascii_digit() => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = DecimalInteger;
                    Step::Continue
                }
                Char(c) => Step::Fail(ErrorKind::InvalidCharacter(c)),
            },

            Zero => match next_char {
                Empty => self.flush_fragment_or_suspend(number_chunk),
                Char(c @ '.') => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = DecimalPoint;
                    Step::Continue
                }
                Char(c @ ('e' | 'E')) => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = DecimalExponent;
                    Step::Continue
                }
                Char(c) if c.is_ascii_digit() => Step::Fail(ErrorKind::LeadingZero),
                _ => self.end_number(),
            },

            DecimalInteger => match next_char {
                Empty => self.flush_fragment_or_suspend(number_chunk),
                Char(c @ '.') => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = DecimalPoint;
                    Step::Continue
                }
                Char(c @ ('e' | 'E')) => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = DecimalExponent;
                    Step::Continue
                }
                Char(c) if c.is_ascii_digit() => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.copy_digits();
                    Step::Continue
                }
                _ => self.end_number(),
            },

            DecimalPoint => match next_char {
                Empty => self.flush_fragment_or_suspend(number_chunk),
                EndOfInput => Step::Fail(ErrorKind::UnexpectedEndOfInput),
                Char(c) if c.is_ascii_digit() => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = DecimalFraction;
                    self.copy_digits();
                    Step::Continue
                }
                Char(c) => Step::Fail(ErrorKind::InvalidCharacter(c)),
            },

            DecimalFraction => match next_char {
                Empty => self.flush_fragment_or_suspend(number_chunk),
                Char(c @ ('e' | 'E')) => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = DecimalExponent;
                    Step::Continue
                }
                Char(c) if c.is_ascii_digit() => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.copy_digits();
                    Step::Continue
                }
                _ => self.end_number(),
            },

            DecimalExponent => match next_char {
                Empty => self.flush_fragment_or_suspend(number_chunk),
                EndOfInput => Step::Fail(ErrorKind::UnexpectedEndOfInput),
                Char(c @ ('+' | '-')) => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = DecimalExponentSign;
                    Step::Continue
                }
                Char(c) if c.is_ascii_digit() => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = DecimalExponentInteger;
                    self.copy_digits();
                    Step::Continue
                }
                Char(c) => Step::Fail(ErrorKind::InvalidCharacter(c)),
            },

            DecimalExponentSign => match next_char {
                Empty => self.flush_fragment_or_suspend(number_chunk),
                EndOfInput => Step::Fail(ErrorKind::UnexpectedEndOfInput),
                Char(c) if c.is_ascii_digit() => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = DecimalExponentInteger;
                    self.copy_digits();
                    Step::Continue
                }
                Char(c) => Step::Fail(ErrorKind::InvalidCharacter(c)),
            },

            DecimalExponentInteger => match next_char {
                Empty => self.flush_fragment_or_suspend(number_chunk),
                Char(c) if c.is_ascii_digit() => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.copy_digits();
                    Step::Continue
                }
                _ => self.end_number(),
            },

            // -------------------------- STRINGS -----------------------------
            String => match next_char {
                Char('\\') => {
                    self.advance_char();
                    self.lex_state = StringEscape;
                    Step::Continue
                }
                Char('"') => {
                    self.advance_char();
                    self.end_string()
                }
                Char(c @ '\0'..='\x1F') => Step::Fail(ErrorKind::ControlCharacter(c)),
                Empty => self.flush_fragment_or_suspend(string_chunk),
                EndOfInput => Step::Fail(ErrorKind::UnexpectedEndOfInput),
                Char(_) => {
                    // Fast path: copy consecutive plain characters in one pass.
                    let (chars, bytes) = self
                        .source
                        .copy_while(&mut self.buffer, |ch| {
                            ch != '\\' && ch != '"' && ch >= '\u{20}'
                        });
                    self.column += chars;
                    self.pos += bytes;
                    Step::Continue
                }
            },

            StringEscape => match next_char {
                Empty => self.flush_fragment_or_suspend(string_chunk),
                EndOfInput => Step::Fail(ErrorKind::UnexpectedEndOfInput),
                Char(c @ ('"' | '\\' | '/')) => {
                    self.advance_char();
                    self.buffer.push(c);
                    self.lex_state = String;
                    Step::Continue
                }
                Char('b') => {
                    self.advance_char();
                    self.buffer.push('\u{0008}');
                    self.lex_state = String;
                    Step::Continue
                }
                Char('f') => {
                    self.advance_char();
                    self.buffer.push('\u{000C}');
                    self.lex_state = String;
                    Step::Continue
                }
                Char('n') => {
                    self.advance_char();
                    self.buffer.push('\n');
                    self.lex_state = String;
                    Step::Continue
                }
                Char('r') => {
                    self.advance_char();
                    self.buffer.push('\r');
                    self.lex_state = String;
                    Step::Continue
                }
                Char('t') => {
                    self.advance_char();
                    self.buffer.push('\t');
                    self.lex_state = String;
                    Step::Continue
                }
                Char('u') => {
                    self.advance_char();
                    self.unicode_escape.reset();
                    self.lex_state = StringEscapeUnicode;
                    Step::Continue
                }
                Char(c) => Step::Fail(ErrorKind::InvalidEscape(c)),
            },

            StringEscapeUnicode => match next_char {
                Empty => self.flush_fragment_or_suspend(string_chunk),
                EndOfInput => Step::Fail(ErrorKind::UnexpectedEndOfInput),
                Char(c) => {
                    if !c.is_ascii_hexdigit() {
                        return Step::Fail(ErrorKind::InvalidUnicodeEscape(c));
                    }
                    self.advance_char();
                    match self.unicode_escape.feed(c) {
                        Ok(Some(unit)) => self.complete_unicode_escape(unit),
                        Ok(None) => Step::Continue,
                        Err(kind) => Step::Fail(kind),
                    }
                }
            },

            SurrogatePairBackslash => match next_char {
                Empty => self.flush_fragment_or_suspend(string_chunk),
                EndOfInput => Step::Fail(ErrorKind::UnexpectedEndOfInput),
                Char('\\') => {
                    self.advance_char();
                    self.lex_state = SurrogatePairU;
                    Step::Continue
                }
                Char(_) => Step::Fail(ErrorKind::UnpairedSurrogate(self.pending_surrogate())),
            },

            SurrogatePairU => match next_char {
                Empty => self.flush_fragment_or_suspend(string_chunk),
                EndOfInput => Step::Fail(ErrorKind::UnexpectedEndOfInput),
                Char('u') => {
                    self.advance_char();
                    self.unicode_escape.reset();
                    self.lex_state = StringEscapeUnicode;
                    Step::Continue
                }
                Char(_) => Step::Fail(ErrorKind::UnpairedSurrogate(self.pending_surrogate())),
            },
        }
    }

    fn step_end_of_input(&mut self) -> Step {
        match self.parse_state {
            ParseState::End => {
                if self.eof_emitted {
                    Step::Suspend
                } else {
                    self.eof_emitted = true;
                    Step::Emit(TokenEvent::Eof)
                }
            }
            _ => Step::Fail(ErrorKind::UnexpectedEndOfInput),
        }
    }

    /// One non-whitespace character in `Default` lex state; the parse state
    /// decides what it may begin.
    fn dispatch_char(&mut self, c: char) -> Step {
        match self.parse_state {
            ParseState::Start | ParseState::BeforePropertyValue | ParseState::BeforeArrayValue => {
                self.begin_value(c)
            }
            ParseState::BeforeFirstArrayValue => {
                if c == ']' {
                    self.advance_char();
                    self.close_container(TokenEvent::EndArray)
                } else {
                    self.begin_value(c)
                }
            }
            ParseState::BeforeFirstPropertyName => match c {
                '}' => {
                    self.advance_char();
                    self.close_container(TokenEvent::EndObject)
                }
                '"' => self.begin_key(),
                _ => Step::Fail(ErrorKind::ExpectedPropertyName(c)),
            },
            ParseState::BeforePropertyName => match c {
                '"' => self.begin_key(),
                _ => Step::Fail(ErrorKind::ExpectedPropertyName(c)),
            },
            ParseState::AfterPropertyName => match c {
                ':' => {
                    self.advance_char();
                    self.parse_state = ParseState::BeforePropertyValue;
                    Step::Emit(TokenEvent::Colon)
                }
                _ => Step::Fail(ErrorKind::ExpectedColon(c)),
            },
            ParseState::AfterPropertyValue => match c {
                ',' => {
                    self.advance_char();
                    self.parse_state = ParseState::BeforePropertyName;
                    Step::Emit(TokenEvent::Comma)
                }
                '}' => {
                    self.advance_char();
                    self.close_container(TokenEvent::EndObject)
                }
                _ => Step::Fail(ErrorKind::ExpectedCommaOrClose {
                    found: c,
                    close: '}',
                }),
            },
            ParseState::AfterArrayValue => match c {
                ',' => {
                    self.advance_char();
                    self.parse_state = ParseState::BeforeArrayValue;
                    Step::Emit(TokenEvent::Comma)
                }
                ']' => {
                    self.advance_char();
                    self.close_container(TokenEvent::EndArray)
                }
                _ => Step::Fail(ErrorKind::ExpectedCommaOrClose {
                    found: c,
                    close: ']',
                }),
            },
            ParseState::End => Step::Fail(ErrorKind::TrailingCharacter(c)),
            ParseState::Error => Step::Suspend,
        }
    }

    fn begin_value(&mut self, c: char) -> Step {
        match c {
            '{' => {
                self.advance_char();
                self.containers.push(Container::Object);
                self.parse_state = ParseState::BeforeFirstPropertyName;
                Step::Emit(TokenEvent::StartObject)
            }
            '[' => {
                self.advance_char();
                self.containers.push(Container::Array);
                self.parse_state = ParseState::BeforeFirstArrayValue;
                Step::Emit(TokenEvent::StartArray)
            }
            '"' => {
                self.advance_char();
                self.buffer.clear();
                self.string_is_key = false;
                self.lex_state = LexState::String;
                Step::Emit(TokenEvent::StringStart)
            }
            'n' | 't' | 'f' => {
                self.advance_char();
                self.expected_literal = ExpectedLiteralBuffer::new(c);
                self.lex_state = LexState::ValueLiteral;
                Step::Continue
            }
            '-' => {
                self.advance_char();
                self.buffer.clear();
                self.buffer.push(c);
                self.lex_state = LexState::Sign;
                Step::Continue
            }
            '0' => {
                self.advance_char();
                self.buffer.clear();
                self.buffer.push(c);
                self.lex_state = LexState::Zero;
                Step::Continue
            }
            '1'..='9' => {
                self.advance_char();
                self.buffer.clear();
                self.buffer.push(c);
                self.lex_state = LexState::DecimalInteger;
                Step::Continue
            }
            _ => Step::Fail(ErrorKind::InvalidCharacter(c)),
        }
    }

    fn begin_key(&mut self) -> Step {
        self.advance_char();
        self.buffer.clear();
        self.string_is_key = true;
        self.lex_state = LexState::String;
        Step::Emit(TokenEvent::StringStart)
    }

    fn close_container(&mut self, event: TokenEvent) -> Step {
        self.containers.pop();
        self.parse_state = self.state_after_value();
        Step::Emit(event)
    }

    fn state_after_value(&self) -> ParseState {
        match self.containers.last() {
            Some(Container::Array) => ParseState::AfterArrayValue,
            Some(Container::Object) => ParseState::AfterPropertyValue,
            None => ParseState::End,
        }
    }

    /// Flush the accumulated fragment, or suspend if there is nothing to
    /// flush. The lex state is untouched so the token resumes on more input.
    fn flush_fragment_or_suspend(&mut self, wrap: fn(String) -> TokenEvent) -> Step {
        if self.buffer.is_empty() {
            Step::Suspend
        } else {
            Step::Emit(wrap(core::mem::take(&mut self.buffer)))
        }
    }

    /// Terminate the number in flight without consuming the terminator.
    fn end_number(&mut self) -> Step {
        self.lex_state = LexState::Default;
        self.parse_state = self.state_after_value();
        if self.buffer.is_empty() {
            Step::Emit(TokenEvent::NumberEnd)
        } else {
            self.queued = Some(TokenEvent::NumberEnd);
            Step::Emit(number_chunk(core::mem::take(&mut self.buffer)))
        }
    }

    fn end_string(&mut self) -> Step {
        self.lex_state = LexState::Default;
        self.parse_state = if self.string_is_key {
            ParseState::AfterPropertyName
        } else {
            self.state_after_value()
        };
        if self.buffer.is_empty() {
            Step::Emit(TokenEvent::StringEnd)
        } else {
            self.queued = Some(TokenEvent::StringEnd);
            Step::Emit(string_chunk(core::mem::take(&mut self.buffer)))
        }
    }

    fn copy_digits(&mut self) {
        let (chars, bytes) = self
            .source
            .copy_while(&mut self.buffer, |d| d.is_ascii_digit());
        self.column += chars;
        self.pos += bytes;
    }

    fn pending_surrogate(&self) -> u32 {
        u32::from(self.high_surrogate.unwrap_or(0))
    }

    /// A `\uXXXX` escape decoded to one UTF-16 code unit; pair surrogate
    /// halves into a single scalar.
    fn complete_unicode_escape(&mut self, unit: u16) -> Step {
        if let Some(high) = self.high_surrogate.take() {
            if !(0xDC00..=0xDFFF).contains(&unit) {
                return Step::Fail(ErrorKind::UnpairedSurrogate(u32::from(high)));
            }
            let scalar =
                0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(unit) - 0xDC00);
            let Some(ch) = char::from_u32(scalar) else {
                return Step::Fail(ErrorKind::UnpairedSurrogate(u32::from(unit)));
            };
            self.buffer.push(ch);
            self.lex_state = LexState::String;
            Step::Continue
        } else if (0xD800..=0xDBFF).contains(&unit) {
            self.high_surrogate = Some(unit);
            self.lex_state = LexState::SurrogatePairBackslash;
            Step::Continue
        } else if (0xDC00..=0xDFFF).contains(&unit) {
            Step::Fail(ErrorKind::UnpairedSurrogate(u32::from(unit)))
        } else {
            let Some(ch) = char::from_u32(u32::from(unit)) else {
                return Step::Fail(ErrorKind::UnpairedSurrogate(u32::from(unit)));
            };
            self.buffer.push(ch);
            self.lex_state = LexState::String;
            Step::Continue
        }
    }
}

fn number_chunk(text: String) -> TokenEvent {
    TokenEvent::NumberChunk(text)
}

fn string_chunk(text: String) -> TokenEvent {
    TokenEvent::StringChunk(text)
}
