//! The value builder.
//!
//! Consumes [`TokenEvent`]s and maintains a single root [`Value`] that is
//! mutated in place as fragments arrive. A frame stack mirrors the open
//! containers; each frame records the slot (array index or object key) inside
//! its parent that it is responsible for, and every mutation reaches its
//! target by walking those slots down from the root. All parse state lives on
//! this explicit heap stack, so nesting depth is limited only by memory.

use alloc::string::String;
use alloc::vec::Vec;
use core::mem;

use crate::{
    error::ErrorKind,
    event::TokenEvent,
    value::{Array, Map, Value},
};

/// Position inside a parent container that a frame is responsible for.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    Index(usize),
    Key(String),
}

/// Progress of the entry currently being built in an object frame.
#[derive(Debug)]
enum EntryState {
    AwaitingKey,
    ReadingKey(String),
    AwaitingColon(String),
    AwaitingValue(String),
    HoldingValue(String),
}

/// One open container. `slot` is `None` only for the outermost frame, whose
/// container is the root itself.
#[derive(Debug)]
enum Frame {
    Array { slot: Option<Slot>, holding: bool },
    Object { slot: Option<Slot>, state: EntryState },
}

impl Frame {
    fn slot(&self) -> Option<&Slot> {
        match self {
            Frame::Array { slot, .. } | Frame::Object { slot, .. } => slot.as_ref(),
        }
    }
}

/// Textual accumulator for the number leaf in flight.
///
/// `committed` is the value of the longest prefix that parsed as a number; an
/// unparseable extension (`-`, `1e`, `1.`) leaves the previously committed
/// value in place so the yielded number never regresses.
#[derive(Debug, Default)]
struct NumberAccumulator {
    text: String,
    committed: Option<f64>,
}

#[derive(Debug)]
pub(crate) struct ValueBuilder {
    root: Option<Value>,
    frames: Vec<Frame>,
    number: Option<NumberAccumulator>,
    dirty: bool,
    done: bool,
}

/// Walk down from the root to the container owned by the deepest frame.
fn container_mut<'a>(root: &'a mut Option<Value>, frames: &[Frame]) -> &'a mut Value {
    let mut value = root
        .as_mut()
        .expect("root exists while a frame is open");
    for frame in &frames[1..] {
        value = match (value, frame.slot()) {
            (Value::Array(items), Some(Slot::Index(index))) => &mut items[*index],
            (Value::Object(entries), Some(Slot::Key(key))) => entries
                .get_mut(key.as_str())
                .expect("slot of an open frame exists in its parent"),
            _ => unreachable!("frame stack desynchronized from value tree"),
        };
    }
    value
}

/// The leaf currently receiving fragments: the root itself when no container
/// is open, otherwise the tail slot of the deepest frame.
fn tail_mut<'a>(root: &'a mut Option<Value>, frames: &[Frame]) -> &'a mut Value {
    let Some(frame) = frames.last() else {
        return root.as_mut().expect("root leaf exists");
    };
    let container = container_mut(root, frames);
    match (container, frame) {
        (Value::Array(items), Frame::Array { .. }) => {
            items.last_mut().expect("array tail exists")
        }
        (
            Value::Object(entries),
            Frame::Object {
                state: EntryState::HoldingValue(key),
                ..
            },
        ) => entries
            .get_mut(key.as_str())
            .expect("held entry exists in its object"),
        _ => unreachable!("no active leaf"),
    }
}

impl ValueBuilder {
    pub(crate) fn new() -> Self {
        Self {
            root: None,
            frames: Vec::new(),
            number: None,
            dirty: false,
            done: false,
        }
    }

    /// The current root, once the first token of the document has arrived.
    pub(crate) fn root(&self) -> Option<&Value> {
        self.root.as_ref()
    }

    pub(crate) fn into_root(self) -> Option<Value> {
        self.root
    }

    /// True once the single top-level value has fully completed.
    pub(crate) fn is_done(&self) -> bool {
        self.done
    }

    /// Takes the observable-progress flag, clearing it.
    pub(crate) fn take_dirty(&mut self) -> bool {
        mem::take(&mut self.dirty)
    }

    /// Apply one token event. Returns `true` when this event completed the
    /// top-level value.
    pub(crate) fn apply(&mut self, event: TokenEvent) -> Result<bool, ErrorKind> {
        match event {
            TokenEvent::StartArray => {
                self.begin_container(Value::Array(Array::new()))?;
                Ok(false)
            }
            TokenEvent::StartObject => {
                self.begin_container(Value::Object(Map::default()))?;
                Ok(false)
            }
            TokenEvent::EndArray => self.end_container(true),
            TokenEvent::EndObject => self.end_container(false),
            TokenEvent::Colon => self.apply_colon(),
            TokenEvent::Comma => self.apply_comma(),
            TokenEvent::LiteralNull => self.place_scalar(Value::Null),
            TokenEvent::LiteralTrue => self.place_scalar(Value::Boolean(true)),
            TokenEvent::LiteralFalse => self.place_scalar(Value::Boolean(false)),
            TokenEvent::StringStart => self.begin_string(),
            TokenEvent::StringChunk(text) => self.extend_string(&text),
            TokenEvent::StringEnd => self.end_string(),
            TokenEvent::NumberChunk(text) => self.extend_number(&text),
            TokenEvent::NumberEnd => self.end_number(),
            TokenEvent::Eof => {
                if self.done {
                    Ok(false)
                } else {
                    Err(ErrorKind::UnexpectedEndOfInput)
                }
            }
        }
    }

    /// Write a fresh value into the next slot: the root when no container is
    /// open, the array tail, or the pending object entry.
    fn place_value(&mut self, value: Value) -> Result<(), ErrorKind> {
        enum Target {
            Append,
            Entry(String),
        }

        if self.frames.is_empty() {
            if self.done || self.root.is_some() {
                return Err(ErrorKind::MisplacedToken("value"));
            }
            self.root = Some(value);
            return Ok(());
        }

        let target = match self.frames.last_mut().expect("frames are non-empty") {
            Frame::Array { holding, .. } => {
                if *holding {
                    return Err(ErrorKind::MisplacedToken("value"));
                }
                *holding = true;
                Target::Append
            }
            Frame::Object { state, .. } => match mem::replace(state, EntryState::AwaitingKey) {
                EntryState::AwaitingValue(key) => {
                    *state = EntryState::HoldingValue(key.clone());
                    Target::Entry(key)
                }
                other => {
                    *state = other;
                    return Err(ErrorKind::MisplacedToken("value"));
                }
            },
        };

        let container = container_mut(&mut self.root, &self.frames);
        match (container, target) {
            (Value::Array(items), Target::Append) => items.push(value),
            (Value::Object(entries), Target::Entry(key)) => {
                // Duplicate keys overwrite in place, keeping the first
                // occurrence's position in the order.
                entries.insert(key, value);
            }
            _ => unreachable!("frame stack desynchronized from value tree"),
        }
        Ok(())
    }

    fn begin_container(&mut self, empty: Value) -> Result<(), ErrorKind> {
        let is_array = empty.is_array();
        self.place_value(empty)?;
        let slot = self.tail_slot();
        self.frames.push(if is_array {
            Frame::Array {
                slot,
                holding: false,
            }
        } else {
            Frame::Object {
                slot,
                state: EntryState::AwaitingKey,
            }
        });
        self.dirty = true;
        Ok(())
    }

    /// The slot just written by [`place_value`], recorded into the child
    /// frame so later mutations can find their way back down.
    fn tail_slot(&mut self) -> Option<Slot> {
        let frame = self.frames.last()?;
        match frame {
            Frame::Array { .. } => {
                let Value::Array(items) = container_mut(&mut self.root, &self.frames) else {
                    unreachable!("array frame owns an array")
                };
                Some(Slot::Index(items.len() - 1))
            }
            Frame::Object {
                state: EntryState::HoldingValue(key),
                ..
            } => Some(Slot::Key(key.clone())),
            Frame::Object { .. } => unreachable!("object frame holds the entry just written"),
        }
    }

    fn end_container(&mut self, is_array: bool) -> Result<bool, ErrorKind> {
        match (self.frames.pop(), is_array) {
            (Some(Frame::Array { .. }), true) | (Some(Frame::Object { .. }), false) => {}
            _ => {
                return Err(ErrorKind::MisplacedToken(if is_array {
                    "']'"
                } else {
                    "'}'"
                }));
            }
        }
        self.dirty = true;
        Ok(self.root_completed())
    }

    fn apply_colon(&mut self) -> Result<bool, ErrorKind> {
        match self.frames.last_mut() {
            Some(Frame::Object { state, .. }) if matches!(state, EntryState::AwaitingColon(_)) => {
                let EntryState::AwaitingColon(key) = mem::replace(state, EntryState::AwaitingKey)
                else {
                    unreachable!()
                };
                *state = EntryState::AwaitingValue(key);
                Ok(false)
            }
            _ => Err(ErrorKind::MisplacedToken("':'")),
        }
    }

    fn apply_comma(&mut self) -> Result<bool, ErrorKind> {
        match self.frames.last_mut() {
            Some(Frame::Array { holding, .. }) if *holding => {
                *holding = false;
                Ok(false)
            }
            Some(Frame::Object { state, .. }) if matches!(state, EntryState::HoldingValue(_)) => {
                *state = EntryState::AwaitingKey;
                Ok(false)
            }
            _ => Err(ErrorKind::MisplacedToken("','")),
        }
    }

    fn place_scalar(&mut self, value: Value) -> Result<bool, ErrorKind> {
        self.place_value(value)?;
        self.dirty = true;
        Ok(self.root_completed())
    }

    fn begin_string(&mut self) -> Result<bool, ErrorKind> {
        if let Some(Frame::Object { state, .. }) = self.frames.last_mut() {
            if matches!(state, EntryState::AwaitingKey) {
                *state = EntryState::ReadingKey(String::new());
                return Ok(false);
            }
        }
        // An empty string is assigned to the slot up front; fragments append
        // to it in place. No yield happens until content or the end arrives.
        self.place_value(Value::String(String::new()))?;
        Ok(false)
    }

    fn extend_string(&mut self, text: &str) -> Result<bool, ErrorKind> {
        if let Some(Frame::Object {
            state: EntryState::ReadingKey(key),
            ..
        }) = self.frames.last_mut()
        {
            key.push_str(text);
            return Ok(false);
        }
        match tail_mut(&mut self.root, &self.frames) {
            Value::String(s) => {
                s.push_str(text);
                self.dirty = true;
                Ok(false)
            }
            _ => Err(ErrorKind::MisplacedToken("string fragment")),
        }
    }

    fn end_string(&mut self) -> Result<bool, ErrorKind> {
        if let Some(Frame::Object { state, .. }) = self.frames.last_mut() {
            if matches!(state, EntryState::ReadingKey(_)) {
                let EntryState::ReadingKey(key) = mem::replace(state, EntryState::AwaitingKey)
                else {
                    unreachable!()
                };
                *state = EntryState::AwaitingColon(key);
                return Ok(false);
            }
        }
        self.dirty = true;
        Ok(self.root_completed())
    }

    fn extend_number(&mut self, text: &str) -> Result<bool, ErrorKind> {
        if self.number.is_none() {
            self.place_value(Value::Number(0.0))?;
            self.number = Some(NumberAccumulator::default());
        }
        let updated = {
            let acc = self.number.as_mut().expect("accumulator installed above");
            acc.text.push_str(text);
            match acc.text.parse::<f64>() {
                Ok(parsed) if acc.committed != Some(parsed) => {
                    acc.committed = Some(parsed);
                    Some(parsed)
                }
                _ => None,
            }
        };
        if let Some(parsed) = updated {
            match tail_mut(&mut self.root, &self.frames) {
                Value::Number(slot) => *slot = parsed,
                _ => return Err(ErrorKind::MisplacedToken("number fragment")),
            }
            self.dirty = true;
        }
        Ok(false)
    }

    fn end_number(&mut self) -> Result<bool, ErrorKind> {
        let Some(acc) = self.number.take() else {
            return Err(ErrorKind::MisplacedToken("number terminator"));
        };
        let parsed = acc
            .text
            .parse::<f64>()
            .map_err(|_| ErrorKind::MisplacedToken("number terminator"))?;
        if acc.committed != Some(parsed) {
            match tail_mut(&mut self.root, &self.frames) {
                Value::Number(slot) => *slot = parsed,
                _ => return Err(ErrorKind::MisplacedToken("number terminator")),
            }
            self.dirty = true;
        }
        Ok(self.root_completed())
    }

    fn root_completed(&mut self) -> bool {
        if self.frames.is_empty() {
            self.done = true;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::event::TokenEvent::*;

    fn apply_all(builder: &mut ValueBuilder, events: impl IntoIterator<Item = TokenEvent>) {
        for event in events {
            builder.apply(event).unwrap();
        }
    }

    #[test]
    fn builds_nested_containers_in_place() {
        let mut builder = ValueBuilder::new();
        apply_all(
            &mut builder,
            [
                StartObject,
                StringStart,
                StringChunk("items".to_string()),
                StringEnd,
                Colon,
                StartArray,
                NumberChunk("1".to_string()),
                NumberEnd,
                Comma,
                StartObject,
            ],
        );
        assert_eq!(builder.root().unwrap().to_string(), r#"{"items":[1,{}]}"#);
        assert!(!builder.is_done());
        apply_all(&mut builder, [EndObject, EndArray, EndObject, Eof]);
        assert_eq!(builder.root().unwrap().to_string(), r#"{"items":[1,{}]}"#);
        assert!(builder.is_done());
    }

    #[test]
    fn key_fragments_are_buffered_until_committed() {
        let mut builder = ValueBuilder::new();
        apply_all(
            &mut builder,
            [
                StartObject,
                StringStart,
                StringChunk("lo".to_string()),
                StringChunk("ng".to_string()),
            ],
        );
        // The key is not visible while it is still being read.
        assert_eq!(builder.root().unwrap().to_string(), "{}");
        apply_all(
            &mut builder,
            [StringEnd, Colon, LiteralTrue, EndObject],
        );
        assert_eq!(builder.root().unwrap().to_string(), r#"{"long":true}"#);
    }

    #[test]
    fn unparseable_number_prefix_keeps_committed_value() {
        let mut builder = ValueBuilder::new();
        builder.apply(StartArray).unwrap();
        builder.apply(NumberChunk("1".to_string())).unwrap();
        assert!(builder.take_dirty());
        assert_eq!(builder.root().unwrap().to_string(), "[1]");
        builder.apply(NumberChunk("e".to_string())).unwrap();
        assert!(!builder.take_dirty());
        assert_eq!(builder.root().unwrap().to_string(), "[1]");
        builder.apply(NumberChunk("2".to_string())).unwrap();
        assert!(builder.take_dirty());
        assert_eq!(builder.root().unwrap().to_string(), "[100]");
    }

    #[test]
    fn lone_minus_shows_zero_without_progress() {
        let mut builder = ValueBuilder::new();
        builder.apply(StartArray).unwrap();
        let _ = builder.take_dirty();
        builder.apply(NumberChunk("-".to_string())).unwrap();
        assert!(!builder.take_dirty());
        assert_eq!(builder.root().unwrap().to_string(), "[0]");
        builder.apply(NumberChunk("7".to_string())).unwrap();
        assert_eq!(builder.root().unwrap().to_string(), "[-7]");
    }

    #[test]
    fn eof_before_completion_is_an_error() {
        let mut builder = ValueBuilder::new();
        builder.apply(StartArray).unwrap();
        assert_eq!(
            builder.apply(Eof),
            Err(ErrorKind::UnexpectedEndOfInput)
        );
    }

    #[test]
    fn duplicate_key_overwrites_in_place() {
        let mut builder = ValueBuilder::new();
        apply_all(
            &mut builder,
            [
                StartObject,
                StringStart,
                StringChunk("a".to_string()),
                StringEnd,
                Colon,
                NumberChunk("1".to_string()),
                NumberEnd,
                Comma,
                StringStart,
                StringChunk("b".to_string()),
                StringEnd,
                Colon,
                NumberChunk("2".to_string()),
                NumberEnd,
                Comma,
                StringStart,
                StringChunk("a".to_string()),
                StringEnd,
                Colon,
                LiteralNull,
                EndObject,
            ],
        );
        assert_eq!(
            builder.root().unwrap().to_string(),
            r#"{"a":null,"b":2}"#
        );
    }
}
