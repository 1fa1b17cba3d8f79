use crate::event::TokenEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LiteralKind {
    Null,
    True,
    False,
}

/// What happened after feeding one more character into the literal matcher?
pub(crate) enum Step {
    /// Character matched, but the literal is not finished yet.
    NeedMore,
    /// Character matched *and* it was the last byte of the literal.
    Done(TokenEvent),
    /// Character did **not** match the expected byte.
    Reject,
}

/// `None`  ➜  we are **not** in the middle of a literal
/// `Some`  ➜  `(remaining_bytes, kind)` while matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ExpectedLiteralBuffer(Option<(&'static [u8], LiteralKind)>);

impl ExpectedLiteralBuffer {
    /// No literal is in flight.
    pub(crate) fn none() -> Self {
        ExpectedLiteralBuffer(None)
    }

    /// Start matching after the *first* character (`n`, `t`, or `f`).
    pub(crate) fn new(first: char) -> Self {
        match first {
            'n' => ExpectedLiteralBuffer(Some((b"ull", LiteralKind::Null))),
            't' => ExpectedLiteralBuffer(Some((b"rue", LiteralKind::True))),
            'f' => ExpectedLiteralBuffer(Some((b"alse", LiteralKind::False))),
            _ => ExpectedLiteralBuffer::none(),
        }
    }

    /// Give the matcher the next input character and learn what to do next.
    pub(crate) fn step(&mut self, c: char) -> Step {
        let Some((bytes, kind)) = self.0.take() else {
            return Step::Reject;
        };

        let Some((&expected, rest)) = bytes.split_first() else {
            return Step::Reject;
        };
        if expected as char != c {
            self.0 = Some((bytes, kind));
            return Step::Reject;
        }

        if rest.is_empty() {
            Step::Done(match kind {
                LiteralKind::Null => TokenEvent::LiteralNull,
                LiteralKind::True => TokenEvent::LiteralTrue,
                LiteralKind::False => TokenEvent::LiteralFalse,
            })
        } else {
            self.0 = Some((rest, kind));
            Step::NeedMore
        }
    }
}
