//! Byte cursor over geo URI text
//!
//! Every production advances a [`Cursor`] past what it matched, or leaves it
//! where it was. The cursor only steps over ASCII bytes, so its position is
//! always a char boundary of the input.

use text_size::{TextRange, TextSize};

/// A position in the input being scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte position of the cursor
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Byte position as a [`TextSize`]
    pub fn offset(&self) -> TextSize {
        to_text_size(self.pos)
    }

    /// Range from `start` up to the cursor
    pub fn range_from(&self, start: usize) -> TextRange {
        TextRange::new(to_text_size(start), self.offset())
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The whole input
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Unconsumed input
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Input between `start` and the cursor
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Consume `expected` if it is the next byte
    pub fn eat(&mut self, expected: u8) -> bool {
        self.eat_if(|b| b == expected).is_some()
    }

    /// Consume the next byte if it is ASCII and satisfies `pred`
    pub fn eat_if(&mut self, pred: impl Fn(u8) -> bool) -> Option<u8> {
        let b = self.peek()?;
        if b.is_ascii() && pred(b) {
            self.pos += 1;
            Some(b)
        } else {
            None
        }
    }

    /// Consume an ASCII literal, ignoring case
    ///
    /// All or nothing: on mismatch the cursor does not move.
    pub fn eat_ignore_ascii_case(&mut self, literal: &str) -> bool {
        let end = self.pos + literal.len();
        match self.input.as_bytes().get(self.pos..end) {
            Some(candidate) if candidate.eq_ignore_ascii_case(literal.as_bytes()) => {
                self.pos = end;
                true
            }
            _ => false,
        }
    }

    /// Move back to a position obtained from [`Cursor::pos`]
    pub(crate) fn reset(&mut self, pos: usize) {
        debug_assert!(pos <= self.pos, "cursor can only move backwards on reset");
        self.pos = pos;
    }
}

/// Offsets past `u32::MAX` saturate, so ranges stay ordered on huge inputs
pub(crate) fn to_text_size(pos: usize) -> TextSize {
    TextSize::new(u32::try_from(pos).unwrap_or(u32::MAX))
}
