//! Positioned, lookahead-1 view over input text.
//!
//! Both the reader and the text formatters consume input through [`TextCursor`]:
//! a single forward pass over the characters of a `&str` with one character of
//! lookahead and a running position counter. The position is always the index
//! (in characters) of the next unread character, and is what every diagnostic
//! reports.

use crate::error::{JsonError, Result};
use std::iter::Peekable;
use std::str::Chars;

/// A forward-only character cursor over input text.
pub struct TextCursor<'a> {
    chars: Peekable<Chars<'a>>,
    position: usize,
}

impl<'a> TextCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        TextCursor {
            chars: text.chars().peekable(),
            position: 0,
        }
    }

    /// Index of the next unread character.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether at least one more character can be read.
    pub fn can_read(&mut self) -> bool {
        self.chars.peek().is_some()
    }

    /// Non-failing lookahead at the next character.
    pub fn try_peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Returns the next character without consuming it.
    pub fn peek(&mut self) -> Result<char> {
        self.try_peek().ok_or(JsonError::UnexpectedEndOfInput {
            position: self.position,
        })
    }

    /// Returns the next character and advances past it.
    pub fn read(&mut self) -> Result<char> {
        let ch = self.chars.next().ok_or(JsonError::UnexpectedEndOfInput {
            position: self.position,
        })?;
        self.position += 1;
        Ok(ch)
    }

    /// Advances while the predicate holds, accumulating the consumed
    /// characters into `out`. Returns how many characters were consumed.
    pub fn read_while(&mut self, predicate: impl Fn(char) -> bool, out: &mut String) -> usize {
        let mut count = 0;
        while let Some(&ch) = self.chars.peek() {
            if !predicate(ch) {
                break;
            }
            self.chars.next();
            self.position += 1;
            out.push(ch);
            count += 1;
        }
        count
    }

    /// Accumulates characters into `out` up to, but not including, the
    /// terminator. Fails if the input ends before the terminator appears.
    pub fn read_until(&mut self, terminator: char, out: &mut String) -> Result<()> {
        loop {
            match self.try_peek() {
                Some(ch) if ch == terminator => return Ok(()),
                Some(_) => {
                    let ch = self.read()?;
                    out.push(ch);
                }
                None => {
                    return Err(JsonError::UnexpectedEndOfInput {
                        position: self.position,
                    })
                }
            }
        }
    }

    /// Advances over a maximal run of whitespace without consuming anything else.
    pub fn skip_whitespace(&mut self) {
        while matches!(self.chars.peek(), Some(ch) if ch.is_whitespace()) {
            self.chars.next();
            self.position += 1;
        }
    }
}
