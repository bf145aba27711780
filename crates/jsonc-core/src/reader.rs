//! Recursive-descent reader — JSONC text into a [`Value`] tree.
//!
//! The reader applies the JSON grammar extended with `//` line comments and
//! `/* */` block comments. Trivia (whitespace and comments) is skipped before
//! every value and around every structural token; comments never appear in the
//! resulting tree. Every diagnostic carries the cursor position at the point
//! of detection.
//!
//! # Key design decisions
//!
//! - **Single dispatch on the first non-trivia character** selects the value
//!   production; `n`/`t`/`f` literals are then matched character by character.
//! - **Number grammar is validated digit by digit** with strict ordering:
//!   optional `-`, at least one integer digit, optional `.` plus at least one
//!   fraction digit, optional exponent marker plus a *mandatory* sign and at
//!   least one digit. The captured raw text is exactly the matched span.
//! - **String escapes are accumulated blindly** (`\` always consumes one
//!   following character) and validated afterwards by
//!   [`format::unescape`](crate::format::unescape), which is also where
//!   `\uXXXX` decoding happens.
//! - **Duplicate object keys overwrite** the earlier value without error; key
//!   order is preserved as encountered.

use crate::cursor::TextCursor;
use crate::error::{JsonError, Result};
use crate::format;
use crate::value::{JsonArray, JsonObject, Value};

/// Parses JSONC text into a value tree.
///
/// ```
/// use jsonc_core::{read, Value};
///
/// let value = read("{ /* config */ \"retries\": 3 }").unwrap();
/// assert_eq!(value.as_object().unwrap().get("retries"), Some(Value::number("3")));
/// ```
pub fn read(text: &str) -> Result<Value> {
    JsonReader::new(text).read_value()
}

/// A reader over one JSONC document.
pub struct JsonReader<'a> {
    cursor: TextCursor<'a>,
}

impl<'a> JsonReader<'a> {
    pub fn new(text: &'a str) -> Self {
        JsonReader {
            cursor: TextCursor::new(text),
        }
    }

    /// Reads the next value, skipping any leading trivia.
    pub fn read_value(&mut self) -> Result<Value> {
        self.skip_trivia()?;

        let position = self.cursor.position();

        match self.cursor.peek()? {
            '{' => self.read_object(),
            '[' => self.read_array(),
            '"' => Ok(Value::String(self.read_string()?)),
            'n' => self.read_literal("null", Value::Null),
            't' => self.read_literal("true", Value::Boolean(true)),
            'f' => self.read_literal("false", Value::Boolean(false)),
            '-' | '0'..='9' => self.read_number(),
            found => Err(JsonError::UnexpectedSymbol {
                expected: "'{', '[', '\"', 'n', 't', 'f', '-' or '0-9' digit".to_string(),
                found: Some(found),
                position,
            }),
        }
    }

    fn read_object(&mut self) -> Result<Value> {
        let object = JsonObject::new();

        self.expect('{')?;
        self.skip_trivia()?;

        if self.cursor.try_peek() == Some('}') {
            self.cursor.read()?;
            return Ok(Value::Object(object));
        }

        loop {
            self.skip_trivia()?;

            let key = self.read_string()?;

            self.skip_trivia()?;
            self.expect(':')?;

            object.insert(key, self.read_value()?);

            self.skip_trivia()?;

            let position = self.cursor.position();

            match self.cursor.read()? {
                ',' => {}
                '}' => return Ok(Value::Object(object)),
                found => {
                    return Err(JsonError::UnexpectedSymbol {
                        expected: "',' or '}' after object member".to_string(),
                        found: Some(found),
                        position,
                    })
                }
            }
        }
    }

    fn read_array(&mut self) -> Result<Value> {
        let array = JsonArray::new();

        self.expect('[')?;
        self.skip_trivia()?;

        if self.cursor.try_peek() == Some(']') {
            self.cursor.read()?;
            return Ok(Value::Array(array));
        }

        loop {
            array.push(self.read_value()?);

            self.skip_trivia()?;

            let position = self.cursor.position();

            match self.cursor.read()? {
                ',' => {}
                ']' => return Ok(Value::Array(array)),
                found => {
                    return Err(JsonError::UnexpectedSymbol {
                        expected: "',' or ']' after array element".to_string(),
                        found: Some(found),
                        position,
                    })
                }
            }
        }
    }

    /// Matches a literal character by character; a mismatch fails at the
    /// offending character and names the full expected literal.
    fn read_literal(&mut self, literal: &'static str, value: Value) -> Result<Value> {
        for expected in literal.chars() {
            let position = self.cursor.position();
            let ch = self.cursor.read()?;

            if ch != expected {
                return Err(JsonError::UnexpectedSymbol {
                    expected: format!("'{literal}' literal"),
                    found: Some(ch),
                    position,
                });
            }
        }

        Ok(value)
    }

    fn read_number(&mut self) -> Result<Value> {
        let mut raw = String::new();

        if self.cursor.try_peek() == Some('-') {
            raw.push(self.cursor.read()?);
            self.require_digit(
                &mut raw,
                "'0-9' digit after '-' sign at the beginning of the number",
            )?;
        } else {
            self.require_digit(&mut raw, "'0-9' digit at the beginning of the number")?;
        }

        self.cursor.read_while(|ch| ch.is_ascii_digit(), &mut raw);

        if self.cursor.try_peek() == Some('.') {
            raw.push(self.cursor.read()?);
            self.require_digit(&mut raw, "'0-9' digit after '.' decimal separator")?;
            self.cursor.read_while(|ch| ch.is_ascii_digit(), &mut raw);
        }

        if matches!(self.cursor.try_peek(), Some('e' | 'E')) {
            raw.push(self.cursor.read()?);

            let position = self.cursor.position();

            match self.cursor.try_peek() {
                Some('-' | '+') => raw.push(self.cursor.read()?),
                found => {
                    return Err(JsonError::UnexpectedSymbol {
                        expected: "'-' or '+' after exponent symbol".to_string(),
                        found,
                        position,
                    })
                }
            }

            self.require_digit(&mut raw, "'0-9' digit after exponent sign")?;
            self.cursor.read_while(|ch| ch.is_ascii_digit(), &mut raw);
        }

        Ok(Value::Number(raw))
    }

    /// Consumes exactly one digit into `raw`, failing with the given
    /// expectation if the next character is not a digit or the input ends.
    fn require_digit(&mut self, raw: &mut String, expected: &str) -> Result<()> {
        let position = self.cursor.position();

        match self.cursor.try_peek() {
            Some(ch) if ch.is_ascii_digit() => {
                raw.push(self.cursor.read()?);
                Ok(())
            }
            found => Err(JsonError::UnexpectedSymbol {
                expected: expected.to_string(),
                found,
                position,
            }),
        }
    }

    /// Reads a quoted string and returns its unescaped content.
    fn read_string(&mut self) -> Result<String> {
        self.expect('"')?;

        let mut raw = String::new();

        loop {
            let position = self.cursor.position();

            if !self.cursor.can_read() {
                return Err(JsonError::UnexpectedSymbol {
                    expected: "'\"' at the end of the string".to_string(),
                    found: None,
                    position,
                });
            }

            let ch = self.cursor.read()?;

            match ch {
                '\\' => {
                    raw.push(ch);
                    raw.push(self.cursor.read()?);
                }
                '"' => return format::unescape(&raw),
                _ => raw.push(ch),
            }
        }
    }

    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            self.cursor.skip_whitespace();

            if self.cursor.try_peek() == Some('/') {
                self.skip_comment()?;
            } else {
                return Ok(());
            }
        }
    }

    fn skip_comment(&mut self) -> Result<()> {
        self.expect('/')?;

        let position = self.cursor.position();

        match self.cursor.read()? {
            '/' => {
                while matches!(self.cursor.try_peek(), Some(ch) if ch != '\r' && ch != '\n') {
                    self.cursor.read()?;
                }
                Ok(())
            }
            '*' => loop {
                let Ok(ch) = self.cursor.read() else {
                    return Err(JsonError::UnterminatedComment);
                };
                if ch == '*' && self.cursor.try_peek() == Some('/') {
                    self.cursor.read()?;
                    return Ok(());
                }
            },
            found => Err(JsonError::UnexpectedSymbol {
                expected: "'/' or '*' after starting comment".to_string(),
                found: Some(found),
                position,
            }),
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        let position = self.cursor.position();
        let ch = self.cursor.read()?;

        if ch != expected {
            return Err(JsonError::UnexpectedSymbol {
                expected: format!("'{expected}'"),
                found: Some(ch),
                position,
            });
        }

        Ok(())
    }
}
