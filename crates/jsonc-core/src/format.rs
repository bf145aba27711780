//! Streaming text formatters — pure text-to-text, no value tree.
//!
//! Each transform consumes a [`TextCursor`] character by character in a single
//! forward pass. All of them are quote-aware: once inside a `"..."` string
//! every character is copied untouched (a `\` copies itself plus the character
//! after it, so an escaped quote never terminates the scan) until the matching
//! close quote.
//!
//! # Key design decisions
//!
//! - **Comment handling has one authority**: [`clear_comments`] deletes
//!   comments while preserving whitespace exactly, and [`to_compact`] composes
//!   that same deletion with whitespace removal. Line comments are never
//!   rewritten into block comments.
//! - **A line comment ends at CR/LF or end of input**; its terminator is not
//!   part of the comment and survives where whitespace is preserved.
//! - **Block comments are scanned with lookahead**, so `**/` closes correctly;
//!   an unclosed block comment is [`JsonError::UnterminatedComment`].

use crate::cursor::TextCursor;
use crate::error::{JsonError, Result};

/// Converts JSONC text into compact layout: whitespace and comments removed,
/// strings copied verbatim including their escape sequences.
pub fn to_compact(text: &str) -> Result<String> {
    let mut cursor = TextCursor::new(text);
    let mut out = String::with_capacity(text.len());

    while cursor.can_read() {
        let ch = cursor.read()?;

        match ch {
            '"' => {
                out.push(ch);
                copy_string_body(&mut cursor, &mut out)?;
            }
            '/' => skip_comment_body(&mut cursor)?,
            ' ' | '\u{8}' | '\u{c}' | '\n' | '\r' | '\t' => {}
            _ => out.push(ch),
        }
    }

    Ok(out)
}

/// Converts JSONC text into readable layout with the default indent of 4 spaces.
pub fn to_readable(text: &str) -> Result<String> {
    to_readable_with_indent(text, 4)
}

/// Converts JSONC text into readable layout: one element per line, `indent`
/// spaces per nesting level, `": "` after keys, comments preserved and
/// re-indented to the current depth, trailing newline at end of document.
pub fn to_readable_with_indent(text: &str, indent: usize) -> Result<String> {
    let mut cursor = TextCursor::new(text);
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;

    while cursor.can_read() {
        let ch = cursor.read()?;

        match ch {
            '"' => {
                out.push(ch);
                copy_string_body(&mut cursor, &mut out)?;
            }
            '{' | '[' => {
                out.push(ch);
                out.push('\n');
                depth += 1;
                push_indent(&mut out, indent, depth);
            }
            '}' | ']' => {
                out.push('\n');
                depth = depth.saturating_sub(1);
                push_indent(&mut out, indent, depth);
                out.push(ch);
            }
            ',' => {
                out.push(ch);
                out.push('\n');
                push_indent(&mut out, indent, depth);
            }
            ':' => {
                out.push(ch);
                out.push(' ');
            }
            '/' => {
                out.push(ch);
                copy_comment_body(&mut cursor, &mut out)?;
                out.push('\n');
                push_indent(&mut out, indent, depth);
            }
            ' ' | '\u{8}' | '\u{c}' | '\n' | '\r' | '\t' => {}
            _ => out.push(ch),
        }
    }

    out.push('\n');

    Ok(out)
}

/// Escapes the text for embedding into a JSON string literal.
///
/// Maps `"`, `\`, backspace, form feed, newline, carriage return, and tab to
/// their two-character escape sequences. Everything else — notably `/` and
/// non-ASCII characters — passes through unchanged.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

pub(crate) fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
}

/// Unescapes JSON string-literal content.
///
/// Inverse of [`escape`], plus `\/` and `\uXXXX` unicode escapes. Any other
/// character after `\` fails with a positioned [`JsonError::UnexpectedSymbol`].
pub fn unescape(text: &str) -> Result<String> {
    let mut cursor = TextCursor::new(text);
    let mut out = String::with_capacity(text.len());

    while cursor.can_read() {
        let ch = cursor.read()?;

        if ch != '\\' {
            out.push(ch);
            continue;
        }

        let position = cursor.position();
        let escaped = cursor.read()?;

        match escaped {
            '"' | '\\' | '/' => out.push(escaped),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'u' => out.push(read_unicode_escape(&mut cursor)?),
            found => {
                return Err(JsonError::UnexpectedSymbol {
                    expected: "'\"', '\\', '/', 'b', 'f', 'n', 'r', 't' or 'u' after '\\' symbol"
                        .to_string(),
                    found: Some(found),
                    position,
                })
            }
        }
    }

    Ok(out)
}

/// Removes `//` and `/* */` comments while preserving all other text,
/// whitespace included, exactly as-is.
pub fn clear_comments(text: &str) -> Result<String> {
    let mut cursor = TextCursor::new(text);
    let mut out = String::with_capacity(text.len());

    while cursor.can_read() {
        let ch = cursor.read()?;

        match ch {
            '"' => {
                out.push(ch);
                copy_string_body(&mut cursor, &mut out)?;
            }
            '/' => skip_comment_body(&mut cursor)?,
            _ => out.push(ch),
        }
    }

    Ok(out)
}

fn push_indent(out: &mut String, indent: usize, depth: usize) {
    for _ in 0..indent * depth {
        out.push(' ');
    }
}

/// Copies a string body (after the opening quote) through the closing quote.
/// A `\` copies itself plus the following character.
fn copy_string_body(cursor: &mut TextCursor<'_>, out: &mut String) -> Result<()> {
    loop {
        let ch = cursor.read()?;
        out.push(ch);

        match ch {
            '\\' => out.push(cursor.read()?),
            '"' => return Ok(()),
            _ => {}
        }
    }
}

/// Consumes a comment after its leading `/` has been read, discarding it.
fn skip_comment_body(cursor: &mut TextCursor<'_>) -> Result<()> {
    let position = cursor.position();
    let ch = cursor.read()?;

    match ch {
        '/' => {
            while matches!(cursor.try_peek(), Some(c) if c != '\r' && c != '\n') {
                cursor.read()?;
            }
            Ok(())
        }
        '*' => loop {
            let Ok(ch) = cursor.read() else {
                return Err(JsonError::UnterminatedComment);
            };
            if ch == '*' && cursor.try_peek() == Some('/') {
                cursor.read()?;
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

/// Copies a comment after its leading `/` has been read, emitting it verbatim.
fn copy_comment_body(cursor: &mut TextCursor<'_>, out: &mut String) -> Result<()> {
    let position = cursor.position();
    let ch = cursor.read()?;
    out.push(ch);

    match ch {
        '/' => {
            cursor.read_while(|c| c != '\r' && c != '\n', out);
            Ok(())
        }
        '*' => loop {
            let Ok(ch) = cursor.read() else {
                return Err(JsonError::UnterminatedComment);
            };
            out.push(ch);
            if ch == '*' && cursor.try_peek() == Some('/') {
                out.push(cursor.read()?);
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

/// Decodes the `XXXX` of a `\uXXXX` escape: four hex digits combined
/// big-endian-nibble into a 16-bit code.
fn read_unicode_escape(cursor: &mut TextCursor<'_>) -> Result<char> {
    let mut code = 0u32;

    for _ in 0..4 {
        let position = cursor.position();
        let digit = cursor.read()?;
        let nibble = digit.to_digit(16).ok_or_else(|| JsonError::UnexpectedSymbol {
            expected: "'0-9', 'a-f' or 'A-F' hex digit after 'u' symbol".to_string(),
            found: Some(digit),
            position,
        })?;
        code = (code << 4) | nibble;
    }

    // Codes in the surrogate range are not unicode scalar values.
    char::from_u32(code).ok_or(JsonError::UnexpectedSymbol {
        expected: "unicode scalar value after 'u' symbol".to_string(),
        found: None,
        position: cursor.position(),
    })
}
