//! Error types for JSONC reading, writing, and text formatting.

use crate::value::ValueKind;
use thiserror::Error;

/// Errors that can occur while parsing, serializing, or reformatting JSONC text.
///
/// Every error is raised synchronously at the point of detection and propagates
/// to the caller; a failed read/write/transform yields no partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// A grammar violation during reading, unescaping, or comment scanning.
    ///
    /// `found` is `None` when a specific character class was required but the
    /// input ended instead (e.g. a digit after a decimal separator).
    #[error(
        "unexpected symbol at position {position}: expected {expected}, found {}",
        found_text(.found)
    )]
    UnexpectedSymbol {
        expected: String,
        found: Option<char>,
        position: usize,
    },

    /// The cursor was exhausted mid-token (truncated escape, truncated structure).
    #[error("unexpected end of input at position {position}")]
    UnexpectedEndOfInput { position: usize },

    /// A block comment was opened but never closed before end of input.
    #[error("block comment is not closed before end of input")]
    UnterminatedComment,

    /// A value's raw text violates its kind's canonical form at write time.
    #[error("invalid raw text for {kind} value: '{raw}'")]
    InvalidRawValue { kind: ValueKind, raw: String },

    /// The writer detected an ancestor-reachable cycle in the value tree.
    /// `location` is the offending object key or array index.
    #[error("circular reference in {container} at '{location}'")]
    CircularReference {
        container: ValueKind,
        location: String,
    },

    /// A scalar accessor was invoked on a value of the wrong kind.
    #[error("requested {requested} value, but actual kind is {actual}")]
    TypeMismatch {
        requested: ValueKind,
        actual: ValueKind,
    },
}

fn found_text(found: &Option<char>) -> String {
    match found {
        Some(ch) => format!("'{ch}'"),
        None => "end of input".to_string(),
    }
}

/// Convenience alias used throughout jsonc-core.
pub type Result<T> = std::result::Result<T, JsonError>;
