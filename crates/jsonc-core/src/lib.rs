//! # jsonc-core
//!
//! Hand-written reader, value model, and writer for **JSONC** — JSON extended
//! with `//` line comments and `/* */` block comments — plus streaming
//! text-to-text formatters that reflow, escape, or strip raw JSON/JSONC text
//! without ever building a value tree.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonc_core::{read, write, to_compact};
//!
//! // JSONC → value tree (comments are skipped, positions reported on error)
//! let value = read("{ \"a\": 1, /* note */ \"b\": [true, false, null] }").unwrap();
//!
//! // value tree → compact JSON
//! let json = write(&value).unwrap();
//! assert_eq!(json, r#"{"a":1,"b":[true,false,null]}"#);
//!
//! // pure text-to-text: no value tree involved
//! let compact = to_compact("{ \"a\": 1 } // trailing note").unwrap();
//! assert_eq!(compact, r#"{"a":1}"#);
//! ```
//!
//! ## Modules
//!
//! - [`cursor`] — positioned, lookahead-1 character cursor over input text
//! - [`value`] — the `Value` tree: six kinds with a raw-text contract
//! - [`reader`] — recursive-descent JSONC parser
//! - [`writer`] — compact serializer with reference-cycle detection
//! - [`format`] — compact/readable reflow, escape/unescape, comment stripping
//! - [`error`] — the `JsonError` taxonomy

pub mod cursor;
pub mod error;
pub mod format;
pub mod reader;
pub mod value;
pub mod writer;

pub use cursor::TextCursor;
pub use error::{JsonError, Result};
pub use format::{
    clear_comments, escape, to_compact, to_readable, to_readable_with_indent, unescape,
};
pub use reader::{read, JsonReader};
pub use value::{JsonArray, JsonObject, Value, ValueKind};
pub use writer::{write, write_to};
