//! Serializes a [`Value`] tree back into compact JSON text.
//!
//! Scalar raw text is written verbatim (strings are escaped and quoted at the
//! emit site); objects and arrays are emitted in insertion/index order with no
//! whitespace, so a tree read from compact text writes back byte for byte.
//!
//! Because containers are shared handles, a caller can insert an ancestor into
//! its own descendant and form a cycle. The writer tracks the identity of
//! every container currently on the write stack and fails with
//! [`JsonError::CircularReference`] before descending into a child that is
//! already being written. The identity leaves the set as soon as the container
//! finishes, so reusing one shared subtree under several siblings is legal.

use crate::error::{JsonError, Result};
use crate::format;
use crate::value::{JsonArray, JsonObject, Value, ValueKind};
use std::collections::HashSet;

/// Writes the value tree as compact JSON text.
pub fn write(value: &Value) -> Result<String> {
    let mut out = String::new();
    write_to(value, &mut out)?;
    Ok(out)
}

/// Writes the value tree into an existing buffer.
pub fn write_to(value: &Value, out: &mut String) -> Result<()> {
    JsonWriter::new().write_value(value, out)
}

struct JsonWriter {
    active: HashSet<usize>,
}

impl JsonWriter {
    fn new() -> Self {
        JsonWriter {
            active: HashSet::new(),
        }
    }

    fn write_value(&mut self, value: &Value, out: &mut String) -> Result<()> {
        match value {
            Value::Null => {
                out.push_str("null");
                Ok(())
            }
            Value::Boolean(true) => {
                out.push_str("true");
                Ok(())
            }
            Value::Boolean(false) => {
                out.push_str("false");
                Ok(())
            }
            Value::Number(raw) => self.write_number(raw, out),
            Value::String(content) => {
                out.push('"');
                format::escape_into(content, out);
                out.push('"');
                Ok(())
            }
            Value::Object(object) => self.write_object(object, out),
            Value::Array(array) => self.write_array(array, out),
        }
    }

    fn write_number(&self, raw: &str, out: &mut String) -> Result<()> {
        if raw.is_empty() {
            return Err(JsonError::InvalidRawValue {
                kind: ValueKind::Number,
                raw: raw.to_string(),
            });
        }

        out.push_str(raw);
        Ok(())
    }

    fn write_object(&mut self, object: &JsonObject, out: &mut String) -> Result<()> {
        self.active.insert(object.id());

        out.push('{');

        {
            let entries = object.entries();

            for (index, (key, element)) in entries.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }

                out.push('"');
                format::escape_into(key, out);
                out.push('"');
                out.push(':');

                self.check_cycle(element, ValueKind::Object, key)?;
                self.write_value(element, out)?;
            }
        }

        out.push('}');

        self.active.remove(&object.id());
        Ok(())
    }

    fn write_array(&mut self, array: &JsonArray, out: &mut String) -> Result<()> {
        self.active.insert(array.id());

        out.push('[');

        {
            let elements = array.elements();

            for (index, element) in elements.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }

                self.check_cycle(element, ValueKind::Array, &index.to_string())?;
                self.write_value(element, out)?;
            }
        }

        out.push(']');

        self.active.remove(&array.id());
        Ok(())
    }

    /// Fails if the element is a container that is already on the write stack.
    fn check_cycle(&self, element: &Value, container: ValueKind, location: &str) -> Result<()> {
        let id = match element {
            Value::Object(object) => object.id(),
            Value::Array(array) => array.id(),
            _ => return Ok(()),
        };

        if self.active.contains(&id) {
            return Err(JsonError::CircularReference {
                container,
                location: location.to_string(),
            });
        }

        Ok(())
    }
}
