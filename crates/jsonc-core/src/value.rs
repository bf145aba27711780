//! The JSONC value model.
//!
//! [`Value`] is a closed sum over the six JSON kinds. Scalar kinds carry a
//! canonical raw form: `Number` holds the exact numeric token as matched in
//! source (written back verbatim, so `1.0` and `1` stay distinct), and
//! `String` holds the *unescaped* logical content — escaping happens only at
//! write time and in the explicit [`escape`](crate::format::escape)/
//! [`unescape`](crate::format::unescape) utilities.
//!
//! [`JsonObject`] and [`JsonArray`] are shared, mutable container *handles*:
//! cloning a handle aliases the same underlying container, so one subtree can
//! appear in several places and a caller can even form a cycle by inserting an
//! ancestor into its own descendant. The writer detects and rejects such
//! cycles by handle identity (see [`crate::writer`]). Handles are not `Send`
//! or `Sync`; a tree belongs to one thread and concurrent mutation must be
//! serialized by the caller.

use crate::error::{JsonError, Result};
use indexmap::IndexMap;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// The kind of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Object,
    Array,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Object => "object",
            ValueKind::Array => "array",
        };
        f.write_str(name)
    }
}

/// A JSONC document value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    /// The raw numeric token, e.g. `"1.5e+10"`. Written back verbatim; never empty.
    Number(String),
    /// The unescaped logical string content.
    String(String),
    Object(JsonObject),
    Array(JsonArray),
}

impl Value {
    /// Builds a number value from a caller-validated raw token.
    ///
    /// The token is written back verbatim by the writer, which only checks
    /// that it is non-empty. Prefer the `From` conversions for native numbers.
    pub fn number(raw: impl Into<String>) -> Value {
        Value::Number(raw.into())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
        }
    }

    /// The canonical raw text of a scalar value, `None` for containers.
    pub fn raw(&self) -> Option<&str> {
        match self {
            Value::Null => Some("null"),
            Value::Boolean(true) => Some("true"),
            Value::Boolean(false) => Some("false"),
            Value::Number(raw) => Some(raw),
            Value::String(content) => Some(content),
            Value::Object(_) | Value::Array(_) => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Boolean(value) => Ok(*value),
            other => Err(mismatch(ValueKind::Boolean, other)),
        }
    }

    pub fn as_i64(&self) -> Result<i64> {
        match self {
            Value::Number(raw) => raw.parse().map_err(|_| JsonError::InvalidRawValue {
                kind: ValueKind::Number,
                raw: raw.clone(),
            }),
            other => Err(mismatch(ValueKind::Number, other)),
        }
    }

    pub fn as_f64(&self) -> Result<f64> {
        match self {
            Value::Number(raw) => raw.parse().map_err(|_| JsonError::InvalidRawValue {
                kind: ValueKind::Number,
                raw: raw.clone(),
            }),
            other => Err(mismatch(ValueKind::Number, other)),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(content) => Ok(content),
            other => Err(mismatch(ValueKind::String, other)),
        }
    }

    pub fn as_object(&self) -> Result<&JsonObject> {
        match self {
            Value::Object(object) => Ok(object),
            other => Err(mismatch(ValueKind::Object, other)),
        }
    }

    pub fn as_array(&self) -> Result<&JsonArray> {
        match self {
            Value::Array(array) => Ok(array),
            other => Err(mismatch(ValueKind::Array, other)),
        }
    }
}

fn mismatch(requested: ValueKind, actual: &Value) -> JsonError {
    JsonError::TypeMismatch {
        requested,
        actual: actual.kind(),
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.to_string())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value.to_string())
    }
}

/// Uses Rust's default rendering (invariant digits, never exponent notation).
/// The value must be finite to produce a valid numeric token.
impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value.to_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<JsonObject> for Value {
    fn from(value: JsonObject) -> Self {
        Value::Object(value)
    }
}

impl From<JsonArray> for Value {
    fn from(value: JsonArray) -> Self {
        Value::Array(value)
    }
}

/// An insertion-ordered mapping from string keys to values.
///
/// Inserting an existing key overwrites the value in place and keeps the
/// original position (last write wins, no duplicate-key error).
#[derive(Debug, Clone, Default)]
pub struct JsonObject {
    entries: Rc<RefCell<IndexMap<String, Value>>>,
}

impl JsonObject {
    pub fn new() -> Self {
        JsonObject::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    /// Inserts a value under the key, returning the previous value if any.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.borrow_mut().insert(key.into(), value.into())
    }

    /// Looks up a value by key. Scalars are copied; containers alias.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn remove(&self, key: &str) -> Option<Value> {
        self.entries.borrow_mut().shift_remove(key)
    }

    /// Borrows the underlying map, e.g. to iterate entries in insertion order.
    pub fn entries(&self) -> Ref<'_, IndexMap<String, Value>> {
        self.entries.borrow()
    }

    pub fn entries_mut(&self) -> RefMut<'_, IndexMap<String, Value>> {
        self.entries.borrow_mut()
    }

    /// Stable handle identity, used by the writer's cycle-detection set.
    pub(crate) fn id(&self) -> usize {
        Rc::as_ptr(&self.entries) as *const () as usize
    }
}

impl PartialEq for JsonObject {
    /// Structural, order-sensitive equality. Comparing cyclic trees recurses
    /// without bound; callers compare acyclic trees only.
    fn eq(&self, other: &Self) -> bool {
        if Rc::ptr_eq(&self.entries, &other.entries) {
            return true;
        }
        let left = self.entries.borrow();
        let right = other.entries.borrow();
        left.len() == right.len()
            && left
                .iter()
                .zip(right.iter())
                .all(|((lk, lv), (rk, rv))| lk == rk && lv == rv)
    }
}

/// An ordered sequence of values.
#[derive(Debug, Clone, Default)]
pub struct JsonArray {
    elements: Rc<RefCell<Vec<Value>>>,
}

impl JsonArray {
    pub fn new() -> Self {
        JsonArray::default()
    }

    pub fn len(&self) -> usize {
        self.elements.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.borrow().is_empty()
    }

    pub fn push(&self, value: impl Into<Value>) {
        self.elements.borrow_mut().push(value.into());
    }

    /// Looks up an element by index. Scalars are copied; containers alias.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.elements.borrow().get(index).cloned()
    }

    /// Borrows the underlying vector, e.g. to iterate elements in order.
    pub fn elements(&self) -> Ref<'_, Vec<Value>> {
        self.elements.borrow()
    }

    pub fn elements_mut(&self) -> RefMut<'_, Vec<Value>> {
        self.elements.borrow_mut()
    }

    /// Stable handle identity, used by the writer's cycle-detection set.
    pub(crate) fn id(&self) -> usize {
        Rc::as_ptr(&self.elements) as *const () as usize
    }
}

impl PartialEq for JsonArray {
    /// Structural, order-sensitive equality. Comparing cyclic trees recurses
    /// without bound; callers compare acyclic trees only.
    fn eq(&self, other: &Self) -> bool {
        if Rc::ptr_eq(&self.elements, &other.elements) {
            return true;
        }
        *self.elements.borrow() == *other.elements.borrow()
    }
}

impl FromIterator<(String, Value)> for JsonObject {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let object = JsonObject::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

impl FromIterator<Value> for JsonArray {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        let array = JsonArray::new();
        for value in iter {
            array.push(value);
        }
        array
    }
}
