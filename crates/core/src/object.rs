//! Insertion-ordered string-keyed objects
//!
//! [`Object`] backs [`Value::Object`](crate::Value::Object). Keys keep
//! their first-insertion position, matching host object key order for
//! string keys, so encoding a record always emits its properties in
//! declaration order. Equality compares key sets, not key order.

use crate::value::Value;

/// An object-shaped host value: unique string keys, insertion-ordered.
///
/// Backed by a vector of entries. The bridge works with a handful of
/// statically known keys per record, so linear lookup beats hashing here
/// and keeps iteration order free.
#[derive(Debug, Clone, Default)]
pub struct Object {
    entries: Vec<(String, Value)>,
}

impl Object {
    /// Creates an empty object.
    pub fn new() -> Self {
        Object::default()
    }

    /// Creates an empty object with space for `capacity` properties.
    pub fn with_capacity(capacity: usize) -> Self {
        Object {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the object has no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks a property up by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Reads a property the way the host does: a key the object does not
    /// have reads as [`Value::Undefined`].
    pub fn property(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&Value::Undefined)
    }

    /// True when the object has the key, even if its value is `undefined`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Sets a property. A new key appends; an existing key is overwritten
    /// in place and keeps its original position, like host assignment.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Key-set equality: same keys bound to equal values, order ignored.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut obj = Object::new();
        for (key, value) in iter {
            obj.insert(key, value);
        }
        obj
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Builds a [`Value::Object`] literal.
///
/// # Example
///
/// ```
/// use hostbridge_core::{object, Value};
///
/// let v = object! {
///     "payWithCard" => true,
///     "note" => Value::Undefined,
/// };
/// assert_eq!(v.as_object().unwrap().len(), 2);
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::Value::Object($crate::Object::new())
    };
    ( $( $key:expr => $value:expr ),+ $(,)? ) => {{
        let mut obj = $crate::Object::new();
        $( obj.insert($key, $value); )+
        $crate::Value::Object(obj)
    }};
}
