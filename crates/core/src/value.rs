//! Dynamically typed host values
//!
//! [`Value`] mirrors the object model of a JavaScript-like scripting
//! runtime crossing into native code:
//! - `undefined` and `null` are distinct values
//! - all numbers are double-precision floats
//! - objects are string-keyed with insertion-ordered keys
//!
//! Reading a property an object does not have yields [`Value::Undefined`],
//! exactly like a property access on the host side. The bridge relies on
//! that to treat missing optional fields as absent rather than defaulted.

use std::fmt;

use crate::object::Object;

/// A dynamically typed value from the host scripting runtime.
///
/// # Example
///
/// ```
/// use hostbridge_core::Value;
///
/// let v = Value::from(3.5);
/// assert_eq!(v.type_name(), "number");
/// assert_eq!(v.as_f64(), Some(3.5));
/// assert!(!v.is_absent());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The `undefined` state: a missing property or argument
    Undefined,
    /// An explicit `null`
    Null,
    /// A boolean
    Bool(bool),
    /// A double-precision number
    Number(f64),
    /// A string
    String(String),
    /// An array of values
    Array(Vec<Value>),
    /// A string-keyed object with insertion-ordered keys
    Object(Object),
}

impl Value {
    /// Host-side type label, used in error messages.
    ///
    /// Matches the host's `typeof` where one exists; `null` and arrays get
    /// their own labels since `typeof` lumps both under `"object"`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// True for `undefined`.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// True for `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for either absence state, `undefined` or `null`.
    ///
    /// Optional fields decode to `None` exactly when this holds.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// True for an object-shaped value.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The boolean payload, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The numeric payload, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The object payload, if this is object-shaped.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

/// `None` maps to `undefined`, the host representation of absence.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(inner) => inner.into(),
            None => Value::Undefined,
        }
    }
}

impl fmt::Display for Value {
    /// Renders a host-literal form, e.g. `{payWithCard: true, note: "x"}`.
    /// `undefined` renders literally, unlike JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Value::String(s) => write!(f, "{s:?}"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(obj) => {
                f.write_str("{")?;
                for (i, (key, value)) in obj.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_match_host_labels() {
        assert_eq!(Value::Undefined.type_name(), "undefined");
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Bool(false).type_name(), "boolean");
        assert_eq!(Value::Number(0.0).type_name(), "number");
        assert_eq!(Value::String(String::new()).type_name(), "string");
        assert_eq!(Value::Array(vec![]).type_name(), "array");
        assert_eq!(Value::Object(Object::new()).type_name(), "object");
    }

    #[test]
    fn test_absence_covers_undefined_and_null_only() {
        assert!(Value::Undefined.is_absent());
        assert!(Value::Null.is_absent());
        assert!(!Value::Bool(false).is_absent());
        assert!(!Value::Number(0.0).is_absent());
        assert!(!Value::String(String::new()).is_absent());
    }

    #[test]
    fn test_option_from_maps_none_to_undefined() {
        assert_eq!(Value::from(None::<bool>), Value::Undefined);
        assert_eq!(Value::from(Some(true)), Value::Bool(true));
    }

    #[test]
    fn test_display_renders_host_literals() {
        let mut obj = Object::new();
        obj.insert("flag", true);
        obj.insert("note", "hi");
        obj.insert("gap", Value::Undefined);
        let value = Value::Object(obj);
        assert_eq!(value.to_string(), r#"{flag: true, note: "hi", gap: undefined}"#);
        assert_eq!(Value::Number(2.0).to_string(), "2");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
    }
}
