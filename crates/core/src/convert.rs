//! Per-type converters between native types and host values.
//!
//! This module provides the two conversion directions:
//! - host [`Value`] → native type, via [`FromValue`] (validated, can fail)
//! - native type → host [`Value`], via [`ToValue`] (total, never fails)
//!
//! One implementation exists per native type and is selected statically at
//! the call site. Compound converters (`Option`, `Vec`, derived records)
//! compose the element converters per field; they never inspect host types
//! themselves.
//!
//! Conversions are strict: a boolean converter accepts only a host
//! boolean. There is no truthiness, no string parsing, no numeric
//! coercion.

use crate::error::{Error, Result};
use crate::object::Object;
use crate::value::Value;

/// Decodes a native value out of a host value.
///
/// The contract tying [`from_value`](FromValue::from_value) to
/// [`can_convert`](FromValue::can_convert) is the correctness core of the
/// bridge: the predicate must return `true` exactly when decoding would
/// succeed. The default `can_convert` body guarantees that; overrides are
/// only ever a cheaper spelling of the same check.
pub trait FromValue: Sized {
    /// Converts `value` to the native type, or reports where and why it
    /// does not fit.
    fn from_value(value: &Value) -> Result<Self>;

    /// Reports whether [`from_value`](FromValue::from_value) would succeed.
    fn can_convert(value: &Value) -> bool {
        Self::from_value(value).is_ok()
    }
}

/// Encodes a native value into a freshly allocated host value.
///
/// Encoding is total: a well-formed native value always has a host
/// representation, so there is no error channel.
pub trait ToValue {
    /// Converts the native value to its host representation.
    fn to_value(&self) -> Value;
}

/// Decodes a `T` out of a host value. Entry point for callers outside the
/// trait vocabulary.
pub fn decode<T: FromValue>(value: &Value) -> Result<T> {
    T::from_value(value)
}

/// Encodes a native value into a freshly allocated host value.
pub fn encode<T: ToValue + ?Sized>(native: &T) -> Value {
    native.to_value()
}

/// Reports whether [`decode`] would succeed for `T`, without building the
/// error. Used as a cheap pre-check before decoding.
pub fn can_convert<T: FromValue>(value: &Value) -> bool {
    T::can_convert(value)
}

// Boolean: strict, no truthiness.
impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(Error::type_mismatch("boolean", other)),
        }
    }

    fn can_convert(value: &Value) -> bool {
        matches!(value, Value::Bool(_))
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

// Number: every host number is a double.
impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => Ok(*n),
            other => Err(Error::type_mismatch("number", other)),
        }
    }

    fn can_convert(value: &Value) -> bool {
        matches!(value, Value::Number(_))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Number(*self)
    }
}

// Integers: a host number whose value is integral and in range. The host
// has no integer type, so fractional and out-of-range doubles are
// mismatches, not rounding candidates.
impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self> {
        // 2^63 exactly; doubles at or beyond it have no i64 form.
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;
        match value {
            Value::Number(n) if n.fract() == 0.0 && *n >= -LIMIT && *n < LIMIT => Ok(*n as i64),
            other => Err(Error::type_mismatch("integer", other)),
        }
    }
}

impl ToValue for i64 {
    fn to_value(&self) -> Value {
        Value::Number(*self as f64)
    }
}

impl FromValue for u32 {
    fn from_value(value: &Value) -> Result<Self> {
        const MAX: f64 = u32::MAX as f64;
        match value {
            Value::Number(n) if n.fract() == 0.0 && *n >= 0.0 && *n <= MAX => Ok(*n as u32),
            other => Err(Error::type_mismatch("unsigned integer", other)),
        }
    }
}

impl ToValue for u32 {
    fn to_value(&self) -> Value {
        Value::Number(f64::from(*self))
    }
}

// String
impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(Error::type_mismatch("string", other)),
        }
    }

    fn can_convert(value: &Value) -> bool {
        matches!(value, Value::String(_))
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

// Option: `undefined` and `null` are both the absent state. Everything
// else must convert as the inner type; a present-but-wrong value is an
// error, not `None`.
impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self> {
        if value.is_absent() {
            Ok(None)
        } else {
            T::from_value(value).map(Some)
        }
    }

    fn can_convert(value: &Value) -> bool {
        value.is_absent() || T::can_convert(value)
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Undefined,
        }
    }
}

// Array
impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| T::from_value(item).map_err(|e| e.at_index(i)))
                .collect(),
            other => Err(Error::type_mismatch("array", other)),
        }
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(ToValue::to_value).collect())
    }
}

// Raw pass-through for callers that want the host value untouched.
impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }

    fn can_convert(_value: &Value) -> bool {
        true
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FromValue for Object {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(obj) => Ok(obj.clone()),
            other => Err(Error::type_mismatch("object", other)),
        }
    }

    fn can_convert(value: &Value) -> bool {
        value.is_object()
    }
}

impl ToValue for Object {
    fn to_value(&self) -> Value {
        Value::Object(self.clone())
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}
