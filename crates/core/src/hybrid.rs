//! Host-callable module surface.
//!
//! A bridged native module implements [`HybridObject`]; the host reaches
//! it through a [`Registry`], the single composition point where native
//! implementations are bound to host-visible names. Dispatch is by method
//! name with positional arguments, the way a scripting host invokes
//! native methods.
//!
//! Unlike the conversion layer, which stays silent, this layer logs:
//! routing at debug level, unknown targets and module faults at warn.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::convert::FromValue;
use crate::value::Value;

/// Result type alias for host-callable dispatch.
pub type CallResult<T> = std::result::Result<T, CallError>;

/// Errors crossing the dispatch boundary back to the host.
///
/// Conversion failures keep their own taxonomy and arrive here wrapped;
/// everything else is a dispatch concern the conversion layer never sees.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallError {
    /// The registry has no object bound under the requested name
    #[error("no hybrid object named {0:?}")]
    UnknownObject(String),

    /// The object exists but has no method with the requested name
    #[error("{object} has no method {method:?}")]
    UnknownMethod {
        /// Host-visible object name
        object: String,
        /// Requested method name
        method: String,
    },

    /// An argument or result failed to convert
    #[error(transparent)]
    Convert(#[from] crate::error::Error),

    /// The native implementation reported a fault
    #[error("module error {code}: {message}")]
    Module {
        /// Stable numeric code the host can branch on
        code: i32,
        /// Human-readable description
        message: String,
    },
}

impl CallError {
    /// Builds an [`CallError::UnknownMethod`] for `object`.
    pub fn unknown_method(object: &str, method: &str) -> Self {
        CallError::UnknownMethod {
            object: object.to_string(),
            method: method.to_string(),
        }
    }
}

/// Positional argument reader for one method call.
///
/// A host call site may pass fewer arguments than the method declares;
/// the missing tail reads as `undefined`, so trailing optional parameters
/// decode to `None` instead of failing on arity.
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    values: &'a [Value],
}

impl<'a> Arguments<'a> {
    /// Wraps the raw argument slice of a call.
    pub fn new(values: &'a [Value]) -> Self {
        Arguments { values }
    }

    /// Number of arguments actually passed.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the call passed no arguments.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw value at `index`; `undefined` when the caller did not pass it.
    pub fn raw(&self, index: usize) -> &Value {
        self.values.get(index).unwrap_or(&Value::Undefined)
    }

    /// Decodes the argument at `index`, tagging conversion errors with
    /// the argument position (`$.arguments[1]...`).
    pub fn get<T: FromValue>(&self, index: usize) -> CallResult<T> {
        T::from_value(self.raw(index))
            .map_err(|e| CallError::Convert(e.at_index(index).at("arguments")))
    }
}

/// A native module reachable from the host by name.
///
/// Implementations dispatch on the method name and marshal arguments and
/// results through the converter layer. This is the boundary a generated
/// bridge's declarations would bind to; here the binding is an explicit
/// `impl`.
pub trait HybridObject {
    /// The name the host addresses this object by.
    fn name(&self) -> &str;

    /// Invokes `method` with positional `args`.
    fn call(&mut self, method: &str, args: &[Value]) -> CallResult<Value>;
}

/// Name-keyed registry of hybrid objects.
///
/// One registry per embedding; modules are registered explicitly at
/// startup rather than discovered. Routing goes through [`Registry::call`].
#[derive(Default)]
pub struct Registry {
    objects: HashMap<String, Box<dyn HybridObject>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Registry::default()
    }

    /// Binds an object under its own name, replacing any previous binding.
    pub fn register(&mut self, object: Box<dyn HybridObject>) {
        let name = object.name().to_string();
        if self.objects.insert(name.clone(), object).is_some() {
            tracing::warn!("replacing hybrid object binding {}", name);
        }
    }

    /// True when `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    /// Bound object names, sorted for stable output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.objects.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Routes a host call to the named object.
    pub fn call(&mut self, object: &str, method: &str, args: &[Value]) -> CallResult<Value> {
        let Some(target) = self.objects.get_mut(object) else {
            tracing::warn!("call to unregistered hybrid object {}", object);
            return Err(CallError::UnknownObject(object.to_string()));
        };
        tracing::debug!(
            "dispatching {}.{} with {} argument(s)",
            object,
            method,
            args.len()
        );
        let result = target.call(method, args);
        if let Err(err) = &result {
            tracing::warn!("{}.{} failed: {}", object, method, err);
        }
        result
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("objects", &self.names())
            .finish()
    }
}
