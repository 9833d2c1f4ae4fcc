//! Error types for host value conversion

use thiserror::Error;

use crate::value::Value;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a host value to a native type.
///
/// Conversion has exactly one failure mode: the value at some position is
/// not what the native type at that position requires. Encoding never
/// fails, and [`can_convert`](crate::convert::can_convert) reports every
/// would-be error as `false` instead of raising it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A host value did not match the native type declared at its position
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Native type the converter required (e.g. `"boolean"`)
        expected: &'static str,
        /// Host-side type label actually found (e.g. `"string"`)
        found: String,
        /// Property path from the conversion root; `$` is the root itself
        path: String,
    },
}

impl Error {
    /// Builds a [`Error::TypeMismatch`] at the conversion root, capturing
    /// the host-side type label of `found`.
    pub fn type_mismatch(expected: &'static str, found: &Value) -> Self {
        Error::TypeMismatch {
            expected,
            found: found.type_name().to_string(),
            path: "$".to_string(),
        }
    }

    /// Prefixes the error path with an object property segment.
    ///
    /// Converters for compound types call this while an error bubbles out
    /// of a nested field, so `$.flow` wrapped in `params` becomes
    /// `$.params.flow`.
    pub fn at(self, property: &str) -> Self {
        self.prefix(&format!(".{property}"))
    }

    /// Prefixes the error path with an array index segment (`[3]`).
    pub fn at_index(self, index: usize) -> Self {
        self.prefix(&format!("[{index}]"))
    }

    fn prefix(self, segment: &str) -> Self {
        let Error::TypeMismatch {
            expected,
            found,
            path,
        } = self;
        let rest = path.strip_prefix('$').unwrap_or(&path);
        Error::TypeMismatch {
            expected,
            found,
            path: format!("${segment}{rest}"),
        }
    }
}
