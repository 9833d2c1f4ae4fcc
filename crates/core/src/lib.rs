//! Hostbridge Core - host value marshaling and module dispatch
//!
//! This crate is the in-process bridge between a statically typed native
//! module and a dynamically typed scripting host:
//!
//! - A host value model ([`Value`], [`Object`]) with the host's object
//!   semantics: `undefined` distinct from `null`, doubles for all
//!   numbers, insertion-ordered object keys
//! - Per-type converters ([`FromValue`], [`ToValue`]) selected statically
//!   at each call site, with [`can_convert`] as the pre-check predicate
//! - Record and enum derives ([`HostRecord`], [`HostEnum`]) generating
//!   the per-field conversion a code generator would otherwise emit
//! - A dispatch surface ([`HybridObject`], [`Registry`]) binding native
//!   implementations to host-callable names
//!
//! Conversion is validated and all-or-nothing: a host value that does not
//! fit the declared native shape fails with [`Error::TypeMismatch`],
//! never with a guessed default. Absent optional fields stay absent
//! through both directions.
//!
//! # Example
//!
//! ```
//! use hostbridge_core::{decode, encode, object, HostRecord, Value};
//!
//! #[derive(Debug, PartialEq, HostRecord)]
//! struct PaymentFlowType {
//!     pay_with_card: Option<bool>,
//!     pay_with_apple_g_pay: Option<bool>,
//!     #[host(rename = "withoutCVV")]
//!     without_cvv: Option<bool>,
//! }
//!
//! let host = object! {
//!     "payWithCard" => true,
//!     "withoutCVV" => false,
//! };
//! let flow: PaymentFlowType = decode(&host)?;
//! assert_eq!(flow.pay_with_card, Some(true));
//! assert_eq!(flow.pay_with_apple_g_pay, None);
//!
//! let back = encode(&flow);
//! assert_eq!(back.as_object().unwrap().property("payWithCard"), &Value::Bool(true));
//! assert_eq!(back.as_object().unwrap().property("payWithAppleGPay"), &Value::Undefined);
//! # Ok::<(), hostbridge_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convert;
pub mod error;
pub mod hybrid;
pub mod json;
pub mod object;
pub mod value;

pub use convert::{can_convert, decode, encode, FromValue, ToValue};
pub use error::{Error, Result};
pub use hybrid::{Arguments, CallError, CallResult, HybridObject, Registry};
pub use object::Object;
pub use value::Value;

// Derives generating FromValue/ToValue for flat records and
// string-valued enums.
pub use hostbridge_core_derive::{HostEnum, HostRecord};
