//! Portmone payment module bridged over hostbridge-core
//!
//! This crate is the bridged-module instance: the full record and enum
//! inventory of the Portmone payment interface, the styling surface, the
//! module fault codes, and the [`Portmone`] trait with its host binding.
//!
//! The split mirrors how such a module is wired in practice:
//! - [`types`] holds the wire shapes ([`PaymentParams`],
//!   [`PaymentResult`], [`PaymentFlowType`], ...), all deriving the
//!   conversion layer's record/enum derives
//! - [`style`] resolves the loose [`StyleOptions`] record into a
//!   [`Theme`] with every slot filled
//! - [`module`] declares the [`Portmone`] implementation boundary and
//!   binds it to the host-callable surface through [`PortmoneBinding`]
//!
//! # Example
//!
//! ```
//! use hostbridge_core::{object, Registry, Value};
//! use hostbridge_portmone::{
//!     ModuleResult, PaymentParams, PaymentResult, Portmone, PortmoneBinding, PreauthParams,
//!     TokenPaymentParams,
//! };
//!
//! struct Gateway;
//!
//! impl Portmone for Gateway {
//!     fn initialize(
//!         &mut self,
//!         _style: Option<hostbridge_portmone::StyleOptions>,
//!         _language: Option<hostbridge_portmone::Language>,
//!     ) -> ModuleResult<()> {
//!         Ok(())
//!     }
//!     fn set_payment_timeout(&mut self, _timeout: std::time::Duration) -> ModuleResult<()> {
//!         Ok(())
//!     }
//!     fn pay_by_card(
//!         &mut self,
//!         params: PaymentParams,
//!         _show_receipt_screen: bool,
//!     ) -> ModuleResult<PaymentResult> {
//!         Ok(PaymentResult {
//!             status: "PAYED".to_string(),
//!             bill_amount: params.bill_amount,
//!             ..PaymentResult::default()
//!         })
//!     }
//!     fn pay_by_token(
//!         &mut self,
//!         params: PaymentParams,
//!         _token: TokenPaymentParams,
//!         show_receipt_screen: bool,
//!     ) -> ModuleResult<PaymentResult> {
//!         self.pay_by_card(params, show_receipt_screen)
//!     }
//!     fn save_card(&mut self, _params: PreauthParams) -> ModuleResult<PaymentResult> {
//!         Ok(PaymentResult::default())
//!     }
//!     fn set_return_to_details_disabled(&mut self, _disabled: bool) -> ModuleResult<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut registry = Registry::new();
//! registry.register(Box::new(PortmoneBinding::new(Gateway)));
//!
//! let params = object! {
//!     "billAmount" => 10.5,
//!     "payeeId" => "1185",
//! };
//! let result = registry.call("Portmone", "payByCard", &[params]).unwrap();
//! let result = result.as_object().unwrap();
//! assert_eq!(result.property("status"), &Value::String("PAYED".to_string()));
//! assert_eq!(result.property("billAmount"), &Value::Number(10.5));
//! ```

#![warn(clippy::all)]

pub mod error;
pub mod module;
pub mod style;
pub mod types;

pub use error::{ModuleError, ModuleResult};
pub use module::{timeouts, Portmone, PortmoneBinding, DEFAULT_TIMEOUT, OBJECT_NAME};
pub use style::{Color, Font, FontWeight, Theme};
pub use types::{
    Currency, Language, PaymentFlowType, PaymentParams, PaymentResult, PaymentStatus, PaymentType,
    PreauthParams, ResolvedFlowType, ResolvedPaymentParams, StyleOptions, TokenPaymentParams,
};
