//! The Portmone module surface and its host binding.
//!
//! [`Portmone`] is the native implementation boundary, one method per
//! host-visible operation. [`PortmoneBinding`] wraps an implementation
//! and exposes it as a [`HybridObject`]: it decodes arguments, applies
//! the host-side defaults (receipt screen on, milliseconds to seconds),
//! and encodes results. Registering the binding in a
//! [`Registry`](hostbridge_core::Registry) is the whole wiring.

use std::time::Duration;

use hostbridge_core::{Arguments, CallError, CallResult, HybridObject, ToValue, Value};

use crate::error::{ModuleError, ModuleResult};
use crate::types::{
    Language, PaymentParams, PaymentResult, PreauthParams, StyleOptions, TokenPaymentParams,
};

/// Host-visible name of the module object.
pub const OBJECT_NAME: &str = "Portmone";

/// Common payment form timeouts, in milliseconds.
pub mod timeouts {
    /// Fifteen minutes.
    pub const FIFTEEN_MINUTES: f64 = 15.0 * 60.0 * 1000.0;
    /// Thirty minutes.
    pub const THIRTY_MINUTES: f64 = 30.0 * 60.0 * 1000.0;
    /// One hour, the default when no timeout is set.
    pub const ONE_HOUR: f64 = 60.0 * 60.0 * 1000.0;
}

/// Default payment form timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// The native implementation boundary of the payment module.
///
/// All methods are synchronous; the host's promise plumbing lives outside
/// this layer. Implementations report faults through [`ModuleError`],
/// which the binding surfaces to the host with the fault's stable code.
pub trait Portmone {
    /// Applies styling and language before any payment request.
    fn initialize(
        &mut self,
        style: Option<StyleOptions>,
        language: Option<Language>,
    ) -> ModuleResult<()>;

    /// Sets how long a payment form stays open before it is closed.
    fn set_payment_timeout(&mut self, timeout: Duration) -> ModuleResult<()>;

    /// Runs a card payment, returning the settled result.
    fn pay_by_card(
        &mut self,
        params: PaymentParams,
        show_receipt_screen: bool,
    ) -> ModuleResult<PaymentResult>;

    /// Runs a payment against a previously saved card token.
    fn pay_by_token(
        &mut self,
        params: PaymentParams,
        token: TokenPaymentParams,
        show_receipt_screen: bool,
    ) -> ModuleResult<PaymentResult>;

    /// Saves a card through a small preauth block, returning the token.
    fn save_card(&mut self, params: PreauthParams) -> ModuleResult<PaymentResult>;

    /// Controls whether the user can return to the details screen after
    /// payment.
    fn set_return_to_details_disabled(&mut self, disabled: bool) -> ModuleResult<()>;
}

/// Host binding for a [`Portmone`] implementation.
///
/// Method names and argument positions follow the host interface; a
/// trailing receipt-screen argument left out by the caller defaults to
/// `true`, and the timeout arrives in milliseconds but implementations
/// see a [`Duration`].
#[derive(Debug)]
pub struct PortmoneBinding<T> {
    inner: T,
}

impl<T: Portmone> PortmoneBinding<T> {
    /// Wraps an implementation for registration.
    pub fn new(inner: T) -> Self {
        PortmoneBinding { inner }
    }

    /// The wrapped implementation.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// The wrapped implementation, mutably.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Unwraps the implementation.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

fn timeout_from_millis(millis: f64) -> CallResult<Duration> {
    // try_from_secs_f64 rejects negative, non-finite and overflowing
    // values in one pass.
    Duration::try_from_secs_f64(millis / 1000.0).map_err(|_| {
        ModuleError::InvalidParameters(format!(
            "timeout must be a non-negative, in-range number of milliseconds, got {millis}"
        ))
        .into()
    })
}

impl<T: Portmone> HybridObject for PortmoneBinding<T> {
    fn name(&self) -> &str {
        OBJECT_NAME
    }

    fn call(&mut self, method: &str, args: &[Value]) -> CallResult<Value> {
        let args = Arguments::new(args);
        match method {
            "initialize" => {
                let style: Option<StyleOptions> = args.get(0)?;
                let language: Option<Language> = args.get(1)?;
                self.inner.initialize(style, language)?;
                Ok(Value::Undefined)
            }
            "setTimeout" => {
                let millis: f64 = args.get(0)?;
                let timeout = timeout_from_millis(millis)?;
                tracing::debug!("payment timeout set to {:?}", timeout);
                self.inner.set_payment_timeout(timeout)?;
                Ok(Value::Undefined)
            }
            "payByCard" => {
                let params: PaymentParams = args.get(0)?;
                let show_receipt: Option<bool> = args.get(1)?;
                tracing::debug!(
                    "payByCard payee {} amount {}",
                    params.payee_id,
                    params.bill_amount
                );
                let result = self.inner.pay_by_card(params, show_receipt.unwrap_or(true))?;
                Ok(result.to_value())
            }
            "payByToken" => {
                let params: PaymentParams = args.get(0)?;
                let token: TokenPaymentParams = args.get(1)?;
                let show_receipt: Option<bool> = args.get(2)?;
                tracing::debug!(
                    "payByToken payee {} card {}",
                    params.payee_id,
                    token.card_number_masked
                );
                let result =
                    self.inner
                        .pay_by_token(params, token, show_receipt.unwrap_or(true))?;
                Ok(result.to_value())
            }
            "saveCard" => {
                let params: PreauthParams = args.get(0)?;
                tracing::debug!("saveCard payee {}", params.payee_id);
                let result = self.inner.save_card(params)?;
                Ok(result.to_value())
            }
            "setReturnToDetailsDisabled" => {
                let disabled: bool = args.get(0)?;
                self.inner.set_return_to_details_disabled(disabled)?;
                Ok(Value::Undefined)
            }
            _ => Err(CallError::unknown_method(OBJECT_NAME, method)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        timeout: Option<Duration>,
        return_disabled: bool,
    }

    impl Portmone for Recorder {
        fn initialize(
            &mut self,
            _style: Option<StyleOptions>,
            _language: Option<Language>,
        ) -> ModuleResult<()> {
            Ok(())
        }

        fn set_payment_timeout(&mut self, timeout: Duration) -> ModuleResult<()> {
            self.timeout = Some(timeout);
            Ok(())
        }

        fn pay_by_card(
            &mut self,
            _params: PaymentParams,
            _show_receipt_screen: bool,
        ) -> ModuleResult<PaymentResult> {
            Ok(PaymentResult::default())
        }

        fn pay_by_token(
            &mut self,
            _params: PaymentParams,
            _token: TokenPaymentParams,
            _show_receipt_screen: bool,
        ) -> ModuleResult<PaymentResult> {
            Ok(PaymentResult::default())
        }

        fn save_card(&mut self, _params: PreauthParams) -> ModuleResult<PaymentResult> {
            Ok(PaymentResult::default())
        }

        fn set_return_to_details_disabled(&mut self, disabled: bool) -> ModuleResult<()> {
            self.return_disabled = disabled;
            Ok(())
        }
    }

    #[test]
    fn test_set_timeout_converts_milliseconds_to_duration() {
        let mut binding = PortmoneBinding::new(Recorder::default());
        binding
            .call("setTimeout", &[Value::Number(timeouts::FIFTEEN_MINUTES)])
            .unwrap();
        assert_eq!(binding.inner().timeout, Some(Duration::from_secs(15 * 60)));
    }

    #[test]
    fn test_set_timeout_rejects_out_of_range_millis() {
        let mut binding = PortmoneBinding::new(Recorder::default());
        // 1e23 ms is finite but overflows Duration; it must come back as an
        // error like the rest, not abort the call.
        for bad in [-1.0, f64::NAN, f64::INFINITY, 1e23] {
            let err = binding.call("setTimeout", &[Value::Number(bad)]).unwrap_err();
            assert!(
                matches!(err, CallError::Module { code: 5, .. }),
                "expected invalid-parameters code for {bad}, got {err}"
            );
        }
        assert_eq!(binding.inner().timeout, None);
    }

    #[test]
    fn test_void_methods_return_undefined() {
        let mut binding = PortmoneBinding::new(Recorder::default());
        let returned = binding
            .call("setReturnToDetailsDisabled", &[Value::Bool(true)])
            .unwrap();
        assert_eq!(returned, Value::Undefined);
        assert!(binding.inner().return_disabled);
    }
}
