//! End-to-end dispatch tests: host-shaped calls routed through the
//! registry into a scripted gateway implementation.
//!
//! The gateway records every call it receives into a shared log, so the
//! tests can check what crossed the binding after the registry has taken
//! ownership of it.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use hostbridge_core::{object, CallError, Registry, Value};
use hostbridge_portmone::{
    timeouts, Language, ModuleError, ModuleResult, PaymentParams, PaymentResult, Portmone,
    PortmoneBinding, PreauthParams, StyleOptions, TokenPaymentParams, OBJECT_NAME,
};

fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("hostbridge_core=debug,hostbridge_portmone=debug")
        .try_init();
}

type CallLog = Arc<Mutex<Vec<String>>>;

/// Scripted gateway: records what it is asked to do and returns canned
/// results. `fail_with` makes the next payment raise that fault.
struct FakeGateway {
    log: CallLog,
    fail_with: Option<ModuleError>,
}

impl FakeGateway {
    fn new(log: CallLog) -> Self {
        FakeGateway {
            log,
            fail_with: None,
        }
    }

    fn failing(log: CallLog, error: ModuleError) -> Self {
        FakeGateway {
            log,
            fail_with: Some(error),
        }
    }

    fn record(&self, line: String) {
        self.log.lock().unwrap().push(line);
    }

    fn take_failure(&mut self) -> ModuleResult<()> {
        match self.fail_with.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Portmone for FakeGateway {
    fn initialize(
        &mut self,
        style: Option<StyleOptions>,
        language: Option<Language>,
    ) -> ModuleResult<()> {
        self.record(format!(
            "initialize styled={} language={:?}",
            style.is_some(),
            language
        ));
        Ok(())
    }

    fn set_payment_timeout(&mut self, timeout: Duration) -> ModuleResult<()> {
        self.record(format!("setTimeout {}s", timeout.as_secs()));
        Ok(())
    }

    fn pay_by_card(
        &mut self,
        params: PaymentParams,
        show_receipt_screen: bool,
    ) -> ModuleResult<PaymentResult> {
        self.take_failure()?;
        self.record(format!(
            "payByCard payee={} amount={} receipt={}",
            params.payee_id, params.bill_amount, show_receipt_screen
        ));
        Ok(PaymentResult {
            status: "PAYED".to_string(),
            bill_amount: params.bill_amount,
            bill_id: Some("B-1".to_string()),
            ..PaymentResult::default()
        })
    }

    fn pay_by_token(
        &mut self,
        params: PaymentParams,
        token: TokenPaymentParams,
        show_receipt_screen: bool,
    ) -> ModuleResult<PaymentResult> {
        self.take_failure()?;
        self.record(format!(
            "payByToken payee={} card={} receipt={}",
            params.payee_id, token.card_number_masked, show_receipt_screen
        ));
        Ok(PaymentResult {
            status: "PAYED".to_string(),
            bill_amount: params.bill_amount,
            card_mask: Some(token.card_number_masked),
            ..PaymentResult::default()
        })
    }

    fn save_card(&mut self, params: PreauthParams) -> ModuleResult<PaymentResult> {
        self.record(format!("saveCard payee={}", params.payee_id));
        Ok(PaymentResult {
            status: "PREAUTH".to_string(),
            card_mask: Some("516914******5180".to_string()),
            token: Some("tok_1".to_string()),
            ..PaymentResult::default()
        })
    }

    fn set_return_to_details_disabled(&mut self, disabled: bool) -> ModuleResult<()> {
        self.record(format!("setReturnToDetailsDisabled {disabled}"));
        Ok(())
    }
}

fn registry_with(gateway: FakeGateway) -> Registry {
    let mut registry = Registry::new();
    registry.register(Box::new(PortmoneBinding::new(gateway)));
    registry
}

fn payment_args() -> Value {
    object! {
        "billAmount" => 10.5,
        "payeeId" => "1185",
        "description" => "traffic fine",
    }
}

#[test]
fn test_full_payment_flow_through_the_registry() {
    init_test_tracing();
    let log = CallLog::default();
    let mut registry = registry_with(FakeGateway::new(log.clone()));
    assert!(registry.contains(OBJECT_NAME));

    let style = object! { "titleColor" => "#FF0000" };
    let language = Value::String("english".to_string());
    registry
        .call(OBJECT_NAME, "initialize", &[style, language])
        .unwrap();
    registry
        .call(
            OBJECT_NAME,
            "setTimeout",
            &[Value::Number(timeouts::FIFTEEN_MINUTES)],
        )
        .unwrap();
    let result = registry
        .call(OBJECT_NAME, "payByCard", &[payment_args()])
        .unwrap();

    let result = result.as_object().unwrap();
    assert_eq!(result.property("status"), &Value::String("PAYED".to_string()));
    assert_eq!(result.property("billAmount"), &Value::Number(10.5));
    assert_eq!(result.property("billId"), &Value::String("B-1".to_string()));
    // Fields the gateway left unset are present but absent-valued.
    assert_eq!(result.property("receiptUrl"), &Value::Undefined);

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "initialize styled=true language=Some(English)".to_string(),
            "setTimeout 900s".to_string(),
            "payByCard payee=1185 amount=10.5 receipt=true".to_string(),
        ]
    );
}

#[test]
fn test_receipt_screen_defaults_to_on() {
    let log = CallLog::default();
    let mut registry = registry_with(FakeGateway::new(log.clone()));

    registry
        .call(OBJECT_NAME, "payByCard", &[payment_args()])
        .unwrap();
    registry
        .call(
            OBJECT_NAME,
            "payByCard",
            &[payment_args(), Value::Bool(false)],
        )
        .unwrap();

    let log = log.lock().unwrap();
    assert!(log[0].ends_with("receipt=true"), "unexpected log: {}", log[0]);
    assert!(log[1].ends_with("receipt=false"), "unexpected log: {}", log[1]);
}

#[test]
fn test_initialize_accepts_missing_arguments() {
    let log = CallLog::default();
    let mut registry = registry_with(FakeGateway::new(log.clone()));

    registry.call(OBJECT_NAME, "initialize", &[]).unwrap();

    assert_eq!(
        *log.lock().unwrap(),
        vec!["initialize styled=false language=None".to_string()]
    );
}

#[test]
fn test_token_payment_routes_all_three_arguments() {
    let log = CallLog::default();
    let mut registry = registry_with(FakeGateway::new(log.clone()));

    let token = object! {
        "cardNumberMasked" => "516914******5180",
        "tokenData" => "tok_1",
    };
    let result = registry
        .call(
            OBJECT_NAME,
            "payByToken",
            &[payment_args(), token, Value::Bool(false)],
        )
        .unwrap();

    let result = result.as_object().unwrap();
    assert_eq!(
        result.property("cardMask"),
        &Value::String("516914******5180".to_string())
    );
    assert_eq!(
        *log.lock().unwrap(),
        vec!["payByToken payee=1185 card=516914******5180 receipt=false".to_string()]
    );
}

#[test]
fn test_save_card_returns_the_token() {
    let log = CallLog::default();
    let mut registry = registry_with(FakeGateway::new(log.clone()));

    let preauth = object! {
        "payeeId" => "1185",
        "description" => "card save",
    };
    let result = registry.call(OBJECT_NAME, "saveCard", &[preauth]).unwrap();

    let result = result.as_object().unwrap();
    assert_eq!(
        result.property("status"),
        &Value::String("PREAUTH".to_string())
    );
    assert_eq!(result.property("token"), &Value::String("tok_1".to_string()));
}

#[test]
fn test_unknown_targets_are_reported() {
    let log = CallLog::default();
    let mut registry = registry_with(FakeGateway::new(log.clone()));

    let err = registry
        .call("Stripe", "payByCard", &[payment_args()])
        .unwrap_err();
    assert_eq!(err, CallError::UnknownObject("Stripe".to_string()));

    let err = registry.call(OBJECT_NAME, "refund", &[]).unwrap_err();
    assert_eq!(err.to_string(), "Portmone has no method \"refund\"");
    // The gateway never saw either call.
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_module_faults_surface_with_their_stable_code() {
    let log = CallLog::default();
    let mut registry = registry_with(FakeGateway::failing(
        log.clone(),
        ModuleError::PaymentCanceled,
    ));

    let err = registry
        .call(OBJECT_NAME, "payByCard", &[payment_args()])
        .unwrap_err();
    assert_eq!(
        err,
        CallError::Module {
            code: 4,
            message: "payment was canceled by user".to_string(),
        }
    );

    // The scripted failure is one-shot; the next payment goes through.
    let result = registry
        .call(OBJECT_NAME, "payByCard", &[payment_args()])
        .unwrap();
    assert!(result.as_object().is_some());
}

#[test]
fn test_bad_argument_reports_the_argument_path() {
    let log = CallLog::default();
    let mut registry = registry_with(FakeGateway::new(log.clone()));

    let err = registry
        .call(OBJECT_NAME, "payByCard", &[Value::Number(5.0)])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "type mismatch at $.arguments[0]: expected object, found number"
    );
    assert!(matches!(err, CallError::Convert(_)));
    assert!(log.lock().unwrap().is_empty());
}
