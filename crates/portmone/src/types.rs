//! Record and enum inventory of the Portmone payment interface.
//!
//! These are the shapes that cross the host boundary. Records derive
//! [`HostRecord`] for host-value marshaling and serde for JSON use; the
//! wire keeps `status`, `billCurrency` and `type` as free strings, with
//! typed accessors parsing them on demand so unknown wire values stay
//! representable.

use hostbridge_core::{HostEnum, HostRecord};
use serde::{Deserialize, Serialize};

/// Billing currency. Wire form is the uppercase ISO code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, HostEnum)]
#[host(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Ukrainian hryvnia, the provider default
    #[default]
    Uah,
    /// United States dollar
    Usd,
    /// Euro
    Eur,
    /// British pound
    Gbp,
    /// Belarusian ruble
    Byn,
    /// Kazakhstani tenge
    Kzt,
}

/// Kind of payment being made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, HostEnum)]
pub enum PaymentType {
    /// Regular one-off payment, the provider default
    #[default]
    Payment,
    /// Mobile top-up
    MobilePayment,
    /// Account payment
    Account,
}

/// Language of the payment screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, HostEnum)]
pub enum Language {
    /// Ukrainian, the provider default
    #[default]
    Ukrainian,
    /// English
    English,
}

/// Final status of a payment attempt.
///
/// The wire strings are mixed-case: provider statuses are uppercase,
/// interaction and legacy statuses lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, HostEnum)]
pub enum PaymentStatus {
    /// Payment settled
    #[host(rename = "PAYED")]
    Payed,
    /// Amount blocked for a later settlement
    #[host(rename = "PREAUTH")]
    Preauth,
    /// User canceled on the payment screen
    Canceled,
    /// Payment screen dismissed without completing
    Dismissed,
    /// Payment form closed by the configured timeout
    Timeout,
    /// Legacy success value
    Success,
    /// Legacy error value
    Error,
}

/// Payment flow flags, each independently optional.
///
/// Absent means "not specified", which is not the same as `false`; the
/// provider defaults are applied only at [`PaymentFlowType::resolved`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, HostRecord)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentFlowType {
    /// Offer plain card entry
    pub pay_with_card: Option<bool>,
    /// Offer the platform wallet button
    pub pay_with_apple_g_pay: Option<bool>,
    /// Skip the CVV prompt for tokenized cards
    #[serde(rename = "withoutCVV")]
    #[host(rename = "withoutCVV")]
    pub without_cvv: Option<bool>,
}

/// Flow flags with every option resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedFlowType {
    /// Plain card entry offered
    pub pay_with_card: bool,
    /// Platform wallet button offered
    pub pay_with_apple_g_pay: bool,
    /// CVV prompt skipped
    pub without_cvv: bool,
}

impl Default for ResolvedFlowType {
    /// Provider defaults: card payment on, wallet pay off, CVV asked.
    fn default() -> Self {
        ResolvedFlowType {
            pay_with_card: true,
            pay_with_apple_g_pay: false,
            without_cvv: false,
        }
    }
}

impl PaymentFlowType {
    /// Fills absent flags with the provider defaults. `None` input means
    /// no flow object was supplied at all.
    pub fn resolved(flow: Option<&PaymentFlowType>) -> ResolvedFlowType {
        let defaults = ResolvedFlowType::default();
        ResolvedFlowType {
            pay_with_card: flow
                .and_then(|f| f.pay_with_card)
                .unwrap_or(defaults.pay_with_card),
            pay_with_apple_g_pay: flow
                .and_then(|f| f.pay_with_apple_g_pay)
                .unwrap_or(defaults.pay_with_apple_g_pay),
            without_cvv: flow
                .and_then(|f| f.without_cvv)
                .unwrap_or(defaults.without_cvv),
        }
    }
}

/// Parameters for a card or token payment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, HostRecord)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentParams {
    pub description: Option<String>,
    pub attribute1: Option<String>,
    pub attribute2: Option<String>,
    pub attribute3: Option<String>,
    pub attribute4: Option<String>,
    pub attribute5: Option<String>,
    /// Merchant bill number; generated when absent
    pub bill_number: Option<String>,
    /// Block the amount instead of settling immediately
    pub preauth_flag: Option<bool>,
    /// Currency code string; see [`PaymentParams::currency`]
    pub bill_currency: Option<String>,
    /// Amount to bill
    pub bill_amount: f64,
    /// Amount billed when the CVV-less flow is used
    pub bill_amount_wcvv: Option<f64>,
    /// Merchant identifier with the payment provider
    pub payee_id: String,
    /// Payment type string; see [`PaymentParams::payment_type`]
    pub r#type: Option<String>,
    /// Wallet-pay merchant identifier
    pub merchant_identifier: Option<String>,
    pub payment_flow_type: Option<PaymentFlowType>,
}

impl PaymentParams {
    /// Parses `billCurrency`. Unknown strings and absence both fall back
    /// to hryvnia, matching the provider behavior.
    pub fn currency(&self) -> Currency {
        match self.bill_currency.as_deref() {
            Some("USD") => Currency::Usd,
            Some("EUR") => Currency::Eur,
            Some("GBP") => Currency::Gbp,
            Some("BYN") => Currency::Byn,
            Some("KZT") => Currency::Kzt,
            // "UAH", unknown strings and absence all land here.
            _ => Currency::Uah,
        }
    }

    /// Parses `type`. Unknown strings and absence fall back to a regular
    /// payment.
    pub fn payment_type(&self) -> PaymentType {
        match self.r#type.as_deref() {
            Some("mobilePayment") => PaymentType::MobilePayment,
            Some("account") => PaymentType::Account,
            _ => PaymentType::Payment,
        }
    }

    /// Applies every provider default, producing the fully required shape
    /// the payment provider consumes.
    pub fn resolve(&self) -> ResolvedPaymentParams {
        ResolvedPaymentParams {
            description: self.description.clone().unwrap_or_default(),
            attribute1: self.attribute1.clone().unwrap_or_default(),
            attribute2: self.attribute2.clone().unwrap_or_default(),
            attribute3: self.attribute3.clone().unwrap_or_default(),
            attribute4: self.attribute4.clone().unwrap_or_default(),
            attribute5: self.attribute5.clone().unwrap_or_default(),
            bill_number: self
                .bill_number
                .clone()
                .unwrap_or_else(generated_bill_number),
            preauth_flag: self.preauth_flag.unwrap_or(false),
            bill_currency: self.currency(),
            bill_amount: self.bill_amount,
            bill_amount_wcvv: self.bill_amount_wcvv.unwrap_or(0.0),
            payee_id: self.payee_id.clone(),
            payment_type: self.payment_type(),
            merchant_identifier: self.merchant_identifier.clone().unwrap_or_default(),
            payment_flow_type: PaymentFlowType::resolved(self.payment_flow_type.as_ref()),
        }
    }
}

/// `SDK` plus the current UNIX timestamp, used when no bill number is
/// supplied.
fn generated_bill_number() -> String {
    let epoch = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("SDK{epoch}")
}

/// Payment parameters after [`PaymentParams::resolve`]: every field
/// required, every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPaymentParams {
    pub description: String,
    pub attribute1: String,
    pub attribute2: String,
    pub attribute3: String,
    pub attribute4: String,
    pub attribute5: String,
    pub bill_number: String,
    pub preauth_flag: bool,
    pub bill_currency: Currency,
    pub bill_amount: f64,
    pub bill_amount_wcvv: f64,
    pub payee_id: String,
    pub payment_type: PaymentType,
    pub merchant_identifier: String,
    pub payment_flow_type: ResolvedFlowType,
}

/// Saved-card token credentials for a token payment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, HostRecord)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenPaymentParams {
    /// Masked card number shown to the user, e.g. `516914******5180`
    pub card_number_masked: String,
    /// Opaque card token from a previous payment
    pub token_data: String,
}

/// Parameters for saving a card via a small preauth block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, HostRecord)]
#[serde(default, rename_all = "camelCase")]
pub struct PreauthParams {
    /// Merchant identifier with the payment provider
    pub payee_id: String,
    pub account_id: Option<String>,
    pub description: String,
    pub bill_number: Option<String>,
}

/// Styling overrides for the payment screens. Color fields hold hex
/// strings (`#RRGGBB` or `#RRGGBBAA`); see [`crate::style::Theme`] for
/// resolution into concrete colors and fonts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, HostRecord)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleOptions {
    // Title
    pub title_font_name: Option<String>,
    pub title_color: Option<String>,
    pub title_background_color: Option<String>,

    // Headers
    pub headers_font_name: Option<String>,
    pub headers_color: Option<String>,
    pub headers_background_color: Option<String>,

    // Placeholders
    pub placeholders_font_name: Option<String>,
    pub placeholders_color: Option<String>,

    // Text inputs
    pub texts_font_name: Option<String>,
    pub texts_color: Option<String>,

    // Errors
    pub errors_font_name: Option<String>,
    pub errors_color: Option<String>,

    // Background
    pub background_color: Option<String>,

    // Result screen
    pub result_message_font_name: Option<String>,
    pub result_message_color: Option<String>,
    pub result_save_receipt_color: Option<String>,

    // Info texts
    pub info_texts_font: Option<String>,
    pub info_texts_color: Option<String>,

    // Buttons
    pub button_title_font_name: Option<String>,
    pub button_title_color: Option<String>,
    pub button_color: Option<String>,
    pub button_corner_radius: Option<f64>,
    pub biometric_button_color: Option<String>,

    // Result images, as asset paths
    pub success_result_image: Option<String>,
    pub failure_result_image: Option<String>,
}

/// Outcome of a payment, token payment, or card save.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, HostRecord)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentResult {
    pub bill_id: Option<String>,
    /// Status string; see [`PaymentResult::payment_status`]
    pub status: String,
    pub bill_amount: f64,
    /// Masked card number, when a card was involved
    pub card_mask: Option<String>,
    pub commission_amount: f64,
    pub receipt_url: Option<String>,
    pub contract_number: Option<String>,
    /// Settlement date as a UNIX timestamp
    pub pay_date: Option<f64>,
    pub payee_name: Option<String>,
    /// Card token, present after a save-card preauth
    pub token: Option<String>,
}

impl PaymentResult {
    fn synthesized(status: &str) -> Self {
        PaymentResult {
            status: status.to_string(),
            ..PaymentResult::default()
        }
    }

    /// Result the bridge settles with when the payment form times out.
    pub fn timeout() -> Self {
        PaymentResult::synthesized("timeout")
    }

    /// Result for a payment screen dismissed without completing.
    pub fn dismissed() -> Self {
        PaymentResult::synthesized("dismissed")
    }

    /// Result for a payment canceled by the user.
    pub fn canceled() -> Self {
        PaymentResult::synthesized("canceled")
    }

    /// Parses the status string. Unknown statuses return `None` instead
    /// of guessing.
    pub fn payment_status(&self) -> Option<PaymentStatus> {
        match self.status.as_str() {
            "PAYED" => Some(PaymentStatus::Payed),
            "PREAUTH" => Some(PaymentStatus::Preauth),
            "canceled" => Some(PaymentStatus::Canceled),
            "dismissed" => Some(PaymentStatus::Dismissed),
            "timeout" => Some(PaymentStatus::Timeout),
            "success" => Some(PaymentStatus::Success),
            "error" => Some(PaymentStatus::Error),
            _ => None,
        }
    }
}
