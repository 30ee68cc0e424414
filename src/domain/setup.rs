use crate::domain::flow::PaymentMethodSelection;
use serde::Deserialize;

/// Setup parameters minted by the backend for one checkout session.
///
/// All three values are opaque tokens; they are handed to the vendor
/// initializer unmodified and never outlive the session.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SetupParams {
    #[serde(rename = "paymentIntent")]
    pub intent_secret: String,
    pub ephemeral_key: String,
    #[serde(rename = "customer")]
    pub customer_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub city: String,
    pub country: String,
    pub line1: String,
    pub line2: String,
    pub postal_code: String,
    pub state: String,
}

/// Billing defaults supplied by the caller, passed to the vendor initializer
/// as-is. Static configuration, never derived.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BillingDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

/// Merchant-side settings for the vendor sheet, fixed at controller
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSettings {
    pub merchant_display_name: String,
    /// Return URL scheme for redirect-based authentication flows.
    pub return_url: Option<String>,
    pub default_billing_details: BillingDetails,
}

impl SheetSettings {
    pub fn new(merchant_display_name: impl Into<String>) -> Self {
        Self {
            merchant_display_name: merchant_display_name.into(),
            return_url: None,
            default_billing_details: BillingDetails::default(),
        }
    }

    pub fn with_return_url(mut self, url: impl Into<String>) -> Self {
        self.return_url = Some(url.into());
        self
    }

    pub fn with_billing_details(mut self, billing: BillingDetails) -> Self {
        self.default_billing_details = billing;
        self
    }
}

/// Everything the vendor initializer needs: session tokens from the backend
/// plus the merchant settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetConfig {
    pub params: SetupParams,
    pub settings: SheetSettings,
}

/// Vendor initializer success payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InitOutcome {
    /// Whether the sheet is ready to be presented.
    pub ready: bool,
    /// A previously saved payment method the vendor restored, if any.
    pub saved_method: Option<PaymentMethodSelection>,
}
