use serde::Deserialize;
use std::fmt;

/// The lifecycle of one checkout session.
///
/// Every UI affordance (button enablement, spinners) is a pure function of
/// this single value; there are no per-operation loading flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Uninitialized,
    Initializing,
    Ready,
    Presenting,
    Confirming,
    Succeeded,
    /// Terminal until the flow is re-initialized. Carries the vendor error
    /// code, or `"network"` when the setup fetch itself failed.
    Failed(String),
}

impl FlowState {
    pub fn is_ready(&self) -> bool {
        matches!(self, FlowState::Ready)
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowState::Uninitialized => write!(f, "uninitialized"),
            FlowState::Initializing => write!(f, "initializing"),
            FlowState::Ready => write!(f, "ready"),
            FlowState::Presenting => write!(f, "presenting"),
            FlowState::Confirming => write!(f, "confirming"),
            FlowState::Succeeded => write!(f, "succeeded"),
            FlowState::Failed(reason) => write!(f, "failed({reason})"),
        }
    }
}

/// The payment method the user picked in the vendor UI.
///
/// Replaced whenever the user re-opens the selector, cleared when they dismiss
/// it without choosing, and cleared on flow reset.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PaymentMethodSelection {
    /// Human-readable label, e.g. "Visa 4242".
    pub label: String,
    /// Reference to the method's icon, as reported by the vendor.
    pub image: String,
}
