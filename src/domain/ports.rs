use super::flow::PaymentMethodSelection;
use super::setup::{InitOutcome, SetupParams, SheetConfig};
use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Backend endpoint that mints the per-session setup parameters.
#[async_trait]
pub trait SetupParamsSource: Send + Sync {
    async fn fetch(&self) -> Result<SetupParams>;
}

/// The vendor payment sheet SDK, treated as an opaque black box.
///
/// Card tokenization, 3-D Secure, and wallet integration all happen behind
/// these three calls. Errors come back as the vendor's `(code, message)` pair
/// and must be surfaced unchanged.
#[async_trait]
pub trait PaymentSheet: Send + Sync {
    async fn initialize(&self, config: SheetConfig) -> Result<InitOutcome>;

    /// Presents the vendor selection UI. `Ok(None)` means the user dismissed
    /// it without choosing. The timeout is advisory to the vendor only; the
    /// caller runs no timer of its own.
    async fn present(&self, timeout: Option<Duration>) -> Result<Option<PaymentMethodSelection>>;

    /// Confirms the payment against the already-initialized session.
    async fn confirm(&self) -> Result<()>;
}

pub type SetupParamsSourceBox = Box<dyn SetupParamsSource>;
pub type PaymentSheetBox = Box<dyn PaymentSheet>;
