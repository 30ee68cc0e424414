use crate::domain::flow::{FlowState, PaymentMethodSelection};
use crate::domain::ports::{PaymentSheetBox, SetupParamsSourceBox};
use crate::domain::setup::{SheetConfig, SheetSettings};
use crate::error::{FlowError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

struct FlowCell {
    state: FlowState,
    selection: Option<PaymentMethodSelection>,
}

/// Sequences one checkout session against the backend and the vendor sheet.
///
/// `PaymentFlowController` owns the `FlowState` and the current
/// `PaymentMethodSelection` and mediates every external call. Operations are
/// strictly sequential: at most one vendor interaction is in flight per
/// controller instance, enforced by an atomic busy flag that yields
/// `FlowError::Busy` to overlapping callers. Cancellation is not supported;
/// once a vendor call is dispatched the controller waits for its resolution.
pub struct PaymentFlowController {
    backend: SetupParamsSourceBox,
    sheet: PaymentSheetBox,
    settings: SheetSettings,
    cell: RwLock<FlowCell>,
    in_flight: AtomicBool,
}

/// Resets the busy flag when a vendor call resolves, on every exit path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl PaymentFlowController {
    /// Creates a controller in the `Uninitialized` state.
    ///
    /// # Arguments
    ///
    /// * `backend` - The source of per-session setup parameters.
    /// * `sheet` - The vendor payment sheet SDK.
    /// * `settings` - Merchant settings handed to the vendor initializer.
    pub fn new(
        backend: SetupParamsSourceBox,
        sheet: PaymentSheetBox,
        settings: SheetSettings,
    ) -> Self {
        Self {
            backend,
            sheet,
            settings,
            cell: RwLock::new(FlowCell {
                state: FlowState::Uninitialized,
                selection: None,
            }),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Fetches setup parameters and initializes the vendor sheet.
    ///
    /// On success the flow transitions to `Ready` and any saved payment method
    /// the vendor restored becomes the current selection. A failed setup fetch
    /// leaves the flow `Failed("network")`; a vendor error leaves it
    /// `Failed(code)` with the vendor's error returned verbatim. Callable from
    /// any non-busy state; restarting discards the previous session.
    pub async fn initialize_flow(&self) -> Result<()> {
        let _guard = self.begin_vendor_call()?;

        {
            let mut cell = self.cell.write().await;
            cell.state = FlowState::Initializing;
            cell.selection = None;
        }

        let params = match self.backend.fetch().await {
            Ok(params) => params,
            Err(err) => {
                tracing::warn!(error = %err, "setup params fetch failed");
                self.cell.write().await.state = FlowState::Failed("network".into());
                return Err(err);
            }
        };

        let config = SheetConfig {
            params,
            settings: self.settings.clone(),
        };

        match self.sheet.initialize(config).await {
            Ok(outcome) => {
                let mut cell = self.cell.write().await;
                if outcome.ready {
                    cell.state = FlowState::Ready;
                    cell.selection = outcome.saved_method;
                    tracing::debug!("payment sheet ready");
                } else {
                    // Vendor refused without reporting an error; the flow
                    // stays uninitialized so the caller can try again.
                    cell.state = FlowState::Uninitialized;
                }
                Ok(())
            }
            Err(err) => {
                let reason = err.vendor_code().unwrap_or("vendor").to_string();
                tracing::warn!(error = %err, "vendor initializer failed");
                self.cell.write().await.state = FlowState::Failed(reason);
                Err(err)
            }
        }
    }

    /// Presents the vendor selection UI, optionally bounded by a timeout.
    ///
    /// Requires the `Ready` state. A choice replaces the stored selection; a
    /// dismissal clears it; a vendor error (including a vendor-side timeout)
    /// leaves the prior selection untouched. The flow returns to `Ready` in
    /// all three cases — presentation failure never forces re-initialization.
    pub async fn choose_method(
        &self,
        timeout: Option<Duration>,
    ) -> Result<Option<PaymentMethodSelection>> {
        let _guard = self.begin_vendor_call()?;

        {
            let mut cell = self.cell.write().await;
            if !cell.state.is_ready() {
                return Err(FlowError::InvalidState(format!(
                    "choose_method requires the ready state, flow is {}",
                    cell.state
                )));
            }
            cell.state = FlowState::Presenting;
        }

        let result = self.sheet.present(timeout).await;

        let mut cell = self.cell.write().await;
        cell.state = FlowState::Ready;
        match result {
            Ok(Some(selection)) => {
                cell.selection = Some(selection.clone());
                Ok(Some(selection))
            }
            Ok(None) => {
                cell.selection = None;
                Ok(None)
            }
            Err(err) => {
                tracing::warn!(error = %err, "payment sheet presentation failed");
                Err(err)
            }
        }
    }

    /// Confirms the payment with the currently selected method.
    ///
    /// Requires the `Ready` state and a selection. Success transitions to
    /// `Succeeded` and clears the selection so a new flow can start. A vendor
    /// error returns the flow to `Ready` with the selection retained, so the
    /// user can retry against the same initialized session.
    pub async fn confirm_purchase(&self) -> Result<()> {
        let _guard = self.begin_vendor_call()?;

        {
            let mut cell = self.cell.write().await;
            if !cell.state.is_ready() {
                return Err(FlowError::InvalidState(format!(
                    "confirm_purchase requires the ready state, flow is {}",
                    cell.state
                )));
            }
            if cell.selection.is_none() {
                return Err(FlowError::InvalidState(
                    "confirm_purchase requires a selected payment method".into(),
                ));
            }
            cell.state = FlowState::Confirming;
        }

        match self.sheet.confirm().await {
            Ok(()) => {
                let mut cell = self.cell.write().await;
                cell.state = FlowState::Succeeded;
                cell.selection = None;
                tracing::debug!("payment confirmed");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "payment confirmation failed");
                self.cell.write().await.state = FlowState::Ready;
                Err(err)
            }
        }
    }

    /// Current flow state.
    pub async fn state(&self) -> FlowState {
        self.cell.read().await.state.clone()
    }

    /// Currently selected payment method, if any.
    pub async fn selection(&self) -> Option<PaymentMethodSelection> {
        self.cell.read().await.selection.clone()
    }

    fn begin_vendor_call(&self) -> Result<InFlightGuard<'_>> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            Ok(InFlightGuard(&self.in_flight))
        } else {
            Err(FlowError::Busy)
        }
    }
}
