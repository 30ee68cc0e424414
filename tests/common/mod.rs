#![allow(dead_code)]

use async_trait::async_trait;
use payflow::domain::flow::PaymentMethodSelection;
use payflow::domain::ports::{PaymentSheet, SetupParamsSource};
use payflow::domain::setup::{InitOutcome, SetupParams, SheetConfig, SheetSettings};
use payflow::error::{FlowError, Result};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

pub fn settings() -> SheetSettings {
    SheetSettings::new("Example Inc.").with_return_url("shop-example://redirect")
}

pub fn visa() -> PaymentMethodSelection {
    PaymentMethodSelection {
        label: "Visa 4242".into(),
        image: "card_visa".into(),
    }
}

pub fn setup_params() -> SetupParams {
    SetupParams {
        intent_secret: "pi_123".into(),
        ephemeral_key: "ek_1".into(),
        customer_id: "cus_1".into(),
    }
}

/// Backend stub that always returns the same params, or always fails.
pub struct StaticBackend {
    result: Result<SetupParams>,
}

impl StaticBackend {
    pub fn ok() -> Self {
        Self {
            result: Ok(setup_params()),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(FlowError::Network("connection refused".into())),
        }
    }
}

#[async_trait]
impl SetupParamsSource for StaticBackend {
    async fn fetch(&self) -> Result<SetupParams> {
        self.result.clone()
    }
}

/// Vendor sheet whose responses are scripted per call, in order.
///
/// Each operation pops the next queued result; running off the end of a
/// script panics, so tests fail loudly on unexpected vendor calls.
#[derive(Default)]
pub struct ScriptedSheet {
    init_results: Mutex<VecDeque<Result<InitOutcome>>>,
    present_results: Mutex<VecDeque<Result<Option<PaymentMethodSelection>>>>,
    confirm_results: Mutex<VecDeque<Result<()>>>,
}

impl ScriptedSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sheet that initializes successfully with no saved method.
    pub fn ready() -> Self {
        let sheet = Self::new();
        sheet.push_initialize(Ok(InitOutcome {
            ready: true,
            saved_method: None,
        }));
        sheet
    }

    pub fn push_initialize(&self, result: Result<InitOutcome>) {
        self.init_results.lock().unwrap().push_back(result);
    }

    pub fn push_present(&self, result: Result<Option<PaymentMethodSelection>>) {
        self.present_results.lock().unwrap().push_back(result);
    }

    pub fn push_confirm(&self, result: Result<()>) {
        self.confirm_results.lock().unwrap().push_back(result);
    }
}

#[async_trait]
impl PaymentSheet for ScriptedSheet {
    async fn initialize(&self, _config: SheetConfig) -> Result<InitOutcome> {
        self.init_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected initialize call")
    }

    async fn present(&self, _timeout: Option<Duration>) -> Result<Option<PaymentMethodSelection>> {
        self.present_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected present call")
    }

    async fn confirm(&self) -> Result<()> {
        self.confirm_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected confirm call")
    }
}

/// Vendor sheet whose `present` and `confirm` block until released, so tests
/// can hold a vendor call open and probe the controller from another task.
pub struct GatedSheet {
    pub release_present: Arc<Notify>,
    pub release_confirm: Arc<Notify>,
}

impl GatedSheet {
    pub fn new() -> Self {
        Self {
            release_present: Arc::new(Notify::new()),
            release_confirm: Arc::new(Notify::new()),
        }
    }
}

#[async_trait]
impl PaymentSheet for GatedSheet {
    async fn initialize(&self, _config: SheetConfig) -> Result<InitOutcome> {
        Ok(InitOutcome {
            ready: true,
            saved_method: None,
        })
    }

    async fn present(&self, _timeout: Option<Duration>) -> Result<Option<PaymentMethodSelection>> {
        self.release_present.notified().await;
        Ok(Some(visa()))
    }

    async fn confirm(&self) -> Result<()> {
        self.release_confirm.notified().await;
        Ok(())
    }
}
