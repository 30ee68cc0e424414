use crate::domain::ports::SetupParamsSource;
use crate::domain::setup::SetupParams;
use crate::error::{FlowError, Result};
use crate::infrastructure::config::ApiConfig;
use async_trait::async_trait;
use std::time::Duration;

/// `SetupParamsSource` backed by the payment-sheet HTTP endpoint.
///
/// Speaks the single-endpoint backend contract: `POST {base_url}/payment-sheet`
/// with no request body, JSON response carrying the intent secret, ephemeral
/// key, and customer id. Transport failures, non-2xx statuses, and malformed
/// responses all surface as `FlowError::Network`.
pub struct HttpSetupParamsSource {
    config: ApiConfig,
    client: reqwest::Client,
}

impl HttpSetupParamsSource {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!("{}/payment-sheet", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SetupParamsSource for HttpSetupParamsSource {
    async fn fetch(&self) -> Result<SetupParams> {
        let url = self.endpoint();
        tracing::debug!(%url, "fetching setup params");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FlowError::Network(format!(
                "payment-sheet endpoint returned {status}"
            )));
        }

        let params = response.json::<SetupParams>().await?;
        Ok(params)
    }
}
