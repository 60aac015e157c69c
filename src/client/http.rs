//! HTTP implementation of [`CalculatorClient`] using reqwest.

use super::{CalculatorClient, ClientError};
use crate::calculator::{CALCULATE_PATH, CalculationRequest, CalculationResponse};
use crate::config::Config;
use async_trait::async_trait;
use std::time::Duration;

/// Posts JSON requests to `{base_url}/calculator.CalculatorService/Calculate`.
#[derive(Clone, Debug)]
pub struct HttpCalculatorClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpCalculatorClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base = base_url.trim().trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Transport)?;

        Ok(Self {
            http,
            endpoint: format!("{}{}", base, CALCULATE_PATH),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        Self::new(&config.server_url, config.request_timeout())
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CalculatorClient for HttpCalculatorClient {
    async fn calculate(
        &self,
        request: CalculationRequest,
    ) -> Result<CalculationResponse, ClientError> {
        tracing::debug!(endpoint = %self.endpoint, ?request, "Sending calculation");

        let response = self.http.post(&self.endpoint).json(&request).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            // The service explains domain errors in the body; only fall back
            // to the bare status when it doesn't.
            if let Ok(decoded) = serde_json::from_slice::<CalculationResponse>(&body)
                && decoded.is_error()
            {
                return Ok(decoded);
            }

            tracing::warn!(%status, "Calculator service returned an error status");
            return Ok(CalculationResponse::failure(format!(
                "HTTP error: {}",
                status.as_u16()
            )));
        }

        serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}
