//! CalculatorClient trait, the only seam between the form and the service.

mod http;

pub use http::HttpCalculatorClient;

use crate::calculator::{CalculationRequest, CalculationResponse};
use async_trait::async_trait;
use thiserror::Error;

/// Transport or protocol failure. Computation errors reported by the
/// service are not `ClientError`s; they arrive in
/// [`CalculationResponse::error`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to reach calculator service: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("calculator service timed out")]
    Timeout,
    #[error("malformed response from calculator service: {0}")]
    Decode(String),
    #[error("invalid calculator service URL: {0}")]
    InvalidUrl(String),
    #[error("calculation was interrupted: {0}")]
    Interrupted(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err)
        }
    }
}

#[async_trait]
pub trait CalculatorClient: Send + Sync {
    /// Perform one calculation. Resolves once; there is no cancellation.
    async fn calculate(
        &self,
        request: CalculationRequest,
    ) -> Result<CalculationResponse, ClientError>;
}
