//! Request and response messages exchanged with the calculator service.

use super::Operation;
use serde::{Deserialize, Serialize};

/// Path of the calculate RPC on the calculator service.
pub const CALCULATE_PATH: &str = "/calculator.CalculatorService/Calculate";

/// One calculation to perform. Built fresh for every submission.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    #[serde(rename = "num1")]
    pub operand1: f64,
    #[serde(rename = "num2")]
    pub operand2: f64,
    pub operation: Operation,
}

/// Outcome reported by the service. An empty `error` means success and
/// `result` is only meaningful in that case.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    #[serde(default)]
    pub result: f64,
    #[serde(default)]
    pub error: String,
}

impl CalculationResponse {
    pub fn success(result: f64) -> Self {
        Self {
            result,
            error: String::new(),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            result: 0.0,
            error: error.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        !self.error.is_empty()
    }
}
