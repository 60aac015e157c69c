//! Arithmetic evaluation performed by the calculator service.

use super::Operation;
use thiserror::Error;

/// Reasons a calculation produces no usable number.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalculationError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not a valid number")]
    NotANumber,
    #[error("result is infinite")]
    Infinite,
}

/// Apply `operation` to the two operands.
///
/// Division by zero is rejected up front; any other non-finite result
/// (overflow, NaN operands) is reported after the fact.
pub fn evaluate(
    operand1: f64,
    operand2: f64,
    operation: Operation,
) -> Result<f64, CalculationError> {
    let value = match operation {
        Operation::Add => operand1 + operand2,
        Operation::Subtract => operand1 - operand2,
        Operation::Multiply => operand1 * operand2,
        Operation::Divide => {
            if operand2 == 0.0 {
                return Err(CalculationError::DivisionByZero);
            }
            operand1 / operand2
        }
    };

    if value.is_nan() {
        Err(CalculationError::NotANumber)
    } else if value.is_infinite() {
        Err(CalculationError::Infinite)
    } else {
        Ok(value)
    }
}

/// Format a result for display.
///
/// Uses the shortest representation that round-trips, so `15.0` shows as
/// `15` and `0.1 + 0.2` keeps all its digits. Negative zero shows as `0`.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
