//! What the form shows: labels, operation buttons and the results panel.
//!
//! Front ends render these values as-is; none of them hold state.

use crate::calculator::{Operation, format_value};
use std::fmt;

pub const FIRST_NUMBER_LABEL: &str = "first number";
pub const SECOND_NUMBER_LABEL: &str = "second number";
pub const CLEAR_LABEL: &str = "clear";
pub const CALCULATE_LABEL: &str = "calculate";
pub const CALCULATING_LABEL: &str = "calculating...";

/// The expression as the user entered it, captured when the request was sent.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    pub operand1: String,
    pub operation: Operation,
    pub operand2: String,
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.operand1.trim(),
            self.operation.symbol(),
            self.operand2.trim()
        )
    }
}

/// State of the results panel.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultPanel {
    /// Nothing submitted since the form was created or cleared.
    Hidden,
    /// A request is in flight.
    Loading,
    /// Validation, transport, or remote error.
    Error(String),
    /// Successful calculation.
    Result { expression: Expression, value: f64 },
}

impl ResultPanel {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Formatted result value, only for successful calculations.
    pub fn value_text(&self) -> Option<String> {
        match self {
            Self::Result { value, .. } => Some(format_value(*value)),
            _ => None,
        }
    }
}

impl fmt::Display for ResultPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => Ok(()),
            Self::Loading => f.write_str(CALCULATING_LABEL),
            Self::Error(message) => f.write_str(message),
            Self::Result { expression, value } => {
                write!(f, "{} = {}", expression, format_value(*value))
            }
        }
    }
}

/// One of the four operation selector buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationButton {
    pub operation: Operation,
    pub label: &'static str,
    /// Whether this is the selected operation. Exactly one button is active.
    pub active: bool,
}

pub(super) fn operation_buttons(selected: Operation) -> [OperationButton; 4] {
    Operation::ALL.map(|operation| OperationButton {
        operation,
        label: operation.symbol(),
        active: operation == selected,
    })
}
