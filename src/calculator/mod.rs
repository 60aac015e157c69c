//! Calculator domain types shared by the form, the client and the service.
//!
//! This module provides:
//! - The closed set of operations and their display symbols
//! - Operand parsing for the form fields
//! - The arithmetic performed by the service
//! - The request/response messages sent over HTTP

mod detection;
mod evaluation;
mod operation;
pub mod proto;

pub use detection::{looks_like_number, parse_operand};
pub use evaluation::{CalculationError, evaluate, format_value};
pub use operation::{Operation, UnknownOperation};
pub use proto::{CALCULATE_PATH, CalculationRequest, CalculationResponse};
