//! A two-operand calculator form backed by a remote calculator service.
//!
//! - [`form`] owns the form state and the submission lifecycle
//! - [`client`] defines the [`CalculatorClient`](client::CalculatorClient)
//!   seam and its HTTP implementation
//! - [`service`] is the HTTP calculator service the client talks to
//! - [`ui`] renders the form in a desktop window (feature `gui`)

pub mod calculator;
pub mod client;
pub mod config;
pub mod form;
pub mod service;
#[cfg(feature = "gui")]
pub mod ui;
