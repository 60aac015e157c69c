//! The calculator form: two operand fields, an operation selector, and one
//! request to a [`CalculatorClient`] per submission.
//!
//! State is owned by a single [`CalculatorForm`] and mutated only by input
//! events and by completion of the request. Front ends that cannot hold
//! `&mut` across an await (the GUI) use [`CalculatorForm::begin_submit`] and
//! [`CalculatorForm::complete`]; everything else uses
//! [`CalculatorForm::submit`].

pub mod panel;

pub use panel::{Expression, OperationButton, ResultPanel};

use crate::calculator::{CalculationRequest, CalculationResponse, Operation, parse_operand};
use crate::client::{CalculatorClient, ClientError};
use thiserror::Error;

/// Message shown when either operand is not a number.
pub const INVALID_NUMBER_INPUT: &str = "invalid number input";

/// Which operand field an edit applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    First,
    Second,
}

/// Why a submission did not produce a request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("a calculation is already in progress")]
    Busy,
    #[error("{}", INVALID_NUMBER_INPUT)]
    InvalidInput,
}

/// Identifies one submission. Completions carrying any other ticket are
/// discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// A validated request ready to send.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Submission {
    pub ticket: Ticket,
    pub request: CalculationRequest,
}

#[derive(Debug, Default)]
pub struct CalculatorForm {
    operand1_text: String,
    operand2_text: String,
    selected_operation: Operation,
    result: Option<f64>,
    error_message: String,
    is_loading: bool,
    has_submitted: bool,
    /// Expression of the last request sent, shown next to its result.
    expression: Option<Expression>,
    /// Ticket of the request in flight, if any.
    pending: Option<Ticket>,
    next_ticket: u64,
}

impl CalculatorForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the raw text of an operand field. No validation happens here.
    pub fn set_operand(&mut self, which: Operand, text: impl Into<String>) {
        match which {
            Operand::First => self.operand1_text = text.into(),
            Operand::Second => self.operand2_text = text.into(),
        }
    }

    pub fn select_operation(&mut self, operation: Operation) {
        self.selected_operation = operation;
    }

    /// Reset every field to its initial value.
    ///
    /// A request still in flight is forgotten; its completion is ignored.
    pub fn clear(&mut self) {
        if let Some(ticket) = self.pending {
            tracing::debug!(?ticket, "Clearing form with a calculation in flight");
        }

        *self = Self {
            next_ticket: self.next_ticket,
            ..Self::default()
        };
    }

    /// Start a submission: reset the previous outcome and validate operands.
    ///
    /// On success the caller must send `request` and hand the outcome to
    /// [`complete`](Self::complete) with the returned ticket. On
    /// [`FormError::InvalidInput`] the error is already shown and nothing
    /// should be sent. [`FormError::Busy`] leaves the form untouched.
    pub fn begin_submit(&mut self) -> Result<Submission, FormError> {
        if self.is_loading {
            return Err(FormError::Busy);
        }

        self.is_loading = true;
        self.result = None;
        self.error_message.clear();
        self.has_submitted = true;

        let (Some(operand1), Some(operand2)) = (
            parse_operand(&self.operand1_text),
            parse_operand(&self.operand2_text),
        ) else {
            self.error_message = INVALID_NUMBER_INPUT.to_string();
            self.is_loading = false;
            return Err(FormError::InvalidInput);
        };

        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(ticket);
        self.expression = Some(Expression {
            operand1: self.operand1_text.clone(),
            operation: self.selected_operation,
            operand2: self.operand2_text.clone(),
        });

        Ok(Submission {
            ticket,
            request: CalculationRequest {
                operand1,
                operand2,
                operation: self.selected_operation,
            },
        })
    }

    /// Apply the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` and changes nothing if `ticket` is not the request
    /// currently in flight.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<CalculationResponse, ClientError>,
    ) -> bool {
        if self.pending != Some(ticket) {
            tracing::debug!(?ticket, "Discarding stale calculation result");
            return false;
        }

        self.pending = None;
        self.is_loading = false;

        match outcome {
            Ok(response) if response.is_error() => {
                self.error_message = response.error;
            }
            Ok(response) => {
                self.result = Some(response.result);
            }
            Err(e) => {
                tracing::warn!("Calculation request failed: {}", e);
                self.error_message = e.to_string();
            }
        }

        true
    }

    /// Validate, call `client` once, and apply the outcome.
    pub async fn submit(&mut self, client: &dyn CalculatorClient) {
        let submission = match self.begin_submit() {
            Ok(submission) => submission,
            Err(e) => {
                tracing::debug!("Submission not sent: {}", e);
                return;
            }
        };

        let outcome = client.calculate(submission.request).await;
        self.complete(submission.ticket, outcome);
    }

    pub fn operand_text(&self, which: Operand) -> &str {
        match which {
            Operand::First => &self.operand1_text,
            Operand::Second => &self.operand2_text,
        }
    }

    pub fn selected_operation(&self) -> Operation {
        self.selected_operation
    }

    pub fn result(&self) -> Option<f64> {
        self.result
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_submitted(&self) -> bool {
        self.has_submitted
    }

    /// Whether the calculate button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading {
            panel::CALCULATING_LABEL
        } else {
            panel::CALCULATE_LABEL
        }
    }

    pub fn operation_buttons(&self) -> [OperationButton; 4] {
        panel::operation_buttons(self.selected_operation)
    }

    pub fn panel(&self) -> ResultPanel {
        if !self.has_submitted {
            return ResultPanel::Hidden;
        }
        if !self.error_message.is_empty() {
            return ResultPanel::Error(self.error_message.clone());
        }
        match (self.result, &self.expression) {
            (Some(value), Some(expression)) => ResultPanel::Result {
                expression: expression.clone(),
                value,
            },
            _ => ResultPanel::Loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every request and answers with a fixed outcome.
    struct FakeClient {
        calls: Mutex<Vec<CalculationRequest>>,
        reply: fn() -> Result<CalculationResponse, ClientError>,
    }

    impl FakeClient {
        fn replying(reply: fn() -> Result<CalculationResponse, ClientError>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                reply,
            }
        }

        fn calls(&self) -> Vec<CalculationRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CalculatorClient for FakeClient {
        async fn calculate(
            &self,
            request: CalculationRequest,
        ) -> Result<CalculationResponse, ClientError> {
            self.calls.lock().unwrap().push(request);
            (self.reply)()
        }
    }

    fn form_with(operand1: &str, operation: Operation, operand2: &str) -> CalculatorForm {
        let mut form = CalculatorForm::new();
        form.set_operand(Operand::First, operand1);
        form.set_operand(Operand::Second, operand2);
        form.select_operation(operation);
        form
    }

    #[test]
    fn test_initial_state() {
        let form = CalculatorForm::new();
        assert_eq!(form.operand_text(Operand::First), "");
        assert_eq!(form.operand_text(Operand::Second), "");
        assert_eq!(form.selected_operation(), Operation::Add);
        assert_eq!(form.result(), None);
        assert_eq!(form.error_message(), "");
        assert!(!form.is_loading());
        assert!(!form.has_submitted());
        assert_eq!(form.panel(), ResultPanel::Hidden);
        assert_eq!(form.submit_label(), "calculate");
    }

    #[test]
    fn test_set_operand_keeps_text_verbatim() {
        let mut form = CalculatorForm::new();
        form.set_operand(Operand::First, "12abc");
        assert_eq!(form.operand_text(Operand::First), "12abc");
        assert_eq!(form.error_message(), "");
    }

    #[tokio::test]
    async fn test_addition_scenario() {
        let client = FakeClient::replying(|| Ok(CalculationResponse::success(15.0)));
        let mut form = form_with("10", Operation::Add, "5");

        form.submit(&client).await;

        assert_eq!(
            client.calls(),
            vec![CalculationRequest {
                operand1: 10.0,
                operand2: 5.0,
                operation: Operation::Add,
            }]
        );
        assert_eq!(form.result(), Some(15.0));
        assert_eq!(form.error_message(), "");
        assert_eq!(form.panel().to_string(), "10 + 5 = 15");
        assert!(!form.is_loading());
    }

    #[tokio::test]
    async fn test_each_operation_sent_once() {
        for operation in Operation::ALL {
            let client = FakeClient::replying(|| Ok(CalculationResponse::success(1.0)));
            let mut form = form_with("-2.5", operation, "4e1");

            form.submit(&client).await;

            assert_eq!(
                client.calls(),
                vec![CalculationRequest {
                    operand1: -2.5,
                    operand2: 40.0,
                    operation,
                }]
            );
        }
    }

    #[tokio::test]
    async fn test_remote_error_scenario() {
        let client = FakeClient::replying(|| Ok(CalculationResponse::failure("division by zero")));
        let mut form = form_with("10", Operation::Divide, "0");

        form.submit(&client).await;

        assert_eq!(client.calls().len(), 1);
        assert_eq!(form.error_message(), "division by zero");
        assert_eq!(form.result(), None);
        assert_eq!(
            form.panel(),
            ResultPanel::Error("division by zero".to_string())
        );
    }

    #[tokio::test]
    async fn test_empty_operand_never_calls_client() {
        let client = FakeClient::replying(|| Ok(CalculationResponse::success(0.0)));
        let mut form = form_with("", Operation::Add, "5");

        form.submit(&client).await;

        assert!(client.calls().is_empty());
        assert_eq!(form.error_message(), INVALID_NUMBER_INPUT);
        assert!(!form.is_loading());
        assert!(form.has_submitted());
        assert!(form.panel().is_error());
    }

    #[tokio::test]
    async fn test_non_numeric_operand_never_calls_client() {
        let client = FakeClient::replying(|| Ok(CalculationResponse::success(0.0)));
        let mut form = form_with("3", Operation::Multiply, "three");

        form.submit(&client).await;

        assert!(client.calls().is_empty());
        assert_eq!(form.error_message(), INVALID_NUMBER_INPUT);
    }

    #[tokio::test]
    async fn test_transport_error_becomes_message() {
        let client = FakeClient::replying(|| Err(ClientError::Timeout));
        let mut form = form_with("1", Operation::Add, "2");

        form.submit(&client).await;

        assert_eq!(form.error_message(), "calculator service timed out");
        assert_eq!(form.result(), None);
        assert!(!form.is_loading());
    }

    #[tokio::test]
    async fn test_resubmit_replaces_previous_outcome() {
        let failing = FakeClient::replying(|| Ok(CalculationResponse::failure("boom")));
        let working = FakeClient::replying(|| Ok(CalculationResponse::success(3.0)));
        let mut form = form_with("1", Operation::Add, "2");

        form.submit(&failing).await;
        assert_eq!(form.error_message(), "boom");

        form.submit(&working).await;
        assert_eq!(form.error_message(), "");
        assert_eq!(form.result(), Some(3.0));
    }

    #[test]
    fn test_loading_between_begin_and_complete() {
        let mut form = form_with("6", Operation::Divide, "3");
        assert!(!form.is_loading());

        let submission = form.begin_submit().unwrap();
        assert!(form.is_loading());
        assert!(!form.can_submit());
        assert_eq!(form.submit_label(), "calculating...");
        assert_eq!(form.panel(), ResultPanel::Loading);
        assert_eq!(form.result(), None);
        assert_eq!(form.error_message(), "");

        assert!(form.complete(submission.ticket, Ok(CalculationResponse::success(2.0))));
        assert!(!form.is_loading());
        assert_eq!(form.panel().to_string(), "6 ÷ 3 = 2");
    }

    #[test]
    fn test_busy_while_loading() {
        let mut form = form_with("1", Operation::Add, "1");
        let first = form.begin_submit().unwrap();

        assert_eq!(form.begin_submit(), Err(FormError::Busy));
        assert!(form.is_loading());

        assert!(form.complete(first.ticket, Ok(CalculationResponse::success(2.0))));
        assert_eq!(form.result(), Some(2.0));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = form_with("10", Operation::Multiply, "5");
        let submission = form.begin_submit().unwrap();
        form.complete(submission.ticket, Ok(CalculationResponse::success(50.0)));

        form.clear();

        assert_eq!(form.operand_text(Operand::First), "");
        assert_eq!(form.operand_text(Operand::Second), "");
        assert_eq!(form.selected_operation(), Operation::Add);
        assert_eq!(form.result(), None);
        assert_eq!(form.error_message(), "");
        assert!(!form.has_submitted());
        assert_eq!(form.panel(), ResultPanel::Hidden);

        form.clear();
        assert_eq!(form.panel(), ResultPanel::Hidden);
    }

    #[test]
    fn test_clear_discards_in_flight_result() {
        let mut form = form_with("1", Operation::Add, "2");
        let submission = form.begin_submit().unwrap();

        form.clear();
        assert!(!form.is_loading());

        assert!(!form.complete(submission.ticket, Ok(CalculationResponse::success(3.0))));
        assert_eq!(form.result(), None);
        assert_eq!(form.panel(), ResultPanel::Hidden);
    }

    #[test]
    fn test_stale_ticket_after_resubmit() {
        let mut form = form_with("1", Operation::Add, "2");
        let first = form.begin_submit().unwrap();
        form.clear();
        form.set_operand(Operand::First, "4");
        form.set_operand(Operand::Second, "4");
        let second = form.begin_submit().unwrap();

        assert_ne!(first.ticket, second.ticket);
        assert!(!form.complete(first.ticket, Ok(CalculationResponse::success(3.0))));
        assert!(form.is_loading());
        assert!(form.complete(second.ticket, Ok(CalculationResponse::success(8.0))));
        assert_eq!(form.panel().to_string(), "4 + 4 = 8");
    }

    #[test]
    fn test_expression_captured_at_submission() {
        let mut form = form_with("2", Operation::Subtract, "1");
        let submission = form.begin_submit().unwrap();
        form.set_operand(Operand::First, "200");
        form.complete(submission.ticket, Ok(CalculationResponse::success(1.0)));

        assert_eq!(form.panel().to_string(), "2 - 1 = 1");
    }

    #[test]
    fn test_select_operation_updates_buttons() {
        let mut form = CalculatorForm::new();
        form.select_operation(Operation::Divide);
        let active: Vec<Operation> = form
            .operation_buttons()
            .iter()
            .filter(|b| b.active)
            .map(|b| b.operation)
            .collect();
        assert_eq!(active, vec![Operation::Divide]);
    }
}
