//! The calculator window: operand inputs, operation buttons, actions and
//! the results panel, driven by a [`CalculatorForm`].

use crate::client::{CalculatorClient, ClientError};
use crate::form::panel::{CLEAR_LABEL, FIRST_NUMBER_LABEL, SECOND_NUMBER_LABEL};
use crate::form::{CalculatorForm, Operand};
use crate::ui::panel::render_panel;
use crate::ui::theme::theme;
use gpui::{Context, Div, Entity, SharedString, Window, div, prelude::*};
use gpui_component::Disableable;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::input::{Input, InputState};
use std::sync::Arc;
use tokio::runtime::Handle;

pub struct CalculatorView {
    form: CalculatorForm,
    operand1: Entity<InputState>,
    operand2: Entity<InputState>,
    client: Arc<dyn CalculatorClient>,
    /// Requests run on tokio; completions are applied back on the UI thread.
    runtime: Handle,
}

impl CalculatorView {
    pub fn new(
        runtime: Handle,
        client: Arc<dyn CalculatorClient>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let operand1 =
            cx.new(|cx| InputState::new(window, cx).placeholder("enter the first number"));
        let operand2 =
            cx.new(|cx| InputState::new(window, cx).placeholder("enter the second number"));

        Self {
            form: CalculatorForm::new(),
            operand1,
            operand2,
            client,
            runtime,
        }
    }

    /// Copy the input fields into the form.
    fn sync_operands(&mut self, cx: &mut Context<Self>) {
        let first = self.operand1.read(cx).value().to_string();
        let second = self.operand2.read(cx).value().to_string();
        self.form.set_operand(Operand::First, first);
        self.form.set_operand(Operand::Second, second);
    }

    fn calculate(&mut self, _window: &mut Window, cx: &mut Context<Self>) {
        self.sync_operands(cx);

        let submission = match self.form.begin_submit() {
            Ok(submission) => submission,
            Err(e) => {
                tracing::debug!("Submission not sent: {}", e);
                cx.notify();
                return;
            }
        };

        let client = Arc::clone(&self.client);
        let request = submission.request;
        let call = self
            .runtime
            .spawn(async move { client.calculate(request).await });

        cx.spawn(async move |this, cx| {
            let outcome = match call.await {
                Ok(outcome) => outcome,
                Err(e) => Err(ClientError::Interrupted(e.to_string())),
            };
            let _ = this.update(cx, |view, cx| {
                view.form.complete(submission.ticket, outcome);
                cx.notify();
            });
        })
        .detach();

        cx.notify();
    }

    fn clear(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.form.clear();
        for input in [&self.operand1, &self.operand2] {
            input.update(cx, |state, cx| state.set_value("", window, cx));
        }
        cx.notify();
    }

    fn render_field(&self, label: &'static str, input: &Entity<InputState>) -> Div {
        let t = theme();
        div()
            .flex()
            .flex_col()
            .gap_1()
            .flex_1()
            .child(
                div()
                    .text_sm()
                    .text_color(t.label_color)
                    .child(SharedString::from(label)),
            )
            .child(Input::new(input))
    }

    fn render_operations(&self, cx: &mut Context<Self>) -> Div {
        let buttons = self.form.operation_buttons();
        div()
            .flex()
            .flex_row()
            .gap_2()
            .children(buttons.into_iter().enumerate().map(|(ix, button)| {
                let operation = button.operation;
                let element = Button::new(("operation", ix))
                    .label(button.label)
                    .flex_1()
                    .on_click(cx.listener(move |this, _, _window, cx| {
                        this.form.select_operation(operation);
                        cx.notify();
                    }));

                if button.active {
                    element.primary()
                } else {
                    element.ghost()
                }
            }))
    }

    fn render_actions(&self, cx: &mut Context<Self>) -> Div {
        div()
            .flex()
            .flex_row()
            .gap_4()
            .child(
                Button::new("clear")
                    .label(CLEAR_LABEL)
                    .flex_1()
                    .outline()
                    .on_click(cx.listener(|this, _, window, cx| this.clear(window, cx))),
            )
            .child(
                Button::new("calculate")
                    .label(self.form.submit_label())
                    .flex_1()
                    .primary()
                    .loading(self.form.is_loading())
                    .disabled(!self.form.can_submit())
                    .on_click(cx.listener(|this, _, window, cx| this.calculate(window, cx))),
            )
    }
}

impl Render for CalculatorView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let t = theme();

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_6()
            .p(t.window_padding)
            .bg(t.window_background)
            .child(
                div()
                    .w_full()
                    .text_2xl()
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(t.title_color)
                    .flex()
                    .justify_center()
                    .child(SharedString::from("Calculator")),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap_4()
                    .child(self.render_field(FIRST_NUMBER_LABEL, &self.operand1))
                    .child(self.render_field(SECOND_NUMBER_LABEL, &self.operand2)),
            )
            .child(self.render_operations(cx))
            .child(self.render_actions(cx))
            .children(render_panel(&self.form.panel()))
    }
}
