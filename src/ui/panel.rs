//! Results panel rendering.
//!
//! Hidden until the first submission, then shows a loading line, the error,
//! or the expression with its result.

use crate::form::ResultPanel;
use crate::ui::theme::theme;
use gpui::{Div, SharedString, div, prelude::*, px};

/// Render the results panel, or `None` while it is hidden.
pub fn render_panel(panel: &ResultPanel) -> Option<Div> {
    let t = theme();

    let container = div()
        .w_full()
        .p(t.panel_padding)
        .rounded(t.panel_border_radius)
        .flex()
        .flex_col()
        .gap(px(4.0));

    match panel {
        ResultPanel::Hidden => None,
        ResultPanel::Loading => Some(
            container.items_center().child(
                div()
                    .text_sm()
                    .text_color(t.muted_color)
                    .child(SharedString::from(panel.to_string())),
            ),
        ),
        ResultPanel::Error(message) => Some(
            container.bg(t.panel_error_background).child(
                div()
                    .text_sm()
                    .text_color(t.error_color)
                    .child(SharedString::from(message.clone())),
            ),
        ),
        ResultPanel::Result { expression, .. } => {
            let value = panel.value_text().unwrap_or_default();
            Some(
                container
                    .bg(t.panel_background)
                    .child(
                        div()
                            .text_xs()
                            .text_color(t.muted_color)
                            .child(SharedString::from("expression")),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_row()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_lg()
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .text_color(t.expression_color)
                                    .child(SharedString::from(expression.to_string())),
                            )
                            .child(
                                div()
                                    .flex()
                                    .flex_row()
                                    .items_center()
                                    .gap_2()
                                    .child(
                                        div()
                                            .text_color(t.muted_color)
                                            .child(SharedString::from("=")),
                                    )
                                    .child(
                                        div()
                                            .text_xl()
                                            .font_weight(gpui::FontWeight::BOLD)
                                            .text_color(t.result_color)
                                            .child(SharedString::from(value)),
                                    ),
                            ),
                    ),
            )
        }
    }
}
