//! Colors and spacing for the calculator window.

use gpui::{Hsla, Pixels, hsla, px};
use lazy_static::lazy_static;

pub struct CalculatorTheme {
    pub window_background: Hsla,
    pub window_padding: Pixels,
    pub title_color: Hsla,
    pub label_color: Hsla,
    pub panel_background: Hsla,
    pub panel_error_background: Hsla,
    pub panel_padding: Pixels,
    pub panel_border_radius: Pixels,
    pub expression_color: Hsla,
    pub result_color: Hsla,
    pub error_color: Hsla,
    pub muted_color: Hsla,
}

lazy_static! {
    static ref THEME: CalculatorTheme = CalculatorTheme {
        window_background: hsla(0.0, 0.0, 0.1, 1.0),
        window_padding: px(24.0),
        title_color: hsla(250.0 / 360.0, 0.7, 0.75, 1.0),
        label_color: hsla(0.0, 0.0, 0.7, 1.0),
        panel_background: hsla(140.0 / 360.0, 0.5, 0.5, 0.12),
        panel_error_background: hsla(0.0, 0.7, 0.5, 0.12),
        panel_padding: px(16.0),
        panel_border_radius: px(8.0),
        expression_color: hsla(0.0, 0.0, 0.9, 1.0),
        result_color: hsla(240.0 / 360.0, 0.7, 0.7, 1.0),
        // Orange/red-ish
        error_color: hsla(15.0 / 360.0, 0.7, 0.6, 1.0),
        muted_color: hsla(0.0, 0.0, 0.55, 1.0),
    };
}

pub fn theme() -> &'static CalculatorTheme {
    &THEME
}
