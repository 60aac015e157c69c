pub mod form_view;
pub mod panel;
pub mod theme;

pub use form_view::CalculatorView;
pub use theme::{CalculatorTheme, theme};

use crate::client::CalculatorClient;
use gpui::{AnyView, App, Application, Bounds, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Open the calculator window and run the UI event loop until it closes.
///
/// Must be called from the main thread. Requests are spawned on `runtime`.
pub fn run(runtime: Handle, client: Arc<dyn CalculatorClient>) {
    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);

        let bounds = Bounds::centered(None, size(px(440.0), px(520.0)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        };

        let opened = cx.open_window(options, |window, cx| {
            let view = cx.new(|cx| CalculatorView::new(runtime.clone(), client.clone(), window, cx));
            let view: AnyView = view.into();
            cx.new(|cx| Root::new(view, window, cx))
        });

        if let Err(e) = opened {
            tracing::error!("Failed to open calculator window: {}", e);
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
