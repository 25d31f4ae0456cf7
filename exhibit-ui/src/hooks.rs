//! Hooks shared by the exhibition pages

use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};
use exhibit_common::ViewportInfo;

use crate::browser::{measure_viewport, WindowEventListener};

/// Current window classification, updated on every `resize`.
///
/// The signal starts from a synchronous measurement so the first value the
/// page sees is already the real orientation.
pub fn use_viewport() -> Signal<ViewportInfo> {
    let mut viewport = use_signal(|| {
        web_sys_x::window()
            .and_then(|w| measure_viewport(&w))
            .unwrap_or_default()
    });
    let mut listener: Signal<Option<WindowEventListener>> = use_signal(|| None);

    use_effect(move || {
        let Some(window) = web_sys_x::window() else {
            return;
        };

        // Resize callbacks run from wasm-bindgen, outside the Dioxus runtime.
        let runtime = Runtime::current();
        let target = window.clone();
        let resize = WindowEventListener::passive(window, "resize", move |_| {
            let _guard = RuntimeGuard::new(runtime.clone());
            if let Some(info) = measure_viewport(&target) {
                if let Ok(mut guard) = viewport.try_write() {
                    *guard = info;
                }
            }
        });

        listener.set(Some(resize));
    });

    use_drop(move || {
        if let Ok(mut guard) = listener.try_write() {
            guard.take();
        }
    });

    viewport
}
