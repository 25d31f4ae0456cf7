//! Browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A JavaScript listener attached with a `Closure` must keep the closure
//! alive for as long as it is attached. [`WindowEventListener`] owns the
//! closure and removes the listener in `Drop`, so the listener lives exactly
//! as long as the Rust value:
//!
//! ```ignore
//! let listener = WindowEventListener::passive(window, "resize", callback);
//! // Removed when dropped
//! drop(listener);
//! ```
//!
//! Store it in a `Signal<Option<WindowEventListener>>` and set it to `None`
//! to detach.

use exhibit_common::{SessionStore, ViewportInfo};
use tracing::{info, warn};
use wasm_bindgen_x::prelude::*;

/// A window event listener that removes itself when dropped.
pub struct WindowEventListener {
    window: web_sys_x::Window,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl WindowEventListener {
    /// Attach a non-capturing, passive listener to the window.
    pub fn passive(
        window: web_sys_x::Window,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        let options = web_sys_x::AddEventListenerOptions::new();
        options.set_capture(false);
        options.set_passive(true);

        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                event_name,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok();

        Self {
            window,
            event_name,
            callback,
        }
    }
}

impl Drop for WindowEventListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Classify the window's current inner size.
pub fn measure_viewport(window: &web_sys_x::Window) -> Option<ViewportInfo> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(ViewportInfo::classify(width as u32, height as u32))
}

/// Force a full page reload.
pub fn reload_page() {
    info!("Reloading page");
    let Some(window) = web_sys_x::window() else {
        return;
    };
    if window.location().reload().is_err() {
        warn!("Page reload was rejected by the browser");
    }
}

/// [`SessionStore`] over `window.sessionStorage`.
///
/// Storage may be unavailable (private mode, sandboxed iframes); reads then
/// return `None` and writes are dropped with a warning.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    fn storage() -> Option<web_sys_x::Storage> {
        web_sys_x::window().and_then(|w| w.session_storage().ok().flatten())
    }
}

impl SessionStore for BrowserSessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set_item(&mut self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    warn!("Failed to write {key} to session storage");
                }
            }
            None => warn!("Session storage unavailable, {key} not persisted"),
        }
    }
}
