use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// An event listener on `window` that is removed when the guard is dropped.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    /// Register `handler` for `event` on the window. Returns `None` outside a
    /// browser or if registration fails.
    pub fn new(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        tracing::debug!(event = event, "window listener registered");
        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
        tracing::debug!(event = self.event, "window listener removed");
    }
}
