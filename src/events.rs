//! Tauri Event Bindings
//!
//! Frontend subscriptions to backend-emitted events.

use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"])]
    async fn listen(event: &str, handler: &js_sys::Function) -> JsValue;
}

/// Subscribe to a backend event for the lifetime of the page
///
/// The unlisten handle is intentionally dropped; subscriptions live as long
/// as the window does.
pub fn subscribe(event: &'static str, mut on_event: impl FnMut() + 'static) {
    spawn_local(async move {
        let handler = Closure::<dyn FnMut(JsValue)>::new(move |_payload: JsValue| on_event());
        let _ = listen(event, handler.as_ref().unchecked_ref()).await;
        handler.forget();
    });
}
