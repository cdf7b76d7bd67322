//! `navigator.clipboard` adapter.

use platform_host::{ClipboardFuture, ClipboardService};

#[derive(Debug, Clone, Copy, Default)]
/// Clipboard service backed by the async Clipboard API.
pub struct WebClipboardService;

impl ClipboardService for WebClipboardService {
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a> {
        Box::pin(async move { write_text(text).await })
    }
}

#[cfg(target_arch = "wasm32")]
async fn write_text(text: &str) -> Result<(), String> {
    use js_sys::{Function, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let navigator: JsValue = window.navigator().into();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .ok_or_else(|| "clipboard API unavailable".to_string())?;
    let write = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or_else(|| "clipboard.writeText unavailable".to_string())?;
    let promise = write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| format!("clipboard.writeText threw: {e:?}"))?
        .dyn_into::<Promise>()
        .map_err(|_| "clipboard.writeText did not return a promise".to_string())?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("clipboard write rejected: {e:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn write_text(_text: &str) -> Result<(), String> {
    Err("clipboard unavailable outside the browser".to_string())
}
