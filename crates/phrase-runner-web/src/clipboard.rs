use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use phrase_runner::ClipboardError;

fn js_value_to_string(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Write `text` with `navigator.clipboard.writeText` and wait for the browser
/// to accept or refuse it.
///
/// `navigator.clipboard` is looked up reflectively so browsers without the
/// async clipboard API get an error instead of a panic.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let promise = start_write(text)?;
    settle_write(promise).await
}

fn start_write(text: &str) -> Result<Promise, ClipboardError> {
    let window = web_sys::window().ok_or_else(|| ClipboardError("no window".into()))?;
    let navigator: JsValue = window.navigator().into();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .ok_or_else(|| ClipboardError("clipboard API unavailable".into()))?;
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or_else(|| ClipboardError("writeText missing".into()))?;

    write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|err| ClipboardError(js_value_to_string(&err)))?
        .dyn_into::<Promise>()
        .map_err(|_| ClipboardError("writeText did not return a promise".into()))
}

/// Wait on a pending clipboard write; a rejection becomes a `ClipboardError`.
pub async fn settle_write(promise: Promise) -> Result<(), ClipboardError> {
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| ClipboardError(js_value_to_string(&err)))
}
