use js_sys::Promise;
use phrase_runner::ClipboardError;
use phrase_runner_web::clipboard::settle_write;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
async fn accepted_write_is_ok() {
    let promise = Promise::resolve(&JsValue::UNDEFINED);
    assert_eq!(settle_write(promise).await, Ok(()));
}

#[wasm_bindgen_test]
async fn refused_write_is_reported() {
    let promise = Promise::reject(&JsValue::from_str("permission denied"));
    let err = settle_write(promise).await.unwrap_err();
    assert_eq!(err, ClipboardError("permission denied".to_string()));
    assert_eq!(err.to_string(), "clipboard write failed: permission denied");
}
