//! JS Interop Helpers

use wasm_bindgen::{JsCast, JsValue};

/// Readable message for a thrown JS value
pub fn error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
