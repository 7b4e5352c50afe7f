//! Tagged console output, e.g. `[status] request failed`.

use wasm_bindgen::JsValue;
use web_sys::console;

pub fn info(tag: &str, message: &str) {
    console::log_1(&format!("[{}] {}", tag, message).into());
}

pub fn warn(tag: &str, message: &str) {
    console::warn_1(&format!("[{}] {}", tag, message).into());
}

/// Log a message together with the thrown JS value.
pub fn error(tag: &str, message: &str, err: &JsValue) {
    console::error_2(&format!("[{}] {}:", tag, message).into(), err);
}

pub fn error_msg(tag: &str, message: &str) {
    console::error_1(&format!("[{}] {}", tag, message).into());
}
