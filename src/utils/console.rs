//! Browser console logging.
//!
//! Thin wrappers over `web_sys::console`. Native builds (unit tests) compile
//! the calls out since there is no console to write to.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Log a debug message (disabled features, setup details).
pub fn debug(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::debug_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Log a warning (resource failures, config fallbacks).
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Log a message with a `%c` CSS style.
pub fn styled(message: &str, style: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{}", message)),
        &JsValue::from_str(style),
    );
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (message, style);
}
