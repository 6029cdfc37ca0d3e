use wasm_bindgen::JsValue;

const PREFIX: &str = "site_ui:";

fn line(msg: &str) -> JsValue {
    JsValue::from_str(&format!("{PREFIX} {msg}"))
}

pub(super) fn debug(msg: &str) {
    web_sys::console::debug_1(&line(msg));
}

pub(super) fn warn(msg: &str) {
    web_sys::console::warn_1(&line(msg));
}

pub(super) fn error(msg: &str) {
    web_sys::console::error_1(&line(msg));
}
