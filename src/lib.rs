#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod dom;
mod payload;
mod widget;

pub use widget::PaperMap;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("paper-map-web loaded");
    Ok(())
}

/// `translate<AXIS>(<value>px)`; throws when `axis` is missing.
#[wasm_bindgen(js_name = translateCss)]
pub fn translate_css(value: f64, axis: Option<String>) -> Result<String, JsValue> {
    map_core::translate_css(value, axis.as_deref().unwrap_or_default()).map_err(widget::to_js)
}

/// `rotate<AXIS>(<value>deg)`; throws when `axis` is missing.
#[wasm_bindgen(js_name = rotateCss)]
pub fn rotate_css(value: f64, axis: Option<String>) -> Result<String, JsValue> {
    map_core::rotate_css(value, axis.as_deref().unwrap_or_default()).map_err(widget::to_js)
}
