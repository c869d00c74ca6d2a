//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod monkey;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // `catch` turns a rejected invoke promise into `Err` instead of a throw
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// Re-export all public items
pub use monkey::*;
