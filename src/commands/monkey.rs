//! Monkey Commands
//!
//! Frontend bindings for monkey-related backend commands.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::client::ClientError;
use crate::models::{ApiResponse, Monkey, MonkeyFields};
use super::invoke;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct CreateMonkeyArgs<'a> {
    fields: &'a MonkeyFields,
}

#[derive(Serialize)]
struct UpdateMonkeyArgs<'a> {
    id: u32,
    fields: &'a MonkeyFields,
}

// ========================
// Commands
// ========================

pub async fn list_monkeys() -> Result<ApiResponse<Vec<Monkey>>, ClientError> {
    call("list_monkeys", JsValue::NULL).await
}

pub async fn create_monkey(fields: &MonkeyFields) -> Result<ApiResponse<Monkey>, ClientError> {
    let js_args = to_args(&CreateMonkeyArgs { fields })?;
    call("create_monkey", js_args).await
}

pub async fn update_monkey(id: u32, fields: &MonkeyFields) -> Result<ApiResponse<Monkey>, ClientError> {
    let js_args = to_args(&UpdateMonkeyArgs { id, fields })?;
    call("update_monkey", js_args).await
}

fn to_args<T: Serialize>(args: &T) -> Result<JsValue, ClientError> {
    // Plain JS objects, not Maps, so Tauri can read the argument names
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    args.serialize(&serializer)
        .map_err(|e| ClientError::Decode(e.to_string()))
}

async fn call<T: DeserializeOwned>(cmd: &str, args: JsValue) -> Result<ApiResponse<T>, ClientError> {
    let result = invoke(cmd, args)
        .await
        .map_err(|e| ClientError::Rejected(e.as_string().unwrap_or_else(|| format!("{:?}", e))))?;
    serde_wasm_bindgen::from_value(result).map_err(|e| ClientError::Decode(e.to_string()))
}
