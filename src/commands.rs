//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands. The `catch` binding surfaces
//! command errors (a failed save in particular) instead of panicking.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::Item;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

fn error_to_string(err: JsValue) -> String {
    err.as_string()
        .unwrap_or_else(|| "unexpected command failure".to_string())
}

// ========================
// Command Argument Structs
// ========================

#[derive(Serialize)]
pub struct UpdateItemArgs<'a> {
    pub id: u32,
    pub name: &'a str,
}

#[derive(Serialize)]
struct ConfirmCloseArgs {
    choice: &'static str,
}

// ========================
// Commands
// ========================

pub async fn list_items() -> Result<Vec<Item>, String> {
    let result = invoke("list_items", JsValue::NULL)
        .await
        .map_err(error_to_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_item(args: &UpdateItemArgs<'_>) -> Result<Item, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("update_item", js_args)
        .await
        .map_err(error_to_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Answer the save-before-closing prompt ("save", "discard", or "cancel")
pub async fn confirm_close(choice: &'static str) -> Result<(), String> {
    let js_args =
        serde_wasm_bindgen::to_value(&ConfirmCloseArgs { choice }).map_err(|e| e.to_string())?;
    invoke("confirm_close", js_args)
        .await
        .map(|_| ())
        .map_err(error_to_string)
}
