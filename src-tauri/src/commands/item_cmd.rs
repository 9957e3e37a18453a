//! Tauri Commands for the Item List
//!
//! Exposes list access and in-place edits to the frontend via Tauri IPC.

use tauri::State;

use crate::domain::{DomainError, Item};
use crate::AppState;

/// List all items
#[tauri::command]
pub async fn list_items(state: State<'_, AppState>) -> Result<Vec<Item>, String> {
    Ok(state.items.lock().unwrap().clone())
}

/// Rename an item
#[tauri::command]
pub async fn update_item(
    state: State<'_, AppState>,
    id: u32,
    name: String,
) -> Result<Item, String> {
    let mut items = state.items.lock().unwrap();

    let item = items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or_else(|| DomainError::NotFound(format!("Item {} not found", id)).to_string())?;

    item.name = name;
    Ok(item.clone())
}
