//! Listpad Backend
//!
//! Layered architecture:
//! - domain: Core entities and the close-confirmation rules
//! - repository: List persistence abstractions and the JSON file store
//! - commands: Tauri command handlers

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tauri::{Emitter, Manager};
use tracing::{info, warn};

mod commands;
mod domain;
mod repository;

use domain::{sample_list, CloseDecision, CloseFlow, Item, SAMPLE_SIZE};
use repository::{JsonListStore, ListStore, LIST_FILE_NAME};

/// Application state shared across commands
pub struct AppState {
    /// The in-memory list, edited by the UI and read wholesale on save
    pub items: Mutex<Vec<Item>>,
    /// Gate for window-close requests
    pub close_flow: Mutex<CloseFlow>,
    /// Persistence backend for the list
    pub store: Arc<dyn ListStore>,
}

/// Resolve the list file path under the per-app local data directory
fn list_file_path(app_handle: &tauri::AppHandle) -> PathBuf {
    let app_dir = app_handle
        .path()
        .app_local_data_dir()
        .expect("failed to resolve app local data dir");
    app_dir.join(LIST_FILE_NAME)
}

/// Intercept window-close requests and route them through the close flow
fn handle_window_event(window: &tauri::Window, event: &tauri::WindowEvent) {
    if let tauri::WindowEvent::CloseRequested { api, .. } = event {
        let state = window.state::<AppState>();
        let decision = state.close_flow.lock().unwrap().request_close();
        match decision {
            CloseDecision::Allow => info!("close confirmed, window closing"),
            CloseDecision::Prompt => {
                api.prevent_close();
                let _ = window.emit("close-requested", ());
            }
            CloseDecision::Deny => api.prevent_close(),
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle()
                .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                    // Focus the existing window when a new instance tries to start
                    if let Some(window) = app.get_webview_window("main") {
                        let _ = window.set_focus();
                    }
                }))?;

            tracing_subscriber::fmt::init();

            let store = JsonListStore::new(list_file_path(app.handle()));
            info!(path = %store.path().display(), "using list file");

            let items = match tauri::async_runtime::block_on(store.load()) {
                Ok(Some(items)) => {
                    info!(count = items.len(), "loaded persisted list");
                    items
                }
                Ok(None) => {
                    info!(count = SAMPLE_SIZE, "no persisted list, generating sample");
                    sample_list(SAMPLE_SIZE)
                }
                Err(e) => {
                    warn!("failed to load persisted list: {}", e);
                    sample_list(SAMPLE_SIZE)
                }
            };

            app.manage(AppState {
                items: Mutex::new(items),
                close_flow: Mutex::new(CloseFlow::default()),
                store: Arc::new(store),
            });

            Ok(())
        })
        .on_window_event(handle_window_event)
        .invoke_handler(tauri::generate_handler![
            commands::list_items,
            commands::update_item,
            commands::confirm_close,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
