//! Close-Confirmation Commands
//!
//! Drives the save / discard / cancel flow behind the window-close prompt.

use std::time::Duration;

use serde::Deserialize;
use tauri::{AppHandle, Emitter, Manager, State};
use tracing::{error, info};

use crate::AppState;

/// Extra delay appended to a successful save to simulate a longer-running one
const SAVE_EXTRA_DELAY: Duration = Duration::from_millis(2500);

/// The user's answer to the save-before-closing prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloseChoice {
    Save,
    Discard,
    Cancel,
}

/// Emits `save-started` on creation and `save-finished` when dropped, so the
/// frontend busy indicator is released on every exit path.
struct BusyGuard {
    app: AppHandle,
}

impl BusyGuard {
    fn start(app: &AppHandle) -> Self {
        let _ = app.emit("save-started", ());
        Self { app: app.clone() }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        let _ = self.app.emit("save-finished", ());
    }
}

/// Resolve the user's choice from the close prompt
#[tauri::command]
pub async fn confirm_close(
    app: AppHandle,
    state: State<'_, AppState>,
    choice: CloseChoice,
) -> Result<(), String> {
    match choice {
        CloseChoice::Cancel => {
            state
                .close_flow
                .lock()
                .unwrap()
                .choose_cancel()
                .map_err(|e| e.to_string())?;
            info!("close cancelled, window stays open");
            Ok(())
        }
        CloseChoice::Discard => {
            state
                .close_flow
                .lock()
                .unwrap()
                .choose_discard()
                .map_err(|e| e.to_string())?;
            info!("closing without saving");
            close_main_window(&app)
        }
        CloseChoice::Save => {
            state
                .close_flow
                .lock()
                .unwrap()
                .choose_save()
                .map_err(|e| e.to_string())?;
            save_then_close(&app, &state).await
        }
    }
}

/// Save the list, wait the demo delay, then let the pending close proceed
async fn save_then_close(app: &AppHandle, state: &State<'_, AppState>) -> Result<(), String> {
    let _busy = BusyGuard::start(app);

    // Snapshot under the lock; the write itself must not hold it
    let items = state.items.lock().unwrap().clone();

    match state.store.save(&items).await {
        Ok(()) => {
            tokio::time::sleep(SAVE_EXTRA_DELAY).await;
            state
                .close_flow
                .lock()
                .unwrap()
                .save_finished()
                .map_err(|e| e.to_string())?;
            info!(count = items.len(), "list saved, closing");
            close_main_window(app)
        }
        Err(save_err) => {
            state
                .close_flow
                .lock()
                .unwrap()
                .save_failed()
                .map_err(|e| e.to_string())?;
            error!("save failed: {}", save_err);
            Err(save_err.to_string())
        }
    }
}

/// Close the main window; the close-flow state decides whether it goes through
fn close_main_window(app: &AppHandle) -> Result<(), String> {
    let window = app.get_webview_window("main").ok_or("Window not found")?;
    window.close().map_err(|e| e.to_string())
}
