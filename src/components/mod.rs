//! UI Components
//!
//! Reusable Leptos components.

mod busy_overlay;
mod close_dialog;
mod item_grid;

pub use busy_overlay::BusyOverlay;
pub use close_dialog::CloseDialog;
pub use item_grid::ItemGrid;
