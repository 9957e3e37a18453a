//! Busy Overlay Component
//!
//! Full-window overlay with a wait cursor, blocking all interaction while a
//! save is running.

use leptos::prelude::*;

/// Interaction-blocking overlay shown for the duration of a save
#[component]
pub fn BusyOverlay() -> impl IntoView {
    view! {
        <div class="busy-overlay">
            <span class="busy-text">"Saving…"</span>
        </div>
    }
}
