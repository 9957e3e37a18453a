//! Listpad Frontend App
//!
//! Main application component: the editable item grid plus the
//! close-confirmation dialog and the save busy state.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{BusyOverlay, CloseDialog, ItemGrid};
use crate::events;
use crate::models::Item;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (items, set_items) = signal(Vec::<Item>::new());
    let (prompt_open, set_prompt_open) = signal(false);
    let (saving, set_saving) = signal(false);
    let (save_error, set_save_error) = signal::<Option<String>>(None);

    // Load items on mount
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(loaded) = commands::list_items().await {
                web_sys::console::log_1(&format!("[APP] Loaded {} items", loaded.len()).into());
                set_items.set(loaded);
            }
        });
    });

    // The backend suppresses the native close and asks for confirmation
    events::subscribe("close-requested", move || set_prompt_open.set(true));
    events::subscribe("save-started", move || set_saving.set(true));
    events::subscribe("save-finished", move || set_saving.set(false));

    // Forward the prompt choice; a failed save surfaces as a banner and the
    // window stays open and interactive
    let choose = move |choice: &'static str| {
        set_prompt_open.set(false);
        set_save_error.set(None);
        spawn_local(async move {
            if let Err(err) = commands::confirm_close(choice).await {
                set_save_error.set(Some(err));
            }
        });
    };

    view! {
        <main class="app-layout">
            <h1>"listpad"</h1>

            <Show when=move || save_error.get().is_some()>
                <p class="save-error">
                    {move || format!("Save failed: {}", save_error.get().unwrap_or_default())}
                </p>
            </Show>

            <ItemGrid items=items set_items=set_items />

            <p class="item-count">{move || format!("{} items", items.get().len())}</p>

            <Show when=move || prompt_open.get()>
                <CloseDialog on_choice=choose />
            </Show>

            <Show when=move || saving.get()>
                <BusyOverlay />
            </Show>
        </main>
    }
}
