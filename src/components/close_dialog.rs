//! Close Confirmation Dialog
//!
//! Modal three-way prompt shown when the user tries to close the window:
//! save first (Yes), close without saving (No), or keep the window open
//! (Cancel).

use leptos::prelude::*;

/// Save-before-closing prompt
#[component]
pub fn CloseDialog(#[prop(into)] on_choice: Callback<&'static str>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop">
            <div class="dialog">
                <h2 class="dialog-title">"Confirm Exit"</h2>
                <p class="dialog-text">"Do you want to save before closing?"</p>
                <div class="dialog-buttons">
                    <button class="dialog-btn primary" on:click=move |_| on_choice.run("save")>
                        "Yes"
                    </button>
                    <button class="dialog-btn" on:click=move |_| on_choice.run("discard")>
                        "No"
                    </button>
                    <button class="dialog-btn" on:click=move |_| on_choice.run("cancel")>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
