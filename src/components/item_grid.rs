//! Item Grid Component
//!
//! Editable two-column grid: fixed-width id column, name column filling the
//! remaining width with in-place editing.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, UpdateItemArgs};
use crate::models::Item;

/// Editable grid over the item list
#[component]
pub fn ItemGrid(
    items: ReadSignal<Vec<Item>>,
    set_items: WriteSignal<Vec<Item>>,
) -> impl IntoView {
    // Reflect the edit locally, then push it to the backend
    let rename = move |id: u32, name: String| {
        set_items.update(|items| {
            if let Some(item) = items.iter_mut().find(|item| item.id == id) {
                item.name = name.clone();
            }
        });
        spawn_local(async move {
            let _ = commands::update_item(&UpdateItemArgs { id, name: &name }).await;
        });
    };

    view! {
        <table class="item-grid">
            <thead>
                <tr>
                    <th class="col-id">"Id"</th>
                    <th class="col-name">"Name"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || items.get()
                    key=|item| item.id
                    children=move |item: Item| {
                        let id = item.id;
                        view! {
                            <tr>
                                <td class="col-id">{id}</td>
                                <td class="col-name">
                                    <input
                                        type="text"
                                        prop:value=item.name
                                        on:change=move |ev| rename(id, event_target_value(&ev))
                                    />
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
