//! Edit Dialog Component
//!
//! Modal form for editing a task's title, description and completion.
//! Open while `editing_id` is set.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::use_controller;
use crate::store::AppStateStoreFields;

#[component]
pub fn EditDialog() -> impl IntoView {
    let ctrl = use_controller();
    let store = ctrl.store();
    let title_ref = NodeRef::<html::Input>::new();

    let is_open = move || store.editing_id().get().is_some();

    // Focus the title once the dialog is visible
    Effect::new(move |_| {
        if is_open() {
            request_animation_frame(move || {
                if let Some(input) = title_ref.get_untracked() {
                    let _ = input.focus();
                }
            });
        }
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(ctrl.update());
    };

    view! {
        <div
            id="edit-modal"
            class=move || if is_open() { "modal" } else { "modal hidden" }
            on:click=move |_| ctrl.close_edit()
        >
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>"EDITAR TAREA"</h2>
                    <button type="button" id="close-modal" class="close-btn" on:click=move |_| ctrl.close_edit()>
                        "×"
                    </button>
                </div>
                <form id="edit-form" on:submit=save>
                    <input
                        type="hidden"
                        id="edit-id"
                        name="id"
                        prop:value=move || store.edit_form().with(|f| f.id.map(|id| id.to_string()).unwrap_or_default())
                    />
                    <input
                        type="text"
                        id="edit-title"
                        name="title"
                        node_ref=title_ref
                        prop:value=move || store.edit_form().with(|f| f.title.clone())
                        on:input=move |ev| { store.edit_form().write().title = event_target_value(&ev); }
                    />
                    <textarea
                        id="edit-description"
                        name="description"
                        prop:value=move || store.edit_form().with(|f| f.description.clone())
                        on:input=move |ev| { store.edit_form().write().description = event_target_value(&ev); }
                    ></textarea>
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            id="edit-completed"
                            name="completed"
                            prop:checked=move || store.edit_form().with(|f| f.completed)
                            on:change=move |ev| { store.edit_form().write().completed = event_target_checked(&ev); }
                        />
                        "COMPLETADA"
                    </label>
                    <div class="modal-actions">
                        <button type="button" id="cancel-edit" class="pixel-btn secondary" on:click=move |_| ctrl.close_edit()>
                            "CANCELAR"
                        </button>
                        <button type="submit" class="pixel-btn">"GUARDAR"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
