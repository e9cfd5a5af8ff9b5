//! Delete Dialog Component
//!
//! Confirmation modal shown while `deleting_id` is set.

use leptos::prelude::*;

use crate::controller::use_controller;
use crate::store::AppStateStoreFields;

#[component]
pub fn DeleteDialog() -> impl IntoView {
    let ctrl = use_controller();
    let store = ctrl.store();

    let is_open = move || store.deleting_id().get().is_some();

    view! {
        <div
            id="delete-modal"
            class=move || if is_open() { "modal" } else { "modal hidden" }
            on:click=move |_| ctrl.close_delete()
        >
            <div class="modal-content small" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>"CONFIRMAR ELIMINACIÓN"</h2>
                    <button type="button" id="close-delete-modal" class="close-btn" on:click=move |_| ctrl.close_delete()>
                        "×"
                    </button>
                </div>
                <p class="delete-message">"¿ESTÁS SEGURO DE QUE QUIERES ELIMINAR ESTA TAREA?"</p>
                <div class="modal-actions">
                    <button type="button" id="cancel-delete" class="pixel-btn secondary" on:click=move |_| ctrl.close_delete()>
                        "CANCELAR"
                    </button>
                    <button type="button" id="confirm-delete" class="pixel-btn danger" on:click=move |_| ctrl.confirm_delete()>
                        "ELIMINAR"
                    </button>
                </div>
            </div>
        </div>
    }
}
