//! Task Item Component
//!
//! A single task card with complete / edit / delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::use_controller;
use crate::view::TaskCard;

#[component]
pub fn TaskItem(card: TaskCard) -> impl IntoView {
    let ctrl = use_controller();

    let class = card.class();
    let TaskCard {
        id,
        title,
        description,
        completed,
        status_label,
        toggle_label,
    } = card;
    let status_class = if completed { "todo-status completed" } else { "todo-status" };

    view! {
        <div class=class data-id=id.to_string()>
            <div class="todo-header">
                <h3 class="todo-title">{title}</h3>
                <span class=status_class>
                    {status_label}
                </span>
            </div>
            <p class="todo-description">{description}</p>
            <div class="todo-actions">
                <button class="action-btn complete" on:click=move |_| spawn_local(ctrl.toggle(id))>
                    {toggle_label}
                </button>
                <button class="action-btn edit" on:click=move |_| ctrl.open_edit(id)>
                    "EDITAR"
                </button>
                <button class="action-btn delete" on:click=move |_| ctrl.open_delete(id)>
                    "ELIMINAR"
                </button>
            </div>
        </div>
    }
}
