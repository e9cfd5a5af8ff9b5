//! New Task Form Component
//!
//! Title and description inputs for creating a task.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::use_controller;

/// Id of the title input, targeted by the Alt+N shortcut
pub const NEW_TITLE_ID: &str = "todo-title";

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctrl = use_controller();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_text = title.get_untracked();
        let description_text = description.get_untracked();

        spawn_local(async move {
            if ctrl.create(title_text, description_text).await {
                set_title.set(String::new());
                set_description.set(String::new());
            }
        });
    };

    view! {
        <form id="todo-form" class="todo-form" on:submit=create_task>
            <input
                type="text"
                id=NEW_TITLE_ID
                name="title"
                placeholder="TÍTULO DE LA TAREA..."
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                id="todo-description"
                name="description"
                placeholder="DESCRIPCIÓN (OPCIONAL)..."
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            <button type="submit" class="pixel-btn">"AGREGAR TAREA"</button>
        </form>
    }
}
