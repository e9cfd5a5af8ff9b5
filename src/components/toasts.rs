//! Toast Container Component

use leptos::prelude::*;

use crate::controller::use_controller;

/// Stack of live notifications, oldest on top
#[component]
pub fn Toasts() -> impl IntoView {
    let toasts = use_controller().toasts();

    view! {
        <div id="toast-container" class="toast-container">
            <For
                each=move || toasts.with(|stack| stack.toasts().to_vec())
                key=|toast| toast.id
                children=|toast| view! { <div class=toast.level.class()>{toast.message}</div> }
            />
        </div>
    }
}
