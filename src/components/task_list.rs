//! Task List Component
//!
//! Renders the filtered task cards, or the empty-state placeholder.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::controller::use_controller;
use crate::store::AppStateStoreFields;
use crate::view::{render_list, ListView};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_controller().store();

    let list = Memo::new(move |_| {
        let filter = store.filter().get();
        store.tasks().with(|tasks| render_list(tasks, filter))
    });

    // Cards are keyed by value, so any field change re-renders the row
    let cards = move || match list.get() {
        ListView::Cards(cards) => cards,
        ListView::Empty => Vec::new(),
    };
    let empty_class = move || {
        if list.with(|l| matches!(l, ListView::Empty)) {
            "empty-state"
        } else {
            "empty-state hidden"
        }
    };

    view! {
        <div id="todos-container" class="todos-container">
            <For
                each=cards
                key=|card| card.clone()
                children=move |card| view! { <TaskItem card=card /> }
            />
        </div>
        <div id="empty-state" class=empty_class>
            <p>"NO HAY TAREAS"</p>
            <p>"¡AGREGA UNA NUEVA TAREA PARA COMENZAR!"</p>
        </div>
    }
}
