//! Stats Bar Component

use leptos::prelude::*;

use crate::controller::use_controller;
use crate::store::AppStateStoreFields;
use crate::view::render_stats;

/// Total / completed / pending counters
#[component]
pub fn StatsBar() -> impl IntoView {
    let store = use_controller().store();
    let stats = Memo::new(move |_| store.tasks().with(|tasks| render_stats(tasks)));

    view! {
        <div class="stats">
            <div class="stat">
                <span id="total-count" class="stat-value">{move || stats.get().total}</span>
                <span class="stat-label">"TOTAL"</span>
            </div>
            <div class="stat">
                <span id="completed-count" class="stat-value">{move || stats.get().completed}</span>
                <span class="stat-label">"COMPLETADAS"</span>
            </div>
            <div class="stat">
                <span id="pending-count" class="stat-value">{move || stats.get().pending}</span>
                <span class="stat-label">"PENDIENTES"</span>
            </div>
        </div>
    }
}
