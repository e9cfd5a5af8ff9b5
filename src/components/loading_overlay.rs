use leptos::prelude::*;

use crate::controller::use_controller;

/// Spinner shown while any request is in flight
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let ctrl = use_controller();

    view! {
        <div id="loading" class=move || if ctrl.is_loading() { "loading" } else { "loading hidden" }>
            <div class="loading-spinner"></div>
            <p>"CARGANDO..."</p>
        </div>
    }
}
