//! Filter Bar Component
//!
//! All / completed / pending buttons.

use leptos::prelude::*;

use crate::controller::use_controller;
use crate::models::Filter;
use crate::store::AppStateStoreFields;
use crate::view::filter_button_class;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctrl = use_controller();
    let store = ctrl.store();

    view! {
        <div class="filters">
            {Filter::ALL.iter().map(|&filter| {
                view! {
                    <button
                        type="button"
                        class=move || filter_button_class(filter, store.filter().get())
                        data-filter=filter.as_str()
                        on:click=move |_| ctrl.set_filter(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
