//! Pixel Todo App
//!
//! Composition root: builds the controller, provides it to the component
//! tree and wires window-level events (shortcuts, connectivity, errors).

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::components::{
    DeleteDialog, EditDialog, FilterBar, LoadingOverlay, NewTaskForm, StatsBar, TaskList, Toasts, NEW_TITLE_ID,
};
use crate::config::AppConfig;
use crate::controller::TodoController;
use crate::shortcuts::{shortcut_for, Modifiers, Shortcut};
use crate::store::AppStateStoreFields;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctrl = TodoController::new(config);
    provide_context(ctrl);
    let store = ctrl.store();

    if let Some(window) = web_sys::window() {
        store.online().set(window.navigator().on_line());
    }

    // Load tasks on mount
    Effect::new(move |_| {
        spawn_local(ctrl.load());
    });

    let _ = window_event_listener(ev::keydown, move |ev| handle_shortcut(ctrl, &ev));
    let _ = window_event_listener(ev::online, move |_| ctrl.set_online(true));
    let _ = window_event_listener(ev::offline, move |_| ctrl.set_online(false));
    let _ = window_event_listener(ev::error, move |ev| ctrl.report_error(&ev.message()));
    let _ = window_event_listener(ev::unhandledrejection, move |ev| {
        // Handled here; keep the browser from reporting it again
        ev.prevent_default();
        ctrl.report_rejection(&format!("{:?}", ev.reason()));
    });

    let root_class = move || {
        if store.online().get() {
            "app-layout"
        } else {
            "app-layout offline"
        }
    };

    view! {
        <div class=root_class>
            <header class="app-header">
                <h1>"PIXEL TODO"</h1>
                <StatsBar />
            </header>

            <main class="main-content">
                <NewTaskForm />
                <FilterBar />
                <TaskList />
            </main>

            <EditDialog />
            <DeleteDialog />
            <Toasts />
            <LoadingOverlay />
        </div>
    }
}

fn handle_shortcut(ctrl: TodoController, ev: &web_sys::KeyboardEvent) {
    match shortcut_for(&ev.key(), Modifiers::from_event(ev)) {
        Some(Shortcut::CloseDialogs) => {
            ctrl.close_edit();
            ctrl.close_delete();
        }
        Some(Shortcut::SubmitFocusedForm) => submit_focused_form(),
        Some(Shortcut::FocusNewTask) => {
            ev.prevent_default();
            focus_element(NEW_TITLE_ID);
        }
        None => {}
    }
}

/// Submit the form that owns the focused input, textarea or button, if any
fn submit_focused_form() {
    let Some(active) = document().active_element() else {
        return;
    };
    let form = if let Some(input) = active.dyn_ref::<HtmlInputElement>() {
        input.form()
    } else if let Some(area) = active.dyn_ref::<HtmlTextAreaElement>() {
        area.form()
    } else if let Some(button) = active.dyn_ref::<HtmlButtonElement>() {
        button.form()
    } else {
        None
    };
    if let Some(form) = form {
        if let Err(err) = form.request_submit() {
            log::warn!("[APP] Shortcut submit failed: {:?}", err);
        }
    }
}

fn focus_element(id: &str) {
    let element = document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(element) = element {
        let _ = element.focus();
    }
}
