//! Todo Controller
//!
//! Owns the app state and runs every user action against the API. Created
//! once by the app root and handed to components through Leptos context.

use std::future::Future;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{self, FetchTransport, Transport};
use crate::config::AppConfig;
use crate::error::{ApiError, ValidationError};
use crate::loading::LoadingGuard;
use crate::models::{Filter, NewTask, TaskId};
use crate::store::{self, AppState, AppStateStoreFields, AppStore};
use crate::tasks;
use crate::toast::{ToastLevel, ToastStack};

const MSG_LOADED: &str = "TAREAS CARGADAS EXITOSAMENTE!";
const MSG_CREATED: &str = "NUEVA TAREA CREADA!";
const MSG_UPDATED: &str = "TAREA ACTUALIZADA!";
const MSG_DELETED: &str = "TAREA ELIMINADA!";
const MSG_ONLINE: &str = "CONEXIÓN RESTAURADA!";
const MSG_OFFLINE: &str = "MODO OFFLINE - LOS CAMBIOS PUEDEN NO SINCRONIZAR";
const MSG_UNEXPECTED: &str = "ERROR INESPERADO OCURRIDO";
const MSG_REJECTION: &str = "ERROR DE RED - VERIFICAR CONEXIÓN";

#[derive(Clone, Copy)]
pub struct TodoController {
    store: AppStore,
    toasts: RwSignal<ToastStack>,
    /// Number of requests currently running
    in_flight: RwSignal<u32>,
    config: StoredValue<AppConfig>,
    transport: StoredValue<Rc<dyn Transport>, LocalStorage>,
}

/// Get the controller from context
pub fn use_controller() -> TodoController {
    expect_context::<TodoController>()
}

impl TodoController {
    pub fn new(config: AppConfig) -> Self {
        Self::with_transport(config, Rc::new(FetchTransport))
    }

    pub fn with_transport(config: AppConfig, transport: Rc<dyn Transport>) -> Self {
        Self {
            store: Store::new(AppState::new()),
            toasts: RwSignal::new(ToastStack::default()),
            in_flight: RwSignal::new(0),
            config: StoredValue::new(config),
            transport: StoredValue::new_local(transport),
        }
    }

    pub fn store(&self) -> AppStore {
        self.store
    }

    pub fn toasts(&self) -> ReadSignal<ToastStack> {
        self.toasts.read_only()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.get() > 0
    }

    // ========================
    // Notifications
    // ========================

    /// Show a toast that removes itself after the configured lifetime
    pub fn notify(&self, message: impl Into<String>, level: ToastLevel) {
        let message = message.into();
        let Some(id) = self.toasts.try_update(|stack| stack.push(message, level)) else {
            return;
        };
        let toasts = self.toasts;
        let lifetime = self.config.with_value(|c| c.toast_ms);
        spawn_local(async move {
            TimeoutFuture::new(lifetime).await;
            toasts.try_update(|stack| stack.dismiss(id));
        });
    }

    fn reject(&self, err: ValidationError) {
        log::warn!("[APP] Form rejected: {}", err);
        self.notify(err.to_string(), ToastLevel::Error);
    }

    fn endpoint(&self) -> (Rc<dyn Transport>, AppConfig) {
        (self.transport.get_value(), self.config.get_value())
    }

    /// Run one API call with the loading indicator up. Failures are logged
    /// and toasted here, then handed back to the caller.
    async fn request<T>(self, call: impl Future<Output = Result<T, ApiError>>) -> Result<T, ApiError> {
        let result = {
            let _loading = LoadingGuard::acquire(&self.in_flight);
            call.await
        };
        if let Err(err) = &result {
            log::error!("[API] Request failed: {}", err);
            self.notify(err.user_message(), ToastLevel::Error);
        }
        result
    }

    // ========================
    // Task Actions
    // ========================

    /// Fetch the full list. A failed load leaves an empty list.
    pub async fn load(self) {
        let (transport, config) = self.endpoint();
        match self.request(api::list_todos(transport.as_ref(), &config)).await {
            Ok(loaded) => {
                store::store_set_tasks(&self.store, loaded);
                self.notify(MSG_LOADED, ToastLevel::Success);
            }
            Err(_) => store::store_set_tasks(&self.store, Vec::new()),
        }
    }

    /// Create a task from the new-task form. Returns true when the form
    /// should be cleared.
    pub async fn create(self, title: String, description: String) -> bool {
        let new_task = match NewTask::from_input(&title, &description) {
            Ok(new_task) => new_task,
            Err(err) => {
                self.reject(err);
                return false;
            }
        };

        let (transport, config) = self.endpoint();
        match self.request(api::create_todo(transport.as_ref(), &config, &new_task)).await {
            Ok(created) => {
                log::info!("[APP] Created task {}", created.id);
                store::store_append_task(&self.store, created);
                self.notify(MSG_CREATED, ToastLevel::Success);
                true
            }
            Err(_) => false,
        }
    }

    /// Submit the edit dialog. The dialog stays open if the request fails,
    /// and a success only closes it if it still shows the same task.
    pub async fn update(self) {
        let form = self.store.edit_form().get_untracked();
        let update = match form.to_update() {
            Ok(update) => update,
            Err(err) => return self.reject(err),
        };

        let (transport, config) = self.endpoint();
        if self.request(api::update_todo(transport.as_ref(), &config, &update)).await.is_ok() {
            store::store_merge_update(&self.store, &update);
            self.store.update(|state| {
                state.close_edit_for(update.id);
            });
            self.notify(MSG_UPDATED, ToastLevel::Success);
        }
    }

    pub async fn delete(self, id: TaskId) {
        let (transport, config) = self.endpoint();
        if self.request(api::delete_todo(transport.as_ref(), &config, id)).await.is_ok() {
            store::store_remove_task(&self.store, id);
            self.close_delete();
            self.notify(MSG_DELETED, ToastLevel::Success);
        }
    }

    /// Flip completion by sending the whole record back. Unknown ids do nothing.
    pub async fn toggle(self, id: TaskId) {
        let Some(updated) = self
            .store
            .tasks()
            .with_untracked(|list| tasks::find_task(list, id).map(tasks::toggled))
        else {
            return;
        };

        let (transport, config) = self.endpoint();
        if self.request(api::replace_todo(transport.as_ref(), &config, &updated)).await.is_ok() {
            let status = if updated.is_completed { "COMPLETADA" } else { "REABIERTA" };
            store::store_replace_task(&self.store, updated);
            self.notify(format!("TAREA {}!", status), ToastLevel::Success);
        }
    }

    pub fn set_filter(&self, filter: Filter) {
        self.store.filter().set(filter);
    }

    // ========================
    // Dialogs
    // ========================

    pub fn open_edit(&self, id: TaskId) {
        self.store.update(|state| {
            state.open_edit(id);
        });
    }

    pub fn close_edit(&self) {
        self.store.update(AppState::close_edit);
    }

    pub fn open_delete(&self, id: TaskId) {
        self.store.update(|state| state.open_delete(id));
    }

    pub fn close_delete(&self) {
        self.store.update(AppState::close_delete);
    }

    /// Delete the task awaiting confirmation; success closes the dialog
    pub fn confirm_delete(&self) {
        if let Some(id) = self.store.deleting_id().get_untracked() {
            spawn_local(self.delete(id));
        }
    }

    // ========================
    // Window Events
    // ========================

    pub fn set_online(&self, online: bool) {
        self.store.online().set(online);
        if online {
            log::info!("[APP] Back online, reloading");
            self.notify(MSG_ONLINE, ToastLevel::Success);
            spawn_local(self.load());
        } else {
            log::warn!("[APP] Went offline");
            self.notify(MSG_OFFLINE, ToastLevel::Error);
        }
    }

    pub fn report_error(&self, detail: &str) {
        log::error!("[APP] Unhandled error: {}", detail);
        self.notify(MSG_UNEXPECTED, ToastLevel::Error);
    }

    pub fn report_rejection(&self, detail: &str) {
        log::error!("[APP] Unhandled promise rejection: {}", detail);
        self.notify(MSG_REJECTION, ToastLevel::Error);
    }
}
