//! Todo Endpoints
//!
//! Bindings for `/todos` and `/todos/{id}`, plus decoding of the API's
//! response envelopes.

use serde::Deserialize;
use serde_json::Value;

use super::{Method, Transport};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{NewTask, Task, TaskId, TaskUpdate};

// ========================
// Endpoints
// ========================

/// `GET /todos`
pub async fn list_todos(transport: &dyn Transport, config: &AppConfig) -> Result<Vec<Task>, ApiError> {
    let body = transport.send(Method::Get, config.collection_url(), None).await?;
    let tasks = parse_task_list(body.as_deref())?;
    log::info!("[API] Loaded {} tasks", tasks.len());
    Ok(tasks)
}

/// `POST /todos`
pub async fn create_todo(transport: &dyn Transport, config: &AppConfig, new_task: &NewTask) -> Result<Task, ApiError> {
    let payload = serde_json::to_string(new_task)?;
    let body = transport.send(Method::Post, config.collection_url(), Some(payload)).await?;
    parse_created_task(body.as_deref())
}

/// `PUT /todos/{id}` with the edit dialog's fields
pub async fn update_todo(transport: &dyn Transport, config: &AppConfig, update: &TaskUpdate) -> Result<(), ApiError> {
    let payload = serde_json::to_string(update)?;
    transport.send(Method::Put, &config.task_url(update.id), Some(payload)).await?;
    Ok(())
}

/// `PUT /todos/{id}` with a complete record
pub async fn replace_todo(transport: &dyn Transport, config: &AppConfig, task: &Task) -> Result<(), ApiError> {
    let payload = serde_json::to_string(task)?;
    transport.send(Method::Put, &config.task_url(task.id), Some(payload)).await?;
    Ok(())
}

/// `DELETE /todos/{id}`
pub async fn delete_todo(transport: &dyn Transport, config: &AppConfig, id: TaskId) -> Result<(), ApiError> {
    transport.send(Method::Delete, &config.task_url(id), None).await?;
    Ok(())
}

// ========================
// Response Decoding
// ========================

/// Tasks from a `{code, data: [...], messages}` envelope. Anything other
/// than an array under `data` reads as an empty list; records that do not
/// decode are skipped.
pub fn parse_task_list(body: Option<&str>) -> Result<Vec<Task>, ApiError> {
    let Some(body) = body else {
        return Ok(Vec::new());
    };
    let envelope: Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    match envelope.get("data") {
        Some(Value::Array(records)) => Ok(records
            .iter()
            .filter_map(|record| match Task::deserialize(record) {
                Ok(task) => Some(task),
                Err(e) => {
                    log::warn!("[API] Skipping malformed task {}: {}", record, e);
                    None
                }
            })
            .collect()),
        _ => {
            log::warn!("[API] List response has no data array");
            Ok(Vec::new())
        }
    }
}

/// Created task, either wrapped as `{data: {...}}` or returned bare
pub fn parse_created_task(body: Option<&str>) -> Result<Task, ApiError> {
    let body = body.ok_or_else(|| ApiError::Decode("empty response to create".to_string()))?;
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let record = match value.get("data") {
        Some(data @ Value::Object(_)) => data.clone(),
        _ => value,
    };
    serde_json::from_value(record).map_err(|e| ApiError::Decode(e.to_string()))
}
