//! Frontend Models
//!
//! Data structures matching the remote `/todos` resource.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Server-assigned task identifier
pub type TaskId = u32;

/// Task record (matches the API's camelCase shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
    /// Fields the client does not model (timestamps etc.), sent back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
impl Task {
    pub fn new(id: TaskId, title: impl Into<String>, description: impl Into<String>, is_completed: bool) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            is_completed,
            extra: Map::new(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /todos`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub is_completed: bool,
}

impl NewTask {
    /// Trimmed creation payload from the new-task form
    pub fn from_input(title: &str, description: &str) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Self {
            title: title.to_string(),
            description: description.trim().to_string(),
            is_completed: false,
        })
    }
}

/// Body of `PUT /todos/{id}` sent from the edit dialog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
}

/// List filter selected in the filter bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Completed, Filter::Pending];

    /// Value of the button's `data-filter` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Completed => "completed",
            Filter::Pending => "pending",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "TODAS",
            Filter::Completed => "COMPLETADAS",
            Filter::Pending => "PENDIENTES",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => task.is_completed,
            Filter::Pending => !task.is_completed,
        }
    }
}

/// Aggregate counts shown in the stats bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}
