//! Task model definitions

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Completion status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Incomplete,
    Complete,
}

/// A tracked task record
///
/// Only the identifier is guaranteed to be present. A record inserted by a
/// status change on an unknown identifier carries a status and nothing else,
/// and a freshly created task has no status until a status change sets one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl Task {
    /// Create a new task with the given name and a fresh identifier
    pub fn new(task_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            task_name: Some(task_name.into()),
            desc: None,
            image: None,
            status: None,
        }
    }

    /// Create a bare record holding only a status, as inserted by a status
    /// change that matched no existing record
    pub fn bare_with_status(id: Uuid, status: TaskStatus) -> Self {
        Self {
            id,
            task_name: None,
            desc: None,
            image: None,
            status: Some(status),
        }
    }

    /// Set the description
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Set the image reference
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Replacement values for the three editable fields of a task
///
/// An edit overwrites all three fields at once; a `None` clears the stored
/// value. Status and identifier are never part of an edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFields {
    #[serde(default)]
    pub task_name: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}
