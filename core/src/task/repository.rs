//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Task, TaskFields, TaskStatus};
use crate::Result;

/// Repository interface for task storage operations
///
/// Absence of a record is reported as data (`Option`/`bool`), never as an
/// error; errors are reserved for storage failures.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a new task record
    async fn create(&self, task: Task) -> Result<Task>;

    /// Get a task by ID
    async fn get(&self, id: Uuid) -> Result<Option<Task>>;

    /// Get all tasks in insertion order
    async fn list(&self) -> Result<Vec<Task>>;

    /// Delete a task by ID, returning whether a record was removed
    async fn delete(&self, id: Uuid) -> Result<bool>;

    /// Replace the three editable fields of a task, returning whether a
    /// record matched
    ///
    /// Status and identifier are left untouched.
    async fn edit(&self, id: Uuid, fields: TaskFields) -> Result<bool>;

    /// Set the status of a task, returning whether an existing record matched
    ///
    /// When no record matches, a bare record holding only the status is
    /// inserted under the given identifier.
    async fn set_status(&self, id: Uuid, status: TaskStatus) -> Result<bool>;

    /// Find tasks by status
    async fn find_by_status(&self, status: TaskStatus) -> Result<Vec<Task>>;
}
