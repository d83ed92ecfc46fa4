//! File-based task storage implementation
//!
//! Persists the task collection as a JSON document file on disk.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::{Task, TaskFields, TaskStatus};
use super::repository::TaskRepository;
use crate::{Error, Result};

/// File-based task store using JSON
///
/// The collection is loaded once at construction and rewritten after every
/// mutation. Records are kept in insertion order.
pub struct FileTaskStore {
    /// Path to the JSON file
    path: PathBuf,
    /// In-memory collection, in insertion order
    cache: RwLock<Vec<Task>>,
}

impl FileTaskStore {
    /// Create a new FileTaskStore
    ///
    /// If the file doesn't exist, it will be created on first write.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let cache: Vec<Task> = if path.exists() {
            let content = tokio::fs::read_to_string(&path).await?;
            serde_json::from_str(&content)?
        } else {
            Vec::new()
        };

        tracing::debug!(count = cache.len(), path = %path.display(), "loaded task collection");

        Ok(Self {
            path,
            cache: RwLock::new(cache),
        })
    }

    /// Persist the collection to disk
    async fn persist(&self) -> Result<()> {
        let cache = self.cache.read().await;
        let content = serde_json::to_string_pretty(&*cache)?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for FileTaskStore {
    async fn create(&self, task: Task) -> Result<Task> {
        {
            let mut cache = self.cache.write().await;
            if cache.iter().any(|t| t.id == task.id) {
                return Err(Error::InvalidInput(format!(
                    "Task with ID {} already exists",
                    task.id
                )));
            }
            cache.push(task.clone());
        }
        self.persist().await?;
        Ok(task)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Task>> {
        let cache = self.cache.read().await;
        Ok(cache.iter().find(|t| t.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Task>> {
        let cache = self.cache.read().await;
        Ok(cache.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let removed = {
            let mut cache = self.cache.write().await;
            match cache.iter().position(|t| t.id == id) {
                Some(index) => {
                    cache.remove(index);
                    true
                }
                None => false,
            }
        };
        if removed {
            self.persist().await?;
        }
        Ok(removed)
    }

    async fn edit(&self, id: Uuid, fields: TaskFields) -> Result<bool> {
        let matched = {
            let mut cache = self.cache.write().await;
            match cache.iter_mut().find(|t| t.id == id) {
                Some(task) => {
                    task.task_name = fields.task_name;
                    task.desc = fields.desc;
                    task.image = fields.image;
                    true
                }
                None => false,
            }
        };
        if matched {
            self.persist().await?;
        }
        Ok(matched)
    }

    async fn set_status(&self, id: Uuid, status: TaskStatus) -> Result<bool> {
        let matched = {
            let mut cache = self.cache.write().await;
            match cache.iter_mut().find(|t| t.id == id) {
                Some(task) => {
                    task.status = Some(status);
                    true
                }
                None => {
                    // Upsert: unknown identifiers get a bare record
                    cache.push(Task::bare_with_status(id, status));
                    false
                }
            }
        };
        self.persist().await?;
        Ok(matched)
    }

    async fn find_by_status(&self, status: TaskStatus) -> Result<Vec<Task>> {
        let cache = self.cache.read().await;
        Ok(cache
            .iter()
            .filter(|t| t.status == Some(status))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_store() -> (FileTaskStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.json");
        let store = FileTaskStore::new(&path).await.unwrap();
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_create_task() {
        let (store, _temp) = create_test_store().await;

        let task = Task::new("Buy milk").with_desc("Two liters");
        let created = store.create(task.clone()).await.unwrap();

        assert_eq!(created.id, task.id);
        assert_eq!(created.task_name, Some("Buy milk".to_string()));
        assert_eq!(created.desc, Some("Two liters".to_string()));
        assert!(created.status.is_none());
    }

    #[tokio::test]
    async fn test_get_task() {
        let (store, _temp) = create_test_store().await;

        let task = Task::new("Buy milk");
        let id = task.id;
        store.create(task).await.unwrap();

        let retrieved = store.get(id).await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().id, id);

        // Absence is data, not an error
        let non_existent = store.get(Uuid::new_v4()).await.unwrap();
        assert!(non_existent.is_none());
    }

    #[tokio::test]
    async fn test_list_tasks_in_insertion_order() {
        let (store, _temp) = create_test_store().await;

        store.create(Task::new("Task 1")).await.unwrap();
        store.create(Task::new("Task 2")).await.unwrap();
        store.create(Task::new("Task 3")).await.unwrap();

        let tasks = store.list().await.unwrap();
        assert_eq!(tasks.len(), 3);
        let names: Vec<_> = tasks.iter().map(|t| t.task_name.clone().unwrap()).collect();
        assert_eq!(names, vec!["Task 1", "Task 2", "Task 3"]);
    }

    #[tokio::test]
    async fn test_delete_task() {
        let (store, _temp) = create_test_store().await;

        let task = Task::new("Task to delete");
        let id = task.id;
        store.create(task).await.unwrap();

        let deleted = store.delete(id).await.unwrap();
        assert!(deleted);
        assert!(store.get(id).await.unwrap().is_none());

        // Delete again should report no match
        let deleted_again = store.delete(id).await.unwrap();
        assert!(!deleted_again);
    }

    #[tokio::test]
    async fn test_edit_replaces_all_three_fields() {
        let (store, _temp) = create_test_store().await;

        let task = Task::new("Original name")
            .with_desc("Original desc")
            .with_image("https://example.com/a.png");
        let id = task.id;
        store.create(task).await.unwrap();
        store.set_status(id, TaskStatus::Complete).await.unwrap();

        let matched = store
            .edit(
                id,
                TaskFields {
                    task_name: Some("New name".to_string()),
                    desc: None,
                    image: None,
                },
            )
            .await
            .unwrap();
        assert!(matched);

        let edited = store.get(id).await.unwrap().unwrap();
        assert_eq!(edited.id, id);
        assert_eq!(edited.task_name, Some("New name".to_string()));
        // Omitted fields are cleared
        assert!(edited.desc.is_none());
        assert!(edited.image.is_none());
        // Status is never touched by an edit
        assert_eq!(edited.status, Some(TaskStatus::Complete));
    }

    #[tokio::test]
    async fn test_edit_nonexistent_task() {
        let (store, _temp) = create_test_store().await;

        let matched = store
            .edit(Uuid::new_v4(), TaskFields::default())
            .await
            .unwrap();
        assert!(!matched);
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_set_status_on_existing_task() {
        let (store, _temp) = create_test_store().await;

        let task = Task::new("Buy milk").with_desc("Two liters");
        let id = task.id;
        store.create(task).await.unwrap();

        let matched = store.set_status(id, TaskStatus::Complete).await.unwrap();
        assert!(matched);

        let updated = store.get(id).await.unwrap().unwrap();
        assert_eq!(updated.status, Some(TaskStatus::Complete));
        // Other fields survive the status change
        assert_eq!(updated.task_name, Some("Buy milk".to_string()));
        assert_eq!(updated.desc, Some("Two liters".to_string()));
    }

    #[tokio::test]
    async fn test_set_status_upserts_on_miss() {
        let (store, _temp) = create_test_store().await;

        let id = Uuid::new_v4();
        let matched = store.set_status(id, TaskStatus::Complete).await.unwrap();
        assert!(!matched);

        let inserted = store.get(id).await.unwrap().unwrap();
        assert_eq!(inserted.id, id);
        assert_eq!(inserted.status, Some(TaskStatus::Complete));
        assert!(inserted.task_name.is_none());
        assert!(inserted.desc.is_none());
        assert!(inserted.image.is_none());
    }

    #[tokio::test]
    async fn test_set_status_is_idempotent() {
        let (store, _temp) = create_test_store().await;

        let id = Uuid::new_v4();
        store.set_status(id, TaskStatus::Complete).await.unwrap();
        let matched = store.set_status(id, TaskStatus::Complete).await.unwrap();
        assert!(matched);

        let tasks = store.list().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].status, Some(TaskStatus::Complete));
    }

    #[tokio::test]
    async fn test_find_by_status() {
        let (store, _temp) = create_test_store().await;

        let done = Task::new("Done task");
        let done_id = done.id;
        store.create(done).await.unwrap();
        store.create(Task::new("Fresh task")).await.unwrap();
        store.set_status(done_id, TaskStatus::Complete).await.unwrap();

        let completed = store.find_by_status(TaskStatus::Complete).await.unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, done_id);

        // Records with no status don't match either filter
        let incomplete = store.find_by_status(TaskStatus::Incomplete).await.unwrap();
        assert!(incomplete.is_empty());

        // Flipping back removes it from the completed view
        store
            .set_status(done_id, TaskStatus::Incomplete)
            .await
            .unwrap();
        let completed = store.find_by_status(TaskStatus::Complete).await.unwrap();
        assert!(completed.is_empty());
    }

    #[tokio::test]
    async fn test_persistence_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.json");

        let task_id;

        // Create store and add task
        {
            let store = FileTaskStore::new(&path).await.unwrap();
            let task = Task::new("Persistent task")
                .with_desc("Should survive reload")
                .with_image("https://example.com/task.png");
            task_id = task.id;
            store.create(task).await.unwrap();
        }

        // Create new store instance and verify data persisted
        {
            let store = FileTaskStore::new(&path).await.unwrap();
            let task = store.get(task_id).await.unwrap();
            assert!(task.is_some());
            let task = task.unwrap();
            assert_eq!(task.task_name, Some("Persistent task".to_string()));
            assert_eq!(task.desc, Some("Should survive reload".to_string()));
            assert_eq!(task.image, Some("https://example.com/task.png".to_string()));
        }
    }

    #[tokio::test]
    async fn test_duplicate_task_error() {
        let (store, _temp) = create_test_store().await;

        let task = Task::new("Buy milk");
        store.create(task.clone()).await.unwrap();

        let result = store.create(task).await;
        assert!(result.is_err());
        match result.unwrap_err() {
            Error::InvalidInput(msg) => {
                assert!(msg.contains("already exists"));
            }
            e => panic!("Expected InvalidInput error, got: {:?}", e),
        }
    }
}
