//! Task API endpoints
//!
//! Route handlers for task CRUD operations. Every handler answers HTTP 200
//! and carries the outcome in the `success` flag of the response envelope;
//! store errors surface as a failure envelope with the error text.

use axum::{
    extract::{Path, State},
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tm_core::task::{Task, TaskFields, TaskRepository, TaskStatus};

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub task_name: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Outcome envelope for mutating endpoints
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    fn ok(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.into(),
        })
    }

    fn failure(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: false,
            message: message.into(),
        })
    }
}

/// Payload envelope for read endpoints
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

fn to_failure(err: tm_core::Error) -> Json<MessageResponse> {
    MessageResponse::failure(err.to_string())
}

/// Parse a path identifier, answering a failure envelope when it is malformed
fn parse_task_id(id: &str) -> Result<Uuid, Json<MessageResponse>> {
    Uuid::parse_str(id).map_err(|e| MessageResponse::failure(e.to_string()))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /tasks - Track a new task
async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<Json<MessageResponse>, Json<MessageResponse>> {
    tracing::debug!(task_name = %req.task_name, "tracking new task");

    let mut task = Task::new(req.task_name.clone());
    if let Some(desc) = req.desc {
        task = task.with_desc(desc);
    }
    if let Some(image) = req.image {
        task = task.with_image(image);
    }

    state.task_store().create(task).await.map_err(to_failure)?;

    Ok(MessageResponse::ok(format!(
        "{} is successfully tracked",
        req.task_name
    )))
}

/// GET /allTasks - List all tasks
async fn list_tasks(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<Task>>>, Json<MessageResponse>> {
    let tasks = state.task_store().list().await.map_err(to_failure)?;
    Ok(DataResponse::ok(tasks))
}

/// GET /allTasks/{id} - Fetch a single task
///
/// An unknown identifier is a successful empty result, not a failure.
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<Option<Task>>>, Json<MessageResponse>> {
    let id = parse_task_id(&id)?;
    let task = state.task_store().get(id).await.map_err(to_failure)?;
    Ok(DataResponse::ok(task))
}

/// DELETE /task/{id} - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, Json<MessageResponse>> {
    let id = parse_task_id(&id)?;
    let deleted = state.task_store().delete(id).await.map_err(to_failure)?;

    if deleted {
        Ok(MessageResponse::ok("Successfully deleted"))
    } else {
        Ok(MessageResponse::failure(
            "Something went wrong. Please try again",
        ))
    }
}

/// PATCH /editTask/{id} - Replace the editable fields of a task
///
/// All three fields are overwritten on every call; fields omitted from the
/// body clear the stored values. Status and identifier are untouched.
async fn edit_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<TaskFields>,
) -> Result<Json<MessageResponse>, Json<MessageResponse>> {
    let id = parse_task_id(&id)?;
    let task_name = fields.task_name.clone();
    let matched = state
        .task_store()
        .edit(id, fields)
        .await
        .map_err(to_failure)?;

    if matched {
        let name = task_name.unwrap_or_else(|| "Task".to_string());
        Ok(MessageResponse::ok(format!(
            "{name} is successfully updated"
        )))
    } else {
        Ok(MessageResponse::failure(
            "Couldn't update successfully. Please try again",
        ))
    }
}

/// PUT /taskStatus/{id} - Mark a task complete
///
/// An unknown identifier inserts a bare record with the status and answers a
/// failure envelope, matching the no-record-matched contract.
async fn complete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, Json<MessageResponse>> {
    let id = parse_task_id(&id)?;
    let matched = state
        .task_store()
        .set_status(id, TaskStatus::Complete)
        .await
        .map_err(to_failure)?;

    if matched {
        Ok(MessageResponse::ok("Task successfully completed"))
    } else {
        Ok(MessageResponse::failure(
            "Couldn't complete the task. Please try again",
        ))
    }
}

/// PUT /incompleteTask/{id} - Mark a task incomplete
async fn incomplete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, Json<MessageResponse>> {
    let id = parse_task_id(&id)?;
    let matched = state
        .task_store()
        .set_status(id, TaskStatus::Incomplete)
        .await
        .map_err(to_failure)?;

    if matched {
        Ok(MessageResponse::ok("Task's status is updated"))
    } else {
        Ok(MessageResponse::failure(
            "Couldn't update the task status. Please try again",
        ))
    }
}

/// GET /completedTask - List completed tasks
async fn completed_tasks(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<Task>>>, Json<MessageResponse>> {
    let tasks = state
        .task_store()
        .find_by_status(TaskStatus::Complete)
        .await
        .map_err(to_failure)?;
    Ok(DataResponse::ok(tasks))
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", post(create_task))
        .route("/allTasks", get(list_tasks))
        .route("/allTasks/{id}", get(get_task))
        .route("/task/{id}", delete(delete_task))
        .route("/editTask/{id}", patch(edit_task))
        .route("/taskStatus/{id}", put(complete_task))
        .route("/incompleteTask/{id}", put(incomplete_task))
        .route("/completedTask", get(completed_tasks))
}
