//! Task CRUD and state transitions, all scoped to the authenticated owner.
//!
//! Absent and non-owned tasks are both reported as 404 so the API never
//! confirms that someone else's task exists.

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppError,
    models::{
        task::{
            CreateTaskRequest, Task, TaskListQuery, TaskMessageResponse, TaskResponse,
            TaskStatusFilter, UpdateTaskRequest,
        },
        MessageResponse,
    },
    repositories,
    state::AppState,
    types::{TaskId, UserId},
};

fn task_not_found() -> AppError {
    AppError::NotFound("Task not found or does not belong to user.".to_string())
}

pub async fn create_task(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskMessageResponse>), AppError> {
    let title = match payload.title {
        Some(title) if !title.trim().is_empty() => title,
        _ => return Err(AppError::BadRequest("Title is required.".to_string())),
    };

    let task = Task::new(title, payload.description, user_id);
    let task = repositories::task::create(&state.pool, &task).await?;

    Ok((
        StatusCode::CREATED,
        Json(TaskMessageResponse {
            message: "Task created successfully!".to_string(),
            task: TaskResponse::from(task),
        }),
    ))
}

pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
    Query(query): Query<TaskListQuery>,
) -> Result<Json<Vec<TaskResponse>>, AppError> {
    let filter = TaskStatusFilter::parse(query.status.as_deref());
    let tasks = repositories::task::list_for_owner(&state.pool, user_id, filter).await?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

pub async fn get_task(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
    Path(id): Path<TaskId>,
) -> Result<Json<TaskResponse>, AppError> {
    let task = repositories::task::find_for_owner(&state.pool, id, user_id)
        .await?
        .ok_or_else(task_not_found)?;

    Ok(Json(TaskResponse::from(task)))
}

pub async fn update_task(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
    Path(id): Path<TaskId>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<TaskMessageResponse>, AppError> {
    if payload.title.is_none() && payload.description.is_none() {
        return Err(AppError::BadRequest(
            "At least title or description must be provided for update.".to_string(),
        ));
    }
    if let Some(title) = &payload.title {
        if title.trim().is_empty() {
            return Err(AppError::BadRequest("Title cannot be empty.".to_string()));
        }
    }

    let task = repositories::task::update_fields(
        &state.pool,
        id,
        user_id,
        payload.title.as_deref(),
        payload.description.as_deref(),
    )
    .await?
    .ok_or_else(task_not_found)?;

    Ok(Json(TaskMessageResponse {
        message: "Task updated successfully!".to_string(),
        task: TaskResponse::from(task),
    }))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
    Path(id): Path<TaskId>,
) -> Result<Json<MessageResponse>, AppError> {
    if !repositories::task::soft_delete(&state.pool, id, user_id).await? {
        return Err(task_not_found());
    }

    Ok(Json(MessageResponse::new(
        "Task moved to trash successfully!",
    )))
}

pub async fn restore_task(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
    Path(id): Path<TaskId>,
) -> Result<Json<MessageResponse>, AppError> {
    if !repositories::task::restore(&state.pool, id, user_id).await? {
        return Err(AppError::NotFound(
            "Task not found in trash or does not belong to user.".to_string(),
        ));
    }

    Ok(Json(MessageResponse::new("Task restored successfully!")))
}

pub async fn complete_task(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
    Path(id): Path<TaskId>,
) -> Result<Json<MessageResponse>, AppError> {
    if !repositories::task::mark_complete(&state.pool, id, user_id).await? {
        return Err(AppError::NotFound(
            "Task not found, already completed, or does not belong to user.".to_string(),
        ));
    }

    Ok(Json(MessageResponse::new("Task marked as complete!")))
}

pub async fn incomplete_task(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
    Path(id): Path<TaskId>,
) -> Result<Json<MessageResponse>, AppError> {
    if !repositories::task::mark_incomplete(&state.pool, id, user_id).await? {
        return Err(AppError::NotFound(
            "Task not found, already incomplete, or does not belong to user.".to_string(),
        ));
    }

    Ok(Json(MessageResponse::new("Task marked as incomplete!")))
}

pub async fn hard_delete_task(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
    Path(id): Path<TaskId>,
) -> Result<Json<MessageResponse>, AppError> {
    let task = repositories::task::find_for_owner(&state.pool, id, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found.".to_string()))?;

    if !task.is_deleted {
        return Err(AppError::BadRequest(
            "Task is not in trash and cannot be permanently deleted.".to_string(),
        ));
    }

    repositories::task::hard_delete(&state.pool, id, user_id).await?;

    Ok(Json(MessageResponse::new(
        "Task permanently deleted successfully.",
    )))
}
