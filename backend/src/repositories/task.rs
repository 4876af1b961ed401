//! Data access for tasks.
//!
//! Every query is scoped by `owner_id`, so a task that exists but belongs
//! to someone else is indistinguishable from a missing one. State
//! transitions carry their precondition in the WHERE clause; a zero row
//! count means the task was absent, non-owned, or in the wrong state, and
//! nothing was mutated.

use sqlx::PgPool;

use crate::models::task::{Task, TaskStatusFilter};
use crate::types::{TaskId, UserId};

pub async fn create(pool: &PgPool, task: &Task) -> Result<Task, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        INSERT INTO tasks (id, title, description, is_completed, is_deleted, date_created, date_updated, owner_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, title, description, is_completed, is_deleted, date_created, date_updated, owner_id
        "#,
    )
    .bind(task.id)
    .bind(&task.title)
    .bind(&task.description)
    .bind(task.is_completed)
    .bind(task.is_deleted)
    .bind(task.date_created)
    .bind(task.date_updated)
    .bind(task.owner_id)
    .fetch_one(pool)
    .await
}

/// Lists the owner's tasks for one observable state, newest first.
pub async fn list_for_owner(
    pool: &PgPool,
    owner_id: UserId,
    filter: TaskStatusFilter,
) -> Result<Vec<Task>, sqlx::Error> {
    let predicate = match filter {
        TaskStatusFilter::Active => "is_completed = FALSE AND is_deleted = FALSE",
        TaskStatusFilter::Completed => "is_completed = TRUE AND is_deleted = FALSE",
        TaskStatusFilter::Trash => "is_deleted = TRUE",
    };

    let query = format!(
        r#"
        SELECT id, title, description, is_completed, is_deleted, date_created, date_updated, owner_id
        FROM tasks
        WHERE owner_id = $1 AND {predicate}
        ORDER BY date_created DESC
        "#
    );

    sqlx::query_as::<_, Task>(&query)
        .bind(owner_id)
        .fetch_all(pool)
        .await
}

pub async fn find_for_owner(
    pool: &PgPool,
    id: TaskId,
    owner_id: UserId,
) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, title, description, is_completed, is_deleted, date_created, date_updated, owner_id
        FROM tasks
        WHERE id = $1 AND owner_id = $2
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await
}

/// Applies the provided fields and bumps `date_updated`. A `None` field is
/// left untouched, so a provided empty description is stored as empty.
pub async fn update_fields(
    pool: &PgPool,
    id: TaskId,
    owner_id: UserId,
    title: Option<&str>,
    description: Option<&str>,
) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        UPDATE tasks
        SET title = COALESCE($3, title),
            description = COALESCE($4, description),
            date_updated = NOW()
        WHERE id = $1 AND owner_id = $2
        RETURNING id, title, description, is_completed, is_deleted, date_created, date_updated, owner_id
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(title)
    .bind(description)
    .fetch_optional(pool)
    .await
}

/// Moves a non-trashed task to trash. Returns false when nothing matched.
pub async fn soft_delete(pool: &PgPool, id: TaskId, owner_id: UserId) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE tasks
        SET is_deleted = TRUE, date_updated = NOW()
        WHERE id = $1 AND owner_id = $2 AND is_deleted = FALSE
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Brings a trashed task back. Restoring always yields an active task, so
/// `is_completed` is forced back to false alongside the delete flag.
pub async fn restore(pool: &PgPool, id: TaskId, owner_id: UserId) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE tasks
        SET is_deleted = FALSE, is_completed = FALSE, date_updated = NOW()
        WHERE id = $1 AND owner_id = $2 AND is_deleted = TRUE
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn mark_complete(
    pool: &PgPool,
    id: TaskId,
    owner_id: UserId,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE tasks
        SET is_completed = TRUE, date_updated = NOW()
        WHERE id = $1 AND owner_id = $2 AND is_completed = FALSE AND is_deleted = FALSE
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn mark_incomplete(
    pool: &PgPool,
    id: TaskId,
    owner_id: UserId,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE tasks
        SET is_completed = FALSE, date_updated = NOW()
        WHERE id = $1 AND owner_id = $2 AND is_completed = TRUE AND is_deleted = FALSE
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Permanently removes a trashed task. The trash precondition lives in the
/// WHERE clause, so a non-trashed task is never deleted here.
pub async fn hard_delete(pool: &PgPool, id: TaskId, owner_id: UserId) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "DELETE FROM tasks WHERE id = $1 AND owner_id = $2 AND is_deleted = TRUE",
    )
    .bind(id)
    .bind(owner_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
