use crate::{
    auth::{IdentityResolver, RequesterId},
    error::AppError,
    models::{NewTask, Task, TaskUpdate},
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;
use sqlx::SqlitePool;

/// Retrieves the requesting user's tasks.
///
/// Identity comes from the `username` request header, resolved by
/// [`RequesterId`]. Tasks are ordered by creation time, most recent first;
/// an empty list is a success, not an error.
#[get("")]
pub async fn list_tasks(
    pool: web::Data<SqlitePool>,
    requester: RequesterId,
) -> Result<impl Responder, AppError> {
    let tasks: Vec<Task> = sqlx::query_as(
        "SELECT id, title, category, completed, created_at FROM tasks \
         WHERE user_id = ? ORDER BY created_at DESC",
    )
    .bind(requester.0)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "tasks": tasks
    })))
}

/// Creates a new task for the user named in the request body.
///
/// The owner is resolved from the `username` body field; `category` falls
/// back to the `"uncategorized"` sentinel and new tasks start uncompleted.
#[post("")]
pub async fn create_task(
    pool: web::Data<SqlitePool>,
    resolver: web::Data<dyn IdentityResolver>,
    task_data: web::Json<NewTask>,
) -> Result<impl Responder, AppError> {
    let (username, title, category) = task_data.fields()?;
    let user_id = resolver.resolve(username).await?;

    sqlx::query(
        "INSERT INTO tasks (user_id, title, category, completed, created_at) \
         VALUES (?, ?, ?, 0, ?)",
    )
    .bind(user_id)
    .bind(title)
    .bind(category)
    .bind(Utc::now())
    .execute(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "task added"
    })))
}

/// Applies a partial update to a task.
///
/// Only fields present in the payload are written. No identity accompanies
/// the request: any caller may update any task by id.
#[put("/{id}")]
pub async fn update_task(
    pool: web::Data<SqlitePool>,
    task_id: web::Path<i64>,
    task_data: web::Json<TaskUpdate>,
) -> Result<impl Responder, AppError> {
    let task_id = task_id.into_inner();

    // Existence check and update are separate statements; only
    // single-statement atomicity is relied on.
    let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM tasks WHERE id = ?")
        .bind(task_id)
        .fetch_optional(pool.get_ref())
        .await?;
    if existing.is_none() {
        return Err(AppError::NotFound("task not found".into()));
    }

    let assignments = task_data.assignments();
    if assignments.is_empty() {
        return Err(AppError::Validation("nothing to update".into()));
    }

    let sql = format!("UPDATE tasks SET {} WHERE id = ?", assignments.join(", "));

    // Bind order must match TaskUpdate::assignments.
    let mut query = sqlx::query(&sql);
    if let Some(title) = &task_data.title {
        query = query.bind(title);
    }
    if let Some(category) = &task_data.category {
        query = query.bind(category);
    }
    if let Some(completed) = task_data.completed {
        query = query.bind(i64::from(completed));
    }

    query.bind(task_id).execute(pool.get_ref()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "task updated"
    })))
}

/// Deletes a task by id.
///
/// Same contract as update: no ownership check, not-found when the id does
/// not exist.
#[delete("/{id}")]
pub async fn delete_task(
    pool: web::Data<SqlitePool>,
    task_id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let task_id = task_id.into_inner();

    let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM tasks WHERE id = ?")
        .bind(task_id)
        .fetch_optional(pool.get_ref())
        .await?;
    if existing.is_none() {
        return Err(AppError::NotFound("task not found".into()));
    }

    sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(task_id)
        .execute(pool.get_ref())
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "task deleted"
    })))
}
