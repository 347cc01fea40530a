use crate::{
    auth::CurrentUser,
    error::AppError,
    models::{NewTask, TaskFilter, TaskUpdate},
    services::TaskService,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

/// Retrieves a list of tasks for the authenticated user.
///
/// Supports filtering by a case-insensitive `search` term on the title, and
/// exact matches on `priority`, `category_id`, and `is_completed`. Result
/// ordering is fixed: incomplete tasks first, then due date ascending with
/// undated tasks last, then priority descending, then creation time
/// descending.
///
/// ## Query Parameters:
/// - `search` (optional): substring to look for in task titles.
/// - `priority` (optional): exact priority value.
/// - `category_id` (optional): exact category id.
/// - `is_completed` (optional): `true` or `false`.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of tasks.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
/// - `500 Internal Server Error`: For database errors or other unexpected issues.
#[get("")]
pub async fn get_tasks(
    service: web::Data<TaskService>,
    user: CurrentUser,
    filter: web::Query<TaskFilter>,
) -> Result<impl Responder, AppError> {
    let tasks = service.list(&user, &filter).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new task for the authenticated user.
///
/// ## Request Body:
/// - `title`: required, non-empty.
/// - `description` (optional).
/// - `due_date` (optional).
/// - `priority` (optional, defaults to 1).
/// - `category_id` (optional): must name a category owned by the caller.
///
/// ## Responses:
/// - `201 Created`: Returns the newly created task, including its
///   server-assigned id and timestamps.
/// - `400 Bad Request`: Empty title, or a `category_id` that does not name
///   one of the caller's categories.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
#[post("")]
pub async fn create_task(
    service: web::Data<TaskService>,
    user: CurrentUser,
    task_data: web::Json<NewTask>,
) -> Result<impl Responder, AppError> {
    // Validate input
    task_data.validate()?;

    let task = service.create(&user, task_data.into_inner()).await?;
    Ok(HttpResponse::Created().json(task))
}

/// Retrieves a specific task by its ID.
///
/// ## Responses:
/// - `200 OK`: Returns the task as JSON.
/// - `404 Not Found`: If the task does not exist or is not owned by the
///   caller (the two cases are indistinguishable).
#[get("/{id}")]
pub async fn get_task(
    service: web::Data<TaskService>,
    user: CurrentUser,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let task = service.get(&user, task_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(task))
}

/// Updates an existing task.
///
/// A full replacement, not a patch: the body must carry every mutable field
/// (`title`, `description`, `due_date`, `priority`, `category_id`,
/// `is_completed`), mirroring current values for anything unchanged. The
/// task's `updated_at` timestamp is refreshed.
///
/// ## Responses:
/// - `200 OK`: Returns the updated task as JSON.
/// - `400 Bad Request`: Empty title or foreign/unknown `category_id`.
/// - `404 Not Found`: If the task does not exist or is not owned by the caller.
#[put("/{id}")]
pub async fn update_task(
    service: web::Data<TaskService>,
    user: CurrentUser,
    task_id: web::Path<Uuid>,
    task_data: web::Json<TaskUpdate>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = service
        .update(&user, task_id.into_inner(), task_data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(task))
}

/// Deletes a task by its ID.
///
/// ## Responses:
/// - `200 OK`: `{"message": ...}` acknowledgment.
/// - `404 Not Found`: If the task does not exist or is not owned by the caller.
#[delete("/{id}")]
pub async fn delete_task(
    service: web::Data<TaskService>,
    user: CurrentUser,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    service.delete(&user, task_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Task deleted" })))
}
