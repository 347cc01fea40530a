use crate::{
    auth::CurrentUser,
    error::AppError,
    models::CategoryInput,
    services::CategoryService,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

/// Retrieves the authenticated user's categories, ordered by name.
#[get("")]
pub async fn get_categories(
    service: web::Data<CategoryService>,
    user: CurrentUser,
) -> Result<impl Responder, AppError> {
    let categories = service.list(&user).await?;
    Ok(HttpResponse::Ok().json(categories))
}

/// Creates a new category for the authenticated user.
///
/// ## Responses:
/// - `201 Created`: Returns the newly created category as JSON.
/// - `400 Bad Request`: If the name is missing or empty.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
#[post("")]
pub async fn create_category(
    service: web::Data<CategoryService>,
    user: CurrentUser,
    category_data: web::Json<CategoryInput>,
) -> Result<impl Responder, AppError> {
    category_data.validate()?;

    let category = service.create(&user, category_data.into_inner()).await?;
    Ok(HttpResponse::Created().json(category))
}

/// Renames a category owned by the authenticated user.
///
/// ## Responses:
/// - `200 OK`: Returns the updated category as JSON.
/// - `404 Not Found`: If the category does not exist or is not owned by the
///   caller (the two cases are indistinguishable).
#[put("/{id}")]
pub async fn update_category(
    service: web::Data<CategoryService>,
    user: CurrentUser,
    category_id: web::Path<Uuid>,
    category_data: web::Json<CategoryInput>,
) -> Result<impl Responder, AppError> {
    category_data.validate()?;

    let category = service
        .rename(&user, category_id.into_inner(), category_data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(category))
}

/// Deletes a category, clearing it from the owner's tasks in the same
/// transaction.
///
/// ## Responses:
/// - `200 OK`: `{"message": ...}` acknowledgment.
/// - `404 Not Found`: If the category does not exist or is not owned by the
///   caller.
#[delete("/{id}")]
pub async fn delete_category(
    service: web::Data<CategoryService>,
    user: CurrentUser,
    category_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    service.delete(&user, category_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Category deleted" })))
}
