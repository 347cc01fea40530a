pub mod auth;
pub mod categories;
pub mod health;
pub mod tasks;

use crate::auth::AuthMiddleware;
use actix_web::web;

/// Mounts every API route. The auth scope is public; the category and task
/// scopes sit behind `AuthMiddleware`.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(auth::register)
            .service(auth::login),
    )
    .service(
        web::scope("/categories")
            .wrap(AuthMiddleware)
            .service(categories::get_categories)
            .service(categories::create_category)
            .service(categories::update_category)
            .service(categories::delete_category),
    )
    .service(
        web::scope("/tasks")
            .wrap(AuthMiddleware)
            .service(tasks::get_tasks)
            .service(tasks::create_task)
            .service(tasks::get_task)
            .service(tasks::update_task)
            .service(tasks::delete_task),
    );
}
