use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{test, web, App};
use dotenv::dotenv;
use sqlx::PgPool;

use dailylist::auth::Tokens;
use dailylist::routes;
use dailylist::services::{CategoryService, TaskService, UserService};

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Connects to the database named by DATABASE_URL and applies migrations.
/// Returns None (skipping the test) when the variable is not set.
pub async fn try_pool() -> Option<PgPool> {
    dotenv().ok();
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("DATABASE_URL not set; skipping database-backed test");
            return None;
        }
    };

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test DB");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    Some(pool)
}

/// Builds the full application as an in-process service, wired exactly like
/// `main.rs`.
pub async fn init_app(
    pool: &PgPool,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(Tokens::new(TEST_JWT_SECRET)))
            .app_data(web::Data::new(UserService::new(pool.clone())))
            .app_data(web::Data::new(CategoryService::new(pool.clone())))
            .app_data(web::Data::new(TaskService::new(pool.clone())))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::health)
            .configure(routes::config),
    )
    .await
}

/// Removes a test account; categories and tasks follow via ON DELETE CASCADE.
pub async fn cleanup_user(pool: &PgPool, email: &str) {
    let _ = sqlx::query("DELETE FROM users WHERE email = $1")
        .bind(email)
        .execute(pool)
        .await;
}
