use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use sqlx::PgPool;

use dailylist::auth::Tokens;
use dailylist::config::Config;
use dailylist::routes;
use dailylist::services::{CategoryService, TaskService, UserService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    let tokens = web::Data::new(Tokens::new(&config.jwt_secret));
    let users = web::Data::new(UserService::new(pool.clone()));
    let categories = web::Data::new(CategoryService::new(pool.clone()));
    let tasks = web::Data::new(TaskService::new(pool.clone()));

    log::info!("Starting dailylist server at {}", config.server_url());

    let bind_addr = (config.server_host.clone(), config.server_port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(tokens.clone())
            .app_data(users.clone())
            .app_data(categories.clone())
            .app_data(tasks.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::health)
            .configure(routes::config)
    })
    .bind(bind_addr)?
    .run()
    .await
}
