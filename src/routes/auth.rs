use crate::{
    auth::{AuthResponse, LoginRequest, RegisterRequest, Tokens},
    error::AppError,
    services::UserService,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Creates a new user account and returns a bearer token alongside the
/// account's id and email.
#[post("/register")]
pub async fn register(
    users: web::Data<UserService>,
    tokens: web::Data<Tokens>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    register_data.validate()?;

    let user = users
        .register(&register_data.email, &register_data.password)
        .await?;

    let token = tokens.issue(user.id)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        id: user.id,
        email: user.email,
        token,
    }))
}

/// Login user
///
/// Authenticates a user and returns a bearer token. Unknown emails and
/// wrong passwords are indistinguishable to the caller.
#[post("/login")]
pub async fn login(
    users: web::Data<UserService>,
    tokens: web::Data<Tokens>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let user = users
        .authenticate(&login_data.email, &login_data.password)
        .await?;

    let token = tokens.issue(user.id)?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        id: user.id,
        email: user.email,
        token,
    }))
}
