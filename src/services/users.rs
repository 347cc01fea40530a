use sqlx::{FromRow, PgPool};

use crate::auth::{hash_password, verify_password};
use crate::error::AppError;
use crate::models::User;

/// Internal row shape for credential checks; the hash never leaves this
/// module.
#[derive(FromRow)]
struct UserCredentials {
    id: i32,
    email: String,
    password_hash: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

/// Registration and credential verification over the user store.
#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates an account with a salted hash of the password.
    ///
    /// Fails with `AppError::Conflict` when the email is already taken,
    /// either via the pre-check here or via the unique constraint on
    /// `users.email` (a unique violation also converts to `Conflict`).
    pub async fn register(&self, email: &str, password: &str) -> Result<User, AppError> {
        let existing = sqlx::query_as::<_, (i32,)>("SELECT id FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        if existing.is_some() {
            return Err(AppError::Conflict("Email already registered".into()));
        }

        let password_hash = hash_password(password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash) VALUES ($1, $2) \
             RETURNING id, email, created_at",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Verifies credentials and returns the account.
    ///
    /// An unknown email and a wrong password fail identically, so callers
    /// cannot probe which addresses are registered.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserCredentials>(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(creds) = row {
            if verify_password(password, &creds.password_hash)? {
                return Ok(User {
                    id: creds.id,
                    email: creds.email,
                    created_at: creds.created_at,
                });
            }
        }

        Err(AppError::Authentication("invalid credentials".into()))
    }
}
