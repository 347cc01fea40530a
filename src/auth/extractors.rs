use actix_web::dev::Payload;
use actix_web::{web, Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;
use sqlx::PgPool;

use crate::auth::token::Claims;
use crate::error::AppError;

/// The authenticated caller, resolved from verified token claims against the
/// user store.
///
/// This extractor is intended for routes protected by `AuthMiddleware`, which
/// validates the bearer token and inserts its `Claims` into request
/// extensions. The extractor then loads the referenced user row; a valid
/// token whose user no longer exists fails with 401 "user not found".
///
/// Handlers receive the value and pass it explicitly into service calls, so
/// ownership scoping never depends on hidden request state.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CurrentUser {
    pub id: i32,
    pub email: String,
}

impl FromRequest for CurrentUser {
    type Error = ActixError; // AppError will be converted into ActixError via ResponseError
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<Claims>().cloned();
        let pool = req.app_data::<web::Data<PgPool>>().cloned();

        Box::pin(async move {
            // Missing claims means AuthMiddleware did not run on this route.
            // Responding with Unauthorized is a safe default.
            let claims = claims.ok_or_else(|| {
                ActixError::from(AppError::Authentication(
                    "No token claims in request. Ensure AuthMiddleware is active.".into(),
                ))
            })?;
            let pool = pool.ok_or_else(|| {
                ActixError::from(AppError::Internal("Database pool not configured".into()))
            })?;

            let user = sqlx::query_as::<_, CurrentUser>("SELECT id, email FROM users WHERE id = $1")
                .bind(claims.sub)
                .fetch_optional(pool.get_ref())
                .await
                .map_err(AppError::from)?;

            match user {
                Some(user) => Ok(user),
                None => Err(AppError::Authentication("user not found".into()).into()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::dev::Payload;
    use actix_web::http::StatusCode;
    use actix_web::test;

    #[actix_rt::test]
    async fn test_current_user_extractor_without_claims() {
        let req = test::TestRequest::default().to_http_request();
        // No claims inserted into extensions

        let mut payload = Payload::None;
        let extracted = CurrentUser::from_request(&req, &mut payload).await;
        assert!(extracted.is_err());

        let err = extracted.unwrap_err();
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
