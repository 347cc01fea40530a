pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

// Re-export necessary items
pub use extractors::CurrentUser;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{Claims, Tokens};

/// Represents the payload for a user login request.
///
/// Deliberately unvalidated beyond field presence: every credential failure,
/// whatever its shape, surfaces as the same 401.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// User's email address.
    pub email: String,
    /// User's password.
    pub password: String,
}

/// Represents the payload for a new user registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address for the new account.
    /// Must be a valid email format.
    #[validate(email)]
    pub email: String,
    /// Password for the new account. Must not be empty.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Response structure after successful authentication (login or registration).
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The unique identifier of the authenticated user.
    pub id: i32,
    /// The authenticated user's email address.
    pub email: String,
    /// The bearer token for subsequent requests.
    pub token: String,
}
