use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Bearer tokens stay valid for 30 days after issuance.
const TOKEN_LIFETIME_DAYS: i64 = 30;

/// Represents the claims encoded within a JWT (JSON Web Token).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token, typically the user's unique identifier.
    pub sub: i32, // user id
    /// Timestamp (seconds since epoch) at which the token was issued.
    pub iat: usize,
    /// Expiration timestamp (seconds since epoch) for the token.
    pub exp: usize,
}

/// Signing and verification keys for bearer tokens.
///
/// Built once from the configured secret at startup and shared through app
/// data, so no request-path code touches the environment.
pub struct Tokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl Tokens {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a signed token for the given user ID, expiring in 30 days.
    ///
    /// # Returns
    /// A `Result` containing the JWT string if successful.
    /// Returns `AppError::Internal` if token encoding fails.
    pub fn issue(&self, user_id: i32) -> Result<String, AppError> {
        let now = chrono::Utc::now();
        let expiration = now
            .checked_add_signed(chrono::Duration::days(TOKEN_LIFETIME_DAYS))
            .expect("valid timestamp")
            .timestamp() as usize;

        let claims = Claims {
            sub: user_id,
            iat: now.timestamp() as usize,
            exp: expiration,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("Failed to generate token: {}", e)))
    }

    /// Verifies a token string and decodes its claims.
    ///
    /// Malformed, expired, and wrong-secret tokens all fail the same way:
    /// `AppError::Authentication("invalid token")`. Callers cannot tell the
    /// cases apart.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AppError::Authentication("invalid token".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_issue_and_verify() {
        let tokens = Tokens::new("test_secret_for_issue_verify");
        let user_id = 1;
        let token = tokens.issue(user_id).unwrap();
        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_expiration() {
        let secret = "test_secret_for_expiration";
        let tokens = Tokens::new(secret);

        let expiration = chrono::Utc::now()
            .checked_sub_signed(chrono::Duration::hours(2))
            .expect("valid timestamp")
            .timestamp() as usize;

        let claims_expired = Claims {
            sub: 2,
            iat: expiration,
            exp: expiration,
        };
        let expired_token = encode(
            &Header::default(),
            &claims_expired,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        match tokens.verify(&expired_token) {
            Err(AppError::Authentication(msg)) => assert_eq!(msg, "invalid token"),
            Ok(_) => panic!("Token should have been invalid due to expiration"),
            Err(e) => panic!("Unexpected error type for expired token: {:?}", e),
        }
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issued = Tokens::new("secret_one").issue(3).unwrap();
        let verifier = Tokens::new("a_completely_different_secret");

        match verifier.verify(&issued) {
            Err(AppError::Authentication(msg)) => assert_eq!(msg, "invalid token"),
            Ok(_) => panic!("Token should have been invalid due to signature mismatch"),
            Err(e) => panic!("Unexpected error type for invalid signature: {:?}", e),
        }
    }

    #[test]
    fn test_malformed_token_rejected() {
        let tokens = Tokens::new("test_secret_for_malformed");
        match tokens.verify("not-a-jwt") {
            Err(AppError::Authentication(msg)) => assert_eq!(msg, "invalid token"),
            other => panic!("Unexpected result for malformed token: {:?}", other.err()),
        }
    }
}
