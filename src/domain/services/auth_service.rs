use crate::config::Config;
use crate::domain::models::auth::{Claims, CurrentUser};
use crate::domain::models::user::UserProfile;
use crate::domain::ports::UserRepository;
use crate::error::AppError;
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use std::sync::Arc;

/// Credential window. Tokens stay cryptographically valid until this
/// elapses, even after logout (there is no server-side revocation list).
const TOKEN_VALIDITY_HOURS: i64 = 24;

pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthService {
    pub fn new(user_repo: Arc<dyn UserRepository>, config: &Config) -> Self {
        Self {
            user_repo,
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        }
    }

    /// Verifies the email/password pair and issues a signed credential.
    /// Unknown email and wrong password both map to the same generic
    /// `Unauthorized` so the response does not leak which one it was.
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, UserProfile), AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::Unauthorized)?;

        let parsed_hash = PasswordHash::new(&user.password).map_err(|_| AppError::Internal)?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AppError::Unauthorized)?;

        let token = self.issue_token(user.id, &user.email, &user.role)?;

        Ok((token, user.into()))
    }

    pub fn issue_token(&self, user_id: i64, email: &str, role: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            role: role.to_string(),
            iat: now.timestamp() as usize,
            exp: (now + Duration::hours(TOKEN_VALIDITY_HOURS)).timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("JWT encoding failed: {}", e);
            AppError::Internal
        })
    }

    /// Yields the embedded identity, or `Unauthorized` when the signature
    /// does not check out or the validity window has elapsed.
    pub fn verify_token(&self, token: &str) -> Result<CurrentUser, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| AppError::Unauthorized)?;

        Ok(CurrentUser {
            id: data.claims.sub,
            email: data.claims.email,
            role: data.claims.role,
        })
    }
}
