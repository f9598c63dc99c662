use crate::domain::models::auth::CurrentUser;
use crate::state::AppState;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
    response::Redirect,
};
use std::sync::Arc;
use tower_cookies::{Cookie, Cookies};

pub const TOKEN_COOKIE: &str = "token";

/// Credential gate for every protected route. The token is read from the
/// `token` cookie, falling back to an `Authorization: Bearer` header.
/// Failures redirect to the login page instead of returning a status code.
pub struct AuthUser(pub CurrentUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let login_redirect = Redirect::to("/auth/login");

        let cookies = parts.extensions.get::<Cookies>().cloned();

        let token = cookies
            .as_ref()
            .and_then(|c| c.get(TOKEN_COOKIE).map(|c| c.value().to_string()))
            .or_else(|| {
                parts
                    .headers
                    .get(header::AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.strip_prefix("Bearer "))
                    .map(|v| v.to_string())
            })
            .ok_or(login_redirect)?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        match app_state.auth_service.verify_token(&token) {
            Ok(user) => Ok(AuthUser(user)),
            Err(_) => {
                // Stale or forged credential: drop the cookie before bouncing
                if let Some(cookies) = cookies {
                    cookies.remove(Cookie::build((TOKEN_COOKIE, "")).path("/").into());
                }
                Err(Redirect::to("/auth/login"))
            }
        }
    }
}
