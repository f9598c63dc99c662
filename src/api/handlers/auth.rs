use crate::api::dtos::requests::LoginRequest;
use crate::api::extractors::auth::TOKEN_COOKIE;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use std::sync::Arc;
use time::Duration;
use tower_cookies::{cookie::SameSite, Cookie, Cookies};
use tracing::info;

pub async fn login_form(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    render_login(&state, None)
}

/// Authenticates and issues the session credential as an HTTP-only cookie.
/// A failed attempt re-renders the form with a generic message that does not
/// reveal whether the email exists.
pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Form(payload): Form<LoginRequest>,
) -> Result<Response, AppError> {
    match state.auth_service.login(&payload.email, &payload.password).await {
        Ok((token, user)) => {
            let mut cookie = Cookie::new(TOKEN_COOKIE, token);
            cookie.set_http_only(true);
            cookie.set_same_site(SameSite::Strict);
            cookie.set_path("/");
            cookie.set_max_age(Duration::hours(24));
            cookies.add(cookie);

            info!("User logged in: {}", user.id);

            Ok(Redirect::to("/dashboard").into_response())
        }
        Err(AppError::Unauthorized) => {
            Ok(render_login(&state, Some("Invalid credentials"))?.into_response())
        }
        Err(e) => Err(e),
    }
}

/// Clears the cookie only; the token itself stays valid until its 24-hour
/// window elapses, since there is no server-side revocation list.
pub async fn logout(cookies: Cookies) -> impl IntoResponse {
    cookies.remove(Cookie::build((TOKEN_COOKIE, "")).path("/").into());
    info!("User logged out");
    Redirect::to("/auth/login")
}

fn render_login(state: &AppState, error: Option<&str>) -> Result<Html<String>, AppError> {
    let mut ctx = tera::Context::new();
    ctx.insert("error", &error);
    let html = state
        .templates
        .render("login.html", &ctx)
        .map_err(|_| AppError::Internal)?;
    Ok(Html(html))
}
