use staydesk::{
    api::router::create_router,
    config::Config,
    domain::services::auth_service::AuthService,
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo, sqlite_message_repo::SqliteMessageRepo,
        sqlite_property_repo::SqlitePropertyRepo, sqlite_task_repo::SqliteTaskRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    infra::seed::seed_if_empty,
    state::AppState,
};

use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tera::Tera;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    /// Fresh app over a throwaway database with the standard demo seed.
    pub async fn new() -> Self {
        Self::build(true).await
    }

    /// Fresh app over a completely empty store.
    #[allow(dead_code)]
    pub async fn empty() -> Self {
        Self::build(false).await
    }

    async fn build(seed: bool) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let mut tera = Tera::default();
        tera.add_raw_template(
            "login.html",
            "<html>{% if error %}<p>{{ error }}</p>{% endif %}<form>login</form></html>",
        )
        .unwrap();
        tera.add_raw_template("property_form.html", "<html><form>new property</form></html>")
            .unwrap();

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            jwt_secret: "integration-test-secret".to_string(),
        };

        let user_repo = Arc::new(SqliteUserRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(user_repo.clone(), &config));

        let state = Arc::new(AppState {
            config,
            user_repo,
            property_repo: Arc::new(SqlitePropertyRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            message_repo: Arc::new(SqliteMessageRepo::new(pool.clone())),
            task_repo: Arc::new(SqliteTaskRepo::new(pool.clone())),
            auth_service,
            templates: Arc::new(tera),
        });

        if seed {
            seed_if_empty(&state).await.expect("Failed to seed test db");
        }

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Logs in through the real form endpoint and returns the session token
    /// extracted from the cookie.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let body = format!("email={}&password={}", email, password);

        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/auth/login")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        if !response.status().is_redirection() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let cookie = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|h| h.to_str().unwrap().to_string())
            .find(|c| c.starts_with("token="))
            .expect("No token cookie returned");

        let start = "token=".len();
        let end = cookie[start..].find(';').unwrap_or(cookie.len() - start);
        cookie[start..start + end].to_string()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
