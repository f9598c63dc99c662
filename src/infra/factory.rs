use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tera::Tera;
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::services::auth_service::AuthService;
use crate::infra::repositories::{
    sqlite_booking_repo::SqliteBookingRepo, sqlite_message_repo::SqliteMessageRepo,
    sqlite_property_repo::SqlitePropertyRepo, sqlite_task_repo::SqliteTaskRepo,
    sqlite_user_repo::SqliteUserRepo,
};
use crate::infra::seed::seed_if_empty;
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing SQLite connection with WAL mode...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid SQLite connection string")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .expect("Failed to connect to SQLite");

    run_migrations(&pool).await;

    let mut tera = Tera::default();
    tera.add_raw_template("login.html", include_str!("../templates/login.html"))
        .expect("Failed to load login template");
    tera.add_raw_template(
        "property_form.html",
        include_str!("../templates/property_form.html"),
    )
    .expect("Failed to load property form template");

    let user_repo = Arc::new(SqliteUserRepo::new(pool.clone()));
    let auth_service = Arc::new(AuthService::new(user_repo.clone(), config));

    let state = AppState {
        config: config.clone(),
        user_repo,
        property_repo: Arc::new(SqlitePropertyRepo::new(pool.clone())),
        booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
        message_repo: Arc::new(SqliteMessageRepo::new(pool.clone())),
        task_repo: Arc::new(SqliteTaskRepo::new(pool.clone())),
        auth_service,
        templates: Arc::new(tera),
    };

    seed_if_empty(&state)
        .await
        .expect("Failed to seed database");

    state
}

async fn run_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
