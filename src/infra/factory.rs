use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::infra::holiday_feed::http_holiday_feed::HttpHolidayFeed;
use crate::infra::repositories::{
    postgres_appointment_repo::PostgresAppointmentRepo,
    postgres_availability_repo::PostgresAvailabilityRepo,
    postgres_event_type_repo::PostgresEventTypeRepo,
    postgres_holiday_repo::PostgresHolidayRepo,
    postgres_settings_repo::PostgresSettingsRepo,
    sqlite_appointment_repo::SqliteAppointmentRepo,
    sqlite_availability_repo::SqliteAvailabilityRepo,
    sqlite_event_type_repo::SqliteEventTypeRepo,
    sqlite_holiday_repo::SqliteHolidayRepo,
    sqlite_settings_repo::SqliteSettingsRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    let holiday_feed = Arc::new(HttpHolidayFeed::new(
        config.holiday_feed_url.clone(),
        Duration::from_secs(config.holiday_feed_timeout_secs),
    ));

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState {
            config: config.clone(),
            availability_repo: Arc::new(PostgresAvailabilityRepo::new(pool.clone())),
            holiday_repo: Arc::new(PostgresHolidayRepo::new(pool.clone())),
            event_type_repo: Arc::new(PostgresEventTypeRepo::new(pool.clone())),
            appointment_repo: Arc::new(PostgresAppointmentRepo::new(pool.clone())),
            settings_repo: Arc::new(PostgresSettingsRepo::new(pool.clone())),
            holiday_feed,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
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

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            availability_repo: Arc::new(SqliteAvailabilityRepo::new(pool.clone())),
            holiday_repo: Arc::new(SqliteHolidayRepo::new(pool.clone())),
            event_type_repo: Arc::new(SqliteEventTypeRepo::new(pool.clone())),
            appointment_repo: Arc::new(SqliteAppointmentRepo::new(pool.clone())),
            settings_repo: Arc::new(SqliteSettingsRepo::new(pool.clone())),
            holiday_feed,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
