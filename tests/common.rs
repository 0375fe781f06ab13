use scheduling_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    infra::repositories::{
        sqlite_appointment_repo::SqliteAppointmentRepo,
        sqlite_availability_repo::SqliteAvailabilityRepo,
        sqlite_event_type_repo::SqliteEventTypeRepo,
        sqlite_holiday_repo::SqliteHolidayRepo,
        sqlite_settings_repo::SqliteSettingsRepo,
    },
    domain::models::holiday::HolidayCandidate,
    domain::ports::HolidayFeed,
    error::AppError,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::sync::Arc;
use uuid::Uuid;
use axum::Router;
use std::str::FromStr;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Stands in for the public holiday feed. Knows exactly one country/year
/// combination; everything else fails the way an unreachable feed would.
pub struct MockHolidayFeed;

#[async_trait]
impl HolidayFeed for MockHolidayFeed {
    async fn fetch(&self, country: &str, year: i32) -> Result<Vec<HolidayCandidate>, AppError> {
        if country != "DE" || year != 2026 {
            return Err(AppError::Upstream(format!(
                "holiday feed returned status 404 for {}/{}",
                country, year
            )));
        }
        Ok(vec![
            feed_entry(2026, 1, 1, "Neujahr", None),
            feed_entry(2026, 4, 3, "Karfreitag", Some("Good Friday")),
            feed_entry(2026, 5, 1, "Tag der Arbeit", Some("Labour Day")),
        ])
    }
}

fn feed_entry(year: i32, month: u32, day: u32, name: &str, reason: Option<&str>) -> HolidayCandidate {
    HolidayCandidate {
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        name: name.to_string(),
        reason: reason.map(str::to_string),
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
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

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            holiday_feed_url: "http://localhost".to_string(),
            holiday_feed_timeout_secs: 1,
        };

        let state = Arc::new(AppState {
            config,
            availability_repo: Arc::new(SqliteAvailabilityRepo::new(pool.clone())),
            holiday_repo: Arc::new(SqliteHolidayRepo::new(pool.clone())),
            event_type_repo: Arc::new(SqliteEventTypeRepo::new(pool.clone())),
            appointment_repo: Arc::new(SqliteAppointmentRepo::new(pool.clone())),
            settings_repo: Arc::new(SqliteSettingsRepo::new(pool.clone())),
            holiday_feed: Arc::new(MockHolidayFeed),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
