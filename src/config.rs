use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub holiday_feed_url: String,
    pub holiday_feed_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            holiday_feed_url: env::var("HOLIDAY_FEED_URL").unwrap_or_else(|_| "https://date.nager.at".to_string()),
            holiday_feed_timeout_secs: env::var("HOLIDAY_FEED_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("HOLIDAY_FEED_TIMEOUT_SECS must be a number"),
        }
    }
}
