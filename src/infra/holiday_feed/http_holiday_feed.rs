use crate::domain::models::holiday::HolidayCandidate;
use crate::domain::ports::HolidayFeed;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Client for the Nager.Date public holiday API.
pub struct HttpHolidayFeed {
    client: Client,
    base_url: String,
}

impl HttpHolidayFeed {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build holiday feed client");
        Self { client, base_url }
    }
}

#[derive(Deserialize)]
struct PublicHolidayDto {
    date: NaiveDate,
    #[serde(rename = "localName")]
    local_name: String,
    name: String,
}

#[async_trait]
impl HolidayFeed for HttpHolidayFeed {
    async fn fetch(&self, country: &str, year: i32) -> Result<Vec<HolidayCandidate>, AppError> {
        let url = format!("{}/api/v3/PublicHolidays/{}/{}", self.base_url, year, country);

        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("holiday feed connection error: {}", e)))?;

        if !res.status().is_success() {
            return Err(AppError::Upstream(format!(
                "holiday feed returned status {} for {}/{}",
                res.status(),
                country,
                year
            )));
        }

        let entries: Vec<PublicHolidayDto> = res
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("holiday feed returned unexpected payload: {}", e)))?;

        if entries.is_empty() {
            return Err(AppError::Upstream(format!(
                "holiday feed has no entries for {}/{}",
                country, year
            )));
        }

        Ok(entries
            .into_iter()
            .map(|entry| {
                let reason = if entry.name != entry.local_name {
                    Some(entry.name)
                } else {
                    None
                };
                HolidayCandidate {
                    date: entry.date,
                    name: entry.local_name,
                    reason,
                }
            })
            .collect())
    }
}
