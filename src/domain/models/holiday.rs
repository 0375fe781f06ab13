use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A date on which all bookings are blocked, regardless of weekday rules.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Holiday {
    pub fn new(date: NaiveDate, name: String, reason: Option<String>) -> Self {
        Self {
            date,
            name,
            reason,
            created_at: Utc::now(),
        }
    }
}

/// An unsaved holiday coming from an import source (external feed, regional
/// preset, or a manual bulk request).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HolidayCandidate {
    pub date: NaiveDate,
    pub name: String,
    pub reason: Option<String>,
}
