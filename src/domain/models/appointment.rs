use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const STATUS_CONFIRMED: &str = "CONFIRMED";
pub const STATUS_PENDING: &str = "PENDING";
pub const STATUS_COMPLETED: &str = "COMPLETED";
pub const STATUS_CANCELLED: &str = "CANCELLED";

pub const STATUSES: [&str; 4] = [
    STATUS_CONFIRMED,
    STATUS_PENDING,
    STATUS_COMPLETED,
    STATUS_CANCELLED,
];

/// A concrete booking on the calendar. Times are wall-clock "HH:MM" strings
/// in the business's local day; `end_time` is always derived from start and
/// duration when the row is written, never taken from client input.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Appointment {
    pub id: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: Option<String>,
    pub duration_min: i32,
    pub event_type_id: Option<String>,
    pub client_name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewAppointmentParams {
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: Option<String>,
    pub duration_min: i32,
    pub event_type_id: Option<String>,
    pub client_name: String,
    pub status: String,
}

impl Appointment {
    pub fn new(params: NewAppointmentParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: params.date,
            start_time: params.start_time,
            end_time: params.end_time,
            duration_min: params.duration_min,
            event_type_id: params.event_type_id,
            client_name: params.client_name,
            status: params.status,
            created_at: Utc::now(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == STATUS_CANCELLED
    }
}
