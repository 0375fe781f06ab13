use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row per weekday (0 = Sunday .. 6 = Saturday). A weekday without a row
/// is treated as bookable with no window.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct AvailabilityRule {
    pub day_of_week: i32,
    pub is_active: bool,
    pub start_time: String,
    pub end_time: String,
}

impl AvailabilityRule {
    pub fn new(day_of_week: i32, is_active: bool, start_time: String, end_time: String) -> Self {
        Self { day_of_week, is_active, start_time, end_time }
    }
}
