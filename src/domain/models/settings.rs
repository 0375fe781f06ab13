use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

pub const SETTINGS_CATEGORY_BOOKING: &str = "booking";

/// Tenant-wide booking behaviour, persisted as key/value rows under the
/// "booking" category. Missing keys fall back to the defaults below, so a
/// fresh database behaves sensibly without any seeding.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BookingSettings {
    pub lunch_break_enabled: bool,
    pub lunch_break_start: String,
    pub lunch_break_end: String,
    pub week_view_start: String,
    pub week_view_end: String,
    pub buffer_before: i32,
    pub buffer_after: i32,
    pub max_per_day: i32,
    pub max_per_week: i32,
    pub min_notice_hours: i32,
    pub max_days_ahead: i32,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            lunch_break_enabled: false,
            lunch_break_start: "12:00".to_string(),
            lunch_break_end: "13:00".to_string(),
            week_view_start: "08:00".to_string(),
            week_view_end: "18:00".to_string(),
            buffer_before: 0,
            buffer_after: 0,
            max_per_day: 0,
            max_per_week: 0,
            min_notice_hours: 0,
            max_days_ahead: 0,
        }
    }
}

impl BookingSettings {
    pub fn from_values(values: &HashMap<String, Value>) -> Self {
        let defaults = Self::default();
        Self {
            lunch_break_enabled: bool_value(values, "lunch_break_enabled", defaults.lunch_break_enabled),
            lunch_break_start: str_value(values, "lunch_break_start", &defaults.lunch_break_start),
            lunch_break_end: str_value(values, "lunch_break_end", &defaults.lunch_break_end),
            week_view_start: str_value(values, "week_view_start", &defaults.week_view_start),
            week_view_end: str_value(values, "week_view_end", &defaults.week_view_end),
            buffer_before: int_value(values, "buffer_before", defaults.buffer_before),
            buffer_after: int_value(values, "buffer_after", defaults.buffer_after),
            max_per_day: int_value(values, "max_per_day", defaults.max_per_day),
            max_per_week: int_value(values, "max_per_week", defaults.max_per_week),
            min_notice_hours: int_value(values, "min_notice_hours", defaults.min_notice_hours),
            max_days_ahead: int_value(values, "max_days_ahead", defaults.max_days_ahead),
        }
    }

    pub fn to_pairs(&self) -> Vec<(String, Value)> {
        vec![
            ("lunch_break_enabled".to_string(), Value::Bool(self.lunch_break_enabled)),
            ("lunch_break_start".to_string(), Value::String(self.lunch_break_start.clone())),
            ("lunch_break_end".to_string(), Value::String(self.lunch_break_end.clone())),
            ("week_view_start".to_string(), Value::String(self.week_view_start.clone())),
            ("week_view_end".to_string(), Value::String(self.week_view_end.clone())),
            ("buffer_before".to_string(), Value::from(self.buffer_before)),
            ("buffer_after".to_string(), Value::from(self.buffer_after)),
            ("max_per_day".to_string(), Value::from(self.max_per_day)),
            ("max_per_week".to_string(), Value::from(self.max_per_week)),
            ("min_notice_hours".to_string(), Value::from(self.min_notice_hours)),
            ("max_days_ahead".to_string(), Value::from(self.max_days_ahead)),
        ]
    }
}

fn bool_value(values: &HashMap<String, Value>, key: &str, fallback: bool) -> bool {
    values.get(key).and_then(Value::as_bool).unwrap_or(fallback)
}

fn str_value(values: &HashMap<String, Value>, key: &str, fallback: &str) -> String {
    values
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string()
}

fn int_value(values: &HashMap<String, Value>, key: &str, fallback: i32) -> i32 {
    values
        .get(key)
        .and_then(Value::as_i64)
        .map(|v| v as i32)
        .unwrap_or(fallback)
}
