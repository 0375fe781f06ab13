use serde::Deserialize;

#[derive(Deserialize)]
pub struct AvailabilityRuleInput {
    pub day_of_week: i32,
    pub is_active: Option<bool>,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Deserialize)]
pub struct UpsertAvailabilityRequest {
    pub rules: Vec<AvailabilityRuleInput>,
}

#[derive(Deserialize)]
pub struct CreateHolidayRequest {
    pub date: String,
    pub name: String,
    pub reason: Option<String>,
}

#[derive(Deserialize)]
pub struct ImportHolidaysRequest {
    pub country: String,
    pub year: i32,
}

#[derive(Deserialize)]
pub struct PresetHolidaysRequest {
    pub region: String,
    pub year: i32,
}

#[derive(Deserialize)]
pub struct CreateEventTypeRequest {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub duration_min: i32,
    pub location_type: String,
    pub color: Option<String>,
    pub buffer_before: Option<i32>,
    pub buffer_after: Option<i32>,
    pub max_per_day: Option<i32>,
    pub max_per_week: Option<i32>,
    pub min_notice_hours: Option<i32>,
    pub max_days_ahead: Option<i32>,
    pub is_active: Option<bool>,
    pub is_public: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateEventTypeRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub duration_min: Option<i32>,
    pub location_type: Option<String>,
    pub color: Option<String>,
    pub buffer_before: Option<i32>,
    pub buffer_after: Option<i32>,
    pub max_per_day: Option<i32>,
    pub max_per_week: Option<i32>,
    pub min_notice_hours: Option<i32>,
    pub max_days_ahead: Option<i32>,
    pub is_active: Option<bool>,
    pub is_public: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateAppointmentRequest {
    pub date: String,
    pub start_time: String,
    pub duration_min: Option<i32>,
    pub event_type_id: Option<String>,
    pub client_name: String,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateAppointmentRequest {
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub duration_min: Option<i32>,
    pub client_name: Option<String>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct ValidatePlacementRequest {
    pub date: String,
    pub start_time: String,
    pub duration_min: i32,
    pub event_type_id: Option<String>,
    pub exclude_id: Option<String>,
}

#[derive(Deserialize)]
pub struct BookingSettingsPatch {
    pub lunch_break_enabled: Option<bool>,
    pub lunch_break_start: Option<String>,
    pub lunch_break_end: Option<String>,
    pub week_view_start: Option<String>,
    pub week_view_end: Option<String>,
    pub buffer_before: Option<i32>,
    pub buffer_after: Option<i32>,
    pub max_per_day: Option<i32>,
    pub max_per_week: Option<i32>,
    pub min_notice_hours: Option<i32>,
    pub max_days_ahead: Option<i32>,
}
