use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::models::appointment::Appointment;
use crate::domain::models::holiday::{Holiday, HolidayCandidate};

#[derive(Serialize)]
pub struct PlacementResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Serialize)]
pub struct ImportHolidaysResponse {
    pub added: Vec<Holiday>,
    pub skipped: Vec<HolidayCandidate>,
}

#[derive(Serialize)]
pub struct HourCell {
    pub hour: i32,
    pub bookable: bool,
}

#[derive(Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub bookable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub hours: Vec<HourCell>,
}

#[derive(Serialize)]
pub struct WeekViewResponse {
    pub start: NaiveDate,
    pub days: Vec<CalendarDay>,
    pub appointments: Vec<Appointment>,
}
