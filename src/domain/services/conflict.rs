use chrono::{NaiveTime, Timelike};

use crate::domain::models::appointment::Appointment;
use crate::error::AppError;

pub const DAY_MINUTES: i32 = 1440;

/// Half-open span of minutes since midnight: `[start_min, end_min)`.
/// Two spans conflict only when they share at least one minute, so an
/// appointment ending 10:00 never collides with one starting 10:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start_min: i32,
    pub end_min: i32,
}

impl Interval {
    pub fn new(start_min: i32, end_min: i32) -> Self {
        Self { start_min, end_min }
    }

    pub fn from_start(start_min: i32, duration_min: i32) -> Result<Self, AppError> {
        if duration_min <= 0 {
            return Err(AppError::Validation("duration must be positive".to_string()));
        }
        let end_min = start_min + duration_min;
        if end_min > DAY_MINUTES {
            return Err(AppError::Validation(
                "appointment must end within the same day".to_string(),
            ));
        }
        Ok(Self { start_min, end_min })
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start_min < other.end_min && self.end_min > other.start_min
    }

    /// Pads the span outward for buffer checks. Only the candidate being
    /// placed is widened; stored appointments keep their real extent.
    pub fn widened(&self, before_min: i32, after_min: i32) -> Interval {
        Interval {
            start_min: self.start_min - before_min.max(0),
            end_min: self.end_min + after_min.max(0),
        }
    }
}

pub fn parse_minutes(value: &str) -> Result<i32, AppError> {
    let time = NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| {
        AppError::Validation(format!("invalid time '{}', expected HH:MM", value))
    })?;
    Ok((time.hour() * 60 + time.minute()) as i32)
}

pub fn format_minutes(total: i32) -> String {
    format!("{:02}:{:02}", total / 60, total % 60)
}

pub fn appointment_interval(appointment: &Appointment) -> Result<Interval, AppError> {
    let start_min = parse_minutes(&appointment.start_time)?;
    Interval::from_start(start_min, appointment.duration_min)
}

/// Scans one day's appointments for overlaps with the candidate span.
/// Cancelled rows never block a slot, and `exclude_id` lets a reschedule
/// ignore the appointment being moved.
pub fn find_conflicts<'a>(
    candidate: Interval,
    same_day: &'a [Appointment],
    exclude_id: Option<&str>,
) -> Result<Vec<&'a Appointment>, AppError> {
    let mut hits = Vec::new();
    for appointment in same_day {
        if appointment.is_cancelled() {
            continue;
        }
        if exclude_id.is_some_and(|id| id == appointment.id) {
            continue;
        }
        let existing = appointment_interval(appointment)?;
        if candidate.overlaps(&existing) {
            hits.push(appointment);
        }
    }
    Ok(hits)
}
