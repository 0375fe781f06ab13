use chrono::{Datelike, NaiveDate};

use crate::domain::models::availability::AvailabilityRule;
use crate::domain::models::holiday::Holiday;
use crate::domain::models::settings::BookingSettings;
use crate::domain::services::conflict::parse_minutes;

/// Outcome of resolving a single calendar day. A holiday always wins over
/// the weekday rule, and a weekday with no stored rule counts as open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayVerdict {
    Open,
    Holiday,
    WeekdayClosed,
}

impl DayVerdict {
    pub fn bookable(&self) -> bool {
        matches!(self, DayVerdict::Open)
    }

    pub fn reason(&self) -> Option<&'static str> {
        match self {
            DayVerdict::Open => None,
            DayVerdict::Holiday => Some("holiday"),
            DayVerdict::WeekdayClosed => Some("weekday-closed"),
        }
    }
}

/// Weekday index with Sunday as 0, matching the stored rule rows.
pub fn weekday_index(date: NaiveDate) -> i32 {
    date.weekday().num_days_from_sunday() as i32
}

pub fn rule_for_day<'a>(
    rules: &'a [AvailabilityRule],
    date: NaiveDate,
) -> Option<&'a AvailabilityRule> {
    let day = weekday_index(date);
    rules.iter().find(|r| r.day_of_week == day)
}

pub fn resolve_day(date: NaiveDate, rules: &[AvailabilityRule], holidays: &[Holiday]) -> DayVerdict {
    if holidays.iter().any(|h| h.date == date) {
        return DayVerdict::Holiday;
    }
    match rule_for_day(rules, date) {
        Some(rule) if !rule.is_active => DayVerdict::WeekdayClosed,
        _ => DayVerdict::Open,
    }
}

/// Hour cell for the calendar grid. Window bounds are truncated to whole
/// hours here; minute-precise enforcement happens in placement validation.
pub fn is_hour_bookable(
    hour: u32,
    rule: Option<&AvailabilityRule>,
    settings: &BookingSettings,
) -> bool {
    let hour = hour as i32;
    if let Some(rule) = rule {
        if !rule.is_active {
            return false;
        }
        match window_hours(rule) {
            Some((start_hour, end_hour)) => {
                if hour < start_hour || hour >= end_hour {
                    return false;
                }
            }
            None => return false,
        }
    }
    if settings.lunch_break_enabled
        && let (Ok(lunch_start), Ok(lunch_end)) = (
            parse_minutes(&settings.lunch_break_start),
            parse_minutes(&settings.lunch_break_end),
        )
        && hour >= lunch_start / 60
        && hour < lunch_end / 60
    {
        return false;
    }
    true
}

fn window_hours(rule: &AvailabilityRule) -> Option<(i32, i32)> {
    let start = parse_minutes(&rule.start_time).ok()?;
    let end = parse_minutes(&rule.end_time).ok()?;
    Some((start / 60, end / 60))
}
