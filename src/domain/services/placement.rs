use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::models::appointment::Appointment;
use crate::domain::models::availability::AvailabilityRule;
use crate::domain::models::event_type::EventType;
use crate::domain::models::holiday::Holiday;
use crate::domain::models::settings::BookingSettings;
use crate::domain::services::availability::{resolve_day, rule_for_day, DayVerdict};
use crate::domain::services::conflict::{find_conflicts, parse_minutes, Interval};
use crate::error::AppError;

/// Why a candidate placement was turned down. `message()` is the exact
/// string shown to the user, so wording changes here are API changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Holiday,
    WeekdayClosed,
    OutsideHours { open: String, close: String },
    LunchBreak,
    Conflict,
    NoticeTooShort { hours: i32 },
    HorizonExceeded { days: i32 },
    DailyCapReached { cap: i32 },
    WeeklyCapReached { cap: i32 },
}

impl Rejection {
    pub fn message(&self) -> String {
        match self {
            Rejection::Holiday => "day is a holiday".to_string(),
            Rejection::WeekdayClosed => "day not available for bookings".to_string(),
            Rejection::OutsideHours { open, close } => {
                format!("outside available hours ({}–{})", open, close)
            }
            Rejection::LunchBreak => "blocked by lunch break".to_string(),
            Rejection::Conflict => "conflicts with another appointment".to_string(),
            Rejection::NoticeTooShort { hours } => {
                format!("requires at least {} hours notice", hours)
            }
            Rejection::HorizonExceeded { days } => {
                format!("cannot book more than {} days ahead", days)
            }
            Rejection::DailyCapReached { cap } => {
                format!("daily limit of {} bookings reached", cap)
            }
            Rejection::WeeklyCapReached { cap } => {
                format!("weekly limit of {} bookings reached", cap)
            }
        }
    }
}

#[derive(Debug)]
pub enum Decision {
    Allowed,
    Rejected(Rejection),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }

    pub fn reason(&self) -> Option<String> {
        match self {
            Decision::Allowed => None,
            Decision::Rejected(rejection) => Some(rejection.message()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PlacementRequest {
    pub date: NaiveDate,
    pub start_min: i32,
    pub duration_min: i32,
}

/// Snapshot of everything already fetched for the candidate's day. The
/// validator never reaches out to storage itself.
pub struct DaySchedule<'a> {
    pub rules: &'a [AvailabilityRule],
    pub holidays: &'a [Holiday],
    pub settings: &'a BookingSettings,
    pub appointments: &'a [Appointment],
}

/// Extra inputs for event-type-aware validation: the template's own
/// constraints plus the appointments of the surrounding week for cap counts.
pub struct BookingContext<'a> {
    pub day: DaySchedule<'a>,
    pub event_type: &'a EventType,
    pub week_appointments: &'a [Appointment],
    pub now: NaiveDateTime,
}

/// Plain placement check: day, availability window, lunch break, conflicts.
/// Checks run in that order and stop at the first failure, because the
/// first reason is the one the user sees.
pub fn validate_placement(
    request: &PlacementRequest,
    day: &DaySchedule,
    exclude_id: Option<&str>,
) -> Result<Decision, AppError> {
    let candidate = Interval::from_start(request.start_min, request.duration_min)?;

    if let Some(rejection) = schedule_rejection(request.date, candidate, day)? {
        return Ok(Decision::Rejected(rejection));
    }

    let conflicts = find_conflicts(candidate, day.appointments, exclude_id)?;
    if !conflicts.is_empty() {
        return Ok(Decision::Rejected(Rejection::Conflict));
    }

    Ok(Decision::Allowed)
}

/// Full booking check for a specific event type. Buffers widen the candidate
/// before the conflict scan, then notice, horizon and cap limits apply.
/// A limit set to 0 is disabled.
pub fn validate_booking(
    request: &PlacementRequest,
    ctx: &BookingContext,
    exclude_id: Option<&str>,
) -> Result<Decision, AppError> {
    let candidate = Interval::from_start(request.start_min, request.duration_min)?;

    if let Some(rejection) = schedule_rejection(request.date, candidate, &ctx.day)? {
        return Ok(Decision::Rejected(rejection));
    }

    let widened = candidate.widened(ctx.event_type.buffer_before, ctx.event_type.buffer_after);
    let conflicts = find_conflicts(widened, ctx.day.appointments, exclude_id)?;
    if !conflicts.is_empty() {
        return Ok(Decision::Rejected(Rejection::Conflict));
    }

    let start_at = request.date.and_time(NaiveTime::MIN)
        + Duration::minutes(request.start_min as i64);

    if ctx.event_type.min_notice_hours > 0
        && start_at < ctx.now + Duration::hours(ctx.event_type.min_notice_hours as i64)
    {
        return Ok(Decision::Rejected(Rejection::NoticeTooShort {
            hours: ctx.event_type.min_notice_hours,
        }));
    }

    if ctx.event_type.max_days_ahead > 0
        && request.date > ctx.now.date() + Duration::days(ctx.event_type.max_days_ahead as i64)
    {
        return Ok(Decision::Rejected(Rejection::HorizonExceeded {
            days: ctx.event_type.max_days_ahead,
        }));
    }

    if ctx.event_type.max_per_day > 0 {
        let day_count = booked_count(ctx.day.appointments, &ctx.event_type.id, exclude_id);
        if day_count >= ctx.event_type.max_per_day {
            return Ok(Decision::Rejected(Rejection::DailyCapReached {
                cap: ctx.event_type.max_per_day,
            }));
        }
    }

    if ctx.event_type.max_per_week > 0 {
        let week_count = booked_count(ctx.week_appointments, &ctx.event_type.id, exclude_id);
        if week_count >= ctx.event_type.max_per_week {
            return Ok(Decision::Rejected(Rejection::WeeklyCapReached {
                cap: ctx.event_type.max_per_week,
            }));
        }
    }

    Ok(Decision::Allowed)
}

fn schedule_rejection(
    date: NaiveDate,
    candidate: Interval,
    day: &DaySchedule,
) -> Result<Option<Rejection>, AppError> {
    match resolve_day(date, day.rules, day.holidays) {
        DayVerdict::Holiday => return Ok(Some(Rejection::Holiday)),
        DayVerdict::WeekdayClosed => return Ok(Some(Rejection::WeekdayClosed)),
        DayVerdict::Open => {}
    }

    // Window enforcement is minute precise: the whole candidate span must
    // sit inside the rule's window, not just its starting hour.
    if let Some(rule) = rule_for_day(day.rules, date) {
        let open = parse_minutes(&rule.start_time)?;
        let close = parse_minutes(&rule.end_time)?;
        if candidate.start_min < open || candidate.end_min > close {
            return Ok(Some(Rejection::OutsideHours {
                open: rule.start_time.clone(),
                close: rule.end_time.clone(),
            }));
        }
    }

    if day.settings.lunch_break_enabled {
        let lunch = Interval::new(
            parse_minutes(&day.settings.lunch_break_start)?,
            parse_minutes(&day.settings.lunch_break_end)?,
        );
        if candidate.overlaps(&lunch) {
            return Ok(Some(Rejection::LunchBreak));
        }
    }

    Ok(None)
}

fn booked_count(appointments: &[Appointment], event_type_id: &str, exclude_id: Option<&str>) -> i32 {
    appointments
        .iter()
        .filter(|a| {
            !a.is_cancelled()
                && a.event_type_id.as_deref() == Some(event_type_id)
                && !exclude_id.is_some_and(|id| id == a.id)
        })
        .count() as i32
}
