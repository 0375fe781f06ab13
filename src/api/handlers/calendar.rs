use axum::{extract::{Query, State}, response::IntoResponse, Json};
use chrono::{Duration, NaiveDate};
use crate::api::dtos::responses::{CalendarDay, HourCell, WeekViewResponse};
use crate::api::handlers::settings::load_booking_settings;
use crate::domain::services::availability::{is_hour_bookable, resolve_day, rule_for_day, weekday_index};
use crate::domain::services::conflict::parse_minutes;
use crate::error::AppError;
use crate::state::AppState;
use std::collections::HashMap;
use std::sync::Arc;

pub async fn get_week(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let start_str = params
        .get("start")
        .ok_or(AppError::Validation("start required".into()))?;
    let start = NaiveDate::parse_from_str(start_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    // Snap to the Sunday of the requested week.
    let week_start = start - Duration::days(weekday_index(start) as i64);
    let week_end = week_start + Duration::days(6);

    let rules = state.availability_repo.list().await?;
    let holidays = state.holiday_repo.list().await?;
    let settings = load_booking_settings(&state).await?;
    let appointments = state
        .appointment_repo
        .list_by_range(week_start, week_end)
        .await?;

    let first_hour = parse_minutes(&settings.week_view_start)? / 60;
    let last_hour = parse_minutes(&settings.week_view_end)? / 60;

    let mut days = Vec::with_capacity(7);
    for offset in 0..7 {
        let date = week_start + Duration::days(offset);
        let verdict = resolve_day(date, &rules, &holidays);
        let rule = rule_for_day(&rules, date);

        let hours = (first_hour..last_hour)
            .map(|hour| HourCell {
                hour,
                bookable: verdict.bookable() && is_hour_bookable(hour as u32, rule, &settings),
            })
            .collect();

        days.push(CalendarDay {
            date,
            bookable: verdict.bookable(),
            reason: verdict.reason().map(String::from),
            hours,
        });
    }

    Ok(Json(WeekViewResponse {
        start: week_start,
        days,
        appointments,
    }))
}
