use axum::{extract::State, response::IntoResponse, Json};
use crate::api::dtos::requests::BookingSettingsPatch;
use crate::domain::models::settings::{BookingSettings, SETTINGS_CATEGORY_BOOKING};
use crate::domain::services::conflict::parse_minutes;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn load_booking_settings(state: &AppState) -> Result<BookingSettings, AppError> {
    let values = state.settings_repo.get_category(SETTINGS_CATEGORY_BOOKING).await?;
    Ok(BookingSettings::from_values(&values))
}

pub async fn get_booking_settings(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let settings = load_booking_settings(&state).await?;
    Ok(Json(settings))
}

pub async fn update_booking_settings(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BookingSettingsPatch>,
) -> Result<impl IntoResponse, AppError> {
    let mut settings = load_booking_settings(&state).await?;

    if let Some(val) = payload.lunch_break_enabled { settings.lunch_break_enabled = val; }
    if let Some(val) = payload.lunch_break_start { settings.lunch_break_start = val; }
    if let Some(val) = payload.lunch_break_end { settings.lunch_break_end = val; }
    if let Some(val) = payload.week_view_start { settings.week_view_start = val; }
    if let Some(val) = payload.week_view_end { settings.week_view_end = val; }
    if let Some(val) = payload.buffer_before { settings.buffer_before = val; }
    if let Some(val) = payload.buffer_after { settings.buffer_after = val; }
    if let Some(val) = payload.max_per_day { settings.max_per_day = val; }
    if let Some(val) = payload.max_per_week { settings.max_per_week = val; }
    if let Some(val) = payload.min_notice_hours { settings.min_notice_hours = val; }
    if let Some(val) = payload.max_days_ahead { settings.max_days_ahead = val; }

    let lunch_start = parse_minutes(&settings.lunch_break_start)?;
    let lunch_end = parse_minutes(&settings.lunch_break_end)?;
    if lunch_end <= lunch_start {
        return Err(AppError::Validation("lunch_break_end must be after lunch_break_start".into()));
    }
    let view_start = parse_minutes(&settings.week_view_start)?;
    let view_end = parse_minutes(&settings.week_view_end)?;
    if view_end <= view_start {
        return Err(AppError::Validation("week_view_end must be after week_view_start".into()));
    }
    for (field, value) in [
        ("buffer_before", settings.buffer_before),
        ("buffer_after", settings.buffer_after),
        ("max_per_day", settings.max_per_day),
        ("max_per_week", settings.max_per_week),
        ("min_notice_hours", settings.min_notice_hours),
        ("max_days_ahead", settings.max_days_ahead),
    ] {
        if value < 0 {
            return Err(AppError::Validation(format!("{} must not be negative", field)));
        }
    }

    state
        .settings_repo
        .set_many(SETTINGS_CATEGORY_BOOKING, &settings.to_pairs())
        .await?;
    info!("Booking settings updated");
    Ok(Json(settings))
}
