use axum::{extract::{Path, State}, response::IntoResponse, Json};
use chrono::NaiveDate;
use crate::api::dtos::requests::{CreateHolidayRequest, ImportHolidaysRequest, PresetHolidaysRequest};
use crate::api::dtos::responses::ImportHolidaysResponse;
use crate::domain::models::holiday::{Holiday, HolidayCandidate};
use crate::domain::services::{defaults::regional_preset, holiday_import::plan_import};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn list_holidays(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let holidays = state.holiday_repo.list().await?;
    Ok(Json(holidays))
}

pub async fn create_holiday(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateHolidayRequest>,
) -> Result<impl IntoResponse, AppError> {
    let date = parse_date(&payload.date)?;
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".into()));
    }

    let holiday = Holiday::new(date, payload.name, payload.reason);
    let created = state.holiday_repo.insert(&holiday).await?;
    info!("Holiday created: {} ({})", created.date, created.name);
    Ok(Json(created))
}

pub async fn delete_holiday(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let date = parse_date(&date)?;
    state.holiday_repo.delete(date).await?;
    info!("Holiday deleted: {}", date);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn clear_holidays(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let removed = state.holiday_repo.clear().await?;
    info!("Holiday set cleared: {} rows removed", removed);
    Ok(Json(serde_json::json!({"removed": removed})))
}

pub async fn import_holidays(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ImportHolidaysRequest>,
) -> Result<impl IntoResponse, AppError> {
    let country = payload.country.to_uppercase();
    if country.len() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::Validation("country must be a two-letter code".into()));
    }
    validate_year(payload.year)?;

    let candidates = state.holiday_feed.fetch(&country, payload.year).await?;
    let outcome = apply_import(&state, candidates).await?;
    info!(
        "Imported {} holidays ({} skipped) from feed for {}/{}",
        outcome.added.len(),
        outcome.skipped.len(),
        country,
        payload.year
    );
    Ok(Json(outcome))
}

pub async fn preset_holidays(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PresetHolidaysRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_year(payload.year)?;
    let candidates = regional_preset(&payload.region, payload.year)
        .ok_or_else(|| AppError::Validation(format!("Unknown region '{}'", payload.region)))?;

    let outcome = apply_import(&state, candidates).await?;
    info!(
        "Imported {} preset holidays ({} skipped) for region {}",
        outcome.added.len(),
        outcome.skipped.len(),
        payload.region
    );
    Ok(Json(outcome))
}

async fn apply_import(
    state: &AppState,
    candidates: Vec<HolidayCandidate>,
) -> Result<ImportHolidaysResponse, AppError> {
    let existing = state.holiday_repo.list().await?;
    let outcome = plan_import(&existing, candidates);
    if !outcome.added.is_empty() {
        state.holiday_repo.insert_many(&outcome.added).await?;
    }
    Ok(ImportHolidaysResponse {
        added: outcome.added,
        skipped: outcome.skipped,
    })
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))
}

fn validate_year(year: i32) -> Result<(), AppError> {
    if !(2000..=2100).contains(&year) {
        return Err(AppError::Validation("year must be between 2000 and 2100".into()));
    }
    Ok(())
}
