use axum::{extract::State, response::IntoResponse, Json};
use crate::api::dtos::requests::UpsertAvailabilityRequest;
use crate::domain::models::availability::AvailabilityRule;
use crate::domain::services::conflict::parse_minutes;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn get_availability(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let rules = state.availability_repo.list().await?;
    Ok(Json(rules))
}

pub async fn upsert_availability(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpsertAvailabilityRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut rules = Vec::with_capacity(payload.rules.len());
    for input in payload.rules {
        if !(0..=6).contains(&input.day_of_week) {
            return Err(AppError::Validation("day_of_week must be between 0 and 6".into()));
        }
        let start = parse_minutes(&input.start_time)?;
        let end = parse_minutes(&input.end_time)?;
        if end <= start {
            return Err(AppError::Validation("end_time must be after start_time".into()));
        }
        rules.push(AvailabilityRule::new(
            input.day_of_week,
            input.is_active.unwrap_or(true),
            input.start_time,
            input.end_time,
        ));
    }

    let stored = state.availability_repo.upsert_all(&rules).await?;
    info!("Availability rules updated: {} weekdays", stored.len());
    Ok(Json(stored))
}
