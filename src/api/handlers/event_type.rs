use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::{CreateEventTypeRequest, UpdateEventTypeRequest};
use crate::domain::models::event_type::{EventType, NewEventTypeParams, LOCATION_TYPES};
use crate::error::AppError;
use crate::state::AppState;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

fn validate_location_type(value: &str) -> Result<(), AppError> {
    if !LOCATION_TYPES.contains(&value) {
        return Err(AppError::Validation("Invalid location_type".into()));
    }
    Ok(())
}

fn validate_constraints(event_type: &EventType) -> Result<(), AppError> {
    if event_type.duration_min <= 0 {
        return Err(AppError::Validation("duration_min must be positive".into()));
    }
    for (field, value) in [
        ("buffer_before", event_type.buffer_before),
        ("buffer_after", event_type.buffer_after),
        ("max_per_day", event_type.max_per_day),
        ("max_per_week", event_type.max_per_week),
        ("min_notice_hours", event_type.min_notice_hours),
        ("max_days_ahead", event_type.max_days_ahead),
    ] {
        if value < 0 {
            return Err(AppError::Validation(format!("{} must not be negative", field)));
        }
    }
    Ok(())
}

pub async fn create_event_type(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateEventTypeRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("Creating event type: {}", payload.slug);
    validate_location_type(&payload.location_type)?;
    if payload.slug.trim().is_empty() {
        return Err(AppError::Validation("slug must not be empty".into()));
    }

    let event_type = EventType::new(NewEventTypeParams {
        name: payload.name,
        slug: payload.slug,
        description: payload.description.unwrap_or_default(),
        duration_min: payload.duration_min,
        location_type: payload.location_type,
        color: payload.color.unwrap_or_else(|| "#2563eb".to_string()),
        buffer_before: payload.buffer_before.unwrap_or(0),
        buffer_after: payload.buffer_after.unwrap_or(0),
        max_per_day: payload.max_per_day.unwrap_or(0),
        max_per_week: payload.max_per_week.unwrap_or(0),
        min_notice_hours: payload.min_notice_hours.unwrap_or(0),
        max_days_ahead: payload.max_days_ahead.unwrap_or(0),
        is_active: payload.is_active.unwrap_or(true),
        is_public: payload.is_public.unwrap_or(true),
    });
    validate_constraints(&event_type)?;

    let created = state.event_type_repo.create(&event_type).await?;
    Ok(Json(created))
}

pub async fn list_event_types(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let include_inactive = params
        .get("include_inactive")
        .is_some_and(|v| v == "true");
    let event_types = state.event_type_repo.list(include_inactive).await?;
    Ok(Json(event_types))
}

pub async fn get_event_type(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event_type = state
        .event_type_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Event type not found".into()))?;
    Ok(Json(event_type))
}

pub async fn update_event_type(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateEventTypeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut event_type = state
        .event_type_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Event type not found".into()))?;

    if let Some(val) = payload.name { event_type.name = val; }
    if let Some(val) = payload.slug { event_type.slug = val; }
    if let Some(val) = payload.description { event_type.description = val; }
    if let Some(val) = payload.duration_min { event_type.duration_min = val; }
    if let Some(val) = payload.location_type {
        validate_location_type(&val)?;
        event_type.location_type = val;
    }
    if let Some(val) = payload.color { event_type.color = val; }
    if let Some(val) = payload.buffer_before { event_type.buffer_before = val; }
    if let Some(val) = payload.buffer_after { event_type.buffer_after = val; }
    if let Some(val) = payload.max_per_day { event_type.max_per_day = val; }
    if let Some(val) = payload.max_per_week { event_type.max_per_week = val; }
    if let Some(val) = payload.min_notice_hours { event_type.min_notice_hours = val; }
    if let Some(val) = payload.max_days_ahead { event_type.max_days_ahead = val; }
    if let Some(val) = payload.is_active { event_type.is_active = val; }
    if let Some(val) = payload.is_public { event_type.is_public = val; }
    validate_constraints(&event_type)?;

    let updated = state.event_type_repo.update(&event_type).await?;
    info!("Event type updated: {}", updated.slug);
    Ok(Json(updated))
}

pub async fn delete_event_type(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.event_type_repo.delete(&id).await?;
    info!("Event type deleted: {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn duplicate_event_type(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let source = state
        .event_type_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Event type not found".into()))?;

    let copy = state.event_type_repo.create(&source.duplicate()).await?;
    info!("Event type duplicated: {} -> {}", source.slug, copy.slug);
    Ok(Json(copy))
}
