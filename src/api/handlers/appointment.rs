use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use chrono::{Duration, Local, NaiveDate};
use crate::api::dtos::requests::{
    CreateAppointmentRequest, UpdateAppointmentRequest, ValidatePlacementRequest,
};
use crate::api::dtos::responses::PlacementResponse;
use crate::api::handlers::settings::load_booking_settings;
use crate::domain::models::appointment::{
    Appointment, NewAppointmentParams, STATUSES, STATUS_CANCELLED, STATUS_CONFIRMED,
};
use crate::domain::models::availability::AvailabilityRule;
use crate::domain::models::event_type::EventType;
use crate::domain::models::holiday::Holiday;
use crate::domain::models::settings::BookingSettings;
use crate::domain::services::availability::weekday_index;
use crate::domain::services::conflict::{format_minutes, parse_minutes, Interval};
use crate::domain::services::placement::{
    validate_booking, validate_placement, BookingContext, DaySchedule, Decision, PlacementRequest,
};
use crate::error::AppError;
use crate::state::AppState;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

struct DayContext {
    rules: Vec<AvailabilityRule>,
    holidays: Vec<Holiday>,
    settings: BookingSettings,
    appointments: Vec<Appointment>,
}

impl DayContext {
    fn schedule(&self) -> DaySchedule<'_> {
        DaySchedule {
            rules: &self.rules,
            holidays: &self.holidays,
            settings: &self.settings,
            appointments: &self.appointments,
        }
    }
}

async fn load_day_context(state: &AppState, date: NaiveDate) -> Result<DayContext, AppError> {
    Ok(DayContext {
        rules: state.availability_repo.list().await?,
        holidays: state.holiday_repo.list().await?,
        settings: load_booking_settings(state).await?,
        appointments: state.appointment_repo.list_by_date(date).await?,
    })
}

/// Runs the placement rules against freshly loaded data. With an event type
/// the full booking constraints apply; without one only the day, window,
/// lunch and conflict checks run.
async fn evaluate(
    state: &AppState,
    request: &PlacementRequest,
    event_type: Option<&EventType>,
    exclude_id: Option<&str>,
) -> Result<Decision, AppError> {
    let ctx = load_day_context(state, request.date).await?;
    match event_type {
        Some(event_type) => {
            let week_start = request.date - Duration::days(weekday_index(request.date) as i64);
            let week_appointments = state
                .appointment_repo
                .list_by_range(week_start, week_start + Duration::days(6))
                .await?;
            let booking_ctx = BookingContext {
                day: ctx.schedule(),
                event_type,
                week_appointments: &week_appointments,
                now: Local::now().naive_local(),
            };
            validate_booking(request, &booking_ctx, exclude_id)
        }
        None => validate_placement(request, &ctx.schedule(), exclude_id),
    }
}

async fn find_event_type(
    state: &AppState,
    id: Option<&String>,
) -> Result<Option<EventType>, AppError> {
    match id {
        Some(id) => Ok(Some(
            state
                .event_type_repo
                .find_by_id(id)
                .await?
                .ok_or(AppError::NotFound("Event type not found".into()))?,
        )),
        None => Ok(None),
    }
}

pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let date = parse_date(&payload.date)?;
    let start_min = parse_minutes(&payload.start_time)?;

    let status = payload.status.unwrap_or_else(|| STATUS_CONFIRMED.to_string());
    if !STATUSES.contains(&status.as_str()) {
        return Err(AppError::Validation("Invalid status".into()));
    }
    if payload.client_name.trim().is_empty() {
        return Err(AppError::Validation("client_name must not be empty".into()));
    }

    let event_type = find_event_type(&state, payload.event_type_id.as_ref()).await?;
    let duration_min = payload
        .duration_min
        .or(event_type.as_ref().map(|et| et.duration_min))
        .ok_or(AppError::Validation("duration_min required without an event type".into()))?;

    let interval = Interval::from_start(start_min, duration_min)?;
    let request = PlacementRequest { date, start_min, duration_min };

    if status != STATUS_CANCELLED {
        let decision = evaluate(&state, &request, event_type.as_ref(), None).await?;
        if let Decision::Rejected(rejection) = decision {
            return Err(AppError::Conflict(rejection.message()));
        }
    }

    let appointment = Appointment::new(NewAppointmentParams {
        date,
        start_time: payload.start_time,
        end_time: Some(format_minutes(interval.end_min)),
        duration_min,
        event_type_id: payload.event_type_id,
        client_name: payload.client_name,
        status,
    });

    let created = state.appointment_repo.insert_checked(&appointment).await?;
    info!(
        "Appointment created: {} on {} at {}",
        created.id, created.date, created.start_time
    );
    Ok(Json(created))
}

pub async fn validate_appointment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ValidatePlacementRequest>,
) -> Result<impl IntoResponse, AppError> {
    let date = parse_date(&payload.date)?;
    let start_min = parse_minutes(&payload.start_time)?;
    Interval::from_start(start_min, payload.duration_min)?;

    let event_type = find_event_type(&state, payload.event_type_id.as_ref()).await?;
    let request = PlacementRequest {
        date,
        start_min,
        duration_min: payload.duration_min,
    };

    let decision = evaluate(
        &state,
        &request,
        event_type.as_ref(),
        payload.exclude_id.as_deref(),
    )
    .await?;

    Ok(Json(PlacementResponse {
        ok: decision.is_allowed(),
        reason: decision.reason(),
    }))
}

pub async fn get_appointment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let appointment = state
        .appointment_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Appointment not found".into()))?;
    Ok(Json(appointment))
}

pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(date_str) = params.get("date") {
        let date = parse_date(date_str)?;
        let appointments = state.appointment_repo.list_by_date(date).await?;
        return Ok(Json(appointments));
    }

    let start_str = params
        .get("start")
        .ok_or(AppError::Validation("date or start and end required".into()))?;
    let end_str = params
        .get("end")
        .ok_or(AppError::Validation("date or start and end required".into()))?;
    let start = parse_date(start_str)?;
    let end = parse_date(end_str)?;
    if end < start {
        return Err(AppError::Validation("end must not be before start".into()));
    }

    let appointments = state.appointment_repo.list_by_range(start, end).await?;
    Ok(Json(appointments))
}

pub async fn update_appointment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateAppointmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut appointment = state
        .appointment_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Appointment not found".into()))?;

    if let Some(val) = payload.date { appointment.date = parse_date(&val)?; }
    if let Some(val) = payload.start_time {
        parse_minutes(&val)?;
        appointment.start_time = val;
    }
    if let Some(val) = payload.duration_min { appointment.duration_min = val; }
    if let Some(val) = payload.client_name { appointment.client_name = val; }
    if let Some(val) = payload.status {
        if !STATUSES.contains(&val.as_str()) {
            return Err(AppError::Validation("Invalid status".into()));
        }
        appointment.status = val;
    }

    // End time always tracks start and duration, never client input.
    let start_min = parse_minutes(&appointment.start_time)?;
    let interval = Interval::from_start(start_min, appointment.duration_min)?;
    appointment.end_time = Some(format_minutes(interval.end_min));

    if !appointment.is_cancelled() {
        let request = PlacementRequest {
            date: appointment.date,
            start_min,
            duration_min: appointment.duration_min,
        };
        let decision = evaluate(&state, &request, None, Some(&appointment.id)).await?;
        if let Decision::Rejected(rejection) = decision {
            return Err(AppError::Conflict(rejection.message()));
        }
    }

    let updated = state.appointment_repo.update_checked(&appointment).await?;
    info!(
        "Appointment updated: {} -> {} {}",
        updated.id, updated.date, updated.start_time
    );
    Ok(Json(updated))
}

pub async fn delete_appointment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.appointment_repo.delete(&id).await?;
    info!("Appointment deleted: {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))
}
