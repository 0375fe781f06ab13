use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{appointment, availability, calendar, event_type, health, holiday, settings};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Weekday availability
        .route("/api/v1/availability", get(availability::get_availability).put(availability::upsert_availability))

        // Holidays
        .route("/api/v1/holidays", get(holiday::list_holidays).post(holiday::create_holiday).delete(holiday::clear_holidays))
        .route("/api/v1/holidays/import", post(holiday::import_holidays))
        .route("/api/v1/holidays/preset", post(holiday::preset_holidays))
        .route("/api/v1/holidays/{date}", delete(holiday::delete_holiday))

        // Booking settings
        .route("/api/v1/settings/booking", get(settings::get_booking_settings).put(settings::update_booking_settings))

        // Event types
        .route("/api/v1/event-types", get(event_type::list_event_types).post(event_type::create_event_type))
        .route("/api/v1/event-types/{id}", get(event_type::get_event_type).put(event_type::update_event_type).delete(event_type::delete_event_type))
        .route("/api/v1/event-types/{id}/duplicate", post(event_type::duplicate_event_type))

        // Appointments
        .route("/api/v1/appointments", get(appointment::list_appointments).post(appointment::create_appointment))
        .route("/api/v1/appointments/validate", post(appointment::validate_appointment))
        .route("/api/v1/appointments/{id}", get(appointment::get_appointment).put(appointment::update_appointment).delete(appointment::delete_appointment))

        // Calendar
        .route("/api/v1/calendar/week", get(calendar::get_week))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
