mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn seed_office_hours(app: &TestApp) {
    // Monday through Friday, 09:00-17:00
    let rules: Vec<Value> = (1..=5)
        .map(|day| json!({"day_of_week": day, "start_time": "09:00", "end_time": "17:00"}))
        .collect();
    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri("/api/v1/availability")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"rules": rules}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

async fn validate(app: &TestApp, payload: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/appointments/validate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

#[tokio::test]
async fn test_validate_rejects_span_past_closing() {
    let app = TestApp::new().await;
    seed_office_hours(&app).await;

    // Monday 16:30 + 60min would run past 17:00
    let res = validate(&app, json!({
        "date": "2026-03-09", "start_time": "16:30", "duration_min": 60
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["ok"], json!(false));
    assert_eq!(body["reason"], json!("outside available hours (09:00–17:00)"));

    // 16:00 + 60min ends exactly at close
    let res = validate(&app, json!({
        "date": "2026-03-09", "start_time": "16:00", "duration_min": 60
    })).await;
    let body = parse_body(res).await;
    assert_eq!(body["ok"], json!(true));
    assert!(body["reason"].is_null(), "allowed responses carry no reason");
}

#[tokio::test]
async fn test_validate_rejects_start_before_opening() {
    let app = TestApp::new().await;
    seed_office_hours(&app).await;

    let res = validate(&app, json!({
        "date": "2026-03-09", "start_time": "08:30", "duration_min": 30
    })).await;
    let body = parse_body(res).await;
    assert_eq!(body["ok"], json!(false));
    assert_eq!(body["reason"], json!("outside available hours (09:00–17:00)"));
}

#[tokio::test]
async fn test_validate_lunch_break() {
    let app = TestApp::new().await;
    seed_office_hours(&app).await;

    app.router.clone().oneshot(
        Request::builder().method("PUT").uri("/api/v1/settings/booking")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"lunch_break_enabled": true}).to_string())).unwrap()
    ).await.unwrap();

    let res = validate(&app, json!({
        "date": "2026-03-09", "start_time": "12:15", "duration_min": 30
    })).await;
    let body = parse_body(res).await;
    assert_eq!(body["reason"], json!("blocked by lunch break"));

    // Ending exactly at 12:00 touches but does not overlap
    let res = validate(&app, json!({
        "date": "2026-03-09", "start_time": "11:00", "duration_min": 60
    })).await;
    let body = parse_body(res).await;
    assert_eq!(body["ok"], json!(true));

    // Switching lunch off reopens midday
    app.router.clone().oneshot(
        Request::builder().method("PUT").uri("/api/v1/settings/booking")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"lunch_break_enabled": false}).to_string())).unwrap()
    ).await.unwrap();
    let res = validate(&app, json!({
        "date": "2026-03-09", "start_time": "12:15", "duration_min": 30
    })).await;
    let body = parse_body(res).await;
    assert_eq!(body["ok"], json!(true));
}

#[tokio::test]
async fn test_validate_conflict_and_self_exclusion() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/appointments")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "date": "2026-03-10",
                "start_time": "09:00",
                "duration_min": 30,
                "client_name": "First"
            }).to_string())).unwrap()
    ).await.unwrap();
    let existing = parse_body(res).await;
    let existing_id = existing["id"].as_str().unwrap();

    let res = validate(&app, json!({
        "date": "2026-03-10", "start_time": "09:15", "duration_min": 30
    })).await;
    let body = parse_body(res).await;
    assert_eq!(body["ok"], json!(false));
    assert_eq!(body["reason"], json!("conflicts with another appointment"));

    // The same span is fine when the blocker is the one being moved
    let res = validate(&app, json!({
        "date": "2026-03-10", "start_time": "09:15", "duration_min": 30,
        "exclude_id": existing_id
    })).await;
    let body = parse_body(res).await;
    assert_eq!(body["ok"], json!(true));

    // Back-to-back with the existing appointment is not a conflict
    let res = validate(&app, json!({
        "date": "2026-03-10", "start_time": "09:30", "duration_min": 30
    })).await;
    let body = parse_body(res).await;
    assert_eq!(body["ok"], json!(true));
}

#[tokio::test]
async fn test_validate_holiday_wins_over_everything() {
    let app = TestApp::new().await;
    seed_office_hours(&app).await;

    app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/holidays")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"date": "2026-03-09", "name": "Closed"}).to_string())).unwrap()
    ).await.unwrap();

    // 18:00 is also outside the window; the holiday reason must come first
    let res = validate(&app, json!({
        "date": "2026-03-09", "start_time": "18:00", "duration_min": 30
    })).await;
    let body = parse_body(res).await;
    assert_eq!(body["reason"], json!("day is a holiday"));
}

#[tokio::test]
async fn test_validate_closed_weekday() {
    let app = TestApp::new().await;

    app.router.clone().oneshot(
        Request::builder().method("PUT").uri("/api/v1/availability")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"rules": [
                {"day_of_week": 3, "start_time": "09:00", "end_time": "17:00", "is_active": false}
            ]}).to_string())).unwrap()
    ).await.unwrap();

    // 2026-03-11 is a Wednesday
    let res = validate(&app, json!({
        "date": "2026-03-11", "start_time": "10:00", "duration_min": 30
    })).await;
    let body = parse_body(res).await;
    assert_eq!(body["reason"], json!("day not available for bookings"));
}

#[tokio::test]
async fn test_validate_rejects_unusable_spans() {
    let app = TestApp::new().await;

    let res = validate(&app, json!({
        "date": "2026-03-09", "start_time": "10:00", "duration_min": 0
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["error"], json!("duration must be positive"));

    let res = validate(&app, json!({
        "date": "2026-03-09", "start_time": "23:30", "duration_min": 60
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["error"], json!("appointment must end within the same day"));

    let res = validate(&app, json!({
        "date": "not-a-date", "start_time": "10:00", "duration_min": 30
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["error"], json!("Invalid date format"));
}

#[tokio::test]
async fn test_validate_days_without_rules_are_open() {
    let app = TestApp::new().await;

    // Fresh store has no weekday rules at all
    let res = validate(&app, json!({
        "date": "2026-03-08", "start_time": "06:00", "duration_min": 30
    })).await;
    let body = parse_body(res).await;
    assert_eq!(body["ok"], json!(true));
}
