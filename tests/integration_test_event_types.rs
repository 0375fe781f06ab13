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

async fn create_event_type(app: &TestApp, payload: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/event-types")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

#[tokio::test]
async fn test_create_fills_defaults() {
    let app = TestApp::new().await;

    let res = create_event_type(&app, json!({
        "name": "Intro Call",
        "slug": "intro-call",
        "duration_min": 30,
        "location_type": "VIDEO_A"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;

    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["color"], json!("#2563eb"));
    assert_eq!(body["description"], json!(""));
    assert_eq!(body["buffer_before"], json!(0));
    assert_eq!(body["buffer_after"], json!(0));
    assert_eq!(body["max_per_day"], json!(0));
    assert_eq!(body["min_notice_hours"], json!(0));
    assert_eq!(body["is_active"], json!(true));
    assert_eq!(body["is_public"], json!(true));

    let id = body["id"].as_str().unwrap();
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/event-types/{}", id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["slug"], json!("intro-call"));
}

#[tokio::test]
async fn test_slug_must_be_unique() {
    let app = TestApp::new().await;

    let payload = json!({
        "name": "Intro Call", "slug": "intro-call",
        "duration_min": 30, "location_type": "VIDEO_A"
    });
    let res = create_event_type(&app, payload.clone()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = create_event_type(&app, payload).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = parse_body(res).await;
    assert_eq!(body["error"], json!("Resource already exists (duplicate entry)"));
}

#[tokio::test]
async fn test_create_validation() {
    let app = TestApp::new().await;

    let res = create_event_type(&app, json!({
        "name": "Bad", "slug": "bad",
        "duration_min": 30, "location_type": "CARRIER_PIGEON"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["error"], json!("Invalid location_type"));

    let res = create_event_type(&app, json!({
        "name": "Bad", "slug": "   ",
        "duration_min": 30, "location_type": "PHONE"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["error"], json!("slug must not be empty"));

    let res = create_event_type(&app, json!({
        "name": "Bad", "slug": "bad",
        "duration_min": 0, "location_type": "PHONE"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["error"], json!("duration_min must be positive"));

    let res = create_event_type(&app, json!({
        "name": "Bad", "slug": "bad",
        "duration_min": 30, "location_type": "PHONE",
        "buffer_before": -5
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["error"], json!("buffer_before must not be negative"));
}

#[tokio::test]
async fn test_list_hides_inactive_by_default() {
    let app = TestApp::new().await;

    create_event_type(&app, json!({
        "name": "Active", "slug": "active",
        "duration_min": 30, "location_type": "PHONE"
    })).await;
    create_event_type(&app, json!({
        "name": "Retired", "slug": "retired",
        "duration_min": 30, "location_type": "PHONE",
        "is_active": false
    })).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/event-types")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["slug"], json!("active"));

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/event-types?include_inactive=true")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    // Name ordering puts Active before Retired
    assert_eq!(list[0]["name"], json!("Active"));
}

#[tokio::test]
async fn test_update_event_type() {
    let app = TestApp::new().await;

    let res = create_event_type(&app, json!({
        "name": "Intro Call", "slug": "intro-call",
        "duration_min": 30, "location_type": "VIDEO_A"
    })).await;
    let created = parse_body(res).await;
    let id = created["id"].as_str().unwrap();

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/event-types/{}", id))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "name": "Long Intro Call",
                "duration_min": 45,
                "min_notice_hours": 24
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["name"], json!("Long Intro Call"));
    assert_eq!(body["duration_min"], json!(45));
    assert_eq!(body["min_notice_hours"], json!(24));
    // Untouched fields keep their values
    assert_eq!(body["slug"], json!("intro-call"));
    assert_eq!(body["location_type"], json!("VIDEO_A"));

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/event-types/{}", id))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"location_type": "SMOKE_SIGNAL"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_gets_fresh_slug() {
    let app = TestApp::new().await;

    let res = create_event_type(&app, json!({
        "name": "Workshop", "slug": "workshop",
        "duration_min": 120, "location_type": "IN_PERSON",
        "buffer_after": 30
    })).await;
    let source = parse_body(res).await;
    let id = source["id"].as_str().unwrap();

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/event-types/{}/duplicate", id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let copy = parse_body(res).await;

    assert_ne!(copy["id"], source["id"]);
    assert_eq!(copy["name"], json!("Workshop (Copy)"));
    let copy_slug = copy["slug"].as_str().unwrap();
    assert!(copy_slug.starts_with("workshop-"), "slug was {}", copy_slug);
    assert_ne!(copy_slug, "workshop");
    // Constraint fields carry over
    assert_eq!(copy["duration_min"], json!(120));
    assert_eq!(copy["buffer_after"], json!(30));

    // Duplicating again must not collide with the first copy
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/event-types/{}/duplicate", id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let second = parse_body(res).await;
    assert_ne!(second["slug"], copy["slug"]);
}

#[tokio::test]
async fn test_delete_and_missing() {
    let app = TestApp::new().await;

    let res = create_event_type(&app, json!({
        "name": "Gone Soon", "slug": "gone-soon",
        "duration_min": 30, "location_type": "PHONE"
    })).await;
    let created = parse_body(res).await;
    let id = created["id"].as_str().unwrap();

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/api/v1/event-types/{}", id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["status"], json!("deleted"));

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/event-types/{}", id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = parse_body(res).await;
    assert_eq!(body["error"], json!("Event type not found"));

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/event-types/no-such-id/duplicate")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
