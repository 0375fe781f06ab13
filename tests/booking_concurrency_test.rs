mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::NaiveDate;
use common::TestApp;
use scheduling_backend::{
    domain::models::appointment::{Appointment, NewAppointmentParams},
    domain::ports::AppointmentRepository,
    error::AppError,
};
use serde_json::{json, Value};
use tokio::task::JoinSet;
use tower::ServiceExt;

fn appointment(date: &str, start: &str, duration: i32) -> Appointment {
    Appointment::new(NewAppointmentParams {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        start_time: start.to_string(),
        end_time: None,
        duration_min: duration,
        event_type_id: None,
        client_name: "Guard test".to_string(),
        status: "CONFIRMED".to_string(),
    })
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_bookings_for_one_slot() {
    let app = TestApp::new().await;

    let contenders = 10;
    let mut set = JoinSet::new();

    for i in 0..contenders {
        let router = app.router.clone();
        set.spawn(async move {
            let res = router.oneshot(
                Request::builder().method("POST").uri("/api/v1/appointments")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json!({
                        "date": "2026-03-09",
                        "start_time": "10:00",
                        "duration_min": 60,
                        "client_name": format!("Contender {}", i)
                    }).to_string())).unwrap()
            ).await.unwrap();
            res.status()
        });
    }

    let mut winners = 0;
    while let Some(res) = set.join_next().await {
        if res.unwrap() == StatusCode::OK {
            winners += 1;
        }
    }

    assert_eq!(winners, 1, "exactly one contender may take the slot");

    // The losers must not have slipped a second row in
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/appointments?date=2026-03-09")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1, "double booking detected");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_bookings_never_store_overlaps() {
    let app = TestApp::new().await;

    // Two overlapping spans racing each other, several times over
    let mut set = JoinSet::new();
    for i in 0..8 {
        let router = app.router.clone();
        let start = if i % 2 == 0 { "09:00" } else { "09:30" };
        set.spawn(async move {
            let res = router.oneshot(
                Request::builder().method("POST").uri("/api/v1/appointments")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json!({
                        "date": "2026-03-10",
                        "start_time": start,
                        "duration_min": 60,
                        "client_name": format!("Racer {}", i)
                    }).to_string())).unwrap()
            ).await.unwrap();
            res.status()
        });
    }
    while set.join_next().await.is_some() {}

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/appointments?date=2026-03-10")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    let stored = body.as_array().unwrap();

    assert_eq!(stored.len(), 1, "overlapping spans must never coexist: {:?}", stored);
}

#[tokio::test]
async fn test_insert_guard_rejects_overlap() {
    let app = TestApp::new().await;
    let repo = &app.state.appointment_repo;

    repo.insert_checked(&appointment("2026-03-09", "10:00", 60))
        .await
        .expect("first insert");

    let err = repo
        .insert_checked(&appointment("2026-03-09", "10:30", 60))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {:?}", err);

    // Cancelled rows skip the guard and may sit on an occupied slot
    let mut ghost = appointment("2026-03-09", "10:00", 60);
    ghost.status = "CANCELLED".to_string();
    repo.insert_checked(&ghost)
        .await
        .expect("cancelled rows are not guarded");
}

#[tokio::test]
async fn test_update_guard_excludes_own_row() {
    let app = TestApp::new().await;
    let repo = &app.state.appointment_repo;

    let first = repo
        .insert_checked(&appointment("2026-03-09", "10:00", 60))
        .await
        .expect("first insert");
    repo.insert_checked(&appointment("2026-03-09", "12:00", 60))
        .await
        .expect("second insert");

    // Sliding into its own previous span is fine
    let mut moved = first.clone();
    moved.start_time = "10:30".to_string();
    moved.end_time = Some("11:30".to_string());
    repo.update_checked(&moved).await.expect("own span is excluded");

    // Sliding onto the neighbour is not
    let mut onto_neighbour = moved.clone();
    onto_neighbour.start_time = "11:30".to_string();
    onto_neighbour.end_time = Some("12:30".to_string());
    let err = repo.update_checked(&onto_neighbour).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {:?}", err);
}
