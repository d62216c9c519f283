use crate::errors::{ErrorCode, ErrorResponse};
use crate::http::tests::test_server;
use crate::tasks::models::Task;
use crate::tasks::responses::{CheckTaskResponse, TaskResponse};
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_get_task_returns_a_catalog_landmark() {
    let server = test_server();
    let locations = server.get("/locations").await.json::<Vec<Task>>();

    let response = server.get("/get_task").await;

    response.assert_status_ok();
    let task = response.json::<TaskResponse>();
    assert!(locations.iter().any(|location| location.name == task.location_name
        && location.latitude == task.latitude
        && location.longitude == task.longitude));
}

#[tokio::test]
async fn test_locations_dump_the_whole_catalog() {
    let server = test_server();

    let response = server.get("/locations").await;

    response.assert_status_ok();
    let locations = response.json::<Vec<Task>>();
    assert_eq!(locations.len(), 23);
    assert_eq!(
        locations[0],
        Task {
            name: String::from("Eiffel Tower"),
            latitude: 48.8584,
            longitude: 2.2945,
        }
    );
}

#[tokio::test]
async fn test_exact_guess_earns_the_bonus() {
    let server = test_server();

    let response = server
        .post("/check-task")
        .json(&json!({
            "latitude": 48.8584,
            "longitude": 2.2945,
            "task_name": "Eiffel Tower",
        }))
        .await;

    response.assert_status_ok();
    response.assert_json(&CheckTaskResponse {
        success: true,
        message: String::from("Task completed! You were 0.00 km away."),
        distance_km: 0.0,
        bonus_points: 50,
    });
}

#[tokio::test]
async fn test_distant_guess_fails() {
    let server = test_server();

    // The Louvre is about 3 km from the Eiffel Tower, Big Ben about 340 km.
    let response = server
        .post("/check-task")
        .json(&json!({
            "latitude": 51.5007,
            "longitude": -0.1246,
            "task_name": "Eiffel Tower",
        }))
        .await;

    response.assert_status_ok();
    let verdict = response.json::<CheckTaskResponse>();
    assert!(!verdict.success);
    assert_eq!(verdict.bonus_points, 0);
    assert!(verdict.distance_km > 300.0 && verdict.distance_km < 400.0);
    assert!(verdict.message.starts_with("Not close enough."));
}

#[tokio::test]
async fn test_nearby_guess_succeeds_with_bonus() {
    let server = test_server();

    let response = server
        .post("/check-task")
        .json(&json!({
            "latitude": 48.8606,
            "longitude": 2.3376,
            "task_name": "Eiffel Tower",
        }))
        .await;

    let verdict = response.json::<CheckTaskResponse>();
    assert!(verdict.success);
    assert_eq!(verdict.bonus_points, 50);
}

#[tokio::test]
async fn test_unknown_task_is_not_found() {
    let server = test_server();

    let response = server
        .post("/check-task")
        .json(&json!({
            "latitude": 0.0,
            "longitude": 0.0,
            "task_name": "Atlantis",
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&ErrorResponse {
        error: true,
        error_code: ErrorCode::NotFound,
        message: String::from("Task not found"),
    });
}

#[tokio::test]
async fn test_missing_coordinates_are_rejected() {
    let server = test_server();

    let response = server
        .post("/check-task")
        .json(&json!({ "task_name": "Eiffel Tower" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<ErrorResponse>().error_code,
        ErrorCode::Validation
    );
}

#[tokio::test]
async fn test_out_of_range_coordinates_are_rejected() {
    let server = test_server();

    let response = server
        .post("/check-task")
        .json(&json!({
            "latitude": 91.0,
            "longitude": 0.0,
            "task_name": "Eiffel Tower",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&ErrorResponse {
        error: true,
        error_code: ErrorCode::Validation,
        message: String::from("`latitude` must be within [-90, 90], got 91."),
    });
}
