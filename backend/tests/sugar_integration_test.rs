//! Integration tests for the sugar limit endpoint

mod common;

use axum::http::StatusCode;
use common::approx;
use rstest::rstest;
use serde_json::{json, Value};

#[rstest]
#[case(json!({"age_years": 40, "sex": "male"}), 36.0)]
#[case(json!({"age_years": 40, "sex": "female"}), 25.0)]
#[case(json!({"age_years": 15, "sex": "male"}), 20.0)]
#[case(json!({"age_years": 15, "sex": "female", "diabetic": true}), 15.0)]
#[tokio::test]
async fn test_limit_by_profile(#[case] profile: Value, #[case] limit: f64) {
    let app = common::TestApp::new();
    let mut body = profile;
    body["total_sugar_g"] = json!(10.0);

    let (status, response) = app.post("/api/v1/sugar/check", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK, "{}", response);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert!(approx(&response["limit_g"], limit));
    assert_eq!(response["within_limit"], true);
}

#[tokio::test]
async fn test_excess_reported() {
    let app = common::TestApp::new();
    let body = json!({"age_years": 40, "sex": "female", "total_sugar_g": 40.0});

    let (status, response) = app.post("/api/v1/sugar/check", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["within_limit"], false);
    assert!(approx(&response["excess_g"], 15.0));
    assert!(approx(&response["progress"], 1.0));
}

#[tokio::test]
async fn test_negative_sugar_rejected() {
    let app = common::TestApp::new();
    let body = json!({"age_years": 40, "sex": "male", "total_sugar_g": -5.0});

    let (status, _) = app.post("/api/v1/sugar/check", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sugar_log_totals_and_checks_against_profile() {
    let app = common::TestApp::new();
    let cola = json!({"food": "Cola", "quantity": 1, "sugar_per_unit_g": 27.0, "date": "2024-06-01"});
    let cookie = json!({"food": "Cookie", "quantity": 3, "sugar_per_unit_g": 4.5, "date": "2024-06-01"});
    let juice = json!({"food": "Juice", "sugar_per_unit_g": 20.0, "date": "2024-06-02"});

    let (status, body) = app.post("/api/v1/sugar/log", &cookie.to_string()).await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    let record: Value = serde_json::from_str(&body).unwrap();
    assert!(approx(&record["total_g"], 13.5));
    app.post("/api/v1/sugar/log", &cola.to_string()).await;
    app.post("/api/v1/sugar/log", &juice.to_string()).await;

    let (_, body) = app.get("/api/v1/sugar/log?date=2024-06-01").await;
    let day: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(day["records"].as_array().unwrap().len(), 2);
    assert!(approx(&day["total_g"], 40.5));
    assert!(day["check"].is_null());

    app.set_reference_profile().await;
    let (_, body) = app.get("/api/v1/sugar/log?date=2024-06-01").await;
    let day: Value = serde_json::from_str(&body).unwrap();
    assert!(approx(&day["check"]["limit_g"], 36.0));
    assert_eq!(day["check"]["within_limit"], false);
    assert!(approx(&day["check"]["excess_g"], 4.5));
}

#[tokio::test]
async fn test_zero_quantity_rejected() {
    let app = common::TestApp::new();
    let body = json!({"food": "Cola", "quantity": 0, "sugar_per_unit_g": 27.0});

    let (status, _) = app.post("/api/v1/sugar/log", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
