//! Common test utilities for integration tests
//!
//! Every `TestApp` owns a fresh in-memory session.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use nutrition_coach_backend::{config::AppConfig, routes, state::AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(config);
        let app = routes::create_router(state);
        Self { app }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("DELETE")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        self.with_json("POST", path, body).await
    }

    /// Make a PUT request with JSON body
    pub async fn put(&self, path: &str, body: &str) -> (StatusCode, String) {
        self.with_json("PUT", path, body).await
    }

    /// Make a POST request with a CSV body
    pub async fn post_csv(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "text/csv")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn with_json(&self, method: &str, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Store the reference profile: male, 30 y, 170 cm, 65 kg, moderately active
    pub async fn set_reference_profile(&self) -> Value {
        let (status, body) = self.put("/api/v1/profile", &reference_profile().to_string()).await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        serde_json::from_str(&body).unwrap()
    }

    /// Log a catalog food on a date
    pub async fn log_food(&self, name: &str, multiplier: f64, date: &str) -> Value {
        let body = json!({
            "food_name": name,
            "serving_multiplier": multiplier,
            "date": date,
        });
        let (status, body) = self.post("/api/v1/nutrition/log", &body.to_string()).await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        serde_json::from_str(&body).unwrap()
    }
}

pub fn reference_profile() -> Value {
    json!({
        "sex": "male",
        "age_years": 30,
        "height_cm": 170.0,
        "weight_kg": 65.0,
        "activity_level": "moderately_active",
        "condition": "none"
    })
}

pub fn approx(value: &Value, expected: f64) -> bool {
    value
        .as_f64()
        .map(|v| (v - expected).abs() < 0.01)
        .unwrap_or(false)
}
