use crate::startup::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub is_success: bool,
    pub official_email: String,
}

/// Liveness probe; always succeeds.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        is_success: true,
        official_email: state.official_email.clone(),
    })
}
