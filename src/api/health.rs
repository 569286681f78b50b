use super::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    courses: usize,
    students: usize,
    grades: usize,
    uptime_seconds: u64,
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let counts = state.store.counts().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        courses: counts.courses,
        students: counts.students,
        grades: counts.grades,
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
