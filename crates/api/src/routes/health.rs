//! Service status endpoints.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HomeResponse {
    pub message: &'static str,
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// GET / — service banner.
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Monastery360 Backend is running!",
        status: "SUCCESS",
    })
}

/// GET /api/health — returns backend health status.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP",
        message: "Backend is healthy!",
    })
}
