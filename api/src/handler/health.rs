use std::time::Instant;

use axum::Json;
use chrono::Utc;
use once_cell::sync::Lazy;
use serde::Serialize;

static STARTED_AT: Lazy<Instant> = Lazy::new(Instant::now);

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub uptime_secs: u64,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339(),
        uptime_secs: STARTED_AT.elapsed().as_secs(),
    })
}

/// Pins the start instant; called once from bootstrap so uptime does not
/// begin at the first health request.
pub fn mark_started() {
    Lazy::force(&STARTED_AT);
}
