//! Liveness probe.

use api_types::Health;
use axum::Json;
use chrono::Utc;

pub async fn get() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    })
}
