use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::{Value, json};

use crate::{
    pkg::{internal::adaptors::jobs::selectors::JobSelector, server::state::AppState},
    prelude::Result,
};

pub async fn index() -> Json<Value> {
    Json(json!({ "message": "Job Finder API is running" }))
}

pub async fn livez() -> Result<()> {
    tracing::debug!("service is live");
    Ok(())
}

pub async fn health(State(state): State<AppState>) -> Response {
    let timestamp = Utc::now().to_rfc3339();
    match state.store.count().await {
        Ok(count) => {
            tracing::debug!("service is healthy");
            Json(json!({
                "status": "ok",
                "database": "connected",
                "jobCount": count,
                "timestamp": timestamp,
            }))
            .into_response()
        }
        Err(e) => {
            tracing::error!("health check failed: {}", &e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "error",
                    "database": "disconnected",
                    "message": e.to_string(),
                    "timestamp": timestamp,
                })),
            )
                .into_response()
        }
    }
}
