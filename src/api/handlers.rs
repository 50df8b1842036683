use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

use crate::VERSION;
use crate::api::responses::{Envelope, IndexInfo, RandomData, TimeData, UserQuery};
use crate::api::server::AppState;
use crate::config::Mode;
use crate::db::models::UserRow;
use crate::db::repo;
use crate::error::ApiError;
use crate::random::random_numbers;

pub const ENDPOINTS: [&str; 4] = ["/", "/time", "/random", "/user?id=<id>"];

pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    match state.mode {
        Mode::Safe => format!("App version {VERSION}").into_response(),
        Mode::Vulnerable => Json(IndexInfo {
            app_version: VERSION,
            endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
        })
        .into_response(),
    }
}

pub async fn current_time() -> Result<Json<Envelope<TimeData>>, ApiError> {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| ApiError::Clock)?
        .as_secs();

    Ok(Json(Envelope::success(TimeData {
        unix_timestamp: secs.to_string(),
    })))
}

pub async fn random(State(state): State<Arc<AppState>>) -> Json<Envelope<RandomData>> {
    Json(Envelope::success(RandomData {
        random_number: random_numbers(state.mode),
    }))
}

pub async fn user(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<UserRow>>, ApiError> {
    let rows = repo::lookup(query.id.as_deref(), state.mode).await?;
    info!(id = ?query.id, rows = rows.len(), "user lookup");
    Ok(Json(rows))
}
