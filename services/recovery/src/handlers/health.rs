use axum::{extract::State, http::StatusCode};

use crate::state::AppState;

/// Handler for `GET /readyz`. Ready only when the database answers a ping.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    match state.db.ping().await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
