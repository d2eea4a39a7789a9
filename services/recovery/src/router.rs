use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use wardline_core::health::healthz;
use wardline_core::middleware::request_id_layer;

use crate::handlers::health::readyz;
use crate::handlers::recovery::{request_code, reset_password, verify_code};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Credential recovery
        .route("/recovery/code", post(request_code))
        .route("/recovery/verify", post(verify_code))
        .route("/recovery/password", put(reset_password))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
