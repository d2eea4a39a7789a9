use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness only. Services wire their own
/// `readyz` so readiness can probe downstream dependencies (database, mail).
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
