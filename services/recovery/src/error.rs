use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Recovery service error variants.
///
/// `InvalidOrExpiredCode` deliberately covers three internal causes (no
/// outstanding code, expired code, wrong code) so responses do not reveal
/// which one occurred.
#[derive(Debug, thiserror::Error)]
pub enum RecoveryError {
    #[error("account not found")]
    AccountNotFound,
    #[error("invalid or expired verification code")]
    InvalidOrExpiredCode,
    #[error("could not deliver verification code")]
    DeliveryFailed(#[source] anyhow::Error),
    #[error("storage failure")]
    PersistenceFailed(#[source] anyhow::Error),
    #[error("internal error")]
    Unknown(#[from] anyhow::Error),
}

impl RecoveryError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AccountNotFound => "ACCOUNT_NOT_FOUND",
            Self::InvalidOrExpiredCode => "INVALID_OR_EXPIRED_CODE",
            Self::DeliveryFailed(_) => "DELIVERY_FAILED",
            Self::PersistenceFailed(_) => "PERSISTENCE_FAILED",
            Self::Unknown(_) => "UNKNOWN",
        }
    }
}

impl IntoResponse for RecoveryError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::AccountNotFound => StatusCode::NOT_FOUND,
            Self::InvalidOrExpiredCode => StatusCode::UNAUTHORIZED,
            Self::DeliveryFailed(_) => StatusCode::BAD_GATEWAY,
            Self::PersistenceFailed(_) | Self::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 5xx only — tower-http TraceLayer already records method/uri/status
        // for all requests. 4xx are expected client errors; logging them here
        // would be noise. Collaborator failures need the chain logged so the
        // root cause is traceable.
        match &self {
            Self::DeliveryFailed(e) | Self::PersistenceFailed(e) | Self::Unknown(e) => {
                tracing::error!(error = ?e, kind = self.kind(), "collaborator failure");
            }
            _ => {}
        }
        // The body carries the stable kind and message only. Record ids,
        // hashes, and codes never appear in a response.
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
