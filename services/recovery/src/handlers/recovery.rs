use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::error::RecoveryError;
use crate::state::AppState;
use crate::usecase::commit::{CommitPasswordInput, CommitPasswordUseCase};
use crate::usecase::issue::{IssueCodeInput, IssueCodeUseCase};
use crate::usecase::verify::{VerifyCodeInput, VerifyCodeUseCase};

#[derive(Deserialize)]
pub struct RequestCodeRequest {
    pub email: String,
}

pub async fn request_code(
    State(state): State<AppState>,
    Json(body): Json<RequestCodeRequest>,
) -> Result<StatusCode, RecoveryError> {
    let usecase = IssueCodeUseCase {
        accounts: state.account_directory(),
        store: state.verification_store(),
        hasher: state.hasher(),
        mailer: state.mailer(),
    };
    usecase.execute(IssueCodeInput { email: body.email }).await?;
    Ok(StatusCode::CREATED)
}

#[derive(Deserialize)]
pub struct VerifyCodeRequest {
    pub email: String,
    pub code: String,
}

pub async fn verify_code(
    State(state): State<AppState>,
    Json(body): Json<VerifyCodeRequest>,
) -> Result<StatusCode, RecoveryError> {
    let usecase = VerifyCodeUseCase {
        accounts: state.account_directory(),
        store: state.verification_store(),
        hasher: state.hasher(),
    };
    usecase
        .execute(VerifyCodeInput {
            email: body.email,
            code: body.code,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub new_password: String,
}

pub async fn reset_password(
    State(state): State<AppState>,
    Json(body): Json<ResetPasswordRequest>,
) -> Result<StatusCode, RecoveryError> {
    let usecase = CommitPasswordUseCase {
        accounts: state.account_directory(),
        hasher: state.hasher(),
    };
    usecase
        .execute(CommitPasswordInput {
            email: body.email,
            new_password: body.new_password,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
