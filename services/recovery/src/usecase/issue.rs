use chrono::Utc;
use rand::Rng;
use tracing::info;

use crate::domain::repository::{AccountDirectory, Notifier, SecretHasher, VerificationStore};
use crate::domain::types::{RESET_CODE_MAX, RESET_CODE_MIN, VerificationRecord};
use crate::error::RecoveryError;

const RESET_MAIL_SUBJECT: &str = "Password Verification Code";

fn generate_code() -> String {
    let mut rng = rand::rng();
    rng.random_range(RESET_CODE_MIN..=RESET_CODE_MAX).to_string()
}

fn reset_mail_body(code: &str) -> String {
    format!(
        "Your password reset verification code is {code}. \
         It expires in 60 minutes. If you did not request a reset, \
         you can ignore this message."
    )
}

pub struct IssueCodeInput {
    pub email: String,
}

/// Issues a fresh verification code: replaces any outstanding code for the
/// account, persists only the hash, and mails the plaintext exactly once.
pub struct IssueCodeUseCase<D, S, H, N>
where
    D: AccountDirectory,
    S: VerificationStore,
    H: SecretHasher,
    N: Notifier,
{
    pub accounts: D,
    pub store: S,
    pub hasher: H,
    pub mailer: N,
}

impl<D, S, H, N> IssueCodeUseCase<D, S, H, N>
where
    D: AccountDirectory,
    S: VerificationStore,
    H: SecretHasher,
    N: Notifier,
{
    pub async fn execute(&self, input: IssueCodeInput) -> Result<(), RecoveryError> {
        let account = self
            .accounts
            .find_by_email(&input.email)
            .await?
            .ok_or(RecoveryError::AccountNotFound)?;

        let code = generate_code();
        let code_hash = self.hasher.hash(&code)?;
        let record = VerificationRecord::issue(account.id, code_hash, Utc::now());

        // One transaction: the prior record (if any) is dropped and the new
        // one persisted. When this fails nothing is stored and no mail goes
        // out, so the caller can retry the whole operation.
        self.store.replace(&record).await?;

        // The plaintext exists only in this request and the outgoing message.
        // A failed send leaves the stored record unsent; a later re-issue
        // replaces it wholesale.
        self.mailer
            .send(&account.email, RESET_MAIL_SUBJECT, &reset_mail_body(&code))
            .await?;

        info!(account_id = %account.id, "issued password reset code");
        Ok(())
    }
}
