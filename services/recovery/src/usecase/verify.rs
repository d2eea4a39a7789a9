use chrono::Utc;
use tracing::info;

use crate::domain::repository::{AccountDirectory, SecretHasher, VerificationStore};
use crate::error::RecoveryError;

pub struct VerifyCodeInput {
    pub email: String,
    pub code: String,
}

/// Checks a presented code against the outstanding record and consumes it on
/// success. Absent, expired, and mismatched codes are indistinguishable to
/// the caller.
pub struct VerifyCodeUseCase<D, S, H>
where
    D: AccountDirectory,
    S: VerificationStore,
    H: SecretHasher,
{
    pub accounts: D,
    pub store: S,
    pub hasher: H,
}

impl<D, S, H> VerifyCodeUseCase<D, S, H>
where
    D: AccountDirectory,
    S: VerificationStore,
    H: SecretHasher,
{
    pub async fn execute(&self, input: VerifyCodeInput) -> Result<(), RecoveryError> {
        let account = self
            .accounts
            .find_by_email(&input.email)
            .await?
            .ok_or(RecoveryError::AccountNotFound)?;

        let Some(record) = self.store.find(account.id).await? else {
            return Err(RecoveryError::InvalidOrExpiredCode);
        };

        if record.is_expired(Utc::now()) {
            // Lazy expiry: drop the dead row now that we have tripped over it.
            self.store.delete(record.id).await?;
            return Err(RecoveryError::InvalidOrExpiredCode);
        }

        if !self.hasher.verify(&input.code, &record.code_hash)? {
            // The record stays; the user may retry until the TTL runs out.
            return Err(RecoveryError::InvalidOrExpiredCode);
        }

        // Single use. The delete is conditional on the record still existing,
        // so of two concurrent verifications only one observes success.
        if !self.store.delete(record.id).await? {
            return Err(RecoveryError::InvalidOrExpiredCode);
        }

        info!(account_id = %account.id, "verification code accepted");
        Ok(())
    }
}
