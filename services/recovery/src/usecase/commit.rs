use tracing::info;

use crate::domain::repository::{AccountDirectory, SecretHasher};
use crate::error::RecoveryError;

pub struct CommitPasswordInput {
    pub email: String,
    pub new_password: String,
}

/// Overwrites the account's stored password hash with a fresh one.
///
/// Deliberately does not consult the verification store: the request layer
/// sequences verify before commit, matching the two-endpoint reset flow.
pub struct CommitPasswordUseCase<D, H>
where
    D: AccountDirectory,
    H: SecretHasher,
{
    pub accounts: D,
    pub hasher: H,
}

impl<D, H> CommitPasswordUseCase<D, H>
where
    D: AccountDirectory,
    H: SecretHasher,
{
    pub async fn execute(&self, input: CommitPasswordInput) -> Result<(), RecoveryError> {
        let account = self
            .accounts
            .find_by_email(&input.email)
            .await?
            .ok_or(RecoveryError::AccountNotFound)?;

        // Fresh salt on every commit; the old hash is unrecoverable after this.
        let password_hash = self.hasher.hash(&input.new_password)?;
        self.accounts
            .update_password_hash(account.id, &password_hash)
            .await?;

        info!(account_id = %account.id, "password updated");
        Ok(())
    }
}
