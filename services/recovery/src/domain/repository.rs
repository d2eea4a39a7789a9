#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{StaffAccount, VerificationRecord};
use crate::error::RecoveryError;

/// Port for account lookup and durable credential overwrite.
pub trait AccountDirectory: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<StaffAccount>, RecoveryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<StaffAccount>, RecoveryError>;
    async fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), RecoveryError>;
}

/// Durable store of outstanding verification codes, keyed by account.
///
/// The replace-with-prior-deletion semantics are load-bearing: they are what
/// keeps "at most one live code per account" true under concurrent issues.
pub trait VerificationStore: Send + Sync {
    /// Atomically drop any outstanding record for `record.account_id` and
    /// persist `record` in its place (single transaction, last-issued-wins).
    async fn replace(&self, record: &VerificationRecord) -> Result<(), RecoveryError>;

    /// The unique outstanding record for an account, expired or not.
    async fn find(&self, account_id: Uuid) -> Result<Option<VerificationRecord>, RecoveryError>;

    /// Compare-and-delete by record id. Returns `false` when the record was
    /// already gone, consumed by a concurrent verification or replaced.
    async fn delete(&self, id: Uuid) -> Result<bool, RecoveryError>;

    async fn delete_all_for_account(&self, account_id: Uuid) -> Result<(), RecoveryError>;
}

/// One-way hashing for verification codes and account passwords.
/// `verify` must compare in constant time.
pub trait SecretHasher: Send + Sync {
    fn hash(&self, plain: &str) -> Result<String, RecoveryError>;
    fn verify(&self, plain: &str, hash: &str) -> Result<bool, RecoveryError>;
}

/// Out-of-band delivery of the plaintext code to the account holder.
/// Failures surface as `DeliveryFailed`, never silently.
pub trait Notifier: Send + Sync {
    async fn send(&self, to_email: &str, subject: &str, body: &str) -> Result<(), RecoveryError>;
}
