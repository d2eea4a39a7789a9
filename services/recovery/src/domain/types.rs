use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Staff account data the recovery flows need: the email lookup key and the
/// credential the commit leg rewrites. The directory owns the rest.
#[derive(Debug, Clone)]
pub struct StaffAccount {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}

/// Outstanding verification code for one account. Holds the Argon2id hash of
/// the code, never the plaintext. At most one live record per account.
#[derive(Debug, Clone)]
pub struct VerificationRecord {
    pub id: Uuid,
    pub account_id: Uuid,
    pub code_hash: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl VerificationRecord {
    /// Build a fresh record expiring `RESET_CODE_TTL_SECS` after `now`.
    pub fn issue(account_id: Uuid, code_hash: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            code_hash,
            created_at: now,
            expires_at: now + Duration::seconds(RESET_CODE_TTL_SECS),
        }
    }

    /// Expired records are treated as absent everywhere; they are only
    /// deleted lazily when a verification attempt trips over them.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Verification code time-to-live in seconds.
pub const RESET_CODE_TTL_SECS: i64 = 3600;

/// Inclusive bounds of the 6-digit verification code.
pub const RESET_CODE_MIN: u32 = 100_000;
pub const RESET_CODE_MAX: u32 = 999_999;
