use argon2::password_hash::{PasswordHash, SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};

use crate::domain::repository::SecretHasher;
use crate::error::RecoveryError;

/// Argon2id hasher used for both verification codes and account passwords.
/// Every `hash` call draws a fresh salt; `verify` is constant-time.
#[derive(Clone, Default)]
pub struct ArgonHasher;

impl SecretHasher for ArgonHasher {
    fn hash(&self, plain: &str) -> Result<String, RecoveryError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| RecoveryError::Unknown(anyhow::anyhow!("hash secret: {e}")))?;
        Ok(hash.to_string())
    }

    fn verify(&self, plain: &str, hash: &str) -> Result<bool, RecoveryError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| RecoveryError::Unknown(anyhow::anyhow!("parse stored hash: {e}")))?;
        match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(RecoveryError::Unknown(anyhow::anyhow!("verify secret: {e}"))),
        }
    }
}
