use sea_orm::DatabaseConnection;

use crate::infra::db::{DbAccountDirectory, DbVerificationStore};
use crate::infra::hasher::ArgonHasher;
use crate::infra::mailer::Mailer;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub hasher: ArgonHasher,
    pub mailer: Mailer,
}

impl AppState {
    pub fn account_directory(&self) -> DbAccountDirectory {
        DbAccountDirectory {
            db: self.db.clone(),
        }
    }

    pub fn verification_store(&self) -> DbVerificationStore {
        DbVerificationStore {
            db: self.db.clone(),
        }
    }

    pub fn hasher(&self) -> ArgonHasher {
        self.hasher.clone()
    }

    pub fn mailer(&self) -> Mailer {
        self.mailer.clone()
    }
}
