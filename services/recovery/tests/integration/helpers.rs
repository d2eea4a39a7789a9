use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use uuid::Uuid;

use wardline_recovery::domain::repository::{
    AccountDirectory, Notifier, SecretHasher, VerificationStore,
};
use wardline_recovery::domain::types::{StaffAccount, VerificationRecord};
use wardline_recovery::error::RecoveryError;

// ── MockAccountDirectory ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockAccountDirectory {
    pub accounts: Arc<Mutex<Vec<StaffAccount>>>,
}

impl MockAccountDirectory {
    pub fn new(accounts: Vec<StaffAccount>) -> Self {
        Self {
            accounts: Arc::new(Mutex::new(accounts)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle to the account list for post-execution inspection.
    pub fn accounts_handle(&self) -> Arc<Mutex<Vec<StaffAccount>>> {
        Arc::clone(&self.accounts)
    }
}

impl AccountDirectory for MockAccountDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<StaffAccount>, RecoveryError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StaffAccount>, RecoveryError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), RecoveryError> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| RecoveryError::PersistenceFailed(anyhow::anyhow!("no such account")))?;
        account.password_hash = password_hash.to_owned();
        Ok(())
    }
}

// ── MockVerificationStore ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockVerificationStore {
    pub records: Arc<Mutex<Vec<VerificationRecord>>>,
    fail_replace: bool,
    delete_reports_missing: bool,
}

impl MockVerificationStore {
    pub fn new(records: Vec<VerificationRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            fail_replace: false,
            delete_reports_missing: false,
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Every `replace` fails as if the database were unreachable.
    pub fn failing(records: Vec<VerificationRecord>) -> Self {
        Self {
            fail_replace: true,
            ..Self::new(records)
        }
    }

    /// `delete` reports the record already gone, as when a concurrent
    /// verification consumed it between find and delete.
    pub fn consumed_elsewhere(records: Vec<VerificationRecord>) -> Self {
        Self {
            delete_reports_missing: true,
            ..Self::new(records)
        }
    }

    pub fn records_handle(&self) -> Arc<Mutex<Vec<VerificationRecord>>> {
        Arc::clone(&self.records)
    }
}

impl VerificationStore for MockVerificationStore {
    async fn replace(&self, record: &VerificationRecord) -> Result<(), RecoveryError> {
        if self.fail_replace {
            return Err(RecoveryError::PersistenceFailed(anyhow::anyhow!(
                "store unreachable"
            )));
        }
        let mut records = self.records.lock().unwrap();
        records.retain(|r| r.account_id != record.account_id);
        records.push(record.clone());
        Ok(())
    }

    async fn find(&self, account_id: Uuid) -> Result<Option<VerificationRecord>, RecoveryError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.account_id == account_id)
            .cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RecoveryError> {
        if self.delete_reports_missing {
            return Ok(false);
        }
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() < before)
    }

    async fn delete_all_for_account(&self, account_id: Uuid) -> Result<(), RecoveryError> {
        self.records
            .lock()
            .unwrap()
            .retain(|r| r.account_id != account_id);
        Ok(())
    }
}

// ── MockHasher ───────────────────────────────────────────────────────────────

/// Deterministic stand-in honoring the one-way contract: `h:<plain>`.
#[derive(Clone)]
pub struct MockHasher;

impl SecretHasher for MockHasher {
    fn hash(&self, plain: &str) -> Result<String, RecoveryError> {
        Ok(format!("h:{plain}"))
    }

    fn verify(&self, plain: &str, hash: &str) -> Result<bool, RecoveryError> {
        Ok(hash == format!("h:{plain}"))
    }
}

// ── MockMailer ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct SentMail {
    pub to_email: String,
    pub subject: String,
    pub body: String,
}

#[derive(Clone)]
pub struct MockMailer {
    pub sent: Arc<Mutex<Vec<SentMail>>>,
    fail: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::new() }
    }

    pub fn sent_handle(&self) -> Arc<Mutex<Vec<SentMail>>> {
        Arc::clone(&self.sent)
    }
}

impl Notifier for MockMailer {
    async fn send(&self, to_email: &str, subject: &str, body: &str) -> Result<(), RecoveryError> {
        if self.fail {
            return Err(RecoveryError::DeliveryFailed(anyhow::anyhow!(
                "mail API unreachable"
            )));
        }
        self.sent.lock().unwrap().push(SentMail {
            to_email: to_email.to_owned(),
            subject: subject.to_owned(),
            body: body.to_owned(),
        });
        Ok(())
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_account() -> StaffAccount {
    StaffAccount {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap(),
        email: "a.okafor@clinic.example".to_owned(),
        password_hash: "h:old-password".to_owned(),
    }
}

pub fn test_record(account_id: Uuid, code_hash: &str) -> VerificationRecord {
    VerificationRecord::issue(account_id, code_hash.to_owned(), Utc::now())
}

/// A record whose TTL ran out an hour ago.
pub fn expired_record(account_id: Uuid, code_hash: &str) -> VerificationRecord {
    VerificationRecord::issue(
        account_id,
        code_hash.to_owned(),
        Utc::now() - Duration::hours(2),
    )
}

/// Pull the 6-digit code out of a reset mail body.
pub fn extract_code(body: &str) -> String {
    body.split(|c: char| !c.is_ascii_digit())
        .find(|t| t.len() == 6)
        .expect("mail body carries no 6-digit code")
        .to_owned()
}
