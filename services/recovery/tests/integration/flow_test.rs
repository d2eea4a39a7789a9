//! End-to-end recovery flow over the mock collaborators: request a code,
//! fail a guess, verify, then commit a new password.

use wardline_recovery::domain::repository::SecretHasher;
use wardline_recovery::error::RecoveryError;
use wardline_recovery::usecase::commit::{CommitPasswordInput, CommitPasswordUseCase};
use wardline_recovery::usecase::issue::{IssueCodeInput, IssueCodeUseCase};
use wardline_recovery::usecase::verify::{VerifyCodeInput, VerifyCodeUseCase};

use crate::helpers::{
    MockAccountDirectory, MockHasher, MockMailer, MockVerificationStore, extract_code,
    test_account,
};

#[tokio::test]
async fn full_recovery_flow() {
    let account = test_account();
    let accounts = MockAccountDirectory::new(vec![account.clone()]);
    let store = MockVerificationStore::empty();
    let mailer = MockMailer::new();
    let account_handle = accounts.accounts_handle();
    let records = store.records_handle();
    let sent = mailer.sent_handle();

    // Request a code.
    IssueCodeUseCase {
        accounts: accounts.clone(),
        store: store.clone(),
        hasher: MockHasher,
        mailer,
    }
    .execute(IssueCodeInput {
        email: account.email.clone(),
    })
    .await
    .unwrap();

    assert_eq!(records.lock().unwrap().len(), 1);
    let code = extract_code(&sent.lock().unwrap()[0].body);

    let verify = VerifyCodeUseCase {
        accounts: accounts.clone(),
        store,
        hasher: MockHasher,
    };

    // A wrong guess fails and leaves the record in place. Issued codes are
    // always >= 100000, so this guess can never collide.
    let wrong = verify
        .execute(VerifyCodeInput {
            email: account.email.clone(),
            code: "000000".to_owned(),
        })
        .await;
    assert!(matches!(wrong, Err(RecoveryError::InvalidOrExpiredCode)));
    assert_eq!(records.lock().unwrap().len(), 1);

    // The mailed code verifies and consumes the record.
    verify
        .execute(VerifyCodeInput {
            email: account.email.clone(),
            code,
        })
        .await
        .unwrap();
    assert!(records.lock().unwrap().is_empty());

    // Commit the new password.
    CommitPasswordUseCase {
        accounts,
        hasher: MockHasher,
    }
    .execute(CommitPasswordInput {
        email: account.email.clone(),
        new_password: "new-ward-round".to_owned(),
    })
    .await
    .unwrap();

    let stored = account_handle.lock().unwrap()[0].password_hash.clone();
    assert!(MockHasher.verify("new-ward-round", &stored).unwrap());
    assert!(!MockHasher.verify("old-password", &stored).unwrap());
}
