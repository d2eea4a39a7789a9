//! sea-ORM entities for the credential-recovery service.

pub mod password_resets;
pub mod staff_accounts;
