use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, TransactionTrait,
};
use uuid::Uuid;

use wardline_recovery_schema::{password_resets, staff_accounts};

use crate::domain::repository::{AccountDirectory, VerificationStore};
use crate::domain::types::{StaffAccount, VerificationRecord};
use crate::error::RecoveryError;

fn persistence(e: anyhow::Error) -> RecoveryError {
    RecoveryError::PersistenceFailed(e)
}

// ── Account directory ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountDirectory {
    pub db: DatabaseConnection,
}

impl AccountDirectory for DbAccountDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<StaffAccount>, RecoveryError> {
        let model = staff_accounts::Entity::find()
            .filter(staff_accounts::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find account by email")
            .map_err(persistence)?;
        Ok(model.map(account_from_model))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StaffAccount>, RecoveryError> {
        let model = staff_accounts::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find account by id")
            .map_err(persistence)?;
        Ok(model.map(account_from_model))
    }

    async fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), RecoveryError> {
        staff_accounts::ActiveModel {
            id: Set(id),
            password_hash: Set(password_hash.to_owned()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update account password hash")
        .map_err(persistence)?;
        Ok(())
    }
}

fn account_from_model(model: staff_accounts::Model) -> StaffAccount {
    StaffAccount {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
    }
}

// ── Verification store ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbVerificationStore {
    pub db: DatabaseConnection,
}

impl VerificationStore for DbVerificationStore {
    async fn replace(&self, record: &VerificationRecord) -> Result<(), RecoveryError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let record = record.clone();
                Box::pin(async move {
                    delete_for_account(txn, record.account_id).await?;
                    insert_record(txn, &record).await?;
                    Ok(())
                })
            })
            .await
            .context("replace verification record")
            .map_err(persistence)?;
        Ok(())
    }

    async fn find(&self, account_id: Uuid) -> Result<Option<VerificationRecord>, RecoveryError> {
        let model = password_resets::Entity::find()
            .filter(password_resets::Column::AccountId.eq(account_id))
            .one(&self.db)
            .await
            .context("find verification record")
            .map_err(persistence)?;
        Ok(model.map(record_from_model))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RecoveryError> {
        let result = password_resets::Entity::delete_many()
            .filter(password_resets::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete verification record")
            .map_err(persistence)?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_all_for_account(&self, account_id: Uuid) -> Result<(), RecoveryError> {
        password_resets::Entity::delete_many()
            .filter(password_resets::Column::AccountId.eq(account_id))
            .exec(&self.db)
            .await
            .context("delete verification records for account")
            .map_err(persistence)?;
        Ok(())
    }
}

async fn delete_for_account(
    txn: &DatabaseTransaction,
    account_id: Uuid,
) -> Result<(), sea_orm::DbErr> {
    password_resets::Entity::delete_many()
        .filter(password_resets::Column::AccountId.eq(account_id))
        .exec(txn)
        .await?;
    Ok(())
}

async fn insert_record(
    txn: &DatabaseTransaction,
    record: &VerificationRecord,
) -> Result<(), sea_orm::DbErr> {
    password_resets::ActiveModel {
        id: Set(record.id),
        account_id: Set(record.account_id),
        code_hash: Set(record.code_hash.clone()),
        created_at: Set(record.created_at),
        expires_at: Set(record.expires_at),
    }
    .insert(txn)
    .await?;
    Ok(())
}

fn record_from_model(model: password_resets::Model) -> VerificationRecord {
    VerificationRecord {
        id: model.id,
        account_id: model.account_id,
        code_hash: model.code_hash,
        created_at: model.created_at,
        expires_at: model.expires_at,
    }
}
