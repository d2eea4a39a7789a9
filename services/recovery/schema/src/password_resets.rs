use sea_orm::entity::prelude::*;

/// Outstanding password-reset verification code.
/// `account_id` carries a unique index: at most one live record per account,
/// replaced wholesale on each re-issue. Only the Argon2id hash of the code
/// is stored; the plaintext goes to the account's email and nowhere else.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "password_resets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub account_id: Uuid,
    pub code_hash: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::staff_accounts::Entity",
        from = "Column::AccountId",
        to = "super::staff_accounts::Column::Id"
    )]
    StaffAccounts,
}

impl Related<super::staff_accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StaffAccounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
