use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PasswordResets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PasswordResets::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PasswordResets::AccountId).uuid().not_null())
                    .col(
                        ColumnDef::new(PasswordResets::CodeHash)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PasswordResets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PasswordResets::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PasswordResets::Table, PasswordResets::AccountId)
                            .to(StaffAccounts::Table, StaffAccounts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique: at most one outstanding reset per account. Re-issue replaces
        // the prior row inside a transaction, so concurrent issues cannot
        // leave two live codes behind.
        manager
            .create_index(
                Index::create()
                    .table(PasswordResets::Table)
                    .col(PasswordResets::AccountId)
                    .name("idx_password_resets_account_id")
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PasswordResets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum PasswordResets {
    Table,
    Id,
    AccountId,
    CodeHash,
    CreatedAt,
    ExpiresAt,
}

#[derive(Iden)]
enum StaffAccounts {
    Table,
    Id,
}
