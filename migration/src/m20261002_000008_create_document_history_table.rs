use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000002_create_user_table::User, m20261002_000005_create_document_table::Document,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DocumentHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(DocumentHistory::Id))
                    .col(integer(DocumentHistory::DocumentId))
                    .col(string(DocumentHistory::Action))
                    .col(string_null(DocumentHistory::FromStatus))
                    .col(string(DocumentHistory::ToStatus))
                    .col(integer(DocumentHistory::UserId))
                    .col(integer_null(DocumentHistory::DepartmentId))
                    .col(text_null(DocumentHistory::Comment))
                    .col(
                        timestamp(DocumentHistory::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_history_document_id")
                            .from(DocumentHistory::Table, DocumentHistory::DocumentId)
                            .to(Document::Table, Document::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_history_user_id")
                            .from(DocumentHistory::Table, DocumentHistory::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DocumentHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DocumentHistory {
    Table,
    Id,
    DocumentId,
    Action,
    FromStatus,
    ToStatus,
    UserId,
    DepartmentId,
    Comment,
    CreatedAt,
}
