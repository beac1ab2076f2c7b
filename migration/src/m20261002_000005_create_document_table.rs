use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_department_table::Department,
    m20261001_000002_create_user_table::User,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Document::Table)
                    .if_not_exists()
                    .col(pk_auto(Document::Id))
                    .col(string(Document::Kind))
                    .col(string_null(Document::RegistrationNumber).unique_key())
                    .col(string(Document::Title))
                    .col(text_null(Document::Summary))
                    .col(string(Document::Status).default("DRAFT"))
                    .col(string(Document::SecurityLevel).default("UNCLASSIFIED"))
                    .col(integer(Document::DepartmentId))
                    .col(integer(Document::CreatedBy))
                    .col(timestamp_null(Document::Deadline))
                    .col(
                        timestamp(Document::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Document::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_department_id")
                            .from(Document::Table, Document::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_created_by")
                            .from(Document::Table, Document::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_document_status_deadline")
                    .table(Document::Table)
                    .col(Document::Status)
                    .col(Document::Deadline)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Document::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Document {
    Table,
    Id,
    Kind,
    RegistrationNumber,
    Title,
    Summary,
    Status,
    SecurityLevel,
    DepartmentId,
    CreatedBy,
    Deadline,
    CreatedAt,
    UpdatedAt,
}
