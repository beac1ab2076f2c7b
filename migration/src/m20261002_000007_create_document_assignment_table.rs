use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_department_table::Department,
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
                    .table(DocumentAssignment::Table)
                    .if_not_exists()
                    .col(pk_auto(DocumentAssignment::Id))
                    .col(integer(DocumentAssignment::DocumentId))
                    .col(integer(DocumentAssignment::DepartmentId))
                    .col(integer(DocumentAssignment::AssignedBy))
                    .col(
                        timestamp(DocumentAssignment::AssignedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(DocumentAssignment::DueDate))
                    .col(timestamp_null(DocumentAssignment::CompletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_assignment_document_id")
                            .from(DocumentAssignment::Table, DocumentAssignment::DocumentId)
                            .to(Document::Table, Document::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_assignment_department_id")
                            .from(DocumentAssignment::Table, DocumentAssignment::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_assignment_assigned_by")
                            .from(DocumentAssignment::Table, DocumentAssignment::AssignedBy)
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
                    .name("idx_document_assignment_document_department")
                    .table(DocumentAssignment::Table)
                    .col(DocumentAssignment::DocumentId)
                    .col(DocumentAssignment::DepartmentId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DocumentAssignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DocumentAssignment {
    Table,
    Id,
    DocumentId,
    DepartmentId,
    AssignedBy,
    AssignedAt,
    DueDate,
    CompletedAt,
}
