use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_department_table::Department,
    m20261001_000002_create_user_table::User, m20261002_000005_create_document_table::Document,
};

/// Creates the kind-specific detail tables for incoming, outgoing and internal documents.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IncomingDocument::Table)
                    .if_not_exists()
                    .col(integer(IncomingDocument::DocumentId).primary_key())
                    .col(string(IncomingDocument::SenderOrganization))
                    .col(string_null(IncomingDocument::SenderReference))
                    .col(timestamp_null(IncomingDocument::ReceivedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_incoming_document_document_id")
                            .from(IncomingDocument::Table, IncomingDocument::DocumentId)
                            .to(Document::Table, Document::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OutgoingDocument::Table)
                    .if_not_exists()
                    .col(integer(OutgoingDocument::DocumentId).primary_key())
                    .col(string(OutgoingDocument::RecipientOrganization))
                    .col(integer_null(OutgoingDocument::SignedBy))
                    .col(timestamp_null(OutgoingDocument::SentAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_outgoing_document_document_id")
                            .from(OutgoingDocument::Table, OutgoingDocument::DocumentId)
                            .to(Document::Table, Document::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_outgoing_document_signed_by")
                            .from(OutgoingDocument::Table, OutgoingDocument::SignedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InternalDocument::Table)
                    .if_not_exists()
                    .col(integer(InternalDocument::DocumentId).primary_key())
                    .col(integer(InternalDocument::TargetDepartmentId))
                    .col(boolean(InternalDocument::Urgent).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_internal_document_document_id")
                            .from(InternalDocument::Table, InternalDocument::DocumentId)
                            .to(Document::Table, Document::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_internal_document_target_department_id")
                            .from(InternalDocument::Table, InternalDocument::TargetDepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InternalDocument::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OutgoingDocument::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(IncomingDocument::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum IncomingDocument {
    Table,
    DocumentId,
    SenderOrganization,
    SenderReference,
    ReceivedAt,
}

#[derive(DeriveIden)]
pub enum OutgoingDocument {
    Table,
    DocumentId,
    RecipientOrganization,
    SignedBy,
    SentAt,
}

#[derive(DeriveIden)]
pub enum InternalDocument {
    Table,
    DocumentId,
    TargetDepartmentId,
    Urgent,
}
