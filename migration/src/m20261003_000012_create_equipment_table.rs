use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_department_table::Department;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Equipment::Table)
                    .if_not_exists()
                    .col(pk_auto(Equipment::Id))
                    .col(string_uniq(Equipment::InventoryNumber))
                    .col(string(Equipment::Name))
                    .col(string(Equipment::Category))
                    .col(string_null(Equipment::Model))
                    .col(string_null(Equipment::SerialNumber))
                    .col(integer(Equipment::Quantity).default(1))
                    .col(string(Equipment::Condition).default("SERVICEABLE"))
                    .col(integer(Equipment::DepartmentId))
                    .col(text_null(Equipment::Notes))
                    .col(
                        timestamp(Equipment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Equipment::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipment_department_id")
                            .from(Equipment::Table, Equipment::DepartmentId)
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
            .drop_table(Table::drop().table(Equipment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Equipment {
    Table,
    Id,
    InventoryNumber,
    Name,
    Category,
    Model,
    SerialNumber,
    Quantity,
    Condition,
    DepartmentId,
    Notes,
    CreatedAt,
    UpdatedAt,
}
