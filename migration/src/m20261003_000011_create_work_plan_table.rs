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
                    .table(WorkPlan::Table)
                    .if_not_exists()
                    .col(pk_auto(WorkPlan::Id))
                    .col(integer(WorkPlan::DepartmentId))
                    .col(string(WorkPlan::Title))
                    .col(text_null(WorkPlan::Description))
                    .col(date(WorkPlan::PeriodStart))
                    .col(date(WorkPlan::PeriodEnd))
                    .col(string(WorkPlan::Status).default("DRAFT"))
                    .col(integer(WorkPlan::CreatedBy))
                    .col(integer_null(WorkPlan::ApprovedBy))
                    .col(timestamp_null(WorkPlan::ApprovedAt))
                    .col(
                        timestamp(WorkPlan::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(WorkPlan::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_plan_department_id")
                            .from(WorkPlan::Table, WorkPlan::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_plan_created_by")
                            .from(WorkPlan::Table, WorkPlan::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_plan_approved_by")
                            .from(WorkPlan::Table, WorkPlan::ApprovedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkPlan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WorkPlan {
    Table,
    Id,
    DepartmentId,
    Title,
    Description,
    PeriodStart,
    PeriodEnd,
    Status,
    CreatedBy,
    ApprovedBy,
    ApprovedAt,
    CreatedAt,
    UpdatedAt,
}
