use sea_orm_migration::{prelude::*, schema::*};

/// System roles seeded with the schema. Names must match `RoleKind::as_str`.
const SYSTEM_ROLES: [(&str, &str); 4] = [
    ("ADMIN", "Full administrative access"),
    ("REGISTRAR", "Registers and distributes correspondence"),
    ("COMMANDER", "Approves work plans and archives documents"),
    ("EXECUTOR", "Executes documents assigned to their department"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(pk_auto(Role::Id))
                    .col(string_uniq(Role::Name))
                    .col(text_null(Role::Description))
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert();
        insert
            .into_table(Role::Table)
            .columns([Role::Name, Role::Description]);
        for (name, description) in SYSTEM_ROLES {
            insert.values_panic([name.into(), description.into()]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Role {
    Table,
    Id,
    Name,
    Description,
}
