pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_department_table;
mod m20261001_000002_create_user_table;
mod m20261001_000003_create_role_table;
mod m20261001_000004_create_user_role_table;
mod m20261002_000005_create_document_table;
mod m20261002_000006_create_document_detail_tables;
mod m20261002_000007_create_document_assignment_table;
mod m20261002_000008_create_document_history_table;
mod m20261003_000009_create_notification_table;
mod m20261003_000010_create_schedule_table;
mod m20261003_000011_create_work_plan_table;
mod m20261003_000012_create_equipment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_department_table::Migration),
            Box::new(m20261001_000002_create_user_table::Migration),
            Box::new(m20261001_000003_create_role_table::Migration),
            Box::new(m20261001_000004_create_user_role_table::Migration),
            Box::new(m20261002_000005_create_document_table::Migration),
            Box::new(m20261002_000006_create_document_detail_tables::Migration),
            Box::new(m20261002_000007_create_document_assignment_table::Migration),
            Box::new(m20261002_000008_create_document_history_table::Migration),
            Box::new(m20261003_000009_create_notification_table::Migration),
            Box::new(m20261003_000010_create_schedule_table::Migration),
            Box::new(m20261003_000011_create_work_plan_table::Migration),
            Box::new(m20261003_000012_create_equipment_table::Migration),
        ]
    }
}
