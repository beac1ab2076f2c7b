use sea_orm::entity::prelude::*;

/// Base correspondence record shared by incoming, outgoing and internal documents.
///
/// Kind-specific columns live in the `incoming_document`, `outgoing_document` and
/// `internal_document` tables keyed by `document_id`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "document")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub kind: String,
    #[sea_orm(unique)]
    pub registration_number: Option<String>,
    pub title: String,
    pub summary: Option<String>,
    pub status: String,
    pub security_level: String,
    pub department_id: i32,
    pub created_by: i32,
    pub deadline: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id",
        on_delete = "Restrict"
    )]
    Department,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id",
        on_delete = "Restrict"
    )]
    Author,
    #[sea_orm(has_one = "super::incoming_document::Entity")]
    IncomingDocument,
    #[sea_orm(has_one = "super::outgoing_document::Entity")]
    OutgoingDocument,
    #[sea_orm(has_one = "super::internal_document::Entity")]
    InternalDocument,
    #[sea_orm(has_many = "super::document_assignment::Entity")]
    DocumentAssignment,
    #[sea_orm(has_many = "super::document_history::Entity")]
    DocumentHistory,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::incoming_document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IncomingDocument.def()
    }
}

impl Related<super::outgoing_document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OutgoingDocument.def()
    }
}

impl Related<super::internal_document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InternalDocument.def()
    }
}

impl Related<super::document_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocumentAssignment.def()
    }
}

impl Related<super::document_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocumentHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
