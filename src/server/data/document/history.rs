use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::document::{HistoryEntry, NewHistoryEntry};

pub struct DocumentHistoryRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DocumentHistoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a row to a document's history log.
    pub async fn create(
        &self,
        document_id: i32,
        entry: NewHistoryEntry,
    ) -> Result<HistoryEntry, DbErr> {
        let entity = entity::document_history::ActiveModel {
            document_id: ActiveValue::Set(document_id),
            action: ActiveValue::Set(entry.action.as_str().to_string()),
            from_status: ActiveValue::Set(entry.from_status.map(|s| s.as_str().to_string())),
            to_status: ActiveValue::Set(entry.to_status.as_str().to_string()),
            user_id: ActiveValue::Set(entry.user_id),
            department_id: ActiveValue::Set(entry.department_id),
            comment: ActiveValue::Set(entry.comment),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        HistoryEntry::from_entity(entity)
    }

    /// Gets a document's history, oldest first.
    pub async fn get_by_document(&self, document_id: i32) -> Result<Vec<HistoryEntry>, DbErr> {
        entity::prelude::DocumentHistory::find()
            .filter(entity::document_history::Column::DocumentId.eq(document_id))
            .order_by_asc(entity::document_history::Column::CreatedAt)
            .order_by_asc(entity::document_history::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(HistoryEntry::from_entity)
            .collect()
    }
}
