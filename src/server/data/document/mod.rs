//! Document data repositories.
//!
//! `DocumentRepository` manages the base record and its kind-specific detail row.
//! Assignments and history rows have their own repositories in the submodules. All three
//! are generic over `ConnectionTrait` so workflow actions can run them inside a single
//! transaction.

pub mod assignment;
pub mod history;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, Query, SelectStatement},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::{
    model::document::{DocumentKind, DocumentStatus},
    server::model::document::{
        CreateDocumentParams, DetailRows, Document, DocumentDetails, DocumentFilter,
        UpdateDocumentParams,
    },
};

pub struct DocumentRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DocumentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a draft document with its detail row.
    ///
    /// # Arguments
    /// - `params` - Content of the document; the detail variant determines the kind
    ///
    /// # Returns
    /// - `Ok(Document)` - The created document in `DRAFT` status
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateDocumentParams) -> Result<Document, DbErr> {
        let now = Utc::now();
        let kind = params.details.kind();

        let entity = entity::document::ActiveModel {
            kind: ActiveValue::Set(kind.as_str().to_string()),
            registration_number: ActiveValue::Set(None),
            title: ActiveValue::Set(params.title),
            summary: ActiveValue::Set(params.summary),
            status: ActiveValue::Set(DocumentStatus::Draft.as_str().to_string()),
            security_level: ActiveValue::Set(params.security_level.as_str().to_string()),
            department_id: ActiveValue::Set(params.department_id),
            created_by: ActiveValue::Set(params.created_by),
            deadline: ActiveValue::Set(params.deadline),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.insert_details(entity.id, &params.details).await?;

        self.hydrate_one(entity).await
    }

    /// Gets a document by ID with its details.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Document>, DbErr> {
        match entity::prelude::Document::find_by_id(id).one(self.db).await? {
            Some(entity) => self.hydrate_one(entity).await.map(Some),
            None => Ok(None),
        }
    }

    /// Gets documents matching `filter`, newest first.
    ///
    /// # Returns
    /// - `Ok((documents, total))` - Documents for the requested page and total match count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        filter: &DocumentFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Document>, u64), DbErr> {
        let mut query = entity::prelude::Document::find();

        if let Some(kind) = filter.kind {
            query = query.filter(entity::document::Column::Kind.eq(kind.as_str()));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::document::Column::Status.eq(status.as_str()));
        }
        if let Some(department_id) = filter.department_id {
            query = query.filter(entity::document::Column::DepartmentId.eq(department_id));
        }
        if let Some(search) = filter.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                query = query.filter(
                    Condition::any()
                        .add(entity::document::Column::Title.contains(search))
                        .add(entity::document::Column::RegistrationNumber.contains(search)),
                );
            }
        }
        if let Some(department_id) = filter.visible_to_department {
            query = query.filter(
                Condition::any()
                    .add(entity::document::Column::DepartmentId.eq(department_id))
                    .add(
                        entity::document::Column::Id
                            .in_subquery(assigned_document_ids(department_id)),
                    ),
            );
        }

        let paginator = newest_first(query).paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((self.hydrate(entities).await?, total))
    }

    /// Gets the newest `limit` documents owned by a department and the total owned count.
    pub async fn get_owned_leading(
        &self,
        department_id: i32,
        limit: u64,
    ) -> Result<(Vec<Document>, u64), DbErr> {
        let query = entity::prelude::Document::find()
            .filter(entity::document::Column::DepartmentId.eq(department_id));

        self.leading(query, limit).await
    }

    /// Gets the newest `limit` documents assigned to a department and the total assigned count.
    pub async fn get_assigned_leading(
        &self,
        department_id: i32,
        limit: u64,
    ) -> Result<(Vec<Document>, u64), DbErr> {
        let query = entity::prelude::Document::find()
            .filter(entity::document::Column::Id.in_subquery(assigned_document_ids(department_id)));

        self.leading(query, limit).await
    }

    /// Replaces a document's editable content and detail row.
    ///
    /// # Returns
    /// - `Ok(Document)` - The updated document
    /// - `Err(DbErr::RecordNotFound)` - No document with that ID
    pub async fn update(&self, id: i32, params: UpdateDocumentParams) -> Result<Document, DbErr> {
        let entity = self.find_entity(id).await?;

        let mut active_model: entity::document::ActiveModel = entity.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.summary = ActiveValue::Set(params.summary);
        active_model.security_level = ActiveValue::Set(params.security_level.as_str().to_string());
        active_model.deadline = ActiveValue::Set(params.deadline);
        active_model.updated_at = ActiveValue::Set(Utc::now());
        let entity = active_model.update(self.db).await?;

        self.delete_details(id).await?;
        self.insert_details(id, &params.details).await?;

        self.hydrate_one(entity).await
    }

    /// Deletes a document. Detail rows, assignments and history cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Document::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Moves a document from `from` to `to` and bumps `updated_at`.
    ///
    /// The update only matches while the stored status is still `from`, so of two
    /// writers racing on the same transition only one changes the row.
    ///
    /// # Returns
    /// - `Ok(Some(Document))` - The document after the change
    /// - `Ok(None)` - No document with that ID is in status `from`
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status(
        &self,
        id: i32,
        from: DocumentStatus,
        to: DocumentStatus,
    ) -> Result<Option<Document>, DbErr> {
        let result = entity::prelude::Document::update_many()
            .col_expr(entity::document::Column::Status, Expr::value(to.as_str()))
            .col_expr(entity::document::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::document::Column::Id.eq(id))
            .filter(entity::document::Column::Status.eq(from.as_str()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Stores the registration number of a document.
    pub async fn set_registration_number(&self, id: i32, number: &str) -> Result<(), DbErr> {
        let entity = self.find_entity(id).await?;

        let mut active_model: entity::document::ActiveModel = entity.into();
        active_model.registration_number = ActiveValue::Set(Some(number.to_string()));
        active_model.update(self.db).await?;

        Ok(())
    }

    /// Sets `received_at` on an incoming document's details if it is still empty.
    pub async fn mark_received(&self, id: i32, at: DateTime<Utc>) -> Result<(), DbErr> {
        if let Some(row) = entity::prelude::IncomingDocument::find_by_id(id)
            .one(self.db)
            .await?
        {
            if row.received_at.is_none() {
                let mut active_model: entity::incoming_document::ActiveModel = row.into();
                active_model.received_at = ActiveValue::Set(Some(at));
                active_model.update(self.db).await?;
            }
        }

        Ok(())
    }

    /// Sets `sent_at` on an outgoing document's details.
    pub async fn mark_sent(&self, id: i32, at: DateTime<Utc>) -> Result<(), DbErr> {
        let row = entity::prelude::OutgoingDocument::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("OUTGOING details for document {} not found", id))
            })?;

        let mut active_model: entity::outgoing_document::ActiveModel = row.into();
        active_model.sent_at = ActiveValue::Set(Some(at));
        active_model.update(self.db).await?;

        Ok(())
    }

    pub async fn registration_number_exists(&self, number: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Document::find()
            .filter(entity::document::Column::RegistrationNumber.eq(number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns the next free sequence number for `{prefix}-{year}-` registration numbers.
    ///
    /// Scans existing numbers with the same prefix and year and returns one past the
    /// highest numeric suffix, starting at 1.
    pub async fn next_registration_sequence(
        &self,
        kind: DocumentKind,
        year: i32,
    ) -> Result<u32, DbErr> {
        let prefix = format!("{}-{}-", kind.registration_prefix(), year);

        let numbers: Vec<Option<String>> = entity::prelude::Document::find()
            .select_only()
            .column(entity::document::Column::RegistrationNumber)
            .filter(entity::document::Column::RegistrationNumber.starts_with(&prefix))
            .into_tuple::<Option<String>>()
            .all(self.db)
            .await?;

        let highest = numbers
            .into_iter()
            .flatten()
            .filter_map(|number| number.strip_prefix(&prefix)?.parse::<u32>().ok())
            .max()
            .unwrap_or(0);

        Ok(highest + 1)
    }

    /// Gets non-final documents whose deadline falls within `[from, to]`.
    pub async fn get_open_with_deadline_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Document>, DbErr> {
        let entities = open_documents()
            .filter(entity::document::Column::Deadline.gte(from))
            .filter(entity::document::Column::Deadline.lte(to))
            .order_by_asc(entity::document::Column::Deadline)
            .all(self.db)
            .await?;

        self.hydrate(entities).await
    }

    /// Gets non-final documents whose deadline is before `now`.
    pub async fn get_open_overdue(&self, now: DateTime<Utc>) -> Result<Vec<Document>, DbErr> {
        let entities = open_documents()
            .filter(entity::document::Column::Deadline.lt(now))
            .order_by_asc(entity::document::Column::Deadline)
            .all(self.db)
            .await?;

        self.hydrate(entities).await
    }

    /// Checks whether a department owns the document or has been assigned it.
    pub async fn is_visible_to_department(
        &self,
        id: i32,
        department_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Document::find_by_id(id)
            .filter(
                Condition::any()
                    .add(entity::document::Column::DepartmentId.eq(department_id))
                    .add(
                        entity::document::Column::Id
                            .in_subquery(assigned_document_ids(department_id)),
                    ),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    async fn find_entity(&self, id: i32) -> Result<entity::document::Model, DbErr> {
        entity::prelude::Document::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Document with id {} not found", id)))
    }

    async fn leading(
        &self,
        query: Select<entity::document::Entity>,
        limit: u64,
    ) -> Result<(Vec<Document>, u64), DbErr> {
        let total = query.clone().count(self.db).await?;
        let entities = newest_first(query).limit(limit).all(self.db).await?;

        Ok((self.hydrate(entities).await?, total))
    }

    async fn insert_details(&self, id: i32, details: &DocumentDetails) -> Result<(), DbErr> {
        match details.clone() {
            DocumentDetails::Incoming {
                sender_organization,
                sender_reference,
                received_at,
            } => {
                entity::incoming_document::ActiveModel {
                    document_id: ActiveValue::Set(id),
                    sender_organization: ActiveValue::Set(sender_organization),
                    sender_reference: ActiveValue::Set(sender_reference),
                    received_at: ActiveValue::Set(received_at),
                }
                .insert(self.db)
                .await?;
            }
            DocumentDetails::Outgoing {
                recipient_organization,
                signed_by,
                sent_at,
            } => {
                entity::outgoing_document::ActiveModel {
                    document_id: ActiveValue::Set(id),
                    recipient_organization: ActiveValue::Set(recipient_organization),
                    signed_by: ActiveValue::Set(signed_by),
                    sent_at: ActiveValue::Set(sent_at),
                }
                .insert(self.db)
                .await?;
            }
            DocumentDetails::Internal {
                target_department_id,
                urgent,
            } => {
                entity::internal_document::ActiveModel {
                    document_id: ActiveValue::Set(id),
                    target_department_id: ActiveValue::Set(target_department_id),
                    urgent: ActiveValue::Set(urgent),
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }

    async fn delete_details(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::IncomingDocument::delete_by_id(id)
            .exec(self.db)
            .await?;
        entity::prelude::OutgoingDocument::delete_by_id(id)
            .exec(self.db)
            .await?;
        entity::prelude::InternalDocument::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn hydrate_one(&self, entity: entity::document::Model) -> Result<Document, DbErr> {
        let id = entity.id;

        self.hydrate(vec![entity])
            .await?
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound(format!("Document with id {} not found", id)))
    }

    /// Loads detail rows for a batch of documents and converts them to domain models,
    /// preserving the input order.
    async fn hydrate(&self, entities: Vec<entity::document::Model>) -> Result<Vec<Document>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = entities.iter().map(|d| d.id).collect();

        let mut incoming: HashMap<i32, entity::incoming_document::Model> =
            entity::prelude::IncomingDocument::find()
                .filter(entity::incoming_document::Column::DocumentId.is_in(ids.clone()))
                .all(self.db)
                .await?
                .into_iter()
                .map(|row| (row.document_id, row))
                .collect();
        let mut outgoing: HashMap<i32, entity::outgoing_document::Model> =
            entity::prelude::OutgoingDocument::find()
                .filter(entity::outgoing_document::Column::DocumentId.is_in(ids.clone()))
                .all(self.db)
                .await?
                .into_iter()
                .map(|row| (row.document_id, row))
                .collect();
        let mut internal: HashMap<i32, entity::internal_document::Model> =
            entity::prelude::InternalDocument::find()
                .filter(entity::internal_document::Column::DocumentId.is_in(ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|row| (row.document_id, row))
                .collect();

        entities
            .into_iter()
            .map(|entity| {
                let rows = DetailRows {
                    incoming: incoming.remove(&entity.id),
                    outgoing: outgoing.remove(&entity.id),
                    internal: internal.remove(&entity.id),
                };
                Document::from_entity(entity, rows)
            })
            .collect()
    }
}

fn newest_first(query: Select<entity::document::Entity>) -> Select<entity::document::Entity> {
    query
        .order_by_desc(entity::document::Column::CreatedAt)
        .order_by_desc(entity::document::Column::Id)
}

fn open_documents() -> Select<entity::document::Entity> {
    let final_statuses: Vec<&str> = DocumentStatus::ALL
        .iter()
        .filter(|status| status.is_final())
        .map(|status| status.as_str())
        .collect();

    entity::prelude::Document::find()
        .filter(entity::document::Column::Deadline.is_not_null())
        .filter(entity::document::Column::Status.is_not_in(final_statuses))
}

fn assigned_document_ids(department_id: i32) -> SelectStatement {
    Query::select()
        .column(entity::document_assignment::Column::DocumentId)
        .from(entity::document_assignment::Entity)
        .and_where(entity::document_assignment::Column::DepartmentId.eq(department_id))
        .to_owned()
}
