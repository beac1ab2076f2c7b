use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        document::{DocumentStatus, HistoryAction},
        user::RoleKind,
    },
    server::{
        data::{
            department::DepartmentRepository,
            document::{
                assignment::DocumentAssignmentRepository, history::DocumentHistoryRepository,
                DocumentRepository,
            },
            user::UserRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            document::{
                CreateDocumentParams, Document, DocumentDetails, DocumentFilter,
                DocumentWithRelations, HistoryEntry, NewHistoryEntry, UpdateDocumentParams,
            },
            page::Page,
            user::User,
        },
        util::pagination::{check_window, merge_pages, merged_rows, PageSource},
    },
};

/// Which documents a user may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentScope {
    /// Admins, registrars and commanders see every document.
    All,
    /// Executors see documents owned by or assigned to their department.
    Department(i32),
}

impl DocumentScope {
    /// Resolves the scope of a user.
    ///
    /// # Returns
    /// - `Ok(DocumentScope)` - The user's scope
    /// - `Err(AppError::AuthErr(AccessDenied))` - User has no document role, or is an
    ///   executor without a department
    pub fn for_user(user: &User) -> Result<Self, AppError> {
        if user.is_admin() || user.has_role(RoleKind::Registrar) || user.has_role(RoleKind::Commander)
        {
            return Ok(Self::All);
        }

        match (user.has_role(RoleKind::Executor), user.department_id) {
            (true, Some(department_id)) => Ok(Self::Department(department_id)),
            _ => Err(AuthError::AccessDenied(
                user.id,
                "User has no access to documents".to_string(),
            )
            .into()),
        }
    }
}

pub struct DocumentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a draft document and its CREATED history row.
    ///
    /// # Returns
    /// - `Ok(Document)` - The created draft
    /// - `Err(AppError::BadRequest)` - Blank title or unknown (target) department
    /// - `Err(AppError::AuthErr)` - Executor creating a document for another department
    pub async fn create(&self, actor: &User, params: CreateDocumentParams) -> Result<Document, AppError> {
        if let DocumentScope::Department(department_id) = DocumentScope::for_user(actor)? {
            if department_id != params.department_id {
                return Err(AuthError::AccessDenied(
                    actor.id,
                    format!("Cannot create documents for department {}", params.department_id),
                )
                .into());
            }
        }
        if params.title.trim().is_empty() {
            return Err(AppError::BadRequest("Document title is required".to_string()));
        }
        self.validate_department(params.department_id).await?;
        self.validate_details(&params.details).await?;

        let txn = self.db.begin().await?;

        let document = DocumentRepository::new(&txn).create(params).await?;
        DocumentHistoryRepository::new(&txn)
            .create(
                document.id,
                NewHistoryEntry {
                    action: HistoryAction::Created,
                    from_status: None,
                    to_status: DocumentStatus::Draft,
                    user_id: actor.id,
                    department_id: actor.department_id,
                    comment: None,
                },
            )
            .await?;

        txn.commit().await?;
        tracing::info!("User {} created {} document {}", actor.id, document.kind.as_str(), document.id);

        Ok(document)
    }

    /// Gets a document visible to the actor, with its assignments and history.
    pub async fn get_by_id(&self, actor: &User, id: i32) -> Result<DocumentWithRelations, AppError> {
        let document = self.get_visible(actor, id).await?;

        let assignments = DocumentAssignmentRepository::new(self.db)
            .get_by_document(id)
            .await?;
        let history = DocumentHistoryRepository::new(self.db)
            .get_by_document(id)
            .await?;

        Ok(DocumentWithRelations {
            document,
            assignments,
            history,
        })
    }

    /// Lists documents newest first, restricted to what the actor may see.
    pub async fn get_paginated(
        &self,
        actor: &User,
        mut filter: DocumentFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Document>, AppError> {
        check_window(page, per_page)?;
        if let DocumentScope::Department(department_id) = DocumentScope::for_user(actor)? {
            filter.visible_to_department = Some(department_id);
        }

        let (items, total) = DocumentRepository::new(self.db)
            .get_paginated(&filter, page, per_page)
            .await?;

        Ok(Page::new(items, total, page, per_page))
    }

    /// Lists the documents a department owns together with those assigned to it.
    ///
    /// Both sets are fetched newest first up to the requested page and merged in memory.
    ///
    /// # Returns
    /// - `Ok(Page<Document>)` - Merged page
    /// - `Err(AppError::BadRequest)` - Page lies past the merged listing's range
    /// - `Err(AppError::NotFound)` - No department with that ID
    /// - `Err(AppError::AuthErr)` - Executor asking for another department
    pub async fn list_for_department(
        &self,
        actor: &User,
        department_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Document>, AppError> {
        if let DocumentScope::Department(own) = DocumentScope::for_user(actor)? {
            if own != department_id {
                return Err(AuthError::AccessDenied(
                    actor.id,
                    format!("Cannot list documents of department {}", department_id),
                )
                .into());
            }
        }
        if !DepartmentRepository::new(self.db).exists(department_id).await? {
            return Err(AppError::NotFound(format!(
                "Department {} not found",
                department_id
            )));
        }

        let limit = merged_rows(page, per_page)?;
        let repo = DocumentRepository::new(self.db);

        let (owned, owned_total) = repo.get_owned_leading(department_id, limit).await?;
        let (assigned, assigned_total) = repo.get_assigned_leading(department_id, limit).await?;

        Ok(merge_pages(
            PageSource::new(owned, owned_total),
            PageSource::new(assigned, assigned_total),
            |document: &Document| (document.created_at, document.id),
            page,
            per_page,
        ))
    }

    /// Edits a document's content while it is still a draft or freshly registered.
    ///
    /// # Returns
    /// - `Ok(Document)` - The updated document
    /// - `Err(AppError::Conflict)` - Document is past REGISTERED
    /// - `Err(AppError::BadRequest)` - Blank title or details of a different kind
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        params: UpdateDocumentParams,
    ) -> Result<Document, AppError> {
        let document = self.get_visible(actor, id).await?;

        if !document.status.is_editable() {
            return Err(AppError::Conflict(format!(
                "Document {} can no longer be edited in status {}",
                id,
                document.status.display_name()
            )));
        }
        if params.details.kind() != document.kind {
            return Err(AppError::BadRequest(format!(
                "Details of kind {} do not match document kind {}",
                params.details.kind().as_str(),
                document.kind.as_str()
            )));
        }
        if params.title.trim().is_empty() {
            return Err(AppError::BadRequest("Document title is required".to_string()));
        }
        self.validate_details(&params.details).await?;

        let txn = self.db.begin().await?;

        let updated = DocumentRepository::new(&txn).update(id, params).await?;
        DocumentHistoryRepository::new(&txn)
            .create(
                id,
                NewHistoryEntry {
                    action: HistoryAction::Updated,
                    from_status: Some(document.status),
                    to_status: document.status,
                    user_id: actor.id,
                    department_id: actor.department_id,
                    comment: None,
                },
            )
            .await?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Deletes a draft document.
    ///
    /// # Returns
    /// - `Ok(())` - Document deleted
    /// - `Err(AppError::Conflict)` - Document is no longer a draft
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let document = self.get_visible(actor, id).await?;

        if document.status != DocumentStatus::Draft {
            return Err(AppError::Conflict(format!(
                "Only drafts can be deleted, document {} is {}",
                id,
                document.status.display_name()
            )));
        }

        DocumentRepository::new(self.db).delete(id).await?;
        tracing::info!("User {} deleted draft document {}", actor.id, id);

        Ok(())
    }

    /// Gets the history of a visible document, oldest entry first.
    pub async fn history(&self, actor: &User, id: i32) -> Result<Vec<HistoryEntry>, AppError> {
        self.get_visible(actor, id).await?;

        Ok(DocumentHistoryRepository::new(self.db)
            .get_by_document(id)
            .await?)
    }

    /// Loads a document and checks that the actor may see it.
    ///
    /// # Returns
    /// - `Ok(Document)` - The document
    /// - `Err(AppError::NotFound)` - No document with that ID
    /// - `Err(AppError::AuthErr)` - Document outside the actor's scope
    pub async fn get_visible(&self, actor: &User, id: i32) -> Result<Document, AppError> {
        let scope = DocumentScope::for_user(actor)?;
        let repo = DocumentRepository::new(self.db);

        let document = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Document {} not found", id)))?;

        if let DocumentScope::Department(department_id) = scope {
            if !repo.is_visible_to_department(id, department_id).await? {
                return Err(AuthError::AccessDenied(
                    actor.id,
                    format!("Document {} is outside department {}", id, department_id),
                )
                .into());
            }
        }

        Ok(document)
    }

    /// Active users of the owning department and of every assigned department.
    pub async fn stakeholders(&self, document: &Document) -> Result<Vec<i32>, AppError> {
        let mut department_ids: Vec<i32> = DocumentAssignmentRepository::new(self.db)
            .get_by_document(document.id)
            .await?
            .into_iter()
            .map(|assignment| assignment.department_id)
            .collect();
        department_ids.push(document.department_id);
        department_ids.sort_unstable();
        department_ids.dedup();

        Ok(UserRepository::new(self.db)
            .get_active_ids_by_departments(&department_ids)
            .await?)
    }

    async fn validate_department(&self, department_id: i32) -> Result<(), AppError> {
        if !DepartmentRepository::new(self.db).exists(department_id).await? {
            return Err(AppError::BadRequest(format!(
                "Department {} does not exist",
                department_id
            )));
        }

        Ok(())
    }

    async fn validate_details(&self, details: &DocumentDetails) -> Result<(), AppError> {
        match details {
            DocumentDetails::Incoming {
                sender_organization,
                ..
            } if sender_organization.trim().is_empty() => Err(AppError::BadRequest(
                "Sender organization is required".to_string(),
            )),
            DocumentDetails::Outgoing {
                recipient_organization,
                ..
            } if recipient_organization.trim().is_empty() => Err(AppError::BadRequest(
                "Recipient organization is required".to_string(),
            )),
            DocumentDetails::Internal {
                target_department_id,
                ..
            } => self.validate_department(*target_department_id).await,
            _ => Ok(()),
        }
    }
}
