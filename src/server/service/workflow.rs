//! Document workflow actions.
//!
//! Every action re-reads the document inside a transaction, checks the transition table
//! against that read, then updates the status and writes its history rows before
//! committing. Notifications go out after the commit and a failure to deliver them does
//! not undo the action.

use chrono::{Datelike, DateTime, Utc};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    model::{
        document::{DocumentKind, DocumentStatus, HistoryAction},
        notification::NotificationKind,
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
        error::AppError,
        model::{
            document::{Document, NewHistoryEntry},
            notification::NewNotification,
            user::User,
        },
        service::{
            document::DocumentService,
            notification::{hub::NotificationHub, NotificationService},
        },
    },
};

/// Statuses reachable through the generic status change action. The others have
/// dedicated actions with extra side effects.
const GENERIC_TARGETS: [DocumentStatus; 5] = [
    DocumentStatus::InProgress,
    DocumentStatus::UnderReview,
    DocumentStatus::Returned,
    DocumentStatus::Executed,
    DocumentStatus::Cancelled,
];

pub struct WorkflowService<'a> {
    db: &'a DatabaseConnection,
    hub: &'a NotificationHub,
}

impl<'a> WorkflowService<'a> {
    pub fn new(db: &'a DatabaseConnection, hub: &'a NotificationHub) -> Self {
        Self { db, hub }
    }

    /// Registers a draft, assigning the given registration number or generating
    /// `{IN|OUT|INT}-{year}-{seq:05}`.
    ///
    /// Incoming documents without a receipt time are marked received now.
    ///
    /// # Returns
    /// - `Ok(Document)` - The registered document
    /// - `Err(AppError::InvalidTransition)` - Document is not a draft
    /// - `Err(AppError::Conflict)` - Registration number already in use
    pub async fn register(
        &self,
        actor: &User,
        id: i32,
        registration_number: Option<String>,
        comment: Option<String>,
    ) -> Result<Document, AppError> {
        self.ensure_visible(actor, id).await?;

        let now = Utc::now();
        let txn = self.db.begin().await?;
        let document = current(&txn, id, DocumentStatus::Registered).await?;
        let repo = DocumentRepository::new(&txn);

        let number = match registration_number.map(|n| n.trim().to_string()) {
            Some(number) if !number.is_empty() => number,
            _ => {
                let sequence = repo
                    .next_registration_sequence(document.kind, now.year())
                    .await?;
                format!(
                    "{}-{}-{:05}",
                    document.kind.registration_prefix(),
                    now.year(),
                    sequence
                )
            }
        };

        if repo.registration_number_exists(&number).await? {
            return Err(AppError::Conflict(format!(
                "Registration number {} is already in use",
                number
            )));
        }

        repo.set_registration_number(id, &number).await?;
        if document.kind == DocumentKind::Incoming {
            repo.mark_received(id, now).await?;
        }

        let registered = transition(
            &txn,
            &document,
            DocumentStatus::Registered,
            HistoryAction::Registered,
            actor,
            comment.or_else(|| Some(number.clone())),
        )
        .await?;

        txn.commit().await?;
        tracing::info!("User {} registered document {} as {}", actor.id, id, number);

        self.notify_stakeholders(actor, &registered).await;

        Ok(registered)
    }

    /// Assigns a document to departments and moves it to DISTRIBUTED.
    ///
    /// Departments that already hold an assignment are not assigned again. One ASSIGNED
    /// history row is written per new department, plus the status change row.
    ///
    /// # Returns
    /// - `Ok(Document)` - The distributed document
    /// - `Err(AppError::BadRequest)` - Empty or unknown department list
    /// - `Err(AppError::InvalidTransition)` - Status does not allow distribution
    pub async fn distribute(
        &self,
        actor: &User,
        id: i32,
        department_ids: Vec<i32>,
        due_date: Option<DateTime<Utc>>,
        comment: Option<String>,
    ) -> Result<Document, AppError> {
        let mut department_ids = department_ids;
        department_ids.sort_unstable();
        department_ids.dedup();

        if department_ids.is_empty() {
            return Err(AppError::BadRequest(
                "At least one department is required".to_string(),
            ));
        }

        let departments = DepartmentRepository::new(self.db);
        for &department_id in &department_ids {
            if !departments.exists(department_id).await? {
                return Err(AppError::BadRequest(format!(
                    "Department {} does not exist",
                    department_id
                )));
            }
        }

        self.ensure_visible(actor, id).await?;

        let txn = self.db.begin().await?;
        let document = current(&txn, id, DocumentStatus::Distributed).await?;
        let assignments = DocumentAssignmentRepository::new(&txn);
        let history = DocumentHistoryRepository::new(&txn);

        let already_assigned: Vec<i32> = assignments
            .get_by_document(id)
            .await?
            .into_iter()
            .map(|assignment| assignment.department_id)
            .collect();
        let new_departments: Vec<i32> = department_ids
            .into_iter()
            .filter(|department_id| !already_assigned.contains(department_id))
            .collect();

        for &department_id in &new_departments {
            assignments
                .create(id, department_id, actor.id, due_date)
                .await?;
            history
                .create(
                    id,
                    NewHistoryEntry {
                        action: HistoryAction::Assigned,
                        from_status: Some(document.status),
                        to_status: DocumentStatus::Distributed,
                        user_id: actor.id,
                        department_id: Some(department_id),
                        comment: comment.clone(),
                    },
                )
                .await?;
        }

        let distributed = transition(
            &txn,
            &document,
            DocumentStatus::Distributed,
            HistoryAction::StatusChanged,
            actor,
            comment,
        )
        .await?;

        txn.commit().await?;
        tracing::info!(
            "User {} distributed document {} to departments {:?}",
            actor.id,
            id,
            new_departments
        );

        match UserRepository::new(self.db)
            .get_active_ids_by_departments(&new_departments)
            .await
        {
            Ok(recipients) => {
                let notification = NewNotification::new(
                    NotificationKind::DocumentAssigned,
                    "Document assigned",
                    format!("{} was assigned to your department", describe(&distributed)),
                )
                .with_document(id);

                if let Err(e) = NotificationService::new(self.db, self.hub)
                    .notify(&recipients, notification)
                    .await
                {
                    tracing::error!("Failed to notify assignees of document {}: {}", id, e);
                }
            }
            Err(e) => tracing::error!("Failed to load assignees of document {}: {}", id, e),
        }

        Ok(distributed)
    }

    /// Moves a document to IN_PROGRESS, UNDER_REVIEW, RETURNED, EXECUTED or CANCELLED.
    ///
    /// EXECUTED completes the assignment of the actor's department. RETURNED requires a
    /// comment explaining what to rework.
    ///
    /// # Returns
    /// - `Ok(Document)` - The updated document
    /// - `Err(AppError::BadRequest)` - Target has a dedicated action, or missing comment
    /// - `Err(AppError::InvalidTransition)` - Transition not allowed from current status
    pub async fn change_status(
        &self,
        actor: &User,
        id: i32,
        target: DocumentStatus,
        comment: Option<String>,
    ) -> Result<Document, AppError> {
        if !GENERIC_TARGETS.contains(&target) {
            return Err(AppError::BadRequest(format!(
                "Status {} must be set through its dedicated action",
                target.as_str()
            )));
        }

        let comment = comment.filter(|c| !c.trim().is_empty());
        if target == DocumentStatus::Returned && comment.is_none() {
            return Err(AppError::BadRequest(
                "A comment is required when returning a document".to_string(),
            ));
        }

        self.ensure_visible(actor, id).await?;

        let txn = self.db.begin().await?;
        let document = current(&txn, id, target).await?;

        if target == DocumentStatus::Executed {
            if let Some(department_id) = actor.department_id {
                DocumentAssignmentRepository::new(&txn)
                    .complete(id, department_id, Utc::now())
                    .await?;
            }
        }

        let updated = transition(
            &txn,
            &document,
            target,
            HistoryAction::StatusChanged,
            actor,
            comment,
        )
        .await?;

        txn.commit().await?;
        tracing::info!(
            "User {} moved document {} from {} to {}",
            actor.id,
            id,
            document.status.as_str(),
            target.as_str()
        );

        self.notify_stakeholders(actor, &updated).await;

        Ok(updated)
    }

    /// Marks an executed outgoing document as sent and records the send time.
    pub async fn send(&self, actor: &User, id: i32, comment: Option<String>) -> Result<Document, AppError> {
        self.ensure_visible(actor, id).await?;

        let txn = self.db.begin().await?;
        let document = current(&txn, id, DocumentStatus::Sent).await?;

        DocumentRepository::new(&txn).mark_sent(id, Utc::now()).await?;
        let sent = transition(
            &txn,
            &document,
            DocumentStatus::Sent,
            HistoryAction::Sent,
            actor,
            comment,
        )
        .await?;

        txn.commit().await?;
        tracing::info!("User {} sent document {}", actor.id, id);

        self.notify_stakeholders(actor, &sent).await;

        Ok(sent)
    }

    /// Archives a document.
    pub async fn archive(
        &self,
        actor: &User,
        id: i32,
        comment: Option<String>,
    ) -> Result<Document, AppError> {
        self.ensure_visible(actor, id).await?;

        let txn = self.db.begin().await?;
        let document = current(&txn, id, DocumentStatus::Archived).await?;
        let archived = transition(
            &txn,
            &document,
            DocumentStatus::Archived,
            HistoryAction::Archived,
            actor,
            comment,
        )
        .await?;
        txn.commit().await?;
        tracing::info!("User {} archived document {}", actor.id, id);

        self.notify_stakeholders(actor, &archived).await;

        Ok(archived)
    }

    async fn ensure_visible(&self, actor: &User, id: i32) -> Result<(), AppError> {
        DocumentService::new(self.db).get_visible(actor, id).await?;

        Ok(())
    }

    /// Sends a STATUS_CHANGED notification to everyone involved except the actor.
    ///
    /// Failures are logged, the workflow action has already been committed.
    async fn notify_stakeholders(&self, actor: &User, document: &Document) {
        let recipients = match DocumentService::new(self.db).stakeholders(document).await {
            Ok(recipients) => recipients,
            Err(e) => {
                tracing::error!("Failed to load stakeholders of document {}: {}", document.id, e);
                return;
            }
        };
        let recipients: Vec<i32> = recipients
            .into_iter()
            .filter(|&user_id| user_id != actor.id)
            .collect();

        let notification = NewNotification::new(
            NotificationKind::StatusChanged,
            "Document status changed",
            format!(
                "{} is now {}",
                describe(document),
                document.status.display_name()
            ),
        )
        .with_document(document.id);

        if let Err(e) = NotificationService::new(self.db, self.hub)
            .notify(&recipients, notification)
            .await
        {
            tracing::error!("Failed to notify stakeholders of document {}: {}", document.id, e);
        }
    }
}

/// Reads the document inside the transaction and checks that `target` is reachable from
/// its committed status.
async fn current(
    txn: &DatabaseTransaction,
    id: i32,
    target: DocumentStatus,
) -> Result<Document, AppError> {
    let document = DocumentRepository::new(txn)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Document {} not found", id)))?;

    if !document.status.can_transition_to(target, document.kind) {
        return Err(AppError::InvalidTransition {
            from: document.status,
            to: target,
        });
    }

    Ok(document)
}

/// Updates the status and writes the matching history row.
///
/// Fails with `InvalidTransition` when the document left `document.status` after it was
/// read.
async fn transition(
    txn: &DatabaseTransaction,
    document: &Document,
    target: DocumentStatus,
    action: HistoryAction,
    actor: &User,
    comment: Option<String>,
) -> Result<Document, AppError> {
    let updated = DocumentRepository::new(txn)
        .set_status(document.id, document.status, target)
        .await?
        .ok_or(AppError::InvalidTransition {
            from: document.status,
            to: target,
        })?;

    DocumentHistoryRepository::new(txn)
        .create(
            document.id,
            NewHistoryEntry {
                action,
                from_status: Some(document.status),
                to_status: target,
                user_id: actor.id,
                department_id: actor.department_id,
                comment,
            },
        )
        .await?;

    Ok(updated)
}

/// Short label for notification messages, preferring the registration number.
fn describe(document: &Document) -> String {
    match &document.registration_number {
        Some(number) => format!("Document {} \"{}\"", number, document.title),
        None => format!("Document \"{}\"", document.title),
    }
}
