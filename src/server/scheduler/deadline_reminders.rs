use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    model::notification::NotificationKind,
    server::{
        config::Config,
        data::{document::DocumentRepository, notification::NotificationRepository},
        error::AppError,
        model::{document::Document, notification::NewNotification},
        service::{
            document::DocumentService,
            notification::{hub::NotificationHub, NotificationService},
        },
    },
};

/// Starts the deadline reminder scheduler.
///
/// The job runs on `REMINDER_CRON` and makes two passes over open documents:
/// - Deadlines within the next `DEADLINE_REMINDER_HOURS` get a DEADLINE_APPROACHING reminder
/// - Deadlines already in the past get a DEADLINE_OVERDUE reminder
///
/// # Arguments
/// - `db` - Database connection
/// - `hub` - Live notification hub
/// - `config` - Supplies the cron expression and reminder window
pub async fn start_scheduler(
    db: DatabaseConnection,
    hub: NotificationHub,
    config: &Config,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;
    let window = Duration::hours(config.deadline_reminder_hours);

    let job = Job::new_async(config.reminder_cron.as_str(), move |_uuid, _lock| {
        let db = db.clone();
        let hub = hub.clone();

        Box::pin(async move {
            let sent = process_deadline_reminders(&db, &hub, window, Utc::now()).await;
            if sent.total() > 0 {
                tracing::info!(
                    "Sent {} approaching and {} overdue deadline reminders",
                    sent.approaching,
                    sent.overdue
                );
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Deadline reminder scheduler started ({})",
        config.reminder_cron
    );

    Ok(scheduler)
}

/// Number of reminders created by one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReminderCounts {
    pub approaching: usize,
    pub overdue: usize,
}

impl ReminderCounts {
    pub fn total(&self) -> usize {
        self.approaching + self.overdue
    }
}

/// Runs both reminder passes once.
///
/// A failing pass is logged and does not stop the other one.
pub async fn process_deadline_reminders(
    db: &DatabaseConnection,
    hub: &NotificationHub,
    window: Duration,
    now: DateTime<Utc>,
) -> ReminderCounts {
    let repo = DocumentRepository::new(db);
    let mut counts = ReminderCounts::default();

    match repo.get_open_with_deadline_between(now, now + window).await {
        Ok(documents) => {
            counts.approaching =
                remind_all(db, hub, &documents, NotificationKind::DeadlineApproaching).await;
        }
        Err(e) => tracing::error!("Failed to load documents with approaching deadlines: {}", e),
    }

    match repo.get_open_overdue(now).await {
        Ok(documents) => {
            counts.overdue = remind_all(db, hub, &documents, NotificationKind::DeadlineOverdue).await;
        }
        Err(e) => tracing::error!("Failed to load overdue documents: {}", e),
    }

    counts
}

async fn remind_all(
    db: &DatabaseConnection,
    hub: &NotificationHub,
    documents: &[Document],
    kind: NotificationKind,
) -> usize {
    let mut sent = 0;

    for document in documents {
        match remind(db, hub, document, kind).await {
            Ok(count) => sent += count,
            Err(e) => tracing::error!(
                "Failed to send {} reminder for document {}: {}",
                kind.as_str(),
                document.id,
                e
            ),
        }
    }

    sent
}

/// Notifies the document's stakeholders who have not had this kind of reminder yet.
async fn remind(
    db: &DatabaseConnection,
    hub: &NotificationHub,
    document: &Document,
    kind: NotificationKind,
) -> Result<usize, AppError> {
    let already_notified = NotificationRepository::new(db)
        .get_recipients_for_document(kind, document.id)
        .await?;

    let recipients: Vec<i32> = DocumentService::new(db)
        .stakeholders(document)
        .await?
        .into_iter()
        .filter(|user_id| !already_notified.contains(user_id))
        .collect();

    if recipients.is_empty() {
        return Ok(0);
    }

    let notification = reminder(document, kind).with_document(document.id);
    let created = NotificationService::new(db, hub)
        .notify(&recipients, notification)
        .await?;

    Ok(created.len())
}

fn reminder(document: &Document, kind: NotificationKind) -> NewNotification {
    let label = document
        .registration_number
        .as_deref()
        .unwrap_or(document.title.as_str());
    let deadline = document
        .deadline
        .map(|d| d.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_default();

    match kind {
        NotificationKind::DeadlineOverdue => NewNotification::new(
            kind,
            "Deadline overdue",
            format!("Document {} was due {}", label, deadline),
        ),
        _ => NewNotification::new(
            kind,
            "Deadline approaching",
            format!("Document {} is due {}", label, deadline),
        ),
    }
}
