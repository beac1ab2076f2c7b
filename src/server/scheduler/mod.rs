//! Background jobs run on a cron schedule.

pub mod deadline_reminders;
