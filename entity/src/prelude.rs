pub use super::department::Entity as Department;
pub use super::document::Entity as Document;
pub use super::document_assignment::Entity as DocumentAssignment;
pub use super::document_history::Entity as DocumentHistory;
pub use super::equipment::Entity as Equipment;
pub use super::incoming_document::Entity as IncomingDocument;
pub use super::internal_document::Entity as InternalDocument;
pub use super::notification::Entity as Notification;
pub use super::outgoing_document::Entity as OutgoingDocument;
pub use super::role::Entity as Role;
pub use super::schedule::Entity as Schedule;
pub use super::user::Entity as User;
pub use super::user_role::Entity as UserRole;
pub use super::work_plan::Entity as WorkPlan;
