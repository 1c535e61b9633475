use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored contact-form submission. Never updated or deleted once written.
#[derive(Debug, Clone, FromRow)]
pub struct ContactMessageRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

/// A validated submission awaiting an id from the store.
#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl NewContactMessage {
    pub fn into_row(self, id: Uuid) -> ContactMessageRow {
        ContactMessageRow {
            id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            submitted_at: self.submitted_at,
        }
    }
}
