//! Contact message persistence.
//!
//! `AppState` holds an `Arc<dyn ContactStore>`: `PgContactStore` when
//! `DATABASE_URL` is configured, `InMemoryContactStore` otherwise.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::contact::{ContactMessageRow, NewContactMessage};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persists validated contact messages. Implementations assign the id and
/// serialize concurrent writes themselves.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn save(&self, message: NewContactMessage) -> Result<ContactMessageRow, StoreError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Postgres
// ────────────────────────────────────────────────────────────────────────────

pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `contact_messages` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS contact_messages (
                id           UUID PRIMARY KEY,
                name         TEXT NOT NULL,
                email        TEXT NOT NULL,
                subject      TEXT NOT NULL,
                message      TEXT NOT NULL,
                submitted_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        info!("contact_messages table ready");
        Ok(())
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn save(&self, message: NewContactMessage) -> Result<ContactMessageRow, StoreError> {
        let row: ContactMessageRow = sqlx::query_as(
            r#"
            INSERT INTO contact_messages (id, name, email, subject, message, submitted_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, subject, message, submitted_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.subject)
        .bind(&message.message)
        .bind(message.submitted_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

/// Number of in-memory messages after which a warning is logged once.
const IN_MEMORY_WARN_AT: usize = 1_000;

/// Process-local store for development. Messages are lost on restart and the
/// list is never pruned, so production deployments set `DATABASE_URL`.
#[derive(Default)]
pub struct InMemoryContactStore {
    messages: Mutex<Vec<ContactMessageRow>>,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn messages(&self) -> Vec<ContactMessageRow> {
        self.messages.lock().await.clone()
    }
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    async fn save(&self, message: NewContactMessage) -> Result<ContactMessageRow, StoreError> {
        let row = message.into_row(Uuid::new_v4());
        let mut messages = self.messages.lock().await;
        messages.push(row.clone());
        info!(total = messages.len(), "Contact message kept in memory");
        if messages.len() == IN_MEMORY_WARN_AT {
            warn!(
                total = messages.len(),
                "In-memory contact store is growing; configure DATABASE_URL"
            );
        }
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn sample(name: &str) -> NewContactMessage {
        NewContactMessage {
            name: name.into(),
            email: "a@b.com".into(),
            subject: "Hi".into(),
            message: "Hello there".into(),
            submitted_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_save_assigns_id_and_keeps_fields() {
        let store = InMemoryContactStore::new();
        let row = store.save(sample("A")).await.unwrap();
        assert_eq!(row.name, "A");
        assert_eq!(row.email, "a@b.com");

        let all = store.messages().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, row.id);
    }

    #[tokio::test]
    async fn test_concurrent_saves_get_distinct_ids() {
        let store = Arc::new(InMemoryContactStore::new());
        let tasks: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.save(sample(&format!("sender {i}"))).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for task in tasks {
            ids.insert(task.await.unwrap().unwrap().id);
        }
        assert_eq!(ids.len(), 16);
        assert_eq!(store.messages().await.len(), 16);
    }
}
