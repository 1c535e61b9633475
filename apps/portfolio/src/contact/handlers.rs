use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::contact::validation::{validate_contact, ContactRequest};
use crate::errors::AppError;
use crate::state::AppState;

pub const SENT: &str = "Message sent successfully";

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub message: String,
    pub id: Uuid,
}

/// POST /api/contact
pub async fn handle_submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let Json(req) = payload.map_err(|e| {
        warn!("Rejected contact payload: {e}");
        AppError::Validation(format!("Invalid request body: {}", e.body_text()))
    })?;

    // Nothing reaches the store unless all four fields passed
    let message = validate_contact(req, Utc::now())?;
    let saved = state.store.save(message).await?;

    info!(id = %saved.id, "Contact message stored");
    Ok(Json(ContactResponse {
        message: SENT.to_string(),
        id: saved.id,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::contact::store::{ContactStore, InMemoryContactStore, StoreError};
    use crate::contact::validation::MISSING_FIELDS;
    use crate::models::contact::{ContactMessageRow, NewContactMessage};
    use crate::routes::build_router;

    struct FailingStore;

    #[async_trait]
    impl ContactStore for FailingStore {
        async fn save(&self, _: NewContactMessage) -> Result<ContactMessageRow, StoreError> {
            Err(StoreError::Database(sqlx::Error::PoolClosed))
        }
    }

    fn app(store: Arc<dyn ContactStore>) -> Router {
        build_router(AppState::for_tests(store, "/nonexistent/resume.pdf"))
    }

    async fn post(app: Router, body: String) -> (StatusCode, Value) {
        let resp = app
            .oneshot(
                Request::post("/api/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn valid() -> Value {
        json!({"name": "A", "email": "a@b.com", "subject": "Hi", "message": "Hello there"})
    }

    #[tokio::test]
    async fn test_valid_submission_is_stored_once() {
        let store = Arc::new(InMemoryContactStore::new());
        let (status, body) = post(app(store.clone()), valid().to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], SENT);

        let stored = store.messages().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(body["id"], stored[0].id.to_string());
        assert_eq!(stored[0].subject, "Hi");
    }

    #[tokio::test]
    async fn test_missing_or_empty_field_stores_nothing() {
        for field in ["name", "email", "subject", "message"] {
            let store = Arc::new(InMemoryContactStore::new());

            let mut missing = valid();
            missing.as_object_mut().unwrap().remove(field);
            let (status, body) = post(app(store.clone()), missing.to_string()).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "missing {field}");
            assert_eq!(body["message"], MISSING_FIELDS);

            let mut empty = valid();
            empty[field] = json!("");
            let (status, _) = post(app(store.clone()), empty.to_string()).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "empty {field}");

            assert!(store.messages().await.is_empty());
        }
    }

    #[tokio::test]
    async fn test_invalid_email_is_client_error() {
        let store = Arc::new(InMemoryContactStore::new());
        let mut body = valid();
        body["email"] = json!("not-an-email");
        let (status, resp) = post(app(store.clone()), body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(resp["code"], "VALIDATION_ERROR");
        assert!(store.messages().await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_is_client_error() {
        let store = Arc::new(InMemoryContactStore::new());
        let (status, _) = post(app(store.clone()), "{\"name\":".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(store.messages().await.is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_is_server_error() {
        let (status, body) = post(app(Arc::new(FailingStore)), valid().to_string()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Failed to send message");
    }

    #[tokio::test]
    async fn test_concurrent_submissions_get_distinct_ids() {
        let store = Arc::new(InMemoryContactStore::new());
        let router = app(store.clone());

        let (a, b) = tokio::join!(
            post(router.clone(), valid().to_string()),
            post(router.clone(), valid().to_string())
        );
        assert_eq!(a.0, StatusCode::OK);
        assert_eq!(b.0, StatusCode::OK);
        assert_ne!(a.1["id"], b.1["id"]);
        assert_eq!(store.messages().await.len(), 2);
    }
}
