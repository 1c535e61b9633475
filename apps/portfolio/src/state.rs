use std::sync::Arc;

use crate::config::Config;
use crate::contact::store::ContactStore;
use crate::content::ContentBundle;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Postgres-backed when `DATABASE_URL` is set, in-memory otherwise.
    pub store: Arc<dyn ContactStore>,
    /// Loaded once at startup and never mutated.
    pub content: Arc<ContentBundle>,
    pub config: Config,
}

#[cfg(test)]
impl AppState {
    /// State over the embedded content bundle with the given store and résumé path.
    pub fn for_tests(store: Arc<dyn ContactStore>, resume_path: impl Into<std::path::PathBuf>) -> Self {
        let content = crate::content::load_bundle(None).expect("embedded bundle is valid");
        AppState {
            store,
            content: Arc::new(content),
            config: Config::for_tests(resume_path),
        }
    }
}
