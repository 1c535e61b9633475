pub mod assets;
pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::contact::handlers::handle_submit_contact;
use crate::resume::handlers::handle_download_resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Page
        .route("/", get(pages::handle_home))
        .route("/projects/:id", get(pages::handle_project))
        .route("/static/site.css", get(assets::site_css))
        .route("/static/site.js", get(assets::site_js))
        // API
        .route("/api/contact", post(handle_submit_contact))
        .route("/api/download-resume", get(handle_download_resume))
        .fallback(pages::handle_not_found)
        .with_state(state)
}
