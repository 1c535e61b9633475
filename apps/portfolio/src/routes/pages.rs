use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::{Datelike, Utc};

use crate::errors::AppError;
use crate::render::{render_home, render_not_found, render_project};
use crate::state::AppState;

fn current_year() -> i32 {
    Utc::now().year()
}

/// GET /
pub async fn handle_home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = render_home(&state.content, current_year()).context("Failed to render home page")?;
    Ok(Html(html))
}

/// GET /projects/:id
///
/// A non-numeric or unknown id gets the not-found page.
pub async fn handle_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let project = id.parse::<u32>().ok().and_then(|id| state.content.project(id));
    let Some(project) = project else {
        return not_found_page(&state);
    };
    let html = render_project(&state.content, project, current_year())
        .context("Failed to render project page")?;
    Ok(Html(html).into_response())
}

/// Fallback for any unrouted path.
pub async fn handle_not_found(State(state): State<AppState>) -> Result<Response, AppError> {
    not_found_page(&state)
}

fn not_found_page(state: &AppState) -> Result<Response, AppError> {
    let html = render_not_found(&state.content, current_year())
        .context("Failed to render not-found page")?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}
