use std::io::ErrorKind;
use std::path::Path;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use tokio::fs::File;
use tokio_util::io::ReaderStream;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::state::AppState;

pub const NOT_FOUND: &str = "Resume file not found";

/// GET /api/download-resume
///
/// Streams the configured file verbatim as a PDF attachment. No range
/// requests and no caching headers.
pub async fn handle_download_resume(State(state): State<AppState>) -> Result<Response, AppError> {
    let (file, len) = open_resume(&state.config.resume_path).await?;

    info!(bytes = len, "Serving resume download");
    let headers = [
        (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
        (header::CONTENT_DISPOSITION, state.config.resume_disposition.clone()),
        (header::CONTENT_LENGTH, HeaderValue::from(len)),
    ];
    Ok((headers, Body::from_stream(ReaderStream::new(file))).into_response())
}

/// Opens the résumé and returns it with its byte length. A missing path, or a
/// path that is not a regular file, is `NotFound`.
async fn open_resume(path: &Path) -> Result<(File, u64), AppError> {
    let file = match File::open(path).await {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "Resume file missing");
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    let metadata = file.metadata().await?;
    if !metadata.is_file() {
        warn!(path = %path.display(), "Resume path is not a regular file");
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }
    Ok((file, metadata.len()))
}
