use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::contact::NewContactMessage;

pub const MISSING_FIELDS: &str = "All fields are required";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Raw contact form payload. Every field is optional here so that a missing
/// field is reported the same way as an empty one.
#[derive(Debug, Default, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// Checks the four required fields and stamps the submission time.
///
/// Fields are trimmed; a field that is absent or blank after trimming fails
/// with `MISSING_FIELDS`. A present email that is not `local@domain.tld`
/// shaped fails with `INVALID_EMAIL`.
pub fn validate_contact(
    req: ContactRequest,
    submitted_at: DateTime<Utc>,
) -> Result<NewContactMessage, AppError> {
    let (Some(name), Some(email), Some(subject), Some(message)) = (
        required(req.name),
        required(req.email),
        required(req.subject),
        required(req.message),
    ) else {
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    };

    if !is_valid_email(&email) {
        return Err(AppError::Validation(INVALID_EMAIL.to_string()));
    }

    Ok(NewContactMessage {
        name,
        email,
        subject,
        message,
        submitted_at,
    })
}

fn required(field: Option<String>) -> Option<String> {
    field
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
