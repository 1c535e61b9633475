use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::http::HeaderValue;

const DEFAULT_RESUME_PATH: &str = "attached_assets/Resume_Dhananjay_Dadheech.pdf";

/// Application configuration loaded from environment variables.
/// Everything has a default except the optional database and content overrides.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres URL. When unset, submissions are kept in process memory.
    pub database_url: Option<String>,
    pub resume_path: PathBuf,
    /// `Content-Disposition` for the résumé download, built from `RESUME_FILENAME`.
    pub resume_disposition: HeaderValue,
    /// JSON content bundle replacing the one compiled into the binary.
    pub content_path: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. An empty or whitespace-only
    /// value is treated the same as an unset one.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let optional = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let resume_path = optional("RESUME_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESUME_PATH));
        let resume_filename = match optional("RESUME_FILENAME") {
            Some(name) => name,
            None => file_name_of(&resume_path)?,
        };

        Ok(Config {
            database_url: optional("DATABASE_URL"),
            resume_disposition: attachment_disposition(&resume_filename)?,
            resume_path,
            content_path: optional("CONTENT_PATH").map(PathBuf::from),
            port: optional("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn file_name_of(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .with_context(|| format!("RESUME_PATH '{}' has no file name", path.display()))
}

fn attachment_disposition(filename: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(&format!("attachment; filename={filename}")).with_context(|| {
        format!("RESUME_FILENAME {filename:?} is not valid in a Content-Disposition header")
    })
}

#[cfg(test)]
impl Config {
    /// Config pointing at the given résumé file, with no database or overrides.
    pub fn for_tests(resume_path: impl Into<PathBuf>) -> Self {
        Config {
            database_url: None,
            resume_path: resume_path.into(),
            resume_disposition: HeaderValue::from_static(
                "attachment; filename=Resume_Dhananjay_Dadheech.pdf",
            ),
            content_path: None,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.database_url.is_none());
        assert!(config.content_path.is_none());
        assert_eq!(config.resume_path, PathBuf::from(DEFAULT_RESUME_PATH));
        assert_eq!(
            config.resume_disposition,
            "attachment; filename=Resume_Dhananjay_Dadheech.pdf"
        );
    }

    #[test]
    fn test_non_numeric_port_fails_with_context() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(format!("{err:#}").contains("PORT must be a valid port number"));
    }

    #[test]
    fn test_out_of_range_port_fails() {
        assert!(config_from(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let config = config_from(&[
            ("DATABASE_URL", ""),
            ("CONTENT_PATH", "   "),
            ("PORT", ""),
            ("RESUME_PATH", " "),
        ])
        .unwrap();
        assert!(config.database_url.is_none());
        assert!(config.content_path.is_none());
        assert_eq!(config.port, 8080);
        assert_eq!(config.resume_path, PathBuf::from(DEFAULT_RESUME_PATH));
    }

    #[test]
    fn test_filename_falls_back_to_resume_path_name() {
        let config = config_from(&[("RESUME_PATH", "/srv/files/cv-2026.pdf")]).unwrap();
        assert_eq!(config.resume_disposition, "attachment; filename=cv-2026.pdf");
    }

    #[test]
    fn test_explicit_filename_wins() {
        let config = config_from(&[
            ("RESUME_PATH", "/srv/files/cv-2026.pdf"),
            ("RESUME_FILENAME", "Jane_Doe.pdf"),
        ])
        .unwrap();
        assert_eq!(config.resume_disposition, "attachment; filename=Jane_Doe.pdf");
    }

    #[test]
    fn test_filename_with_newline_fails_at_load() {
        let err = config_from(&[("RESUME_FILENAME", "bad\nname.pdf")]).unwrap_err();
        assert!(format!("{err:#}").contains("RESUME_FILENAME"));
    }

    #[test]
    fn test_resume_path_without_file_name_fails() {
        assert!(config_from(&[("RESUME_PATH", "/")]).is_err());
    }
}
