use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::info;

use crate::content::models::ContentBundle;

/// The bundle compiled into the binary, used unless `CONTENT_PATH` is set.
const EMBEDDED_BUNDLE: &str = include_str!("../../content/portfolio.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content bundle is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("profile name must not be empty")]
    MissingName,

    #[error("duplicate project id {0}")]
    DuplicateProjectId(u32),

    #[error("skill '{name}' has level {level}, expected 0-100")]
    SkillLevelOutOfRange { name: String, level: u8 },
}

/// Loads the content bundle from `path`, or the embedded one when `None`.
/// Called once at startup; any error aborts the process.
pub fn load_bundle(path: Option<&Path>) -> Result<ContentBundle> {
    let bundle = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read content bundle '{}'", path.display()))?;
            parse_bundle(&raw)
                .with_context(|| format!("Invalid content bundle '{}'", path.display()))?
        }
        None => parse_bundle(EMBEDDED_BUNDLE).context("Invalid embedded content bundle")?,
    };

    info!(
        experience = bundle.experience.len(),
        projects = bundle.projects.len(),
        education = bundle.education.len(),
        "Content bundle loaded"
    );
    Ok(bundle)
}

pub fn parse_bundle(raw: &str) -> Result<ContentBundle, ContentError> {
    let bundle: ContentBundle = serde_json::from_str(raw)?;
    validate_bundle(&bundle)?;
    Ok(bundle)
}

fn validate_bundle(bundle: &ContentBundle) -> Result<(), ContentError> {
    if bundle.profile.name.trim().is_empty() {
        return Err(ContentError::MissingName);
    }

    let mut seen = HashSet::new();
    for project in &bundle.projects {
        if !seen.insert(project.id) {
            return Err(ContentError::DuplicateProjectId(project.id));
        }
    }

    let all_skills = bundle
        .skills
        .technical
        .iter()
        .flat_map(|g| g.skills.iter())
        .chain(bundle.skills.analytical.iter());
    for skill in all_skills {
        if skill.level > 100 {
            return Err(ContentError::SkillLevelOutOfRange {
                name: skill.name.clone(),
                level: skill.level,
            });
        }
    }

    Ok(())
}
