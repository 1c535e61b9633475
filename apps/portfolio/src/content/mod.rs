// Static content bundle: profile, experience, skills, projects, education.
// Loaded once at startup and shared read-only through AppState.

pub mod loader;
pub mod models;

pub use loader::load_bundle;
pub use models::ContentBundle;
