// Server-side page rendering from the content bundle.
// Sections are a fixed enum; each variant has exactly one renderer.

pub mod escape;
pub mod page;
pub mod sections;

pub use page::{render_home, render_not_found, render_project};
