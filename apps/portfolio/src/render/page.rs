use std::fmt::{self, Write};

use crate::content::models::{ContentBundle, Project};
use crate::render::escape::Escaped;
use crate::render::sections::{project_details, project_icon, Section};

/// Renders the single-page site: header, every section in order, footer.
pub fn render_home(bundle: &ContentBundle, year: i32) -> Result<String, fmt::Error> {
    let mut out = String::with_capacity(64 * 1024);
    let title = format!("{} | {}", bundle.profile.name, bundle.profile.title);

    open_document(&mut out, &title, bundle)?;
    out.push_str("<main>");
    for section in Section::ALL {
        section.render(&mut out, bundle)?;
    }
    out.push_str("</main>");
    close_document(&mut out, bundle, year)?;
    Ok(out)
}

/// Standalone detail view for one project (challenge, solution, impact).
pub fn render_project(bundle: &ContentBundle, project: &Project, year: i32) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let title = format!("{} | {}", project.title, bundle.profile.name);

    open_document(&mut out, &title, bundle)?;
    out.push_str(r#"<main><section id="project-detail"><div class="container narrow"><article class="card">"#);
    out.push_str(r#"<div class="project-icon">"#);
    project_icon(&mut out, project)?;
    write!(out, "</div><h2>{}</h2>", Escaped(&project.title))?;
    project_details(&mut out, project)?;
    out.push_str(r##"<a class="button primary-bg" href="/#projects">Back to projects</a></article></div></section></main>"##);
    close_document(&mut out, bundle, year)?;
    Ok(out)
}

pub fn render_not_found(bundle: &ContentBundle, year: i32) -> Result<String, fmt::Error> {
    let mut out = String::new();
    open_document(&mut out, "Page not found", bundle)?;
    out.push_str(
        r#"<main><section id="not-found"><div class="container narrow"><h2>404 Page Not Found</h2><p>The page you are looking for does not exist.</p><a class="button primary-bg" href="/">Go home</a></div></section></main>"#,
    );
    close_document(&mut out, bundle, year)?;
    Ok(out)
}

fn open_document(out: &mut String, title: &str, bundle: &ContentBundle) -> fmt::Result {
    write!(
        out,
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><meta name="description" content="{}"><title>{}</title><link rel="stylesheet" href="/static/site.css"></head><body>"#,
        Escaped(&bundle.profile.summary),
        Escaped(title)
    )?;
    write!(
        out,
        r#"<header class="site-header"><nav class="container"><a class="brand" href="/">{}</a><ul class="nav">"#,
        Escaped(&bundle.profile.name)
    )?;
    for section in Section::ALL {
        write!(out, r##"<li><a href="/#{}">{}</a></li>"##, section.id(), section.nav_label())?;
    }
    out.push_str("</ul></nav></header>");
    Ok(())
}

fn close_document(out: &mut String, bundle: &ContentBundle, year: i32) -> fmt::Result {
    out.push_str(
        r#"<footer class="site-footer"><div class="container"><a class="button outline-dark" href="/api/download-resume" download>Download Resume</a>"#,
    );
    write!(
        out,
        r#"<p>&copy; {year} {}. All rights reserved.</p><nav class="footer-nav">"#,
        Escaped(&bundle.profile.name)
    )?;

    let links: Vec<String> = Section::ALL
        .into_iter()
        .filter(|s| s.in_footer())
        .map(|s| format!(r##"<a href="/#{}">{}</a>"##, s.id(), s.nav_label()))
        .collect();
    out.push_str(&links.join(r#"<span class="sep">&bull;</span>"#));

    out.push_str(r#"</nav></div></footer><script src="/static/site.js" defer></script></body></html>"#);
    Ok(())
}
