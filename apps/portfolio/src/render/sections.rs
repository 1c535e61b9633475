use std::fmt::{self, Write};

use crate::content::models::{ContentBundle, ExperienceEntry, Narrative, Project, Skill};
use crate::render::escape::Escaped;

/// The page's sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Experience,
    Skills,
    Projects,
    Education,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::About,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Education,
        Section::Contact,
    ];

    /// Element id, also the `#fragment` the navigation links to.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    /// The footer links to every section except Education.
    pub fn in_footer(self) -> bool {
        self != Section::Education
    }

    pub fn render(self, out: &mut String, bundle: &ContentBundle) -> fmt::Result {
        match self {
            Section::Hero => render_hero(out, bundle),
            Section::About => render_about(out, bundle),
            Section::Experience => render_experience(out, bundle),
            Section::Skills => render_skills(out, bundle),
            Section::Projects => render_projects(out, bundle),
            Section::Education => render_education(out, bundle),
            Section::Contact => render_contact(out, bundle),
        }
    }
}

fn section_header(out: &mut String, title: &str, subtitle: Option<&str>) -> fmt::Result {
    write!(out, r#"<div class="section-header"><h2>{}</h2><div class="rule"></div>"#, Escaped(title))?;
    if let Some(subtitle) = subtitle {
        write!(out, r#"<p class="subtitle">{}</p>"#, Escaped(subtitle))?;
    }
    out.push_str("</div>");
    Ok(())
}

fn bullet_list(out: &mut String, class: &str, items: &[String]) -> fmt::Result {
    write!(out, r#"<ul class="{class}">"#)?;
    for item in items {
        write!(out, "<li>{}</li>", Escaped(item))?;
    }
    out.push_str("</ul>");
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Hero
// ────────────────────────────────────────────────────────────────────────────

fn render_hero(out: &mut String, bundle: &ContentBundle) -> fmt::Result {
    let profile = &bundle.profile;
    let (lead, accent) = split_title(&profile.title);

    out.push_str(r#"<section id="hero" class="hero"><div class="container">"#);
    write!(
        out,
        r#"<h1>{} <span class="accent">{}</span></h1><p class="summary">{}</p>"#,
        Escaped(lead),
        Escaped(accent),
        Escaped(&profile.summary)
    )?;
    out.push_str(
        r##"<div class="actions"><a class="button accent-bg" href="#contact">Get In Touch</a><a class="button outline" href="/api/download-resume" download>Download Resume</a></div>"##,
    );

    out.push_str(r#"<div class="stats">"#);
    for stat in &profile.stats {
        write!(
            out,
            r#"<div class="stat"><div class="stat-value">{}{}{}</div><div class="stat-label">{}</div></div>"#,
            Escaped(stat.prefix.as_deref().unwrap_or("")),
            stat.value,
            Escaped(stat.suffix.as_deref().unwrap_or("")),
            Escaped(&stat.label)
        )?;
    }
    out.push_str("</div></div></section>");
    Ok(())
}

/// Splits a title before its last word so the last word can be highlighted:
/// "Business Analytics Specialist" → ("Business Analytics", "Specialist").
/// A single-word title is returned entirely as the accent.
pub fn split_title(title: &str) -> (&str, &str) {
    let title = title.trim();
    match title.rsplit_once(char::is_whitespace) {
        Some((lead, last)) => (lead.trim_end(), last),
        None => ("", title),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// About
// ────────────────────────────────────────────────────────────────────────────

fn render_about(out: &mut String, bundle: &ContentBundle) -> fmt::Result {
    let profile = &bundle.profile;

    out.push_str(r#"<section id="about"><div class="container">"#);
    section_header(out, "About Me", None)?;

    write!(out, r#"<div class="columns"><div class="card primary-bg"><h3>{}</h3>"#, Escaped(&profile.title))?;
    for paragraph in &profile.about {
        write!(out, "<p>{}</p>", Escaped(paragraph))?;
    }
    out.push_str("</div><div>");

    out.push_str(r#"<dl class="info-grid">"#);
    for (label, value) in [
        ("Email", &profile.email),
        ("Phone", &profile.phone),
        ("Location", &profile.location),
    ] {
        write!(out, "<div><dt>{label}</dt><dd>{}</dd></div>", Escaped(value))?;
    }
    write!(
        out,
        r#"<div><dt>LinkedIn</dt><dd><a href="{}" target="_blank" rel="noopener">Connect with me</a></dd></div></dl>"#,
        Escaped(&profile.linkedin)
    )?;

    if !profile.benefits.is_empty() {
        out.push_str("<h3>Why Work With Me?</h3>");
        bullet_list(out, "checklist", &profile.benefits)?;
    }
    out.push_str("</div></div></div></section>");
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

fn render_experience(out: &mut String, bundle: &ContentBundle) -> fmt::Result {
    out.push_str(r#"<section id="experience" class="light-bg"><div class="container">"#);
    section_header(
        out,
        "Professional Experience",
        Some("A track record of delivering data-driven results in analytics roles"),
    )?;

    out.push_str(r#"<div class="timeline">"#);
    for (index, entry) in bundle.experience.iter().enumerate() {
        render_experience_entry(out, entry, index == 0)?;
    }
    out.push_str("</div></div></section>");
    Ok(())
}

fn render_experience_entry(out: &mut String, entry: &ExperienceEntry, current: bool) -> fmt::Result {
    let (left, right) = split_responsibilities(&entry.responsibilities);

    out.push_str(r#"<article class="timeline-item"><div class="card">"#);
    if current {
        out.push_str(r#"<span class="badge">Current</span>"#);
    }
    write!(out, "<h3>{}</h3>", Escaped(&entry.role))?;
    if let Some(category) = &entry.category {
        write!(out, r#"<p class="category">{}</p>"#, Escaped(category))?;
    }
    write!(
        out,
        r#"<p class="meta">{}</p><p class="meta">{}</p>"#,
        Escaped(&entry.date),
        Escaped(&entry.location)
    )?;
    bullet_list(out, "responsibilities", left)?;
    out.push_str("</div>");

    if !right.is_empty() {
        write!(out, r#"<div class="card continuation"><h3>{}</h3>"#, Escaped(&entry.role))?;
        if let Some(category) = &entry.category {
            write!(out, r#"<p class="category">{}</p>"#, Escaped(continuation_category(category)))?;
        }
        write!(out, r#"<p class="meta">{}</p>"#, Escaped(&entry.location))?;
        bullet_list(out, "responsibilities", right)?;
        out.push_str("</div>");
    }
    out.push_str("</article>");
    Ok(())
}

/// Splits responsibilities into a left column of `ceil(n / 2)` items and a
/// right column with the rest.
pub fn split_responsibilities(items: &[String]) -> (&[String], &[String]) {
    items.split_at(items.len().div_ceil(2))
}

/// The right-hand card labels the "Strategic" track as "Enablement".
fn continuation_category(category: &str) -> &str {
    if category == "Strategic" {
        "Enablement"
    } else {
        category
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

fn render_skills(out: &mut String, bundle: &ContentBundle) -> fmt::Result {
    let skills = &bundle.skills;

    out.push_str(r#"<section id="skills"><div class="container">"#);
    section_header(
        out,
        "My Skills",
        Some("A diverse set of technical and analytical abilities honed through years of professional experience"),
    )?;

    out.push_str(r#"<div class="columns"><div><h3>Technical Skills</h3><div class="grid">"#);
    for group in &skills.technical {
        write!(out, r#"<div class="card light-bg"><h4>{}</h4>"#, Escaped(&group.title))?;
        skill_bars(out, &group.skills)?;
        out.push_str("</div>");
    }
    out.push_str("</div></div>");

    out.push_str("<div><h3>Analytical Skills</h3>");
    if !skills.analytical.is_empty() {
        out.push_str(r#"<div class="card light-bg">"#);
        skill_bars(out, &skills.analytical)?;
        out.push_str("</div>");
    }
    if !skills.highlights.is_empty() {
        out.push_str(r#"<ul class="tiles">"#);
        for highlight in &skills.highlights {
            write!(out, "<li>{}</li>", Escaped(highlight))?;
        }
        out.push_str("</ul>");
    }
    out.push_str("</div></div>");

    if !skills.services.is_empty() {
        out.push_str(r#"<div class="grid services">"#);
        for service in &skills.services {
            write!(
                out,
                r#"<div class="card"><h4>{}</h4><p>{}</p></div>"#,
                Escaped(&service.title),
                Escaped(&service.description)
            )?;
        }
        out.push_str("</div>");
    }
    out.push_str("</div></section>");
    Ok(())
}

fn skill_bars(out: &mut String, skills: &[Skill]) -> fmt::Result {
    for skill in skills {
        let level = skill.level.min(100);
        write!(
            out,
            r#"<div class="skill"><div class="skill-label"><span>{}</span><span>{level}%</span></div><div class="bar"><div class="bar-fill" style="width: {level}%"></div></div></div>"#,
            Escaped(&skill.name)
        )?;
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

fn render_projects(out: &mut String, bundle: &ContentBundle) -> fmt::Result {
    out.push_str(r#"<section id="projects" class="light-bg"><div class="container">"#);
    section_header(
        out,
        "Featured Projects",
        Some("Browse through some of my featured analytics projects that have driven business growth and optimization"),
    )?;

    out.push_str(r#"<div class="grid projects">"#);
    for project in &bundle.projects {
        out.push_str(r#"<article class="card project-card"><div class="project-icon">"#);
        project_icon(out, project)?;
        write!(
            out,
            r#"</div><h3>{}</h3><p>{}</p>"#,
            Escaped(&project.title),
            Escaped(&project.summary)
        )?;
        technology_tags(out, &project.technologies)?;
        write!(
            out,
            r#"<a class="button primary-bg" href="/projects/{}">View Details</a></article>"#,
            project.id
        )?;
    }
    out.push_str("</div></div></section>");
    Ok(())
}

pub(crate) fn project_icon(out: &mut String, project: &Project) -> fmt::Result {
    write!(
        out,
        r#"<svg aria-hidden="true" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path fill="none" stroke="currentColor" stroke-width="2" d="{}"/></svg>"#,
        Escaped(&project.icon)
    )
}

pub(crate) fn technology_tags(out: &mut String, technologies: &[String]) -> fmt::Result {
    out.push_str(r#"<ul class="tags">"#);
    for tech in technologies {
        write!(out, "<li>{}</li>", Escaped(tech))?;
    }
    out.push_str("</ul>");
    Ok(())
}

/// Challenge / Solution / Impact body shared by the project detail page.
pub(crate) fn project_details(out: &mut String, project: &Project) -> fmt::Result {
    write!(out, "<h4>Challenge</h4><p>{}</p>", Escaped(&project.challenge))?;
    narrative(out, "Solution", &project.solution)?;
    narrative(out, "Impact", &project.impact)?;
    out.push_str("<h4>Technologies Used</h4>");
    technology_tags(out, &project.technologies)
}

fn narrative(out: &mut String, heading: &str, narrative: &Narrative) -> fmt::Result {
    write!(out, "<h4>{heading}</h4><p>{}</p>", Escaped(&narrative.description))?;
    if !narrative.points.is_empty() {
        bullet_list(out, "points", &narrative.points)?;
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

fn render_education(out: &mut String, bundle: &ContentBundle) -> fmt::Result {
    out.push_str(r#"<section id="education"><div class="container">"#);
    section_header(
        out,
        "Education",
        Some("Academic foundation that supports my analytical capabilities"),
    )?;

    out.push_str(r#"<div class="grid two">"#);
    for edu in &bundle.education {
        write!(
            out,
            r#"<div class="card light-bg"><h3>{}</h3><p class="category">{}</p><p class="meta">{} <span class="grade">{}</span></p><p>{}</p></div>"#,
            Escaped(&edu.degree),
            Escaped(&edu.institution),
            Escaped(&edu.year),
            Escaped(&edu.grade),
            Escaped(&edu.description)
        )?;
    }
    out.push_str("</div>");

    if !bundle.achievements.is_empty() {
        out.push_str(r#"<h3 class="centered">Achievements</h3><div class="grid two">"#);
        for achievement in &bundle.achievements {
            write!(
                out,
                r#"<div class="card primary-bg"><h4>{}</h4><p>{}</p><p class="note">{}</p></div>"#,
                Escaped(&achievement.title),
                Escaped(&achievement.description),
                Escaped(&achievement.note)
            )?;
        }
        out.push_str("</div>");
    }
    out.push_str("</div></section>");
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Contact
// ────────────────────────────────────────────────────────────────────────────

fn render_contact(out: &mut String, bundle: &ContentBundle) -> fmt::Result {
    let profile = &bundle.profile;

    out.push_str(r#"<section id="contact" class="hero"><div class="container">"#);
    section_header(
        out,
        "Get In Touch",
        Some("Let's discuss how my analytics expertise can benefit your organization. Feel free to reach out!"),
    )?;

    // minlength mirrors the client-side hints; the server only requires non-empty
    out.push_str(
        r#"<div class="columns"><form id="contact-form" class="card" action="/api/contact" method="post" novalidate>
<label>Name<input name="name" placeholder="Your Name" required minlength="2"></label>
<label>Email<input name="email" type="email" placeholder="Your Email" required></label>
<label>Subject<input name="subject" placeholder="Subject" required minlength="5"></label>
<label>Message<textarea name="message" placeholder="Your Message" rows="5" required minlength="10"></textarea></label>
<button type="submit" class="button accent-bg">Send Message</button>
<div id="notification" class="notification" role="status" aria-live="polite" hidden></div>
</form>"#,
    );

    out.push_str(r#"<div class="card glass"><h3>Contact Information</h3><dl class="info-list">"#);
    for (label, value) in [
        ("Email", &profile.email),
        ("Phone", &profile.phone),
        ("Location", &profile.location),
    ] {
        write!(out, "<div><dt>{label}</dt><dd>{}</dd></div>", Escaped(value))?;
    }
    write!(
        out,
        r#"<div><dt>LinkedIn</dt><dd><a href="{0}" target="_blank" rel="noopener">{1}</a></dd></div></dl>"#,
        Escaped(&profile.linkedin),
        Escaped(display_url(&profile.linkedin))
    )?;
    out.push_str("</div></div></div></section>");
    Ok(())
}

/// Strips the scheme and `www.` so a URL reads well as link text.
pub fn display_url(url: &str) -> &str {
    let url = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    url.strip_prefix("www.").unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::loader::parse_bundle;

    fn bundle() -> ContentBundle {
        parse_bundle(include_str!("../../content/portfolio.json")).unwrap()
    }

    fn rendered(section: Section) -> String {
        let mut out = String::new();
        section.render(&mut out, &bundle()).unwrap();
        out
    }

    fn strings(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item {i}")).collect()
    }

    #[test]
    fn test_split_responsibilities_rounds_left_up() {
        let odd = strings(5);
        let (left, right) = split_responsibilities(&odd);
        assert_eq!((left.len(), right.len()), (3, 2));

        let even = strings(6);
        let (left, right) = split_responsibilities(&even);
        assert_eq!((left.len(), right.len()), (3, 3));

        let one = strings(1);
        let (left, right) = split_responsibilities(&one);
        assert_eq!((left.len(), right.len()), (1, 0));

        let (left, right) = split_responsibilities(&[]);
        assert!(left.is_empty() && right.is_empty());
    }

    #[test]
    fn test_split_title() {
        assert_eq!(
            split_title("Business Analytics Specialist"),
            ("Business Analytics", "Specialist")
        );
        assert_eq!(split_title("Analyst"), ("", "Analyst"));
    }

    #[test]
    fn test_display_url() {
        assert_eq!(
            display_url("https://www.linkedin.com/in/someone"),
            "linkedin.com/in/someone"
        );
        assert_eq!(display_url("example.org"), "example.org");
    }

    #[test]
    fn test_every_section_renders_with_its_id() {
        for section in Section::ALL {
            let html = rendered(section);
            assert!(
                html.starts_with(&format!(r#"<section id="{}""#, section.id())),
                "{section:?}"
            );
            assert!(html.ends_with("</section>"), "{section:?}");
        }
    }

    #[test]
    fn test_only_first_experience_is_current() {
        let html = rendered(Section::Experience);
        assert_eq!(html.matches(">Current<").count(), 1);
        assert!(html.find(">Current<").unwrap() < html.find("Business Analyst").unwrap());
    }

    #[test]
    fn test_strategic_continuation_reads_enablement() {
        let html = rendered(Section::Experience);
        assert!(html.contains(r#"<p class="category">Strategic</p>"#));
        assert!(html.contains(r#"<p class="category">Enablement</p>"#));
    }

    #[test]
    fn test_skill_bars_use_level_width() {
        let html = rendered(Section::Skills);
        assert!(html.contains(r#"<span>Power BI</span><span>95%</span>"#));
        assert!(html.contains(r#"style="width: 95%""#));
    }

    #[test]
    fn test_projects_link_to_detail_pages() {
        let html = rendered(Section::Projects);
        for id in 1..=6 {
            assert!(html.contains(&format!(r#"href="/projects/{id}""#)));
        }
        assert!(html.contains("Fraud Detection &amp; Prevention"));
    }

    #[test]
    fn test_contact_form_has_all_fields() {
        let html = rendered(Section::Contact);
        for field in ["name", "email", "subject", "message"] {
            assert!(html.contains(&format!(r#"name="{field}""#)), "{field}");
        }
        assert!(html.contains("linkedin.com/in/dhananjay-dadheech-850439150"));
    }

    #[test]
    fn test_hero_renders_stats_with_affixes() {
        let html = rendered(Section::Hero);
        assert!(html.contains(">~4<"));
        assert!(html.contains(">20%<"));
        assert!(html.contains(">10+<"));
    }

    #[test]
    fn test_bundle_text_is_escaped() {
        let mut bundle = bundle();
        bundle.profile.summary = "<script>alert(1)</script>".into();
        let mut out = String::new();
        Section::Hero.render(&mut out, &bundle).unwrap();
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_footer_skips_education() {
        let footer: Vec<_> = Section::ALL.into_iter().filter(|s| s.in_footer()).collect();
        assert_eq!(footer.len(), 6);
        assert!(!footer.contains(&Section::Education));
    }
}
