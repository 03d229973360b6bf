//! Section markup builders
//!
//! Every function here is pure: record (plus disclosure state for the
//! project grid) in, HTML string out. The browser binding writes the result
//! into the DOM; the native binary prints it.

use crate::consts::*;
use crate::data::{Contact, PortfolioData, Profile, Project, SkillCategory};
use crate::disclosure::Disclosure;
use crate::error::LoadError;
use crate::scroll::ScrollProgress;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Percent-encode like JavaScript's `encodeURIComponent`
pub fn encode_uri_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// View model for one project card
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard<'a> {
    pub index: usize,
    pub title: &'a str,
    pub tech: &'a [String],
    pub description: &'a str,
    /// Present only while the card is expanded
    pub details: Option<&'a str>,
    pub link: &'a str,
    pub image_url: String,
}

impl ProjectCard<'_> {
    pub fn expanded(&self) -> bool {
        self.details.is_some()
    }

    pub fn button_label(&self) -> &'static str {
        if self.expanded() { HIDE_DETAILS } else { MORE_DETAILS }
    }

    /// Id of the details panel, referenced by the button's `aria-controls`
    pub fn details_id(&self) -> String {
        format!("project-details-{}", self.index)
    }
}

/// Map projects to cards, one per entry, in source order
pub fn project_cards<'a>(projects: &'a [Project], disclosure: &Disclosure) -> Vec<ProjectCard<'a>> {
    projects
        .iter()
        .enumerate()
        .map(|(index, project)| ProjectCard {
            index,
            title: &project.title,
            tech: &project.tech,
            description: &project.description,
            details: disclosure
                .is_expanded(index)
                .then_some(project.details.as_str()),
            link: &project.link,
            image_url: format!("{}{}", PROJECT_IMAGE_URL, encode_uri_component(&project.title)),
        })
        .collect()
}

fn section(id: Option<&str>, class: &str, inner: &str) -> String {
    let id_attr = id.map(|id| format!(r#" id="{}""#, id)).unwrap_or_default();
    format!(
        r#"<section{} class="section fade-in-up {}"><div class="container">{}</div></section>"#,
        id_attr, class, inner
    )
}

/// Neutral placeholder shown until the record arrives
pub fn render_loading() -> String {
    r#"<div class="loading" role="status">Loading...</div>"#.to_string()
}

/// Notice shown when the record could not be loaded
pub fn render_failed(err: &LoadError) -> String {
    format!(
        r#"<div class="load-failed" role="alert"><p>This page could not be loaded.</p><p class="load-failed-reason">{}</p></div>"#,
        html_escape(&err.to_string())
    )
}

pub fn render_progress_bar(progress: &ScrollProgress) -> String {
    format!(
        r#"<div class="scroll-progress"><div id="{}" class="scroll-progress-bar" style="width: {}"></div></div>"#,
        PROGRESS_BAR_ID,
        progress.width()
    )
}

pub fn render_nav(site_label: &str) -> String {
    let mut html = format!(
        r#"<nav class="nav"><div class="container nav-inner"><span class="brand">{}</span><div class="nav-links">"#,
        html_escape(site_label)
    );
    for (href, label) in NAV_LINKS {
        html.push_str(&format!(r#"<a href="{}">{}</a>"#, href, label));
    }
    html.push_str("</div></div></nav>");
    html
}

pub fn render_hero(profile: &Profile) -> String {
    let lead = profile
        .lead()
        .map(|p| format!(r#"<p class="hero-lead">{}</p>"#, html_escape(p)))
        .unwrap_or_default();
    let inner = format!(
        concat!(
            r#"<div class="hero">"#,
            r#"<div class="avatar"><img src="{}" alt="Profile"></div>"#,
            r#"<h1 class="hero-name">{}</h1>"#,
            r#"<p class="hero-role">{}</p>"#,
            "{}",
            r##"<div class="hero-actions"><a class="btn btn-primary" href="#contact">Contact Me</a><a class="btn btn-outline" href="#projects">View Projects</a></div>"##,
            "</div>"
        ),
        AVATAR_URL,
        html_escape(&profile.name),
        html_escape(&profile.role),
        lead
    );
    section(None, "hero-section", &inner)
}

pub fn render_about(profile: &Profile) -> String {
    let mut paragraphs = String::new();
    for line in profile.rest() {
        paragraphs.push_str(&format!("<p>{}</p>", html_escape(line)));
    }
    let edu = &profile.education;
    let inner = format!(
        concat!(
            "<h2>About Me</h2>",
            r#"<div class="about-grid">"#,
            r#"<div class="about-text">{}</div>"#,
            r#"<div class="education"><h3>Education</h3>"#,
            r#"<p class="school">{}</p><p class="degree">{} ({})</p>"#,
            "</div></div>"
        ),
        paragraphs,
        html_escape(&edu.school),
        html_escape(&edu.degree),
        html_escape(&edu.years)
    );
    section(Some("about"), "about-section", &inner)
}

pub fn render_skill_category(category: &SkillCategory) -> String {
    let mut html = format!(
        r#"<div class="card skill-card" data-key="{}"><h3>{}</h3><ul class="chips">"#,
        html_escape(&category.title),
        html_escape(&category.title)
    );
    for skill in &category.skills {
        html.push_str(&format!(r#"<li class="chip">{}</li>"#, html_escape(skill)));
    }
    html.push_str("</ul></div>");
    html
}

pub fn render_skills(skills: &[SkillCategory]) -> String {
    let mut inner = String::from(r#"<h2>Skills</h2><div class="skills-grid">"#);
    for category in skills {
        inner.push_str(&render_skill_category(category));
    }
    inner.push_str("</div>");
    section(Some("skills"), "skills-section", &inner)
}

pub fn render_project_card(card: &ProjectCard<'_>) -> String {
    let class = if card.expanded() {
        "card project-card expanded"
    } else {
        "card project-card"
    };
    let title = html_escape(card.title);

    let mut html = format!(
        r#"<div class="{}" data-key="{}"><div class="project-image"><img src="{}" alt="{}"></div><div class="project-body">"#,
        class,
        title,
        html_escape(&card.image_url),
        title
    );
    html.push_str(&format!(
        r#"<h3 class="project-title">{}<button type="button" class="details-toggle" data-project-toggle="{}" aria-expanded="{}" aria-controls="{}">{}</button></h3>"#,
        title,
        card.index,
        card.expanded(),
        card.details_id(),
        card.button_label()
    ));

    html.push_str(r#"<div class="tech-tags">"#);
    for tech in card.tech {
        html.push_str(&format!(r#"<span class="tag">{}</span>"#, html_escape(tech)));
    }
    html.push_str("</div>");

    html.push_str(&format!(
        r#"<p class="project-description">{}</p>"#,
        html_escape(card.description)
    ));
    if let Some(details) = card.details {
        html.push_str(&format!(
            r#"<div id="{}" class="project-details">{}</div>"#,
            card.details_id(),
            html_escape(details)
        ));
    }
    html.push_str(&format!(
        r#"<a class="project-link" href="{}">View Project →</a></div></div>"#,
        html_escape(card.link)
    ));
    html
}

/// Cards only, without the grid element; swapped into the grid on a toggle
pub fn render_project_grid(projects: &[Project], disclosure: &Disclosure) -> String {
    project_cards(projects, disclosure)
        .iter()
        .map(render_project_card)
        .collect()
}

pub fn render_projects(projects: &[Project], disclosure: &Disclosure) -> String {
    let inner = format!(
        r#"<h2>Projects</h2><div id="{}" class="projects-grid">{}</div>"#,
        PROJECT_GRID_ID,
        render_project_grid(projects, disclosure)
    );
    section(Some("projects"), "projects-section", &inner)
}

pub fn render_contact(contact: &Contact) -> String {
    let inner = format!(
        concat!(
            "<h2>Get in Touch</h2>",
            r#"<div class="contact-links">"#,
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">GitHub</a>"#,
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">LinkedIn</a>"#,
            r#"<a href="mailto:{}">Email</a>"#,
            "</div>"
        ),
        html_escape(&contact.github),
        html_escape(&contact.linkedin),
        html_escape(&contact.email)
    );
    section(Some("contact"), "contact-section", &inner)
}

pub fn render_footer(name: &str, year: i32) -> String {
    format!(
        r#"<footer class="footer"><div class="container">© {} {}. All rights reserved.</div></footer>"#,
        year,
        html_escape(name)
    )
}

/// Full markup for a loaded page
pub fn render_page(
    data: &PortfolioData,
    disclosure: &Disclosure,
    progress: &ScrollProgress,
    site_label: &str,
    year: i32,
) -> String {
    let mut html = String::new();
    html.push_str(&render_progress_bar(progress));
    html.push_str(&render_nav(site_label));
    html.push_str(r#"<main class="main">"#);
    html.push_str(&render_hero(&data.profile));
    html.push_str(&render_about(&data.profile));
    html.push_str(&render_skills(&data.skills));
    html.push_str(&render_projects(&data.projects, disclosure));
    html.push_str(&render_contact(&data.contact));
    html.push_str("</main>");
    html.push_str(&render_footer(&data.profile.name, year));
    html
}

/// Standalone HTML document around rendered page markup (native prerender)
pub fn render_document(title: &str, root_id: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{}</title></head>",
            r#"<body><div id="{}">{}</div></body></html>"#,
            "\n"
        ),
        html_escape(title),
        html_escape(root_id),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::sample;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("My App"), "My%20App");
        assert_eq!(encode_uri_component("a&b=c/d"), "a%26b%3Dc%2Fd");
        assert_eq!(encode_uri_component("it's (ok)!"), "it's%20(ok)!");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
    }

    #[test]
    fn test_project_cards_match_source() {
        let data = sample();
        let cards = project_cards(&data.projects, &Disclosure::new(data.projects.len()));
        assert_eq!(cards.len(), data.projects.len());
        for (card, project) in cards.iter().zip(&data.projects) {
            assert_eq!(card.title, project.title);
            assert!(!card.expanded());
            assert_eq!(card.button_label(), "More Details");
        }
        assert_eq!(cards[1].image_url, "https://placehold.co/800x400.png?text=B");
    }

    #[test]
    fn test_expanded_card() {
        let data = sample();
        let mut disclosure = Disclosure::new(data.projects.len());
        disclosure.toggle(1);
        let cards = project_cards(&data.projects, &disclosure);
        assert_eq!(cards[1].details, Some("B details"));
        assert_eq!(cards[1].button_label(), "Hide Details");
        assert_eq!(cards.iter().filter(|c| c.expanded()).count(), 1);

        let html = render_project_card(&cards[1]);
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains(r#"aria-controls="project-details-1""#));
        assert!(html.contains(r#"<div id="project-details-1" class="project-details">B details</div>"#));
        assert!(html.contains("card project-card expanded"));
    }

    #[test]
    fn test_collapsed_card_hides_details() {
        let data = sample();
        let cards = project_cards(&data.projects, &Disclosure::new(3));
        let html = render_project_card(&cards[0]);
        assert!(!html.contains("A details"));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(r#"data-project-toggle="0""#));
        assert!(html.contains(r#"<span class="tag">Rust</span><span class="tag">WASM</span>"#));
    }

    #[test]
    fn test_project_grid_is_bare_cards() {
        let data = sample();
        let mut disclosure = Disclosure::new(3);
        disclosure.toggle(1);
        let grid = render_project_grid(&data.projects, &disclosure);
        assert!(grid.starts_with(r#"<div class="card project-card" data-key="A">"#));
        assert!(!grid.contains("<section"));
        assert!(!grid.contains("fade-in-up"));
        assert!(grid.contains("B details"));

        let section = render_projects(&data.projects, &disclosure);
        assert!(section.contains(&format!(r#"<div id="project-grid" class="projects-grid">{}</div>"#, grid)));
    }

    #[test]
    fn test_about_skips_lead() {
        let data = sample();
        let html = render_about(&data.profile);
        assert!(!html.contains("I write programs for engines."));
        assert!(html.contains("<p>First note.</p><p>Second note.</p>"));
        assert!(html.contains("Mathematics (1828-1835)"));

        let hero = render_hero(&data.profile);
        assert!(hero.contains("I write programs for engines."));
        assert!(hero.contains(r##"href="#contact""##));
    }

    #[test]
    fn test_skills_in_order() {
        let data = sample();
        let html = render_skills(&data.skills);
        let rust = html.find("Rust").unwrap();
        let ts = html.find("TypeScript").unwrap();
        let tools = html.find("Tools").unwrap();
        assert!(rust < ts && ts < tools);
        assert_eq!(html.matches("skill-card").count(), 2);
    }

    #[test]
    fn test_contact_links() {
        let data = sample();
        let html = render_contact(&data.contact);
        assert!(html.contains(r#"href="mailto:ada@example.com""#));
        assert!(html.contains(r#"href="https://github.com/ada" target="_blank" rel="noopener noreferrer""#));
    }

    #[test]
    fn test_nav_anchors() {
        let html = render_nav("Portfolio");
        for (href, label) in NAV_LINKS {
            assert!(html.contains(&format!(r#"<a href="{}">{}</a>"#, href, label)));
        }
    }

    #[test]
    fn test_render_document() {
        let doc = render_document("Portfolio | A & B", "app", "<main></main>");
        assert!(doc.starts_with("<!DOCTYPE html>\n"));
        assert!(doc.contains("<title>Portfolio | A &amp; B</title>"));
        assert!(doc.contains(r#"<div id="app"><main></main></div>"#));
    }

    #[test]
    fn test_page_escapes_record_text() {
        let mut data = sample();
        data.profile.name = "<script>".to_string();
        let html = render_page(
            &data,
            &Disclosure::new(3),
            &ScrollProgress::new(),
            "Portfolio",
            2026,
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("© 2026 &lt;script&gt;. All rights reserved."));
        assert!(html.contains(r#"style="width: 0%""#));
    }
}
