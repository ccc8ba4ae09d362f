//! Resume section components shared by the ordered layouts
//!
//! Each renderer returns `None` when its section has nothing to show, so
//! layouts can skip the wrapper element entirely. Free-text fields go
//! through the markdown renderer and are embedded unescaped; every other
//! field is escaped by maud.

use maud::{Markup, PreEscaped, html};

use super::heading::HeadingFn;
use super::icons::external_link_icon;
use crate::markdown::render_markdown;
use crate::resume::{CustomSection, Resume, SectionId};
use crate::theme::Theme;

/// Renders a free-text field as trusted HTML
pub fn rich_text(text: &str) -> PreEscaped<String> {
    PreEscaped(render_markdown(Some(text)))
}

/// Renders one section of the resume by id
///
/// # Arguments
///
/// * `id`: Section to render
/// * `resume`: Resume data
/// * `theme`: Active colour theme
/// * `heading`: Heading style of the calling layout
///
/// # Returns
///
/// Section markup, or `None` when the section is empty, is the header
/// (`personalInfo`), or names an unknown custom section
pub fn render_section(
    id: &SectionId,
    resume: &Resume,
    theme: Theme,
    heading: HeadingFn,
) -> Option<Markup> {
    match id {
        SectionId::PersonalInfo => None,
        SectionId::Summary => summary(resume, theme, heading),
        SectionId::Experience => experience(resume, theme, heading),
        SectionId::Education => education(resume, theme, heading),
        SectionId::Skills => skills(resume, theme, heading),
        SectionId::Projects => projects(resume, theme, heading),
        SectionId::Certifications => certifications(resume, theme, heading),
        SectionId::Achievements => achievements(resume, theme, heading),
        SectionId::PageBreak => Some(page_breaks(resume)),
        SectionId::Custom(key) => match resume.custom_section(key) {
            Some(section) => custom(section, theme, heading),
            None => {
                log::warn!("Section order references unknown section: {}", key);
                None
            }
        },
    }
}

fn summary(resume: &Resume, theme: Theme, heading: HeadingFn) -> Option<Markup> {
    if resume.summary.is_empty() {
        return None;
    }

    Some(html! {
        (heading("Summary", theme))
        p class="text-sm rich-text-content" { (rich_text(&resume.summary)) }
    })
}

fn experience(resume: &Resume, theme: Theme, heading: HeadingFn) -> Option<Markup> {
    if resume.experience.is_empty() {
        return None;
    }

    Some(html! {
        (heading("Experience", theme))
        div class="space-y-2" {
            @for job in &resume.experience {
                div class="entry space-y-1" {
                    div class="entry-header flex justify-between items-center" {
                        div class="flex" {
                            span class="font-semibold" { (job.position) }
                            span { (PreEscaped("&nbsp;at&nbsp;")) }
                            span class=(format!("font-medium {}", theme.accent())) { (job.company) }
                        }
                        div class="entry-date text-sm text-gray-500" { (job.date_range()) }
                    }
                    @if !job.description.is_empty() {
                        div class="text-sm rich-text-content" { (rich_text(&job.description)) }
                    }
                }
            }
        }
    })
}

fn education(resume: &Resume, theme: Theme, heading: HeadingFn) -> Option<Markup> {
    if resume.education.is_empty() {
        return None;
    }

    Some(html! {
        (heading("Education", theme))
        div class="space-y-2" {
            @for edu in &resume.education {
                div class="entry space-y-1" {
                    div class="entry-header flex justify-between items-center" {
                        div class="font-semibold" {
                            (edu.degree)
                            @if !edu.field.is_empty() {
                                ", " (edu.field)
                            }
                        }
                        div class="entry-date text-sm text-gray-500" { (edu.date_range()) }
                    }
                    div class=(format!("font-medium {}", theme.accent())) { (edu.institution) }
                    @if !edu.gpa.is_empty() {
                        div class="text-sm" { "GPA: " (edu.gpa) }
                    }
                    @if !edu.description.is_empty() {
                        div class="text-sm rich-text-content" { (rich_text(&edu.description)) }
                    }
                }
            }
        }
    })
}

fn skills(resume: &Resume, theme: Theme, heading: HeadingFn) -> Option<Markup> {
    if resume.skills.is_empty() {
        return None;
    }

    Some(html! {
        (heading("Skills", theme))
        div class="flex flex-wrap gap-2" {
            @for skill in &resume.skills {
                span class=(format!("skill-badge text-xs px-2 py-1 rounded {}", theme.skill_badge())) {
                    (skill.name())
                }
            }
        }
    })
}

fn projects(resume: &Resume, theme: Theme, heading: HeadingFn) -> Option<Markup> {
    if resume.projects.is_empty() {
        return None;
    }

    Some(html! {
        (heading("Projects", theme))
        div class="space-y-3" {
            @for project in &resume.projects {
                div class="entry space-y-1" {
                    div class="entry-header flex justify-between" {
                        div class="font-semibold" { (project.display_name().unwrap_or("Project")) }
                        @let period = project.period();
                        @if !period.is_empty() {
                            div class="entry-date text-sm text-gray-500" { (period) }
                        }
                    }
                    @if !project.technologies.is_empty() {
                        div class="text-xs text-gray-600 italic" { (project.technologies) }
                    }
                    @if !project.description.is_empty() {
                        div class="text-sm rich-text-content" { (rich_text(&project.description)) }
                    }
                    @if !project.link.is_empty() {
                        a href=(project.link) target="_blank" rel="noopener noreferrer"
                            class=(format!("text-xs hover:underline inline-flex items-center {}", theme.accent())) {
                            (external_link_icon())
                            "View Project"
                        }
                    }
                }
            }
        }
    })
}

fn certifications(resume: &Resume, theme: Theme, heading: HeadingFn) -> Option<Markup> {
    if resume.certifications.is_empty() {
        return None;
    }

    Some(html! {
        (heading("Certifications", theme))
        div class="space-y-2" {
            @for cert in &resume.certifications {
                div class="entry space-y-1" {
                    div class="entry-header flex justify-between items-center" {
                        div class="font-semibold" { (cert.name) }
                        @if !cert.date.is_empty() {
                            div class="entry-date text-sm text-gray-500" { (cert.date) }
                        }
                    }
                    @if !cert.issuer.is_empty() {
                        div class="text-sm" { (cert.issuer) }
                    }
                    @if !cert.description.is_empty() {
                        div class="text-sm rich-text-content" { (rich_text(&cert.description)) }
                    }
                    @if !cert.credential_url.is_empty() {
                        a href=(cert.credential_url) target="_blank" rel="noopener noreferrer"
                            class=(format!("text-xs hover:underline {}", theme.accent())) {
                            "View Certificate"
                        }
                    }
                }
            }
        }
    })
}

fn achievements(resume: &Resume, theme: Theme, heading: HeadingFn) -> Option<Markup> {
    if resume.achievements.is_empty() {
        return None;
    }

    Some(html! {
        (heading("Achievements", theme))
        table class="achievements w-full text-sm" {
            tbody {
                @for achievement in &resume.achievements {
                    tr {
                        td class="achievement-year py-1 pr-4 text-center whitespace-nowrap" {
                            (achievement.when())
                        }
                        td class="py-1" {
                            div class="font-medium" {
                                (achievement.display_name())
                                @if !achievement.url.is_empty() {
                                    a href=(achievement.url) target="_blank" rel="noopener noreferrer"
                                        class=(format!("ml-1 hover:underline text-xs inline-flex items-center {}", theme.accent())) {
                                        (external_link_icon())
                                        "Link"
                                    }
                                }
                            }
                            @if !achievement.description.is_empty() {
                                div class="text-sm rich-text-content" { (rich_text(&achievement.description)) }
                            }
                        }
                    }
                }
            }
        }
    })
}

fn custom(section: &CustomSection, theme: Theme, heading: HeadingFn) -> Option<Markup> {
    if section.items.is_empty() {
        return None;
    }

    Some(html! {
        (heading(&section.title, theme))
        div class="space-y-2" {
            @for item in &section.items {
                div class="entry space-y-1" {
                    div class="entry-header flex justify-between items-center" {
                        div class="font-semibold" { (item.title) }
                        @if !item.date.is_empty() {
                            div class="entry-date text-sm text-gray-500" { (item.date) }
                        }
                    }
                    @if !item.subtitle.is_empty() {
                        div class=(format!("font-medium {}", theme.accent())) { (item.subtitle) }
                    }
                    @if !item.description.is_empty() {
                        div class="text-sm rich-text-content" { (rich_text(&item.description)) }
                    }
                }
            }
        }
    })
}

/// Renders the page breaks stored in the resume, or a single break.
fn page_breaks(resume: &Resume) -> Markup {
    let ids: Vec<&str> = if resume.page_breaks.is_empty() {
        vec![""]
    } else {
        resume.page_breaks.iter().map(|b| b.id.as_str()).collect()
    };

    html! {
        @for id in ids {
            div class="page-break" data-page-break="true" id=[(!id.is_empty()).then_some(id)] {
                div class="page-break-label" { "Page Break" }
            }
        }
    }
}
