//! Compact layout: two fixed columns, one paragraph per description line.
//!
//! Left column holds experience and projects; right column holds
//! education, summary, grouped skills and profile links. The stored
//! section order does not apply.

use maud::{Markup, PreEscaped, html};

use crate::components::heading::ruled_heading;
use crate::components::sections::rich_text;
use crate::markdown::render_markdown_lines;
use crate::resume::{Education, Experience, PersonalInfo, Project, Resume, Skill};
use crate::theme::Theme;
use crate::util::display_url;

const PROGRAMMING_KEYWORDS: [&str; 10] = [
    "python",
    "java",
    "javascript",
    "c++",
    "c#",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "go",
];

const TECHNOLOGY_KEYWORDS: [&str; 10] = [
    "aws",
    "azure",
    "git",
    "docker",
    "kubernetes",
    "linux",
    "windows",
    "unix",
    "ai",
    "ml",
];

/// Skill grouping used by the compact skills block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkillCategory {
    Programming,
    Technology,
    Other,
}

impl SkillCategory {
    const ALL: [SkillCategory; 3] = [Self::Programming, Self::Technology, Self::Other];

    fn label(self) -> &'static str {
        match self {
            Self::Programming => "Programming",
            Self::Technology => "Technology",
            Self::Other => "Other",
        }
    }

    /// Classifies by case-insensitive substring match against keyword lists.
    fn of(skill: &str) -> Self {
        let lower = skill.to_lowercase();
        if PROGRAMMING_KEYWORDS.iter().any(|k| lower.contains(k)) {
            Self::Programming
        } else if TECHNOLOGY_KEYWORDS.iter().any(|k| lower.contains(k)) {
            Self::Technology
        } else {
            Self::Other
        }
    }
}

pub(super) fn render(resume: &Resume, theme: Theme) -> Markup {
    let info = &resume.personal_info;

    html! {
        div id="resume-preview" class="resume template-compact bg-white my-6 mx-auto w-full max-w-5xl p-8" {
            (header(info, theme))
            div class="flex flex-col md:flex-row" {
                div class="compact-main md:w-2/3 md:pr-6" {
                    @if !resume.experience.is_empty() {
                        section class="mb-6" {
                            (ruled_heading("Experience", theme))
                            @for job in &resume.experience { (experience_item(job)) }
                        }
                    }
                    @if !resume.projects.is_empty() {
                        section class="mb-6" {
                            (ruled_heading("Projects", theme))
                            @for project in &resume.projects { (project_item(project, theme)) }
                        }
                    }
                }
                div class="compact-side md:w-1/3" {
                    @if !resume.education.is_empty() {
                        section class="mb-6" {
                            (ruled_heading("Education", theme))
                            @for edu in &resume.education { (education_item(edu)) }
                        }
                    }
                    @if !resume.summary.is_empty() {
                        section class="mb-6" {
                            p class="text-sm" { (rich_text(&resume.summary)) }
                        }
                    }
                    @if !resume.skills.is_empty() {
                        section class="mb-6" {
                            (ruled_heading("Skills", theme))
                            (skills_block(&resume.skills))
                        }
                    }
                    (links_block(info, theme))
                }
            }
        }
    }
}

fn header(info: &PersonalInfo, theme: Theme) -> Markup {
    let link_class = format!("{} hover:underline", theme.accent());

    html! {
        header class="resume-header text-center mb-6" {
            h1 class="text-2xl font-bold" { (info.display_name().unwrap_or_default()) }
            @if !info.title.is_empty() {
                p class="text-lg text-gray-600 mb-2" { (rich_text(&info.title)) }
            }
            p class="text-sm" {
                @if !info.email.is_empty() {
                    a href=(format!("mailto:{}", info.email)) class=(link_class) { (info.email) }
                }
                @if !info.email.is_empty() && !info.phone.is_empty() { " | " }
                @if !info.phone.is_empty() {
                    a href=(format!("tel:{}", info.phone)) class=(link_class) { (info.phone) }
                }
                @if !info.location.is_empty() {
                    @if !info.email.is_empty() || !info.phone.is_empty() { " | " }
                    (info.location)
                }
            }
        }
    }
}

/// One paragraph per non-blank description line.
fn description_lines(text: &str) -> Markup {
    html! {
        div class="text-sm" {
            @for line in render_markdown_lines(text) {
                p class="mb-1" { (PreEscaped(line)) }
            }
        }
    }
}

fn experience_item(job: &Experience) -> Markup {
    let end = if job.current { "Present" } else { job.end_date.as_str() };

    html! {
        div class="entry mb-4" {
            div {
                span class="font-bold" {
                    @if job.company.is_empty() { "Company" } @else { (job.company) }
                }
                span class="italic" {
                    " | "
                    @if job.position.is_empty() { "Position" } @else { (job.position) }
                }
            }
            div class="text-sm italic" {
                (job.start_date) " – " (end) " | " (job.location)
            }
            @if !job.description.is_empty() {
                (description_lines(&job.description))
            }
        }
    }
}

fn project_item(project: &Project, theme: Theme) -> Markup {
    html! {
        div class="entry mb-4" {
            div {
                span class="font-bold" { (project.display_name().unwrap_or("Project")) }
                @if !project.role.is_empty() {
                    span class="italic" { " | " (project.role) }
                }
            }
            div class="text-sm italic" {
                (rich_text(&format!("{} | {}", project.period(), project.location)))
            }
            @if !project.description.is_empty() {
                (description_lines(&project.description))
            }
            @if !project.link.is_empty() {
                div class="text-sm" {
                    a href=(project.link) target="_blank" rel="noopener noreferrer"
                        class=(format!("{} hover:underline", theme.accent())) {
                        (display_url(&project.link))
                    }
                }
            }
        }
    }
}

fn education_item(edu: &Education) -> Markup {
    let degree = if edu.degree.is_empty() { "Degree" } else { &edu.degree };

    html! {
        div class="entry mb-4" {
            div class="font-bold" {
                @if edu.institution.is_empty() { "Institution" } @else { (edu.institution) }
            }
            div class="italic" { (rich_text(degree)) }
            div class="text-sm" {
                (rich_text(&format!("{} – {} | {}", edu.start_date, edu.end_date, edu.location)))
            }
            @if !edu.gpa.is_empty() {
                div class="text-sm" { "GPA: " (edu.gpa) }
            }
            @if !edu.description.is_empty() {
                div class="text-sm mt-1" { (rich_text(&edu.description)) }
            }
        }
    }
}

fn skills_block(skills: &[Skill]) -> Markup {
    html! {
        @for category in SkillCategory::ALL {
            @let names: Vec<&str> = skills
                .iter()
                .map(Skill::name)
                .filter(|name| SkillCategory::of(name) == category)
                .collect();
            @if !names.is_empty() {
                div class="skill-group mb-3" {
                    div class="font-bold" { (category.label()) }
                    div class="text-sm" { (rich_text(&names.join(" • "))) }
                }
            }
        }
    }
}

fn links_block(info: &PersonalInfo, theme: Theme) -> Markup {
    let links: Vec<(&str, String)> = [
        ("LinkedIn", info.linkedin_url()),
        ("GitHub", info.github_url()),
        ("Website", (!info.website.is_empty()).then(|| info.website.clone())),
    ]
    .into_iter()
    .filter_map(|(label, url)| url.map(|u| (label, u)))
    .collect();

    html! {
        @if !links.is_empty() {
            section class="mb-6" {
                (ruled_heading("Links", theme))
                @for (label, url) in &links {
                    div class="text-sm" {
                        span class="font-bold" { (label) ": " }
                        a href=(url) target="_blank" rel="noopener noreferrer"
                            class=(format!("{} hover:underline", theme.accent())) {
                            (display_url(url))
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_categories() {
        assert_eq!(SkillCategory::of("Python 3"), SkillCategory::Programming);
        assert_eq!(SkillCategory::of("Docker"), SkillCategory::Technology);
        assert_eq!(SkillCategory::of("Public speaking"), SkillCategory::Other);
    }

    #[test]
    fn test_skill_categories_use_substring_match() {
        // "go" is a programming keyword, so anything containing it matches
        assert_eq!(SkillCategory::of("Google Cloud"), SkillCategory::Programming);
        assert_eq!(SkillCategory::of("Email campaigns"), SkillCategory::Technology);
    }

    #[test]
    fn test_skills_block_groups_in_fixed_order() {
        // Arrange
        let skills = vec![
            Skill::Name("Writing".into()),
            Skill::Name("Kubernetes".into()),
            Skill::Name("Rust".into()),
            Skill::Name("Java".into()),
        ];

        // Act
        let html = skills_block(&skills).into_string();

        // Assert
        let programming = html.find(">Programming<").expect("Programming group");
        let technology = html.find(">Technology<").expect("Technology group");
        let other = html.find(">Other<").expect("Other group");
        assert!(programming < technology && technology < other);
        assert!(html.contains("Writing • Rust"), "Unmatched skills go to Other");
    }

    #[test]
    fn test_description_renders_one_paragraph_per_line() {
        // Arrange
        let job = Experience {
            company: "Acme".to_string(),
            description: "• one\n\n• **two**".to_string(),
            ..Default::default()
        };

        // Act
        let html = experience_item(&job).into_string();

        // Assert
        assert_eq!(html.matches(r#"<p class="mb-1">"#).count(), 2);
        assert!(html.contains("<li><strong>two</strong></li>"));
    }

    #[test]
    fn test_experience_placeholders() {
        // Arrange & Act
        let html = experience_item(&Experience::default()).into_string();

        // Assert
        assert!(html.contains(">Company<"));
        assert!(html.contains("Position"));
    }

    #[test]
    fn test_project_link_is_shortened() {
        // Arrange
        let project = Project {
            name: "Robot".to_string(),
            link: "https://www.example.com/robot".to_string(),
            ..Default::default()
        };

        // Act
        let html = project_item(&project, Theme::Gray).into_string();

        // Assert
        assert!(html.contains(r#"href="https://www.example.com/robot""#));
        assert!(html.contains(">example.com/robot</a>"));
    }

    #[test]
    fn test_links_block_hidden_without_profiles() {
        // Arrange & Act
        let html = links_block(&PersonalInfo::default(), Theme::Gray).into_string();

        // Assert
        assert!(html.is_empty());
    }

    #[test]
    fn test_header_separators() {
        // Arrange
        let info = PersonalInfo {
            name: "Ada".to_string(),
            email: "a@b.c".to_string(),
            location: "Oslo".to_string(),
            ..Default::default()
        };

        // Act
        let html = header(&info, Theme::Gray).into_string();

        // Assert
        assert!(html.contains("</a> | Oslo"));
    }

    #[test]
    fn test_layout_ignores_section_order() {
        // Arrange
        let mut resume = Resume::default();
        resume.experience.push(Experience {
            company: "Acme".to_string(),
            ..Default::default()
        });
        resume.section_order = vec![crate::resume::SectionId::Summary];

        // Act
        let html = render(&resume, Theme::Gray).into_string();

        // Assert
        assert!(html.contains("Acme"));
    }
}
