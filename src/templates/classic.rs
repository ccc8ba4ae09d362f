//! Classic layout: centred header, sections in stored order.

use maud::{Markup, html};

use crate::components::contact::contact_list;
use crate::components::heading::section_heading;
use crate::components::sections::render_section;
use crate::resume::{PersonalInfo, Resume};
use crate::theme::Theme;

pub(super) fn render(resume: &Resume, theme: Theme) -> Markup {
    html! {
        div id="resume-preview" class=(format!("resume template-classic bg-white border rounded-lg p-6 max-w-4xl mx-auto my-4 {}", theme.border())) {
            div class="px-8 py-6 print:p-0" {
                (header(&resume.personal_info))
                div class="resume-sections" {
                    @for id in resume.effective_section_order() {
                        @if let Some(section) = render_section(&id, resume, theme, section_heading) {
                            div class="resume-section mb-4 text-left" data-section=(id.id()) {
                                (section)
                            }
                        }
                    }
                }
            }
        }
    }
}

fn header(info: &PersonalInfo) -> Markup {
    html! {
        header class="resume-header text-center mb-4" {
            h1 class="text-4xl font-bold uppercase" {
                (info.display_name().unwrap_or_else(|| "YOUR NAME".to_string()))
            }
            p class="text-gray-600 mt-1 text-lg" {
                @if info.title.is_empty() { "Professional Title" } @else { (info.title) }
            }
            (contact_list(info))
            @if !info.objective.is_empty() {
                p class="objective text-sm italic text-center max-w-2xl mx-auto mt-2" {
                    "\u{201c}" (info.objective) "\u{201d}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::SectionId;

    #[test]
    fn test_placeholder_header_for_empty_resume() {
        // Arrange
        let resume = Resume::default();

        // Act
        let html = render(&resume, Theme::Blue).into_string();

        // Assert
        assert!(html.contains("YOUR NAME"));
        assert!(html.contains("Professional Title"));
        assert!(!html.contains("data-section="), "No section has content");
    }

    #[test]
    fn test_sections_follow_stored_order() {
        // Arrange
        let mut resume = Resume::default();
        resume.summary = "About me".to_string();
        resume.skills.push(crate::resume::Skill::Name("Rust".into()));
        resume.section_order = vec![SectionId::Skills, SectionId::Summary];

        // Act
        let html = render(&resume, Theme::Blue).into_string();

        // Assert
        let skills_at = html.find(r#"data-section="skills""#).expect("Skills rendered");
        let summary_at = html.find(r#"data-section="summary""#).expect("Summary rendered");
        assert!(skills_at < summary_at, "Skills should come first");
    }

    #[test]
    fn test_sections_missing_from_order_are_hidden() {
        // Arrange
        let mut resume = Resume::default();
        resume.summary = "About me".to_string();
        resume.section_order = vec![SectionId::Experience];

        // Act
        let html = render(&resume, Theme::Blue).into_string();

        // Assert
        assert!(!html.contains("About me"));
    }

    #[test]
    fn test_objective_is_quoted() {
        // Arrange
        let mut resume = Resume::default();
        resume.personal_info.objective = "Build things".to_string();

        // Act
        let html = render(&resume, Theme::Blue).into_string();

        // Assert
        assert!(html.contains("\u{201c}Build things\u{201d}"));
    }
}
