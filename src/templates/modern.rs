//! Modern layout: tinted header band and colour bar headings.

use maud::{Markup, html};

use crate::components::contact::contact_list;
use crate::components::heading::banner_heading;
use crate::components::sections::{render_section, rich_text};
use crate::resume::{PersonalInfo, Resume};
use crate::theme::Theme;

pub(super) fn render(resume: &Resume, theme: Theme) -> Markup {
    html! {
        div id="resume-preview" class="resume template-modern bg-white rounded-lg max-w-4xl mx-auto my-4 overflow-hidden" {
            (header(&resume.personal_info, theme))
            div class="resume-sections px-8 py-6 print:p-0" {
                @for id in resume.effective_section_order() {
                    @if let Some(section) = render_section(&id, resume, theme, banner_heading) {
                        section class="resume-section mb-5" data-section=(id.id()) {
                            (section)
                        }
                    }
                }
            }
        }
    }
}

fn header(info: &PersonalInfo, theme: Theme) -> Markup {
    html! {
        header class=(format!("resume-header px-8 py-6 {} {}", theme.header_background(), theme.header_text())) {
            h1 class="text-4xl font-bold" {
                (info.display_name().unwrap_or_else(|| "Your Name".to_string()))
            }
            @if !info.title.is_empty() {
                p class=(format!("text-lg mt-1 {}", theme.accent())) { (rich_text(&info.title)) }
            }
            (contact_list(info))
            @if !info.objective.is_empty() {
                p class="objective text-sm mt-2" { (info.objective) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_uses_theme_background() {
        // Arrange
        let mut resume = Resume::default();
        resume.personal_info.name = "Ada Lovelace".to_string();

        // Act
        let html = render(&resume, Theme::Green).into_string();

        // Assert
        assert!(html.contains("bg-green-50 text-green-900"));
        assert!(html.contains("Ada Lovelace"));
    }

    #[test]
    fn test_headings_are_banners() {
        // Arrange
        let mut resume = Resume::default();
        resume.summary = "Hello".to_string();

        // Act
        let html = render(&resume, Theme::Purple).into_string();

        // Assert
        assert!(html.contains("bg-purple-900 text-white"));
        assert!(html.contains(">Summary</h2>"));
    }

    #[test]
    fn test_title_accepts_markdown() {
        // Arrange
        let mut resume = Resume::default();
        resume.personal_info.title = "Engineer at *Acme*".to_string();

        // Act
        let html = render(&resume, Theme::Blue).into_string();

        // Assert
        assert!(html.contains("Engineer at <em>Acme</em>"));
    }
}
