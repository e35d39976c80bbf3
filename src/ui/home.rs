//! The landing page: hero, about, projects, workflow and contact.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::content::{ContentStore, Language, Link};
use crate::theme::Palette;

#[derive(Clone, Copy)]
enum Section {
    About,
    Projects,
    Workflow,
    Contact,
}

impl Section {
    fn title(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Section::About, Language::En) => "About",
            (Section::About, Language::Es) => "Sobre mí",
            (Section::Projects, Language::En) => "Projects",
            (Section::Projects, Language::Es) => "Proyectos",
            (Section::Workflow, Language::En) => "How I work",
            (Section::Workflow, Language::Es) => "Cómo trabajo",
            (Section::Contact, Language::En) => "Contact",
            (Section::Contact, Language::Es) => "Contacto",
        }
    }
}

fn section_heading(section: Section, lang: Language, palette: &Palette) -> [Line<'static>; 2] {
    [
        Line::default(),
        Line::from(Span::styled(
            section.title(lang).to_uppercase(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
    ]
}

fn link_line(link: &Link, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {}: ", link.label), Style::default().fg(palette.muted)),
        Span::styled(link.url.clone(), Style::default().fg(palette.accent)),
    ])
}

pub fn home_lines(content: &ContentStore, lang: Language, palette: &Palette) -> Vec<Line<'static>> {
    let profile = content.profile();
    let text = Style::default().fg(palette.text);
    let muted = Style::default().fg(palette.muted);
    let mut lines = vec![
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.headline.get(lang).to_string(),
            text.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.tagline.get(lang).to_string(),
            muted.add_modifier(Modifier::ITALIC),
        )),
    ];

    if !profile.about.is_empty() {
        lines.extend(section_heading(Section::About, lang, palette));
        for paragraph in &profile.about {
            lines.push(Line::from(Span::styled(paragraph.get(lang).to_string(), text)));
        }
    }

    if !content.projects().is_empty() {
        lines.extend(section_heading(Section::Projects, lang, palette));
        for project in content.projects() {
            lines.push(Line::from(Span::styled(
                format!("▸ {}", project.title),
                text.add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", project.description.get(lang)),
                text,
            )));
            if !project.stack.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", project.stack.join(" · ")),
                    Style::default().fg(palette.code),
                )));
            }
            lines.extend(project.links.iter().map(|l| link_line(l, palette)));
        }
    }

    if !profile.workflow.is_empty() {
        lines.extend(section_heading(Section::Workflow, lang, palette));
        for (i, step) in profile.workflow.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("{}. ", i + 1), Style::default().fg(palette.accent)),
                Span::styled(
                    step.title.get(lang).to_string(),
                    text.add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("   {}", step.detail.get(lang)),
                muted,
            )));
        }
    }

    if !profile.contact.is_empty() {
        lines.extend(section_heading(Section::Contact, lang, palette));
        lines.extend(profile.contact.iter().map(|l| link_line(l, palette)));
    }

    lines
}
