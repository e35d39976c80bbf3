//! Blog listing entries, single posts and the not-found page.

use std::collections::BTreeSet;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::blog::render_blocks;
use crate::content::{BlogPost, Language, PostSummary};
use crate::theme::Palette;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn tag_list(tags: &BTreeSet<String>) -> String {
    tags.iter().map(|t| format!("  #{t}")).collect()
}

/// Two lines per listing entry: title with date, then the description.
pub fn summary_lines(
    summary: &PostSummary<'_>,
    lang: Language,
    palette: &Palette,
) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                summary.title.get(lang).to_string(),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", summary.published_at.format(DATE_FORMAT)),
                Style::default().fg(palette.muted),
            ),
            Span::styled(tag_list(summary.tags), Style::default().fg(palette.code)),
        ]),
        Line::from(Span::styled(
            format!("  {}", summary.description.get(lang)),
            Style::default().fg(palette.muted),
        )),
    ]
}

/// The language switcher shown above a post; the active language is marked.
fn language_switcher(current: Language, palette: &Palette) -> Line<'static> {
    let mut spans = vec![Span::styled("[L] ", Style::default().fg(palette.muted))];
    for (i, lang) in Language::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(palette.muted)));
        }
        let style = if lang == current {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.muted)
        };
        spans.push(Span::styled(lang.label(), style));
    }
    Line::from(spans)
}

pub fn post_lines(post: &BlogPost, lang: Language, palette: &Palette) -> Vec<Line<'static>> {
    let meta = format!("{}{}", post.published_at.format(DATE_FORMAT), tag_list(&post.tags));

    let mut lines = vec![
        language_switcher(lang, palette),
        Line::default(),
        Line::from(Span::styled(
            post.title.get(lang).to_string(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(meta, Style::default().fg(palette.muted))),
        Line::from(Span::styled(
            post.description.get(lang).to_string(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
    ];
    lines.extend(render_blocks(&post.blocks, lang, palette));
    lines
}

pub fn not_found_lines(slug: &str, lang: Language, palette: &Palette) -> Vec<Line<'static>> {
    let (title, detail, hint) = match lang {
        Language::En => (
            "Post not found",
            format!("There is no post called `{slug}`."),
            "Press Esc or 2 to go back to the blog.",
        ),
        Language::Es => (
            "Entrada no encontrada",
            format!("No existe ninguna entrada llamada `{slug}`."),
            "Pulsa Esc o 2 para volver al blog.",
        ),
    };
    vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(detail, Style::default().fg(palette.text))),
        Line::from(Span::styled(hint, Style::default().fg(palette.muted))),
    ]
}
