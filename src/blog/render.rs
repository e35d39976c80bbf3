//! Content blocks to styled terminal lines.
//!
//! Every block type has its own rule and none of them look at the blocks
//! around it, so rendering a post is a plain in-order concatenation.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::content::{ContentBlock, Language, Localized};
use crate::theme::Palette;

/// Render `blocks` in order, separated by one blank line. Blocks that render
/// to nothing (unknown types) leave no gap behind.
pub fn render_blocks(
    blocks: &[ContentBlock],
    lang: Language,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    for block in blocks {
        let rendered = render_block(block, lang, palette);
        if rendered.is_empty() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.extend(rendered);
    }
    lines
}

/// Render a single block.
pub fn render_block(block: &ContentBlock, lang: Language, palette: &Palette) -> Vec<Line<'static>> {
    let text = |value: &Localized| value.get(lang).to_string();

    match block {
        ContentBlock::Heading { level, text: value } => {
            let mut style = Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD);
            if *level <= 2 {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            let marker = "#".repeat(usize::from((*level).clamp(1, 6)));
            vec![Line::from(Span::styled(
                format!("{marker} {}", text(value)),
                style,
            ))]
        }
        ContentBlock::Paragraph { text: value } => {
            vec![Line::from(Span::styled(
                text(value),
                Style::default().fg(palette.text),
            ))]
        }
        ContentBlock::List { ordered, items } => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let bullet = if *ordered {
                    format!("  {}. ", i + 1)
                } else {
                    "  • ".to_string()
                };
                Line::from(vec![
                    Span::styled(bullet, Style::default().fg(palette.accent)),
                    Span::styled(text(item), Style::default().fg(palette.text)),
                ])
            })
            .collect(),
        ContentBlock::Quote {
            text: value,
            attribution,
        } => {
            let bar = Span::styled("│ ", Style::default().fg(palette.accent));
            let quote_style = Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC);
            let mut lines = vec![Line::from(vec![
                bar.clone(),
                Span::styled(text(value), quote_style),
            ])];
            if let Some(who) = attribution.as_deref().filter(|s| !s.trim().is_empty()) {
                lines.push(Line::from(vec![
                    bar,
                    Span::styled(format!("— {who}"), Style::default().fg(palette.muted)),
                ]));
            }
            lines
        }
        ContentBlock::Code { code, language } => {
            let code_style = Style::default().fg(palette.code);
            let mut lines = Vec::new();
            if let Some(language) = language.as_deref().filter(|s| !s.is_empty()) {
                lines.push(Line::from(Span::styled(
                    format!("  [{language}]"),
                    Style::default().fg(palette.muted),
                )));
            }
            lines.extend(
                code.trim_end_matches('\n')
                    .lines()
                    .map(|l| Line::from(Span::styled(format!("    {l}"), code_style))),
            );
            lines
        }
        ContentBlock::Image { src, alt, caption } => {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!("[image: {}]", text(alt)),
                    Style::default().fg(palette.accent),
                ),
                Span::styled(format!(" ({src})"), Style::default().fg(palette.muted)),
            ])];
            if let Some(caption) = caption {
                lines.push(Line::from(Span::styled(
                    text(caption),
                    Style::default()
                        .fg(palette.muted)
                        .add_modifier(Modifier::ITALIC),
                )));
            }
            lines
        }
        ContentBlock::Unknown => Vec::new(),
    }
}
