//! The project brief page.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::brief::Proposal;
use crate::theme::Palette;

fn heading(title: &str, palette: &Palette) -> [Line<'static>; 2] {
    [
        Line::default(),
        Line::from(Span::styled(
            title.to_uppercase(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
    ]
}

/// A two-column row with the amount right-aligned in `width` columns.
fn amount_row(label: &str, amount: &str, width: usize, style: Style) -> Line<'static> {
    Line::from(Span::styled(format!("  {label:<width$}  {amount:>14}"), style))
}

pub fn brief_lines(p: &Proposal, palette: &Palette) -> Vec<Line<'static>> {
    let text = Style::default().fg(palette.text);
    let muted = Style::default().fg(palette.muted);
    let bold = text.add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Project brief: {}", p.project),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{} · prepared by {} · {}",
                p.client,
                p.prepared_by,
                p.date.format("%Y-%m-%d")
            ),
            muted,
        )),
    ];

    if !p.summary.is_empty() {
        lines.extend(heading("Summary", palette));
        lines.extend(
            p.summary
                .iter()
                .map(|s| Line::from(Span::styled(s.clone(), text))),
        );
    }

    if !p.scope.is_empty() {
        lines.extend(heading("Scope", palette));
        for item in &p.scope {
            lines.push(Line::from(vec![
                Span::styled(format!("• {}: ", item.title), bold),
                Span::styled(item.detail.clone(), text),
            ]));
        }
    }

    if !p.milestones.is_empty() {
        lines.extend(heading("Timeline", palette));
        for m in &p.milestones {
            let unit = if m.weeks == 1 { "week" } else { "weeks" };
            lines.push(Line::from(vec![
                Span::styled(format!("• {} ", m.name), bold),
                Span::styled(format!("({} {unit})", m.weeks), muted),
            ]));
            if !m.deliverables.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", m.deliverables.join(", ")),
                    text,
                )));
            }
        }
        lines.push(Line::from(Span::styled(
            format!("Total: {} weeks", p.total_weeks()),
            bold,
        )));
    }

    if !p.pricing.is_empty() {
        lines.extend(heading("Investment", palette));
        let width = p
            .pricing
            .iter()
            .map(|l| l.item.chars().count())
            .max()
            .unwrap_or(0)
            .max("Total".len());
        for line in &p.pricing {
            lines.push(amount_row(&line.item, &p.money(line.amount), width, text));
        }
        lines.push(amount_row("Total", &p.money(p.total()), width, bold));
    }

    if !p.terms.is_empty() {
        lines.extend(heading("Terms", palette));
        lines.extend(
            p.terms
                .iter()
                .map(|t| Line::from(Span::styled(format!("• {t}"), muted))),
        );
    }

    lines
}
