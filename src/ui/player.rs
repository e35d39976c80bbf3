//! The background player bar and its expandable control panel.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::app::Player;
use crate::audio::{Phase, PlaybackState, Track};
use crate::theme::Palette;

use super::format_mmss;

/// Rows taken by the player: a one-line bar, or bar plus panel.
pub fn player_height(state: &PlaybackState) -> u16 {
    if state.is_control_panel_visible { 5 } else { 3 }
}

/// The always-visible line: play state, track, time and volume.
pub fn status_line(state: &PlaybackState, tracks: &[Track], palette: &Palette) -> Line<'static> {
    let icon = if state.is_playing { "▶" } else { "⏸" };
    let name = tracks
        .get(state.current_track_index)
        .map_or("-", |t| t.display.as_str());
    let time = match state.duration {
        Some(total) => format!(
            "{} / {}",
            format_mmss(state.current_time),
            format_mmss(total)
        ),
        None => format_mmss(state.current_time),
    };
    let volume = if state.is_muted {
        "muted".to_string()
    } else {
        format!("vol {:.0}%", state.volume.value() * 100.0)
    };

    Line::from(vec![
        Span::styled(format!("{icon} "), Style::default().fg(palette.accent)),
        Span::styled(
            format!(
                "{}/{} ",
                state.current_track_index + 1,
                tracks.len().max(1)
            ),
            Style::default().fg(palette.muted),
        ),
        Span::styled(
            name.to_string(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {time}  "), Style::default().fg(palette.muted)),
        Span::styled(volume, Style::default().fg(palette.muted)),
    ])
}

fn player_title(player: &Player) -> &'static str {
    if player.pending_advance().is_some() {
        return " up next ";
    }
    match player.phase() {
        Phase::Idle => " music ",
        Phase::Playing => " now playing ",
        Phase::Paused => " paused ",
    }
}

pub fn draw(frame: &mut Frame, area: Rect, player: &Player, palette: &Palette) {
    let state = player.state();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(player_title(player));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !state.is_control_panel_visible {
        frame.render_widget(
            Paragraph::new(status_line(state, player.tracks(), palette)),
            inner,
        );
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(status_line(state, player.tracks(), palette)),
        rows[0],
    );

    let progress = Gauge::default()
        .gauge_style(Style::default().fg(palette.accent).bg(palette.highlight))
        .ratio(state.progress().unwrap_or(0.0))
        .label(Span::styled(
            format!("{:.0}%", state.progress().unwrap_or(0.0) * 100.0),
            Style::default().fg(palette.text),
        ));
    frame.render_widget(progress, rows[1]);

    let level = if state.is_muted {
        0.0
    } else {
        f64::from(state.volume.value())
    };
    let volume = Gauge::default()
        .gauge_style(Style::default().fg(palette.code).bg(palette.highlight))
        .ratio(level)
        .label(Span::styled(
            if state.is_muted {
                "muted".to_string()
            } else {
                format!("volume {:.0}%", level * 100.0)
            },
            Style::default().fg(palette.text),
        ));
    frame.render_widget(volume, rows[2]);
}
