//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`. Page
//! bodies are built as plain `Line`s by the submodules so they can be
//! checked without a terminal.

mod blog;
mod brief;
mod home;
mod player;

use std::{collections::BTreeMap, sync::LazyLock, time::Duration};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, Page};
use crate::theme::Palette;

use blog::{not_found_lines, post_lines, summary_lines};
use brief::brief_lines;
use home::home_lines;
use player::player_height;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("1/2/3", "home/blog/brief");
    map.insert("j/k", "down/up");
    map.insert("enter", "open post");
    map.insert("esc", "back");
    map.insert("t", "theme");
    map.insert("L", "language");
    map.insert("space", "play/pause");
    map.insert("n/p", "next/prev track");
    map.insert("+/-", "volume");
    map.insert("m", "mute");
    // ,/. is filled dynamically from config.
    map.insert("a", "player panel");
    map.insert("q", "quit");
    map
});

/// Render the controls help text, incorporating the seek step.
fn controls_text(seek_seconds: u64) -> String {
    // Keep the rendered order stable and human-friendly.
    let order = [
        "1/2/3", "j/k", "enter", "esc", "t", "L", "space", "n/p", "+/-", "m", ",/.", "a", "q",
    ];
    order
        .iter()
        .filter_map(|k| {
            if *k == ",/." {
                Some(format!("[,/.] seek -/+{seek_seconds}s"))
            } else {
                CONTROLS_MAP.get(*k).map(|v| format!("[{k}] {v}"))
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn page_title(page: &Page) -> &'static str {
    match page {
        Page::Home => " home ",
        Page::Blog => " blog ",
        Page::Post(_) => " post ",
        Page::NotFound(_) => " not found ",
        Page::Brief => " brief ",
    }
}

fn bordered(title: &str, palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(title.to_string())
        .padding(Padding {
            left: 1,
            right: 1,
            top: 0,
            bottom: 0,
        })
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, app: &App, seek_step_seconds: u64) {
    let palette = app.palette();
    let base = Style::default().fg(palette.text).bg(palette.background);
    frame.render_widget(Block::default().style(base), frame.area());

    let player_rows = app
        .player
        .as_ref()
        .map_or(0, |p| player_height(p.state()));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(player_rows),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header_title = format!(
        " folio · {} · {} · {} ",
        app.current_route(),
        app.theme.theme().as_str(),
        app.lang().label()
    );
    let header = Paragraph::new(app.header_text.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.accent))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(header_title)
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    draw_page(frame, app, &palette, chunks[1]);

    if let Some(player) = &app.player {
        player::draw(frame, chunks[2], player, &palette);
    }

    let footer = Paragraph::new(controls_text(seek_step_seconds))
        .style(Style::default().fg(palette.muted))
        .block(bordered(" controls ", &palette))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

fn draw_page(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let lang = app.lang();
    let block = bordered(page_title(&app.page), palette);

    let lines: Vec<Line<'static>> = match &app.page {
        Page::Home => home_lines(&app.content, lang, palette),
        Page::Brief => brief_lines(app.content.proposal(), palette),
        Page::NotFound(slug) => not_found_lines(slug, lang, palette),
        Page::Post(_) => match app.current_post() {
            Some(post) => post_lines(post, lang, palette),
            None => Vec::new(),
        },
        Page::Blog => {
            let items: Vec<ListItem> = app
                .content
                .list_summaries()
                .iter()
                .map(|s| ListItem::new(summary_lines(s, lang, palette)))
                .collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(
                    Style::default()
                        .bg(palette.highlight)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");
            let mut state = ListState::default();
            if app.content.post_count() > 0 {
                state.select(Some(app.selected_post));
            }
            frame.render_stateful_widget(list, area, &mut state);
            return;
        }
    };

    let body = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(body, area);
}
