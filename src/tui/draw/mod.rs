//! TUI rendering: header, the active view, and the bottom bar.

mod chat;
mod header;
mod picker;
mod quiz;
mod todo;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use std::sync::OnceLock;
use std::time::Instant;

use super::app::{App, View};
use super::constants::{LOGO_IDLE, LOGO_THINKING};
use super::shortcuts::labels;

/// Start time for the spinner animation phase.
static SPINNER_START: OnceLock<Instant> = OnceLock::new();

/// Current spinner frame, or the idle logo when `busy` is false.
pub(super) fn spinner(busy: bool) -> &'static str {
    if !busy {
        return LOGO_IDLE;
    }
    let start = SPINNER_START.get_or_init(Instant::now);
    let phase = start.elapsed().as_millis() as usize;
    LOGO_THINKING[(phase / 80) % LOGO_THINKING.len()]
}

/// Wrap `text` to `width` columns, keeping blank lines.
pub(super) fn wrap(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width.max(1))
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect()
}

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);
    header::draw_header(f, app, chunks[0]);
    match app.view {
        View::Chat => chat::draw_chat(f, app, chunks[1]),
        View::Todo => todo::draw_todo(f, app, chunks[1]),
        View::Quiz => quiz::draw_quiz(f, app, chunks[1]),
    }
    draw_bottom_bar(f, app, chunks[2]);
}

fn draw_bottom_bar(f: &mut Frame, app: &App, area: Rect) {
    let hints = labels::bottom_bar(
        app.view,
        &app.quiz_view,
        &app.todo_view,
        app.todo_input.is_some(),
    );
    let line = Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    f.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}
