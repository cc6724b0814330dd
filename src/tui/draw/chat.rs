//! Chat view: transcript blocks with scrollbar, and the input box.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::core::llm::RequestKind;
use crate::core::session::{ChatMessage, Sender};

use super::super::app::App;
use super::super::constants::{ACCENT, CHAT_COLOR};

const ERROR_PREFIX: &str = "[Error contacting AI:";

fn repeat_char(c: char, n: usize) -> String {
    std::iter::repeat_n(c, n).collect()
}

/// Append one message as a bordered block: "┌─ You 14:32 ──┐", wrapped body, "└──┘".
fn add_message_block(
    lines: &mut Vec<Line<'static>>,
    msg: &ChatMessage,
    wrap_width: usize,
    show_timestamp: bool,
) {
    let border_color = match msg.sender {
        Sender::User => Color::DarkGray,
        Sender::Assistant => CHAT_COLOR,
    };
    let border_style = Style::default().fg(border_color);
    let body_style = if msg.text.starts_with(ERROR_PREFIX) {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let top_label = if show_timestamp {
        format!("┌─ {} {} ", msg.sender.label(), msg.sent_at.format("%H:%M"))
    } else {
        format!("┌─ {} ", msg.sender.label())
    };
    let trail = wrap_width.saturating_sub(top_label.chars().count() + 1);
    lines.push(Line::from(Span::styled(
        format!("{}{}┐", top_label, repeat_char('─', trail)),
        border_style,
    )));

    let content_width = wrap_width.saturating_sub(4);
    for paragraph in msg.text.split('\n') {
        for chunk in super::wrap(paragraph, content_width) {
            lines.push(Line::from(vec![
                Span::styled("│ ", border_style),
                Span::styled(format!(" {}", chunk), body_style),
            ]));
        }
    }

    lines.push(Line::from(Span::styled(
        format!("└{}┘", repeat_char('─', wrap_width.saturating_sub(2))),
        border_style,
    )));
}

fn draw_history(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let text_area = chunks[0];
    let scrollbar_area = chunks[1];
    let wrap_width = text_area.width as usize;

    let mut lines: Vec<Line<'static>> = Vec::new();
    for msg in app.session.transcript() {
        add_message_block(&mut lines, msg, wrap_width, app.show_timestamps);
    }
    let waiting = app
        .pending
        .iter()
        .any(|p| matches!(p.kind, RequestKind::Chat(_)));
    if waiting {
        lines.push(Line::from(Span::styled(
            "  Thinking... ",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let total_lines = lines.len();
    let visible = text_area.height as usize;
    app.last_max_scroll = total_lines.saturating_sub(visible.max(1));
    let scroll_pos = app.scroll_line();
    let visible_lines: Vec<Line> = lines.into_iter().skip(scroll_pos).take(visible).collect();
    f.render_widget(Paragraph::new(visible_lines), text_area);

    let mut scrollbar_state = ScrollbarState::default()
        .position(scroll_pos)
        .content_length(total_lines);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_symbol("█")
        .thumb_style(Style::default().fg(CHAT_COLOR))
        .track_symbol(Some("│"));
    f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" Ask about a subject ");
    let inner = block.inner(area);
    let width = inner.width as usize;
    // Show the tail when the input is wider than the box.
    let visible: String = {
        let count = app.input.chars().count();
        app.input
            .chars()
            .skip(count.saturating_sub(width.saturating_sub(1)))
            .collect()
    };
    let cursor_x = inner.x + visible.chars().count() as u16;
    f.render_widget(Paragraph::new(visible).block(block), area);
    f.set_cursor_position(Position::new(cursor_x, inner.y));
}

pub(super) fn draw_chat(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(area);
    draw_history(f, app, chunks[0]);
    draw_input(f, app, chunks[1]);
}
