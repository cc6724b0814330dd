//! Header: logo or spinner, view tabs, model name.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};

use super::super::app::{App, View};
use super::super::constants::{ACCENT, CHAT_COLOR, QUIZ_COLOR, TODO_COLOR};

/// Max width for model name in header; longer names are truncated with "…".
const MODEL_HEADER_WIDTH: u16 = 32;

pub(super) fn view_color(view: View) -> Color {
    match view {
        View::Chat => CHAT_COLOR,
        View::Todo => TODO_COLOR,
        View::Quiz => QUIZ_COLOR,
    }
}

/// Keep the tail of `name` so the provider-specific part stays visible.
fn truncate_model(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        return name.to_string();
    }
    let chars: Vec<char> = name.chars().collect();
    let start = chars.len().saturating_sub(max_len.saturating_sub(1));
    format!("…{}", chars[start..].iter().collect::<String>())
}

pub(super) fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(MODEL_HEADER_WIDTH),
        ])
        .split(area);

    let logo = Line::from(Span::styled(
        format!("{} ", super::spinner(app.is_busy())),
        Style::default().fg(ACCENT),
    ));
    f.render_widget(Paragraph::new(logo), chunks[0]);

    let titles: Vec<Line> = View::ALL
        .iter()
        .map(|v| {
            Line::from(Span::styled(
                format!("F{} {}", v.index() + 1, v.title()),
                Style::default().fg(view_color(*v)),
            ))
        })
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.view.index())
        .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
        .divider(Span::styled("│", Style::default().fg(Color::DarkGray)));
    f.render_widget(tabs, chunks[1]);

    let model = Line::from(Span::styled(
        truncate_model(&app.model_id, MODEL_HEADER_WIDTH as usize),
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(model).alignment(Alignment::Right), chunks[2]);
}
