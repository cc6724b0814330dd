//! Subject list shared by the quiz and to-do screens.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::super::app::App;
use super::super::constants::SUBJECT_COLOR;

const NO_SUBJECTS_HINT: &str = "Ask the chatbot to teach you a subject first!";

pub(super) fn draw_subject_picker(f: &mut Frame, app: &App, area: Rect, title: &str, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));

    let subjects = app.subjects();
    if subjects.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            NO_SUBJECTS_HINT,
            Style::default().fg(Color::DarkGray),
        )))
        .wrap(Wrap { trim: true })
        .block(block);
        f.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = subjects
        .into_iter()
        .map(|s| ListItem::new(Line::from(Span::styled(s, Style::default().fg(SUBJECT_COLOR)))))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_symbol("› ")
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default().with_selected(Some(app.subject_index));
    f.render_stateful_widget(list, area, &mut state);
}
