//! To-do view: subject picker, loading, and the checklist.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::super::app::{App, TodoView, View};
use super::super::constants::{SUBJECT_COLOR, TODO_COLOR};
use super::picker::draw_subject_picker;

fn block(title: Span<'static>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TODO_COLOR))
        .title(title)
}

fn heading(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(TODO_COLOR).add_modifier(Modifier::BOLD))
}

fn draw_checklist(f: &mut Frame, app: &App, area: Rect, subject: &str) {
    let adding = app.todo_input.is_some();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(if adding { 3 } else { 0 }),
        ])
        .split(area);

    let tasks = app.session.todo_list(subject);
    let subject_title = Span::styled(
        format!(" {} ", subject),
        Style::default().fg(SUBJECT_COLOR).add_modifier(Modifier::BOLD),
    );
    if tasks.is_empty() {
        let para = Paragraph::new(Line::from(Span::styled(
            "No tasks yet. Press a to add one.",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block(subject_title));
        f.render_widget(para, chunks[0]);
    } else {
        let items: Vec<ListItem> = tasks
            .iter()
            .map(|task| {
                let (mark, style) = if task.done {
                    (
                        "[x]",
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT),
                    )
                } else {
                    ("[ ]", Style::default())
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", mark), Style::default().fg(TODO_COLOR)),
                    Span::styled(task.description.clone(), style),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(block(subject_title))
            .highlight_symbol("› ")
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut state = ListState::default().with_selected(Some(app.todo_index));
        f.render_stateful_widget(list, chunks[0], &mut state);
    }

    if let Some(ref input) = app.todo_input {
        let input_block = block(heading(" New task ".to_string()));
        let inner = input_block.inner(chunks[1]);
        f.render_widget(Paragraph::new(input.clone()).block(input_block), chunks[1]);
        let cursor_x = inner.x + (input.chars().count() as u16).min(inner.width.saturating_sub(1));
        f.set_cursor_position(Position::new(cursor_x, inner.y));
    }
}

pub(super) fn draw_todo(f: &mut Frame, app: &App, area: Rect) {
    let title = View::Todo.title();
    match &app.todo_view {
        TodoView::Picker => {
            draw_subject_picker(f, app, area, &format!("{}: choose a subject", title), TODO_COLOR);
        }
        TodoView::Loading(subject) => {
            let line = Line::from(vec![
                Span::styled(
                    format!("{} ", super::spinner(true)),
                    Style::default().fg(TODO_COLOR),
                ),
                Span::raw("Generating a study plan for "),
                Span::styled(subject.clone(), Style::default().fg(SUBJECT_COLOR)),
                Span::raw("..."),
            ]);
            f.render_widget(
                Paragraph::new(line).block(block(heading(format!(" {} ", title)))),
                area,
            );
        }
        TodoView::Failed(message) => {
            let para = Paragraph::new(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            )))
            .wrap(Wrap { trim: true })
            .block(block(heading(format!(" {} ", title))));
            f.render_widget(para, area);
        }
        TodoView::List(subject) => draw_checklist(f, app, area, subject),
    }
}
