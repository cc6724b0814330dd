//! Quiz view: subject picker, loading, question with choices, final score.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::core::quiz::{Feedback, QuizSession, QuizState};

use super::super::app::{App, QuizView, View};
use super::super::constants::{QUIZ_COLOR, SUBJECT_COLOR};
use super::picker::draw_subject_picker;

fn block(title: Span<'static>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(QUIZ_COLOR))
        .title(title)
}

fn heading(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(QUIZ_COLOR).add_modifier(Modifier::BOLD))
}

fn question_lines(app: &App, quiz: &QuizSession, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let Some(index) = quiz.current_index() else {
        return lines;
    };
    let Some(question) = quiz.current() else {
        return lines;
    };
    let graded = matches!(quiz.state(), QuizState::Graded(_));

    lines.push(Line::from(vec![
        Span::styled(
            format!("Question {} of {}", index + 1, quiz.total()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("   Score: {}", quiz.score()),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    lines.push(Line::default());
    for chunk in super::wrap(&question.prompt, width) {
        lines.push(Line::from(Span::styled(
            chunk,
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::default());

    for (letter, text) in &question.choices {
        let selected = app.quiz_selection == Some(*letter);
        let mut style = Style::default();
        if graded && *letter == question.answer {
            style = style.fg(Color::Green);
        } else if graded && selected {
            style = style.fg(Color::Red);
        }
        if selected {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let marker = if selected { "›" } else { " " };
        lines.push(Line::from(Span::styled(
            format!("{} {}) {}", marker, letter, text),
            style,
        )));
    }
    lines.push(Line::default());

    if let Some(feedback) = quiz.last_feedback() {
        let color = match feedback {
            Feedback::Correct => Color::Green,
            Feedback::Wrong { .. } => Color::Red,
        };
        lines.push(Line::from(Span::styled(
            feedback.message(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    } else if let Some(ref notice) = app.quiz_notice {
        lines.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Yellow),
        )));
    }
    lines
}

fn complete_lines(quiz: &QuizSession) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Quiz complete!",
            Style::default().fg(QUIZ_COLOR).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(format!("Your score: {}", quiz.summary())),
    ];
    if quiz.total() == 0 {
        lines.push(Line::from(Span::styled(
            "No questions could be read from the reply.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Press Enter to choose another subject.",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

pub(super) fn draw_quiz(f: &mut Frame, app: &App, area: Rect) {
    let title = View::Quiz.title();
    match &app.quiz_view {
        QuizView::Picker => {
            draw_subject_picker(f, app, area, &format!("{}: choose a subject", title), QUIZ_COLOR);
        }
        QuizView::Loading(subject) => {
            let line = Line::from(vec![
                Span::styled(
                    format!("{} ", super::spinner(true)),
                    Style::default().fg(QUIZ_COLOR),
                ),
                Span::raw("Generating a quiz on "),
                Span::styled(subject.clone(), Style::default().fg(SUBJECT_COLOR)),
                Span::raw("..."),
            ]);
            f.render_widget(
                Paragraph::new(line).block(block(heading(format!(" {} ", title)))),
                area,
            );
        }
        QuizView::Failed(message) => {
            let para = Paragraph::new(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            )))
            .wrap(Wrap { trim: true })
            .block(block(heading(format!(" {} ", title))));
            f.render_widget(para, area);
        }
        QuizView::Running => {
            let Some(quiz) = app.session.quiz() else {
                return;
            };
            let width = area.width.saturating_sub(2) as usize;
            let lines = if quiz.is_complete() {
                complete_lines(quiz)
            } else {
                question_lines(app, quiz, width)
            };
            let subject_title = heading(format!(" {}: {} ", title, quiz.subject()));
            f.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .block(block(subject_title)),
                area,
            );
        }
    }
}
