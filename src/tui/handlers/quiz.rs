//! Quiz view keys: pick a subject, answer questions, leave.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::llm::RequestKind;
use crate::core::quiz::{Letter, QUIZ_FEEDBACK_DELAY, QuizState, SubmitOutcome};

use super::super::app::{App, QuizView};

pub(super) fn handle(key: KeyEvent, app: &mut App) -> Option<RequestKind> {
    match app.quiz_view.clone() {
        QuizView::Picker => return handle_picker(key, app),
        QuizView::Loading(_) | QuizView::Failed(_) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                app.reset_quiz_view();
            }
        }
        QuizView::Running => handle_running(key, app),
    }
    None
}

fn handle_picker(key: KeyEvent, app: &mut App) -> Option<RequestKind> {
    match key.code {
        KeyCode::Up => app.move_subject_selection(false),
        KeyCode::Down => app.move_subject_selection(true),
        KeyCode::Enter => {
            let subject = app.selected_subject()?;
            app.cancel_requests(|k| matches!(k, RequestKind::Quiz(_)));
            app.session.end_quiz();
            app.reset_quiz_question();
            log::info!("Generating quiz for {}", subject);
            app.quiz_view = QuizView::Loading(subject.clone());
            return Some(RequestKind::Quiz(subject));
        }
        _ => {}
    }
    None
}

fn handle_running(key: KeyEvent, app: &mut App) {
    let state = app.session.quiz().map(|q| q.state());
    match state {
        Some(QuizState::Asking(_)) => {}
        Some(QuizState::Complete) | None => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                app.reset_quiz_view();
            }
            return;
        }
        // Feedback is showing; only leaving is allowed.
        Some(_) => {
            if key.code == KeyCode::Esc {
                app.reset_quiz_view();
            }
            return;
        }
    }

    match key.code {
        KeyCode::Up => {
            app.quiz_selection = Some(app.quiz_selection.map_or(Letter::D, Letter::prev));
        }
        KeyCode::Down => {
            app.quiz_selection = Some(app.quiz_selection.map_or(Letter::A, Letter::next));
        }
        KeyCode::Char(c) => {
            if let Some(letter) = Letter::from_char(c) {
                app.quiz_selection = Some(letter);
                app.quiz_notice = None;
            }
        }
        KeyCode::Enter => submit(app),
        KeyCode::Esc => app.reset_quiz_view(),
        _ => {}
    }
}

fn submit(app: &mut App) {
    let selection = app.quiz_selection;
    let Some(quiz) = app.session.quiz_mut() else {
        return;
    };
    match quiz.submit(selection) {
        SubmitOutcome::NoSelection => {
            app.quiz_notice = Some("Please select an answer.".to_string());
        }
        SubmitOutcome::Graded(feedback) => {
            log::debug!("Graded answer: {}", feedback.message());
            app.quiz_notice = None;
            app.quiz_advance_at = Some(Instant::now() + QUIZ_FEEDBACK_DELAY);
        }
        SubmitOutcome::Ignored => {}
    }
}
