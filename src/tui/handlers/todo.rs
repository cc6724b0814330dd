//! To-do view keys: pick a subject, then check off, add, and remove tasks.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::llm::RequestKind;

use super::super::app::{App, TodoView, step_index};

pub(super) fn handle(key: KeyEvent, app: &mut App) -> Option<RequestKind> {
    match app.todo_view.clone() {
        TodoView::Picker => return handle_picker(key, app),
        TodoView::Loading(_) | TodoView::Failed(_) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                app.reset_todo_view();
            }
        }
        TodoView::List(subject) => {
            if app.todo_input.is_some() {
                handle_new_task(key, app, &subject);
            } else {
                handle_list(key, app, &subject);
            }
        }
    }
    None
}

fn handle_picker(key: KeyEvent, app: &mut App) -> Option<RequestKind> {
    match key.code {
        KeyCode::Up => app.move_subject_selection(false),
        KeyCode::Down => app.move_subject_selection(true),
        KeyCode::Enter => {
            let subject = app.selected_subject()?;
            app.todo_index = 0;
            if app.session.needs_todo_generation(&subject) {
                app.cancel_requests(|k| matches!(k, RequestKind::Todo(_)));
                log::info!("Generating to-do list for {}", subject);
                app.todo_view = TodoView::Loading(subject.clone());
                return Some(RequestKind::Todo(subject));
            }
            app.todo_view = TodoView::List(subject);
        }
        _ => {}
    }
    None
}

fn handle_list(key: KeyEvent, app: &mut App, subject: &str) {
    let count = app.session.todo_list(subject).len();
    match key.code {
        KeyCode::Up => app.todo_index = step_index(app.todo_index, count, false),
        KeyCode::Down => app.todo_index = step_index(app.todo_index, count, true),
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.session.toggle_todo(subject, app.todo_index);
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            if app.session.remove_todo(subject, app.todo_index).is_some() {
                app.todo_index = app.todo_index.min(count.saturating_sub(2));
            }
        }
        KeyCode::Char('a') => app.todo_input = Some(String::new()),
        KeyCode::Esc => app.reset_todo_view(),
        _ => {}
    }
}

fn handle_new_task(key: KeyEvent, app: &mut App, subject: &str) {
    let Some(input) = app.todo_input.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.push(c),
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Enter => {
            let text = std::mem::take(input);
            app.todo_input = None;
            if app.session.add_todo(subject, &text) {
                app.todo_index = app.session.todo_list(subject).len() - 1;
            }
        }
        KeyCode::Esc => app.todo_input = None,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_keys::{press, type_text};
    use super::super::{Dispatch, dispatch_key};
    use crate::core::llm::RequestKind;
    use crate::tui::app::{App, TodoView, View};
    use crossterm::event::KeyCode;

    fn app_with_subject() -> App {
        let mut app = App::new("m".into(), false);
        app.session.send_user_message("physics");
        app.switch_view(View::Todo);
        app
    }

    #[test]
    fn first_visit_requests_generation() {
        let mut app = app_with_subject();
        let dispatch = dispatch_key(press(KeyCode::Enter), &mut app);
        assert_eq!(dispatch, Dispatch::Request(RequestKind::Todo("Physics".into())));
        assert_eq!(app.todo_view, TodoView::Loading("Physics".into()));
    }

    #[test]
    fn existing_list_opens_without_request() {
        let mut app = app_with_subject();
        app.session.set_generated_todos("Physics", "Read\nPractice");
        assert_eq!(dispatch_key(press(KeyCode::Enter), &mut app), Dispatch::Handled);
        assert_eq!(app.todo_view, TodoView::List("Physics".into()));
    }

    #[test]
    fn toggle_remove_and_add() {
        let mut app = app_with_subject();
        app.session.set_generated_todos("Physics", "Read\nPractice\nReview");
        app.todo_view = TodoView::List("Physics".into());

        dispatch_key(press(KeyCode::Char(' ')), &mut app);
        assert!(app.session.todo_list("Physics")[0].done);

        dispatch_key(press(KeyCode::Down), &mut app);
        dispatch_key(press(KeyCode::Down), &mut app);
        dispatch_key(press(KeyCode::Char('x')), &mut app);
        assert_eq!(app.session.todo_list("Physics").len(), 2);
        assert_eq!(app.todo_index, 1);

        dispatch_key(press(KeyCode::Char('a')), &mut app);
        type_text(&mut app, "Flashcards");
        dispatch_key(press(KeyCode::Enter), &mut app);
        let tasks = app.session.todo_list("Physics");
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[2].description, "Flashcards");
        assert_eq!(app.todo_index, 2);
        assert!(app.todo_input.is_none());
    }

    #[test]
    fn typing_x_while_adding_does_not_remove() {
        let mut app = app_with_subject();
        app.session.set_generated_todos("Physics", "Read");
        app.todo_view = TodoView::List("Physics".into());
        dispatch_key(press(KeyCode::Char('a')), &mut app);
        type_text(&mut app, "x");
        assert_eq!(app.todo_input.as_deref(), Some("x"));
        assert_eq!(app.session.todo_list("Physics").len(), 1);
    }

    #[test]
    fn esc_returns_to_picker() {
        let mut app = app_with_subject();
        app.todo_view = TodoView::List("Physics".into());
        dispatch_key(press(KeyCode::Esc), &mut app);
        assert_eq!(app.todo_view, TodoView::Picker);
    }
}
