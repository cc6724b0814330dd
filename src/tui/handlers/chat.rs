//! Chat view keys: edit the input line, send, scroll the transcript.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::llm::RequestKind;

use super::super::app::{App, ScrollPosition};
use super::super::constants;

pub(super) fn handle(key: KeyEvent, app: &mut App) -> Option<RequestKind> {
    match key.code {
        KeyCode::Enter => {
            let sent = app.session.send_user_message(&app.input)?;
            app.input.clear();
            app.scroll = ScrollPosition::Bottom;
            return Some(RequestKind::Chat(sent.prompt));
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.push(c);
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Esc => app.input.clear(),
        KeyCode::Up => app.scroll_up(constants::SCROLL_LINES_SMALL),
        KeyCode::Down => app.scroll_down(constants::SCROLL_LINES_SMALL),
        KeyCode::PageUp => app.scroll_up(constants::SCROLL_LINES_PAGE),
        KeyCode::PageDown => app.scroll_down(constants::SCROLL_LINES_PAGE),
        KeyCode::End => app.scroll = ScrollPosition::Bottom,
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::super::test_keys::{press, type_text};
    use super::super::{Dispatch, dispatch_key};
    use crate::core::intent::Intent;
    use crate::core::llm::RequestKind;
    use crate::tui::app::App;
    use crossterm::event::KeyCode;

    #[test]
    fn enter_sends_trimmed_message_and_records_subject() {
        let mut app = App::new("m".into(), false);
        type_text(&mut app, " please explain physics ");
        let dispatch = dispatch_key(press(KeyCode::Enter), &mut app);
        assert_eq!(
            dispatch,
            Dispatch::Request(RequestKind::Chat("please explain physics".into()))
        );
        assert!(app.input.is_empty());
        assert_eq!(app.subjects(), vec!["Physics".to_string()]);
        let last = app.session.transcript().last().unwrap();
        assert_eq!(last.text, Intent::Explain.canned_reply());
    }

    #[test]
    fn empty_input_is_ignored() {
        let mut app = App::new("m".into(), false);
        type_text(&mut app, "   ");
        let before = app.session.transcript().len();
        assert_eq!(dispatch_key(press(KeyCode::Enter), &mut app), Dispatch::Handled);
        assert_eq!(app.session.transcript().len(), before);
    }

    #[test]
    fn backspace_edits_input() {
        let mut app = App::new("m".into(), false);
        type_text(&mut app, "mathz");
        dispatch_key(press(KeyCode::Backspace), &mut app);
        assert_eq!(app.input, "math");
    }
}
