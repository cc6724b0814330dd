//! Centralized keyboard shortcuts.
//!
//! Global keys (any view):
//!
//! | Action        | Keys                      |
//! |---------------|---------------------------|
//! | Next view     | Tab                       |
//! | Previous view | Shift+Tab                 |
//! | Chat          | F1                        |
//! | To-Do List    | F2                        |
//! | AI Quiz       | F3                        |
//! | Quit          | Ctrl+C                    |
//!
//! View keys are listed in the bottom bar (see `labels`).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::View;

/// Detected global shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    NextView,
    PrevView,
    Goto(View),
    Quit,
}

impl Shortcut {
    /// Returns the shortcut if the key matches one. Only key presses count.
    pub fn match_key(key: &KeyEvent) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::Quit)
            }
            KeyCode::BackTab => Some(Shortcut::PrevView),
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                Some(Shortcut::PrevView)
            }
            KeyCode::Tab => Some(Shortcut::NextView),
            KeyCode::F(1) => Some(Shortcut::Goto(View::Chat)),
            KeyCode::F(2) => Some(Shortcut::Goto(View::Todo)),
            KeyCode::F(3) => Some(Shortcut::Goto(View::Quiz)),
            _ => None,
        }
    }
}

/// Bottom bar hints per view and mode.
pub mod labels {
    use super::super::app::{QuizView, TodoView, View};

    pub fn bottom_bar(view: View, quiz: &QuizView, todo: &TodoView, adding_task: bool) -> String {
        let keys = match view {
            View::Chat => "Enter send  ↑↓ scroll",
            View::Quiz => match quiz {
                QuizView::Picker => "↑↓ subject  Enter start quiz",
                QuizView::Loading(_) => "Esc cancel",
                QuizView::Running => "↑↓/A-D choose  Enter submit  Esc quit quiz",
                QuizView::Failed(_) => "Esc back",
            },
            View::Todo => match todo {
                TodoView::Picker => "↑↓ subject  Enter open list",
                TodoView::Loading(_) => "Esc cancel",
                TodoView::List(_) if adding_task => "Enter add task  Esc cancel",
                TodoView::List(_) => "↑↓ task  Space toggle  a add  x remove  Esc back",
                TodoView::Failed(_) => "Esc back",
            },
        };
        format!("{}  │  Tab/F1-F3 switch view  Ctrl+C quit ", keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn match_quit_ctrl_c() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Shortcut::Quit)
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('c'), KeyModifiers::empty())),
            None
        );
    }

    #[test]
    fn tab_cycles_views() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Tab, KeyModifiers::empty())),
            Some(Shortcut::NextView)
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(Shortcut::PrevView)
        );
    }

    #[test]
    fn function_keys_jump_to_views() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::F(3), KeyModifiers::empty())),
            Some(Shortcut::Goto(View::Quiz))
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let mut k = key(KeyCode::Tab, KeyModifiers::empty());
        k.kind = KeyEventKind::Release;
        assert_eq!(Shortcut::match_key(&k), None);
    }

    #[test]
    fn bottom_bar_mentions_view_keys() {
        use super::super::app::{QuizView, TodoView};
        let bar = labels::bottom_bar(View::Todo, &QuizView::Picker, &TodoView::List("Art".into()), true);
        assert!(bar.contains("Enter add task"));
    }
}
